use crate::cli::OutputFormat;
use std::path::PathBuf;

/// Settings for a single `query` invocation.
#[derive(Debug, Clone)]
pub struct QueryConfig {
    /// Where to start looking for the repository; empty means the working directory.
    pub path: PathBuf,
    pub format: OutputFormat,
    pub show_header: bool,
    /// Suppress progress lines on stderr.
    pub quiet: bool,
}

impl QueryConfig {
    pub fn new(path: Option<PathBuf>) -> Self {
        Self {
            path: path.unwrap_or_default(),
            format: OutputFormat::default(),
            show_header: true,
            quiet: false,
        }
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    pub fn with_header(mut self, show_header: bool) -> Self {
        self.show_header = show_header;
        self
    }

    pub fn quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_path_means_working_directory() {
        let config = QueryConfig::new(None);
        assert!(config.path.as_os_str().is_empty());
        assert!(config.show_header);
        assert_eq!(config.format, OutputFormat::Table);
    }
}
