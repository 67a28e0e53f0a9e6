use crate::error::Result;
use crate::sql::{QueryResult, TableInfo};
use comfy_table::{presets::UTF8_FULL_CONDENSED, ContentArrangement, Table};
use serde_json::Value;
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum, Default)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    Jsonl,
    Csv,
}

/// Renders query results and table listings to a writer.
pub struct OutputWriter<W: Write> {
    writer: W,
    format: OutputFormat,
}

impl<W: Write> OutputWriter<W> {
    pub fn new(writer: W, format: OutputFormat) -> Self {
        Self { writer, format }
    }

    pub fn write_result(&mut self, result: &QueryResult, show_header: bool) -> Result<()> {
        match self.format {
            OutputFormat::Json => {
                let json = serde_json::to_string_pretty(&result.to_json_array())?;
                writeln!(self.writer, "{}", json)?;
            }
            OutputFormat::Jsonl => {
                for row in result.to_json_array() {
                    writeln!(self.writer, "{}", serde_json::to_string(&row)?)?;
                }
            }
            OutputFormat::Csv => {
                let mut csv = csv::Writer::from_writer(&mut self.writer);
                if show_header {
                    csv.write_record(&result.columns)?;
                }
                for row in &result.rows {
                    csv.write_record(row.iter().map(cell_text))?;
                }
                csv.flush()?;
            }
            OutputFormat::Table => {
                if result.is_empty() {
                    writeln!(self.writer, "No results")?;
                    return Ok(());
                }
                let mut table = create_table();
                if show_header {
                    table.set_header(&result.columns);
                }
                for row in &result.rows {
                    table.add_row(row.iter().map(cell_text));
                }
                writeln!(self.writer, "{}", table)?;
            }
        }
        Ok(())
    }

    pub fn write_tables(&mut self, tables: &[TableInfo]) -> Result<()> {
        for info in tables {
            writeln!(self.writer, "{:<10} {}", info.name, info.description)?;
            for (i, column) in info.columns.iter().enumerate() {
                let branch = if i + 1 == info.columns.len() { "└──" } else { "├──" };
                writeln!(
                    self.writer,
                    "  {} {:<16} {:<8} {}",
                    branch, column.name, column.sql_type, column.description
                )?;
            }
            writeln!(self.writer)?;
        }
        Ok(())
    }
}

fn create_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

fn cell_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sql::TABLES;

    fn sample() -> QueryResult {
        QueryResult {
            columns: vec!["short_hash".into(), "parent_count".into()],
            rows: vec![
                vec![Value::from("abc1234"), Value::from(0)],
                vec![Value::from("def5678"), Value::Null],
            ],
        }
    }

    fn render(format: OutputFormat, show_header: bool) -> String {
        let mut buf = Vec::new();
        OutputWriter::new(&mut buf, format)
            .write_result(&sample(), show_header)
            .unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_csv_output() {
        assert_eq!(
            render(OutputFormat::Csv, true),
            "short_hash,parent_count\nabc1234,0\ndef5678,\n"
        );
        assert_eq!(render(OutputFormat::Csv, false), "abc1234,0\ndef5678,\n");
    }

    #[test]
    fn test_jsonl_output() {
        let out = render(OutputFormat::Jsonl, true);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 2);
        let first: Value = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(first["short_hash"], "abc1234");
    }

    #[test]
    fn test_json_output() {
        let parsed: Value = serde_json::from_str(&render(OutputFormat::Json, true)).unwrap();
        assert_eq!(parsed.as_array().map(Vec::len), Some(2));
    }

    #[test]
    fn test_table_output() {
        let out = render(OutputFormat::Table, true);
        assert!(out.contains("short_hash"));
        assert!(out.contains("def5678"));
    }

    #[test]
    fn test_empty_table_output() {
        let mut buf = Vec::new();
        let empty = QueryResult {
            columns: vec!["a".into()],
            rows: vec![],
        };
        OutputWriter::new(&mut buf, OutputFormat::Table)
            .write_result(&empty, true)
            .unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "No results\n");
    }

    #[test]
    fn test_write_tables() {
        let mut buf = Vec::new();
        OutputWriter::new(&mut buf, OutputFormat::Table)
            .write_tables(TABLES)
            .unwrap();
        let out = String::from_utf8(buf).unwrap();
        assert!(out.contains("commits"));
        assert!(out.contains("author_email"));
    }
}
