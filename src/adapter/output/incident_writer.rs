//! # Incident Writer
//!
//! インシデント行を CSV または plain 形式で書き込む

use anyhow::{Context, Result};
use csv::{Terminator, WriterBuilder};
use std::io::Write;

use crate::application::dto::export_request::OutputFormat;
use crate::domain::entities::incident::IncidentRow;
use crate::domain::repositories::incident_sink::IncidentSink;

/// インシデント行の書き込み先
pub enum IncidentWriter<W: Write> {
    /// ヘッダーなしCSV
    Csv(csv::Writer<W>),
    /// スペース区切り
    Plain(W),
}

impl<W: Write> IncidentWriter<W> {
    pub fn new(inner: W, format: OutputFormat) -> Self {
        match format {
            OutputFormat::Csv => IncidentWriter::Csv(
                WriterBuilder::new()
                    .has_headers(false)
                    .terminator(line_terminator())
                    .from_writer(inner),
            ),
            OutputFormat::Plain => IncidentWriter::Plain(inner),
        }
    }
}

/// CRLF on Windows, LF elsewhere
fn line_terminator() -> Terminator {
    if cfg!(windows) {
        Terminator::CRLF
    } else {
        Terminator::Any(b'\n')
    }
}

/// 複数行のフィールドを ` | ` 区切りの1行にする
fn single_line(field: &str) -> String {
    field.lines().collect::<Vec<_>>().join(NOTE_SEPARATOR)
}

const NOTE_SEPARATOR: &str = " | ";

impl<W: Write> IncidentSink for IncidentWriter<W> {
    fn write_row(&mut self, row: &IncidentRow) -> Result<()> {
        match self {
            IncidentWriter::Csv(writer) => writer
                .write_record(row.fields())
                .context("Failed to write CSV row"),
            IncidentWriter::Plain(writer) => {
                let fields: Vec<String> = row.fields().iter().map(|f| single_line(f)).collect();
                writeln!(writer, "{}", fields.join(" ")).context("Failed to write row")
            }
        }
    }

    fn finish(&mut self) -> Result<()> {
        match self {
            IncidentWriter::Csv(writer) => writer.flush(),
            IncidentWriter::Plain(writer) => writer.flush(),
        }
        .context("Failed to flush output")
    }
}
