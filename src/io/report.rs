use anyhow::Result;
use serde::Serialize;
use std::io::Write;

use crate::screen::rank::RankedCollection;

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ReportFormat {
    /// One `name->percent%` line per disease
    Text,
    /// Pretty-printed JSON document with run metadata
    Json,
}

/// Run metadata carried alongside the ranking in JSON output.
#[derive(Debug, Clone, Serialize)]
pub struct ReportMeta {
    pub generated_at: String,
    pub min_match_len: usize,
    pub reference_len: usize,
    pub states: usize,
}

impl ReportMeta {
    pub fn now(min_match_len: usize, reference_len: usize, states: usize) -> Self {
        Self {
            generated_at: chrono::Utc::now().to_rfc3339(),
            min_match_len,
            reference_len,
            states,
        }
    }
}

#[derive(Serialize)]
struct JsonReport<'a> {
    #[serde(flatten)]
    meta: &'a ReportMeta,
    results: &'a [RankedCollection],
}

pub fn write_text<W: Write>(out: &mut W, results: &[RankedCollection]) -> Result<()> {
    for r in results {
        writeln!(out, "{}->{}%", r.name, r.percent)?;
    }
    Ok(())
}

pub fn write_json<W: Write>(out: &mut W, meta: &ReportMeta, results: &[RankedCollection]) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, &JsonReport { meta, results })?;
    writeln!(out)?;
    Ok(())
}

pub fn write_report<W: Write>(
    out: &mut W,
    format: ReportFormat,
    meta: &ReportMeta,
    results: &[RankedCollection],
) -> Result<()> {
    match format {
        ReportFormat::Text => write_text(out, results),
        ReportFormat::Json => write_json(out, meta, results),
    }
}
