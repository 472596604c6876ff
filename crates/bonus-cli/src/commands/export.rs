use clap::{Args, ValueEnum};
use serde_json::{json, Value};
use std::fs;

use crate::render;
use crate::store;

#[derive(Debug, Clone, ValueEnum)]
pub enum ExportFormat {
    Html,
    Csv,
}

/// Arguments for exporting a saved record
#[derive(Args)]
pub struct ExportArgs {
    /// Record id (see `rmb history`)
    #[arg(long)]
    pub id: String,

    /// Export format
    #[arg(long, default_value = "html")]
    pub format: ExportFormat,

    /// Output file path (default: record-<id>.<ext>)
    #[arg(long)]
    pub out: Option<String>,
}

pub fn run_export(args: ExportArgs, store_path: &str) -> Result<Value, Box<dyn std::error::Error>> {
    let record = store::find(store_path, &args.id)?;

    let (contents, extension) = match args.format {
        ExportFormat::Html => (render::record_html(&record), "html"),
        ExportFormat::Csv => (render::record_csv(&record)?, "csv"),
    };

    let path = args
        .out
        .unwrap_or_else(|| format!("record-{}.{extension}", args.id));
    fs::write(&path, &contents).map_err(|e| format!("Failed to write '{path}': {e}"))?;

    Ok(json!({
        "exported": args.id,
        "format": extension,
        "path": path,
        "bytes": contents.len(),
    }))
}
