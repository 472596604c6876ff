use clap::Args;
use serde_json::{json, Value};

use crate::store;

/// Arguments for showing one record
#[derive(Args)]
pub struct ShowArgs {
    /// Record id (see `rmb history`)
    #[arg(long)]
    pub id: String,
}

/// Arguments for deleting one record
#[derive(Args)]
pub struct DeleteArgs {
    /// Record id (see `rmb history`)
    #[arg(long)]
    pub id: String,
}

/// List saved records, newest first, one summary row per record.
pub fn run_history(store_path: &str) -> Result<Value, Box<dyn std::error::Error>> {
    let records = store::load(store_path)?;
    let rows: Vec<Value> = records
        .iter()
        .map(|r| {
            json!({
                "id": r.id,
                "saved_at": r.saved_at.to_rfc3339(),
                "grade": r.grade,
                "recognition_ratio": r.recognition_ratio,
                "financial_score": r.financial_score,
                "non_financial_score": r.non_financial_score,
                "final_bonus": r.final_bonus,
                "penalties": r.penalties.len(),
            })
        })
        .collect();
    Ok(Value::Array(rows))
}

pub fn run_show(args: ShowArgs, store_path: &str) -> Result<Value, Box<dyn std::error::Error>> {
    let record = store::find(store_path, &args.id)?;
    Ok(serde_json::to_value(record)?)
}

pub fn run_delete(args: DeleteArgs, store_path: &str) -> Result<Value, Box<dyn std::error::Error>> {
    store::delete(store_path, &args.id)?;
    Ok(json!({ "deleted": args.id }))
}
