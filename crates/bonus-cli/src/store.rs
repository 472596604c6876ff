//! Local calculation history: a flat JSON array file, newest record first.
//!
//! Identity and timestamps are assigned here when a record is saved; the
//! engine itself never sees them. A missing store file reads as an empty
//! history rather than an error.

use bonus_core::{BonusResult, FinancialMetrics, NonFinancialMetrics};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// One saved calculation: the engine result plus the inputs that produced it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculationRecord {
    /// Millisecond timestamp at save time, as a string.
    pub id: String,
    pub saved_at: DateTime<Utc>,
    pub grade: String,
    pub recognition_ratio: Decimal,
    pub financial_metrics: FinancialMetrics,
    pub non_financial_metrics: NonFinancialMetrics,
    pub financial_score: Decimal,
    pub non_financial_score: Decimal,
    pub final_bonus: Decimal,
    pub penalties: Vec<String>,
}

impl CalculationRecord {
    /// Stamp a new record from engine output. Called once, at save time.
    pub fn new(
        grade: &str,
        recognition_ratio: Decimal,
        financial_metrics: FinancialMetrics,
        non_financial_metrics: NonFinancialMetrics,
        bonus: &BonusResult,
    ) -> Self {
        let now = Utc::now();
        CalculationRecord {
            id: now.timestamp_millis().to_string(),
            saved_at: now,
            grade: grade.to_string(),
            recognition_ratio,
            financial_metrics,
            non_financial_metrics,
            financial_score: bonus.financial_score,
            non_financial_score: bonus.non_financial_score,
            final_bonus: bonus.final_bonus,
            penalties: bonus.penalties.clone(),
        }
    }
}

/// Load all records. A missing file is an empty history.
pub fn load(path: &str) -> Result<Vec<CalculationRecord>, Box<dyn std::error::Error>> {
    if !Path::new(path).exists() {
        return Ok(Vec::new());
    }
    let contents = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read store '{path}': {e}"))?;
    if contents.trim().is_empty() {
        return Ok(Vec::new());
    }
    let records: Vec<CalculationRecord> = serde_json::from_str(&contents)
        .map_err(|e| format!("Store '{path}' is not a valid record list: {e}"))?;
    Ok(records)
}

fn save_all(path: &str, records: &[CalculationRecord]) -> Result<(), Box<dyn std::error::Error>> {
    let contents = serde_json::to_string_pretty(records)?;
    fs::write(path, contents).map_err(|e| format!("Failed to write store '{path}': {e}"))?;
    Ok(())
}

/// Prepend a record to the history and persist it.
pub fn append(path: &str, record: CalculationRecord) -> Result<(), Box<dyn std::error::Error>> {
    let mut records = load(path)?;
    records.insert(0, record);
    save_all(path, &records)
}

/// Find one record by id.
pub fn find(path: &str, id: &str) -> Result<CalculationRecord, Box<dyn std::error::Error>> {
    load(path)?
        .into_iter()
        .find(|r| r.id == id)
        .ok_or_else(|| format!("No record with id '{id}' in store '{path}'").into())
}

/// Delete one record by id. Errors if the id is unknown.
pub fn delete(path: &str, id: &str) -> Result<(), Box<dyn std::error::Error>> {
    let records = load(path)?;
    let before = records.len();
    let remaining: Vec<CalculationRecord> = records.into_iter().filter(|r| r.id != id).collect();
    if remaining.len() == before {
        return Err(format!("No record with id '{id}' in store '{path}'").into());
    }
    save_all(path, &remaining)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn sample_record(id: &str) -> CalculationRecord {
        CalculationRecord {
            id: id.to_string(),
            saved_at: Utc::now(),
            grade: "Assoc".to_string(),
            recognition_ratio: dec!(100),
            financial_metrics: FinancialMetrics::default(),
            non_financial_metrics: NonFinancialMetrics::default(),
            financial_score: dec!(100.00),
            non_financial_score: dec!(105.00),
            final_bonus: dec!(97020),
            penalties: vec![],
        }
    }

    fn temp_store() -> (tempfile::TempDir, String) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("records.json").to_string_lossy().into_owned();
        (dir, path)
    }

    #[test]
    fn missing_store_reads_as_empty() {
        let (_dir, path) = temp_store();
        assert!(load(&path).unwrap().is_empty());
    }

    #[test]
    fn append_prepends_newest_record() {
        let (_dir, path) = temp_store();
        append(&path, sample_record("1")).unwrap();
        append(&path, sample_record("2")).unwrap();

        let records = load(&path).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].id, "2");
        assert_eq!(records[1].id, "1");
    }

    #[test]
    fn find_and_delete_round_trip() {
        let (_dir, path) = temp_store();
        append(&path, sample_record("42")).unwrap();

        let found = find(&path, "42").unwrap();
        assert_eq!(found.grade, "Assoc");
        assert_eq!(found.final_bonus, dec!(97020));

        delete(&path, "42").unwrap();
        assert!(load(&path).unwrap().is_empty());
        assert!(find(&path, "42").is_err());
        assert!(delete(&path, "42").is_err());
    }
}
