//! Record rendering for export: a self-contained HTML report and flat CSV.

use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use std::fmt::Write as _;

use crate::store::CalculationRecord;

/// Final bonus as a percentage of the quarter's total fee income, 2 dp.
/// Zero income reads as a 0.00 ratio rather than a division error.
fn disbursal_ratio(record: &CalculationRecord) -> Decimal {
    let total_income =
        record.financial_metrics.investment_income + record.financial_metrics.insurance_income;
    if total_income <= Decimal::ZERO {
        return dec!(0.00);
    }
    (record.final_bonus / total_income * dec!(100))
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Render a record as a standalone HTML report.
pub fn record_html(record: &CalculationRecord) -> String {
    let fin = &record.financial_metrics;
    let non_fin = &record.non_financial_metrics;
    let total_income = fin.investment_income + fin.insurance_income;

    let mut html = String::new();
    html.push_str(
        "<!DOCTYPE html>\n<html>\n<head>\n  <meta charset=\"UTF-8\">\n  <style>\n    \
         body { font-family: Arial, sans-serif; margin: 20px; }\n    \
         h1 { color: #C41E3A; text-align: center; }\n    \
         .section { margin: 20px 0; }\n    \
         .section-title { font-weight: bold; font-size: 16px; color: #C41E3A; margin-top: 15px; }\n    \
         table { width: 100%; border-collapse: collapse; margin-top: 10px; }\n    \
         th, td { border: 1px solid #ddd; padding: 8px; text-align: left; }\n    \
         th { background-color: #f2f2f2; }\n    \
         .result { background-color: #f9f9f9; padding: 15px; border-radius: 5px; }\n    \
         .penalty { color: #FF3B30; margin: 5px 0; }\n  </style>\n</head>\n<body>\n",
    );
    html.push_str("  <h1>RM Quarterly Bonus Record</h1>\n");

    let _ = write!(
        html,
        "  <div class=\"section\">\n    <div class=\"section-title\">Basics</div>\n    <table>\n      \
         <tr><td>Grade</td><td>{}</td></tr>\n      \
         <tr><td>Recognition ratio</td><td>{}%</td></tr>\n      \
         <tr><td>Saved</td><td>{}</td></tr>\n    </table>\n  </div>\n",
        record.grade,
        record.recognition_ratio,
        record.saved_at.to_rfc3339(),
    );

    let _ = write!(
        html,
        "  <div class=\"section\">\n    <div class=\"section-title\">Financial metrics</div>\n    <table>\n      \
         <tr><th>Metric</th><th>Actual</th></tr>\n      \
         <tr><td>Investment income</td><td>{}</td></tr>\n      \
         <tr><td>Insurance income</td><td>{}</td></tr>\n      \
         <tr><td>Total income</td><td>{}</td></tr>\n      \
         <tr><td>CA</td><td>{}</td></tr>\n      \
         <tr><td>NNM</td><td>{}</td></tr>\n      \
         <tr><td>Wealth penetration</td><td>{}</td></tr>\n    </table>\n    \
         <p><strong>Financial score: {}%</strong></p>\n  </div>\n",
        fin.investment_income,
        fin.insurance_income,
        total_income,
        fin.ca,
        fin.nnm,
        fin.wealth_penetration,
        record.financial_score,
    );

    let _ = write!(
        html,
        "  <div class=\"section\">\n    <div class=\"section-title\">Non-financial metrics</div>\n    <table>\n      \
         <tr><th>Metric</th><th>Actual</th></tr>\n      \
         <tr><td>Risk</td><td>{}</td></tr>\n      \
         <tr><td>Quality</td><td>{}</td></tr>\n      \
         <tr><td>Complaint</td><td>{}</td></tr>\n      \
         <tr><td>Client appointment</td><td>{}</td></tr>\n      \
         <tr><td>NPS</td><td>{}</td></tr>\n    </table>\n    \
         <p><strong>Non-financial score: {}%</strong></p>\n  </div>\n",
        non_fin.risk,
        non_fin.quality,
        non_fin.complaint,
        non_fin.client_appointment,
        non_fin.nps,
        record.non_financial_score,
    );

    let _ = write!(
        html,
        "  <div class=\"result\">\n    <div class=\"section-title\">Bonus</div>\n    \
         <p><strong>Final bonus:</strong> ${}</p>\n    \
         <p><strong>Disbursal ratio:</strong> {}%</p>\n",
        record.final_bonus,
        disbursal_ratio(record),
    );
    if !record.penalties.is_empty() {
        html.push_str("    <div><strong>Applied penalties:</strong>\n");
        for penalty in &record.penalties {
            let _ = write!(html, "      <div class=\"penalty\">• {penalty}</div>\n");
        }
        html.push_str("    </div>\n");
    }
    html.push_str("  </div>\n</body>\n</html>\n");

    html
}

/// Render a record as two-column CSV rows (field, value).
pub fn record_csv(record: &CalculationRecord) -> Result<String, Box<dyn std::error::Error>> {
    let fin = &record.financial_metrics;
    let non_fin = &record.non_financial_metrics;
    let total_income = fin.investment_income + fin.insurance_income;

    let mut wtr = csv::Writer::from_writer(Vec::new());
    wtr.write_record(["field", "value"])?;
    wtr.write_record(["id", &record.id])?;
    wtr.write_record(["saved_at", &record.saved_at.to_rfc3339()])?;
    wtr.write_record(["grade", &record.grade])?;
    wtr.write_record(["recognition_ratio", &record.recognition_ratio.to_string()])?;
    wtr.write_record(["investment_income", &fin.investment_income.to_string()])?;
    wtr.write_record(["insurance_income", &fin.insurance_income.to_string()])?;
    wtr.write_record(["total_income", &total_income.to_string()])?;
    wtr.write_record(["ca", &fin.ca.to_string()])?;
    wtr.write_record(["nnm", &fin.nnm.to_string()])?;
    wtr.write_record(["wealth_penetration", &fin.wealth_penetration.to_string()])?;
    wtr.write_record(["risk", &non_fin.risk.to_string()])?;
    wtr.write_record(["quality", &non_fin.quality.to_string()])?;
    wtr.write_record(["complaint", &non_fin.complaint.to_string()])?;
    wtr.write_record(["client_appointment", &non_fin.client_appointment.to_string()])?;
    wtr.write_record(["nps", &non_fin.nps.to_string()])?;
    wtr.write_record(["financial_score", &record.financial_score.to_string()])?;
    wtr.write_record(["non_financial_score", &record.non_financial_score.to_string()])?;
    wtr.write_record(["final_bonus", &record.final_bonus.to_string()])?;
    wtr.write_record(["disbursal_ratio", &disbursal_ratio(record).to_string()])?;
    wtr.write_record(["penalties", &record.penalties.join("; ")])?;

    let bytes = wtr.into_inner()?;
    Ok(String::from_utf8(bytes)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use bonus_core::{FinancialMetrics, NonFinancialMetrics};
    use chrono::Utc;
    use rust_decimal_macros::dec;

    fn sample_record() -> CalculationRecord {
        CalculationRecord {
            id: "1700000000000".to_string(),
            saved_at: Utc::now(),
            grade: "Assoc".to_string(),
            recognition_ratio: dec!(100),
            financial_metrics: FinancialMetrics {
                investment_income: dec!(825000),
                insurance_income: dec!(825000),
                ca: dec!(12),
                nnm: dec!(4000000),
                wealth_penetration: dec!(6),
            },
            non_financial_metrics: NonFinancialMetrics {
                risk: dec!(0),
                quality: dec!(0),
                complaint: dec!(0),
                client_appointment: dec!(3),
                nps: dec!(100),
            },
            financial_score: dec!(100.00),
            non_financial_score: dec!(105.00),
            final_bonus: dec!(97020),
            penalties: vec![],
        }
    }

    #[test]
    fn disbursal_ratio_is_bonus_over_income() {
        // 97020 / 1650000 * 100 = 5.88
        assert_eq!(disbursal_ratio(&sample_record()), dec!(5.88));
    }

    #[test]
    fn disbursal_ratio_zero_income() {
        let mut record = sample_record();
        record.financial_metrics.investment_income = dec!(0);
        record.financial_metrics.insurance_income = dec!(0);
        assert_eq!(disbursal_ratio(&record), dec!(0.00));
    }

    #[test]
    fn html_report_contains_key_figures() {
        let html = record_html(&sample_record());
        assert!(html.contains("Assoc"));
        assert!(html.contains("$97020"));
        assert!(html.contains("5.88%"));
        assert!(!html.contains("Applied penalties"));
    }

    #[test]
    fn html_report_lists_penalties() {
        let mut record = sample_record();
        record.penalties = vec!["total income below performance target (-50%)".to_string()];
        let html = record_html(&record);
        assert!(html.contains("Applied penalties"));
        assert!(html.contains("total income below performance target"));
    }

    #[test]
    fn csv_has_field_value_rows() {
        let csv_text = record_csv(&sample_record()).unwrap();
        assert!(csv_text.starts_with("field,value\n"));
        assert!(csv_text.contains("final_bonus,97020"));
        assert!(csv_text.contains("grade,Assoc"));
    }
}
