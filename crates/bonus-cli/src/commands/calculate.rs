use clap::Args;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use bonus_core::evaluate::{evaluate, EvaluationInput};
use bonus_core::{grades, BonusError, FinancialMetrics, NonFinancialMetrics};

use super::targets::nnm_policy;
use crate::input;
use crate::store::{self, CalculationRecord};

/// Arguments for a full bonus calculation
#[derive(Args)]
pub struct CalculateArgs {
    /// Path to a JSON file with the calculation request
    #[arg(long)]
    pub input: Option<String>,

    /// Grade name (see `rmb grades` for the known set)
    #[arg(long)]
    pub grade: Option<String>,

    /// Recognition ratio as a percentage, 0-100
    #[arg(long, default_value = "100")]
    pub ratio: Decimal,

    /// Read the grade's NNM figure as monthly and triple it
    #[arg(long)]
    pub nnm_tripled: bool,

    /// Quarterly investment fee income
    #[arg(long, default_value = "0")]
    pub investment_income: Decimal,

    /// Quarterly insurance fee income
    #[arg(long, default_value = "0")]
    pub insurance_income: Decimal,

    /// Client-activity count
    #[arg(long, default_value = "0")]
    pub ca: Decimal,

    /// Net new money inflow
    #[arg(long, default_value = "0")]
    pub nnm: Decimal,

    /// Wealth-penetration count
    #[arg(long, default_value = "0")]
    pub wealth_penetration: Decimal,

    /// Risk incident count (0 = clean quarter)
    #[arg(long, default_value = "0")]
    pub risk: Decimal,

    /// Quality incident count (0 = clean quarter)
    #[arg(long, default_value = "0")]
    pub quality: Decimal,

    /// Complaint count (0 = clean quarter)
    #[arg(long, default_value = "0")]
    pub complaint: Decimal,

    /// Client appointments held (target: 3)
    #[arg(long, default_value = "0")]
    pub client_appointment: Decimal,

    /// Net promoter score, 0-100
    #[arg(long, default_value = "0")]
    pub nps: Decimal,

    /// Append the result to the calculation history
    #[arg(long)]
    pub save: bool,
}

/// File/stdin request shape. Omitted metric fields default to zero, the
/// boundary contract the engine assumes for unfilled form fields.
#[derive(Debug, Serialize, Deserialize)]
struct CalculateRequest {
    grade: String,
    #[serde(default = "default_ratio")]
    recognition_ratio: Decimal,
    #[serde(default)]
    nnm_tripled: bool,
    #[serde(default)]
    financial: FinancialMetrics,
    #[serde(default)]
    non_financial: NonFinancialMetrics,
}

fn default_ratio() -> Decimal {
    dec!(100)
}

fn request_from_args(args: &CalculateArgs) -> Result<CalculateRequest, Box<dyn std::error::Error>> {
    if let Some(ref path) = args.input {
        return input::file::read_json(path);
    }
    if args.grade.is_none() {
        if let Some(piped) = input::stdin::read_stdin()? {
            return Ok(serde_json::from_value(piped)?);
        }
    }

    let grade = args
        .grade
        .clone()
        .ok_or("Provide --grade, or --input file, or pipe a JSON request via stdin")?;

    Ok(CalculateRequest {
        grade,
        recognition_ratio: args.ratio,
        nnm_tripled: args.nnm_tripled,
        financial: FinancialMetrics {
            investment_income: args.investment_income,
            insurance_income: args.insurance_income,
            ca: args.ca,
            nnm: args.nnm,
            wealth_penetration: args.wealth_penetration,
        },
        non_financial: NonFinancialMetrics {
            risk: args.risk,
            quality: args.quality,
            complaint: args.complaint,
            client_appointment: args.client_appointment,
            nps: args.nps,
        },
    })
}

pub fn run_calculate(
    args: CalculateArgs,
    store_path: &str,
) -> Result<Value, Box<dyn std::error::Error>> {
    let request = request_from_args(&args)?;

    let profile = grades::find(&request.grade).ok_or_else(|| BonusError::UnknownGrade {
        name: request.grade.clone(),
    })?;

    let eval_input = EvaluationInput {
        profile: profile.clone(),
        recognition_ratio_pct: request.recognition_ratio,
        nnm_policy: nnm_policy(request.nnm_tripled),
        financial: request.financial.clone(),
        non_financial: request.non_financial.clone(),
    };

    let output = evaluate(&eval_input)?;

    if args.save {
        let record = CalculationRecord::new(
            &request.grade,
            request.recognition_ratio,
            request.financial,
            request.non_financial,
            &output.result.bonus,
        );
        store::append(store_path, record)?;
    }

    Ok(serde_json::to_value(output)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn form_style_request_fills_omitted_fields_with_zero() {
        // A form submission only carries the fields the user touched.
        let request: CalculateRequest =
            serde_json::from_str(r#"{"grade":"Assoc","financial":{"ca":"3"}}"#).unwrap();

        assert_eq!(request.grade, "Assoc");
        assert_eq!(request.recognition_ratio, dec!(100));
        assert!(!request.nnm_tripled);
        assert_eq!(request.financial.ca, dec!(3));
        assert_eq!(request.financial.investment_income, dec!(0));
        assert_eq!(request.financial.nnm, dec!(0));
        assert_eq!(request.non_financial.nps, dec!(0));
    }

    #[test]
    fn bare_grade_request_is_all_zeros() {
        let request: CalculateRequest = serde_json::from_str(r#"{"grade":"VP"}"#).unwrap();
        assert_eq!(request.financial, FinancialMetrics::default());
        assert_eq!(request.non_financial, NonFinancialMetrics::default());
    }
}
