use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// All monetary values. Wraps Decimal to prevent accidental f64 usage.
pub type Money = Decimal;

/// Percentages on a 0–100 scale (100 = full achievement). Never pre-divided.
pub type Pct = Decimal;

/// Round to the nearest integer, halves away from zero.
pub fn round0(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}

/// Round to two decimal places, halves away from zero.
pub fn round2(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Base targets for one job grade. Static data, never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GradeProfile {
    pub name: String,
    /// QTI: the grade's maximum quarterly bonus before score multipliers.
    pub bonus_base: Money,
    /// Monthly fee-income performance target.
    pub monthly_target: Money,
    /// Net-new-money target, expressed as the quarterly figure.
    pub nnm_target: Money,
    /// Client-activity count target (per quarter, pre-ratio and pre-tripling).
    pub ca_target: Decimal,
    /// Wealth-penetration count target (monthly figure).
    pub wealth_penetration_target: Decimal,
}

/// Financial actuals for one evaluation quarter.
///
/// Fields omitted from a serialized request default to zero, the same
/// contract the form boundary applies to unfilled inputs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FinancialMetrics {
    pub investment_income: Money,
    pub insurance_income: Money,
    pub ca: Decimal,
    pub nnm: Money,
    pub wealth_penetration: Decimal,
}

/// Non-financial actuals for one evaluation quarter.
///
/// `risk`, `quality` and `complaint` are incident counts: zero means a clean
/// quarter and full credit, any non-zero count forfeits the rate entirely.
/// Omitted fields deserialize as zero, like `FinancialMetrics`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NonFinancialMetrics {
    pub risk: Decimal,
    pub quality: Decimal,
    pub complaint: Decimal,
    pub client_appointment: Decimal,
    pub nps: Decimal,
}

/// Quarterly targets derived from a grade profile and a recognition ratio.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculationTargets {
    pub investment_target: Money,
    pub insurance_target: Money,
    pub total_income_target: Money,
    pub ca_target: Decimal,
    pub nnm_target: Money,
    pub wealth_penetration_target: Decimal,
}

/// Achievement rates for the five financial metrics plus the combined
/// total-income rate. Fixed shape, one value per metric.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinancialRates {
    pub investment_rate: Pct,
    pub insurance_rate: Pct,
    pub total_income_rate: Pct,
    pub ca_rate: Pct,
    /// Capped at 200.
    pub nnm_rate: Pct,
    /// Capped at 200.
    pub wealth_penetration_rate: Pct,
}

/// Achievement rates for the five non-financial metrics. All capped at 100.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NonFinancialRates {
    pub risk_rate: Pct,
    pub quality_rate: Pct,
    pub complaint_rate: Pct,
    pub client_appointment_rate: Pct,
    pub nps_rate: Pct,
}

/// Final outcome of one bonus evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BonusResult {
    pub financial_score: Pct,
    pub non_financial_score: Pct,
    pub base_bonus: Money,
    pub final_bonus: Money,
    /// Applied penalty descriptions, in fixed evaluation order.
    pub penalties: Vec<String>,
}

/// Standard computation output envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputationOutput<T: Serialize> {
    pub result: T,
    pub methodology: String,
    pub assumptions: serde_json::Value,
    pub warnings: Vec<String>,
    pub metadata: ComputationMetadata,
}

/// Metadata for every computation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputationMetadata {
    pub version: String,
    pub computation_time_us: u64,
    pub precision: String,
}

/// Helper to wrap computation results with metadata
pub fn with_metadata<T: Serialize>(
    methodology: &str,
    assumptions: &impl Serialize,
    warnings: Vec<String>,
    elapsed_us: u64,
    result: T,
) -> ComputationOutput<T> {
    ComputationOutput {
        result,
        methodology: methodology.to_string(),
        assumptions: serde_json::to_value(assumptions).unwrap_or_default(),
        warnings,
        metadata: ComputationMetadata {
            version: env!("CARGO_PKG_VERSION").to_string(),
            computation_time_us: elapsed_us,
            precision: "rust_decimal_128bit".to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn round0_halves_away_from_zero() {
        assert_eq!(round0(dec!(2.5)), dec!(3));
        assert_eq!(round0(dec!(2.4)), dec!(2));
        assert_eq!(round0(dec!(92400.5)), dec!(92401));
    }

    #[test]
    fn round2_keeps_two_decimals() {
        assert_eq!(round2(dec!(33.333333)), dec!(33.33));
        assert_eq!(round2(dec!(66.665)), dec!(66.67));
    }

    #[test]
    fn partial_financial_metrics_default_to_zero() {
        let metrics: FinancialMetrics = serde_json::from_str(r#"{"ca":"3"}"#).unwrap();
        assert_eq!(metrics.ca, dec!(3));
        assert_eq!(metrics.investment_income, dec!(0));
        assert_eq!(metrics.insurance_income, dec!(0));
        assert_eq!(metrics.nnm, dec!(0));
        assert_eq!(metrics.wealth_penetration, dec!(0));
    }

    #[test]
    fn partial_non_financial_metrics_default_to_zero() {
        let metrics: NonFinancialMetrics =
            serde_json::from_str(r#"{"nps":"80","client_appointment":"2"}"#).unwrap();
        assert_eq!(metrics.nps, dec!(80));
        assert_eq!(metrics.client_appointment, dec!(2));
        assert_eq!(metrics.risk, dec!(0));
        assert_eq!(metrics.quality, dec!(0));
        assert_eq!(metrics.complaint, dec!(0));
    }
}
