//! Bonus resolution: floor gate, penalty rules, final amount.

use rust_decimal_macros::dec;

use crate::types::{round0, BonusResult, CalculationTargets, FinancialMetrics, Money, Pct};

/// Both composite scores must reach this floor for any bonus to pay out.
pub const SCORE_FLOOR: Pct = dec!(70);

pub const PENALTY_SCORE_FLOOR: &str = "financial or non-financial score below 70%";
pub const PENALTY_CA_NNM: &str = "CA and NNM both below target (-10%)";
pub const PENALTY_TOTAL_INCOME: &str = "total income below performance target (-50%)";

/// Resolve base and final bonus from the composite scores and raw actuals.
///
/// The floor gate is a hard zero, not a multiplier; once past it, the two
/// penalty rules are checked independently and stack multiplicatively.
/// Amounts keep full precision until the final integer rounding, so
/// `final_bonus <= base_bonus` holds for every input.
pub fn resolve_bonus(
    qti: Money,
    financial_score: Pct,
    non_financial_score: Pct,
    metrics: &FinancialMetrics,
    targets: &CalculationTargets,
) -> BonusResult {
    if financial_score < SCORE_FLOOR || non_financial_score < SCORE_FLOOR {
        return BonusResult {
            financial_score,
            non_financial_score,
            base_bonus: Money::ZERO,
            final_bonus: Money::ZERO,
            penalties: vec![PENALTY_SCORE_FLOOR.to_string()],
        };
    }

    let mut penalties = Vec::new();
    let base_bonus = qti * (financial_score / dec!(100)) * (non_financial_score / dec!(100));
    let mut final_bonus = base_bonus;

    if metrics.ca < targets.ca_target && metrics.nnm < targets.nnm_target {
        final_bonus *= dec!(0.9);
        penalties.push(PENALTY_CA_NNM.to_string());
    }

    let total_income = metrics.investment_income + metrics.insurance_income;
    if total_income < targets.total_income_target {
        final_bonus *= dec!(0.5);
        penalties.push(PENALTY_TOTAL_INCOME.to_string());
    }

    BonusResult {
        financial_score,
        non_financial_score,
        base_bonus: round0(base_bonus),
        final_bonus: round0(final_bonus),
        penalties,
    }
}
