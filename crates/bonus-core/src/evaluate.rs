//! Full evaluation pipeline: targets → rates → scores → bonus.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::bonus::resolve_bonus;
use crate::error::BonusError;
use crate::rates::{self, achievement_rate, OVERACHIEVEMENT_CAP};
use crate::score::{financial_score, non_financial_score};
use crate::targets::{derive_targets, NnmTargetPolicy, TargetDerivation};
use crate::types::{
    with_metadata, BonusResult, ComputationOutput, FinancialMetrics, FinancialRates,
    GradeProfile, NonFinancialMetrics, NonFinancialRates,
};
use crate::BonusEngineResult;

/// Everything one evaluation needs. The grade profile is resolved by the
/// caller; metric values arrive already coerced to numbers (missing → 0).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvaluationInput {
    pub profile: GradeProfile,
    /// Recognition ratio as a percentage in [0, 100].
    pub recognition_ratio_pct: Decimal,
    #[serde(default)]
    pub nnm_policy: NnmTargetPolicy,
    pub financial: FinancialMetrics,
    pub non_financial: NonFinancialMetrics,
}

/// Full breakdown of one evaluation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvaluationOutput {
    pub derivation: TargetDerivation,
    pub financial_rates: FinancialRates,
    pub non_financial_rates: NonFinancialRates,
    pub bonus: BonusResult,
}

fn validate_input(input: &EvaluationInput) -> BonusEngineResult<()> {
    let financial_fields = [
        ("investment_income", input.financial.investment_income),
        ("insurance_income", input.financial.insurance_income),
        ("ca", input.financial.ca),
        ("nnm", input.financial.nnm),
        ("wealth_penetration", input.financial.wealth_penetration),
    ];
    for (field, value) in financial_fields {
        if value < Decimal::ZERO {
            return Err(BonusError::InvalidInput {
                field: field.into(),
                reason: format!("financial actuals must be non-negative, got {value}"),
            });
        }
    }
    Ok(())
}

/// Run the whole pipeline for one quarter.
///
/// Warnings flag inputs that were adjusted rather than rejected: a clamped
/// recognition ratio and rates reduced by the over-achievement cap.
pub fn evaluate(
    input: &EvaluationInput,
) -> BonusEngineResult<ComputationOutput<EvaluationOutput>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    validate_input(input)?;

    if input.recognition_ratio_pct < Decimal::ZERO || input.recognition_ratio_pct > dec!(100) {
        warnings.push(format!(
            "Recognition ratio {} outside [0, 100]; clamped",
            input.recognition_ratio_pct
        ));
    }

    let derivation = derive_targets(&input.profile, input.recognition_ratio_pct, input.nnm_policy);
    let targets = &derivation.targets;

    let fin_rates = rates::financial_rates(&input.financial, targets);
    let raw_nnm = achievement_rate(input.financial.nnm, targets.nnm_target);
    if rates::is_capped(raw_nnm, OVERACHIEVEMENT_CAP) {
        warnings.push(format!("NNM rate {raw_nnm} capped at {OVERACHIEVEMENT_CAP}"));
    }
    let raw_wp = achievement_rate(
        input.financial.wealth_penetration,
        targets.wealth_penetration_target,
    );
    if rates::is_capped(raw_wp, OVERACHIEVEMENT_CAP) {
        warnings.push(format!(
            "Wealth penetration rate {raw_wp} capped at {OVERACHIEVEMENT_CAP}"
        ));
    }

    let non_fin_rates = rates::non_financial_rates(&input.non_financial);

    let fs = financial_score(&fin_rates);
    let nfs = non_financial_score(&non_fin_rates);

    let bonus = resolve_bonus(
        derivation.adjusted_qti,
        fs,
        nfs,
        &input.financial,
        targets,
    );

    let output = EvaluationOutput {
        derivation,
        financial_rates: fin_rates,
        non_financial_rates: non_fin_rates,
        bonus,
    };

    let elapsed = start.elapsed().as_micros() as u64;

    Ok(with_metadata(
        "Quarterly RM bonus: weighted achievement scores with floor gate and penalty rules",
        input,
        warnings,
        elapsed,
        output,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grades;
    use pretty_assertions::assert_eq;

    fn perfect_assoc_input() -> EvaluationInput {
        EvaluationInput {
            profile: grades::find("Assoc").unwrap().clone(),
            recognition_ratio_pct: dec!(100),
            nnm_policy: NnmTargetPolicy::Quarterly,
            financial: FinancialMetrics {
                investment_income: dec!(825000),
                insurance_income: dec!(825000),
                ca: dec!(12),
                nnm: dec!(4000000),
                wealth_penetration: dec!(6),
            },
            non_financial: NonFinancialMetrics {
                risk: dec!(0),
                quality: dec!(0),
                complaint: dec!(0),
                client_appointment: dec!(3),
                nps: dec!(100),
            },
        }
    }

    #[test]
    fn perfect_quarter_end_to_end() {
        let output = evaluate(&perfect_assoc_input()).unwrap();
        let result = &output.result;

        assert_eq!(result.bonus.financial_score, dec!(100.00));
        assert_eq!(result.bonus.non_financial_score, dec!(105.00));
        assert_eq!(result.bonus.base_bonus, dec!(97020));
        assert_eq!(result.bonus.final_bonus, dec!(97020));
        assert!(result.bonus.penalties.is_empty());
        assert!(output.warnings.is_empty());
    }

    #[test]
    fn negative_actual_rejected() {
        let mut input = perfect_assoc_input();
        input.financial.nnm = dec!(-1);
        let err = evaluate(&input).unwrap_err();
        assert!(matches!(err, BonusError::InvalidInput { .. }));
    }

    #[test]
    fn out_of_range_ratio_warns_and_clamps() {
        let mut input = perfect_assoc_input();
        input.recognition_ratio_pct = dec!(120);
        let output = evaluate(&input).unwrap();
        assert_eq!(output.result.derivation.ratio_applied, dec!(1));
        assert_eq!(output.warnings.len(), 1);
    }

    #[test]
    fn capped_rates_produce_warnings() {
        let mut input = perfect_assoc_input();
        input.financial.nnm = dec!(40000000);
        input.financial.wealth_penetration = dec!(60);
        let output = evaluate(&input).unwrap();
        assert_eq!(output.result.financial_rates.nnm_rate, dec!(200));
        assert_eq!(output.warnings.len(), 2);
    }
}
