//! Quarterly target derivation.
//!
//! Turns a grade profile and a recognition ratio (the pro-ration percentage
//! credited for a partial quarter) into the targets the rate calculator
//! compares actuals against. Fee-income targets are monthly figures scaled to
//! the quarter; the adjusted QTI is the bonus base the resolver multiplies.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::types::{round0, CalculationTargets, GradeProfile, Money};

/// How the grade's NNM figure is read when deriving the quarterly target.
///
/// The business rules were observed to do both; neither variant is treated as
/// authoritative, so the choice is an explicit policy on the deriver.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum NnmTargetPolicy {
    /// The grade's NNM figure is already the quarterly target (default).
    #[default]
    Quarterly,
    /// The grade's NNM figure is monthly and gets tripled.
    TripledQuarterly,
}

/// Targets plus the ratio-adjusted bonus base for one evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetDerivation {
    pub targets: CalculationTargets,
    /// The grade's QTI scaled by the recognition ratio.
    pub adjusted_qti: Money,
    /// The ratio actually applied, after clamping to [0, 1].
    pub ratio_applied: Decimal,
}

/// Derive the quarterly calculation targets for a grade.
///
/// `recognition_ratio_pct` is a percentage in [0, 100]; out-of-range values
/// are clamped. Monetary roundings happen at each derivation step, matching
/// the published figures grade holders are measured against.
pub fn derive_targets(
    profile: &GradeProfile,
    recognition_ratio_pct: Decimal,
    nnm_policy: NnmTargetPolicy,
) -> TargetDerivation {
    let ratio = recognition_ratio_pct
        .clamp(Decimal::ZERO, dec!(100))
        / dec!(100);

    let adjusted_monthly = round0(profile.monthly_target * ratio);
    // Investment and insurance each carry half of the monthly figure.
    let half_monthly = round0(adjusted_monthly * dec!(0.5));

    let nnm_target = match nnm_policy {
        NnmTargetPolicy::Quarterly => round0(profile.nnm_target * ratio),
        NnmTargetPolicy::TripledQuarterly => round0(profile.nnm_target * ratio * dec!(3)),
    };

    TargetDerivation {
        targets: CalculationTargets {
            investment_target: half_monthly * dec!(3),
            insurance_target: half_monthly * dec!(3),
            total_income_target: adjusted_monthly * dec!(3),
            ca_target: round0(profile.ca_target * ratio * dec!(3)),
            nnm_target,
            wealth_penetration_target: profile.wealth_penetration_target * dec!(3),
        },
        adjusted_qti: round0(profile.bonus_base * ratio),
        ratio_applied: ratio,
    }
}
