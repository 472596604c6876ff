//! Achievement-rate calculation.
//!
//! The core primitive treats a zero target as full credit rather than a
//! division failure. NNM and wealth penetration may over-achieve up to 200%;
//! every non-financial rate is capped at 100%. Risk, quality and complaint
//! are incident flags with no partial credit.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::types::{
    round2, CalculationTargets, FinancialMetrics, FinancialRates, NonFinancialMetrics,
    NonFinancialRates, Pct,
};

/// Over-achievement ceiling for NNM and wealth penetration.
pub const OVERACHIEVEMENT_CAP: Decimal = dec!(200);

/// Fixed quarterly client-appointment target.
pub const CLIENT_APPOINTMENT_TARGET: Decimal = dec!(3);

/// Fixed NPS target (a 0–100 scale score).
pub const NPS_TARGET: Decimal = dec!(100);

/// Achievement rate as a percentage with two decimal places.
/// A zero target yields 100.00 regardless of the actual.
pub fn achievement_rate(actual: Decimal, target: Decimal) -> Pct {
    if target.is_zero() {
        return dec!(100.00);
    }
    round2(actual / target * dec!(100))
}

fn capped(rate: Pct, cap: Decimal) -> Pct {
    rate.min(cap)
}

/// Whether a raw rate would be reduced by its cap.
pub fn is_capped(rate: Pct, cap: Decimal) -> bool {
    rate > cap
}

/// Achievement rates for the financial metrics.
///
/// Investment, insurance, total-income and CA rates are uncapped; NNM and
/// wealth penetration are capped at 200%.
pub fn financial_rates(metrics: &FinancialMetrics, targets: &CalculationTargets) -> FinancialRates {
    let total_income = metrics.investment_income + metrics.insurance_income;

    FinancialRates {
        investment_rate: achievement_rate(metrics.investment_income, targets.investment_target),
        insurance_rate: achievement_rate(metrics.insurance_income, targets.insurance_target),
        total_income_rate: achievement_rate(total_income, targets.total_income_target),
        ca_rate: achievement_rate(metrics.ca, targets.ca_target),
        nnm_rate: capped(
            achievement_rate(metrics.nnm, targets.nnm_target),
            OVERACHIEVEMENT_CAP,
        ),
        wealth_penetration_rate: capped(
            achievement_rate(metrics.wealth_penetration, targets.wealth_penetration_target),
            OVERACHIEVEMENT_CAP,
        ),
    }
}

/// Achievement rates for the non-financial metrics. All capped at 100%.
pub fn non_financial_rates(metrics: &NonFinancialMetrics) -> NonFinancialRates {
    // Incident metrics are all-or-nothing: one incident forfeits the rate.
    let incident_rate = |count: Decimal| -> Pct {
        if count.is_zero() {
            dec!(100.00)
        } else {
            Decimal::ZERO
        }
    };
    let cap = dec!(100);

    NonFinancialRates {
        risk_rate: capped(incident_rate(metrics.risk), cap),
        quality_rate: capped(incident_rate(metrics.quality), cap),
        complaint_rate: capped(incident_rate(metrics.complaint), cap),
        client_appointment_rate: capped(
            achievement_rate(metrics.client_appointment, CLIENT_APPOINTMENT_TARGET),
            cap,
        ),
        nps_rate: capped(achievement_rate(metrics.nps, NPS_TARGET), cap),
    }
}
