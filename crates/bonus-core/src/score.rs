//! Weighted composite scores.

use rust_decimal_macros::dec;

use crate::types::{round2, FinancialRates, NonFinancialRates, Pct};

/// Financial composite: investment 25%, insurance 25%, CA 20%, NNM 10%,
/// wealth penetration 20%.
///
/// NNM and wealth penetration arrive capped at 200 but keep their normal
/// weights, so the score can exceed 100 on over-achievement of those two
/// metrics (ceiling 130). The total-income rate feeds the penalty rules, not
/// this score.
pub fn financial_score(rates: &FinancialRates) -> Pct {
    let score = rates.investment_rate * dec!(0.25)
        + rates.insurance_rate * dec!(0.25)
        + rates.ca_rate * dec!(0.20)
        + rates.nnm_rate * dec!(0.10)
        + rates.wealth_penetration_rate * dec!(0.20);

    round2(score)
}

/// Non-financial composite.
///
/// Equal 20% weights, except that a perfect NPS (rate >= 100) is rewarded
/// with a 25% weight on top of the others — the weights then sum to 1.05,
/// which is the intended bonus headroom, not a reweighting of the rest.
pub fn non_financial_score(rates: &NonFinancialRates) -> Pct {
    let nps_weight = if rates.nps_rate >= dec!(100) {
        dec!(0.25)
    } else {
        dec!(0.20)
    };

    let score = rates.risk_rate * dec!(0.20)
        + rates.quality_rate * dec!(0.20)
        + rates.complaint_rate * dec!(0.20)
        + rates.client_appointment_rate * dec!(0.20)
        + rates.nps_rate * nps_weight;

    round2(score)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    fn financial(inv: Pct, ins: Pct, ca: Pct, nnm: Pct, wp: Pct) -> FinancialRates {
        FinancialRates {
            investment_rate: inv,
            insurance_rate: ins,
            total_income_rate: dec!(0),
            ca_rate: ca,
            nnm_rate: nnm,
            wealth_penetration_rate: wp,
        }
    }

    fn non_financial(risk: Pct, quality: Pct, complaint: Pct, appt: Pct, nps: Pct) -> NonFinancialRates {
        NonFinancialRates {
            risk_rate: risk,
            quality_rate: quality,
            complaint_rate: complaint,
            client_appointment_rate: appt,
            nps_rate: nps,
        }
    }

    #[test]
    fn full_achievement_scores_100() {
        let rates = financial(dec!(100), dec!(100), dec!(100), dec!(100), dec!(100));
        assert_eq!(financial_score(&rates), dec!(100.00));
    }

    #[test]
    fn capped_overachievement_lifts_score_above_100() {
        // Everything at 100 except NNM and WP maxed at 200.
        let rates = financial(dec!(100), dec!(100), dec!(100), dec!(200), dec!(200));
        assert_eq!(financial_score(&rates), dec!(130.00));
    }

    #[test]
    fn financial_weights_apply_per_metric() {
        let rates = financial(dec!(80), dec!(120), dec!(50), dec!(200), dec!(0));
        // 80*.25 + 120*.25 + 50*.2 + 200*.1 + 0*.2 = 20 + 30 + 10 + 20 = 80
        assert_eq!(financial_score(&rates), dec!(80.00));
    }

    #[test]
    fn perfect_nps_earns_bonus_weight() {
        let rates = non_financial(dec!(100), dec!(100), dec!(100), dec!(100), dec!(100));
        // 4 * 20 + 25 = 105
        assert_eq!(non_financial_score(&rates), dec!(105.00));
    }

    #[test]
    fn imperfect_nps_weighted_equally() {
        let rates = non_financial(dec!(100), dec!(100), dec!(100), dec!(100), dec!(99.99));
        // 4 * 20 + 99.99 * 0.2 = 80 + 19.998 -> 100.00 after rounding
        assert_eq!(non_financial_score(&rates), dec!(100.00));

        let rates = non_financial(dec!(100), dec!(100), dec!(100), dec!(100), dec!(80));
        assert_eq!(non_financial_score(&rates), dec!(96.00));
    }

    #[test]
    fn score_rounds_to_two_decimals() {
        let rates = non_financial(dec!(33.33), dec!(33.33), dec!(33.33), dec!(33.33), dec!(33.33));
        // 33.33 * 5 * 0.2 = 33.33
        assert_eq!(non_financial_score(&rates), dec!(33.33));
    }
}
