//! Static grade profile table.
//!
//! One entry per observed relationship-manager job grade. The table is built
//! once behind a `OnceLock` and only ever handed out by shared reference;
//! callers must validate grade selection against `names()` before relying on
//! `find()`.

use rust_decimal::Decimal;
use std::sync::OnceLock;

use crate::types::GradeProfile;

static GRADE_TABLE: OnceLock<Vec<GradeProfile>> = OnceLock::new();

fn profile(
    name: &str,
    bonus_base: i64,
    monthly_target: i64,
    nnm_target: i64,
    ca_target: i64,
    wealth_penetration_target: i64,
) -> GradeProfile {
    GradeProfile {
        name: name.to_string(),
        bonus_base: Decimal::from(bonus_base),
        monthly_target: Decimal::from(monthly_target),
        nnm_target: Decimal::from(nnm_target),
        ca_target: Decimal::from(ca_target),
        wealth_penetration_target: Decimal::from(wealth_penetration_target),
    }
}

/// All grade profiles, most junior first.
pub fn all() -> &'static [GradeProfile] {
    GRADE_TABLE.get_or_init(|| {
        vec![
            profile("Assoc", 92_400, 550_000, 4_000_000, 4, 2),
            profile("PRM2", 134_904, 770_000, 7_000_000, 3, 2),
            profile("PRM1", 180_576, 990_000, 8_500_000, 3, 2),
            profile("Sr. PRM2", 286_200, 1_325_000, 10_000_000, 3, 2),
            profile("Sr. PRM1", 344_844, 1_545_000, 11_500_000, 3, 2),
            // NNM figure corrected upstream from 1,300,000
            profile("AVP", 406_656, 1_765_000, 13_000_000, 2, 2),
            profile("VP", 582_120, 2_205_000, 14_500_000, 2, 2),
            profile("Director2", 863_880, 3_130_000, 16_000_000, 2, 2),
            profile("Director1", 1_203_840, 4_180_000, 17_500_000, 2, 2),
        ]
    })
}

/// Look up a grade profile by exact name.
pub fn find(name: &str) -> Option<&'static GradeProfile> {
    all().iter().find(|p| p.name == name)
}

/// The known grade names, in table order.
pub fn names() -> Vec<&'static str> {
    all().iter().map(|p| p.name.as_str()).collect()
}
