use clap::Args;
use rust_decimal::Decimal;
use serde_json::Value;

use bonus_core::grades;
use bonus_core::targets::{derive_targets, NnmTargetPolicy};
use bonus_core::BonusError;

/// Arguments for target derivation
#[derive(Args)]
pub struct TargetsArgs {
    /// Grade name (see `rmb grades` for the known set)
    #[arg(long)]
    pub grade: String,

    /// Recognition ratio as a percentage, 0-100
    #[arg(long, default_value = "100")]
    pub ratio: Decimal,

    /// Read the grade's NNM figure as monthly and triple it
    #[arg(long)]
    pub nnm_tripled: bool,
}

pub fn nnm_policy(tripled: bool) -> NnmTargetPolicy {
    if tripled {
        NnmTargetPolicy::TripledQuarterly
    } else {
        NnmTargetPolicy::Quarterly
    }
}

pub fn run_targets(args: TargetsArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let profile = grades::find(&args.grade).ok_or_else(|| BonusError::UnknownGrade {
        name: args.grade.clone(),
    })?;

    let derivation = derive_targets(profile, args.ratio, nnm_policy(args.nnm_tripled));
    Ok(serde_json::to_value(derivation)?)
}
