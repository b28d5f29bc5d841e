//! Errors raised by the enchanting pipeline

use thiserror::Error;

/// Every way a single enchantment calculation can fail
///
/// All variants are terminal: the calculation is aborted and nothing is retried.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EnchantError {
    #[error("unknown {kind} value '{value}' (expected one of: {allowed})")]
    UnknownEnumValue {
        kind: &'static str,
        value: String,
        allowed: String,
    },
    #[error("ease overflows: caster, vessel, spell and unfamiliarity levels are too extreme")]
    EaseOverflow,
    #[error("undefined enchantment time: ease is {ease}, time divides by ease squared")]
    UndefinedEnchantmentTime { ease: i64 },
    #[error("ease {ease} is out of the supported range for volatility (must be at least 1)")]
    EaseOutOfRange { ease: i64 },
    #[error("volatility from {existing_enchantments} existing enchantments overflows")]
    VolatilityOverflow { existing_enchantments: i64 },
    #[error("volatility {volatility} is above the supported maximum of {max}")]
    VolatilityTooHigh { volatility: i64, max: i64 },
    #[error("cost tier {tier} has no entries to draw from")]
    EmptyCostTier { tier: u8 },
}
