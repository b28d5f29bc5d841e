//! Volatility - how risky an enchantment is to use
//!
//! Volatility is the sum of five independent contributions. It may be negative,
//! in which case the enchantment carries no cost of use.

mod contributions;

pub use contributions::{
    volatility_from_ease, volatility_from_existing, volatility_from_spell_level,
    volatility_from_time, volatility_from_type,
};

use crate::error::EnchantError;
use crate::types::{EnchantmentType, TimeFactor};
use serde::{Deserialize, Serialize};

/// Volatility calculation constants
pub mod constants {
    /// Spell levels per point of volatility
    pub const SPELL_LEVELS_PER_POINT: i64 = 3;

    /// Highest volatility the spell level alone can add
    pub const MAX_SPELL_LEVEL_VOLATILITY: i64 = 3;

    /// Highest volatility that can be turned into costs of use
    ///
    /// Ten existing enchantments (1024) stay below it, twelve (4096) don't.
    pub const MAX_VOLATILITY: i64 = 3_000;
}

/// Each contribution to an enchantment's volatility
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VolatilityBreakdown {
    pub from_type: i64,
    pub from_spell_level: i64,
    pub from_time: i64,
    pub from_existing: i64,
    pub from_ease: i64,
}

impl VolatilityBreakdown {
    /// Compute every contribution, failing on the first that is undefined
    pub fn compute(
        enchantment_type: EnchantmentType,
        spell_level: i64,
        time_factor: TimeFactor,
        ease: i64,
        existing_enchantments: i64,
    ) -> Result<Self, EnchantError> {
        Ok(VolatilityBreakdown {
            from_type: volatility_from_type(enchantment_type),
            from_spell_level: volatility_from_spell_level(spell_level),
            from_time: volatility_from_time(time_factor),
            from_existing: volatility_from_existing(existing_enchantments)?,
            from_ease: volatility_from_ease(ease)?,
        })
    }

    pub fn total(&self) -> i64 {
        self.from_type + self.from_spell_level + self.from_time + self.from_existing + self.from_ease
    }
}

/// Calculate the total volatility of an enchantment
pub fn calculate_volatility(
    enchantment_type: EnchantmentType,
    spell_level: i64,
    time_factor: TimeFactor,
    ease: i64,
    existing_enchantments: i64,
) -> Result<i64, EnchantError> {
    VolatilityBreakdown::compute(
        enchantment_type,
        spell_level,
        time_factor,
        ease,
        existing_enchantments,
    )
    .map(|breakdown| breakdown.total())
}
