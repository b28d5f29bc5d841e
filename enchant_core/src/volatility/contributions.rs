//! The five volatility contributions

use super::constants::{MAX_SPELL_LEVEL_VOLATILITY, SPELL_LEVELS_PER_POINT};
use crate::error::EnchantError;
use crate::types::{EnchantmentType, TimeFactor};

/// Renewable and always-on enchantments are inherently less stable
pub fn volatility_from_type(enchantment_type: EnchantmentType) -> i64 {
    match enchantment_type {
        EnchantmentType::FiniteCharges => 0,
        EnchantmentType::DailyCharges => 2,
        EnchantmentType::Cooldown => 3,
        EnchantmentType::Constant => 4,
    }
}

/// One point per three spell levels, capped at three
///
/// 0-2 -> 0, 3-5 -> 1, 6-8 -> 2, 9+ -> 3
pub fn volatility_from_spell_level(spell_level: i64) -> i64 {
    (spell_level / SPELL_LEVELS_PER_POINT).min(MAX_SPELL_LEVEL_VOLATILITY)
}

/// `-floor(log2(multiplier))`, zero at normal pace
///
/// Rushing adds volatility, patience removes it.
pub fn volatility_from_time(time_factor: TimeFactor) -> i64 {
    if time_factor == TimeFactor::Normal {
        return 0;
    }
    -(time_factor.multiplier().log2().floor() as i64)
}

/// `2^existing`, so stacking enchantments on one vessel grows risk quickly
pub fn volatility_from_existing(existing_enchantments: i64) -> Result<i64, EnchantError> {
    if existing_enchantments <= 0 {
        return Ok(0);
    }

    u32::try_from(existing_enchantments)
        .ok()
        .and_then(|exp| 2i64.checked_pow(exp))
        .ok_or(EnchantError::VolatilityOverflow {
            existing_enchantments,
        })
}

/// Higher ease steadies the enchantment
///
/// | Ease    | Volatility |
/// |---------|------------|
/// | 1-4     | 0          |
/// | 5-9     | -1         |
/// | 10-14   | -2         |
/// | 15+     | -3         |
///
/// Ease below 1 has no entry and fails with [`EnchantError::EaseOutOfRange`].
pub fn volatility_from_ease(ease: i64) -> Result<i64, EnchantError> {
    match ease {
        i64::MIN..=0 => Err(EnchantError::EaseOutOfRange { ease }),
        1..=4 => Ok(0),
        5..=9 => Ok(-1),
        10..=14 => Ok(-2),
        _ => Ok(-3),
    }
}
