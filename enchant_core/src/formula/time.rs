//! Enchantment time - skill-days spent at a rate set by ease

use crate::error::EnchantError;

/// Calculate how many days an enchantment takes
///
/// `Time = floor(skill_days / ease^2)`
///
/// The square makes negative ease behave like its magnitude. Zero ease has no
/// defined time and fails with [`EnchantError::UndefinedEnchantmentTime`].
pub fn enchantment_time(ease: i64, skill_days: i64) -> Result<i64, EnchantError> {
    if ease == 0 {
        return Err(EnchantError::UndefinedEnchantmentTime { ease });
    }

    // i128 so that squaring any i64 fits
    let ease_squared = i128::from(ease) * i128::from(ease);
    let days = i128::from(skill_days).div_euclid(ease_squared);

    // |days| <= |skill_days| since ease_squared >= 1
    Ok(days as i64)
}
