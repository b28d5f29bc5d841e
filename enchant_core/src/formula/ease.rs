//! Ease - how comfortably a caster can bind a spell into a vessel

use crate::error::EnchantError;

/// Calculate the ease of an enchantment
///
/// `Ease = skill + quality - spell_level - unfamiliarity`
///
/// No bounds are applied; ease may be zero or negative. Only a result that
/// doesn't fit in an `i64` fails, with [`EnchantError::EaseOverflow`].
///
/// # Arguments
/// * `skill` - The caster's level
/// * `quality` - The vessel's level
/// * `spell_level` - Level of the spell being bound
/// * `unfamiliarity` - Penalty for working with an unfamiliar spell or vessel
pub fn ease_of_enchantment(
    skill: i64,
    quality: i64,
    spell_level: i64,
    unfamiliarity: i64,
) -> Result<i64, EnchantError> {
    // Four i64 terms always fit in i128
    let ease = i128::from(skill) + i128::from(quality)
        - i128::from(spell_level)
        - i128::from(unfamiliarity);
    i64::try_from(ease).map_err(|_| EnchantError::EaseOverflow)
}

/// Number of charges a daily-charges enchantment holds
///
/// `floor(ease / 2)`, never less than one.
pub fn num_charges(ease: i64) -> i64 {
    ease.div_euclid(2).max(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_ease() {
        assert_eq!(ease_of_enchantment(10, 5, 3, 2), Ok(10));
        assert_eq!(ease_of_enchantment(1, 1, 3, 0), Ok(-1));
    }

    #[test]
    fn test_ease_at_i64_limits() {
        assert_eq!(
            ease_of_enchantment(i64::MAX, 1, 0, 0),
            Err(EnchantError::EaseOverflow)
        );
        assert_eq!(
            ease_of_enchantment(0, 0, i64::MAX, i64::MAX),
            Err(EnchantError::EaseOverflow)
        );
        // Intermediate sums may leave i64 as long as the result doesn't
        assert_eq!(ease_of_enchantment(i64::MAX, i64::MAX, i64::MAX, 5), Ok(i64::MAX - 5));
        assert_eq!(ease_of_enchantment(i64::MIN, 0, 0, 0), Ok(i64::MIN));
    }

    #[test]
    fn test_charges() {
        assert_eq!(num_charges(10), 5);
        assert_eq!(num_charges(11), 5);
        assert_eq!(num_charges(3), 1);
        assert_eq!(num_charges(1), 1);
        assert_eq!(num_charges(0), 1);
        assert_eq!(num_charges(-7), 1);
    }

    proptest! {
        #[test]
        fn ease_never_panics(
            s in any::<i64>(),
            q in any::<i64>(),
            l in any::<i64>(),
            u in any::<i64>(),
        ) {
            let exact = i128::from(s) + i128::from(q) - i128::from(l) - i128::from(u);
            match ease_of_enchantment(s, q, l, u) {
                Ok(ease) => {
                    prop_assert_eq!(i128::from(ease), exact);
                }
                Err(e) => {
                    prop_assert_eq!(e, EnchantError::EaseOverflow);
                }
            }
        }

        #[test]
        fn ease_is_plain_arithmetic(
            s in -10_000i64..10_000,
            q in -10_000i64..10_000,
            l in -10_000i64..10_000,
            u in -10_000i64..10_000,
        ) {
            prop_assert_eq!(ease_of_enchantment(s, q, l, u), Ok(s + q - l - u));
            prop_assert_eq!(ease_of_enchantment(s, q, l, u), ease_of_enchantment(q, s, u, l));
        }

        #[test]
        fn charges_never_below_one(ease in any::<i64>()) {
            prop_assert!(num_charges(ease) >= 1);
        }

        #[test]
        fn charges_halve_large_ease(ease in 2i64..1_000_000) {
            prop_assert_eq!(num_charges(ease), ease / 2);
        }
    }
}
