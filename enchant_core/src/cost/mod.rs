//! Costs of use - penalties an enchanted item inflicts when used
//!
//! Volatility is spent greedily: every full three points buys the whole tier 3
//! set, and whatever is left (one or two points) buys a single random draw from
//! that tier, which ends the sampling.

use crate::error::EnchantError;
use crate::volatility::constants::MAX_VOLATILITY;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Candidate costs for each volatility tier
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostTable {
    #[serde(default = "default_tier_1")]
    pub tier_1: Vec<String>,
    #[serde(default = "default_tier_2")]
    pub tier_2: Vec<String>,
    #[serde(default = "default_tier_3")]
    pub tier_3: Vec<String>,
}

impl Default for CostTable {
    fn default() -> Self {
        CostTable {
            tier_1: default_tier_1(),
            tier_2: default_tier_2(),
            tier_3: default_tier_3(),
        }
    }
}

fn default_tier_1() -> Vec<String> {
    to_owned(&["2d4_DAMAGE", "WASTE", "FIZZLE", "UNTAMED_MAGIC"])
}
fn default_tier_2() -> Vec<String> {
    to_owned(&["3d6_DAMAGE", "FERAL_MAGIC", "BACKFIRE", "DESTRUCTION"])
}
fn default_tier_3() -> Vec<String> {
    to_owned(&["DESTRUCTION"])
}

fn to_owned(costs: &[&str]) -> Vec<String> {
    costs.iter().map(|c| c.to_string()).collect()
}

impl CostTable {
    /// Costs for a tier, or `None` outside 1..=3
    pub fn tier(&self, tier: u8) -> Option<&[String]> {
        match tier {
            1 => Some(&self.tier_1),
            2 => Some(&self.tier_2),
            3 => Some(&self.tier_3),
            _ => None,
        }
    }

    /// Tiers 1 and 2 are drawn from and must not be empty
    pub fn validate(&self) -> Result<(), EnchantError> {
        for tier in [1, 2] {
            if self.tier(tier).map_or(true, |costs| costs.is_empty()) {
                return Err(EnchantError::EmptyCostTier { tier });
            }
        }
        Ok(())
    }
}

/// Next move of the cost sampler given the volatility still unspent
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CostStep {
    /// Three or more left: take all of tier 3 and spend three
    Destruction,
    /// One or two left: draw once from that tier and stop
    Draw(u8),
    /// Nothing left
    Done,
}

impl CostStep {
    pub fn for_remaining(remaining: i64) -> Self {
        match remaining {
            i64::MIN..=0 => CostStep::Done,
            1 => CostStep::Draw(1),
            2 => CostStep::Draw(2),
            _ => CostStep::Destruction,
        }
    }
}

/// Turn a volatility score into the costs of using the enchanted item
///
/// Non-positive volatility has no cost. Volatility above [`MAX_VOLATILITY`]
/// fails with [`EnchantError::VolatilityTooHigh`] before anything is built.
/// The only randomness is the tier 1 or tier 2 draw, taken from `rng`.
pub fn cost_of_use(
    volatility: i64,
    table: &CostTable,
    rng: &mut impl Rng,
) -> Result<Vec<String>, EnchantError> {
    if volatility > MAX_VOLATILITY {
        return Err(EnchantError::VolatilityTooHigh {
            volatility,
            max: MAX_VOLATILITY,
        });
    }

    let mut costs = Vec::new();
    let mut remaining = volatility;

    loop {
        match CostStep::for_remaining(remaining) {
            CostStep::Destruction => {
                costs.extend(table.tier_3.iter().cloned());
                remaining -= 3;
            }
            CostStep::Draw(tier) => {
                let candidates = table.tier(tier).unwrap_or_default();
                if candidates.is_empty() {
                    return Err(EnchantError::EmptyCostTier { tier });
                }
                let pick = rng.gen_range(0..candidates.len());
                costs.push(candidates[pick].clone());
                remaining = 0;
            }
            CostStep::Done => break,
        }
    }

    Ok(costs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::mock::StepRng;
    use rand::SeedableRng;

    fn make_test_rng() -> rand::rngs::StdRng {
        rand::rngs::StdRng::seed_from_u64(12345)
    }

    /// Always yields index 0
    fn first_index() -> StepRng {
        StepRng::new(0, 0)
    }

    #[test]
    fn test_step_states() {
        assert_eq!(CostStep::for_remaining(-3), CostStep::Done);
        assert_eq!(CostStep::for_remaining(0), CostStep::Done);
        assert_eq!(CostStep::for_remaining(1), CostStep::Draw(1));
        assert_eq!(CostStep::for_remaining(2), CostStep::Draw(2));
        assert_eq!(CostStep::for_remaining(3), CostStep::Destruction);
        assert_eq!(CostStep::for_remaining(40), CostStep::Destruction);
    }

    #[test]
    fn test_no_cost_without_volatility() {
        let table = CostTable::default();
        let mut rng = make_test_rng();
        assert!(cost_of_use(0, &table, &mut rng).unwrap().is_empty());
        assert!(cost_of_use(-4, &table, &mut rng).unwrap().is_empty());
    }

    #[test]
    fn test_three_is_tier_three_only() {
        // An empty tier 1 would fail if a draw happened
        let table = CostTable {
            tier_1: vec![],
            tier_2: vec![],
            ..CostTable::default()
        };
        let mut rng = make_test_rng();
        let costs = cost_of_use(3, &table, &mut rng).unwrap();
        assert_eq!(costs, table.tier_3);
    }

    #[test]
    fn test_four_is_tier_three_plus_one_draw() {
        let table = CostTable::default();
        let mut rng = make_test_rng();
        let costs = cost_of_use(4, &table, &mut rng).unwrap();

        assert_eq!(costs.len(), table.tier_3.len() + 1);
        assert_eq!(costs[..table.tier_3.len()], table.tier_3[..]);
        assert!(table.tier_1.contains(&costs[costs.len() - 1]));
    }

    #[test]
    fn test_remainder_two_draws_once_from_tier_two() {
        let table = CostTable::default();
        let mut rng = first_index();
        assert_eq!(cost_of_use(2, &table, &mut rng).unwrap(), vec!["3d6_DAMAGE"]);
        assert_eq!(
            cost_of_use(8, &table, &mut rng).unwrap(),
            vec!["DESTRUCTION", "DESTRUCTION", "3d6_DAMAGE"]
        );
    }

    #[test]
    fn test_multi_entry_tier_three_is_taken_whole() {
        let table = CostTable {
            tier_3: vec!["DESTRUCTION".to_string(), "CURSE".to_string()],
            ..CostTable::default()
        };
        let mut rng = first_index();
        let costs = cost_of_use(7, &table, &mut rng).unwrap();
        assert_eq!(
            costs,
            vec!["DESTRUCTION", "CURSE", "DESTRUCTION", "CURSE", "2d4_DAMAGE"]
        );
    }

    #[test]
    fn test_fixed_source_is_reproducible() {
        let table = CostTable::default();
        let first = cost_of_use(5, &table, &mut first_index()).unwrap();
        let second = cost_of_use(5, &table, &mut first_index()).unwrap();
        assert_eq!(first, second);
        assert_eq!(first, vec!["DESTRUCTION", "3d6_DAMAGE"]);

        let seeded_a = cost_of_use(7, &table, &mut make_test_rng()).unwrap();
        let seeded_b = cost_of_use(7, &table, &mut make_test_rng()).unwrap();
        assert_eq!(seeded_a, seeded_b);
    }

    #[test]
    fn test_volatility_limit() {
        let table = CostTable::default();
        let costs = cost_of_use(MAX_VOLATILITY, &table, &mut first_index()).unwrap();
        assert_eq!(costs.len(), (MAX_VOLATILITY / 3) as usize);

        assert_eq!(
            cost_of_use(MAX_VOLATILITY + 1, &table, &mut first_index()),
            Err(EnchantError::VolatilityTooHigh {
                volatility: MAX_VOLATILITY + 1,
                max: MAX_VOLATILITY,
            })
        );
        // 2^62 from existing enchantments is refused without building a list
        assert!(matches!(
            cost_of_use(1 << 62, &table, &mut first_index()),
            Err(EnchantError::VolatilityTooHigh { .. })
        ));
    }

    #[test]
    fn test_empty_tier_draw_fails() {
        let table = CostTable {
            tier_1: vec![],
            ..CostTable::default()
        };
        let mut rng = make_test_rng();
        assert_eq!(
            cost_of_use(1, &table, &mut rng),
            Err(EnchantError::EmptyCostTier { tier: 1 })
        );
        assert_eq!(table.validate(), Err(EnchantError::EmptyCostTier { tier: 1 }));
        assert_eq!(CostTable::default().validate(), Ok(()));
    }
}
