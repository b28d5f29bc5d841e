//! enchant_core - Enchanting formulas for tabletop play
//!
//! This library provides:
//! - Ease, charges and enchantment time formulas
//! - Volatility: the risk score of an enchantment and its breakdown
//! - Costs of use: penalties sampled from volatility
//! - enchant: the full pipeline producing an Enchantment

pub mod calculator;
pub mod config;
pub mod cost;
pub mod enchantment;
pub mod error;
pub mod formula;
pub mod prelude;
pub mod types;
pub mod volatility;

// Re-export core types for convenience
pub use calculator::{enchant, enchant_with_breakdown, EnchantmentRequest};
pub use config::{load_cost_table, parse_cost_table, ConfigError, EnchantingConfig};
pub use cost::{cost_of_use, CostStep, CostTable};
pub use enchantment::{Enchantment, NO_CHARGES};
pub use error::EnchantError;
pub use formula::{ease_of_enchantment, enchantment_time, num_charges};
pub use types::{EnchantmentType, SkillDaysProfile, TimeFactor};
pub use volatility::{calculate_volatility, VolatilityBreakdown};
