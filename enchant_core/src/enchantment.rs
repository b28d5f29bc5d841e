//! Enchantment - the result of one calculation

use crate::types::EnchantmentType;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Charges value for enchantments that don't use charges
pub const NO_CHARGES: i64 = -1;

/// Outcome of enchanting one vessel
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Enchantment {
    #[serde(rename = "type")]
    pub enchantment_type: EnchantmentType,
    pub ease: i64,
    /// Days until the enchantment is complete
    pub time_to_enchant: i64,
    pub cost: Vec<String>,
    /// [`NO_CHARGES`] unless the enchantment has daily charges
    pub charges: i64,
    pub volatility: i64,
}

impl Default for Enchantment {
    fn default() -> Self {
        Enchantment {
            enchantment_type: EnchantmentType::FiniteCharges,
            ease: 0,
            time_to_enchant: 0,
            cost: Vec::new(),
            charges: NO_CHARGES,
            volatility: 0,
        }
    }
}

impl Enchantment {
    pub fn has_charges(&self) -> bool {
        self.charges > 0
    }
}

impl fmt::Display for Enchantment {
    /// `Will take N days.`, then charges and costs when present
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Will take {} days.", self.time_to_enchant)?;
        if self.has_charges() {
            write!(f, " Has {} charges.", self.charges)?;
        }
        if !self.cost.is_empty() {
            let quoted: Vec<String> = self.cost.iter().map(|c| format!("'{c}'")).collect();
            write!(f, " Costs of use are: [{}]", quoted.join(", "))?;
        }
        Ok(())
    }
}
