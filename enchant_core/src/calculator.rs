//! Calculator - runs the whole enchanting pipeline for one request

use crate::cost::{cost_of_use, CostTable};
use crate::enchantment::Enchantment;
use crate::error::EnchantError;
use crate::formula::{ease_of_enchantment, enchantment_time, num_charges};
use crate::types::{EnchantmentType, TimeFactor};
use crate::volatility::VolatilityBreakdown;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Inputs describing the caster, the vessel and the enchantment wanted
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnchantmentRequest {
    pub caster_level: i64,
    pub spell_level: i64,
    pub vessel_level: i64,
    pub unfamiliarity: i64,
    pub enchant_type: EnchantmentType,
    pub time_factor: TimeFactor,
    #[serde(default)]
    pub existing_enchantments: i64,
}

impl EnchantmentRequest {
    pub fn ease(&self) -> Result<i64, EnchantError> {
        ease_of_enchantment(
            self.caster_level,
            self.vessel_level,
            self.spell_level,
            self.unfamiliarity,
        )
    }
}

/// Calculate an enchantment
///
/// Stages run in order: ease, charges (daily charges only), volatility, time,
/// costs of use. The first failing stage aborts the calculation.
pub fn enchant(
    request: &EnchantmentRequest,
    table: &CostTable,
    rng: &mut impl Rng,
) -> Result<Enchantment, EnchantError> {
    enchant_with_breakdown(request, table, rng).map(|(enchantment, _)| enchantment)
}

/// [`enchant`], also returning each volatility contribution
pub fn enchant_with_breakdown(
    request: &EnchantmentRequest,
    table: &CostTable,
    rng: &mut impl Rng,
) -> Result<(Enchantment, VolatilityBreakdown), EnchantError> {
    let mut enchantment = Enchantment {
        enchantment_type: request.enchant_type,
        ease: request.ease()?,
        ..Default::default()
    };
    debug!(ease = enchantment.ease, "computed ease");

    if request.enchant_type == EnchantmentType::DailyCharges {
        enchantment.charges = num_charges(enchantment.ease);
        debug!(charges = enchantment.charges, "computed charges");
    }

    let breakdown = VolatilityBreakdown::compute(
        request.enchant_type,
        request.spell_level,
        request.time_factor,
        enchantment.ease,
        request.existing_enchantments,
    )?;
    enchantment.volatility = breakdown.total();
    debug!(volatility = enchantment.volatility, "computed volatility");

    enchantment.time_to_enchant =
        enchantment_time(enchantment.ease, request.enchant_type.skill_days())?;
    debug!(days = enchantment.time_to_enchant, "computed enchantment time");

    enchantment.cost = cost_of_use(enchantment.volatility, table, rng)?;
    debug!(costs = ?enchantment.cost, "sampled costs of use");

    Ok((enchantment, breakdown))
}
