//! Command line arguments and the calculation they drive

use anyhow::{Context, Result};
use clap::Parser;
use enchant_core::{
    enchant_with_breakdown, load_cost_table, CostTable, Enchantment, EnchantmentRequest,
    EnchantmentType, TimeFactor, VolatilityBreakdown,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::PathBuf;

/// Work out how long an enchantment takes and what it costs to use
#[derive(Parser, Debug)]
#[command(name = "enchant")]
#[command(about = "Tabletop enchanting calculator", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Caster level (skill)
    #[arg(long, allow_hyphen_values = true)]
    pub caster_level: i64,

    /// Level of the spell being enchanted
    #[arg(long, allow_hyphen_values = true)]
    pub spell_level: i64,

    /// Vessel level (quality)
    #[arg(long, allow_hyphen_values = true)]
    pub vessel_level: i64,

    /// Unfamiliarity penalty
    #[arg(long, allow_hyphen_values = true)]
    pub unfamiliarity: i64,

    /// FINITE_CHARGES, DAILY_CHARGES, COOLDOWN or CONSTANT
    #[arg(long)]
    pub enchant_type: EnchantmentType,

    /// RUSHING, RUSHING_EVEN_MORE, NORMAL, PATIENCE or EVEN_MORE_PATIENCE
    #[arg(long)]
    pub time_factor: TimeFactor,

    /// Enchantments already on the vessel
    #[arg(long, default_value_t = 0, allow_hyphen_values = true)]
    pub existing_enchantments: i64,

    /// Seed for the cost of use draw
    #[arg(long)]
    pub seed: Option<u64>,

    /// TOML file overriding the cost tiers
    #[arg(long)]
    pub cost_table: Option<PathBuf>,

    /// Also print each volatility contribution
    #[arg(long)]
    pub breakdown: bool,

    /// Print the enchantment as JSON
    #[arg(long)]
    pub json: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

/// Everything a report needs about one run
#[derive(Debug, Clone)]
pub struct Outcome {
    pub enchantment: Enchantment,
    pub breakdown: VolatilityBreakdown,
}

impl Cli {
    pub fn request(&self) -> EnchantmentRequest {
        EnchantmentRequest {
            caster_level: self.caster_level,
            spell_level: self.spell_level,
            vessel_level: self.vessel_level,
            unfamiliarity: self.unfamiliarity,
            enchant_type: self.enchant_type,
            time_factor: self.time_factor,
            existing_enchantments: self.existing_enchantments,
        }
    }

    pub fn load_table(&self) -> Result<CostTable> {
        match &self.cost_table {
            Some(path) => load_cost_table(path)
                .with_context(|| format!("loading cost table from {}", path.display())),
            None => Ok(CostTable::default()),
        }
    }

    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }

    /// Run the calculation described by these arguments
    pub fn run(&self) -> Result<Outcome> {
        let table = self.load_table()?;
        let request = self.request();
        let mut rng = self.rng();

        let (enchantment, breakdown) =
            enchant_with_breakdown(&request, &table, &mut rng).context("enchantment failed")?;

        Ok(Outcome {
            enchantment,
            breakdown,
        })
    }
}
