//! Enchantment kinds and casting pace

use crate::error::EnchantError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How an enchanted item delivers its effect
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EnchantmentType {
    #[default]
    FiniteCharges,
    DailyCharges,
    Cooldown,
    Constant,
}

/// Skill-days budget of an enchantment type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillDaysProfile {
    pub skill_days_required: i64,
    /// Carried for compatibility, nothing reads it yet
    pub is_renewable: bool,
}

impl EnchantmentType {
    /// Get all enchantment types
    pub fn all() -> &'static [EnchantmentType] {
        &[
            EnchantmentType::FiniteCharges,
            EnchantmentType::DailyCharges,
            EnchantmentType::Cooldown,
            EnchantmentType::Constant,
        ]
    }

    pub fn profile(self) -> SkillDaysProfile {
        let (skill_days_required, is_renewable) = match self {
            EnchantmentType::FiniteCharges => (50, false),
            EnchantmentType::DailyCharges => (125, true),
            EnchantmentType::Cooldown => (500, true),
            EnchantmentType::Constant => (5000, true),
        };
        SkillDaysProfile {
            skill_days_required,
            is_renewable,
        }
    }

    /// Skill-days consumed to complete the enchantment
    pub fn skill_days(self) -> i64 {
        self.profile().skill_days_required
    }

    pub fn is_renewable(self) -> bool {
        self.profile().is_renewable
    }

    /// Wire name, as accepted on the command line
    pub fn name(self) -> &'static str {
        match self {
            EnchantmentType::FiniteCharges => "FINITE_CHARGES",
            EnchantmentType::DailyCharges => "DAILY_CHARGES",
            EnchantmentType::Cooldown => "COOLDOWN",
            EnchantmentType::Constant => "CONSTANT",
        }
    }
}

impl fmt::Display for EnchantmentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for EnchantmentType {
    type Err = EnchantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = normalize(s);
        EnchantmentType::all()
            .iter()
            .copied()
            .find(|t| normalize(t.name()) == key)
            .ok_or_else(|| unknown("enchantment type", s, EnchantmentType::all().iter().map(|t| t.name())))
    }
}

/// Casting pace. Rushing raises volatility, patience lowers it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TimeFactor {
    Rushing,
    RushingEvenMore,
    #[default]
    Normal,
    #[serde(alias = "PAITENCE")]
    Patience,
    #[serde(alias = "EVEN_MORE_PAITENCE")]
    EvenMorePatience,
}

impl TimeFactor {
    /// Get all time factors
    pub fn all() -> &'static [TimeFactor] {
        &[
            TimeFactor::Rushing,
            TimeFactor::RushingEvenMore,
            TimeFactor::Normal,
            TimeFactor::Patience,
            TimeFactor::EvenMorePatience,
        ]
    }

    /// Time multiplier. `Normal` is a 0.0 sentinel, not a real multiplier.
    pub fn multiplier(self) -> f64 {
        match self {
            TimeFactor::Rushing => 0.5,
            TimeFactor::RushingEvenMore => 0.25,
            TimeFactor::Normal => 0.0,
            TimeFactor::Patience => 2.0,
            TimeFactor::EvenMorePatience => 4.0,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            TimeFactor::Rushing => "RUSHING",
            TimeFactor::RushingEvenMore => "RUSHING_EVEN_MORE",
            TimeFactor::Normal => "NORMAL",
            TimeFactor::Patience => "PATIENCE",
            TimeFactor::EvenMorePatience => "EVEN_MORE_PATIENCE",
        }
    }
}

impl fmt::Display for TimeFactor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TimeFactor {
    type Err = EnchantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = normalize(s);
        // Old spellings still show up in saved command lines
        match key.as_str() {
            "PAITENCE" => return Ok(TimeFactor::Patience),
            "EVENMOREPAITENCE" => return Ok(TimeFactor::EvenMorePatience),
            _ => {}
        }
        TimeFactor::all()
            .iter()
            .copied()
            .find(|t| normalize(t.name()) == key)
            .ok_or_else(|| unknown("time factor", s, TimeFactor::all().iter().map(|t| t.name())))
    }
}

/// Uppercase and drop `_`/`-` so `DAILY_CHARGES`, `DailyCharges` and `daily-charges` match
fn normalize(s: &str) -> String {
    s.trim()
        .chars()
        .filter(|c| *c != '_' && *c != '-')
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

fn unknown<'a>(kind: &'static str, value: &str, allowed: impl Iterator<Item = &'a str>) -> EnchantError {
    EnchantError::UnknownEnumValue {
        kind,
        value: value.to_string(),
        allowed: allowed.collect::<Vec<_>>().join(", "),
    }
}
