//! Rendering an outcome for the terminal

use crate::cli::{Cli, Outcome};
use anyhow::Result;
use enchant_core::VolatilityBreakdown;

/// Render the outcome as configured by the arguments
pub fn render(cli: &Cli, outcome: &Outcome) -> Result<String> {
    if cli.json {
        let mut value = serde_json::to_value(&outcome.enchantment)?;
        if cli.breakdown {
            value["breakdown"] = serde_json::to_value(outcome.breakdown)?;
        }
        return Ok(serde_json::to_string_pretty(&value)?);
    }

    let mut out = outcome.enchantment.to_string();
    if cli.breakdown {
        out.push('\n');
        out.push_str(&breakdown_lines(&outcome.breakdown));
    }
    Ok(out)
}

fn breakdown_lines(b: &VolatilityBreakdown) -> String {
    [
        ("Enchantment type", b.from_type),
        ("Spell level", b.from_spell_level),
        ("Time factor", b.from_time),
        ("Existing enchantments", b.from_existing),
        ("Ease", b.from_ease),
        ("Total volatility", b.total()),
    ]
    .iter()
    .map(|(label, value)| format!("  {label:<22} {value:+}"))
    .collect::<Vec<_>>()
    .join("\n")
}
