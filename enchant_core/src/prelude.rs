//! Prelude module for convenient imports
//!
//! ```rust
//! use enchant_core::prelude::*;
//! ```

// Core types
pub use crate::types::{EnchantmentType, TimeFactor};
pub use crate::enchantment::Enchantment;
pub use crate::error::EnchantError;

// Pipeline
pub use crate::calculator::{enchant, enchant_with_breakdown, EnchantmentRequest};
pub use crate::cost::CostTable;
pub use crate::volatility::VolatilityBreakdown;
