//! Ease, charges and enchantment time

mod ease;
mod time;

pub use ease::{ease_of_enchantment, num_charges};
pub use time::enchantment_time;
