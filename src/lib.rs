/// Fitsearch - Exercise Catalog Search
///
/// Core library turning free-text fitness queries into structured filters
/// (difficulty level, equipment, target muscle) and formatting the matching
/// exercise records for display.

pub mod config;
pub mod core;
pub mod database;

#[cfg(test)]
mod tests;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
