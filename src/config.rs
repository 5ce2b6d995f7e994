//! Settings for cadence: volume, progress polling, playlist filtering, UI and
//! logging. Read from an optional TOML file with `CADENCE__` env overrides.

mod load;
mod schema;

pub use load::default_log_path;
pub use schema::*;

#[cfg(test)]
mod tests;
