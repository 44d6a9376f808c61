pub mod constants;
mod config;
mod core;
mod errors;

pub use config::SearchConfig;
pub use self::core::{HexSolver, SearchOutcome, SearchStats};
pub use errors::SolverError;

#[cfg(test)]
mod tests;
