//! Rule set loading and management for the payroll engine.
//!
//! This module provides functionality to load fiscal-year rule sets from
//! YAML files, including bracket tables, fixed percentages and benefit
//! amounts, the transitional IRRF rule, and health-plan prices.
//!
//! # Example
//!
//! ```no_run
//! use folha_engine::config::RuleSetLoader;
//!
//! let loader = RuleSetLoader::load("./config/2026.yaml").unwrap();
//! println!("Fiscal year: {}", loader.rules().fiscal_year);
//! ```

mod loader;
mod types;

pub use loader::RuleSetLoader;
pub use types::{InssBracket, IrrfBracket, RuleSet, TransitionRule};
