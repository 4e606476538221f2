//! Rule set loading functionality.
//!
//! This module provides the [`RuleSetLoader`] type for loading fiscal-year
//! rule sets from YAML files.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::RuleSet;

/// Loads and provides access to a fiscal-year rule set.
///
/// The `RuleSetLoader` reads a single YAML rule file, validates its bracket
/// tables, and hands out the immutable [`RuleSet`] used by every engine call.
///
/// # File layout
///
/// One file per fiscal year:
/// ```text
/// config/
/// └── 2026.yaml   # rules in force for fiscal year 2026
/// ```
///
/// # Example
///
/// ```no_run
/// use folha_engine::config::RuleSetLoader;
///
/// let loader = RuleSetLoader::load("./config/2026.yaml").unwrap();
/// println!("Fiscal year: {}", loader.rules().fiscal_year);
/// ```
#[derive(Debug, Clone)]
pub struct RuleSetLoader {
    rules: RuleSet,
}

impl RuleSetLoader {
    /// Loads a rule set from the specified YAML file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the rule file (e.g., "./config/2026.yaml")
    ///
    /// # Returns
    ///
    /// Returns a `RuleSetLoader` instance on success, or an error if:
    /// - The file is missing (`RuleSetNotFound`)
    /// - The file contains invalid YAML (`RuleSetParseError`)
    /// - A bracket table violates the ascending-order invariant
    ///   (`RuleSetParseError`)
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::RuleSetNotFound {
            path: path_str.clone(),
        })?;

        let rules: RuleSet =
            serde_yaml::from_str(&content).map_err(|e| EngineError::RuleSetParseError {
                path: path_str.clone(),
                message: e.to_string(),
            })?;

        rules
            .validate()
            .map_err(|message| EngineError::RuleSetParseError {
                path: path_str,
                message,
            })?;

        Ok(Self { rules })
    }

    /// Returns the loaded rule set.
    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }
}
