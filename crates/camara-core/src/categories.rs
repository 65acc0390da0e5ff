//! Commons category lookup for states and parties.
//!
//! Both mappings are flat JSON objects (`{"SP": "…", "RJ": "…"}`) read once
//! at start-up and shared read-only for the rest of the run.

use anyhow::{Context, Result};
use std::collections::HashMap;
use std::path::Path;

#[derive(Debug, Clone, Default)]
pub struct CategoryLookup {
    states: HashMap<String, String>,
    parties: HashMap<String, String>,
}

fn read_mapping(path: &Path) -> Result<HashMap<String, String>> {
    let bytes = std::fs::read(path)
        .with_context(|| format!("read category file: {}", path.display()))?;
    serde_json::from_slice(&bytes)
        .with_context(|| format!("parse category file: {}", path.display()))
}

impl CategoryLookup {
    pub fn new(states: HashMap<String, String>, parties: HashMap<String, String>) -> Self {
        Self { states, parties }
    }

    /// Loads both mappings. A missing or malformed file is an error.
    pub fn load(state_path: &Path, party_path: &Path) -> Result<Self> {
        let lookup = Self::new(read_mapping(state_path)?, read_mapping(party_path)?);
        tracing::debug!(
            states = lookup.states.len(),
            parties = lookup.parties.len(),
            "category mappings loaded"
        );
        Ok(lookup)
    }

    /// Category for a state code (exact match); empty when unknown.
    pub fn state_category(&self, state: &str) -> &str {
        self.states.get(state).map(String::as_str).unwrap_or("")
    }

    /// Category for a party code, matched upper-cased; empty when unknown.
    pub fn party_category(&self, party: &str) -> &str {
        self.parties
            .get(&party.to_uppercase())
            .map(String::as_str)
            .unwrap_or("")
    }
}
