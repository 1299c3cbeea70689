//! Catalog CLI command.

use anyhow::Result;
use serde::Serialize;

use crate::cli::output::{output, CommandOutput};
use crate::cli::table::{list_table, render_list};
use crate::domain::models::{OidcDiscoveryKeys, SeedCatalogEntry, SEED_CATALOG};

#[derive(Debug, Serialize)]
pub struct CatalogEntryOutput {
    pub key: String,
    pub env_vars: Vec<String>,
    pub default_value: Option<String>,
    pub category: String,
    pub is_encrypted: bool,
    /// Consumed by OIDC discovery and never stored
    pub control_only: bool,
}

impl From<&SeedCatalogEntry> for CatalogEntryOutput {
    fn from(entry: &SeedCatalogEntry) -> Self {
        Self {
            key: entry.key.to_string(),
            env_vars: std::iter::once(entry.env_var)
                .chain(entry.env_aliases.iter().copied())
                .map(str::to_string)
                .collect(),
            default_value: entry.default_value.map(str::to_string),
            category: entry.category.to_string(),
            is_encrypted: entry.is_encrypted,
            control_only: entry.key == OidcDiscoveryKeys::DEFAULT.discovery,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CatalogOutput {
    pub entries: Vec<CatalogEntryOutput>,
    pub total: usize,
}

impl CommandOutput for CatalogOutput {
    fn to_human(&self) -> String {
        let mut table = list_table(&["key", "environment", "default", "category", "encrypted"]);
        for entry in &self.entries {
            let default = match entry.default_value.as_deref() {
                None => "(unset)".to_string(),
                Some("") => "\"\"".to_string(),
                Some(value) => value.to_string(),
            };
            let encrypted = if entry.control_only {
                "discovery only"
            } else if entry.is_encrypted {
                "yes"
            } else {
                "no"
            };
            table.add_row(vec![
                entry.key.clone(),
                entry.env_vars.join(", "),
                default,
                entry.category.clone(),
                encrypted.to_string(),
            ]);
        }
        render_list("catalog entry", "catalog entries", &table, self.total)
    }
}

pub fn execute(json_mode: bool) -> Result<()> {
    let entries: Vec<CatalogEntryOutput> = SEED_CATALOG.iter().map(CatalogEntryOutput::from).collect();
    let out = CatalogOutput {
        total: entries.len(),
        entries,
    };
    output(&out, json_mode);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_output_lists_aliases() {
        let entries: Vec<CatalogEntryOutput> = SEED_CATALOG.iter().map(CatalogEntryOutput::from).collect();
        let unsplash = entries.iter().find(|e| e.key == "UNSPLASH_ACCESS_KEY").unwrap();

        assert_eq!(unsplash.env_vars, vec!["UNSPLASH_ACCESS_KEY", "UNSPLASH_ACESS_KEY"]);
        assert!(unsplash.is_encrypted);

        let discovery = entries.iter().find(|e| e.key == "OIDC_DISCOVERY").unwrap();
        assert!(discovery.control_only);
    }

    #[test]
    fn test_catalog_human_output() {
        let entries: Vec<CatalogEntryOutput> = SEED_CATALOG.iter().map(CatalogEntryOutput::from).collect();
        let out = CatalogOutput {
            total: entries.len(),
            entries,
        };

        let human = console::strip_ansi_codes(&out.to_human()).to_string();
        assert!(human.contains("catalog entries:"));
        assert!(human.contains("ENABLE_SIGNUP"));
        assert!(human.contains("gpt-3.5-turbo"));
    }
}
