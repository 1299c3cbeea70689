//! List CLI command.

use anyhow::Result;
use serde::Serialize;

use super::{build_cipher, display_value, open_repository};
use crate::cli::output::{output, truncate, CommandOutput};
use crate::cli::table::{list_table, render_list};
use crate::cli::types::ListArgs;
use crate::domain::models::{Config, ConfigCategory, InstanceConfiguration};
use crate::domain::ports::{InstanceConfigRepository, SecretCipher};

#[derive(Debug, Serialize)]
pub struct ConfigurationOutput {
    pub key: String,
    pub value: Option<String>,
    pub category: String,
    pub is_encrypted: bool,
    pub updated_at: String,
}

impl ConfigurationOutput {
    pub fn build(
        record: &InstanceConfiguration,
        cipher: Option<&dyn SecretCipher>,
        reveal: bool,
    ) -> Result<Self> {
        Ok(Self {
            key: record.key.clone(),
            value: display_value(record, cipher, reveal)?,
            category: record.category.to_string(),
            is_encrypted: record.is_encrypted,
            updated_at: record.updated_at.to_rfc3339(),
        })
    }
}

#[derive(Debug, Serialize)]
pub struct ConfigurationListOutput {
    pub configurations: Vec<ConfigurationOutput>,
    pub total: usize,
}

impl CommandOutput for ConfigurationListOutput {
    fn to_human(&self) -> String {
        let mut table = list_table(&["key", "value", "category", "encrypted"]);
        for item in &self.configurations {
            table.add_row(vec![
                item.key.clone(),
                item.value.as_deref().map_or_else(|| "(unset)".to_string(), |v| truncate(v, 48)),
                item.category.clone(),
                if item.is_encrypted { "yes" } else { "no" }.to_string(),
            ]);
        }
        render_list("configuration key", "configuration keys", &table, self.total)
    }
}

pub async fn execute(args: ListArgs, config: &Config, json_mode: bool) -> Result<()> {
    let repository = open_repository(config).await?;
    let cipher = if args.reveal { build_cipher(config)? } else { None };

    let category = args.category.as_deref().map(ConfigCategory::parse);
    let records = repository.list(category.as_ref()).await?;

    let configurations = records
        .iter()
        .map(|r| ConfigurationOutput::build(r, cipher.as_deref(), args.reveal))
        .collect::<Result<Vec<_>>>()?;

    let out = ConfigurationListOutput {
        total: configurations.len(),
        configurations,
    };
    output(&out, json_mode);
    Ok(())
}
