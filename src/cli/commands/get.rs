//! Get CLI command.

use anyhow::Result;
use serde::Serialize;

use super::list::ConfigurationOutput;
use super::{build_cipher, open_repository};
use crate::cli::output::{output, CommandOutput};
use crate::cli::types::GetArgs;
use crate::domain::errors::DomainError;
use crate::domain::models::Config;
use crate::domain::ports::InstanceConfigRepository;

#[derive(Debug, Serialize)]
pub struct ConfigurationDetailOutput {
    #[serde(flatten)]
    pub configuration: ConfigurationOutput,
}

impl CommandOutput for ConfigurationDetailOutput {
    fn to_human(&self) -> String {
        let c = &self.configuration;
        [
            format!("Key: {}", c.key),
            format!("Value: {}", c.value.as_deref().unwrap_or("(unset)")),
            format!("Category: {}", c.category),
            format!("Encrypted: {}", if c.is_encrypted { "yes" } else { "no" }),
            format!("Updated: {}", c.updated_at),
        ]
        .join("\n")
    }
}

pub async fn execute(args: GetArgs, config: &Config, json_mode: bool) -> Result<()> {
    let repository = open_repository(config).await?;
    let record = repository
        .get(&args.key)
        .await?
        .ok_or_else(|| DomainError::ConfigNotFound(args.key.clone()))?;

    let cipher = if args.decrypt && record.is_encrypted {
        build_cipher(config)?
    } else {
        None
    };

    let out = ConfigurationDetailOutput {
        configuration: ConfigurationOutput::build(&record, cipher.as_deref(), args.decrypt)?,
    };
    output(&out, json_mode);
    Ok(())
}
