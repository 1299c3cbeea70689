//! Seed CLI command.

use std::sync::Arc;

use anyhow::{Context, Result};
use console::style;

use super::{build_cipher, open_repository};
use crate::cli::output::{output, CommandOutput};
use crate::cli::types::SeedArgs;
use crate::cli::AlreadyReported;
use crate::domain::models::Config;
use crate::infrastructure::oidc::HttpDiscoveryResolver;
use crate::infrastructure::ProcessEnvironment;
use crate::services::{ConfigSeeder, DiscoveryOutcome, SeedOptions, SeedReport, SeedStatus, SeedStatusKind};

impl CommandOutput for SeedReport {
    fn to_human(&self) -> String {
        let mut lines = Vec::with_capacity(self.entries.len() + 2);

        match &self.discovery {
            DiscoveryOutcome::NotConfigured => {}
            DiscoveryOutcome::Applied { url, .. } => {
                lines.push(style(format!("OIDC endpoints discovered from {url}.")).green().to_string());
            }
            DiscoveryOutcome::Failed { reason, .. } => {
                lines.push(style(format!("OIDC discovery failed: {reason}")).red().to_string());
            }
        }

        for entry in &self.entries {
            let line = match &entry.status {
                SeedStatus::Created => {
                    style(format!("{} loaded with value from environment variable.", entry.key)).green()
                }
                SeedStatus::WouldCreate => {
                    style(format!("{} would be loaded from environment variable.", entry.key)).cyan()
                }
                SeedStatus::AlreadyExists => {
                    style(format!("{} configuration already exists", entry.key)).yellow()
                }
                SeedStatus::Skipped { reason } => style(format!("{} skipped: {reason}", entry.key)).yellow(),
                SeedStatus::Failed { reason } => style(format!("{} failed: {reason}", entry.key)).red(),
            };
            lines.push(line.to_string());
        }

        let created = if self.dry_run {
            format!("{} to create", self.count(SeedStatusKind::WouldCreate))
        } else {
            format!("{} created", self.count(SeedStatusKind::Created))
        };
        lines.push(format!(
            "\n{}, {} existing, {} skipped, {} failed{}",
            created,
            self.count(SeedStatusKind::AlreadyExists),
            self.count(SeedStatusKind::Skipped),
            self.failure_count(),
            if self.dry_run { " (dry run)" } else { "" }
        ));

        lines.join("\n")
    }

    fn to_json(&self) -> serde_json::Value {
        let mut json = serde_json::to_value(self).unwrap_or_default();
        if let Some(map) = json.as_object_mut() {
            map.insert("success".to_string(), self.is_success().into());
            map.insert("failure_count".to_string(), self.failure_count().into());
        }
        json
    }
}

pub async fn execute(args: SeedArgs, config: &Config, json_mode: bool) -> Result<()> {
    let repository = Arc::new(open_repository(config).await?);
    let cipher = build_cipher(config)?;
    let discovery = Arc::new(
        HttpDiscoveryResolver::new(&config.discovery).context("Failed to create OIDC discovery client")?,
    );

    let seeder = ConfigSeeder::new(repository, cipher, discovery);
    let report = seeder
        .seed(&ProcessEnvironment, SeedOptions { dry_run: args.dry_run })
        .await;

    output(&report, json_mode);

    if !report.is_success() {
        return Err(AlreadyReported(format!(
            "{} configuration item(s) could not be seeded",
            report.failure_count()
        ))
        .into());
    }
    Ok(())
}
