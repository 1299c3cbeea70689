//! Configuration seeder.
//!
//! Builds descriptors from the seed catalog and the environment, applies
//! OIDC autodiscovery, then writes every descriptor whose key is not yet
//! stored. Existing records are never touched, so repeated runs are no-ops.
//!
//! Failures are local to the item that caused them. Discovery is the one
//! exception: it either patches all four endpoint keys or none of them.

use std::sync::Arc;

use serde::Serialize;
use tracing::{error, info, instrument, warn};

use crate::domain::errors::CipherError;
use crate::domain::models::{
    ConfigCategory, ConfigItem, InstanceConfiguration, OidcDiscoveryKeys, OidcEndpoints,
    SeedCatalogEntry, SEED_CATALOG,
};
use crate::domain::ports::{DiscoveryResolver, Environment, InstanceConfigRepository, SecretCipher};

/// Options for a single seeding run.
#[derive(Debug, Clone, Copy, Default)]
pub struct SeedOptions {
    /// Look up and report without encrypting or writing anything
    pub dry_run: bool,
}

/// Outcome for one key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SeedStatus {
    /// Record written
    Created,
    /// Record would be written (dry run)
    WouldCreate,
    /// Record already present and left untouched
    AlreadyExists,
    /// Not attempted this run; a later run may still seed it
    Skipped {
        /// Why the key was held back
        reason: String,
    },
    /// Encryption or store failure for this key
    Failed {
        /// Error text, without the value
        reason: String,
    },
}

impl SeedStatus {
    /// True for [`SeedStatus::Failed`].
    pub const fn is_failure(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }

    /// Variant without its payload.
    pub const fn kind(&self) -> SeedStatusKind {
        match self {
            Self::Created => SeedStatusKind::Created,
            Self::WouldCreate => SeedStatusKind::WouldCreate,
            Self::AlreadyExists => SeedStatusKind::AlreadyExists,
            Self::Skipped { .. } => SeedStatusKind::Skipped,
            Self::Failed { .. } => SeedStatusKind::Failed,
        }
    }
}

/// Payload-free discriminant of [`SeedStatus`], used for tallies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SeedStatusKind {
    /// See [`SeedStatus::Created`]
    Created,
    /// See [`SeedStatus::WouldCreate`]
    WouldCreate,
    /// See [`SeedStatus::AlreadyExists`]
    AlreadyExists,
    /// See [`SeedStatus::Skipped`]
    Skipped,
    /// See [`SeedStatus::Failed`]
    Failed,
}

impl SeedStatusKind {
    /// Wire name, matching the serialized `status` tag.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Created => "created",
            Self::WouldCreate => "would_create",
            Self::AlreadyExists => "already_exists",
            Self::Skipped => "skipped",
            Self::Failed => "failed",
        }
    }
}

/// One line of the seeding log.
#[derive(Debug, Clone, Serialize)]
pub struct SeedEntry {
    /// Configuration key
    pub key: String,
    /// Category the key is stored under
    pub category: ConfigCategory,
    /// What happened to the key this run
    #[serde(flatten)]
    pub status: SeedStatus,
}

/// Result of the OIDC autodiscovery step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum DiscoveryOutcome {
    /// No discovery URL was configured
    NotConfigured,
    /// Endpoints resolved and applied to the four endpoint keys
    Applied {
        /// Discovery document URL
        url: String,
        /// Endpoints written into the four endpoint keys
        endpoints: OidcEndpoints,
    },
    /// Resolution failed; endpoint keys were skipped
    Failed {
        /// Discovery document URL
        url: String,
        /// Resolver error text
        reason: String,
    },
}

/// Per-key log plus the discovery outcome of one run.
#[derive(Debug, Clone, Serialize)]
pub struct SeedReport {
    /// Whether the run was a dry run
    pub dry_run: bool,
    /// Outcome of OIDC autodiscovery
    pub discovery: DiscoveryOutcome,
    /// One entry per processed key, in processing order
    pub entries: Vec<SeedEntry>,
}

impl SeedReport {
    /// True when no unrecoverable error occurred.
    pub fn is_success(&self) -> bool {
        self.failure_count() == 0
    }

    /// Failed keys plus a failed discovery.
    pub fn failure_count(&self) -> usize {
        let discovery = usize::from(matches!(self.discovery, DiscoveryOutcome::Failed { .. }));
        self.entries.iter().filter(|e| e.status.is_failure()).count() + discovery
    }

    /// Number of entries whose status is of `kind`.
    pub fn count(&self, kind: SeedStatusKind) -> usize {
        self.entries.iter().filter(|e| e.status.kind() == kind).count()
    }

    /// Entry for `key`, if it was processed.
    pub fn entry(&self, key: &str) -> Option<&SeedEntry> {
        self.entries.iter().find(|e| e.key == key)
    }
}

/// Seeds instance configuration from the environment.
pub struct ConfigSeeder<R: InstanceConfigRepository> {
    repository: Arc<R>,
    cipher: Option<Arc<dyn SecretCipher>>,
    discovery: Arc<dyn DiscoveryResolver>,
    catalog: Vec<SeedCatalogEntry>,
    oidc_keys: OidcDiscoveryKeys,
}

impl<R: InstanceConfigRepository> ConfigSeeder<R> {
    /// Create a seeder over the built-in catalog.
    ///
    /// Without a cipher, any non-blank sensitive value fails with
    /// [`CipherError::MissingKey`].
    pub fn new(
        repository: Arc<R>,
        cipher: Option<Arc<dyn SecretCipher>>,
        discovery: Arc<dyn DiscoveryResolver>,
    ) -> Self {
        Self {
            repository,
            cipher,
            discovery,
            catalog: SEED_CATALOG.to_vec(),
            oidc_keys: OidcDiscoveryKeys::DEFAULT,
        }
    }

    /// Replace the catalog.
    pub fn with_catalog(mut self, catalog: Vec<SeedCatalogEntry>) -> Self {
        self.catalog = catalog;
        self
    }

    /// Replace the OIDC key names.
    pub fn with_oidc_keys(mut self, keys: OidcDiscoveryKeys) -> Self {
        self.oidc_keys = keys;
        self
    }

    /// Catalog this seeder resolves.
    pub fn catalog(&self) -> &[SeedCatalogEntry] {
        &self.catalog
    }

    /// Build the descriptor list from the environment, in catalog order.
    pub fn resolve_items(&self, env: &dyn Environment) -> Vec<ConfigItem> {
        self.catalog
            .iter()
            .map(|entry| {
                ConfigItem::new(
                    entry.key,
                    entry.resolve_value(|name| env.get(name)),
                    entry.category.clone(),
                    entry.is_encrypted,
                )
            })
            .collect()
    }

    /// Run one seeding pass.
    #[instrument(skip(self, env), fields(dry_run = options.dry_run))]
    pub async fn seed(&self, env: &dyn Environment, options: SeedOptions) -> SeedReport {
        let mut items = self.resolve_items(env);
        let discovery = self.apply_discovery(&mut items).await;
        let discovery_failed = matches!(discovery, DiscoveryOutcome::Failed { .. });

        let mut entries = Vec::with_capacity(items.len());
        for item in &items {
            let held = discovery_failed && self.oidc_keys.is_endpoint_key(&item.key);
            let status = self.seed_item(item, options, held).await;

            entries.push(SeedEntry {
                key: item.key.clone(),
                category: item.category.clone(),
                status,
            });
        }

        let report = SeedReport {
            dry_run: options.dry_run,
            discovery,
            entries,
        };

        info!(
            created = report.count(SeedStatusKind::Created),
            existing = report.count(SeedStatusKind::AlreadyExists),
            failed = report.failure_count(),
            "seeding finished"
        );

        report
    }

    /// Resolve OIDC endpoints and patch the endpoint descriptors.
    ///
    /// The discovery descriptor is removed from `items` in every case.
    async fn apply_discovery(&self, items: &mut Vec<ConfigItem>) -> DiscoveryOutcome {
        let Some(position) = items.iter().position(|i| i.key == self.oidc_keys.discovery) else {
            return DiscoveryOutcome::NotConfigured;
        };
        let trigger = items.remove(position);

        let url = match trigger.value.as_deref().map(str::trim) {
            Some(url) if !url.is_empty() => url.to_string(),
            _ => return DiscoveryOutcome::NotConfigured,
        };

        match self.discovery.discover(&url).await {
            Ok(endpoints) => {
                for (key, value) in self.oidc_keys.assignments(&endpoints) {
                    match items.iter_mut().find(|i| i.key == key) {
                        Some(item) => item.value = Some(value.to_string()),
                        None => warn!(key, "discovered endpoint has no catalog entry"),
                    }
                }
                info!(url = %url, "applied OIDC endpoints from discovery");
                DiscoveryOutcome::Applied { url, endpoints }
            }
            Err(err) => {
                error!(url = %url, error = %err, "OIDC discovery failed");
                DiscoveryOutcome::Failed {
                    url,
                    reason: err.to_string(),
                }
            }
        }
    }

    /// Seed one descriptor. A `held` key is reported as skipped unless it is
    /// already stored.
    async fn seed_item(&self, item: &ConfigItem, options: SeedOptions, held: bool) -> SeedStatus {
        match self.repository.get(&item.key).await {
            Ok(Some(_)) => {
                warn!(key = %item.key, "configuration already exists");
                return SeedStatus::AlreadyExists;
            }
            Ok(None) => {}
            Err(err) => {
                error!(key = %item.key, error = %err, "configuration lookup failed");
                return SeedStatus::Failed {
                    reason: err.to_string(),
                };
            }
        }

        if held {
            warn!(key = %item.key, "skipping OIDC endpoint after failed discovery");
            return SeedStatus::Skipped {
                reason: "OIDC discovery failed".to_string(),
            };
        }

        if options.dry_run {
            return SeedStatus::WouldCreate;
        }

        let value = match self.stored_value(item) {
            Ok(value) => value,
            Err(err) => {
                error!(key = %item.key, error = %err, "failed to encrypt configuration value");
                return SeedStatus::Failed {
                    reason: err.to_string(),
                };
            }
        };

        let record = InstanceConfiguration::new(
            item.key.clone(),
            value,
            item.category.clone(),
            item.is_encrypted,
        );

        match self.repository.insert_if_absent(&record).await {
            Ok(true) => {
                info!(key = %item.key, category = %item.category, "configuration loaded from environment");
                SeedStatus::Created
            }
            Ok(false) => {
                warn!(key = %item.key, "configuration already exists");
                SeedStatus::AlreadyExists
            }
            Err(err) => {
                error!(key = %item.key, error = %err, "failed to store configuration");
                SeedStatus::Failed {
                    reason: err.to_string(),
                }
            }
        }
    }

    /// Value to persist. Blank sensitive values are stored verbatim.
    fn stored_value(&self, item: &ConfigItem) -> Result<Option<String>, CipherError> {
        if !item.is_encrypted || item.is_blank() {
            return Ok(item.value.clone());
        }

        let plaintext = item.value.as_deref().unwrap_or_default();
        let cipher = self.cipher.as_ref().ok_or(CipherError::MissingKey)?;
        cipher.encrypt(plaintext).map(Some)
    }
}
