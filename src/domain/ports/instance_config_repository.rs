//! Instance configuration repository port.

use async_trait::async_trait;

use crate::domain::errors::DomainResult;
use crate::domain::models::{ConfigCategory, InstanceConfiguration};

/// Repository interface for instance configuration persistence.
///
/// Records are unique by `key`. The seeder only ever reads and inserts;
/// it never updates or deletes.
#[async_trait]
pub trait InstanceConfigRepository: Send + Sync {
    /// Get a record by key.
    async fn get(&self, key: &str) -> DomainResult<Option<InstanceConfiguration>>;

    /// Insert a record unless one with the same key already exists.
    ///
    /// Returns `true` when the record was written. The check and the write
    /// are a single atomic step.
    async fn insert_if_absent(&self, record: &InstanceConfiguration) -> DomainResult<bool>;

    /// List records ordered by key, optionally restricted to one category.
    async fn list(&self, category: Option<&ConfigCategory>) -> DomainResult<Vec<InstanceConfiguration>>;
}
