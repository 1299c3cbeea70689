//! In-memory instance configuration repository.
//!
//! Used by tests and dry runs where no database is available.

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::InstanceConfigRepository;
use crate::domain::errors::DomainResult;
use crate::domain::models::{ConfigCategory, InstanceConfiguration};

/// A repository that keeps records in a key-ordered map.
#[derive(Debug, Default)]
pub struct InMemoryInstanceConfigRepository {
    records: RwLock<BTreeMap<String, InstanceConfiguration>>,
}

impl InMemoryInstanceConfigRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored records.
    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

#[async_trait]
impl InstanceConfigRepository for InMemoryInstanceConfigRepository {
    async fn get(&self, key: &str) -> DomainResult<Option<InstanceConfiguration>> {
        Ok(self.records.read().await.get(key).cloned())
    }

    async fn insert_if_absent(&self, record: &InstanceConfiguration) -> DomainResult<bool> {
        let mut records = self.records.write().await;
        if records.contains_key(&record.key) {
            return Ok(false);
        }
        records.insert(record.key.clone(), record.clone());
        Ok(true)
    }

    async fn list(&self, category: Option<&ConfigCategory>) -> DomainResult<Vec<InstanceConfiguration>> {
        Ok(self
            .records
            .read()
            .await
            .values()
            .filter(|r| category.is_none_or(|c| &r.category == c))
            .cloned()
            .collect())
    }
}
