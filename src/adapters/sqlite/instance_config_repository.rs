//! SQLite implementation of the InstanceConfigRepository.

use async_trait::async_trait;
use sqlx::SqlitePool;

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::models::{ConfigCategory, InstanceConfiguration};
use crate::domain::ports::InstanceConfigRepository;

#[derive(Clone)]
pub struct SqliteInstanceConfigRepository {
    pool: SqlitePool,
}

impl SqliteInstanceConfigRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl InstanceConfigRepository for SqliteInstanceConfigRepository {
    async fn get(&self, key: &str) -> DomainResult<Option<InstanceConfiguration>> {
        let row: Option<InstanceConfigRow> = sqlx::query_as(
            "SELECT * FROM instance_configurations WHERE key = ?"
        )
        .bind(key)
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| r.try_into()).transpose()
    }

    async fn insert_if_absent(&self, record: &InstanceConfiguration) -> DomainResult<bool> {
        let result = sqlx::query(
            r#"INSERT INTO instance_configurations (id, key, value, category, is_encrypted, created_at, updated_at)
               VALUES (?, ?, ?, ?, ?, ?, ?)
               ON CONFLICT(key) DO NOTHING"#
        )
        .bind(record.id.to_string())
        .bind(&record.key)
        .bind(&record.value)
        .bind(record.category.as_str())
        .bind(i32::from(record.is_encrypted))
        .bind(record.created_at.to_rfc3339())
        .bind(record.updated_at.to_rfc3339())
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() == 1)
    }

    async fn list(&self, category: Option<&ConfigCategory>) -> DomainResult<Vec<InstanceConfiguration>> {
        let rows: Vec<InstanceConfigRow> = sqlx::query_as(
            "SELECT * FROM instance_configurations WHERE (?1 IS NULL OR category = ?1) ORDER BY key"
        )
        .bind(category.map(ConfigCategory::as_str))
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(|r| r.try_into()).collect()
    }
}

#[derive(sqlx::FromRow)]
struct InstanceConfigRow {
    id: String,
    key: String,
    value: Option<String>,
    category: String,
    is_encrypted: i32,
    created_at: String,
    updated_at: String,
}

impl TryFrom<InstanceConfigRow> for InstanceConfiguration {
    type Error = DomainError;

    fn try_from(row: InstanceConfigRow) -> Result<Self, Self::Error> {
        Ok(InstanceConfiguration {
            id: super::parse_uuid(&row.id)?,
            key: row.key,
            value: row.value,
            category: ConfigCategory::parse(&row.category),
            is_encrypted: row.is_encrypted != 0,
            created_at: super::parse_datetime(&row.created_at)?,
            updated_at: super::parse_datetime(&row.updated_at)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::sqlite::create_migrated_test_pool;

    async fn setup_test_repo() -> SqliteInstanceConfigRepository {
        let pool = create_migrated_test_pool().await.unwrap();
        SqliteInstanceConfigRepository::new(pool)
    }

    #[tokio::test]
    async fn test_insert_and_get() {
        let repo = setup_test_repo().await;
        let record = InstanceConfiguration::new(
            "GITHUB_CLIENT_SECRET",
            Some("ciphertext".into()),
            ConfigCategory::Github,
            true,
        );

        assert!(repo.insert_if_absent(&record).await.unwrap());

        let stored = repo.get("GITHUB_CLIENT_SECRET").await.unwrap().unwrap();
        assert_eq!(stored.id, record.id);
        assert_eq!(stored.value.as_deref(), Some("ciphertext"));
        assert_eq!(stored.category, ConfigCategory::Github);
        assert!(stored.is_encrypted);
        assert_eq!(stored.created_at.timestamp(), record.created_at.timestamp());
    }

    #[tokio::test]
    async fn test_get_missing_key() {
        let repo = setup_test_repo().await;
        assert!(repo.get("NOPE").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_insert_if_absent_does_not_overwrite() {
        let repo = setup_test_repo().await;
        let first = InstanceConfiguration::new("ENABLE_SIGNUP", Some("0".into()), ConfigCategory::Authentication, false);
        let second = InstanceConfiguration::new("ENABLE_SIGNUP", Some("1".into()), ConfigCategory::Authentication, false);

        assert!(repo.insert_if_absent(&first).await.unwrap());
        assert!(!repo.insert_if_absent(&second).await.unwrap());

        let stored = repo.get("ENABLE_SIGNUP").await.unwrap().unwrap();
        assert_eq!(stored.id, first.id);
        assert_eq!(stored.value.as_deref(), Some("0"));
    }

    #[tokio::test]
    async fn test_null_value_round_trips() {
        let repo = setup_test_repo().await;
        let record = InstanceConfiguration::new("GOOGLE_CLIENT_ID", None, ConfigCategory::Google, false);
        repo.insert_if_absent(&record).await.unwrap();

        let stored = repo.get("GOOGLE_CLIENT_ID").await.unwrap().unwrap();
        assert_eq!(stored.value, None);
    }

    #[tokio::test]
    async fn test_list_orders_by_key_and_filters() {
        let repo = setup_test_repo().await;
        for (key, category) in [
            ("EMAIL_PORT", ConfigCategory::Smtp),
            ("ENABLE_SIGNUP", ConfigCategory::Authentication),
            ("EMAIL_HOST", ConfigCategory::Smtp),
        ] {
            repo.insert_if_absent(&InstanceConfiguration::new(key, None, category, false))
                .await
                .unwrap();
        }

        let all = repo.list(None).await.unwrap();
        let keys: Vec<_> = all.iter().map(|r| r.key.as_str()).collect();
        assert_eq!(keys, vec!["EMAIL_HOST", "EMAIL_PORT", "ENABLE_SIGNUP"]);

        let smtp = repo.list(Some(&ConfigCategory::Smtp)).await.unwrap();
        assert_eq!(smtp.len(), 2);
        assert!(smtp.iter().all(|r| r.category == ConfigCategory::Smtp));
    }

    #[tokio::test]
    async fn test_unknown_category_is_preserved() {
        let repo = setup_test_repo().await;
        let record = InstanceConfiguration::new(
            "BILLING_PLAN",
            Some("pro".into()),
            ConfigCategory::Other("BILLING".into()),
            false,
        );
        repo.insert_if_absent(&record).await.unwrap();

        let stored = repo.get("BILLING_PLAN").await.unwrap().unwrap();
        assert_eq!(stored.category, ConfigCategory::Other("BILLING".into()));
    }
}
