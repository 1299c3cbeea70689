//! Seed catalog: the declarative table of configuration keys seeded from
//! the environment.
//!
//! Declaration order is processing order. The OIDC endpoint keys are found
//! by name through [`OidcDiscoveryKeys`], so their position in the table
//! carries no meaning.

use super::instance_config::ConfigCategory;
use super::oidc::OidcEndpoints;

/// One row of the seed catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedCatalogEntry {
    /// Key under which the value is stored
    pub key: &'static str,
    /// Environment variable the value is read from
    pub env_var: &'static str,
    /// Fallback variable names, consulted in order when `env_var` is unset
    pub env_aliases: &'static [&'static str],
    /// Value used when no variable is set; `None` leaves the key unset
    pub default_value: Option<&'static str>,
    pub category: ConfigCategory,
    pub is_encrypted: bool,
}

impl SeedCatalogEntry {
    const fn plain(
        key: &'static str,
        default_value: Option<&'static str>,
        category: ConfigCategory,
    ) -> Self {
        Self {
            key,
            env_var: key,
            env_aliases: &[],
            default_value,
            category,
            is_encrypted: false,
        }
    }

    const fn secret(
        key: &'static str,
        default_value: Option<&'static str>,
        category: ConfigCategory,
    ) -> Self {
        Self {
            key,
            env_var: key,
            env_aliases: &[],
            default_value,
            category,
            is_encrypted: true,
        }
    }

    /// Resolve the value from an environment lookup.
    ///
    /// A variable that is set wins even when it is empty; the default only
    /// applies when neither the variable nor any alias is set.
    pub fn resolve_value<F>(&self, lookup: F) -> Option<String>
    where
        F: Fn(&str) -> Option<String>,
    {
        std::iter::once(self.env_var)
            .chain(self.env_aliases.iter().copied())
            .find_map(&lookup)
            .or_else(|| self.default_value.map(str::to_string))
    }
}

/// Names of the OIDC keys involved in autodiscovery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OidcDiscoveryKeys {
    /// Control input holding the discovery URL; never stored
    pub discovery: &'static str,
    pub authorization: &'static str,
    pub token: &'static str,
    pub userinfo: &'static str,
    pub end_session: &'static str,
}

impl OidcDiscoveryKeys {
    pub const DEFAULT: Self = Self {
        discovery: "OIDC_DISCOVERY",
        authorization: "OIDC_URL_AUTHORIZATION",
        token: "OIDC_URL_TOKEN",
        userinfo: "OIDC_URL_USERINFO",
        end_session: "OIDC_URL_ENDSESSION",
    };

    /// The four endpoint keys.
    pub fn endpoint_keys(&self) -> [&'static str; 4] {
        [self.authorization, self.token, self.userinfo, self.end_session]
    }

    /// Pair each endpoint key with its discovered URL.
    pub fn assignments<'a>(&self, endpoints: &'a OidcEndpoints) -> [(&'static str, &'a str); 4] {
        [
            (self.authorization, endpoints.authorization_url.as_str()),
            (self.token, endpoints.token_url.as_str()),
            (self.userinfo, endpoints.userinfo_url.as_str()),
            (self.end_session, endpoints.end_session_url.as_str()),
        ]
    }

    pub fn is_endpoint_key(&self, key: &str) -> bool {
        self.endpoint_keys().contains(&key)
    }
}

impl Default for OidcDiscoveryKeys {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Keys seeded on every instance.
pub static SEED_CATALOG: &[SeedCatalogEntry] = &[
    // Authentication
    SeedCatalogEntry::plain("ENABLE_SIGNUP", Some("1"), ConfigCategory::Authentication),
    SeedCatalogEntry::plain("ENABLE_EMAIL_PASSWORD", Some("1"), ConfigCategory::Authentication),
    SeedCatalogEntry::plain("ENABLE_MAGIC_LINK_LOGIN", Some("0"), ConfigCategory::Authentication),
    // OAuth providers
    SeedCatalogEntry::plain("GOOGLE_CLIENT_ID", None, ConfigCategory::Google),
    SeedCatalogEntry::plain("GITHUB_CLIENT_ID", None, ConfigCategory::Github),
    SeedCatalogEntry::secret("GITHUB_CLIENT_SECRET", None, ConfigCategory::Github),
    // OIDC
    SeedCatalogEntry::plain("OIDC_AUTO", Some("0"), ConfigCategory::Oidc),
    SeedCatalogEntry::plain("OIDC_DISCOVERY", None, ConfigCategory::Oidc),
    SeedCatalogEntry::plain("OIDC_CLIENT_ID", None, ConfigCategory::Oidc),
    SeedCatalogEntry::secret("OIDC_CLIENT_SECRET", None, ConfigCategory::Oidc),
    SeedCatalogEntry::plain("OIDC_URL_AUTHORIZATION", None, ConfigCategory::Oidc),
    SeedCatalogEntry::plain("OIDC_URL_TOKEN", None, ConfigCategory::Oidc),
    SeedCatalogEntry::plain("OIDC_URL_USERINFO", None, ConfigCategory::Oidc),
    SeedCatalogEntry::plain("OIDC_URL_ENDSESSION", None, ConfigCategory::Oidc),
    // SMTP
    SeedCatalogEntry::plain("EMAIL_HOST", Some(""), ConfigCategory::Smtp),
    SeedCatalogEntry::plain("EMAIL_HOST_USER", Some(""), ConfigCategory::Smtp),
    SeedCatalogEntry::secret("EMAIL_HOST_PASSWORD", Some(""), ConfigCategory::Smtp),
    SeedCatalogEntry::plain("EMAIL_PORT", Some("587"), ConfigCategory::Smtp),
    SeedCatalogEntry::plain("EMAIL_FROM", Some(""), ConfigCategory::Smtp),
    SeedCatalogEntry::plain("EMAIL_USE_TLS", Some("1"), ConfigCategory::Smtp),
    // Third-party APIs
    SeedCatalogEntry::secret("OPENAI_API_KEY", None, ConfigCategory::Openai),
    SeedCatalogEntry::plain("GPT_ENGINE", Some("gpt-3.5-turbo"), ConfigCategory::Smtp),
    SeedCatalogEntry {
        key: "UNSPLASH_ACCESS_KEY",
        env_var: "UNSPLASH_ACCESS_KEY",
        env_aliases: &["UNSPLASH_ACESS_KEY"],
        default_value: Some(""),
        category: ConfigCategory::Unsplash,
        is_encrypted: true,
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::{HashMap, HashSet};

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |name: &str| map.get(name).cloned()
    }

    fn entry(key: &str) -> &'static SeedCatalogEntry {
        SEED_CATALOG.iter().find(|e| e.key == key).unwrap()
    }

    #[test]
    fn test_catalog_keys_are_unique() {
        let keys: HashSet<_> = SEED_CATALOG.iter().map(|e| e.key).collect();
        assert_eq!(keys.len(), SEED_CATALOG.len());
    }

    #[test]
    fn test_catalog_contains_every_oidc_key() {
        let keys = OidcDiscoveryKeys::DEFAULT;
        assert!(SEED_CATALOG.iter().any(|e| e.key == keys.discovery));
        for key in keys.endpoint_keys() {
            assert!(SEED_CATALOG.iter().any(|e| e.key == key), "missing {key}");
        }
    }

    #[test]
    fn test_resolve_uses_default_when_unset() {
        assert_eq!(entry("ENABLE_SIGNUP").resolve_value(lookup(&[])), Some("1".to_string()));
        assert_eq!(entry("GOOGLE_CLIENT_ID").resolve_value(lookup(&[])), None);
    }

    #[test]
    fn test_resolve_prefers_set_variable_even_when_empty() {
        let value = entry("EMAIL_PORT").resolve_value(lookup(&[("EMAIL_PORT", "")]));
        assert_eq!(value, Some(String::new()));
    }

    #[test]
    fn test_resolve_falls_back_to_alias() {
        let unsplash = entry("UNSPLASH_ACCESS_KEY");

        let from_alias = unsplash.resolve_value(lookup(&[("UNSPLASH_ACESS_KEY", "legacy")]));
        assert_eq!(from_alias, Some("legacy".to_string()));

        let primary_wins = unsplash.resolve_value(lookup(&[
            ("UNSPLASH_ACCESS_KEY", "primary"),
            ("UNSPLASH_ACESS_KEY", "legacy"),
        ]));
        assert_eq!(primary_wins, Some("primary".to_string()));
    }

    #[test]
    fn test_sensitive_keys_are_encrypted() {
        for key in [
            "GITHUB_CLIENT_SECRET",
            "OIDC_CLIENT_SECRET",
            "EMAIL_HOST_PASSWORD",
            "OPENAI_API_KEY",
            "UNSPLASH_ACCESS_KEY",
        ] {
            assert!(entry(key).is_encrypted, "{key} should be encrypted");
        }
        assert!(!entry("OIDC_DISCOVERY").is_encrypted);
    }

    #[test]
    fn test_categories_match_stored_layout() {
        assert_eq!(entry("GPT_ENGINE").category, ConfigCategory::Smtp);
        assert_eq!(entry("OPENAI_API_KEY").category, ConfigCategory::Openai);
        assert_eq!(entry("UNSPLASH_ACCESS_KEY").category, ConfigCategory::Unsplash);
        assert_eq!(entry("OIDC_URL_ENDSESSION").category, ConfigCategory::Oidc);
    }

    #[test]
    fn test_assignments_pair_keys_with_urls() {
        let endpoints = OidcEndpoints {
            authorization_url: "https://idp/auth".into(),
            token_url: "https://idp/token".into(),
            userinfo_url: "https://idp/userinfo".into(),
            end_session_url: "https://idp/logout".into(),
        };
        let pairs = OidcDiscoveryKeys::DEFAULT.assignments(&endpoints);
        assert_eq!(pairs[0], ("OIDC_URL_AUTHORIZATION", "https://idp/auth"));
        assert_eq!(pairs[3], ("OIDC_URL_ENDSESSION", "https://idp/logout"));
    }
}
