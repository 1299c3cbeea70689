//! OIDC endpoint set returned by discovery.

use serde::{Deserialize, Serialize};

/// The four provider endpoints the instance needs, in discovery order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OidcEndpoints {
    pub authorization_url: String,
    pub token_url: String,
    pub userinfo_url: String,
    pub end_session_url: String,
}
