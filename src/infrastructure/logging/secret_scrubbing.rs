use regex::Regex;
use std::fmt;

/// Redacts credentials from free-form text before it reaches a terminal.
///
/// Error chains can carry URLs with embedded credentials or echo request
/// bodies, so anything surfaced to the operator goes through here first.
#[derive(Clone)]
pub struct SecretScrubber {
    api_key_pattern: Regex,
    field_pattern: Regex,
    bearer_pattern: Regex,
    url_credentials_pattern: Regex,
}

impl SecretScrubber {
    pub fn new() -> Self {
        Self {
            // OpenAI style keys: sk-..., sk-proj-...
            api_key_pattern: Regex::new(r"\bsk-[a-zA-Z0-9_-]{16,}").expect("static pattern"),
            field_pattern: Regex::new(
                r#"(?i)(["']?(?:client_secret|secret_key|secret|password|api_key|apikey|access_key|token)["']?\s*[:=]\s*)["']?[^"'\s,}&]+["']?"#,
            )
            .expect("static pattern"),
            bearer_pattern: Regex::new(r"Bearer\s+[a-zA-Z0-9._~+/=-]+").expect("static pattern"),
            url_credentials_pattern: Regex::new(r"(https?://)[^/\s:@]+:[^/\s@]+@").expect("static pattern"),
        }
    }

    /// Scrub a message of sensitive data
    pub fn scrub(&self, message: &str) -> String {
        let scrubbed = self.api_key_pattern.replace_all(message, "[API_KEY_REDACTED]");
        let scrubbed = self.bearer_pattern.replace_all(&scrubbed, "Bearer [TOKEN_REDACTED]");
        let scrubbed = self.url_credentials_pattern.replace_all(&scrubbed, "${1}[REDACTED]@");
        self.field_pattern.replace_all(&scrubbed, "${1}[REDACTED]").into_owned()
    }
}

impl Default for SecretScrubber {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for SecretScrubber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SecretScrubber").finish()
    }
}
