//! Identity token configuration
//!
//! Members authenticate against an external identity provider which issues
//! HS256-signed bearer tokens. The server only verifies those tokens.

use serde::{Deserialize, Serialize};

const DEFAULT_SECRET: &str = "your-secret-key-change-in-production";

/// Bearer token verification configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AuthConfig {
    /// Shared secret used to verify token signatures
    pub token_secret: String,

    /// Expected `iss` claim; not checked when unset
    #[serde(default)]
    pub issuer: Option<String>,

    /// Allowed clock skew in seconds when checking `exp`
    #[serde(default = "default_leeway")]
    pub leeway_seconds: u64,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            token_secret: String::from(DEFAULT_SECRET),
            issuer: None,
            leeway_seconds: default_leeway(),
        }
    }
}

impl AuthConfig {
    /// Create a new configuration with secret
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            token_secret: secret.into(),
            ..Default::default()
        }
    }

    /// Require a specific issuer
    pub fn with_issuer(mut self, issuer: impl Into<String>) -> Self {
        self.issuer = Some(issuer.into());
        self
    }

    /// Override fields from `AUTH_TOKEN_SECRET`, `AUTH_TOKEN_ISSUER` and
    /// `AUTH_TOKEN_LEEWAY`
    pub fn merge_env(mut self) -> Self {
        if let Ok(secret) = std::env::var("AUTH_TOKEN_SECRET") {
            self.token_secret = secret;
        }
        if let Ok(issuer) = std::env::var("AUTH_TOKEN_ISSUER") {
            self.issuer = Some(issuer);
        }
        if let Some(leeway) = std::env::var("AUTH_TOKEN_LEEWAY")
            .ok()
            .and_then(|v| v.parse().ok())
        {
            self.leeway_seconds = leeway;
        }
        self
    }

    /// Check if using default secret (security warning)
    pub fn is_using_default_secret(&self) -> bool {
        self.token_secret == DEFAULT_SECRET
    }
}

fn default_leeway() -> u64 {
    30
}
