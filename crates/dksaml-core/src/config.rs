//! Profile configuration.
//!
//! Configuration is usually built in code with the `with_*` methods, but it
//! can also be read from a TOML document:
//!
//! ```toml
//! allowed_audience_uris = ["https://sp.example.dk"]
//! legacy_issuer_mode = false
//! statement_policy = "exactly-one-each"
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigResult};

/// Options recognized by the DK-SAML assertion validator.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileConfig {
    /// Audience URIs this relying party accepts.
    ///
    /// An empty list disables audience membership checks; the profile's
    /// structural audience rules still apply.
    pub allowed_audience_uris: Vec<String>,

    /// Relaxes issuer shape checks for identity providers that emit issuers
    /// in a non-entity format. The issuer must still be present.
    pub legacy_issuer_mode: bool,

    /// Which statement combinations an assertion may carry.
    pub statement_policy: StatementPolicy,
}

impl ProfileConfig {
    /// Creates a configuration that accepts the given audiences.
    #[must_use]
    pub fn new<I, S>(allowed_audience_uris: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            allowed_audience_uris: allowed_audience_uris.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Sets legacy issuer mode.
    #[must_use]
    pub const fn with_legacy_issuer_mode(mut self, enabled: bool) -> Self {
        self.legacy_issuer_mode = enabled;
        self
    }

    /// Sets the statement policy.
    #[must_use]
    pub const fn with_statement_policy(mut self, policy: StatementPolicy) -> Self {
        self.statement_policy = policy;
        self
    }

    /// Adds an accepted audience.
    #[must_use]
    pub fn with_audience(mut self, audience: impl Into<String>) -> Self {
        self.allowed_audience_uris.push(audience.into());
        self
    }

    /// Parses a configuration from TOML and validates it.
    pub fn from_toml_str(content: &str) -> ConfigResult<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads a configuration file.
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content)?;
        tracing::debug!(
            path = %path.display(),
            audiences = config.allowed_audience_uris.len(),
            legacy_issuer_mode = config.legacy_issuer_mode,
            "loaded DK-SAML profile config"
        );
        Ok(config)
    }

    /// Checks that the configured values are usable.
    pub fn validate(&self) -> ConfigResult<()> {
        if let Some(index) = self
            .allowed_audience_uris
            .iter()
            .position(|uri| uri.trim().is_empty())
        {
            return Err(ConfigError::Invalid {
                field: "allowed_audience_uris",
                reason: format!("entry {index} is blank"),
            });
        }
        Ok(())
    }

    /// Returns true if `audience` is one of the accepted audiences.
    #[must_use]
    pub fn accepts_audience(&self, audience: &str) -> bool {
        self.allowed_audience_uris.iter().any(|a| a == audience)
    }
}

/// Statement cardinality policy.
///
/// The DK-SAML 2.0 profile requires exactly one `AuthnStatement` and one
/// `AttributeStatement`. An identity provider that was asked for no
/// attributes may legitimately omit the `AttributeStatement`; the relaxed
/// policy exists for deployments that need to accept that.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StatementPolicy {
    /// Exactly one `AuthnStatement` and exactly one `AttributeStatement`.
    #[default]
    ExactlyOneEach,
    /// Exactly one `AuthnStatement` and at most one `AttributeStatement`.
    AttributeStatementOptional,
}

impl StatementPolicy {
    /// Returns true if the statement counts satisfy this policy.
    #[must_use]
    pub const fn permits(self, authn_count: usize, attribute_count: usize, total: usize) -> bool {
        match self {
            Self::ExactlyOneEach => total == 2 && authn_count == 1 && attribute_count == 1,
            Self::AttributeStatementOptional => {
                authn_count == 1 && attribute_count <= 1 && total == authn_count + attribute_count
            }
        }
    }
}
