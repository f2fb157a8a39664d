//! Building validators from configuration files.

use std::io::Write;

use dksaml_conformance_tests::{basic_assertion, SP_ENTITY_ID};
use dksaml_core::{ConfigError, ProfileConfig, StatementPolicy};
use dksaml_profile::{AssertionValidator, FormatViolation};
use dksaml_schema::Statement;

use crate::expect_violation;

#[test]
fn validator_from_config_file() -> anyhow::Result<()> {
    let mut file = tempfile::NamedTempFile::new()?;
    writeln!(
        file,
        r#"
allowed_audience_uris = ["{SP_ENTITY_ID}"]
legacy_issuer_mode = false
statement_policy = "attribute-statement-optional"
"#
    )?;

    let config = ProfileConfig::load(file.path())?;
    assert_eq!(config.statement_policy, StatementPolicy::AttributeStatementOptional);
    assert!(config.accepts_audience(SP_ENTITY_ID));

    let validator = AssertionValidator::new(config);
    let mut assertion = basic_assertion();
    validator.validate(&assertion)?;

    assertion
        .statements
        .retain(|statement| matches!(statement, Statement::Authn(_)));
    validator.validate(&assertion)?;
    Ok(())
}

#[test]
fn defaults_are_strict() -> anyhow::Result<()> {
    let config = ProfileConfig::from_toml_str("")?;
    assert_eq!(config, ProfileConfig::default());

    let validator = AssertionValidator::new(config);
    let mut assertion = basic_assertion();
    validator.validate(&assertion)?;

    assertion.statements.pop();
    assert!(matches!(
        expect_violation(validator.validate(&assertion))?,
        FormatViolation::InvalidStatementSet { .. }
    ));
    Ok(())
}

#[test]
fn invalid_config_is_rejected() {
    let err = ProfileConfig::from_toml_str(r#"allowed_audience_uris = ["  "]"#).unwrap_err();
    assert!(matches!(
        err,
        ConfigError::Invalid {
            field: "allowed_audience_uris",
            ..
        }
    ));

    let err = ProfileConfig::from_toml_str(r#"statement_policy = "none""#).unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));

    let err = ProfileConfig::load("/nonexistent/dksaml.toml").unwrap_err();
    assert!(matches!(err, ConfigError::Io(_)));
}
