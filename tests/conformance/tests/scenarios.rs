//! Whole-assertion scenarios.

use chrono::Utc;
use dksaml_conformance_tests::{basic_assertion, bearer_data_mut, validator, SP_ENTITY_ID};
use dksaml_core::ProfileConfig;
use dksaml_profile::{AssertionValidator, FormatViolation, ProfileError};
use dksaml_schema::{AudienceRestriction, Condition, NameId, SamlError};

use crate::expect_violation;

/// A minimal conformant assertion validates.
#[test]
fn minimal_assertion_is_accepted() -> anyhow::Result<()> {
    validator().validate(&basic_assertion())?;
    Ok(())
}

/// Adding NotBefore to the bearer confirmation data breaks the minimal assertion.
#[test]
fn minimal_assertion_with_not_before_is_rejected() -> anyhow::Result<()> {
    let mut assertion = basic_assertion();
    let data = bearer_data_mut(&mut assertion).ok_or_else(|| anyhow::anyhow!("no bearer data"))?;
    data.not_before = Some(Utc::now());

    let violation = expect_violation(validator().validate(&assertion))?;
    assert_eq!(violation, FormatViolation::DisallowedNotBefore);
    assert_eq!(violation.element(), "SubjectConfirmationData");
    Ok(())
}

#[test]
fn missing_issuer_is_rejected() -> anyhow::Result<()> {
    let mut assertion = basic_assertion();
    assertion.issuer = None;

    assert_eq!(
        expect_violation(validator().validate(&assertion))?,
        FormatViolation::MissingIssuer
    );
    Ok(())
}

#[test]
fn missing_audience_restriction_is_rejected() -> anyhow::Result<()> {
    let mut assertion = basic_assertion();
    if let Some(ref mut conditions) = assertion.conditions {
        conditions.items = vec![Condition::OneTimeUse];
    }

    assert_eq!(
        expect_violation(validator().validate(&assertion))?,
        FormatViolation::MissingAudienceRestriction
    );

    assertion.conditions = None;
    assert_eq!(
        expect_violation(validator().validate(&assertion))?,
        FormatViolation::MissingAudienceRestriction
    );
    Ok(())
}

/// An empty AudienceRestriction fails even next to a valid one, in either order.
#[test]
fn empty_audience_restriction_is_rejected() -> anyhow::Result<()> {
    for empty_first in [true, false] {
        let mut assertion = basic_assertion();
        if let Some(ref mut conditions) = assertion.conditions {
            let empty = Condition::AudienceRestriction(AudienceRestriction::default());
            if empty_first {
                conditions.items.insert(0, empty);
            } else {
                conditions.items.push(empty);
            }
        }

        assert_eq!(
            expect_violation(validator().validate(&assertion))?,
            FormatViolation::EmptyAudienceRestriction,
            "empty restriction first: {empty_first}"
        );
    }
    Ok(())
}

#[test]
fn additional_audience_restrictions_are_accepted() -> anyhow::Result<()> {
    let mut assertion = basic_assertion();
    if let Some(ref mut conditions) = assertion.conditions {
        conditions.items.push(Condition::AudienceRestriction(AudienceRestriction::new([
            SP_ENTITY_ID,
            "https://other.sp.example.dk",
        ])));
        conditions.items.push(Condition::OneTimeUse);
    }

    validator().validate(&assertion)?;
    Ok(())
}

/// Generic SAML 2.0 failures are not turned into profile violations.
#[test]
fn base_validator_failures_pass_through() -> anyhow::Result<()> {
    let mut assertion = basic_assertion();
    assertion.version = "1.1".to_string();

    let err = validator()
        .validate(&assertion)
        .err()
        .ok_or_else(|| anyhow::anyhow!("version 1.1 must be rejected"))?;
    assert_eq!(
        err,
        ProfileError::Base(SamlError::UnsupportedVersion("1.1".to_string()))
    );
    assert!(err.violation().is_none());
    Ok(())
}

#[test]
fn foreign_audience_rejected_by_base_validator() -> anyhow::Result<()> {
    let validator = AssertionValidator::new(ProfileConfig::new(["https://other.sp.example.dk"]));

    let err = validator
        .validate(&basic_assertion())
        .err()
        .ok_or_else(|| anyhow::anyhow!("foreign audience must be rejected"))?;
    assert!(matches!(err, ProfileError::Base(SamlError::InvalidAudience { .. })));
    Ok(())
}

/// Safewhere-style issuers need legacy issuer mode; presence is still required.
#[test]
fn legacy_issuer_mode() -> anyhow::Result<()> {
    let mut assertion = basic_assertion();
    assertion.issuer = Some(NameId::new("http://safewhere.net").with_format_uri("http://example.com"));

    let strict = validator();
    assert!(matches!(
        strict.validate(&assertion),
        Err(ProfileError::Base(SamlError::InvalidIssuer(_)))
    ));

    let legacy = AssertionValidator::new(
        dksaml_conformance_tests::config().with_legacy_issuer_mode(true),
    );
    legacy.validate(&assertion)?;

    assertion.issuer = None;
    assert_eq!(
        expect_violation(legacy.validate(&assertion))?,
        FormatViolation::MissingIssuer
    );
    Ok(())
}

#[test]
fn validation_is_idempotent() -> anyhow::Result<()> {
    let validator = validator();

    let good = basic_assertion();
    assert_eq!(validator.validate(&good), validator.validate(&good));

    let mut bad = basic_assertion();
    bad.subject = None;
    let first = validator.validate(&bad);
    let second = validator.validate(&bad);
    assert_eq!(first, second);
    assert_eq!(expect_violation(first)?, FormatViolation::MissingSubject);
    Ok(())
}

/// One validator can be shared across threads.
#[test]
fn validator_is_shareable_across_threads() -> anyhow::Result<()> {
    let validator = std::sync::Arc::new(validator());
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let validator = std::sync::Arc::clone(&validator);
            std::thread::spawn(move || validator.validate(&basic_assertion()))
        })
        .collect();

    for handle in handles {
        let result = handle
            .join()
            .map_err(|_| anyhow::anyhow!("validation thread panicked"))?;
        result?;
    }
    Ok(())
}
