//! Subject and bearer confirmation scenarios.

use chrono::{Duration, Utc};
use dksaml_conformance_tests::{basic_assertion, bearer_data_mut, bearer_mut, validator, SP_ACS_URL};
use dksaml_profile::FormatViolation;
use dksaml_schema::{
    ConfirmationMethod, NameId, Subject, SubjectConfirmation, SubjectConfirmationData,
};
use proptest::prelude::*;

use crate::expect_violation;

fn with_subject(subject: Subject) -> anyhow::Result<FormatViolation> {
    let mut assertion = basic_assertion();
    assertion.subject = Some(subject);
    expect_violation(validator().validate(&assertion))
}

#[test]
fn missing_subject_is_rejected() -> anyhow::Result<()> {
    let mut assertion = basic_assertion();
    assertion.subject = None;

    assert_eq!(
        expect_violation(validator().validate(&assertion))?,
        FormatViolation::MissingSubject
    );
    Ok(())
}

#[test]
fn empty_subject_is_rejected() -> anyhow::Result<()> {
    assert_eq!(with_subject(Subject::default())?, FormatViolation::EmptySubject);
    Ok(())
}

#[test]
fn subject_without_confirmation_has_no_bearer() -> anyhow::Result<()> {
    assert_eq!(
        with_subject(Subject::new(NameId::persistent("abc")))?,
        FormatViolation::MissingBearerConfirmation
    );
    Ok(())
}

/// Valid non-bearer confirmations do not stand in for a bearer one.
#[test]
fn non_bearer_confirmations_only_are_rejected() -> anyhow::Result<()> {
    let subject = Subject::new(NameId::persistent("abc"))
        .with_confirmation(SubjectConfirmation::new(ConfirmationMethod::HOLDER_OF_KEY_URI))
        .with_confirmation(SubjectConfirmation::new(ConfirmationMethod::SENDER_VOUCHES_URI));

    assert_eq!(with_subject(subject)?, FormatViolation::MissingBearerConfirmation);
    Ok(())
}

#[test]
fn non_bearer_confirmation_beside_bearer_is_accepted() -> anyhow::Result<()> {
    let mut assertion = basic_assertion();
    if let Some(ref mut subject) = assertion.subject {
        subject.items.push(
            SubjectConfirmation::new(ConfirmationMethod::HOLDER_OF_KEY_URI).into(),
        );
    }

    validator().validate(&assertion)?;
    Ok(())
}

/// Confirmations after the first bearer are still validated.
#[test]
fn invalid_second_bearer_is_rejected() -> anyhow::Result<()> {
    let mut assertion = basic_assertion();
    if let Some(ref mut subject) = assertion.subject {
        subject.items.push(SubjectConfirmation::bearer().into());
    }

    assert_eq!(
        expect_violation(validator().validate(&assertion))?,
        FormatViolation::MissingConfirmationData
    );
    Ok(())
}

#[test]
fn bearer_without_data_is_rejected() -> anyhow::Result<()> {
    let mut assertion = basic_assertion();
    let bearer = bearer_mut(&mut assertion).ok_or_else(|| anyhow::anyhow!("no bearer"))?;
    bearer.subject_confirmation_data = None;

    assert_eq!(
        expect_violation(validator().validate(&assertion))?,
        FormatViolation::MissingConfirmationData
    );
    Ok(())
}

#[test]
fn bearer_without_recipient_is_rejected() -> anyhow::Result<()> {
    for recipient in [None, Some(String::new()), Some(" \t".to_string())] {
        let mut assertion = basic_assertion();
        let data =
            bearer_data_mut(&mut assertion).ok_or_else(|| anyhow::anyhow!("no bearer data"))?;
        data.recipient = recipient.clone();

        assert_eq!(
            expect_violation(validator().validate(&assertion))?,
            FormatViolation::MissingRecipient,
            "recipient {recipient:?}"
        );
    }
    Ok(())
}

#[test]
fn bearer_without_not_on_or_after_is_rejected() -> anyhow::Result<()> {
    let mut assertion = basic_assertion();
    let data = bearer_data_mut(&mut assertion).ok_or_else(|| anyhow::anyhow!("no bearer data"))?;
    data.not_on_or_after = None;

    let violation = expect_violation(validator().validate(&assertion))?;
    assert_eq!(violation, FormatViolation::MissingNotOnOrAfter);
    assert!(violation.to_string().contains("\"NotOnOrAfter\""));
    Ok(())
}

fn bearer_data(
    recipient: bool,
    not_on_or_after: bool,
    not_before: bool,
) -> SubjectConfirmationData {
    let now = Utc::now();
    SubjectConfirmationData {
        in_response_to: Some("_request-1".to_string()),
        recipient: recipient.then(|| SP_ACS_URL.to_string()),
        not_on_or_after: not_on_or_after.then(|| now + Duration::minutes(5)),
        not_before: not_before.then(|| now - Duration::minutes(1)),
        address: None,
    }
}

proptest! {
    /// Recipient, then NotOnOrAfter, then NotBefore: the first broken rule is reported.
    #[test]
    fn first_broken_bearer_rule_wins(
        recipient in any::<bool>(),
        not_on_or_after in any::<bool>(),
        not_before in any::<bool>(),
    ) {
        let mut assertion = basic_assertion();
        assertion.subject = Some(
            Subject::new(NameId::persistent("abc")).with_confirmation(
                SubjectConfirmation::bearer()
                    .with_data(bearer_data(recipient, not_on_or_after, not_before)),
            ),
        );

        let expected = if !recipient {
            Some(FormatViolation::MissingRecipient)
        } else if !not_on_or_after {
            Some(FormatViolation::MissingNotOnOrAfter)
        } else if not_before {
            Some(FormatViolation::DisallowedNotBefore)
        } else {
            None
        };

        let actual = validator()
            .validate(&assertion)
            .err()
            .and_then(|err| err.violation().cloned());
        prop_assert_eq!(actual, expected);
    }
}
