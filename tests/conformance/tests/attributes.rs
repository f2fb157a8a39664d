//! Attribute scenarios.

use dksaml_conformance_tests::{attribute_statement_mut, basic_assertion, validator};
use dksaml_profile::attributes::DkSamlAttribute;
use dksaml_profile::{AttributeValidator, FormatViolation};
use dksaml_schema::{
    AttributeStatement, AttributeValue, EncryptedData, EncryptedElement, SamlAttribute,
};

use crate::expect_violation;

fn with_attribute(attribute: SamlAttribute) -> anyhow::Result<Option<FormatViolation>> {
    let mut assertion = basic_assertion();
    let stmt = attribute_statement_mut(&mut assertion)
        .ok_or_else(|| anyhow::anyhow!("no attribute statement"))?;
    stmt.items.push(attribute.into());

    Ok(validator()
        .validate(&assertion)
        .err()
        .and_then(|err| err.violation().cloned()))
}

/// A typical NemLog-in style attribute set passes.
#[test]
fn catalog_attributes_are_accepted() -> anyhow::Result<()> {
    let mut assertion = basic_assertion();
    assertion.statements[1] = AttributeStatement::new()
        .with_attribute(DkSamlAttribute::SpecVer.create("DK-SAML-2.0"))
        .with_attribute(DkSamlAttribute::AssuranceLevel.create("3"))
        .with_attribute(DkSamlAttribute::CprNumberIdentifier.create("2702681273"))
        .with_attribute(DkSamlAttribute::CommonName.create("Jens Hansen"))
        .with_attribute(DkSamlAttribute::Email.create("jens@example.dk"))
        .into();

    validator().validate(&assertion)?;
    Ok(())
}

#[test]
fn attribute_name_must_be_uri() -> anyhow::Result<()> {
    for name in [
        "cn",
        "CommonName",
        "",
        "2.5.4.3",
        "urn:oid:2.5.4.3<script>",
        "http://example.dk/%zz",
        "urn:a|b^c`d",
    ] {
        assert_eq!(
            with_attribute(SamlAttribute::single(name, "Jens Hansen"))?,
            Some(FormatViolation::AttributeNameNotUri {
                name: name.to_string()
            }),
            "name {name:?}"
        );
    }
    Ok(())
}

#[test]
fn attribute_values_must_be_strings() -> anyhow::Result<()> {
    let attribute = SamlAttribute::new("urn:oid:2.5.4.5").with_values(vec![
        AttributeValue::String("CVR:12345678-RID:1234".to_string()),
        AttributeValue::Boolean(true),
    ]);

    let violation = with_attribute(attribute)?.ok_or_else(|| anyhow::anyhow!("accepted"))?;
    assert_eq!(
        violation,
        FormatViolation::AttributeValueNotString {
            name: "urn:oid:2.5.4.5".to_string(),
            index: 1,
            xsi_type: "xs:boolean".to_string(),
        }
    );
    assert!(violation.to_string().contains("urn:oid:2.5.4.5"));
    Ok(())
}

#[test]
fn attribute_without_values_is_accepted() -> anyhow::Result<()> {
    assert_eq!(with_attribute(SamlAttribute::new("urn:oid:2.5.4.65"))?, None);
    Ok(())
}

/// Only the first offending attribute is reported.
#[test]
fn first_bad_attribute_is_reported() -> anyhow::Result<()> {
    let mut assertion = basic_assertion();
    assertion.statements[1] = AttributeStatement::new()
        .with_attribute(SamlAttribute::single("surname", "Hansen"))
        .with_attribute(SamlAttribute::single("title", "Chef"))
        .into();

    assert_eq!(
        expect_violation(validator().validate(&assertion))?,
        FormatViolation::AttributeNameNotUri {
            name: "surname".to_string()
        }
    );
    Ok(())
}

#[test]
fn encrypted_attributes_are_unsupported_directly() {
    let validator = AttributeValidator::new();
    assert_eq!(
        validator.validate_encrypted(&EncryptedElement::new(EncryptedData::element())),
        Err(FormatViolation::EncryptedAttributeUnsupported)
    );
}
