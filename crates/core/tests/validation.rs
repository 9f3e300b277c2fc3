//! Waitlist validation rules.

use ares_core::api::{WaitlistListing, WaitlistRequest, WaitlistResponse};
use ares_core::model::WaitlistEntry;
use ares_core::validation::{into_entry, validate_waitlist, WaitlistError};

fn req(name: Option<&str>, company: Option<&str>, email: Option<&str>) -> WaitlistRequest {
    WaitlistRequest {
        name: name.map(Into::into),
        company: company.map(Into::into),
        email: email.map(Into::into),
    }
}

#[test]
fn email_without_at_is_invalid_credentials() {
    for email in [None, Some(""), Some("ab.com"), Some("plainaddress")] {
        let r = req(Some("A"), Some("B"), email);
        assert_eq!(
            validate_waitlist(&r),
            Err(WaitlistError::InvalidCredentials),
            "email: {email:?}"
        );
    }
}

#[test]
fn email_is_checked_before_profile() {
    let r = req(None, None, Some("nope"));
    assert_eq!(validate_waitlist(&r), Err(WaitlistError::InvalidCredentials));
    assert_eq!(
        validate_waitlist(&WaitlistRequest::default()),
        Err(WaitlistError::InvalidCredentials)
    );
}

#[test]
fn empty_name_or_company_is_incomplete_profile() {
    let cases = [
        req(Some(""), Some("B"), Some("a@b.com")),
        req(Some("A"), Some(""), Some("a@b.com")),
        req(None, Some("B"), Some("a@b.com")),
        req(Some("A"), None, Some("a@b.com")),
    ];
    for r in &cases {
        assert_eq!(validate_waitlist(r), Err(WaitlistError::IncompleteProfile), "{r:?}");
    }
}

#[test]
fn minimal_valid_submission() {
    let r = req(Some("A"), Some("B"), Some("a@b.com"));
    assert_eq!(validate_waitlist(&r), Ok(()));
    let entry = into_entry(r, "2025-01-01T00:00:00.000Z".into()).unwrap();
    assert_eq!(
        entry,
        WaitlistEntry {
            timestamp: "2025-01-01T00:00:00.000Z".into(),
            name: "A".into(),
            company: "B".into(),
            email: "a@b.com".into(),
        }
    );
    let ack = WaitlistResponse::granted(entry.timestamp.clone());
    assert!(ack.success);
    assert_eq!(ack.message, "ACCESS_GRANTED");
}

#[test]
fn request_tolerates_missing_fields() {
    let r: WaitlistRequest = serde_json::from_str(r#"{"email":"a@b.com"}"#).unwrap();
    assert_eq!(r.email.as_deref(), Some("a@b.com"));
    assert!(r.name.is_none());
}

#[test]
fn entry_serializes_in_column_order() {
    let entry = WaitlistEntry {
        timestamp: "t".into(),
        name: "n".into(),
        company: "c".into(),
        email: "e@x".into(),
    };
    assert_eq!(
        serde_json::to_string(&entry).unwrap(),
        r#"{"timestamp":"t","name":"n","company":"c","email":"e@x"}"#
    );
    assert_eq!(entry.to_row(), ["t", "n", "c", "e@x"]);

    let listing = WaitlistListing::from(vec![serde_json::to_value(&entry).unwrap()]);
    assert_eq!(listing.count, 1);
    assert_eq!(listing.data[0]["email"], "e@x");
}

#[test]
fn listing_keeps_foreign_columns_and_rows() {
    let rows = vec![
        serde_json::json!({"timestamp": "t", "name": "n", "company": "c", "email": "e", "role": "CISO"}),
        serde_json::json!(["x"]),
    ];
    let listing = WaitlistListing::from(rows.clone());
    assert_eq!(listing.count, 2);
    assert_eq!(listing.data, rows);
}

fn parse(body: &str) -> WaitlistRequest {
    serde_json::from_str(body).unwrap()
}

#[test]
fn non_string_profile_fields_are_accepted_as_text() {
    let r = parse(r#"{"name": 1, "company": true, "email": "a@b.com"}"#);
    assert_eq!(r.name.as_deref(), Some("1"));
    assert_eq!(r.company.as_deref(), Some("true"));
    assert_eq!(validate_waitlist(&r), Ok(()));
}

#[test]
fn falsy_profile_fields_count_as_missing() {
    for body in [
        r#"{"name": 0, "company": "B", "email": "a@b.com"}"#,
        r#"{"name": "A", "company": false, "email": "a@b.com"}"#,
        r#"{"name": null, "company": "B", "email": "a@b.com"}"#,
    ] {
        assert_eq!(
            validate_waitlist(&parse(body)),
            Err(WaitlistError::IncompleteProfile),
            "{body}"
        );
    }
}

#[test]
fn non_string_email_is_invalid_credentials() {
    for body in [
        r#"{"name": "A", "company": "B", "email": 0}"#,
        r#"{"name": "A", "company": "B", "email": false}"#,
        r#"{"name": "A", "company": "B", "email": 42}"#,
        r#"{"name": "A", "company": "B", "email": {"at": "@"}}"#,
    ] {
        let r = parse(body);
        assert!(r.email.is_none(), "{body}");
        assert_eq!(
            validate_waitlist(&r),
            Err(WaitlistError::InvalidCredentials),
            "{body}"
        );
    }
}
