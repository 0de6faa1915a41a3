use roster::MutationReply;

use super::*;

fn reply(ok: bool, status: u16, json: &str) -> Result<Reply, ApiError> {
    let body: MutationReply = serde_json::from_str(json).expect("fixture json");
    Ok(Reply { ok, status, body })
}

// =============================================================
// Signup
// =============================================================

#[test]
fn signup_success_shows_message_resets_and_refreshes() {
    let r = MutationKind::Signup.resolve(reply(true, 200, r#"{"message": "Signed up Jane for Chess Club"}"#));
    assert_eq!(r.text, "Signed up Jane for Chess Club");
    assert_eq!(r.kind, BannerKind::Success);
    assert!(r.reset_form);
    assert!(r.refresh);
}

#[test]
fn signup_success_without_message_uses_fallback() {
    let r = MutationKind::Signup.resolve(reply(true, 200, "{}"));
    assert_eq!(r.text, "Signed up");
    assert_eq!(r.kind, BannerKind::Success);
}

#[test]
fn signup_rejection_shows_detail_and_keeps_form() {
    let r = MutationKind::Signup.resolve(reply(false, 400, r#"{"detail": "Activity full"}"#));
    assert_eq!(r.text, "Activity full");
    assert_eq!(r.kind, BannerKind::Error);
    assert!(!r.reset_form);
    assert!(!r.refresh);
}

#[test]
fn signup_rejection_without_detail_uses_fallback() {
    let r = MutationKind::Signup.resolve(reply(false, 422, r#"{"detail": [{"msg": "field required"}]}"#));
    assert_eq!(r.text, "An error occurred");
}

#[test]
fn signup_transport_failure_shows_generic_text() {
    let r = MutationKind::Signup.resolve(Err(ApiError::Transport("offline".to_owned())));
    assert_eq!(r.text, "Failed to sign up. Please try again.");
    assert_eq!(r.kind, BannerKind::Error);
    assert!(!r.reset_form);
    assert!(!r.refresh);
}

#[test]
fn signup_malformed_success_body_is_a_transport_failure() {
    let r = MutationKind::Signup.resolve(Err(ApiError::Malformed("eof".to_owned())));
    assert_eq!(r.text, MutationKind::Signup.failure_text());
}

// =============================================================
// Unregister
// =============================================================

#[test]
fn unregister_success_shows_message_and_refreshes() {
    let r =
        MutationKind::Unregister.resolve(reply(true, 200, r#"{"message": "Removed jane@x.com from Chess Club"}"#));
    assert_eq!(r.text, "Removed jane@x.com from Chess Club");
    assert_eq!(r.kind, BannerKind::Success);
    assert!(r.refresh);
    assert!(!r.reset_form);
}

#[test]
fn unregister_success_without_message_uses_fallback() {
    let r = MutationKind::Unregister.resolve(reply(true, 200, r#"{"message": ""}"#));
    assert_eq!(r.text, "Unregistered");
}

#[test]
fn unregister_rejection_shows_detail() {
    let r = MutationKind::Unregister
        .resolve(reply(false, 404, r#"{"detail": "Student is not registered for this activity"}"#));
    assert_eq!(r.text, "Student is not registered for this activity");
    assert_eq!(r.kind, BannerKind::Error);
    assert!(!r.refresh);
}

#[test]
fn unregister_rejection_without_detail_uses_fallback() {
    let r = MutationKind::Unregister.resolve(reply(false, 500, "{}"));
    assert_eq!(r.text, "Failed to unregister");
}

#[test]
fn unregister_transport_failure_shows_generic_text() {
    let r = MutationKind::Unregister.resolve(Err(ApiError::Transport("offline".to_owned())));
    assert_eq!(r.text, "Failed to unregister. Please try again.");
    assert_eq!(r.kind, BannerKind::Error);
}
