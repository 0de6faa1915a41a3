use super::*;

#[test]
fn read_collection_decodes_ok_body() {
    let body = r#"{"Chess Club": {"description": "d", "schedule": "s", "max_participants": 2, "participants": []}}"#;
    let collection = read_collection(true, 200, body).unwrap();
    assert_eq!(collection.len(), 1);
    assert!(collection.get("Chess Club").is_some());
}

#[test]
fn read_collection_maps_non_2xx_to_status_error() {
    assert_eq!(read_collection(false, 503, "{}"), Err(ApiError::Status(503)));
}

#[test]
fn read_collection_maps_garbage_to_malformed() {
    let err = read_collection(true, 200, "<html>oops</html>").unwrap_err();
    assert!(matches!(err, ApiError::Malformed(_)));
}

#[test]
fn read_reply_keeps_status_branch() {
    let reply = read_reply(false, 400, r#"{"detail": "Activity full"}"#).unwrap();
    assert!(!reply.ok);
    assert_eq!(reply.status, 400);
    assert_eq!(reply.body.detail(), Some("Activity full"));
}

#[test]
fn read_reply_success_reads_message() {
    let reply = read_reply(true, 200, r#"{"message": "Signed up Jane for Chess Club"}"#).unwrap();
    assert!(reply.ok);
    assert_eq!(reply.body.message(), Some("Signed up Jane for Chess Club"));
}

#[test]
fn read_reply_unparseable_body_is_malformed_on_either_branch() {
    assert!(matches!(read_reply(true, 200, ""), Err(ApiError::Malformed(_))));
    assert!(matches!(read_reply(false, 500, "Internal Server Error"), Err(ApiError::Malformed(_))));
}

#[test]
fn api_error_messages_are_readable() {
    assert_eq!(ApiError::Status(404).to_string(), "unexpected status 404");
    assert_eq!(ApiError::Transport("offline".to_owned()).to_string(), "request failed: offline");
}
