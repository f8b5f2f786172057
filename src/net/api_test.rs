use super::*;

#[test]
fn users_endpoint_targets_fixed_host() {
    assert_eq!(users_endpoint(), "https://jsonplaceholder.typicode.com/users");
}

#[test]
fn user_endpoint_embeds_id() {
    assert_eq!(
        user_endpoint("3"),
        "https://jsonplaceholder.typicode.com/users/3"
    );
}

#[test]
fn validate_user_id_rejects_empty_before_any_network_call() {
    assert_eq!(validate_user_id(""), Err(ApiError::MissingUserId));
    assert_eq!(validate_user_id("   "), Err(ApiError::MissingUserId));
    assert_eq!(validate_user_id("1"), Ok(()));
}

#[test]
fn status_error_message_includes_status_code() {
    let err = ApiError::Status { status: 404 };
    assert!(err.to_string().contains("404"));
}

#[test]
fn network_error_message_is_500_flavored() {
    let err = ApiError::Network {
        detail: "connection reset".to_owned(),
    };
    let msg = err.to_string();
    assert!(msg.contains("500"));
    assert!(msg.contains("connection reset"));
}

#[test]
fn user_load_error_is_generic() {
    assert_eq!(ApiError::UserLoad.to_string(), "Failed to load user");
}

#[test]
fn fetch_user_blank_id_fails_without_io() {
    let result = futures::executor::block_on(fetch_user(""));
    assert_eq!(result, Err(ApiError::MissingUserId));
}

#[test]
fn fetch_user_whitespace_id_fails_without_io() {
    let result = futures::executor::block_on(fetch_user("  "));
    assert_eq!(result, Err(ApiError::MissingUserId));
}
