use super::*;

#[test]
fn dump_contains_interpreted_fields() {
    let user: User = serde_json::from_value(serde_json::json!({
        "id": 1,
        "name": "Ann"
    }))
    .expect("valid user json");
    let dump = user_dump(&user);
    assert!(dump.contains("\"id\": 1"));
    assert!(dump.contains("\"name\": \"Ann\""));
}

#[test]
fn dump_contains_extra_fields() {
    let user: User = serde_json::from_value(serde_json::json!({
        "id": 1,
        "name": "Ann",
        "email": "ann@example.com"
    }))
    .expect("valid user json");
    assert!(user_dump(&user).contains("ann@example.com"));
}

#[test]
fn dump_is_multiline_pretty_json() {
    let user: User = serde_json::from_value(serde_json::json!({
        "id": 1,
        "name": "Ann"
    }))
    .expect("valid user json");
    assert!(user_dump(&user).lines().count() > 1);
}
