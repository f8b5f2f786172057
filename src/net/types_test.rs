use super::*;

fn ann() -> serde_json::Value {
    serde_json::json!({
        "id": 1,
        "name": "Ann",
        "username": "ann",
        "email": "ann@example.com",
        "company": { "name": "Romaguera-Crona" }
    })
}

#[test]
fn user_deserializes_id_and_name() {
    let user: User = serde_json::from_value(ann()).expect("valid user json");
    assert_eq!(user.id, 1);
    assert_eq!(user.name, "Ann");
}

#[test]
fn user_preserves_unknown_fields() {
    let user: User = serde_json::from_value(ann()).expect("valid user json");
    assert_eq!(
        user.extra.get("email").and_then(|v| v.as_str()),
        Some("ann@example.com")
    );
    assert!(user.extra.contains_key("company"));
}

#[test]
fn user_reserializes_losslessly() {
    let user: User = serde_json::from_value(ann()).expect("valid user json");
    let round_tripped = serde_json::to_value(&user).expect("serializable");
    assert_eq!(round_tripped, ann());
}

#[test]
fn user_array_deserializes() {
    let users: Vec<User> =
        serde_json::from_value(serde_json::json!([{ "id": 1, "name": "Ann" }]))
            .expect("valid array");
    assert_eq!(users.len(), 1);
    assert_eq!(users[0].name, "Ann");
}
