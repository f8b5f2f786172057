use super::*;

#[test]
fn display_message_uses_error_text() {
    assert_eq!(
        display_message(Some("Load failed: 404".to_owned())),
        "Load failed: 404"
    );
}

#[test]
fn display_message_falls_back_when_absent() {
    assert_eq!(display_message(None), "Something went wrong");
}

#[test]
fn display_message_falls_back_when_blank() {
    assert_eq!(display_message(Some("   ".to_owned())), "Something went wrong");
}
