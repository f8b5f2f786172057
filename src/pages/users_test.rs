use super::*;

fn user(id: i64, name: &str) -> User {
    User {
        id,
        name: name.to_owned(),
        extra: serde_json::Map::new(),
    }
}

#[test]
fn one_user_renders_one_link() {
    let table = RouteTable::standard();
    let links = user_links(&table, &[user(1, "Ann")]);
    assert_eq!(links, vec![("/router7/user/1".to_owned(), "Ann".to_owned())]);
}

#[test]
fn links_preserve_api_order() {
    let table = RouteTable::standard();
    let links = user_links(&table, &[user(2, "Ben"), user(1, "Ann")]);
    assert_eq!(
        links,
        vec![
            ("/router7/user/2".to_owned(), "Ben".to_owned()),
            ("/router7/user/1".to_owned(), "Ann".to_owned()),
        ]
    );
}

#[test]
fn empty_list_renders_no_links() {
    let table = RouteTable::standard();
    assert!(user_links(&table, &[]).is_empty());
}
