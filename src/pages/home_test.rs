use super::*;

#[test]
fn greets_logged_in_user_by_name() {
    let session = Session { token: Some("jwt".to_owned()), display_name: "Ann".to_owned(), ..Session::default() };
    assert_eq!(greeting(&session), "Hey, Ann!");
}

#[test]
fn greets_guest_without_token() {
    let session = Session { display_name: "Ann".to_owned(), ..Session::default() };
    assert_eq!(greeting(&session), "Welcome, Guest!");
}
