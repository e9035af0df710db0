use chrono::Duration;
use shelfmark::AppError;

use crate::{borrow_time, library};

#[test]
fn test_authenticate_sets_session() {
    let mut library = library();
    let patron = library.authenticate("Alice", "alice123").unwrap();
    assert_eq!(patron.id, 1);
    assert_eq!(library.session().require_patron(), Ok(1));
}

#[test]
fn test_wrong_password_leaves_session_unset() {
    let mut library = library();
    assert_eq!(
        library.authenticate("Alice", "wrong"),
        Err(AppError::AuthenticationFailed)
    );
    assert!(!library.session().is_authenticated());
}

#[test]
fn test_borrow_without_login() {
    let library = library();
    assert_eq!(library.borrow(1), Err(AppError::NotAuthenticated));
    assert!(library.list_stock().unwrap().iter().all(|i| i.available));
}

#[test]
fn test_borrow_then_list_loans() {
    let mut library = library();
    library.authenticate("Alice", "alice123").unwrap();

    let item = library.borrow(1).unwrap();
    assert_eq!(item.id, 1);
    assert!(!item.available);

    let loans = library.list_loans().unwrap();
    assert_eq!(loans.len(), 1);
    assert_eq!(loans[0].item_id, 1);
    assert_eq!(loans[0].title, "Introduction to AI");
    assert_eq!(loans[0].due_date, (borrow_time() + Duration::days(14)).date_naive());
    assert_eq!(loans[0].due_date_iso(), "2026-11-02");
}

#[test]
fn test_unavailable_item_fails_for_any_patron() {
    let mut library = library();
    library.authenticate("Alice", "alice123").unwrap();
    library.borrow(3).unwrap();
    assert_eq!(library.borrow(3), Err(AppError::ItemUnavailable(3)));

    library.logout();
    library.authenticate("Bob", "bob123").unwrap();
    assert_eq!(library.borrow(3), Err(AppError::ItemUnavailable(3)));
    assert!(library.list_loans().unwrap().is_empty());
}

#[test]
fn test_unknown_item() {
    let mut library = library();
    library.authenticate("Charlie", "charlie123").unwrap();
    assert_eq!(library.borrow(42), Err(AppError::ItemNotFound(42)));
}

#[test]
fn test_loans_keep_borrow_order() {
    let mut library = library();
    library.authenticate("Bob", "bob123").unwrap();
    library.borrow(4).unwrap();
    library.borrow(2).unwrap();

    let ids: Vec<i32> = library.list_loans().unwrap().iter().map(|l| l.item_id).collect();
    assert_eq!(ids, vec![4, 2]);
}

#[test]
fn test_return_makes_item_available_again() {
    let mut library = library();
    library.authenticate("Alice", "alice123").unwrap();
    library.borrow(5).unwrap();

    library.logout();
    library.authenticate("Bob", "bob123").unwrap();
    assert_eq!(library.return_item(5), Err(AppError::NotBorrowed(5)));

    library.logout();
    library.authenticate("Alice", "alice123").unwrap();
    let item = library.return_item(5).unwrap();
    assert!(item.available);
    assert!(library.list_loans().unwrap().is_empty());
    assert!(library.search("neural networks").unwrap().iter().any(|i| i.id == 5));
}

#[test]
fn test_add_item_and_stock() {
    let library = library();
    let item = library.add_item("T", "A", "G").unwrap();
    assert_eq!(item.id, 6);

    let stock = library.list_stock().unwrap();
    assert_eq!(stock.len(), 6);
    let new_rows: Vec<_> = stock.iter().filter(|i| i.id == 6).collect();
    assert_eq!(new_rows.len(), 1);
    assert!(new_rows[0].available);

    assert_eq!(library.add_item("T2", "A2", "G2").unwrap().id, 7);
}

#[test]
fn test_add_item_rejects_empty_field() {
    let library = library();
    assert!(matches!(library.add_item("T", "", "G"), Err(AppError::InvalidItem(_))));
    assert_eq!(library.list_stock().unwrap().len(), 5);
}
