//! Integration tests for the checklist repository: document round
//! trips, the compound unique key, wholesale item replacement, and
//! atomic item removal.

use std::time::Duration;

use packlist_core::checklist::ChecklistItem;
use packlist_core::types::UserId;
use packlist_db::repositories::ChecklistRepo;
use sqlx::PgPool;
use uuid::Uuid;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn user() -> UserId {
    UserId::new("default-user")
}

fn item(name: &str, trip_type: &str, packed: bool) -> ChecklistItem {
    ChecklistItem {
        id: Uuid::new_v4(),
        name: name.to_string(),
        category: "Accessories".to_string(),
        trip_types: vec![trip_type.to_string()],
        is_essential: false,
        is_packed: packed,
    }
}

// ---------------------------------------------------------------------------
// Insert / find
// ---------------------------------------------------------------------------

#[sqlx::test]
async fn insert_then_find_round_trips_items(pool: PgPool) {
    let items = vec![
        item("Water bottle", "beach", true),
        item("Beach towel", "beach", false),
    ];

    let inserted = ChecklistRepo::insert(&pool, &user(), "beach", &items)
        .await
        .unwrap();
    assert!(inserted.id > 0);
    assert_eq!(inserted.created_at, inserted.updated_at);

    let found = ChecklistRepo::find_by_trip_type(&pool, &user(), "beach")
        .await
        .unwrap()
        .expect("checklist should exist after insert");

    assert_eq!(found.id, inserted.id);
    assert_eq!(found.items.0, items);
}

#[sqlx::test]
async fn find_returns_none_without_saved_checklist(pool: PgPool) {
    let found = ChecklistRepo::find_by_trip_type(&pool, &user(), "hike")
        .await
        .unwrap();
    assert!(found.is_none());
}

#[sqlx::test]
async fn duplicate_insert_violates_compound_key(pool: PgPool) {
    let items = vec![item("Sunscreen", "beach", false)];
    ChecklistRepo::insert(&pool, &user(), "beach", &items)
        .await
        .unwrap();

    let err = ChecklistRepo::insert(&pool, &user(), "beach", &items)
        .await
        .unwrap_err();

    match err {
        sqlx::Error::Database(db_err) => {
            assert_eq!(db_err.code().as_deref(), Some("23505"));
            assert_eq!(db_err.constraint(), Some("uq_checklists_user_trip"));
        }
        other => panic!("expected unique violation, got {other:?}"),
    }
}

#[sqlx::test]
async fn checklists_are_scoped_per_user(pool: PgPool) {
    let items = vec![item("Laptop", "work", false)];
    let inserted = ChecklistRepo::insert(&pool, &user(), "work", &items)
        .await
        .unwrap();

    let other = UserId::new("someone-else");
    assert!(ChecklistRepo::find_by_trip_type(&pool, &other, "work")
        .await
        .unwrap()
        .is_none());
    assert!(ChecklistRepo::fetch_by_id(&pool, &other, inserted.id)
        .await
        .unwrap()
        .is_none());

    // Same trip type under another user is a distinct document.
    ChecklistRepo::insert(&pool, &other, "work", &items)
        .await
        .unwrap();
}

// ---------------------------------------------------------------------------
// Replace items
// ---------------------------------------------------------------------------

#[sqlx::test]
async fn replace_items_advances_updated_at_only(pool: PgPool) {
    let first = vec![item("Notebook", "work", false), item("Laptop", "work", false)];
    let inserted = ChecklistRepo::insert(&pool, &user(), "work", &first)
        .await
        .unwrap();

    tokio::time::sleep(Duration::from_millis(20)).await;

    let second = vec![first[0].clone()];
    let updated = ChecklistRepo::replace_items(&pool, &user(), inserted.id, &second)
        .await
        .unwrap()
        .expect("checklist should exist");

    assert_eq!(updated.items.0, second);
    assert_eq!(updated.created_at, inserted.created_at);
    assert!(updated.updated_at > inserted.updated_at);
}

#[sqlx::test]
async fn replace_items_unknown_id_returns_none(pool: PgPool) {
    let result = ChecklistRepo::replace_items(&pool, &user(), 9999, &[])
        .await
        .unwrap();
    assert!(result.is_none());
}

// ---------------------------------------------------------------------------
// Remove item
// ---------------------------------------------------------------------------

#[sqlx::test]
async fn remove_item_filters_exactly_one(pool: PgPool) {
    let items = vec![
        item("Hiking boots", "hike", false),
        item("First aid kit", "hike", false),
        item("Backpack", "hike", true),
    ];
    let inserted = ChecklistRepo::insert(&pool, &user(), "hike", &items)
        .await
        .unwrap();

    let updated = ChecklistRepo::remove_item(&pool, &user(), inserted.id, items[1].id)
        .await
        .unwrap()
        .expect("checklist should exist");

    assert_eq!(updated.items.0, vec![items[0].clone(), items[2].clone()]);
}

#[sqlx::test]
async fn remove_item_preserves_display_order(pool: PgPool) {
    let items: Vec<ChecklistItem> = ["Passport/ID", "Laptop", "Charger", "Notebook", "Headphones"]
        .iter()
        .map(|name| item(name, "work", false))
        .collect();
    let inserted = ChecklistRepo::insert(&pool, &user(), "work", &items)
        .await
        .unwrap();

    let updated = ChecklistRepo::remove_item(&pool, &user(), inserted.id, items[2].id)
        .await
        .unwrap()
        .expect("checklist should exist");

    let survivors: Vec<&str> = updated.items.0.iter().map(|i| i.name.as_str()).collect();
    assert_eq!(
        survivors,
        vec!["Passport/ID", "Laptop", "Notebook", "Headphones"]
    );
}

#[sqlx::test]
async fn remove_item_absent_id_leaves_items_unchanged(pool: PgPool) {
    let items = vec![item("Flip flops", "beach", false)];
    let inserted = ChecklistRepo::insert(&pool, &user(), "beach", &items)
        .await
        .unwrap();

    let updated = ChecklistRepo::remove_item(&pool, &user(), inserted.id, Uuid::new_v4())
        .await
        .unwrap()
        .expect("removal of an absent item still succeeds");

    assert_eq!(updated.items.0, items);
}

#[sqlx::test]
async fn remove_last_item_leaves_empty_array(pool: PgPool) {
    let items = vec![item("Swimsuit", "beach", false)];
    let inserted = ChecklistRepo::insert(&pool, &user(), "beach", &items)
        .await
        .unwrap();

    let updated = ChecklistRepo::remove_item(&pool, &user(), inserted.id, items[0].id)
        .await
        .unwrap()
        .unwrap();

    assert!(updated.items.0.is_empty());
}

#[sqlx::test]
async fn remove_item_unknown_checklist_returns_none(pool: PgPool) {
    let result = ChecklistRepo::remove_item(&pool, &user(), 4242, Uuid::new_v4())
        .await
        .unwrap();
    assert!(result.is_none());
}
