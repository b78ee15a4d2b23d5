use daykit_core::{open_store, KeyValueStore, TodoStatus, TodoStore};

fn store_with_raw_todos(
    raw: &str,
) -> (tempfile::TempDir, TodoStore<daykit_core::SqliteKeyValueStore>) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("todos.db");
    {
        let storage = open_store(&path).unwrap();
        storage.set("todos", raw).unwrap();
    }
    let store = TodoStore::open(open_store(&path).unwrap());
    (dir, store)
}

#[test]
fn legacy_done_record_migrates_to_completed_with_created_at_stamp() {
    let (_dir, store) = store_with_raw_todos(
        r#"[{
            "id": "11111111-2222-4333-8444-555555555555",
            "text": "old done todo",
            "completed": true,
            "created_at": 1700000000000
        }]"#,
    );

    let todo = &store.todos()[0];
    assert_eq!(todo.status, TodoStatus::Completed);
    assert_eq!(todo.completed_at, Some(1_700_000_000_000));
    assert_eq!(todo.order, 1, "missing order backfills from list position");
}

#[test]
fn legacy_open_record_migrates_to_pending() {
    let (_dir, store) = store_with_raw_todos(
        r#"[{
            "id": "11111111-2222-4333-8444-555555555555",
            "text": "old open todo",
            "completed": false,
            "created_at": 1700000000000
        }]"#,
    );

    let todo = &store.todos()[0];
    assert_eq!(todo.status, TodoStatus::Pending);
    assert_eq!(todo.completed_at, None);
}

#[test]
fn mixed_shapes_load_and_backfill_orders_by_position() {
    let (_dir, store) = store_with_raw_todos(
        r#"[
            {
                "id": "11111111-2222-4333-8444-555555555555",
                "text": "current with order",
                "status": "in-progress",
                "created_at": 1700000000000,
                "order": 7
            },
            {
                "id": "22222222-2222-4333-8444-555555555555",
                "text": "current without order",
                "status": "pending",
                "created_at": 1700000001000
            },
            {
                "id": "33333333-2222-4333-8444-555555555555",
                "text": "legacy",
                "completed": true,
                "created_at": 1700000002000
            }
        ]"#,
    );

    let todos = store.todos();
    assert_eq!(todos[0].order, 7);
    assert_eq!(todos[1].order, 2);
    assert_eq!(todos[2].order, 3);
    assert_eq!(todos[2].status, TodoStatus::Completed);
}

#[test]
fn counter_seeds_above_the_largest_migrated_order() {
    let (_dir, mut store) = store_with_raw_todos(
        r#"[{
            "id": "11111111-2222-4333-8444-555555555555",
            "text": "high order",
            "status": "pending",
            "created_at": 1700000000000,
            "order": 41
        }]"#,
    );

    let added = store.add("next up", None).unwrap();
    assert_eq!(added.order, 42);
}

#[test]
fn malformed_json_yields_empty_list() {
    let (_dir, store) = store_with_raw_todos("{not json");
    assert_eq!(store.counts().all, 0);
}

#[test]
fn absent_key_yields_empty_list() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("todos.db");
    let store = TodoStore::open(open_store(&path).unwrap());
    assert_eq!(store.counts().all, 0);
}

#[test]
fn migrated_list_is_rewritten_in_current_shape_on_next_mutation() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("todos.db");
    {
        let storage = open_store(&path).unwrap();
        storage
            .set(
                "todos",
                r#"[{
                    "id": "11111111-2222-4333-8444-555555555555",
                    "text": "legacy",
                    "completed": true,
                    "created_at": 1700000000000
                }]"#,
            )
            .unwrap();
    }

    {
        let mut store = TodoStore::open(open_store(&path).unwrap());
        store.add("fresh", None).unwrap();
    }

    let storage = open_store(&path).unwrap();
    let raw = storage.get("todos").unwrap().unwrap();
    assert!(raw.contains("\"status\""));
    assert!(!raw.contains("\"completed\":true"));
}
