use drawpad::store::{DrawingStore, StoreError};

fn test_store() -> (tempfile::TempDir, DrawingStore) {
    let dir = tempfile::tempdir().unwrap();
    let store = DrawingStore::new(dir.path().join("images")).unwrap();
    (dir, store)
}

#[tokio::test]
async fn test_create_and_get_roundtrip() {
    let (_dir, store) = test_store();

    let id = store.create("[1,2,3]").await.unwrap();
    let data = store.get(&id).await.unwrap();

    // Brackets stripped, trailing newline appended
    assert_eq!(data, "1,2,3\n");
}

#[tokio::test]
async fn test_create_returns_parseable_uuid() {
    let (_dir, store) = test_store();

    let id = store.create("[0]").await.unwrap();
    assert!(uuid::Uuid::parse_str(&id).is_ok());
}

#[tokio::test]
async fn test_get_unknown_id() {
    let (_dir, store) = test_store();

    let missing = uuid::Uuid::new_v4().to_string();
    let result = store.get(&missing).await;
    assert!(matches!(result, Err(StoreError::NotFound(_))));
}

#[tokio::test]
async fn test_get_rejects_malformed_id() {
    let (_dir, store) = test_store();

    let result = store.get("../../etc/passwd").await;
    assert!(matches!(result, Err(StoreError::InvalidId(_))));

    let result = store.get("not-a-uuid").await;
    assert!(matches!(result, Err(StoreError::InvalidId(_))));
}

#[tokio::test]
async fn test_list_size_matches_record_count() {
    let (_dir, store) = test_store();

    assert!(store.list().await.unwrap().is_empty());

    store.create("[1,2]").await.unwrap();
    store.create("[3,4]").await.unwrap();
    store.create("[5,6]").await.unwrap();

    assert_eq!(store.list().await.unwrap().len(), 3);
}

#[tokio::test]
async fn test_list_is_sorted_by_id() {
    let (_dir, store) = test_store();

    for i in 0..5 {
        store.create(&format!("[{i}]")).await.unwrap();
    }

    let records = store.list().await.unwrap();
    let ids: Vec<&str> = records.iter().map(|r| r.id.as_str()).collect();
    let mut sorted = ids.clone();
    sorted.sort();
    assert_eq!(ids, sorted);
}

#[tokio::test]
async fn test_list_ignores_foreign_files() {
    let (dir, store) = test_store();
    let base = dir.path().join("images");

    store.create("[1,2]").await.unwrap();
    std::fs::write(base.join("notes.txt"), "not a drawing").unwrap();
    std::fs::write(base.join("not-a-uuid.csv"), "still not a drawing").unwrap();

    assert_eq!(store.list().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_concurrent_creates_are_distinct() {
    let (_dir, store) = test_store();

    let (a, b) = tokio::join!(store.create("[1,1]"), store.create("[2,2]"));
    let (a, b) = (a.unwrap(), b.unwrap());

    assert_ne!(a, b);
    assert_eq!(store.get(&a).await.unwrap(), "1,1\n");
    assert_eq!(store.get(&b).await.unwrap(), "2,2\n");
}

#[tokio::test]
async fn test_short_payloads_store_empty() {
    let (_dir, store) = test_store();

    let id = store.create("[]").await.unwrap();
    assert_eq!(store.get(&id).await.unwrap(), "\n");
}
