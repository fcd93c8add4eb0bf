use favhub_store::FavoriteStore;
use favhub_types::User;

#[test]
fn test_favorites_survive_reopen() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let db_path = dir.path().join("favhub.db");

    {
        let store = FavoriteStore::open(&db_path).expect("Failed to open store");
        store
            .save(&User::new(1, "alice", "https://example.com/1.png"))
            .expect("Failed to save");
        store
            .save(&User::new(2, "bob", "https://example.com/2.png"))
            .expect("Failed to save");
        store.delete(2).expect("Failed to delete");
    }

    let store = FavoriteStore::open(&db_path).expect("Failed to reopen store");
    let favorites = store.list().expect("Failed to list");

    assert_eq!(favorites.len(), 1);
    assert_eq!(favorites[0].id, 1);
    assert_eq!(favorites[0].login, "alice");
}

#[test]
fn test_reopen_is_idempotent_on_schema() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let db_path = dir.path().join("favhub.db");

    for _ in 0..3 {
        let store = FavoriteStore::open(&db_path).expect("Failed to open store");
        store
            .save(&User::new(7, "mia", ""))
            .expect("Failed to save");
    }

    let store = FavoriteStore::open(&db_path).expect("Failed to reopen store");
    assert_eq!(store.list().expect("Failed to list").len(), 1);
}
