use favhub_engine::Command;
use favhub_runtime::mock::{MemoryStore, StubFetcher};
use favhub_runtime::{App, AppEvent, AppService};
use favhub_store::FavoriteStore;
use favhub_types::{DisplayRow, Tab, User};

fn user(id: u64, login: &str) -> User {
    User::new(id, login, "")
}

fn rows_of(events: &[AppEvent]) -> &[DisplayRow] {
    match events.last() {
        Some(AppEvent::RowsChanged(rows)) => rows,
        other => panic!("expected trailing RowsChanged, got {:?}", other),
    }
}

#[tokio::test]
async fn test_query_renders_annotated_search_rows() {
    let fetcher =
        StubFetcher::new().with_page("ali", 1, vec![user(1, "alice"), user(2, "malibu")]);
    let store = MemoryStore::with_favorites(vec![user(2, "malibu")]);
    let mut app = App::new(fetcher, store);

    let events = app.handle(Command::QueryChanged("ali".into())).await;

    assert_eq!(
        rows_of(&events),
        &[
            DisplayRow::user(user(1, "alice"), false),
            DisplayRow::user(user(2, "malibu"), true),
        ]
    );
}

#[tokio::test]
async fn test_favorite_toggle_end_to_end() {
    // User 3 is fetched but not yet a favorite
    let fetcher = StubFetcher::new().with_page("a", 1, vec![user(1, "a1"), user(3, "a3")]);
    let mut app = App::new(fetcher, MemoryStore::new());

    app.handle(Command::QueryChanged("a".into())).await;
    let events = app.handle(Command::SaveFavorite(user(3, "a3"))).await;

    // Save persisted, favorites re-queried, and the search row now shows
    // the favorite mark
    assert!(app.state().favorites_all.contains(&user(3, "a3")));
    assert_eq!(
        rows_of(&events),
        &[
            DisplayRow::user(user(1, "a1"), false),
            DisplayRow::user(user(3, "a3"), true),
        ]
    );
}

#[tokio::test]
async fn test_unfavorite_clears_the_mark() {
    let fetcher = StubFetcher::new().with_page("a", 1, vec![user(3, "a3")]);
    let store = MemoryStore::with_favorites(vec![user(3, "a3")]);
    let mut app = App::new(fetcher, store);

    app.handle(Command::QueryChanged("a".into())).await;
    let events = app.handle(Command::DeleteFavorite(3)).await;

    assert_eq!(rows_of(&events), &[DisplayRow::user(user(3, "a3"), false)]);
    assert!(app.state().favorites_all.is_empty());
}

#[tokio::test]
async fn test_load_more_appends_to_rendered_rows() {
    let fetcher = StubFetcher::new()
        .with_page("a", 1, vec![user(1, "a1")])
        .with_page("a", 2, vec![user(2, "a2")]);
    let mut app = App::new(fetcher, MemoryStore::new());

    app.handle(Command::QueryChanged("a".into())).await;
    let events = app.handle(Command::LoadMore).await;

    assert_eq!(
        rows_of(&events),
        &[
            DisplayRow::user(user(1, "a1"), false),
            DisplayRow::user(user(2, "a2"), false),
        ]
    );
}

#[tokio::test]
async fn test_fetch_failure_surfaces_error_and_keeps_state() {
    let mut app = App::new(
        StubFetcher::failing("Server error: status 503"),
        MemoryStore::new(),
    );

    let events = app.handle(Command::QueryChanged("a".into())).await;

    assert_eq!(events.len(), 2);
    assert_eq!(
        events[0],
        AppEvent::Error("Server error: status 503".to_string())
    );
    assert!(app.state().fetched.is_empty());
    assert!(!app.state().fetch_in_flight);
}

#[tokio::test]
async fn test_store_failure_surfaces_error() {
    let fetcher = StubFetcher::new();
    let mut app = App::new(fetcher, MemoryStore::failing());

    let events = app.handle(Command::SaveFavorite(user(1, "alice"))).await;

    assert_eq!(
        events[0],
        AppEvent::Error("Failed to save favorite: store offline".to_string())
    );
    assert!(app.state().favorites_all.is_empty());
}

#[tokio::test]
async fn test_tab_switch_regroups_from_cached_state() {
    let fetcher = StubFetcher::new().with_page("a", 1, vec![user(1, "a1")]);
    let store = MemoryStore::with_favorites(vec![user(2, "bob"), user(3, "alice")]);
    let mut app = App::new(fetcher, store);

    app.handle(Command::QueryChanged("a".into())).await;
    app.handle(Command::QueryChanged(String::new())).await;
    let events = app.handle(Command::TabSelected(Tab::Favorites)).await;

    assert_eq!(
        rows_of(&events),
        &[
            DisplayRow::header("A"),
            DisplayRow::user(user(3, "alice"), true),
            DisplayRow::header("B"),
            DisplayRow::user(user(2, "bob"), true),
        ]
    );
}

#[tokio::test]
async fn test_empty_query_resets_favorites_filter() {
    let fetcher = StubFetcher::new().with_page("ali", 1, vec![]);
    let store = MemoryStore::with_favorites(vec![user(1, "alice"), user(2, "bob")]);
    let mut app = App::new(fetcher, store);

    app.handle(Command::QueryChanged("ali".into())).await;
    assert_eq!(app.state().favorites_filtered, vec![user(1, "alice")]);

    app.handle(Command::QueryChanged(String::new())).await;
    assert_eq!(
        app.state().favorites_filtered,
        vec![user(1, "alice"), user(2, "bob")]
    );
}

#[tokio::test]
async fn test_app_runs_against_the_sqlite_store() {
    let store = FavoriteStore::open_in_memory().expect("Failed to open store");
    let fetcher = StubFetcher::new().with_page("a", 1, vec![user(9, "ada")]);
    let mut app = App::new(fetcher, store);

    app.handle(Command::QueryChanged("a".into())).await;
    let events = app.handle(Command::SaveFavorite(user(9, "ada"))).await;

    assert_eq!(rows_of(&events), &[DisplayRow::user(user(9, "ada"), true)]);
}

#[tokio::test]
async fn test_service_processes_commands_in_arrival_order() {
    let fetcher = StubFetcher::new().with_page("a", 1, vec![user(1, "a1")]);
    let store = MemoryStore::with_favorites(vec![user(5, "mia")]);

    let (commands, mut events) = AppService::spawn(fetcher, store);

    commands
        .send(Command::QueryChanged("a".into()))
        .await
        .expect("service alive");
    commands
        .send(Command::TabSelected(Tab::Favorites))
        .await
        .expect("service alive");
    drop(commands);

    let mut row_batches = Vec::new();
    while let Some(event) = events.recv().await {
        if let AppEvent::RowsChanged(rows) = event {
            row_batches.push(rows);
        }
    }

    assert_eq!(row_batches.len(), 2);
    // First batch: search rows for the query
    assert_eq!(row_batches[0], vec![DisplayRow::user(user(1, "a1"), false)]);
    // Second batch: favorites grouped under their initial
    assert_eq!(
        row_batches[1],
        vec![
            DisplayRow::header("M"),
            DisplayRow::user(user(5, "mia"), true),
        ]
    );
}
