pub mod app;
pub mod events;
pub mod mock;
pub mod service;
pub mod traits;

pub use app::App;
pub use events::AppEvent;
pub use service::AppService;
pub use traits::{FavoriteStorage, UserFetcher};
