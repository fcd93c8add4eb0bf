pub mod display;
pub mod page;
pub mod user;

pub use display::{DisplayRow, Tab};
pub use page::SearchPage;
pub use user::User;
