// Engine module - pure list-composition logic (reconciliation, reduction, display)
// This layer sits between the I/O crates (client, store) and the runtime;
// it owns no resources and performs no I/O.

pub mod display;
pub mod reconcile;
pub mod reducer;
pub mod state;

pub use display::derive_rows;
pub use reconcile::{group_by_initial, mark_favorites};
pub use reducer::{reduce, Command, Effect};
pub use state::AppState;
