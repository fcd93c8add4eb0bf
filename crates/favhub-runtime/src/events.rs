use favhub_types::DisplayRow;

/// Outputs of the command loop, in emission order.
///
/// `RowsChanged` is emitted after every handled command (pure
/// recomputation, cheap and idempotent); `Error` carries the
/// display-ready message for a failed fetch or store operation.
#[derive(Debug, Clone, PartialEq)]
pub enum AppEvent {
    RowsChanged(Vec<DisplayRow>),
    Error(String),
}
