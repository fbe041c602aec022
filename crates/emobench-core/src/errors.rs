use thiserror::Error;

/// Fatal error classes the harness distinguishes. Backend and I/O failures
/// flow through `anyhow` with context; these two carry enough structure for
/// callers (and tests) to branch on.
#[derive(Debug, Error)]
pub enum EvalError {
    /// Invalid or contradictory run configuration. Raised before any row is
    /// processed.
    #[error("config error: {0}")]
    Config(String),

    /// A dataset row did not match the column layout for the active mode.
    #[error("row {row}: expected {expected} fields for the {layout} layout, got {got}")]
    RowShape {
        row: usize,
        layout: &'static str,
        expected: usize,
        got: usize,
    },
}
