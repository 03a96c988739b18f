use thiserror::Error;

/// Failure modes of the selection container itself. All three are raised at
/// the call site and signal coding defects, not runtime conditions; none of
/// them is retried or swallowed.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("unknown action tag '{tag}'")]
    UnknownAction { tag: String },
    #[error("failed to decode payload for action '{tag}'")]
    ActionDecode {
        tag: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("{accessor} used outside an active selection scope")]
    ContextMissing { accessor: &'static str },
}
