use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Failures surfaced by host collaborators and the dispatcher core.
///
/// None of these escape the dispatch boundary as panics or unhandled
/// errors; they are folded into `{ok: false, error}` responses there.
#[derive(Debug, Error)]
pub enum Error {
	/// A tab liveness query failed because the tab no longer exists.
	#[error("tab {id} not found")]
	TabNotFound { id: i32 },

	#[error(transparent)]
	Json(#[from] serde_json::Error),

	#[error(transparent)]
	Other(#[from] anyhow::Error),
}
