use async_trait::async_trait;
use mp_protocol::{PlatformInfo, SyncData, Tab};

use crate::error::Result;
use crate::store::PlatformTab;

/// Host-environment collaborators consumed by the dispatcher.
///
/// The dispatcher only orchestrates; implementations own platform
/// discovery, tab creation policy (create vs. reuse, per-platform
/// injection), and tab liveness. A real deployment backs this with the
/// browser extension APIs; tests and the bundled daemon use in-process
/// implementations.
#[async_trait]
pub trait Host: Send + Sync {
	/// Running build version, reported by `ping`.
	fn version(&self) -> String;

	/// Fresh capability records, one per supported platform.
	///
	/// Records may carry non-transferable state (injection entry points,
	/// account session data); callers sanitize before the records leave
	/// the process.
	async fn platform_infos(&self) -> Result<Vec<PlatformInfo>>;

	/// Open or reuse one tab per targeted platform.
	///
	/// The host may skip platforms it cannot serve; the returned pairs
	/// keep the host's own ordering.
	async fn create_tabs_for_platforms(&self, data: &SyncData) -> Result<Vec<PlatformTab>>;

	/// Look up a tab by id. Fails when the tab no longer exists.
	async fn query_tab(&self, id: i32) -> Result<Tab>;
}
