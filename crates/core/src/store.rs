use mp_protocol::{PlatformInfo, SyncData, Tab};
use parking_lot::Mutex;

/// One opened tab paired with the capability record it was opened for.
#[derive(Debug, Clone)]
pub struct PlatformTab {
	pub tab: Tab,
	pub platform_info: PlatformInfo,
}

/// Recorded association between one publish request and the tabs it opened.
///
/// Groups accumulate for the lifetime of the process; retention is the
/// store implementation's concern.
#[derive(Debug, Clone)]
pub struct TabsManagerGroup {
	/// The original publish payload, kept verbatim.
	pub sync_data: SyncData,
	pub tabs: Vec<PlatformTab>,
}

/// Store for publish→tabs groups.
///
/// `publish` appends and `status` reads from independently spawned tasks,
/// so implementations must be safe under interleaved access.
pub trait TabsStore: Send + Sync {
	fn append(&self, group: TabsManagerGroup);

	/// All groups in recording order.
	fn read_all(&self) -> Vec<TabsManagerGroup>;
}

/// Process-wide in-memory store.
#[derive(Default)]
pub struct MemoryTabsStore {
	groups: Mutex<Vec<TabsManagerGroup>>,
}

impl MemoryTabsStore {
	pub fn new() -> Self {
		Self::default()
	}
}

impl TabsStore for MemoryTabsStore {
	fn append(&self, group: TabsManagerGroup) {
		self.groups.lock().push(group);
	}

	fn read_all(&self) -> Vec<TabsManagerGroup> {
		self.groups.lock().clone()
	}
}
