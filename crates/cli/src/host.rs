use std::collections::HashMap;
use std::sync::atomic::{AtomicI32, Ordering};

use async_trait::async_trait;
use mp::{Error, Host, PlatformTab, Result};
use mp_protocol::{PlatformInfo, SyncData, Tab};
use parking_lot::Mutex;
use tracing::debug;

/// In-process host backing the daemon.
///
/// Serves capability records from a static catalog and tracks opened tabs
/// in a table with sequential ids. This is the reference collaborator for
/// development and tests; a browser deployment replaces it with the
/// extension-side implementations.
pub struct LocalHost {
	catalog: Vec<PlatformInfo>,
	tabs: Mutex<HashMap<i32, Tab>>,
	next_tab_id: AtomicI32,
}

impl LocalHost {
	pub fn new(catalog: Vec<PlatformInfo>) -> Self {
		Self {
			catalog,
			tabs: Mutex::new(HashMap::new()),
			next_tab_id: AtomicI32::new(1),
		}
	}

	/// Drop a tab from the table, as if the user had closed it.
	pub fn close_tab(&self, id: i32) -> bool {
		self.tabs.lock().remove(&id).is_some()
	}
}

#[async_trait]
impl Host for LocalHost {
	fn version(&self) -> String {
		env!("CARGO_PKG_VERSION").to_string()
	}

	async fn platform_infos(&self) -> Result<Vec<PlatformInfo>> {
		Ok(self.catalog.clone())
	}

	async fn create_tabs_for_platforms(&self, data: &SyncData) -> Result<Vec<PlatformTab>> {
		let mut opened = Vec::new();
		for platform_target in &data.platforms {
			let name = platform_target.name();
			let Some(info) = self.catalog.iter().find(|info| info.name == name) else {
				debug!(target = "mp.server", platform = name, "skipping unknown platform");
				continue;
			};

			let id = self.next_tab_id.fetch_add(1, Ordering::SeqCst);
			let tab = Tab {
				id: Some(id),
				url: info.inject_url.clone().or_else(|| info.home_url.clone()),
				title: info.platform_name.clone(),
				window_id: Some(1),
			};
			self.tabs.lock().insert(id, tab.clone());
			opened.push(PlatformTab {
				tab,
				platform_info: info.clone(),
			});
		}
		Ok(opened)
	}

	async fn query_tab(&self, id: i32) -> Result<Tab> {
		self.tabs
			.lock()
			.get(&id)
			.cloned()
			.ok_or(Error::TabNotFound { id })
	}
}
