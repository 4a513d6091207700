use std::sync::Arc;

use futures::future;
use mp_protocol::{CommandResponse, PlatformInfo, SyncData, TabRef, TabStatus};
use serde_json::Value;
use tracing::debug;

use crate::error::Result;
use crate::host::Host;
use crate::sanitize::sanitize_platform_info;
use crate::store::{TabsManagerGroup, TabsStore};

/// Command handlers over the injected host collaborators.
///
/// Handlers never panic and never let a collaborator error escape as
/// anything but a `Result`; conversion to wire responses happens in
/// [`Service::dispatch`](crate::dispatch).
pub struct Service {
	host: Arc<dyn Host>,
	store: Arc<dyn TabsStore>,
}

impl Service {
	pub fn new(host: Arc<dyn Host>, store: Arc<dyn TabsStore>) -> Self {
		Self { host, store }
	}

	/// `multipost.ping`: liveness, plus capabilities when `withPlatforms`
	/// is truthy.
	pub(crate) async fn ping(&self, params: Option<&Value>) -> Result<CommandResponse> {
		let with_platforms = params
			.and_then(|params| params.get("withPlatforms"))
			.is_some_and(is_truthy);

		let mut response = CommandResponse::success();
		response.version = Some(self.host.version());

		if with_platforms {
			let (platform_infos, platforms) = self.platforms_payload().await?;
			response.platforms = Some(platforms);
			response.platform_infos = Some(platform_infos);
		}

		Ok(response)
	}

	/// `multipost.platforms`: sanitized capability records.
	///
	/// Unlike `ping`, no separate name listing is included here.
	pub(crate) async fn platforms(&self) -> Result<CommandResponse> {
		let (platform_infos, _) = self.platforms_payload().await?;

		let mut response = CommandResponse::success();
		response.platform_infos = Some(platform_infos);
		Ok(response)
	}

	/// `multipost.publish`: open tabs for each targeted platform and
	/// record the publish→tabs group.
	pub(crate) async fn publish(&self, params: Option<&Value>) -> Result<CommandResponse> {
		let data = params
			.cloned()
			.and_then(|params| serde_json::from_value::<SyncData>(params).ok())
			.filter(|data| !data.platforms.is_empty());
		let Some(data) = data else {
			return Ok(CommandResponse::failure("No platforms provided"));
		};

		let tabs = self.host.create_tabs_for_platforms(&data).await?;
		debug!(target = "mp", requested = data.platforms.len(), opened = tabs.len(), "publish opened tabs");

		let refs: Vec<TabRef> = tabs
			.iter()
			.map(|entry| TabRef {
				platform: entry.platform_info.name.clone(),
				tab_id: entry.tab.id,
				status: None,
			})
			.collect();

		self.store.append(TabsManagerGroup {
			sync_data: data,
			tabs,
		});

		let mut response = CommandResponse::success();
		response.tabs = Some(refs);
		Ok(response)
	}

	/// `multipost.status`: resolve liveness of every recorded tab.
	pub(crate) async fn status(&self) -> Result<CommandResponse> {
		let groups = self.store.read_all();
		let entries: Vec<TabRef> = groups
			.iter()
			.flat_map(|group| group.tabs.iter())
			.map(|entry| TabRef {
				platform: entry.platform_info.name.clone(),
				tab_id: entry.tab.id,
				status: None,
			})
			.collect();

		// Every check is issued before any is awaited; a failed or slow
		// query must not hold back the others. `join_all` keeps the
		// flattened recording order in the output regardless of
		// completion order.
		let checks = entries.into_iter().map(|mut entry| async move {
			entry.status = Some(match entry.tab_id {
				None => TabStatus::Unknown,
				Some(id) => match self.host.query_tab(id).await {
					Ok(_) => TabStatus::Open,
					Err(_) => TabStatus::Closed,
				},
			});
			entry
		});
		let tabs = future::join_all(checks).await;

		let mut response = CommandResponse::success();
		response.tabs = Some(tabs);
		Ok(response)
	}

	async fn platforms_payload(&self) -> Result<(Vec<PlatformInfo>, Vec<String>)> {
		let infos = self.host.platform_infos().await?;
		let sanitized: Vec<PlatformInfo> = infos.iter().map(sanitize_platform_info).collect();
		let names = sanitized.iter().map(|info| info.name.clone()).collect();
		Ok((sanitized, names))
	}
}

/// JavaScript truthiness for untyped param values: `null`, `false`, `0`,
/// and `""` are falsy; everything else is truthy.
fn is_truthy(value: &Value) -> bool {
	match value {
		Value::Null => false,
		Value::Bool(flag) => *flag,
		Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0),
		Value::String(text) => !text.is_empty(),
		Value::Array(_) | Value::Object(_) => true,
	}
}
