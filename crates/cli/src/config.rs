use std::path::Path;

use anyhow::{Context, Result};
use mp_protocol::PlatformInfo;
use serde::{Deserialize, Serialize};

/// On-disk platform catalog: the daemon's source of capability records.
///
/// Capability records loaded from disk never carry an injection entry
/// point (it has no serialized form); the daemon's local host opens tabs
/// from the record's URLs instead.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlatformCatalog {
	#[serde(default)]
	pub platforms: Vec<PlatformInfo>,
}

impl PlatformCatalog {
	pub fn load(path: &Path) -> Result<Self> {
		let raw = std::fs::read_to_string(path)
			.with_context(|| format!("Failed to read platform catalog: {}", path.display()))?;
		serde_json::from_str(&raw)
			.with_context(|| format!("Invalid platform catalog: {}", path.display()))
	}

	/// Small default catalog so `mp serve` works out of the box.
	pub fn builtin() -> Self {
		let entry = |name: &str, label: &str, home: &str, inject: &str| PlatformInfo {
			name: name.into(),
			platform_name: Some(label.into()),
			home_url: Some(home.into()),
			inject_url: Some(inject.into()),
			..Default::default()
		};

		Self {
			platforms: vec![
				entry("bluesky", "Bluesky", "https://bsky.app", "https://bsky.app"),
				entry("mastodon", "Mastodon", "https://mastodon.social", "https://mastodon.social/publish"),
				entry("devto", "DEV Community", "https://dev.to", "https://dev.to/new"),
				entry("x", "X", "https://x.com", "https://x.com/compose/post"),
			],
		}
	}
}
