//! Publish payload types.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Payload of a `publish` command: the content to post and the platforms to
/// post it to. Unrecognized fields are preserved verbatim so the recorded
/// payload stays faithful to what the agent sent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SyncData {
    #[serde(default)]
    pub platforms: Vec<PlatformTarget>,

    /// Content body (text, media references); opaque to the dispatcher.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,

    /// Whether the per-platform flow should submit without user review.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_auto_publish: Option<bool>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// One target platform in a publish payload: either a bare platform name or
/// a detailed record carrying per-platform overrides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PlatformTarget {
    Name(String),
    Detailed(SyncDataPlatform),
}

impl PlatformTarget {
    pub fn name(&self) -> &str {
        match self {
            PlatformTarget::Name(name) => name,
            PlatformTarget::Detailed(platform) => &platform.name,
        }
    }
}

/// Detailed per-platform publish options.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SyncDataPlatform {
    pub name: String,

    /// Overrides the capability record's inject URL for this publish.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inject_url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extra_config: Option<Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn platform_target_accepts_bare_name() {
        let data: SyncData =
            serde_json::from_str(r#"{"platforms":["bluesky","mastodon"]}"#).unwrap();
        let names: Vec<&str> = data.platforms.iter().map(PlatformTarget::name).collect();
        assert_eq!(names, ["bluesky", "mastodon"]);
    }

    #[test]
    fn platform_target_accepts_detailed_record() {
        let data: SyncData = serde_json::from_str(
            r#"{"platforms":[{"name":"devto","injectUrl":"https://dev.to/new"}]}"#,
        )
        .unwrap();
        assert_eq!(data.platforms[0].name(), "devto");
    }

    #[test]
    fn unknown_fields_are_preserved() {
        let data: SyncData = serde_json::from_str(
            r#"{"platforms":["bluesky"],"traceId":"t-1","origin":"agent"}"#,
        )
        .unwrap();
        assert_eq!(data.extra["traceId"], "t-1");

        let json = serde_json::to_string(&data).unwrap();
        assert!(json.contains(r#""traceId":"t-1""#));
    }

    #[test]
    fn missing_platforms_deserializes_empty() {
        let data: SyncData = serde_json::from_str(r#"{"data":{"title":"hi"}}"#).unwrap();
        assert!(data.platforms.is_empty());
    }
}
