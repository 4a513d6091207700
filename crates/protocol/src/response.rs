//! Outbound response envelope.

use serde::{Deserialize, Serialize};

use crate::platform::PlatformInfo;

/// Response envelope delivered back through the transport callback.
///
/// Fields irrelevant to the command that produced the response are omitted
/// from the serialized form entirely, keeping the payload minimal.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommandResponse {
    /// Whether the command succeeded.
    pub ok: bool,

    /// Human-readable failure message, present only when `ok` is false.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,

    /// Running build version, present only on `ping` responses.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    /// Platform name listing (the `name` projection of `platform_infos`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub platforms: Option<Vec<String>>,

    /// Sanitized platform capability records.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub platform_infos: Option<Vec<PlatformInfo>>,

    /// Tabs opened by `publish`, or tabs with liveness from `status`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tabs: Option<Vec<TabRef>>,
}

impl CommandResponse {
    /// Bare success envelope; command-specific fields are filled by callers.
    pub fn success() -> Self {
        Self {
            ok: true,
            ..Default::default()
        }
    }

    /// Failure envelope carrying only `ok: false` and the message.
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            error: Some(message.into()),
            ..Default::default()
        }
    }
}

/// One per-platform tab reference in a `publish` or `status` response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TabRef {
    pub platform: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tab_id: Option<i32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<TabStatus>,
}

/// Liveness of a previously opened tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TabStatus {
    /// The tab still exists.
    Open,
    /// The tab query failed; the tab is gone.
    Closed,
    /// No tab id was recorded, so liveness cannot be resolved.
    Unknown,
}

impl std::fmt::Display for TabStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TabStatus::Open => write!(f, "open"),
            TabStatus::Closed => write!(f, "closed"),
            TabStatus::Unknown => write!(f, "unknown"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_envelope_omits_absent_fields() {
        let json = serde_json::to_string(&CommandResponse::success()).unwrap();
        assert_eq!(json, r#"{"ok":true}"#);
    }

    #[test]
    fn failure_envelope_carries_only_error() {
        let json = serde_json::to_string(&CommandResponse::failure("Unknown method")).unwrap();
        assert_eq!(json, r#"{"ok":false,"error":"Unknown method"}"#);
    }

    #[test]
    fn tab_ref_uses_camel_case_and_skips_none() {
        let with_id = TabRef {
            platform: "bluesky".into(),
            tab_id: Some(7),
            status: Some(TabStatus::Open),
        };
        let json = serde_json::to_string(&with_id).unwrap();
        assert_eq!(json, r#"{"platform":"bluesky","tabId":7,"status":"open"}"#);

        let bare = TabRef {
            platform: "mastodon".into(),
            tab_id: None,
            status: None,
        };
        let json = serde_json::to_string(&bare).unwrap();
        assert_eq!(json, r#"{"platform":"mastodon"}"#);
    }

    #[test]
    fn tab_status_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&TabStatus::Closed).unwrap(), r#""closed""#);
        assert_eq!(serde_json::to_string(&TabStatus::Unknown).unwrap(), r#""unknown""#);
    }
}
