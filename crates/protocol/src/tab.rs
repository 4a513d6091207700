//! Browser tab records.

use serde::{Deserialize, Serialize};

/// Snapshot of a browser tab as reported by the host environment.
///
/// `id` is optional: browser tab objects omit the id for tabs the host does
/// not own (devtools, prerender targets).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tab {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub window_id: Option<i32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tab_skips_absent_fields() {
        let tab = Tab {
            id: Some(12),
            ..Default::default()
        };
        assert_eq!(serde_json::to_string(&tab).unwrap(), r#"{"id":12}"#);
    }

    #[test]
    fn tab_round_trips() {
        let tab = Tab {
            id: Some(3),
            url: Some("https://bsky.app".into()),
            title: Some("Bluesky".into()),
            window_id: Some(1),
        };
        let back: Tab = serde_json::from_str(&serde_json::to_string(&tab).unwrap()).unwrap();
        assert_eq!(back, tab);
    }
}
