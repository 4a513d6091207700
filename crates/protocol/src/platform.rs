//! Platform capability records.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::sync::SyncData;

/// Capability record for one publishing target.
///
/// Produced fresh on every discovery call by the platform collaborator.
/// The record may carry process-internal state (the injection entry point,
/// account session artifacts) that must be stripped before the record
/// crosses the process boundary; see `mp-core`'s sanitizer.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlatformInfo {
    /// Stable platform identifier, e.g. `bluesky`.
    pub name: String,

    /// Human-readable platform label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub platform_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub home_url: Option<String>,

    /// Page the publish flow opens before injecting content.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inject_url: Option<String>,

    /// Key of the account the platform is currently bound to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_key: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_info: Option<AccountInfo>,

    /// Content-injection entry point, executed inside the opened tab by the
    /// tab-creation collaborator. Never serialized.
    #[serde(skip)]
    pub inject_function: Option<InjectFunction>,
}

/// Account metadata attached to a capability record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,

    /// Opaque session artifacts (cookies, tokens). Must not leave the
    /// process; stripped by the sanitizer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extra_data: Option<Value>,
}

/// Opaque handle to a platform's content-injection function.
///
/// Cloning is cheap (shared `Arc`). The handle deliberately has no serde
/// representation: an executable reference is not meaningfully transferable.
#[derive(Clone)]
pub struct InjectFunction(Arc<dyn Fn(&SyncData) -> Value + Send + Sync>);

impl InjectFunction {
    pub fn new(f: impl Fn(&SyncData) -> Value + Send + Sync + 'static) -> Self {
        Self(Arc::new(f))
    }

    pub fn call(&self, data: &SyncData) -> Value {
        (self.0)(data)
    }
}

impl fmt::Debug for InjectFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("InjectFunction(..)")
    }
}
