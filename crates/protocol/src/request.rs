//! Inbound command envelope.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Reserved `type` tag marking a request as addressed to this subsystem.
pub const SUBSYSTEM_MARKER: &str = "MULTIPOST_MCP";

/// Reserved method namespace prefix, including the trailing dot.
pub const METHOD_PREFIX: &str = "multipost.";

/// Duck-typed inbound request as it arrives from the shared transport.
///
/// Every field is optional: the transport carries traffic for several
/// subsystems and a message is only interpreted after classification.
/// Either the `type` marker or a `multipost.`-prefixed `method` claims a
/// message for this dispatcher.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CommandRequest {
    /// Subsystem ownership tag (one of the two addressing conventions).
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub request_type: Option<String>,

    /// Dotted command name, e.g. `multipost.publish`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,

    /// Command-specific payload, left opaque until the command is known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub params: Option<Value>,
}
