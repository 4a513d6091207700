use std::sync::Arc;

use mp_protocol::{CommandRequest, CommandResponse, METHOD_PREFIX, SUBSYSTEM_MARKER};
use tracing::{debug, warn};

use crate::service::Service;

/// Whether an inbound message is addressed to this subsystem at all.
///
/// The transport is shared between subsystems, so either addressing
/// convention claims a message: the reserved `type` marker, or a `method`
/// under the reserved namespace prefix. Pure predicate, no side effects.
pub fn is_addressed(request: Option<&CommandRequest>) -> bool {
	let Some(request) = request else {
		return false;
	};
	if request.request_type.as_deref() == Some(SUBSYSTEM_MARKER) {
		return true;
	}
	matches!(&request.method, Some(method) if method.starts_with(METHOD_PREFIX))
}

/// The four commands recognized under the reserved namespace.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
	Ping,
	Platforms,
	Publish,
	Status,
}

impl Command {
	/// Parse a dotted method name. `None` covers both foreign methods and
	/// unknown suffixes under the reserved prefix; callers that already
	/// classified the request treat `None` as "unknown command".
	pub fn from_method(method: &str) -> Option<Command> {
		match method.strip_prefix(METHOD_PREFIX)? {
			"ping" => Some(Command::Ping),
			"platforms" => Some(Command::Platforms),
			"publish" => Some(Command::Publish),
			"status" => Some(Command::Status),
			_ => None,
		}
	}
}

impl std::fmt::Display for Command {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Command::Ping => write!(f, "ping"),
			Command::Platforms => write!(f, "platforms"),
			Command::Publish => write!(f, "publish"),
			Command::Status => write!(f, "status"),
		}
	}
}

/// Outcome of dispatching one inbound message.
///
/// The silent-drop path is a first-class variant rather than an implicit
/// "do nothing", so transports and tests can assert on it.
#[derive(Debug)]
pub enum Dispatch {
	/// The message belongs to another subsystem; no response is sent.
	NotAddressed,
	/// The command ran successfully.
	Handled(CommandResponse),
	/// Validation failure, unknown command, or collaborator failure,
	/// reported as an `{ok: false, error}` response.
	Failed(CommandResponse),
}

impl Dispatch {
	/// The response to deliver, if any. `NotAddressed` yields none.
	pub fn into_response(self) -> Option<CommandResponse> {
		match self {
			Dispatch::NotAddressed => None,
			Dispatch::Handled(response) | Dispatch::Failed(response) => Some(response),
		}
	}

	pub fn response(&self) -> Option<&CommandResponse> {
		match self {
			Dispatch::NotAddressed => None,
			Dispatch::Handled(response) | Dispatch::Failed(response) => Some(response),
		}
	}
}

impl Service {
	/// Route one classified message to its handler.
	///
	/// Collaborator failures are caught here and folded into `{ok: false,
	/// error}` responses; nothing propagates past this boundary.
	pub async fn dispatch(&self, request: Option<&CommandRequest>) -> Dispatch {
		if !is_addressed(request) {
			return Dispatch::NotAddressed;
		}
		let Some(request) = request else {
			return Dispatch::NotAddressed;
		};

		// The `type` marker only claims the message; the command itself is
		// always resolved from `method`.
		let Some(command) = request.method.as_deref().and_then(Command::from_method) else {
			debug!(target = "mp", method = request.method.as_deref().unwrap_or(""), "unknown method");
			return Dispatch::Failed(CommandResponse::failure("Unknown method"));
		};

		let params = request.params.as_ref();
		let outcome = match command {
			Command::Ping => self.ping(params).await,
			Command::Platforms => self.platforms().await,
			Command::Publish => self.publish(params).await,
			Command::Status => self.status().await,
		};

		match outcome {
			Ok(response) if response.ok => Dispatch::Handled(response),
			Ok(response) => Dispatch::Failed(response),
			Err(err) => {
				warn!(target = "mp", command = %command, error = %err, "command failed");
				Dispatch::Failed(CommandResponse::failure(err.to_string()))
			}
		}
	}

	/// Callback-transport entry point.
	///
	/// Classification happens before this returns; handling is spawned and
	/// the transport must tolerate `respond` firing after the call has
	/// returned. `respond` fires exactly once for addressed messages and
	/// never for unaddressed ones.
	pub fn handle_message<F>(self: &Arc<Self>, request: Option<CommandRequest>, respond: F)
	where
		F: FnOnce(CommandResponse) + Send + 'static,
	{
		if !is_addressed(request.as_ref()) {
			return;
		}

		let service = Arc::clone(self);
		tokio::spawn(async move {
			if let Some(response) = service.dispatch(request.as_ref()).await.into_response() {
				respond(response);
			}
		});
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn request(request_type: Option<&str>, method: Option<&str>) -> CommandRequest {
		CommandRequest {
			request_type: request_type.map(str::to_string),
			method: method.map(str::to_string),
			params: None,
		}
	}

	#[test]
	fn missing_request_is_not_addressed() {
		assert!(!is_addressed(None));
	}

	#[test]
	fn type_marker_claims_the_message() {
		assert!(is_addressed(Some(&request(Some("MULTIPOST_MCP"), None))));
		assert!(!is_addressed(Some(&request(Some("OTHER_SUBSYSTEM"), None))));
	}

	#[test]
	fn namespaced_method_claims_the_message() {
		assert!(is_addressed(Some(&request(None, Some("multipost.ping")))));
		assert!(!is_addressed(Some(&request(None, Some("multipost")))));
		assert!(!is_addressed(Some(&request(None, Some("otherns.ping")))));
		assert!(!is_addressed(Some(&request(None, None))));
	}

	#[test]
	fn command_parses_known_suffixes_only() {
		assert_eq!(Command::from_method("multipost.ping"), Some(Command::Ping));
		assert_eq!(Command::from_method("multipost.platforms"), Some(Command::Platforms));
		assert_eq!(Command::from_method("multipost.publish"), Some(Command::Publish));
		assert_eq!(Command::from_method("multipost.status"), Some(Command::Status));

		assert_eq!(Command::from_method("multipost.frobnicate"), None);
		assert_eq!(Command::from_method("ping"), None);
	}
}
