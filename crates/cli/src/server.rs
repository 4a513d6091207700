use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use mp::{MemoryTabsStore, Service};
use mp_protocol::CommandRequest;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::net::{UnixListener, UnixStream};
use tracing::{debug, info, warn};

use crate::cli::ServeArgs;
use crate::config::PlatformCatalog;
use crate::host::LocalHost;

/// Default agent socket for the current user.
///
/// Uses `$XDG_RUNTIME_DIR/mp-agentd.sock` if available (already
/// user-permissioned), otherwise falls back to the system temp directory.
pub fn default_socket_path() -> PathBuf {
	dirs::runtime_dir()
		.unwrap_or_else(std::env::temp_dir)
		.join("mp-agentd.sock")
}

pub async fn run(args: ServeArgs) -> Result<()> {
	let catalog = match &args.platforms {
		Some(path) => PlatformCatalog::load(path)?,
		None => PlatformCatalog::builtin(),
	};
	info!(target = "mp.server", platforms = catalog.platforms.len(), "platform catalog loaded");

	let host = Arc::new(LocalHost::new(catalog.platforms));
	let store = Arc::new(MemoryTabsStore::new());
	let service = Arc::new(Service::new(host, store));

	let socket_path = args.socket.clone().unwrap_or_else(default_socket_path);
	if socket_path.exists() {
		std::fs::remove_file(&socket_path).with_context(|| {
			format!("Failed to remove existing socket: {}", socket_path.display())
		})?;
	}
	if let Some(parent) = socket_path.parent() {
		if !parent.exists() {
			std::fs::create_dir_all(parent).with_context(|| {
				format!("Failed to create socket directory: {}", parent.display())
			})?;
		}
	}
	let listener = UnixListener::bind(&socket_path).with_context(|| {
		format!("Failed to bind agent socket: {}", socket_path.display())
	})?;
	info!(
		target = "mp.server",
		socket = %socket_path.display(),
		"agent daemon listening"
	);

	loop {
		tokio::select! {
			_ = tokio::signal::ctrl_c() => {
				info!(target = "mp.server", "received Ctrl+C, shutting down");
				break;
			}
			accept = listener.accept() => {
				let (stream, _) = accept.context("Agent daemon accept failed")?;
				let service = Arc::clone(&service);
				tokio::spawn(async move {
					if let Err(err) = handle_client(stream, service).await {
						warn!(target = "mp.server", error = %err, "connection error");
					}
				});
			}
		}
	}

	Ok(())
}

async fn handle_client(stream: UnixStream, service: Arc<Service>) -> Result<()> {
	let (read_half, mut write_half) = stream.into_split();
	let mut reader = BufReader::new(read_half);
	let mut line = String::new();

	loop {
		line.clear();
		let bytes = reader
			.read_line(&mut line)
			.await
			.context("Failed reading agent request")?;
		if bytes == 0 {
			break;
		}
		let trimmed = line.trim_end();
		if trimmed.is_empty() {
			continue;
		}

		// Unparseable lines and foreign traffic share the silent-drop
		// path: the transport is shared, and this subsystem answers only
		// what is addressed to it.
		let request = serde_json::from_str::<CommandRequest>(trimmed).ok();
		match service.dispatch(request.as_ref()).await.into_response() {
			Some(response) => {
				let payload =
					serde_json::to_string(&response).context("Failed to serialize response")?;
				write_half
					.write_all(format!("{}\n", payload).as_bytes())
					.await
					.context("Failed writing agent response")?;
				write_half
					.flush()
					.await
					.context("Failed flushing agent response")?;
			}
			None => {
				debug!(target = "mp.server", "dropped message for another subsystem");
			}
		}
	}

	Ok(())
}
