use anyhow::{Context, Result, bail};
use mp_protocol::{CommandRequest, CommandResponse, METHOD_PREFIX};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::net::UnixStream;

use crate::cli::CallArgs;
use crate::server::default_socket_path;

/// Send one command to a running daemon, print the response, and report
/// whether the command succeeded.
pub async fn call(args: CallArgs) -> Result<bool> {
	let method = if args.command.contains('.') {
		args.command.clone()
	} else {
		format!("{METHOD_PREFIX}{}", args.command)
	};
	let params = args
		.params
		.as_deref()
		.map(serde_json::from_str)
		.transpose()
		.context("Invalid --params JSON")?;

	let request = CommandRequest {
		request_type: None,
		method: Some(method),
		params,
	};

	let socket_path = args.socket.clone().unwrap_or_else(default_socket_path);
	let stream = UnixStream::connect(&socket_path).await.with_context(|| {
		format!("Failed to connect to agent daemon at {}", socket_path.display())
	})?;

	let response = send_request(stream, &request).await?;
	println!("{}", serde_json::to_string_pretty(&response)?);
	Ok(response.ok)
}

async fn send_request(mut stream: UnixStream, request: &CommandRequest) -> Result<CommandResponse> {
	let payload = serde_json::to_string(request).context("Failed to serialize request")?;
	stream
		.write_all(format!("{}\n", payload).as_bytes())
		.await
		.context("Failed writing agent request")?;
	stream
		.flush()
		.await
		.context("Failed flushing agent request")?;

	let mut reader = BufReader::new(stream);
	let mut line = String::new();
	reader
		.read_line(&mut line)
		.await
		.context("Failed reading agent response")?;
	if line.trim().is_empty() {
		bail!("Agent daemon closed the connection without a response");
	}
	serde_json::from_str(&line).context("Failed parsing agent response")
}
