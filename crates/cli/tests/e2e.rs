use std::io::{BufRead, BufReader, Write};
use std::os::unix::net::UnixStream;
use std::path::{Path, PathBuf};
use std::process::{Child, Command, Stdio};
use std::time::Duration;

use tempfile::TempDir;

/// Daemon child process, killed on drop so failing tests don't leak it.
struct Daemon(Child);

impl Drop for Daemon {
	fn drop(&mut self) {
		let _ = self.0.kill();
		let _ = self.0.wait();
	}
}

fn spawn_daemon(socket: &Path, platforms: Option<&Path>) -> Daemon {
	let mut cmd = Command::new(env!("CARGO_BIN_EXE_mp"));
	cmd.arg("serve").arg("--socket").arg(socket);
	if let Some(platforms) = platforms {
		cmd.arg("--platforms").arg(platforms);
	}
	let child = cmd
		.stdout(Stdio::null())
		.stderr(Stdio::null())
		.spawn()
		.expect("failed to start mp serve");
	Daemon(child)
}

fn connect(socket: &Path) -> UnixStream {
	for _ in 0..100 {
		if let Ok(stream) = UnixStream::connect(socket) {
			return stream;
		}
		std::thread::sleep(Duration::from_millis(50));
	}
	panic!("agent daemon did not come up at {}", socket.display());
}

fn roundtrip(stream: &mut UnixStream, reader: &mut BufReader<UnixStream>, line: &str) -> serde_json::Value {
	writeln!(stream, "{line}").unwrap();
	stream.flush().unwrap();

	let mut response = String::new();
	reader.read_line(&mut response).unwrap();
	serde_json::from_str(&response).expect("daemon response was not JSON")
}

fn socket_in(tmp: &TempDir) -> PathBuf {
	tmp.path().join("agent.sock")
}

#[test]
fn ping_publish_status_over_the_socket() {
	let tmp = TempDir::new().unwrap();
	let socket = socket_in(&tmp);
	let _daemon = spawn_daemon(&socket, None);

	let mut stream = connect(&socket);
	let mut reader = BufReader::new(stream.try_clone().unwrap());

	let ping = roundtrip(&mut stream, &mut reader, r#"{"method":"multipost.ping"}"#);
	assert_eq!(ping["ok"], true);
	assert!(ping["version"].is_string());
	assert!(ping.get("platforms").is_none());

	let publish = roundtrip(
		&mut stream,
		&mut reader,
		r#"{"method":"multipost.publish","params":{"platforms":["bluesky","mastodon"]}}"#,
	);
	assert_eq!(publish["ok"], true);
	let tabs = publish["tabs"].as_array().unwrap();
	assert_eq!(tabs.len(), 2);
	assert_eq!(tabs[0]["platform"], "bluesky");
	assert_eq!(tabs[1]["platform"], "mastodon");

	let status = roundtrip(&mut stream, &mut reader, r#"{"method":"multipost.status"}"#);
	assert_eq!(status["ok"], true);
	let tabs = status["tabs"].as_array().unwrap();
	assert_eq!(tabs.len(), 2);
	assert!(tabs.iter().all(|tab| tab["status"] == "open"));
}

#[test]
fn foreign_messages_get_no_response() {
	let tmp = TempDir::new().unwrap();
	let socket = socket_in(&tmp);
	let _daemon = spawn_daemon(&socket, None);

	let mut stream = connect(&socket);
	let mut reader = BufReader::new(stream.try_clone().unwrap());

	// Traffic for another subsystem is dropped, so the first response line
	// must belong to the ping that follows.
	writeln!(stream, r#"{{"type":"OTHER_SUBSYSTEM","method":"otherns.ping"}}"#).unwrap();
	let ping = roundtrip(&mut stream, &mut reader, r#"{"method":"multipost.ping"}"#);
	assert_eq!(ping["ok"], true);
	assert!(ping["version"].is_string());
}

#[test]
fn call_reports_unknown_method_with_failure_exit() {
	let tmp = TempDir::new().unwrap();
	let socket = socket_in(&tmp);
	let _daemon = spawn_daemon(&socket, None);
	drop(connect(&socket));

	let output = Command::new(env!("CARGO_BIN_EXE_mp"))
		.arg("call")
		.arg("frobnicate")
		.arg("--socket")
		.arg(&socket)
		.output()
		.expect("failed to run mp call");

	assert!(!output.status.success());
	let stdout = String::from_utf8_lossy(&output.stdout);
	let response: serde_json::Value = serde_json::from_str(&stdout).unwrap();
	assert_eq!(response["ok"], false);
	assert_eq!(response["error"], "Unknown method");
}

#[test]
fn serve_uses_the_configured_platform_catalog() {
	let tmp = TempDir::new().unwrap();
	let socket = socket_in(&tmp);

	let catalog_path = tmp.path().join("platforms.json");
	std::fs::write(
		&catalog_path,
		r#"{"platforms":[{"name":"lobsters","platformName":"Lobsters","homeUrl":"https://lobste.rs"}]}"#,
	)
	.unwrap();
	let _daemon = spawn_daemon(&socket, Some(&catalog_path));

	let mut stream = connect(&socket);
	let mut reader = BufReader::new(stream.try_clone().unwrap());

	let ping = roundtrip(
		&mut stream,
		&mut reader,
		r#"{"method":"multipost.ping","params":{"withPlatforms":true}}"#,
	);
	assert_eq!(ping["ok"], true);
	assert_eq!(ping["platforms"], serde_json::json!(["lobsters"]));

	let platforms = roundtrip(&mut stream, &mut reader, r#"{"method":"multipost.platforms"}"#);
	assert_eq!(platforms["ok"], true);
	assert!(platforms.get("platforms").is_none());
	assert_eq!(platforms["platformInfos"][0]["name"], "lobsters");
}
