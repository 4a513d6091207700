use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Root CLI for the MultiPost agent daemon.
#[derive(Parser, Debug)]
#[command(name = "mp")]
#[command(about = "MultiPost agent daemon - drive cross-posting over a local socket")]
#[command(version)]
pub struct Cli {
	/// Increase verbosity (-v info, -vv debug)
	#[arg(short, long, global = true, action = clap::ArgAction::Count)]
	pub verbose: u8,

	#[command(subcommand)]
	pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
	/// Run the agent daemon on a local socket.
	Serve(ServeArgs),
	/// Send one command to a running daemon and print the response.
	Call(CallArgs),
}

#[derive(Args, Debug, Clone)]
pub struct ServeArgs {
	/// Socket path; defaults to $XDG_RUNTIME_DIR/mp-agentd.sock.
	#[arg(long, value_name = "PATH")]
	pub socket: Option<PathBuf>,

	/// JSON platform catalog file; a built-in catalog is used if omitted.
	#[arg(long, value_name = "FILE")]
	pub platforms: Option<PathBuf>,
}

#[derive(Args, Debug, Clone)]
pub struct CallArgs {
	/// Command name (ping, platforms, publish, status); the `multipost.`
	/// prefix may be omitted.
	#[arg(value_name = "COMMAND")]
	pub command: String,

	/// JSON object with command params.
	#[arg(long, value_name = "JSON")]
	pub params: Option<String>,

	/// Socket path; defaults to $XDG_RUNTIME_DIR/mp-agentd.sock.
	#[arg(long, value_name = "PATH")]
	pub socket: Option<PathBuf>,
}
