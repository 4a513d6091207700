//! MultiPost agent daemon and one-shot client.
//!
//! `mp serve` exposes the dispatcher core over a local unix socket
//! speaking line-delimited JSON; `mp call` sends a single command to a
//! running daemon. The daemon backs the dispatcher with [`host::LocalHost`],
//! an in-process stand-in for the browser-side collaborators.

pub mod cli;
pub mod client;
pub mod config;
pub mod host;
pub mod logging;
pub mod server;
