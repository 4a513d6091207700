//! Command dispatcher core for the MultiPost agent surface.
//!
//! An automation agent drives the cross-posting tool through four commands
//! (`ping`, `platforms`, `publish`, `status`) delivered over a shared
//! message transport. This crate owns the orchestration: deciding which
//! inbound messages belong to this subsystem, routing them to a handler,
//! fanning out per-tab liveness checks, and keeping the mapping between a
//! publish request and the tabs it opened.
//!
//! Everything environment-specific (platform discovery, tab creation, tab
//! queries) sits behind the [`Host`] trait; the recorded publish→tabs
//! mapping sits behind [`TabsStore`].

pub mod dispatch;
pub mod error;
pub mod host;
pub mod sanitize;
pub mod service;
pub mod store;

pub use dispatch::{Command, Dispatch, is_addressed};
pub use error::{Error, Result};
pub use host::Host;
pub use sanitize::sanitize_platform_info;
pub use service::Service;
pub use store::{MemoryTabsStore, PlatformTab, TabsManagerGroup, TabsStore};
