//! Wire types for the MultiPost agent command surface.
//!
//! This crate contains the serde-serializable types exchanged between an
//! automation agent and the dispatcher: the inbound command envelope, the
//! response envelope, platform capability records, and the publish payload.
//!
//! # Design Philosophy
//!
//! Types in this crate are:
//! - **Pure data**: No behavior beyond serialization/deserialization
//! - **1:1 with the wire**: camelCase field names, absent fields omitted
//!   (never serialized as `null`)
//! - **Stable**: Changes only when the wire protocol changes
//!
//! Classification, sanitization, and dispatch live in `mp-core`.

pub mod platform;
pub mod request;
pub mod response;
pub mod sync;
pub mod tab;

pub use platform::*;
pub use request::*;
pub use response::*;
pub use sync::*;
pub use tab::*;
