//! Uploaded log records.
//!
//! # Data Flow
//! ```text
//! snapshot text
//!     → log.rs (Log::new: local id, platform, timestamp)
//!     → uploader (by value)
//!     → id reconciled with the server's identifier
//!     → settings history (copy retained)
//! ```

pub mod log;
pub mod platform;

pub use self::log::Log;
pub use platform::ClientPlatform;
