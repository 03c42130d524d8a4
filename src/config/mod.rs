//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → LogshipConfig (validated, immutable)
//!     → logging init, metrics init, HttpUploader, MemorySettings seed
//! ```
//!
//! # Design Decisions
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks
//! - The user's upload consent lives in the settings collaborator at runtime;
//!   the file only seeds it

pub mod loader;
pub mod schema;
pub mod validation;

pub use schema::LogshipConfig;
pub use schema::LoggingConfig;
pub use schema::MetricsConfig;
pub use schema::UploadConfig;
