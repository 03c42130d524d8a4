//! Category-scoped structured logging with opportunistic remote upload.

pub mod category;
pub mod config;
pub mod error;
pub mod observability;
pub mod record;
pub mod settings;
pub mod sink;
pub mod system;
pub mod upload;

pub use category::{Category, StandardCategory};
pub use config::schema::LogshipConfig;
pub use error::{LogError, LogResult};
pub use record::{ClientPlatform, Log};
pub use settings::{LogConfiguration, MainContext, MemorySettings};
pub use sink::{EntryKind, LogEntry, LogLevel, LogSink, Logger, MemorySink};
pub use system::LoggingSystem;
pub use upload::{HttpUploader, UploadError, Uploader};
