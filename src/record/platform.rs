//! Build-target platform tag.

use serde::{Deserialize, Serialize};

/// Platform a log was produced on, fixed at build time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ClientPlatform {
    #[serde(rename = "macOS")]
    MacOs,
    #[serde(rename = "iOS")]
    Ios,
    #[serde(rename = "tvOS")]
    TvOs,
    #[serde(rename = "watchOS")]
    WatchOs,
    #[serde(rename = "visionOS")]
    VisionOs,
    #[serde(rename = "linux")]
    Linux,
    #[serde(rename = "windows")]
    Windows,
    #[serde(rename = "android")]
    Android,
    #[serde(rename = "other")]
    Other,
}

impl ClientPlatform {
    /// The platform this binary was compiled for.
    pub const fn current() -> Self {
        if cfg!(target_os = "macos") {
            ClientPlatform::MacOs
        } else if cfg!(target_os = "ios") {
            ClientPlatform::Ios
        } else if cfg!(target_os = "tvos") {
            ClientPlatform::TvOs
        } else if cfg!(target_os = "watchos") {
            ClientPlatform::WatchOs
        } else if cfg!(target_os = "visionos") {
            ClientPlatform::VisionOs
        } else if cfg!(target_os = "linux") {
            ClientPlatform::Linux
        } else if cfg!(target_os = "windows") {
            ClientPlatform::Windows
        } else if cfg!(target_os = "android") {
            ClientPlatform::Android
        } else {
            ClientPlatform::Other
        }
    }
}
