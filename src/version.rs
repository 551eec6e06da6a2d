// Version information for the image edit node

/// Full version string with feature description
pub const VERSION: &str = "v0.1.0-image-edit-2026-10-16";

/// Semantic version number
pub const VERSION_NUMBER: &str = env!("CARGO_PKG_VERSION");

/// Build date
pub const BUILD_DATE: &str = "2026-10-16";

/// Get version information as a formatted string
pub fn get_version_info() -> String {
    format!("Image Edit Node {} ({})", VERSION_NUMBER, BUILD_DATE)
}
