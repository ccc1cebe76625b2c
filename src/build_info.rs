//! Build-time information
//!
//! This module provides access to build metadata captured at compile time,
//! including build timestamps, cargo configuration, and compiler version.

/// Plugin name as shown in `--version`
pub const PLUGIN_NAME: &str = "check_nfs_client";

/// Crate version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build timestamp (when the binary was compiled)
pub const BUILD_TIMESTAMP: &str = env!("VERGEN_BUILD_TIMESTAMP");

/// Cargo optimization level (0, 1, 2, 3, s, z)
pub const CARGO_OPT_LEVEL: &str = env!("VERGEN_CARGO_OPT_LEVEL");

/// Target triple (e.g., x86_64-unknown-linux-gnu)
pub const CARGO_TARGET_TRIPLE: &str = env!("VERGEN_CARGO_TARGET_TRIPLE");

/// Rust compiler version (e.g., 1.75.0)
pub const RUSTC_SEMVER: &str = env!("VERGEN_RUSTC_SEMVER");

/// Rust channel (stable, beta, or nightly)
pub const RUSTC_CHANNEL: &str = env!("VERGEN_RUSTC_CHANNEL");

/// Returns the line printed by `--version`
///
/// Example: `check_nfs_client Version 0.1.0 Build time: 2026-10-19T08:00:00.000000000Z UTC`
pub fn version_string() -> String {
    format!(
        "{} Version {} Build time: {} UTC",
        PLUGIN_NAME, VERSION, BUILD_TIMESTAMP
    )
}

/// Returns a detailed build info string, logged at debug level on startup
pub fn detailed_info() -> String {
    format!(
        "Built: {}, Target: {}, Optimization: {}, Rustc: {} ({})",
        BUILD_TIMESTAMP, CARGO_TARGET_TRIPLE, CARGO_OPT_LEVEL, RUSTC_SEMVER, RUSTC_CHANNEL
    )
}
