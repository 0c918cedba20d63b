//! Build information module
//!
//! Compile-time build number and timestamp, embedded by `build.rs`.

use serde::Serialize;

/// Build number, incremented on each recompilation
pub const BUILD_NUMBER: u64 = match option_env!("PORTIONS_BUILD_NUMBER") {
    Some(s) => match parse_u64(s) {
        Some(n) => n,
        None => 0,
    },
    None => 0,
};

/// Build timestamp in ISO 8601 format
pub const BUILD_TIMESTAMP: &str = match option_env!("PORTIONS_BUILD_TIMESTAMP") {
    Some(s) => s,
    None => "unknown",
};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");

/// Parse a decimal u64 in const context; `None` on any non-digit or overflow
const fn parse_u64(s: &str) -> Option<u64> {
    let bytes = s.as_bytes();
    if bytes.is_empty() {
        return None;
    }
    let mut result: u64 = 0;
    let mut i = 0;
    while i < bytes.len() {
        let b = bytes[i];
        if b < b'0' || b > b'9' {
            return None;
        }
        result = match result.checked_mul(10) {
            Some(r) => match r.checked_add((b - b'0') as u64) {
                Some(r) => r,
                None => return None,
            },
            None => return None,
        };
        i += 1;
    }
    Some(result)
}

/// Build information reported by the status tool
#[derive(Debug, Clone, Serialize)]
pub struct BuildInfo {
    pub name: &'static str,
    pub version: &'static str,
    pub build_number: u64,
    pub build_timestamp: &'static str,
    pub description: &'static str,
}

impl BuildInfo {
    pub fn current() -> Self {
        Self {
            name: NAME,
            version: VERSION,
            build_number: BUILD_NUMBER,
            build_timestamp: BUILD_TIMESTAMP,
            description: DESCRIPTION,
        }
    }

    /// Lines of the startup banner, without the surrounding rules
    pub fn banner_lines(&self) -> Vec<String> {
        vec![
            "  Recipe Portion Calculator".to_string(),
            format!("  Version: {} | Build: {}", self.version, self.build_number),
            format!("  Compiled: {}", self.build_timestamp),
        ]
    }
}

impl Default for BuildInfo {
    fn default() -> Self {
        Self::current()
    }
}

/// Print the startup banner to stderr
pub fn print_startup_banner() {
    let rule = "===============================================";
    eprintln!("{}", rule);
    for line in BuildInfo::current().banner_lines() {
        eprintln!("{}", line);
    }
    eprintln!("{}", rule);
}
