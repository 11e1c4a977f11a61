//! Host environment facts
//!
//! [`HostEnvironment`] is the capability the environment report queries;
//! [`SystemHost`] answers from the running machine. Nothing is cached and
//! nothing is retried: a failing query is returned to the caller as-is.

use std::collections::HashSet;
use std::thread;

use platform_info::{PlatformInfo, PlatformInfoAPI, UNameAPI};

use crate::error::{BasicsError, BasicsResult};
use crate::logging::targets;

/// Compiler version captured by the build script.
pub const RUSTC_VERSION: &str = env!("BASICS_RUSTC_VERSION");

/// Facts about the machine and runtime hosting the process.
pub trait HostEnvironment {
    /// Identifiers of every logical storage volume visible to the process.
    fn logical_drives(&self) -> BasicsResult<Vec<String>>;

    /// Human-readable OS name and version.
    fn os_description(&self) -> BasicsResult<String>;

    /// Logical processors available to the process.
    fn processor_count(&self) -> BasicsResult<usize>;

    /// Version of the language runtime/compiler the program was built with.
    fn runtime_version(&self) -> String;
}

/// Host facts from the operating system.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemHost;

impl SystemHost {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl HostEnvironment for SystemHost {
    fn logical_drives(&self) -> BasicsResult<Vec<String>> {
        let drives = platform_drives()?;
        log::debug!(target: targets::HOST, "Found {} logical drives", drives.len());
        Ok(drives)
    }

    fn os_description(&self) -> BasicsResult<String> {
        let info = PlatformInfo::new().map_err(|e| BasicsError::host("OS version", e))?;
        let description = format!(
            "{} {}",
            info.sysname().to_string_lossy(),
            info.release().to_string_lossy()
        );
        log::debug!(target: targets::HOST, "OS description: {description}");
        Ok(description)
    }

    fn processor_count(&self) -> BasicsResult<usize> {
        thread::available_parallelism()
            .map(std::num::NonZeroUsize::get)
            .map_err(|e| BasicsError::host("processor count", e))
    }

    fn runtime_version(&self) -> String {
        RUSTC_VERSION.to_string()
    }
}

#[cfg(target_os = "linux")]
fn platform_drives() -> BasicsResult<Vec<String>> {
    let mounts = std::fs::read_to_string("/proc/self/mounts")
        .map_err(|e| BasicsError::host("logical drives", e))?;
    Ok(parse_mount_points(&mounts))
}

#[cfg(windows)]
fn platform_drives() -> BasicsResult<Vec<String>> {
    Ok((b'A'..=b'Z')
        .map(|letter| format!("{}:\\", char::from(letter)))
        .filter(|root| std::path::Path::new(root).exists())
        .collect())
}

#[cfg(not(any(target_os = "linux", windows)))]
fn platform_drives() -> BasicsResult<Vec<String>> {
    Ok(vec!["/".to_string()])
}

/// Mount points from `/proc/mounts` text, in order, without duplicates.
#[cfg_attr(not(target_os = "linux"), allow(dead_code))]
fn parse_mount_points(mounts: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    mounts
        .lines()
        .filter_map(|line| line.split_whitespace().nth(1))
        .map(unescape_mount_field)
        .filter(|point| seen.insert(point.clone()))
        .collect()
}

/// Decode the `\ooo` octal escapes the kernel uses for space, tab, newline
/// and backslash.
#[cfg_attr(not(target_os = "linux"), allow(dead_code))]
fn unescape_mount_field(field: &str) -> String {
    let bytes = field.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'\\' && i + 4 <= bytes.len() {
            let digits = &bytes[i + 1..i + 4];
            if digits.iter().all(|d| (b'0'..=b'7').contains(d)) {
                let value = digits
                    .iter()
                    .fold(0u32, |acc, d| acc * 8 + u32::from(d - b'0'));
                if let Ok(b) = u8::try_from(value) {
                    out.push(b);
                    i += 4;
                    continue;
                }
            }
        }
        out.push(bytes[i]);
        i += 1;
    }
    String::from_utf8_lossy(&out).into_owned()
}
