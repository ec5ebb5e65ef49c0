//! Operating system entropy.

use super::EntropySource;
use crate::error::Result;

/// The platform CSPRNG, reached through `getrandom`.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsEntropy;

impl EntropySource for OsEntropy {
    #[inline]
    fn fill(&mut self, dest: &mut [u8]) -> Result<()> {
        getrandom::fill(dest)?;
        Ok(())
    }
}

#[cfg(any(target_os = "linux", target_os = "android"))]
pub fn source_name() -> &'static str {
    "getrandom(2)"
}

#[cfg(any(target_os = "macos", target_os = "ios"))]
pub fn source_name() -> &'static str {
    "getentropy(2)"
}

#[cfg(windows)]
pub fn source_name() -> &'static str {
    "ProcessPrng"
}

#[cfg(not(any(
    target_os = "linux",
    target_os = "android",
    target_os = "macos",
    target_os = "ios",
    windows
)))]
pub fn source_name() -> &'static str {
    "OS random source"
}
