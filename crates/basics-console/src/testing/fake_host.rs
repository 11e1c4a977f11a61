//! FakeHost for environment report tests

use crate::error::{BasicsError, BasicsResult};
use crate::host::HostEnvironment;

/// A [`HostEnvironment`] answering from fixed values.
#[derive(Debug, Clone)]
pub struct FakeHost {
    drives: Vec<String>,
    os: String,
    processors: usize,
    runtime: String,
    fail_drives: bool,
    fail_processors: bool,
}

impl FakeHost {
    /// Host with the given facts.
    #[must_use]
    pub fn new(drives: &[&str], os: &str, processors: usize, runtime: &str) -> Self {
        Self {
            drives: drives.iter().map(|d| (*d).to_string()).collect(),
            os: os.to_string(),
            processors,
            runtime: runtime.to_string(),
            fail_drives: false,
            fail_processors: false,
        }
    }

    /// Make the drive query fail.
    #[must_use]
    pub fn failing_drives(mut self) -> Self {
        self.fail_drives = true;
        self
    }

    /// Make the processor count query fail.
    #[must_use]
    pub fn failing_processor_count(mut self) -> Self {
        self.fail_processors = true;
        self
    }
}

impl HostEnvironment for FakeHost {
    fn logical_drives(&self) -> BasicsResult<Vec<String>> {
        if self.fail_drives {
            return Err(BasicsError::host("logical drives", "simulated failure"));
        }
        Ok(self.drives.clone())
    }

    fn os_description(&self) -> BasicsResult<String> {
        Ok(self.os.clone())
    }

    fn processor_count(&self) -> BasicsResult<usize> {
        if self.fail_processors {
            return Err(BasicsError::host("processor count", "simulated failure"));
        }
        Ok(self.processors)
    }

    fn runtime_version(&self) -> String {
        self.runtime.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fake_host_answers() {
        let host = FakeHost::new(&["/"], "Linux 6.1", 2, "rustc 1.85.0");
        assert_eq!(host.logical_drives().unwrap(), vec!["/"]);
        assert_eq!(host.os_description().unwrap(), "Linux 6.1");
        assert_eq!(host.processor_count().unwrap(), 2);
        assert_eq!(host.runtime_version(), "rustc 1.85.0");
    }

    #[test]
    fn test_fake_host_failures() {
        let host = FakeHost::new(&["/"], "Linux", 1, "rustc")
            .failing_drives()
            .failing_processor_count();
        assert!(host.logical_drives().is_err());
        assert!(host.processor_count().is_err());
        assert!(host.os_description().is_ok());
    }
}
