//! Environment report.

use crate::console::ConsoleIo;
use crate::error::BasicsResult;
use crate::host::HostEnvironment;
use crate::logging::targets;
use crate::template::Value;

/// Print each logical drive, then the OS, processor count and runtime version.
///
/// Any failing host query aborts the report with its error.
pub fn show_environment_details<C, H>(console: &mut C, host: &H) -> BasicsResult<()>
where
    C: ConsoleIo + ?Sized,
    H: HostEnvironment + ?Sized,
{
    for drive in host.logical_drives()? {
        console.write_line("Drive: {0}", &[Value::from(&drive)])?;
    }

    let os = host.os_description()?;
    console.write_line("OS: {0}", &[Value::from(&os)])?;

    let processors = host.processor_count()?;
    console.write_line("Number of processors: {0}", &[Value::from(processors)])?;

    let runtime = host.runtime_version();
    console.write_line("Rust version: {0}", &[Value::from(&runtime)])?;

    log::debug!(target: targets::REPORT, "Environment report complete");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BasicsError;
    use crate::host::SystemHost;
    use crate::testing::{FakeHost, TestConsole};

    #[test]
    fn test_single_volume_host_prints_four_lines_in_order() {
        let mut tc = TestConsole::new();
        let host = FakeHost::new(&["/"], "Linux 6.1.0", 4, "rustc 1.85.0");
        show_environment_details(&mut tc, &host).unwrap();
        assert_eq!(
            tc.output(),
            vec![
                "Drive: /",
                "OS: Linux 6.1.0",
                "Number of processors: 4",
                "Rust version: rustc 1.85.0",
            ]
        );
    }

    #[test]
    fn test_one_line_per_drive() {
        let mut tc = TestConsole::new();
        let host = FakeHost::new(&["C:\\", "D:\\"], "Windows_NT 10.0", 8, "rustc 1.85.0");
        show_environment_details(&mut tc, &host).unwrap();
        tc.assert_line_count(5);
        assert_eq!(tc.output()[0], "Drive: C:\\");
        assert_eq!(tc.output()[1], "Drive: D:\\");
    }

    #[test]
    fn test_host_failure_propagates() {
        let mut tc = TestConsole::new();
        let host = FakeHost::new(&["/"], "Linux", 4, "rustc").failing_processor_count();
        let err = show_environment_details(&mut tc, &host).unwrap_err();
        assert!(matches!(err, BasicsError::HostQuery { .. }));
        tc.assert_not_contains("Number of processors");
    }

    #[test]
    fn test_system_host_report_is_repeatable() {
        let host = SystemHost::new();
        let mut first = TestConsole::new();
        let mut second = TestConsole::new();
        show_environment_details(&mut first, &host).unwrap();
        show_environment_details(&mut second, &host).unwrap();

        let facts = |tc: &TestConsole| -> Vec<String> {
            tc.output()
                .into_iter()
                .filter(|l| l.starts_with("OS:") || l.starts_with("Number of processors:"))
                .collect()
        };
        assert_eq!(facts(&first), facts(&second));
        assert_eq!(facts(&first).len(), 2);
    }
}
