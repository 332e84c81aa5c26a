//! Test utilities and shared helpers for the humanize locale workspace.
//!
//! Enabled for this crate's own tests and, through the `testing` feature,
//! for the integration tests of the other workspace crates.

use std::sync::Once;
use tracing_subscriber::{fmt, EnvFilter};

/// Initialize test logging once per test run.
static INIT: Once = Once::new();

/// Initialize logging for tests with a sensible default configuration.
/// This function is safe to call multiple times and will only initialize once.
pub fn init_test_logging() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

        // Another test in the same binary may already own the global subscriber.
        let _ = fmt().with_test_writer().with_env_filter(filter).try_init();
    });
}

/// Create a temporary directory for tests that automatically cleans up.
#[cfg(any(test, feature = "tempfile"))]
pub fn create_temp_dir() -> tempfile::TempDir {
    tempfile::tempdir().expect("Failed to create temporary directory")
}

/// Write `contents` to `name` inside `dir` and return the full path.
#[cfg(any(test, feature = "tempfile"))]
pub fn write_fixture(dir: &tempfile::TempDir, name: &str, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, contents).expect("Failed to write fixture file");
    path
}

/// Catalog fixtures in the `.po` layout used by locale directories.
pub mod catalog_fixtures {
    /// A minimal catalog with a header and one plural entry.
    pub fn sample_po() -> &'static str {
        concat!(
            "msgid \"\"\n",
            "msgstr \"\"\n",
            "\"Content-Type: text/plain; charset=UTF-8\\n\"\n",
            "\"Plural-Forms: nplurals=2; plural=(n != 1);\\n\"\n",
            "\n",
            "msgid \"%d day\"\n",
            "msgid_plural \"%d days\"\n",
            "msgstr[0] \"\"\n",
            "msgstr[1] \"\"\n",
        )
    }

    /// A catalog consisting of a header only.
    pub fn header_only_po() -> &'static str {
        "msgid \"\"\nmsgstr \"\"\n\"Content-Type: text/plain; charset=UTF-8\\n\"\n"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_logging_multiple_calls() {
        // Should not panic when called multiple times
        init_test_logging();
        init_test_logging();
        init_test_logging();
    }

    #[test]
    fn test_write_fixture_round_trip() {
        let dir = create_temp_dir();
        let path = write_fixture(&dir, "humanize.po", catalog_fixtures::sample_po());

        let read_back = std::fs::read_to_string(path).unwrap();
        assert!(read_back.contains("msgid_plural \"%d days\""));
    }

    #[test]
    fn test_fixtures_start_with_header() {
        assert!(catalog_fixtures::sample_po().starts_with("msgid \"\""));
        assert!(catalog_fixtures::header_only_po().starts_with("msgid \"\""));
    }
}
