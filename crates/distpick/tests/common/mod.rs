#![allow(dead_code, unreachable_pub)]

use std::borrow::BorrowMut;
use std::process::{Command, Output};

use assert_fs::fixture::ChildPath;
use assert_fs::prelude::*;
use serde_json::json;

/// Filters that normalize output that varies between runs.
pub static INSTA_FILTERS: &[(&str, &str)] = &[
    // Rewrite elapsed time, e.g. `in 12ms` or `in 1.50s`
    (r"in \d+(\.\d+)?(ms|s)\b", "in [TIME]"),
    (r"in \d+m \d+s\b", "in [TIME]"),
];

pub struct TestContext {
    pub temp_dir: assert_fs::TempDir,
}

impl TestContext {
    pub fn new() -> Self {
        let temp_dir = assert_fs::TempDir::new().expect("Failed to create temp dir");
        Self { temp_dir }
    }

    /// Filters for the temporary directory and run-specific output.
    pub fn filters(&self) -> Vec<(String, String)> {
        let mut filters = vec![(
            escape(&self.temp_dir.path().display().to_string()),
            "[TEMP_DIR]".to_string(),
        )];
        filters.extend(
            INSTA_FILTERS
                .iter()
                .map(|(pattern, replacement)| ((*pattern).to_string(), (*replacement).to_string())),
        );
        filters
    }

    /// Create a `distpick` command running in the temporary directory, isolated from the
    /// environment of the test process.
    pub fn command(&self) -> Command {
        let mut command = Command::new(get_bin());
        command
            .current_dir(self.temp_dir.path())
            .env_remove("RUST_LOG")
            .env_remove("DISTPICK_CONFIG_FILE")
            .env_remove("DISTPICK_CONCURRENCY");
        command
    }

    /// Create a `distpick select` command.
    pub fn select(&self) -> Command {
        let mut command = self.command();
        command.arg("select");
        command
    }

    /// Create a `distpick rank` command.
    pub fn rank(&self) -> Command {
        let mut command = self.command();
        command.arg("rank");
        command
    }

    /// Create a `distpick batch` command.
    pub fn batch(&self) -> Command {
        let mut command = self.command();
        command.arg("batch");
        command
    }

    /// Write a project detail document at `path` whose files are hosted at `https://files.example/`.
    pub fn write_project(&self, path: &str, name: &str, versions: &[&str], files: &[&str]) -> ChildPath {
        let child = self.temp_dir.child(path);
        child
            .write_str(&project_json(name, versions, files).to_string())
            .expect("Failed to write project metadata");
        child
    }
}

/// A PEP 691 project detail document.
pub fn project_json(name: &str, versions: &[&str], files: &[&str]) -> serde_json::Value {
    json!({
        "meta": {"api-version": "1.1"},
        "name": name,
        "files": files
            .iter()
            .map(|filename| json!({
                "filename": filename,
                "url": format!("https://files.example/{filename}"),
                "hashes": {},
            }))
            .collect::<Vec<_>>(),
        "versions": versions,
    })
}

/// Parse every line of the standard output as JSON.
pub fn json_lines(output: &Output) -> Vec<serde_json::Value> {
    String::from_utf8_lossy(&output.stdout)
        .lines()
        .map(|line| serde_json::from_str(line).expect("Output is valid JSON"))
        .collect()
}

pub fn get_bin() -> &'static str {
    env!("CARGO_BIN_EXE_distpick")
}

fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for char in text.chars() {
        if "\\.+*?()|[]{}^$".contains(char) {
            escaped.push('\\');
        }
        escaped.push(char);
    }
    escaped
}

/// Execute the command and format its output status, stdout and stderr into a snapshot string.
pub fn run_and_format(mut command: impl BorrowMut<Command>) -> (String, Output) {
    let program = command
        .borrow_mut()
        .get_program()
        .to_string_lossy()
        .to_string();
    let output = command
        .borrow_mut()
        .output()
        .unwrap_or_else(|err| panic!("Failed to spawn {program}: {err}"));

    let snapshot = format!(
        "success: {:?}\nexit_code: {}\n----- stdout -----\n{}\n----- stderr -----\n{}",
        output.status.success(),
        output.status.code().unwrap_or(!0),
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    );
    (snapshot, output)
}

/// Run a command and snapshot its status and output, with default or custom filters.
#[allow(unused_macros)]
macro_rules! distpick_snapshot {
    ($spawnable:expr, @$snapshot:literal) => {{
        distpick_snapshot!($crate::common::INSTA_FILTERS
            .iter()
            .map(|(pattern, replacement)| ((*pattern).to_string(), (*replacement).to_string()))
            .collect::<Vec<_>>(), $spawnable, @$snapshot)
    }};
    ($filters:expr, $spawnable:expr, @$snapshot:literal) => {{
        let (snapshot, output) = $crate::common::run_and_format($spawnable);
        let mut settings = ::insta::Settings::clone_current();
        for (pattern, replacement) in $filters {
            settings.add_filter(&pattern, replacement);
        }
        settings.bind(|| {
            ::insta::assert_snapshot!(snapshot, @$snapshot);
        });
        output
    }};
}

/// <https://stackoverflow.com/a/31749071/3549270>
#[allow(unused_imports)]
pub(crate) use distpick_snapshot;
