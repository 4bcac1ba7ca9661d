//! Shared testing harness for `tpgen` integration tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Required flags for the Acme scenario; `--env` and the credential are left out.
pub(crate) const MINIMAL_ARGS: [&str; 12] = [
    "--project",
    "Acme",
    "--type",
    "Web",
    "--features",
    "login,checkout",
    "--tech",
    "React/Node",
    "--team",
    "5",
    "--time",
    "2 weeks",
];

/// Testing harness providing an isolated environment for CLI exercises.
pub(crate) struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
}

impl TestContext {
    /// Create a new isolated environment.
    pub(crate) fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");

        Self { root, work_dir }
    }

    /// Path to the working directory used for CLI invocations.
    pub(crate) fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Build a command for invoking the compiled `tpgen` binary.
    ///
    /// The credential variable is removed so each test opts into a backend explicitly.
    pub(crate) fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("tpgen").expect("Failed to locate tpgen binary");
        cmd.current_dir(&self.work_dir)
            .env("HOME", self.root.path())
            .env_remove("OPENAI_API_KEY")
            .env("RUST_LOG", "warn");
        cmd
    }

    /// Write the default persona fragment.
    pub(crate) fn write_persona(&self, content: &str) {
        self.write_file("system_prompt.md", content);
    }

    /// Write the default guard fragment.
    pub(crate) fn write_guard(&self, content: &str) {
        self.write_file("anti_Hallucination_Guard.md", content);
    }

    /// Write `tpgen.toml` pointing the backend at `api_url`.
    pub(crate) fn write_settings(&self, api_url: &str) {
        self.write_file(
            "tpgen.toml",
            &format!("[backend]\napi_url = \"{}\"\ntimeout_secs = 5\n", api_url),
        );
    }

    pub(crate) fn write_file(&self, relative: &str, content: &str) {
        let path = self.work_dir.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        fs::write(&path, content).expect("Failed to write test file");
    }
}
