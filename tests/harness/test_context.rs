//! Shared testing harness for `omvpack` integration tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

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
        let work_dir = fs::canonicalize(&work_dir).expect("Failed to resolve work directory");

        Self { root, work_dir }
    }

    /// Absolute path to the emulated `$HOME` directory.
    pub(crate) fn home(&self) -> &Path {
        self.root.path()
    }

    /// Path to the directory used for CLI invocations.
    pub(crate) fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Build a command for invoking the compiled `omvpack` binary in the work directory.
    pub(crate) fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("omvpack").expect("Failed to locate omvpack binary");
        cmd.current_dir(&self.work_dir)
            .env("HOME", self.home())
            .env_remove("GITHUB_TOKEN")
            .env_remove("RUST_LOG");
        cmd
    }

    /// Write `omvpack.toml` into the work directory.
    pub(crate) fn write_config(&self, content: &str) {
        fs::write(self.work_dir.join("omvpack.toml"), content).expect("Failed to write config");
    }

    /// Create `<work>/<name>/debian/changelog` and return the package source directory.
    pub(crate) fn package_source(&self, name: &str, changelog: &str) -> PathBuf {
        let source = self.work_dir.join(name);
        fs::create_dir_all(source.join("debian")).expect("Failed to create debian/");
        fs::write(source.join("debian").join("changelog"), changelog)
            .expect("Failed to write changelog");
        source
    }

    /// Write a datamodel JSON schema for `plugin` and return its path.
    pub(crate) fn write_datamodel(&self, file_type: &str, plugin: &str, content: &str) -> PathBuf {
        let dir = self
            .work_dir
            .join(format!("openmediavault-{}", plugin))
            .join("usr/share/openmediavault/datamodels");
        fs::create_dir_all(&dir).expect("Failed to create datamodels directory");
        let path = dir.join(format!("conf.system.{}.{}.json", file_type, plugin));
        fs::write(&path, content).expect("Failed to write datamodel");
        path
    }

    /// Path to the plugin's `workbench/` directory.
    pub(crate) fn workbench_dir(&self, plugin: &str) -> PathBuf {
        self.work_dir
            .join(format!("openmediavault-{}", plugin))
            .join("usr/share/openmediavault/workbench")
    }

    /// Read a file relative to the work directory.
    pub(crate) fn read(&self, relative: impl AsRef<Path>) -> String {
        let path = self.work_dir.join(relative);
        fs::read_to_string(&path)
            .unwrap_or_else(|e| panic!("Failed to read {}: {}", path.display(), e))
    }
}
