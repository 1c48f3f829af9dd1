use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Stand-ins for `dpkg-query`, `fakeroot` and `sudo` placed first on `PATH`.
///
/// Every invocation is appended to a shared log as `<tool> <args>`.
pub struct FakeTools {
    pub root: TempDir,
    pub bin_dir: PathBuf,
    pub log_file: PathBuf,
}

impl FakeTools {
    /// Tools for a host where debhelper is already installed.
    pub fn new() -> Self {
        Self::with_debhelper(true)
    }

    pub fn with_debhelper(installed: bool) -> Self {
        let root = TempDir::new().expect("Failed to create temp dir for fake tools");
        let bin_dir = root.path().join("bin");
        fs::create_dir_all(&bin_dir).expect("Failed to create bin dir");
        let log_file = root.path().join("tools.log");
        let log = log_file.to_string_lossy().into_owned();

        let query_status = if installed { 0 } else { 1 };
        write_script(
            &bin_dir.join("dpkg-query"),
            &format!("#!/bin/sh\necho \"dpkg-query $*\" >> \"{log}\"\nexit {query_status}\n"),
        );

        write_script(
            &bin_dir.join("sudo"),
            &format!("#!/bin/sh\necho \"sudo $*\" >> \"{log}\"\nexit 0\n"),
        );

        // Emulates dpkg-buildpackage by dropping the package next to the source tree.
        write_script(
            &bin_dir.join("fakeroot"),
            &format!(
                r#"#!/bin/sh
echo "fakeroot $*" >> "{log}"
VERSION=$(sed -n '1s/^[^ ]* (\([^)]*\)).*/\1/p' debian/changelog)
NAME=$(basename "$PWD")
echo "package" > "../${{NAME}}_${{VERSION}}_all.deb"
exit 0
"#
            ),
        );

        Self { root, bin_dir, log_file }
    }

    /// Replace a tool with one that fails with `status`.
    pub fn failing(self, tool: &str, status: i32) -> Self {
        let log = self.log_file.to_string_lossy().into_owned();
        write_script(
            &self.bin_dir.join(tool),
            &format!("#!/bin/sh\necho \"{tool} $*\" >> \"{log}\"\necho \"{tool} broke\" >&2\nexit {status}\n"),
        );
        self
    }

    /// `PATH` value with the fake tools first.
    pub fn path_env(&self) -> String {
        let system = std::env::var("PATH").unwrap_or_default();
        format!("{}:{}", self.bin_dir.display(), system)
    }

    pub fn get_log(&self) -> String {
        fs::read_to_string(&self.log_file).unwrap_or_default()
    }
}

fn write_script(path: &Path, content: &str) {
    fs::write(path, content).expect("Failed to write fake tool script");
    let mut perms = fs::metadata(path).expect("Failed to get metadata").permissions();
    perms.set_mode(0o755);
    fs::set_permissions(path, perms).expect("Failed to set permissions");
}
