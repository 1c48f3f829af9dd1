//! Build a Debian binary package with `dpkg-buildpackage` and collect the result.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::domain::changelog::require_package_version;
use crate::domain::package::changelog_path;
use crate::domain::{AppError, PackageArtifact};
use crate::ports::ToolRunnerPort;

/// Options for building a package.
#[derive(Debug, Clone)]
pub struct BuildOptions {
    /// Package source tree containing `debian/`.
    pub source_dir: PathBuf,
    /// Directory receiving the built `.deb`.
    pub output_dir: PathBuf,
    /// Package name; defaults to the source directory name.
    pub package_name: Option<String>,
    /// Architecture suffix of the built file.
    pub architecture: String,
    /// Install debhelper when it is missing.
    pub install_missing: bool,
}

/// Result of a successful build.
#[derive(Debug, Clone)]
pub struct BuildOutcome {
    pub artifact: PackageArtifact,
    /// Final location of the package file.
    pub path: PathBuf,
    /// Whether debhelper had to be installed first.
    pub installed_debhelper: bool,
}

/// Build the package and move it into the output directory.
pub fn execute<R: ToolRunnerPort + ?Sized>(
    runner: &R,
    options: &BuildOptions,
) -> Result<BuildOutcome, AppError> {
    let installed_debhelper = ensure_debhelper(runner, options.install_missing)?;

    let source_dir = fs::canonicalize(&options.source_dir).map_err(|err| match err.kind() {
        io::ErrorKind::NotFound => AppError::missing_file("Source directory", &options.source_dir),
        _ => AppError::Io(err),
    })?;

    let version = require_package_version(&changelog_path(&source_dir))?;
    let package = match &options.package_name {
        Some(name) => name.clone(),
        None => source_dir
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .ok_or_else(|| {
                AppError::config_error(format!(
                    "Cannot derive a package name from {}",
                    source_dir.display()
                ))
            })?,
    };
    let artifact = PackageArtifact::new(package, version, &options.architecture);

    fs::create_dir_all(&options.output_dir)?;
    let output_dir = fs::canonicalize(&options.output_dir)?;

    log::info!("Building {} from {}", artifact.file_name(), source_dir.display());
    runner.execute("fakeroot", &["dpkg-buildpackage", "-b", "-uc", "-us"], Some(&source_dir))?;

    let built = artifact.built_path(&source_dir);
    if !built.exists() {
        return Err(AppError::ArtifactNotFound(built));
    }

    let destination = artifact.output_path(&output_dir);
    move_file(&built, &destination)?;
    log::info!("Moved {} to {}", built.display(), destination.display());

    Ok(BuildOutcome { artifact, path: destination, installed_debhelper })
}

/// Check for debhelper and install it when allowed. Returns `true` if installed now.
fn ensure_debhelper<R: ToolRunnerPort + ?Sized>(
    runner: &R,
    install_missing: bool,
) -> Result<bool, AppError> {
    if runner.probe("dpkg-query", &["-L", "debhelper"])? {
        log::info!("debhelper is already installed");
        return Ok(false);
    }

    if !install_missing {
        return Err(AppError::tool_failure(
            "debhelper",
            "not installed and automatic installation is disabled",
        ));
    }

    log::warn!("debhelper is not installed; installing with apt-get");
    runner.execute("sudo", &["apt-get", "install", "-y", "debhelper"], None)?;
    Ok(true)
}

/// Rename, falling back to copy and remove when crossing filesystems.
fn move_file(from: &Path, to: &Path) -> Result<(), AppError> {
    if let Err(err) = fs::rename(from, to) {
        log::debug!("rename {} failed ({}); copying instead", from.display(), err);
        fs::copy(from, to)?;
        fs::remove_file(from)?;
    }
    Ok(())
}
