//! Debian binary package naming and source-tree paths.

use std::path::{Path, PathBuf};

/// Architecture suffix used when none is configured.
pub const DEFAULT_ARCHITECTURE: &str = "all";

/// `<source>/debian/changelog`
pub fn changelog_path(source_dir: &Path) -> PathBuf {
    source_dir.join("debian").join("changelog")
}

/// A `.deb` produced by the external build tool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageArtifact {
    pub package: String,
    pub version: String,
    pub architecture: String,
}

impl PackageArtifact {
    pub fn new(
        package: impl Into<String>,
        version: impl Into<String>,
        architecture: impl Into<String>,
    ) -> Self {
        Self { package: package.into(), version: version.into(), architecture: architecture.into() }
    }

    /// `{package}_{version}_{architecture}.deb`
    pub fn file_name(&self) -> String {
        format!("{}_{}_{}.deb", self.package, self.version, self.architecture)
    }

    /// Where `dpkg-buildpackage` leaves the artifact: next to the source directory.
    pub fn built_path(&self, source_dir: &Path) -> PathBuf {
        let parent = source_dir.parent().unwrap_or(source_dir);
        parent.join(self.file_name())
    }

    pub fn output_path(&self, output_dir: &Path) -> PathBuf {
        output_dir.join(self.file_name())
    }
}
