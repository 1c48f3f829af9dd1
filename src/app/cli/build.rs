//! Build command implementation.

use std::path::PathBuf;

use crate::app::api::BuildOptions;
use crate::domain::{AppError, ToolConfig};

pub fn run_build(
    config: &ToolConfig,
    source_dir: Option<PathBuf>,
    output_dir: Option<PathBuf>,
    package_name: Option<String>,
    no_install: bool,
) -> Result<(), AppError> {
    let source_dir = super::path_or_prompt(source_dir, "Source directory")?;
    let output_dir = super::path_or_prompt(output_dir, "Output directory")?;

    let options = BuildOptions {
        source_dir,
        output_dir,
        package_name,
        architecture: config.build.architecture.clone(),
        install_missing: config.build.install_missing && !no_install,
    };

    let outcome = crate::app::api::build_package(&options)?;
    if outcome.installed_debhelper {
        println!("✅ Installed debhelper");
    }
    println!("✅ Built {}", outcome.path.display());
    Ok(())
}
