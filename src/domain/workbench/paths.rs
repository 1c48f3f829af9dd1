//! Path catalog for an OpenMediaVault plugin source tree.
//!
//! All locations are derived from a root directory, the plugin name, and the
//! datamodel file type (for example `services`).

use std::path::{Path, PathBuf};

/// `<root>/openmediavault-<plugin>/usr/share/openmediavault`
pub fn plugin_share_dir(root: &Path, plugin: &str) -> PathBuf {
    root.join(format!("openmediavault-{}", plugin)).join("usr").join("share").join("openmediavault")
}

/// `datamodels/conf.system.<file_type>.<plugin>.json`
pub fn datamodel(root: &Path, file_type: &str, plugin: &str) -> PathBuf {
    plugin_share_dir(root, plugin)
        .join("datamodels")
        .join(format!("conf.system.{}.{}.json", file_type, plugin))
}

/// `workbench/component.d/`
pub fn component_dir(root: &Path, plugin: &str) -> PathBuf {
    plugin_share_dir(root, plugin).join("workbench").join("component.d")
}

/// `workbench/navigation.d/`
pub fn navigation_dir(root: &Path, plugin: &str) -> PathBuf {
    plugin_share_dir(root, plugin).join("workbench").join("navigation.d")
}

/// Component name of the settings form page.
pub fn form_page_name(file_type: &str, plugin: &str) -> String {
    format!("omv-{}-{}-index-form-page", file_type, plugin)
}

/// Component name of the navigation page.
pub fn navigation_page_name(file_type: &str, plugin: &str) -> String {
    format!("omv-{}-{}-navigation-page", file_type, plugin)
}

/// `component.d/omv-<file_type>-<plugin>-index-form-page.yaml`
pub fn form_page(root: &Path, file_type: &str, plugin: &str) -> PathBuf {
    component_dir(root, plugin).join(format!("{}.yaml", form_page_name(file_type, plugin)))
}

/// `component.d/omv-<file_type>-<plugin>-navigation-page.yaml`
pub fn navigation_page(root: &Path, file_type: &str, plugin: &str) -> PathBuf {
    component_dir(root, plugin).join(format!("{}.yaml", navigation_page_name(file_type, plugin)))
}

/// `navigation.d/<file_type>.<plugin>.yaml`
pub fn navigation_item(root: &Path, file_type: &str, plugin: &str) -> PathBuf {
    navigation_dir(root, plugin).join(format!("{}.{}.yaml", file_type, plugin))
}
