pub mod build;
pub mod changelog;
pub mod workbench;
