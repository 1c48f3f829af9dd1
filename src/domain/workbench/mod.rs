//! Workbench UI scaffolding for OpenMediaVault plugins.

pub mod documents;
pub mod paths;
pub mod schema;
pub mod widget;

pub use documents::{FormField, WorkbenchDocuments, title_case};
pub use schema::parse_properties;
pub use widget::WidgetKind;
