//! Workbench configuration documents generated for a plugin.

use serde::Serialize;
use serde_json::{Map, Value};

use super::paths;
use super::widget::WidgetKind;

const DOCUMENT_VERSION: &str = "1.0";
const NAVIGATION_POSITION: u32 = 15;
const NAVIGATION_ICON: &str = "mdi:lan-connect";

/// Top-level envelope shared by every workbench document.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Document<D> {
    pub version: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub data: D,
}

impl<D> Document<D> {
    fn new(kind: &str, data: D) -> Self {
        Self { version: DOCUMENT_VERSION.to_string(), kind: kind.to_string(), data }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FormPage {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub config: FormPageConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FormPageConfig {
    pub request: RpcRequest,
    pub fields: Vec<FormField>,
    pub buttons: Vec<Button>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RpcRequest {
    pub service: String,
    pub get: RpcMethod,
    pub post: RpcMethod,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RpcMethod {
    pub method: String,
}

/// One input on the settings form.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FormField {
    #[serde(rename = "type")]
    pub kind: WidgetKind,
    pub name: String,
    pub label: String,
    pub value: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tooltip: Option<String>,
}

impl FormField {
    /// Build a field from one entry of a schema's `properties` map.
    ///
    /// A missing or non-string `type` falls back to a text input.
    pub fn from_property(name: &str, property: &Value) -> Self {
        let kind = property
            .get("type")
            .and_then(Value::as_str)
            .map(WidgetKind::from_schema_type)
            .unwrap_or(WidgetKind::TextInput);

        let tooltip = property.get("description").map(|description| match description {
            Value::String(text) => gettext(text),
            other => gettext(&other.to_string()),
        });

        Self {
            kind,
            name: name.to_string(),
            label: gettext(&title_case(&name.replace('_', " "))),
            value: true,
            tooltip,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Button {
    pub template: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub execute: Option<ButtonAction>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ButtonAction {
    #[serde(rename = "type")]
    pub kind: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NavigationPage {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NavigationItem {
    pub path: String,
    pub position: u32,
    pub text: String,
    pub icon: String,
    pub url: String,
}

/// The three documents emitted for one plugin datamodel.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkbenchDocuments {
    pub form_page: Document<FormPage>,
    pub navigation_page: Document<NavigationPage>,
    pub navigation_item: Document<NavigationItem>,
}

impl WorkbenchDocuments {
    /// Build the documents from a schema `properties` map, keeping its order.
    pub fn build(file_type: &str, plugin: &str, properties: &Map<String, Value>) -> Self {
        let fields =
            properties.iter().map(|(name, property)| FormField::from_property(name, property)).collect();

        let form_page = Document::new(
            "component",
            FormPage {
                name: paths::form_page_name(file_type, plugin),
                kind: "formPage".to_string(),
                config: FormPageConfig {
                    request: RpcRequest {
                        service: plugin.to_string(),
                        get: RpcMethod { method: "getSettings".to_string() },
                        post: RpcMethod { method: "setSettings".to_string() },
                    },
                    fields,
                    buttons: vec![
                        Button { template: "submit".to_string(), execute: None },
                        Button {
                            template: "cancel".to_string(),
                            execute: Some(ButtonAction {
                                kind: "url".to_string(),
                                url: format!("/services/{}", plugin),
                            }),
                        },
                    ],
                },
            },
        );

        let navigation_page = Document::new(
            "component",
            NavigationPage {
                name: paths::navigation_page_name(file_type, plugin),
                kind: "navigationPage".to_string(),
            },
        );

        let navigation_item = Document::new(
            "navigation-item",
            NavigationItem {
                path: format!("{}.{}", file_type, plugin),
                position: NAVIGATION_POSITION,
                text: gettext(plugin),
                icon: NAVIGATION_ICON.to_string(),
                url: format!("/{}/{}", file_type, plugin),
            },
        );

        Self { form_page, navigation_page, navigation_item }
    }
}

/// Wrap text in the workbench translation marker `_("...")`.
fn gettext(text: &str) -> String {
    format!("_(\"{}\")", text)
}

/// Capitalise the first letter of every word and lowercase the rest.
///
/// A word starts at any letter not preceded by another letter.
pub fn title_case(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut previous_is_letter = false;
    for ch in text.chars() {
        if ch.is_alphabetic() {
            if previous_is_letter {
                result.extend(ch.to_lowercase());
            } else {
                result.extend(ch.to_uppercase());
            }
            previous_is_letter = true;
        } else {
            result.push(ch);
            previous_is_letter = false;
        }
    }
    result
}
