use serde::{Serialize, Serializer};

/// Form widget kinds understood by the workbench UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidgetKind {
    TextInput,
    Checkbox,
    NumberInput,
}

impl WidgetKind {
    /// Map a JSON-schema scalar type name to a widget; unknown types get a text input.
    pub fn from_schema_type(schema_type: &str) -> Self {
        match schema_type {
            "boolean" => WidgetKind::Checkbox,
            "integer" | "number" => WidgetKind::NumberInput,
            _ => WidgetKind::TextInput,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            WidgetKind::TextInput => "textInput",
            WidgetKind::Checkbox => "checkbox",
            WidgetKind::NumberInput => "numberInput",
        }
    }
}

impl Serialize for WidgetKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}
