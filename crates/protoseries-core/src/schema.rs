//! proto2 schema documents for time series of a definition type.
//!
//! A definition `Trade { price, volume }` renders as a `TradeSeries` message
//! holding a nested `Trade` record (timestamp plus one `double` per field)
//! and a repeated `series` field of that record.

use crate::definition::TypeDefinition;
use std::fmt;

/// Name of the implicit first field of every record.
pub const TIMESTAMP_FIELD: &str = "timestamp";

/// Name of the repeated field in the container message.
pub const SERIES_FIELD: &str = "series";

/// Scalar types used in generated records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScalarType {
    Int32,
    Double,
}

impl fmt::Display for ScalarType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScalarType::Int32 => write!(f, "int32"),
            ScalarType::Double => write!(f, "double"),
        }
    }
}

/// A `required` field of the nested record message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaField {
    pub name: String,
    pub ty: ScalarType,
    pub ordinal: u32,
}

/// A rendered-on-demand `<Type>Series` schema.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaDocument {
    /// Value of the `java_package` option.
    pub java_package: String,

    /// Name of the container message (`<Type>Series`).
    pub container_name: String,

    /// Name of the nested record message (`<Type>`).
    pub record_name: String,

    /// Record fields, `timestamp` first.
    pub fields: Vec<SchemaField>,
}

impl SchemaDocument {
    /// Build the schema for a definition.
    ///
    /// The record starts with `timestamp` at ordinal 1; extracted field `i`
    /// follows at ordinal `i + 2`, lower-cased, in extraction order.
    pub fn from_definition(definition: &TypeDefinition, java_package: &str) -> Self {
        let timestamp = SchemaField {
            name: TIMESTAMP_FIELD.to_string(),
            ty: ScalarType::Int32,
            ordinal: 1,
        };

        let fields = std::iter::once(timestamp)
            .chain(
                definition
                    .fields
                    .iter()
                    .zip(2u32..)
                    .map(|(name, ordinal)| SchemaField {
                        name: name.to_lowercase(),
                        ty: ScalarType::Double,
                        ordinal,
                    }),
            )
            .collect();

        Self {
            java_package: java_package.to_string(),
            container_name: definition.series_name(),
            record_name: definition.name.clone(),
            fields,
        }
    }

    /// Name of the generated outer Java class.
    pub fn outer_classname(&self) -> String {
        format!("{}Schema", self.container_name)
    }

    /// File name of the schema (`<Type>Series.proto`).
    pub fn file_name(&self) -> String {
        format!("{}.proto", self.container_name)
    }

    /// Render the schema text. The output has no trailing newline.
    pub fn render(&self) -> String {
        let mut out = String::new();

        out.push_str("syntax = \"proto2\";\n");
        out.push_str(&format!("option java_package = \"{}\";\n", self.java_package));
        out.push_str(&format!(
            "option java_outer_classname = \"{}\";\n\n",
            self.outer_classname()
        ));

        out.push_str(&format!("message {} {{\n\n", self.container_name));
        out.push_str(&format!("\tmessage {} {{\n\n", self.record_name));

        for field in &self.fields {
            out.push_str(&format!(
                "\t\trequired {} {} = {};\n",
                field.ty, field.name, field.ordinal
            ));
        }

        out.push_str(&format!(
            "\n\t}}\n\n\trepeated {} {} = 1;\n\n}}",
            self.record_name, SERIES_FIELD
        ));

        out
    }
}
