//! Type definitions extracted from source files

/// A type name and its field names, as read from one definition file.
///
/// Field order is declaration order. Duplicates and case are kept exactly as
/// the extractor produced them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeDefinition {
    /// The declared type name.
    pub name: String,

    /// Field names in declaration order.
    pub fields: Vec<String>,
}

impl TypeDefinition {
    /// Create a definition from a type name and field names.
    pub fn new(name: impl Into<String>, fields: Vec<String>) -> Self {
        Self {
            name: name.into(),
            fields,
        }
    }

    /// Name of the generated container message (`<Type>Series`).
    pub fn series_name(&self) -> String {
        format!("{}Series", self.name)
    }
}

#[cfg(test)]
#[path = "definition/definition_tests.rs"]
mod definition_tests;
