//! protoseries-core - Java type definitions to proto2 time-series schemas
//!
//! This crate provides the pieces of the schema translation pipeline:
//! - [`DefinitionExtractor`] trait with the [`PatternExtractor`] and
//!   [`DeclarationExtractor`] implementations
//! - [`SchemaDocument`] for rendering `<Type>Series.proto` files
//! - [`SchemaCompiler`] trait for invoking `protoc`
//! - [`Translator`] driving the whole pass over an input directory
//! - [`GeneratorConfig`] and [`GeneratorError`]
//!
//! # Pipeline
//!
//! ```text
//! *.java
//!    ↓
//!  [DefinitionExtractor]
//!    ↓
//!  TypeDefinition
//!    ↓
//!  SchemaDocument → <Type>Series.proto
//!    ↓
//!  [SchemaCompiler] → Java bindings
//! ```

mod compiler;
mod config;
mod declaration;
mod definition;
mod error;
mod extract;
mod schema;
mod translator;

pub use compiler::{CompilerFailurePolicy, CompilerStatus, ProtocCompiler, SchemaCompiler};
pub use config::{CompilerSection, DEFAULT_CONFIG_FILE, ExtractorKind, GeneratorConfig};
pub use declaration::DeclarationExtractor;
pub use definition::TypeDefinition;
pub use error::{GeneratorError, GeneratorResult};
pub use extract::{DefinitionExtractor, PatternExtractor, extract_definition};
pub use schema::{ScalarType, SchemaDocument, SchemaField};
pub use translator::{CompileOutcome, GeneratedSchema, Translator};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        DefinitionExtractor, GeneratorConfig, GeneratorError, GeneratorResult, SchemaCompiler,
        SchemaDocument, Translator, TypeDefinition,
    };
}
