//! Generates [Netflix DGS](https://netflix.github.io/dgs/) Java sources from
//! GraphQL SDL (`*.graphqls`) files.
//!
//! For every schema file the [`Generator`] emits:
//!
//! * one plain data class per non-root object type and per input object type
//!   (package `{base}.types`), and
//! * one `{FileName}Fetcher` interface with a method per `Query` / `Mutation`
//!   field (package `{base}.fetchers`).

pub mod ast;
mod codegen_error;
pub mod config;
pub mod directives;
pub mod emit;
pub mod file_reader;
pub mod file_writer;
pub mod generator;
pub mod java;
pub mod loc;
pub mod scaffold;
mod schema_document;
pub mod types;

pub use codegen_error::CodegenError;
pub use config::ConfigurationError;
pub use config::GeneratorConfig;
pub use config::GeneratorConfigBuilder;
pub use generator::GenerationReport;
pub use generator::Generator;
pub use schema_document::InputObjectTypeDef;
pub use schema_document::ObjectTypeDef;
pub use schema_document::RootFieldBlock;
pub use schema_document::SchemaDocument;
