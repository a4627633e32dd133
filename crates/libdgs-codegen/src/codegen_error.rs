use crate::ast;
use crate::config::ConfigurationError;
use crate::file_reader::ReadContentError;
use crate::file_writer::FileWriteError;
use crate::loc;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum CodegenError {
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    #[error("Encountered an error while scanning the schema directory: {0}")]
    DirectoryWalk(#[from] walkdir::Error),

    #[error(
        "Multiple fields named `{field_name}` were defined on the \
        `{type_name}` type (at {location1} and {location2})"
    )]
    DuplicateFieldName {
        type_name: String,
        field_name: String,
        location1: loc::FilePosition,
        location2: loc::FilePosition,
    },

    #[error(
        "Multiple GraphQL types named `{type_name}` were defined (at \
        {location1} and {location2})"
    )]
    DuplicateTypeDefinition {
        type_name: String,
        location1: loc::FilePosition,
        location2: loc::FilePosition,
    },

    #[error("Failed to write a generated source file: {0}")]
    FileWrite(#[from] FileWriteError),

    #[error("`{identifier}` cannot be used as a Java {usage} name")]
    InvalidJavaIdentifier {
        identifier: String,
        usage: &'static str,
    },

    #[error("Error parsing schema file {}: {err}", display_file(file))]
    ParseError {
        file: Option<PathBuf>,
        err: ast::schema::ParseError,
    },

    #[error("Failure while trying to read a schema file from disk: {0}")]
    SchemaFileRead(#[from] ReadContentError),

    #[error("Could not unwrap the type reference `{type_ref}` to a named type")]
    UnknownTypeShape {
        type_ref: String,
    },
}

fn display_file(file: &Option<PathBuf>) -> String {
    match file {
        Some(path) => format!("{path:?}"),
        None => "<str>".to_string(),
    }
}
