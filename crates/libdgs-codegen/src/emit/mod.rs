mod fetcher_emitter;
mod operation_kind;
mod type_emitter;

pub use fetcher_emitter::FetcherEmitter;
pub use operation_kind::OperationKind;
pub use type_emitter::TypeEmitter;

use crate::java;
use crate::java::JavaFile;
use crate::CodegenError;
use std::path::PathBuf;

type Result<T> = std::result::Result<T, CodegenError>;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ArtifactKind {
    /// A plain data class for an object or input object type.
    Type,

    /// The `{Name}Fetcher` interface of a schema file.
    Fetcher,
}

/// One generated Java source file. Built once by an emitter and never
/// modified afterwards.
#[derive(Clone, Debug, PartialEq)]
pub struct GeneratedArtifact {
    file: JavaFile,
    kind: ArtifactKind,
}
impl GeneratedArtifact {
    pub(crate) fn new(kind: ArtifactKind, file: JavaFile) -> Self {
        Self { file, kind }
    }

    pub fn java_file(&self) -> &JavaFile {
        &self.file
    }

    pub fn kind(&self) -> ArtifactKind {
        self.kind
    }

    pub fn name(&self) -> &str {
        self.file.type_spec().name()
    }

    pub fn relative_path(&self) -> PathBuf {
        self.file.relative_path()
    }

    pub fn render(&self) -> String {
        self.file.render()
    }
}

/// Upper-case the first character of `name`, leaving the rest alone.
pub fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn check_identifier(identifier: &str, usage: &'static str) -> Result<()> {
    if java::is_valid_identifier(identifier) {
        Ok(())
    } else {
        Err(CodegenError::InvalidJavaIdentifier {
            identifier: identifier.to_string(),
            usage,
        })
    }
}
