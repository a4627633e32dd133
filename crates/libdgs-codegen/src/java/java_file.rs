use crate::java::ClassName;
use crate::java::ImportResolver;
use crate::java::TypeSpec;
use std::path::PathBuf;

/// A complete `.java` compilation unit holding exactly one top-level type.
#[derive(Clone, Debug, PartialEq)]
pub struct JavaFile {
    package: String,
    type_spec: TypeSpec,
}
impl JavaFile {
    pub fn new(package: impl Into<String>, type_spec: TypeSpec) -> Self {
        Self {
            package: package.into(),
            type_spec,
        }
    }

    pub fn class_name(&self) -> ClassName {
        ClassName::new(self.package.as_str(), self.type_spec.name())
    }

    pub fn package(&self) -> &str {
        self.package.as_str()
    }

    /// Path of this file relative to a source root, following the usual
    /// `com/example/Name.java` layout.
    pub fn relative_path(&self) -> PathBuf {
        let mut path: PathBuf =
            self.package.split('.')
                .filter(|segment| !segment.is_empty())
                .collect();
        path.push(format!("{}.java", self.type_spec.name()));
        path
    }

    pub fn render(&self) -> String {
        self.to_string()
    }

    pub fn type_spec(&self) -> &TypeSpec {
        &self.type_spec
    }
}
impl std::fmt::Display for JavaFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let names = ImportResolver::new(
            &self.class_name(),
            self.type_spec.referenced_classes(),
        );

        if !self.package.is_empty() {
            writeln!(f, "package {};", self.package)?;
            writeln!(f)?;
        }

        if !names.imports().is_empty() {
            for import in names.imports() {
                writeln!(f, "import {};", import.canonical_name())?;
            }
            writeln!(f)?;
        }

        self.type_spec.emit(f, &names)
    }
}
