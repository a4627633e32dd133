use crate::java::AnnotationSpec;
use crate::java::ClassName;
use crate::java::ImportResolver;
use crate::java::INDENT;
use crate::java::JavaType;
use std::fmt::Write;

/// A `private` instance field of a generated data class.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldSpec {
    annotations: Vec<AnnotationSpec>,
    java_type: JavaType,
    name: String,
}
impl FieldSpec {
    pub fn new(java_type: JavaType, name: impl Into<String>) -> Self {
        Self {
            annotations: vec![],
            java_type,
            name: name.into(),
        }
    }

    pub fn add_annotation(&mut self, annotation: AnnotationSpec) -> &mut Self {
        self.annotations.push(annotation);
        self
    }

    pub fn annotations(&self) -> &[AnnotationSpec] {
        self.annotations.as_slice()
    }

    pub fn java_type(&self) -> &JavaType {
        &self.java_type
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub(crate) fn referenced_classes(&self) -> impl Iterator<Item = &ClassName> {
        self.annotations.iter()
            .map(AnnotationSpec::class)
            .chain(self.java_type.as_class())
    }

    pub(crate) fn emit(
        &self,
        out: &mut impl Write,
        names: &ImportResolver,
    ) -> std::fmt::Result {
        for annotation in &self.annotations {
            writeln!(out, "{INDENT}{}", annotation.to_java_source(names))?;
        }
        writeln!(
            out,
            "{INDENT}private {} {};",
            names.type_name(&self.java_type),
            self.name,
        )
    }
}
