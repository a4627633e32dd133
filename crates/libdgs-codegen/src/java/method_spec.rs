use crate::java::AnnotationSpec;
use crate::java::ClassName;
use crate::java::ImportResolver;
use crate::java::INDENT;
use crate::java::JavaType;
use crate::java::ParameterSpec;
use std::fmt::Write;

/// An abstract interface method. The `public abstract` modifiers are implicit
/// for interface members and are not written out.
#[derive(Clone, Debug, PartialEq)]
pub struct MethodSpec {
    annotations: Vec<AnnotationSpec>,
    name: String,
    parameters: Vec<ParameterSpec>,
    return_type: JavaType,
}
impl MethodSpec {
    pub fn new(name: impl Into<String>, return_type: JavaType) -> Self {
        Self {
            annotations: vec![],
            name: name.into(),
            parameters: vec![],
            return_type,
        }
    }

    pub fn add_annotation(&mut self, annotation: AnnotationSpec) -> &mut Self {
        self.annotations.push(annotation);
        self
    }

    pub fn add_parameter(&mut self, parameter: ParameterSpec) -> &mut Self {
        self.parameters.push(parameter);
        self
    }

    pub fn annotations(&self) -> &[AnnotationSpec] {
        self.annotations.as_slice()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn parameters(&self) -> &[ParameterSpec] {
        self.parameters.as_slice()
    }

    pub fn return_type(&self) -> &JavaType {
        &self.return_type
    }

    pub(crate) fn referenced_classes(&self) -> Vec<&ClassName> {
        let mut classes: Vec<&ClassName> =
            self.annotations.iter()
                .map(AnnotationSpec::class)
                .chain(self.return_type.as_class())
                .collect();
        for param in &self.parameters {
            classes.extend(param.referenced_classes());
        }
        classes
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
            "{INDENT}{} {}({});",
            names.type_name(&self.return_type),
            self.name,
            self.parameters.iter()
                .map(|param| param.to_java_source(names))
                .collect::<Vec<_>>()
                .join(", "),
        )
    }
}
