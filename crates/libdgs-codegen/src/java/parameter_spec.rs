use crate::java::AnnotationSpec;
use crate::java::ClassName;
use crate::java::ImportResolver;
use crate::java::JavaType;

#[derive(Clone, Debug, PartialEq)]
pub struct ParameterSpec {
    annotations: Vec<AnnotationSpec>,
    java_type: JavaType,
    name: String,
}
impl ParameterSpec {
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

    /// Parameters are written on one line, annotations first:
    /// `@NotNull @InputArgument String id`.
    pub(crate) fn to_java_source(&self, names: &ImportResolver) -> String {
        let mut source = String::new();
        for annotation in &self.annotations {
            source.push_str(annotation.to_java_source(names).as_str());
            source.push(' ');
        }
        source.push_str(names.type_name(&self.java_type).as_str());
        source.push(' ');
        source.push_str(self.name.as_str());
        source
    }
}
