use crate::java::AnnotationSpec;
use crate::java::ClassName;
use crate::java::FieldSpec;
use crate::java::ImportResolver;
use crate::java::MethodSpec;
use std::fmt::Write;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TypeKind {
    Class,
    Interface,
}
impl TypeKind {
    pub fn keyword(&self) -> &'static str {
        match self {
            Self::Class => "class",
            Self::Interface => "interface",
        }
    }
}

/// A top-level `public` class or interface.
#[derive(Clone, Debug, PartialEq)]
pub struct TypeSpec {
    annotations: Vec<AnnotationSpec>,
    fields: Vec<FieldSpec>,
    kind: TypeKind,
    methods: Vec<MethodSpec>,
    name: String,
}
impl TypeSpec {
    pub fn class(name: impl Into<String>) -> Self {
        Self::new(TypeKind::Class, name)
    }

    pub fn interface(name: impl Into<String>) -> Self {
        Self::new(TypeKind::Interface, name)
    }

    fn new(kind: TypeKind, name: impl Into<String>) -> Self {
        Self {
            annotations: vec![],
            fields: vec![],
            kind,
            methods: vec![],
            name: name.into(),
        }
    }

    pub fn add_annotation(&mut self, annotation: AnnotationSpec) -> &mut Self {
        self.annotations.push(annotation);
        self
    }

    pub fn add_field(&mut self, field: FieldSpec) -> &mut Self {
        self.fields.push(field);
        self
    }

    pub fn add_method(&mut self, method: MethodSpec) -> &mut Self {
        self.methods.push(method);
        self
    }

    pub fn annotations(&self) -> &[AnnotationSpec] {
        self.annotations.as_slice()
    }

    pub fn fields(&self) -> &[FieldSpec] {
        self.fields.as_slice()
    }

    pub fn kind(&self) -> TypeKind {
        self.kind
    }

    pub fn methods(&self) -> &[MethodSpec] {
        self.methods.as_slice()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub(crate) fn referenced_classes(&self) -> Vec<&ClassName> {
        let mut classes: Vec<&ClassName> =
            self.annotations.iter()
                .map(AnnotationSpec::class)
                .collect();
        for field in &self.fields {
            classes.extend(field.referenced_classes());
        }
        for method in &self.methods {
            classes.extend(method.referenced_classes());
        }
        classes
    }

    pub(crate) fn emit(
        &self,
        out: &mut impl Write,
        names: &ImportResolver,
    ) -> std::fmt::Result {
        for annotation in &self.annotations {
            writeln!(out, "{}", annotation.to_java_source(names))?;
        }
        writeln!(out, "public {} {} {{", self.kind.keyword(), self.name)?;

        let mut first_member = true;
        for field in &self.fields {
            if !first_member {
                writeln!(out)?;
            }
            field.emit(out, names)?;
            first_member = false;
        }
        for method in &self.methods {
            if !first_member {
                writeln!(out)?;
            }
            method.emit(out, names)?;
            first_member = false;
        }

        writeln!(out, "}}")
    }
}
