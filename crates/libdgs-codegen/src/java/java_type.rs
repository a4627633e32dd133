use crate::java::ClassName;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PrimitiveType {
    Boolean,
    Double,
    Int,
}
impl PrimitiveType {
    pub fn keyword(&self) -> &'static str {
        match self {
            Self::Boolean => "boolean",
            Self::Double => "double",
            Self::Int => "int",
        }
    }
}

/// The declared type of a generated field, parameter or method return.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum JavaType {
    Class(ClassName),
    Primitive(PrimitiveType),
}
impl JavaType {
    pub fn as_class(&self) -> Option<&ClassName> {
        if let Self::Class(class) = self {
            Some(class)
        } else {
            None
        }
    }
}
impl std::convert::From<ClassName> for JavaType {
    fn from(value: ClassName) -> Self {
        Self::Class(value)
    }
}
impl std::convert::From<PrimitiveType> for JavaType {
    fn from(value: PrimitiveType) -> Self {
        Self::Primitive(value)
    }
}
