use crate::java::ClassName;
use crate::java::JavaType;
use crate::java::PrimitiveType;

/// The five scalars every GraphQL schema gets for free.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BuiltinScalar {
    Boolean,
    Float,
    ID,
    Int,
    String,
}
impl BuiltinScalar {
    pub fn from_graphql_name(name: &str) -> Option<Self> {
        match name {
            "Boolean" => Some(Self::Boolean),
            "Float" => Some(Self::Float),
            "ID" => Some(Self::ID),
            "Int" => Some(Self::Int),
            "String" => Some(Self::String),
            _ => None,
        }
    }

    pub fn java_type(&self) -> JavaType {
        match self {
            Self::Boolean => PrimitiveType::Boolean.into(),
            Self::Float => PrimitiveType::Double.into(),
            Self::ID | Self::String => ClassName::string().into(),
            Self::Int => PrimitiveType::Int.into(),
        }
    }
}

/// Map a resolved GraphQL type name to the Java type used for it.
///
/// Anything that isn't a built-in scalar is assumed to be generated into (or
/// otherwise present in) `{base_package}.types`; whether it actually exists
/// is left to javac.
pub fn map_to_target_type(base_name: &str, base_package: &str) -> JavaType {
    match BuiltinScalar::from_graphql_name(base_name) {
        Some(scalar) => scalar.java_type(),
        None => ClassName::new(format!("{base_package}.types"), base_name).into(),
    }
}
