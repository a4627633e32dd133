//! A small model of the Java constructs the emitters produce, along with a
//! deterministic renderer for complete compilation units.

mod annotation_spec;
mod class_name;
mod field_spec;
mod identifier;
mod import_resolver;
mod java_file;
mod java_type;
mod method_spec;
mod parameter_spec;
mod type_spec;

pub use annotation_spec::AnnotationSpec;
pub use annotation_spec::AnnotationValue;
pub use class_name::ClassName;
pub use field_spec::FieldSpec;
pub use identifier::is_valid_identifier;
pub use identifier::is_valid_package_name;
pub(crate) use import_resolver::ImportResolver;
pub use java_file::JavaFile;
pub use java_type::JavaType;
pub use java_type::PrimitiveType;
pub use method_spec::MethodSpec;
pub use parameter_spec::ParameterSpec;
pub use type_spec::TypeKind;
pub use type_spec::TypeSpec;

const INDENT: &str = "  ";

#[cfg(test)]
mod tests;
