use crate::ast;
use crate::CodegenError;

type Result<T> = std::result::Result<T, CodegenError>;

/// The innermost named type of a (possibly wrapped) GraphQL type reference.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedType {
    pub base_name: String,

    /// Whether the *outermost* wrapper is `NonNull`. `[String!]` is therefore
    /// nullable while `[String]!` is not.
    pub non_null: bool,
}

/// Strip every `NonNull` and `List` wrapper off of `ast_type`.
pub fn resolve(ast_type: &ast::schema::Type) -> Result<ResolvedType> {
    Ok(ResolvedType {
        base_name: innermost_name(ast_type, ast_type)?.to_string(),
        non_null: matches!(ast_type, ast::schema::Type::NonNullType(_)),
    })
}

fn innermost_name<'a>(
    outer: &ast::schema::Type,
    ast_type: &'a ast::schema::Type,
) -> Result<&'a str> {
    match ast_type {
        ast::schema::Type::ListType(inner)
        | ast::schema::Type::NonNullType(inner) =>
            innermost_name(outer, inner),

        ast::schema::Type::NamedType(name) if is_graphql_name(name) =>
            Ok(name.as_str()),

        ast::schema::Type::NamedType(_) =>
            Err(CodegenError::UnknownTypeShape {
                type_ref: to_graphql_string(outer),
            }),
    }
}

fn to_graphql_string(ast_type: &ast::schema::Type) -> String {
    match ast_type {
        ast::schema::Type::ListType(inner) =>
            format!("[{}]", to_graphql_string(inner)),
        ast::schema::Type::NamedType(name) => name.to_owned(),
        ast::schema::Type::NonNullType(inner) =>
            format!("{}!", to_graphql_string(inner)),
    }
}

// https://spec.graphql.org/October2021/#Name
fn is_graphql_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' =>
            chars.all(|ch| ch.is_ascii_alphanumeric() || ch == '_'),
        _ => false,
    }
}
