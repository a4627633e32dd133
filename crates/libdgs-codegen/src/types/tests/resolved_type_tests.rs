use crate::ast;
use crate::types::resolve;
use crate::types::ResolvedType;
use crate::CodegenError;
use proptest::prelude::*;

type Result<T> = std::result::Result<T, CodegenError>;

fn named(name: &str) -> ast::schema::Type {
    ast::schema::Type::NamedType(name.to_string())
}

fn list(inner: ast::schema::Type) -> ast::schema::Type {
    ast::schema::Type::ListType(Box::new(inner))
}

fn non_null(inner: ast::schema::Type) -> ast::schema::Type {
    ast::schema::Type::NonNullType(Box::new(inner))
}

#[test]
fn named_type_is_nullable() -> Result<()> {
    assert_eq!(resolve(&named("User"))?, ResolvedType {
        base_name: "User".to_string(),
        non_null: false,
    });
    Ok(())
}

#[test]
fn non_null_named_type() -> Result<()> {
    assert_eq!(resolve(&non_null(named("ID")))?, ResolvedType {
        base_name: "ID".to_string(),
        non_null: true,
    });
    Ok(())
}

#[test]
fn only_the_outermost_wrapper_decides_nullability() -> Result<()> {
    // [String!]
    let list_of_non_null = resolve(&list(non_null(named("String"))))?;
    assert_eq!(list_of_non_null.base_name, "String");
    assert!(!list_of_non_null.non_null);

    // [String]!
    let non_null_list = resolve(&non_null(list(named("String"))))?;
    assert_eq!(non_null_list.base_name, "String");
    assert!(non_null_list.non_null);

    // [[Int!]!]!
    let nested = resolve(&non_null(list(non_null(list(non_null(named("Int")))))))?;
    assert_eq!(nested.base_name, "Int");
    assert!(nested.non_null);

    Ok(())
}

#[test]
fn malformed_named_type_is_unknown_shape() {
    let err = resolve(&non_null(list(named("")))).unwrap_err();
    assert!(matches!(
        err,
        CodegenError::UnknownTypeShape { type_ref } if type_ref == "[]!",
    ));

    let err = resolve(&named("1User")).unwrap_err();
    assert!(matches!(err, CodegenError::UnknownTypeShape { .. }));
}

#[test]
fn resolves_types_parsed_from_sdl() -> Result<()> {
    let doc = ast::schema::parse(
        "type Query { users(ids: [ID!]!): [User] }",
    ).expect("parse error");
    let ast::schema::Definition::TypeDefinition(
        ast::schema::TypeDefinition::Object(query),
    ) = &doc.definitions[0] else {
        panic!("expected an object type definition");
    };
    let field = &query.fields[0];

    assert_eq!(resolve(&field.field_type)?, ResolvedType {
        base_name: "User".to_string(),
        non_null: false,
    });
    assert_eq!(resolve(&field.arguments[0].value_type)?, ResolvedType {
        base_name: "ID".to_string(),
        non_null: true,
    });

    Ok(())
}

#[derive(Clone, Debug)]
enum Wrapper {
    List,
    NonNull,
}

fn wrap(name: &str, wrappers: &[Wrapper]) -> ast::schema::Type {
    wrappers.iter().rev().fold(named(name), |inner, wrapper| match wrapper {
        Wrapper::List => list(inner),
        Wrapper::NonNull => non_null(inner),
    })
}

proptest! {
    #[test]
    fn any_wrapper_chain_unwraps_to_its_named_type(
        name in "[A-Za-z_][A-Za-z0-9_]{0,12}",
        wrappers in prop::collection::vec(
            prop_oneof![Just(Wrapper::List), Just(Wrapper::NonNull)],
            0..8,
        ),
    ) {
        let resolved = resolve(&wrap(&name, &wrappers)).unwrap();

        prop_assert_eq!(resolved.base_name, name);
        prop_assert_eq!(
            resolved.non_null,
            matches!(wrappers.first(), Some(Wrapper::NonNull)),
        );
    }
}
