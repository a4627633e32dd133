use crate::emit::OperationKind;
use crate::loc;
use crate::CodegenError;
use crate::SchemaDocument;
use std::path::Path;

type Result<T> = std::result::Result<T, CodegenError>;

fn type_names(doc: &SchemaDocument) -> (Vec<&str>, Vec<&str>) {
    (
        doc.object_types().map(|obj| obj.name()).collect(),
        doc.input_object_types().map(|input| input.name()).collect(),
    )
}

#[test]
fn collects_objects_and_inputs_in_source_order() -> Result<()> {
    let doc = SchemaDocument::parse(None, concat!(
        "type Zebra { id: ID }\n",
        "input Filter { term: String }\n",
        "type Apple { id: ID }\n",
        "input Alpha { term: String }\n",
    ))?;

    assert_eq!(type_names(&doc), (
        vec!["Zebra", "Apple"],
        vec!["Filter", "Alpha"],
    ));
    Ok(())
}

#[test]
fn other_definitions_are_ignored() -> Result<()> {
    let doc = SchemaDocument::parse(None, concat!(
        "schema { query: Query }\n",
        "scalar DateTime\n",
        "enum Color { RED GREEN }\n",
        "interface Node { id: ID! }\n",
        "union Result = User | Error\n",
        "directive @Size(min: Int, max: Int) on ARGUMENT_DEFINITION\n",
        "type User implements Node { id: ID! }\n",
    ))?;

    assert_eq!(type_names(&doc), (vec!["User"], vec![]));
    Ok(())
}

#[test]
fn extensions_merge_into_their_base_type() -> Result<()> {
    let doc = SchemaDocument::parse(None, concat!(
        "type Query { me: User }\n",
        "type User { id: ID! }\n",
        "extend type Query { user(id: ID!): User }\n",
        "input Filter { term: String }\n",
        "extend input Filter { limit: Int }\n",
    ))?;

    let query = doc.object_type("Query").expect("no Query type");
    let field_names: Vec<&str> =
        query.fields().iter()
            .map(|field| field.name.as_str())
            .collect();
    assert_eq!(field_names, vec!["me", "user"]);
    assert_eq!(query.def_location().line, 1);

    let filter = doc.input_object_types().next().expect("no Filter type");
    assert_eq!(filter.fields().len(), 2);
    assert_eq!(type_names(&doc), (vec!["Query", "User"], vec!["Filter"]));
    Ok(())
}

#[test]
fn extension_without_base_definition_stands_alone() -> Result<()> {
    let doc = SchemaDocument::parse(None, concat!(
        "extend type Query { user(id: ID!): User }\n",
        "extend type Mutation { createUser(name: String!): User! }\n",
        "extend type Mutation { deleteUser(id: ID!): Boolean }\n",
    ))?;

    assert_eq!(type_names(&doc), (vec!["Query", "Mutation"], vec![]));
    assert_eq!(doc.object_type("Mutation").unwrap().fields().len(), 2);
    Ok(())
}

#[test]
fn duplicate_field_names_are_rejected() {
    let file = Path::new("schema/user.graphqls");
    let err = SchemaDocument::parse(Some(file), concat!(
        "type User {\n",
        "  id: ID!\n",
        "  id: String\n",
        "}\n",
    )).unwrap_err();

    match err {
        CodegenError::DuplicateFieldName {
            type_name,
            field_name,
            location1,
            location2,
        } => {
            assert_eq!(type_name, "User");
            assert_eq!(field_name, "id");
            assert_eq!(location1, loc::FilePosition {
                col: 3,
                file: Some(file.to_path_buf()),
                line: 2,
            });
            assert_eq!(location2.line, 3);
        },
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn duplicate_fields_across_extensions_are_rejected() {
    let err = SchemaDocument::parse(None, concat!(
        "extend type Query { user(id: ID!): User }\n",
        "extend type Query { user(name: String): User }\n",
    )).unwrap_err();

    assert!(matches!(
        err,
        CodegenError::DuplicateFieldName { ref type_name, ref field_name, .. }
            if type_name == "Query" && field_name == "user",
    ));
}

#[test]
fn duplicate_type_definitions_are_rejected() {
    let err = SchemaDocument::parse(None, concat!(
        "type User { id: ID! }\n",
        "type User { name: String }\n",
    )).unwrap_err();
    assert!(matches!(
        err,
        CodegenError::DuplicateTypeDefinition { ref type_name, .. } if type_name == "User",
    ));

    let err = SchemaDocument::parse(None, concat!(
        "type User { id: ID! }\n",
        "input User { name: String }\n",
    )).unwrap_err();
    assert!(matches!(err, CodegenError::DuplicateTypeDefinition { .. }));
}

#[test]
fn parse_errors_carry_the_file() {
    let file = Path::new("broken.graphqls");
    let err = SchemaDocument::parse(Some(file), "type User {").unwrap_err();

    assert!(matches!(
        err,
        CodegenError::ParseError { file: Some(ref path), .. } if path == file,
    ));
}

#[test]
fn root_blocks_keep_document_order() -> Result<()> {
    let doc = SchemaDocument::parse(None, concat!(
        "type Query { a: Int }\n",
        "type User { id: ID }\n",
        "type Mutation { b: Int }\n",
        "extend type Query { c: Int }\n",
    ))?;

    let blocks: Vec<(OperationKind, usize, Vec<&str>)> =
        doc.root_field_blocks().iter()
            .map(|block| (
                block.kind(),
                block.def_location().line,
                block.fields().iter().map(|f| f.name.as_str()).collect(),
            ))
            .collect();
    assert_eq!(blocks, vec![
        (OperationKind::Query, 1, vec!["a"]),
        (OperationKind::Mutation, 3, vec!["b"]),
        (OperationKind::Query, 4, vec!["c"]),
    ]);

    // The merged view still sees one `Query` type.
    let query_fields: Vec<&str> =
        doc.object_type("Query").map_or(vec![], |query| {
            query.fields().iter().map(|f| f.name.as_str()).collect()
        });
    assert_eq!(query_fields, vec!["a", "c"]);
    Ok(())
}
