use crate::java::AnnotationSpec;
use crate::java::ClassName;
use crate::java::FieldSpec;
use crate::java::JavaFile;
use crate::java::JavaType;
use crate::java::MethodSpec;
use crate::java::ParameterSpec;
use crate::java::PrimitiveType;
use crate::java::TypeSpec;
use std::path::PathBuf;

fn annotation(canonical_name: &str) -> AnnotationSpec {
    AnnotationSpec::new(ClassName::parse(canonical_name))
}

#[test]
fn renders_data_class() {
    let mut type_spec = TypeSpec::class("User");
    type_spec.add_annotation(annotation("lombok.Data"));
    type_spec.add_field(FieldSpec::new(ClassName::string().into(), "id"));
    let mut age = FieldSpec::new(PrimitiveType::Int.into(), "age");
    age.add_annotation(annotation("jakarta.validation.constraints.NotNull"));
    type_spec.add_field(age);
    type_spec.add_field(FieldSpec::new(
        ClassName::new("com.example.types", "Address").into(),
        "address",
    ));

    let file = JavaFile::new("com.example.types", type_spec);

    assert_eq!(file.render(), concat!(
        "package com.example.types;\n",
        "\n",
        "import jakarta.validation.constraints.NotNull;\n",
        "import lombok.Data;\n",
        "\n",
        "@Data\n",
        "public class User {\n",
        "  private String id;\n",
        "\n",
        "  @NotNull\n",
        "  private int age;\n",
        "\n",
        "  private Address address;\n",
        "}\n",
    ));
}

#[test]
fn renders_interface_methods_without_implicit_modifiers() {
    let mut method = MethodSpec::new(
        "user",
        ClassName::new("com.example.types", "User").into(),
    );
    method.add_annotation(annotation("com.netflix.graphql.dgs.DgsQuery"));
    let mut id = ParameterSpec::new(ClassName::string().into(), "id");
    id.add_annotation(annotation("com.netflix.graphql.dgs.InputArgument"));
    method.add_parameter(id);
    method.add_parameter(ParameterSpec::new(
        ClassName::new("graphql.schema", "DataFetchingEnvironment").into(),
        "dfe",
    ));

    let mut type_spec = TypeSpec::interface("UserFetcher");
    type_spec.add_method(method);
    let file = JavaFile::new("com.example.fetchers", type_spec);

    assert_eq!(file.render(), concat!(
        "package com.example.fetchers;\n",
        "\n",
        "import com.example.types.User;\n",
        "import com.netflix.graphql.dgs.DgsQuery;\n",
        "import com.netflix.graphql.dgs.InputArgument;\n",
        "import graphql.schema.DataFetchingEnvironment;\n",
        "\n",
        "public interface UserFetcher {\n",
        "  @DgsQuery\n",
        "  User user(@InputArgument String id, DataFetchingEnvironment dfe);\n",
        "}\n",
    ));
}

#[test]
fn empty_type_has_no_import_block() {
    let file = JavaFile::new("generated", TypeSpec::class("Empty"));

    assert_eq!(file.render(), concat!(
        "package generated;\n",
        "\n",
        "public class Empty {\n",
        "}\n",
    ));
}

#[test]
fn conflicting_simple_names_are_qualified() {
    // A schema type called `Data` collides with `lombok.Data`, and one called
    // `NotNull` collides with the validation annotation.
    let mut type_spec = TypeSpec::class("Holder");
    type_spec.add_annotation(annotation("lombok.Data"));
    let mut data = FieldSpec::new(
        ClassName::new("com.example.types", "Data").into(),
        "data",
    );
    data.add_annotation(annotation("jakarta.validation.constraints.NotNull"));
    type_spec.add_field(data);
    type_spec.add_field(FieldSpec::new(
        ClassName::new("com.example.types", "NotNull").into(),
        "notNull",
    ));

    let rendered = JavaFile::new("com.example.types", type_spec).render();

    assert_eq!(rendered, concat!(
        "package com.example.types;\n",
        "\n",
        "@lombok.Data\n",
        "public class Holder {\n",
        "  @jakarta.validation.constraints.NotNull\n",
        "  private Data data;\n",
        "\n",
        "  private NotNull notNull;\n",
        "}\n",
    ));
}

#[test]
fn declared_type_owns_its_simple_name() {
    let mut type_spec = TypeSpec::interface("User");
    type_spec.add_method(MethodSpec::new(
        "user",
        ClassName::new("com.example.types", "User").into(),
    ));

    let rendered = JavaFile::new("com.example.fetchers", type_spec).render();

    assert!(rendered.contains("  com.example.types.User user();\n"));
    assert!(!rendered.contains("import"));
}

#[test]
fn relative_path_follows_package() {
    let file = JavaFile::new("com.example.types", TypeSpec::class("User"));

    assert_eq!(
        file.relative_path(),
        PathBuf::from("com").join("example").join("types").join("User.java"),
    );
    assert_eq!(file.class_name().canonical_name(), "com.example.types.User");
}

#[test]
fn class_name_parsing() {
    let class = ClassName::parse("graphql.schema.DataFetchingEnvironment");
    assert_eq!(class.package(), "graphql.schema");
    assert_eq!(class.simple_name(), "DataFetchingEnvironment");

    let default_package = ClassName::parse("Thing");
    assert_eq!(default_package.package(), "");
    assert_eq!(default_package.canonical_name(), "Thing");

    assert_eq!(
        JavaType::from(ClassName::string()).as_class(),
        Some(&ClassName::new("java.lang", "String")),
    );
}
