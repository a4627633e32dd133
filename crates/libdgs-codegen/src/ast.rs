pub mod schema {
    pub use graphql_parser::schema::ParseError;

    pub type Definition = graphql_parser::schema::Definition<'static, String>;
    pub type Directive = graphql_parser::schema::Directive<'static, String>;
    pub type Document = graphql_parser::schema::Document<'static, String>;
    pub type Field = graphql_parser::schema::Field<'static, String>;
    pub type InputObjectType = graphql_parser::schema::InputObjectType<'static, String>;
    pub type InputObjectTypeExtension = graphql_parser::schema::InputObjectTypeExtension<'static, String>;
    pub type InputValue = graphql_parser::schema::InputValue<'static, String>;
    pub type ObjectType = graphql_parser::schema::ObjectType<'static, String>;
    pub type ObjectTypeExtension = graphql_parser::schema::ObjectTypeExtension<'static, String>;
    pub type Type = graphql_parser::schema::Type<'static, String>;
    pub type TypeDefinition = graphql_parser::schema::TypeDefinition<'static, String>;
    pub type TypeExtension = graphql_parser::schema::TypeExtension<'static, String>;
    pub type Value = graphql_parser::schema::Value<'static, String>;

    /// Parse SDL text into an owned (`'static`) schema [`Document`].
    pub fn parse(content: &str) -> Result<Document, ParseError> {
        Ok(graphql_parser::schema::parse_schema::<String>(content)?.into_static())
    }
}
