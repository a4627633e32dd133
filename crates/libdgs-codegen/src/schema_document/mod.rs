use crate::ast;
use crate::emit::OperationKind;
use crate::loc;
use crate::CodegenError;
use indexmap::IndexMap;
use std::collections::HashMap;
use std::path::Path;
use std::path::PathBuf;

type Result<T> = std::result::Result<T, CodegenError>;

/// An object type (`type X` and any `extend type X` blocks) collected from a
/// single schema document.
#[derive(Clone, Debug, PartialEq)]
pub struct ObjectTypeDef {
    def_location: loc::FilePosition,
    fields: Vec<ast::schema::Field>,
    name: String,
}
impl ObjectTypeDef {
    pub fn def_location(&self) -> &loc::FilePosition {
        &self.def_location
    }

    pub fn fields(&self) -> &[ast::schema::Field] {
        self.fields.as_slice()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}

/// An input object type (`input X` and any `extend input X` blocks) collected
/// from a single schema document.
#[derive(Clone, Debug, PartialEq)]
pub struct InputObjectTypeDef {
    def_location: loc::FilePosition,
    fields: Vec<ast::schema::InputValue>,
    name: String,
}
impl InputObjectTypeDef {
    pub fn def_location(&self) -> &loc::FilePosition {
        &self.def_location
    }

    pub fn fields(&self) -> &[ast::schema::InputValue] {
        self.fields.as_slice()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}

/// The fields of one `type Query`/`type Mutation` definition or extension.
#[derive(Clone, Debug, PartialEq)]
pub struct RootFieldBlock {
    def_location: loc::FilePosition,
    fields: Vec<ast::schema::Field>,
    kind: OperationKind,
}
impl RootFieldBlock {
    pub fn def_location(&self) -> &loc::FilePosition {
        &self.def_location
    }

    pub fn fields(&self) -> &[ast::schema::Field] {
        self.fields.as_slice()
    }

    pub fn kind(&self) -> OperationKind {
        self.kind
    }
}

/// The object and input object types of one parsed schema file, in the order
/// they first appear. Every other kind of definition is ignored.
#[derive(Clone, Debug, PartialEq)]
pub struct SchemaDocument {
    file_path: Option<PathBuf>,
    input_object_types: IndexMap<String, InputObjectTypeDef>,
    object_types: IndexMap<String, ObjectTypeDef>,
    root_field_blocks: Vec<RootFieldBlock>,
}
impl SchemaDocument {
    pub fn parse(file_path: Option<&Path>, content: &str) -> Result<Self> {
        let doc = ast::schema::parse(content)
            .map_err(|err| CodegenError::ParseError {
                file: file_path.map(Path::to_path_buf),
                err,
            })?;
        Self::from_ast(file_path, doc)
    }

    pub fn from_ast(
        file_path: Option<&Path>,
        doc: ast::schema::Document,
    ) -> Result<Self> {
        let mut collector = DocumentCollector {
            base_def_locations: HashMap::new(),
            doc: SchemaDocument {
                file_path: file_path.map(Path::to_path_buf),
                input_object_types: IndexMap::new(),
                object_types: IndexMap::new(),
                root_field_blocks: vec![],
            },
        };
        for def in doc.definitions {
            collector.visit_definition(def)?;
        }
        Ok(collector.doc)
    }

    pub fn file_path(&self) -> Option<&Path> {
        self.file_path.as_deref()
    }

    pub fn input_object_types(&self) -> impl Iterator<Item = &InputObjectTypeDef> {
        self.input_object_types.values()
    }

    pub fn object_type(&self, name: &str) -> Option<&ObjectTypeDef> {
        self.object_types.get(name)
    }

    pub fn object_types(&self) -> impl Iterator<Item = &ObjectTypeDef> {
        self.object_types.values()
    }

    /// Every `Query` and `Mutation` definition and extension block, in
    /// document order. Unlike [`Self::object_type`], blocks of the same root
    /// type are not merged.
    pub fn root_field_blocks(&self) -> &[RootFieldBlock] {
        self.root_field_blocks.as_slice()
    }
}

struct DocumentCollector {
    /// Where each non-extension type definition was seen, to catch a type
    /// being defined twice.
    base_def_locations: HashMap<String, loc::FilePosition>,
    doc: SchemaDocument,
}
impl DocumentCollector {
    fn visit_definition(&mut self, def: ast::schema::Definition) -> Result<()> {
        use ast::schema::Definition;
        use ast::schema::TypeDefinition;
        use ast::schema::TypeExtension;

        match def {
            Definition::TypeDefinition(TypeDefinition::Object(obj)) => {
                let location = self.location(obj.position);
                self.check_base_definition(obj.name.as_str(), &location)?;
                self.add_object_fields(obj.name, location, obj.fields)
            },

            Definition::TypeExtension(TypeExtension::Object(ext)) => {
                let location = self.location(ext.position);
                self.add_object_fields(ext.name, location, ext.fields)
            },

            Definition::TypeDefinition(TypeDefinition::InputObject(input)) => {
                let location = self.location(input.position);
                self.check_base_definition(input.name.as_str(), &location)?;
                self.add_input_fields(input.name, location, input.fields)
            },

            Definition::TypeExtension(TypeExtension::InputObject(ext)) => {
                let location = self.location(ext.position);
                self.add_input_fields(ext.name, location, ext.fields)
            },

            other => {
                log::trace!("Ignoring definition: {}", definition_kind(&other));
                Ok(())
            },
        }
    }

    fn add_object_fields(
        &mut self,
        type_name: String,
        location: loc::FilePosition,
        fields: Vec<ast::schema::Field>,
    ) -> Result<()> {
        if let Some(input) = self.doc.input_object_types.get(&type_name) {
            return Err(CodegenError::DuplicateTypeDefinition {
                type_name,
                location1: input.def_location.to_owned(),
                location2: location,
            });
        }

        let root_block =
            OperationKind::from_root_type_name(type_name.as_str())
                .map(|kind| RootFieldBlock {
                    def_location: location.to_owned(),
                    fields: fields.clone(),
                    kind,
                });

        let file_path = self.doc.file_path.to_owned();
        let obj =
            self.doc.object_types
                .entry(type_name.to_owned())
                .or_insert_with(|| ObjectTypeDef {
                    def_location: location,
                    fields: vec![],
                    name: type_name,
                });

        for field in fields {
            if let Some(existing) = obj.fields.iter().find(|f| f.name == field.name) {
                return Err(CodegenError::DuplicateFieldName {
                    type_name: obj.name.to_owned(),
                    field_name: field.name,
                    location1: loc::FilePosition::at(file_path.as_deref(), existing.position),
                    location2: loc::FilePosition::at(file_path.as_deref(), field.position),
                });
            }
            obj.fields.push(field);
        }

        if let Some(root_block) = root_block {
            self.doc.root_field_blocks.push(root_block);
        }
        Ok(())
    }

    fn add_input_fields(
        &mut self,
        type_name: String,
        location: loc::FilePosition,
        fields: Vec<ast::schema::InputValue>,
    ) -> Result<()> {
        if let Some(obj) = self.doc.object_types.get(&type_name) {
            return Err(CodegenError::DuplicateTypeDefinition {
                type_name,
                location1: obj.def_location.to_owned(),
                location2: location,
            });
        }

        let file_path = self.doc.file_path.to_owned();
        let input =
            self.doc.input_object_types
                .entry(type_name.to_owned())
                .or_insert_with(|| InputObjectTypeDef {
                    def_location: location,
                    fields: vec![],
                    name: type_name,
                });

        for field in fields {
            if let Some(existing) = input.fields.iter().find(|f| f.name == field.name) {
                return Err(CodegenError::DuplicateFieldName {
                    type_name: input.name.to_owned(),
                    field_name: field.name,
                    location1: loc::FilePosition::at(file_path.as_deref(), existing.position),
                    location2: loc::FilePosition::at(file_path.as_deref(), field.position),
                });
            }
            input.fields.push(field);
        }
        Ok(())
    }

    fn check_base_definition(
        &mut self,
        type_name: &str,
        location: &loc::FilePosition,
    ) -> Result<()> {
        if let Some(previous) = self.base_def_locations.get(type_name) {
            return Err(CodegenError::DuplicateTypeDefinition {
                type_name: type_name.to_string(),
                location1: previous.to_owned(),
                location2: location.to_owned(),
            });
        }
        self.base_def_locations.insert(type_name.to_string(), location.to_owned());
        Ok(())
    }

    fn location(&self, pos: graphql_parser::Pos) -> loc::FilePosition {
        loc::FilePosition::at(self.doc.file_path.as_deref(), pos)
    }
}

fn definition_kind(def: &ast::schema::Definition) -> &'static str {
    use ast::schema::Definition;
    use ast::schema::TypeDefinition;
    use ast::schema::TypeExtension;

    match def {
        Definition::DirectiveDefinition(_) => "directive definition",
        Definition::SchemaDefinition(_) => "schema definition",
        Definition::TypeDefinition(TypeDefinition::Enum(_)) => "enum type",
        Definition::TypeDefinition(TypeDefinition::Interface(_)) => "interface type",
        Definition::TypeDefinition(TypeDefinition::Scalar(_)) => "scalar type",
        Definition::TypeDefinition(TypeDefinition::Union(_)) => "union type",
        Definition::TypeExtension(TypeExtension::Enum(_)) => "enum type extension",
        Definition::TypeExtension(TypeExtension::Interface(_)) => "interface type extension",
        Definition::TypeExtension(TypeExtension::Scalar(_)) => "scalar type extension",
        Definition::TypeExtension(TypeExtension::Union(_)) => "union type extension",
        Definition::TypeDefinition(_) | Definition::TypeExtension(_) => "type",
    }
}

#[cfg(test)]
mod tests;
