use crate::directives;
use crate::emit::check_identifier;
use crate::emit::ArtifactKind;
use crate::emit::GeneratedArtifact;
use crate::emit::OperationKind;
use crate::emit::Result;
use crate::java::AnnotationSpec;
use crate::java::ClassName;
use crate::java::FieldSpec;
use crate::java::JavaFile;
use crate::java::TypeSpec;
use crate::types;
use crate::GeneratorConfig;
use crate::InputObjectTypeDef;
use crate::ObjectTypeDef;
use crate::SchemaDocument;

/// Emits one Lombok `@Data` class per non-root object type and per input
/// object type of a document.
#[derive(Debug)]
pub struct TypeEmitter<'a> {
    config: &'a GeneratorConfig,
}
impl<'a> TypeEmitter<'a> {
    pub fn new(config: &'a GeneratorConfig) -> Self {
        Self { config }
    }

    pub fn emit(&self, doc: &SchemaDocument) -> Result<Vec<GeneratedArtifact>> {
        let mut artifacts = vec![];

        for obj in doc.object_types() {
            if OperationKind::is_root_type_name(obj.name()) {
                continue;
            }
            artifacts.push(self.emit_object_type(obj)?);
        }

        for input in doc.input_object_types() {
            artifacts.push(self.emit_input_object_type(input)?);
        }

        Ok(artifacts)
    }

    fn emit_object_type(&self, obj: &ObjectTypeDef) -> Result<GeneratedArtifact> {
        let mut type_spec = self.data_class(obj.name())?;
        for field in obj.fields() {
            check_identifier(field.name.as_str(), "field")?;
            let resolved = types::resolve(&field.field_type)?;
            type_spec.add_field(FieldSpec::new(
                types::map_to_target_type(
                    resolved.base_name.as_str(),
                    self.config.base_package(),
                ),
                field.name.as_str(),
            ));
        }

        log::debug!("Emitting data class for object type `{}`.", obj.name());
        Ok(self.artifact(type_spec))
    }

    fn emit_input_object_type(
        &self,
        input: &InputObjectTypeDef,
    ) -> Result<GeneratedArtifact> {
        let mut type_spec = self.data_class(input.name())?;
        for input_value in input.fields() {
            check_identifier(input_value.name.as_str(), "field")?;
            let resolved = types::resolve(&input_value.value_type)?;
            let mut field = FieldSpec::new(
                types::map_to_target_type(
                    resolved.base_name.as_str(),
                    self.config.base_package(),
                ),
                input_value.name.as_str(),
            );
            if resolved.non_null {
                field.add_annotation(directives::not_null_annotation());
            }
            for annotation in directives::translate(&input_value.directives) {
                field.add_annotation(annotation);
            }
            type_spec.add_field(field);
        }

        log::debug!("Emitting data class for input type `{}`.", input.name());
        Ok(self.artifact(type_spec))
    }

    fn data_class(&self, name: &str) -> Result<TypeSpec> {
        check_identifier(name, "class")?;
        let mut type_spec = TypeSpec::class(name);
        for lombok_annotation in ["Data", "NoArgsConstructor", "AllArgsConstructor"] {
            type_spec.add_annotation(AnnotationSpec::new(
                ClassName::new("lombok", lombok_annotation),
            ));
        }
        Ok(type_spec)
    }

    fn artifact(&self, type_spec: TypeSpec) -> GeneratedArtifact {
        GeneratedArtifact::new(
            ArtifactKind::Type,
            JavaFile::new(self.config.types_package(), type_spec),
        )
    }
}
