use crate::ast;
use crate::directives;
use crate::emit::capitalize;
use crate::emit::check_identifier;
use crate::emit::operation_kind;
use crate::emit::ArtifactKind;
use crate::emit::GeneratedArtifact;
use crate::emit::OperationKind;
use crate::emit::Result;
use crate::java::AnnotationSpec;
use crate::java::ClassName;
use crate::java::JavaFile;
use crate::java::MethodSpec;
use crate::java::ParameterSpec;
use crate::java::TypeSpec;
use crate::types;
use crate::CodegenError;
use crate::GeneratorConfig;
use crate::SchemaDocument;

/// Name of the trailing parameter every fetcher method receives.
pub const CONTEXT_PARAMETER_NAME: &str = "dfe";

/// Emits the `{FileName}Fetcher` interface of a schema file: one abstract
/// method per field of the `Query` and `Mutation` types.
#[derive(Debug)]
pub struct FetcherEmitter<'a> {
    config: &'a GeneratorConfig,
}
impl<'a> FetcherEmitter<'a> {
    pub fn new(config: &'a GeneratorConfig) -> Self {
        Self { config }
    }

    /// `file_stem` is the schema file name without its `.graphqls` extension.
    pub fn emit(
        &self,
        file_stem: &str,
        doc: &SchemaDocument,
    ) -> Result<GeneratedArtifact> {
        let fetcher_name = format!("{}Fetcher", capitalize(file_stem));
        check_identifier(fetcher_name.as_str(), "interface")?;

        let mut type_spec = TypeSpec::interface(fetcher_name.as_str());
        type_spec.add_annotation(AnnotationSpec::new(
            operation_kind::component_annotation(),
        ));

        for root_block in doc.root_field_blocks() {
            for field in root_block.fields() {
                type_spec.add_method(self.emit_operation(root_block.kind(), field)?);
            }
        }

        log::debug!(
            "Emitting `{fetcher_name}` with {} operations.",
            type_spec.methods().len(),
        );
        Ok(GeneratedArtifact::new(
            ArtifactKind::Fetcher,
            JavaFile::new(self.config.fetchers_package(), type_spec),
        ))
    }

    fn emit_operation(
        &self,
        kind: OperationKind,
        field: &ast::schema::Field,
    ) -> Result<MethodSpec> {
        check_identifier(field.name.as_str(), "method")?;
        let return_type = types::resolve(&field.field_type)?;

        let mut method = MethodSpec::new(
            field.name.as_str(),
            types::map_to_target_type(
                return_type.base_name.as_str(),
                self.config.base_package(),
            ),
        );
        method.add_annotation(AnnotationSpec::new(kind.marker_annotation()));

        for arg in &field.arguments {
            check_identifier(arg.name.as_str(), "parameter")?;
            if arg.name == CONTEXT_PARAMETER_NAME {
                return Err(CodegenError::InvalidJavaIdentifier {
                    identifier: arg.name.to_owned(),
                    usage: "parameter (it is reserved for the DataFetchingEnvironment)",
                });
            }
            let resolved = types::resolve(&arg.value_type)?;
            let mut param = ParameterSpec::new(
                types::map_to_target_type(
                    resolved.base_name.as_str(),
                    self.config.base_package(),
                ),
                arg.name.as_str(),
            );
            if resolved.non_null {
                param.add_annotation(directives::not_null_annotation());
            }
            for annotation in directives::translate(&arg.directives) {
                param.add_annotation(annotation);
            }
            param.add_annotation(AnnotationSpec::new(
                operation_kind::input_argument_annotation(),
            ));
            method.add_parameter(param);
        }

        method.add_parameter(ParameterSpec::new(
            ClassName::new("graphql.schema", "DataFetchingEnvironment").into(),
            CONTEXT_PARAMETER_NAME,
        ));

        Ok(method)
    }
}
