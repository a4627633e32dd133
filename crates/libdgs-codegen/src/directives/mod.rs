use crate::ast;
use crate::java::AnnotationSpec;
use crate::java::AnnotationValue;
use crate::java::ClassName;

const VALIDATION_PACKAGE: &str = "jakarta.validation.constraints";

/// The closed set of schema directives that are translated into
/// `jakarta.validation.constraints` annotations. Each directive shares its
/// name with the annotation it becomes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RecognizedDirective {
    AssertFalse,
    AssertTrue,
    DecimalMax,
    DecimalMin,
    Digits,
    Email,
    Future,
    FutureOrPresent,
    Max,
    Min,
    Negative,
    NegativeOrZero,
    NotBlank,
    NotEmpty,
    Null,
    Past,
    PastOrPresent,
    Pattern,
    Positive,
    PositiveOrZero,
    Size,
}
impl RecognizedDirective {
    pub const ALL: [Self; 21] = [
        Self::AssertFalse,
        Self::AssertTrue,
        Self::DecimalMax,
        Self::DecimalMin,
        Self::Digits,
        Self::Email,
        Self::Future,
        Self::FutureOrPresent,
        Self::Max,
        Self::Min,
        Self::Negative,
        Self::NegativeOrZero,
        Self::NotBlank,
        Self::NotEmpty,
        Self::Null,
        Self::Past,
        Self::PastOrPresent,
        Self::Pattern,
        Self::Positive,
        Self::PositiveOrZero,
        Self::Size,
    ];

    pub fn from_directive_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|directive| directive.directive_name() == name)
    }

    pub fn directive_name(&self) -> &'static str {
        self.annotation_name()
    }

    pub fn annotation_name(&self) -> &'static str {
        match self {
            Self::AssertFalse => "AssertFalse",
            Self::AssertTrue => "AssertTrue",
            Self::DecimalMax => "DecimalMax",
            Self::DecimalMin => "DecimalMin",
            Self::Digits => "Digits",
            Self::Email => "Email",
            Self::Future => "Future",
            Self::FutureOrPresent => "FutureOrPresent",
            Self::Max => "Max",
            Self::Min => "Min",
            Self::Negative => "Negative",
            Self::NegativeOrZero => "NegativeOrZero",
            Self::NotBlank => "NotBlank",
            Self::NotEmpty => "NotEmpty",
            Self::Null => "Null",
            Self::Past => "Past",
            Self::PastOrPresent => "PastOrPresent",
            Self::Pattern => "Pattern",
            Self::Positive => "Positive",
            Self::PositiveOrZero => "PositiveOrZero",
            Self::Size => "Size",
        }
    }

    pub fn annotation_class(&self) -> ClassName {
        ClassName::new(VALIDATION_PACKAGE, self.annotation_name())
    }
}

/// `@jakarta.validation.constraints.NotNull`, added for non-null arguments and
/// input fields.
pub fn not_null_annotation() -> AnnotationSpec {
    AnnotationSpec::new(ClassName::new(VALIDATION_PACKAGE, "NotNull"))
}

/// Translate the recognized directives in `directives` into annotations.
///
/// Unrecognized directives (`@deprecated`, custom ones, ...) produce nothing.
/// String, Int and Boolean arguments become annotation members named after the
/// argument; arguments of any other kind are dropped.
pub fn translate(directives: &[ast::schema::Directive]) -> Vec<AnnotationSpec> {
    directives.iter().filter_map(|directive| {
        let Some(recognized) =
            RecognizedDirective::from_directive_name(directive.name.as_str()) else {
            log::trace!("Skipping unrecognized directive `@{}`.", directive.name);
            return None;
        };

        let mut annotation = AnnotationSpec::new(recognized.annotation_class());
        for (arg_name, arg_value) in &directive.arguments {
            match annotation_value(arg_value) {
                Some(value) => {
                    annotation.add_member(arg_name.as_str(), value);
                },
                None => log::debug!(
                    "Dropping argument `{arg_name}` of `@{}`: only String, Int \
                    and Boolean values are supported.",
                    directive.name,
                ),
            }
        }
        Some(annotation)
    }).collect()
}

fn annotation_value(value: &ast::schema::Value) -> Option<AnnotationValue> {
    match value {
        ast::schema::Value::Boolean(value) => Some(AnnotationValue::Boolean(*value)),
        ast::schema::Value::Int(number) => number.as_i64().map(AnnotationValue::Int),
        ast::schema::Value::String(value) => Some(AnnotationValue::String(value.to_owned())),
        _ => None,
    }
}
