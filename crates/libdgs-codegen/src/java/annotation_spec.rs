use crate::java::ClassName;
use crate::java::ImportResolver;

/// A literal annotation member value.
#[derive(Clone, Debug, PartialEq)]
pub enum AnnotationValue {
    Boolean(bool),
    Int(i64),
    String(String),
}
impl AnnotationValue {
    pub fn to_java_literal(&self) -> String {
        match self {
            Self::Boolean(value) => value.to_string(),
            // Values that don't fit in an `int` need to be `long` literals or
            // javac rejects them.
            Self::Int(value) if i32::try_from(*value).is_ok() => value.to_string(),
            Self::Int(value) => format!("{value}L"),
            Self::String(value) => java_string_literal(value),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct AnnotationSpec {
    class: ClassName,
    members: Vec<(String, AnnotationValue)>,
}
impl AnnotationSpec {
    pub fn new(class: ClassName) -> Self {
        Self {
            class,
            members: vec![],
        }
    }

    pub fn add_member(
        &mut self,
        name: impl Into<String>,
        value: AnnotationValue,
    ) -> &mut Self {
        self.members.push((name.into(), value));
        self
    }

    pub fn class(&self) -> &ClassName {
        &self.class
    }

    pub fn members(&self) -> &[(String, AnnotationValue)] {
        self.members.as_slice()
    }

    pub(crate) fn to_java_source(&self, names: &ImportResolver) -> String {
        let name = names.class_name(&self.class);
        match self.members.as_slice() {
            [] => format!("@{name}"),
            [(member_name, value)] if member_name == "value" =>
                format!("@{name}({})", value.to_java_literal()),
            members => format!(
                "@{name}({})",
                members.iter()
                    .map(|(member_name, value)| {
                        format!("{member_name} = {}", value.to_java_literal())
                    })
                    .collect::<Vec<_>>()
                    .join(", "),
            ),
        }
    }
}

/// Quote `value` as a Java string literal.
pub(crate) fn java_string_literal(value: &str) -> String {
    let mut literal = String::with_capacity(value.len() + 2);
    literal.push('"');
    for ch in value.chars() {
        match ch {
            '"' => literal.push_str("\\\""),
            '\\' => literal.push_str("\\\\"),
            '\n' => literal.push_str("\\n"),
            '\r' => literal.push_str("\\r"),
            '\t' => literal.push_str("\\t"),
            '\u{8}' => literal.push_str("\\b"),
            '\u{c}' => literal.push_str("\\f"),
            ch if ch.is_control() => {
                literal.push_str(format!("\\u{:04x}", ch as u32).as_str())
            },
            ch => literal.push(ch),
        }
    }
    literal.push('"');
    literal
}
