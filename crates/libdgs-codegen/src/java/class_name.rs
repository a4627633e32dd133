/// A fully-qualified reference to a Java class (or interface, or annotation).
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ClassName {
    package: String,
    simple_name: String,
}
impl ClassName {
    pub fn new(package: impl Into<String>, simple_name: impl Into<String>) -> Self {
        Self {
            package: package.into(),
            simple_name: simple_name.into(),
        }
    }

    /// Split a canonical name such as `lombok.Data` at its last `.`. A name
    /// without any `.` lives in the default package.
    pub fn parse(canonical_name: &str) -> Self {
        match canonical_name.rsplit_once('.') {
            Some((package, simple_name)) => Self::new(package, simple_name),
            None => Self::new("", canonical_name),
        }
    }

    pub fn string() -> Self {
        Self::new("java.lang", "String")
    }

    pub fn canonical_name(&self) -> String {
        if self.package.is_empty() {
            self.simple_name.to_owned()
        } else {
            format!("{}.{}", self.package, self.simple_name)
        }
    }

    /// Classes in `java.lang` are visible without an import.
    pub fn is_implicitly_imported(&self) -> bool {
        self.package == "java.lang"
    }

    pub fn package(&self) -> &str {
        self.package.as_str()
    }

    pub fn simple_name(&self) -> &str {
        self.simple_name.as_str()
    }
}
impl std::fmt::Display for ClassName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.canonical_name().as_str())
    }
}
