const RESERVED_WORDS: &[&str] = &[
    "abstract", "assert", "boolean", "break", "byte", "case", "catch", "char",
    "class", "const", "continue", "default", "do", "double", "else", "enum",
    "extends", "false", "final", "finally", "float", "for", "goto", "if",
    "implements", "import", "instanceof", "int", "interface", "long",
    "native", "new", "null", "package", "private", "protected", "public",
    "return", "short", "static", "strictfp", "super", "switch",
    "synchronized", "this", "throw", "throws", "transient", "true", "try",
    "void", "volatile", "while", "_",
];

/// Whether `name` can be used as a Java identifier. Non-ASCII letters and
/// digits are allowed, so names derived from file stems like `ünicode` pass.
pub fn is_valid_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    let starts_ok = match chars.next() {
        Some(first) => first.is_alphabetic() || first == '_' || first == '$',
        None => false,
    };
    starts_ok
        && chars.all(|ch| ch.is_alphanumeric() || ch == '_' || ch == '$')
        && !RESERVED_WORDS.contains(&name)
}

/// Whether `name` is a dotted sequence of valid identifiers.
pub fn is_valid_package_name(name: &str) -> bool {
    !name.is_empty() && name.split('.').all(is_valid_identifier)
}
