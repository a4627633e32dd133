use std::path::Path;
use std::path::PathBuf;

/// Where something was declared in a schema document. `line` and `col` are
/// 1-based. `file` is `None` for documents parsed from an in-memory string.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FilePosition {
    pub col: usize,
    pub file: Option<PathBuf>,
    pub line: usize,
}
impl FilePosition {
    pub(crate) fn at(file: Option<&Path>, pos: graphql_parser::Pos) -> Self {
        Self {
            col: pos.column,
            file: file.map(Path::to_path_buf),
            line: pos.line,
        }
    }
}
impl std::fmt::Display for FilePosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.file {
            Some(file) => write!(f, "{}:{}:{}", file.display(), self.line, self.col),
            None => write!(f, "<str>:{}:{}", self.line, self.col),
        }
    }
}
