use std::path::Path;
use std::path::PathBuf;

type Result<T> = std::result::Result<T, ReadContentError>;

/// Read a schema file into memory, insisting that it is a UTF-8 encoded
/// regular file.
pub fn read_content<P: AsRef<Path>>(file_path: P) -> Result<String> {
    let file_path = file_path.as_ref();
    if !file_path.is_file() {
        return Err(ReadContentError::PathIsNotAFile(file_path.to_path_buf()));
    }

    let bytes = std::fs::read(file_path)
        .map_err(|err| ReadContentError::FileReadError {
            file_path: file_path.to_path_buf(),
            err,
        })?;

    let content = String::from_utf8(bytes)
        .map_err(|err| ReadContentError::FileDecodeError {
            file_path: file_path.to_path_buf(),
            err,
        })?;

    Ok(content)
}

#[derive(Debug, thiserror::Error)]
pub enum ReadContentError {
    #[error("Schema file {file_path:?} is not valid UTF-8")]
    FileDecodeError {
        file_path: PathBuf,
        err: std::string::FromUtf8Error,
    },

    #[error("Failed to read schema file {file_path:?}: {err}")]
    FileReadError {
        file_path: PathBuf,
        err: std::io::Error,
    },

    #[error("Expected a schema file at {0:?}, but it is not a regular file")]
    PathIsNotAFile(PathBuf),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_utf8_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("user.graphqls");
        std::fs::write(&path, "type User { id: ID! }").unwrap();

        assert_eq!(read_content(&path).unwrap(), "type User { id: ID! }");
    }

    #[test]
    fn directory_is_not_a_file() {
        let dir = tempfile::tempdir().unwrap();

        let err = read_content(dir.path()).unwrap_err();
        assert!(matches!(
            err,
            ReadContentError::PathIsNotAFile(path) if path == dir.path(),
        ));
    }

    #[test]
    fn invalid_utf8_is_a_decode_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.graphqls");
        std::fs::write(&path, [0x74, 0x79, 0xff, 0xfe]).unwrap();

        let err = read_content(&path).unwrap_err();
        assert!(matches!(err, ReadContentError::FileDecodeError { .. }));
    }
}
