use crate::emit::GeneratedArtifact;
use std::path::Path;
use std::path::PathBuf;

type Result<T> = std::result::Result<T, FileWriteError>;

#[derive(Debug, thiserror::Error)]
pub enum FileWriteError {
    #[error("Failed to create directory {path:?}: {err}")]
    CreateDirectory {
        path: PathBuf,
        err: std::io::Error,
    },

    #[error("Failed to write {path:?}: {err}")]
    WriteFile {
        path: PathBuf,
        err: std::io::Error,
    },
}

/// Writes generated artifacts below an output directory, one file per
/// artifact at its package-derived path. Existing files are overwritten.
#[derive(Debug)]
pub struct FileWriter {
    output_dir: PathBuf,
}
impl FileWriter {
    pub fn new(output_dir: impl AsRef<Path>) -> Self {
        Self {
            output_dir: output_dir.as_ref().to_path_buf(),
        }
    }

    /// Write `artifact` and return the path of the file written.
    pub fn write(&self, artifact: &GeneratedArtifact) -> Result<PathBuf> {
        let path = self.output_dir.join(artifact.relative_path());
        if let Some(parent) = path.parent() {
            // `create_dir_all` succeeds when the directory already exists,
            // including when another writer created it concurrently.
            std::fs::create_dir_all(parent)
                .map_err(|err| FileWriteError::CreateDirectory {
                    path: parent.to_path_buf(),
                    err,
                })?;
        }

        std::fs::write(&path, artifact.render())
            .map_err(|err| FileWriteError::WriteFile {
                path: path.to_owned(),
                err,
            })?;
        log::trace!("Wrote {path:?}.");
        Ok(path)
    }
}
