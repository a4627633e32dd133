use crate::config::DEFAULT_EXCLUDE_FILE;
use std::path::Path;
use std::path::PathBuf;

const BASE_SCHEMA_TEMPLATE: &str = include_str!("../templates/codegen.graphqls.template");

type Result<T> = std::result::Result<T, ScaffoldError>;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ScaffoldOutcome {
    AlreadyExists(PathBuf),
    Created(PathBuf),
}

#[derive(Debug, thiserror::Error)]
pub enum ScaffoldError {
    #[error("Failed to create schema directory {path:?}: {err}")]
    CreateDirectory {
        path: PathBuf,
        err: std::io::Error,
    },

    #[error("Failed to write base schema file {path:?}: {err}")]
    WriteFile {
        path: PathBuf,
        err: std::io::Error,
    },
}

/// Create `schema_dir` (if needed) along with a base schema file declaring
/// empty `Query` and `Mutation` root types. An existing base schema file is
/// left untouched.
pub fn init_base_schema(schema_dir: impl AsRef<Path>) -> Result<ScaffoldOutcome> {
    let schema_dir = schema_dir.as_ref();
    std::fs::create_dir_all(schema_dir)
        .map_err(|err| ScaffoldError::CreateDirectory {
            path: schema_dir.to_path_buf(),
            err,
        })?;

    let base_schema_path = schema_dir.join(DEFAULT_EXCLUDE_FILE);
    if base_schema_path.exists() {
        log::info!("Base GraphQL schema file already exists at {base_schema_path:?}.");
        return Ok(ScaffoldOutcome::AlreadyExists(base_schema_path));
    }

    std::fs::write(&base_schema_path, BASE_SCHEMA_TEMPLATE)
        .map_err(|err| ScaffoldError::WriteFile {
            path: base_schema_path.to_owned(),
            err,
        })?;
    log::info!("Created base GraphQL schema file at {base_schema_path:?}.");
    Ok(ScaffoldOutcome::Created(base_schema_path))
}
