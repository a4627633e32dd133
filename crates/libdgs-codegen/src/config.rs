use crate::java;
use std::collections::BTreeSet;
use std::path::Path;
use std::path::PathBuf;

/// Extension (without the leading `.`) of the schema files to generate from.
pub const SCHEMA_FILE_EXTENSION: &str = "graphqls";

/// The scaffold file written by [`crate::scaffold::init_base_schema`]. It is
/// excluded from generation unless an explicit exclude list says otherwise.
pub const DEFAULT_EXCLUDE_FILE: &str = "codegen.graphqls";

pub const SCHEMA_DIR_KEY: &str = "schemaDir";
pub const OUTPUT_DIR_KEY: &str = "outputDir";
pub const PACKAGE_NAME_KEY: &str = "packageName";
pub const EXCLUDE_FILES_KEY: &str = "excludeFiles";

type Result<T> = std::result::Result<T, ConfigurationError>;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigurationError {
    #[error("`{0}` is not a valid Java package name")]
    InvalidPackageName(String),

    #[error("Missing required parameter `{0}`")]
    MissingParameter(&'static str),

    #[error("Schema directory is not a directory: {0:?}")]
    SchemaDirNotADirectory(PathBuf),

    #[error("Schema directory does not exist: {0:?}")]
    SchemaDirNotFound(PathBuf),
}

/// Settings for one generator run. Built once (see
/// [`GeneratorConfigBuilder`]) and shared read-only by every step.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GeneratorConfig {
    base_package: String,
    exclude_files: BTreeSet<String>,
    output_dir: PathBuf,
    schema_dir: PathBuf,
}
impl GeneratorConfig {
    pub fn builder() -> GeneratorConfigBuilder {
        GeneratorConfigBuilder::default()
    }

    /// Build a config from `--key=value` style arguments.
    ///
    /// Each argument is split on its first `=`; leading dashes are stripped
    /// from the key. Arguments without a `=` and unknown keys are ignored.
    pub fn from_key_value_args<I, S>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut builder = Self::builder();
        for arg in args {
            let Some((key, value)) = arg.as_ref().split_once('=') else {
                continue;
            };
            match key.trim_start_matches('-') {
                SCHEMA_DIR_KEY => builder.schema_dir(value),
                OUTPUT_DIR_KEY => builder.output_dir(value),
                PACKAGE_NAME_KEY => builder.package_name(value),
                EXCLUDE_FILES_KEY => builder.exclude_files_csv(value),
                other => {
                    log::debug!("Ignoring unknown generator argument `{other}`.");
                    &mut builder
                },
            };
        }
        builder.build()
    }

    pub fn base_package(&self) -> &str {
        self.base_package.as_str()
    }

    pub fn exclude_files(&self) -> &BTreeSet<String> {
        &self.exclude_files
    }

    pub fn fetchers_package(&self) -> String {
        format!("{}.fetchers", self.base_package)
    }

    pub fn is_excluded(&self, file_name: &str) -> bool {
        self.exclude_files.contains(file_name)
    }

    pub fn output_dir(&self) -> &Path {
        self.output_dir.as_path()
    }

    pub fn schema_dir(&self) -> &Path {
        self.schema_dir.as_path()
    }

    pub fn types_package(&self) -> String {
        format!("{}.types", self.base_package)
    }
}

#[derive(Clone, Debug, Default)]
pub struct GeneratorConfigBuilder {
    exclude_files: Vec<String>,
    output_dir: Option<PathBuf>,
    package_name: Option<String>,
    schema_dir: Option<PathBuf>,
}
impl GeneratorConfigBuilder {
    pub fn build(&self) -> Result<GeneratorConfig> {
        let schema_dir =
            self.schema_dir.to_owned()
                .ok_or(ConfigurationError::MissingParameter(SCHEMA_DIR_KEY))?;
        let output_dir =
            self.output_dir.to_owned()
                .ok_or(ConfigurationError::MissingParameter(OUTPUT_DIR_KEY))?;
        let base_package =
            self.package_name.to_owned()
                .ok_or(ConfigurationError::MissingParameter(PACKAGE_NAME_KEY))?;
        if !java::is_valid_package_name(base_package.as_str()) {
            return Err(ConfigurationError::InvalidPackageName(base_package));
        }

        let mut exclude_files: BTreeSet<String> =
            self.exclude_files.iter()
                .map(|name| name.trim())
                .filter(|name| !name.is_empty())
                .map(str::to_string)
                .collect();
        if exclude_files.is_empty() {
            exclude_files.insert(DEFAULT_EXCLUDE_FILE.to_string());
        }

        Ok(GeneratorConfig {
            base_package,
            exclude_files,
            output_dir,
            schema_dir,
        })
    }

    pub fn exclude_file(&mut self, file_name: impl Into<String>) -> &mut Self {
        self.exclude_files.push(file_name.into());
        self
    }

    /// Add every entry of a comma-separated list of file names.
    pub fn exclude_files_csv(&mut self, file_names: &str) -> &mut Self {
        self.exclude_files.extend(file_names.split(',').map(str::to_string));
        self
    }

    pub fn output_dir(&mut self, path: impl Into<PathBuf>) -> &mut Self {
        self.output_dir = Some(path.into());
        self
    }

    pub fn package_name(&mut self, name: impl Into<String>) -> &mut Self {
        self.package_name = Some(name.into());
        self
    }

    pub fn schema_dir(&mut self, path: impl Into<PathBuf>) -> &mut Self {
        self.schema_dir = Some(path.into());
        self
    }
}
