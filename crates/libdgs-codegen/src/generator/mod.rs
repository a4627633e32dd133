use crate::config::ConfigurationError;
use crate::config::SCHEMA_FILE_EXTENSION;
use crate::emit::FetcherEmitter;
use crate::emit::GeneratedArtifact;
use crate::emit::TypeEmitter;
use crate::file_reader;
use crate::file_writer::FileWriter;
use crate::CodegenError;
use crate::GeneratorConfig;
use crate::SchemaDocument;
use std::path::Path;
use std::path::PathBuf;
use walkdir::WalkDir;

type Result<T> = std::result::Result<T, CodegenError>;

/// What a successful [`Generator::run`] did.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GenerationReport {
    pub schema_files: Vec<PathBuf>,
    pub written_files: Vec<PathBuf>,
}

/// Drives generation for every schema file under the configured schema
/// directory.
#[derive(Debug)]
pub struct Generator {
    config: GeneratorConfig,
    writer: FileWriter,
}
impl Generator {
    pub fn new(config: GeneratorConfig) -> Self {
        Self {
            writer: FileWriter::new(config.output_dir()),
            config,
        }
    }

    /// Generate sources for every schema file, one file at a time, writing
    /// each artifact as soon as it is built. The first error aborts the run.
    pub fn run(&self) -> Result<GenerationReport> {
        let schema_files = discover_schema_files(&self.config)?;
        log::debug!("Found {} schema files to process.", schema_files.len());

        let mut report = GenerationReport::default();
        for file_path in schema_files {
            report.written_files.append(&mut self.process_file(&file_path)?);
            report.schema_files.push(file_path);
        }
        Ok(report)
    }

    /// Generate and write the artifacts of a single schema file, returning the
    /// paths written.
    pub fn process_file(&self, file_path: &Path) -> Result<Vec<PathBuf>> {
        log::info!("Processing {file_path:?}.");
        let content = file_reader::read_content(file_path)?;
        let file_stem = schema_file_stem(file_path);
        let artifacts = self.generate(
            Some(file_path),
            file_stem.as_str(),
            content.as_str(),
        )?;

        let mut written = vec![];
        for artifact in &artifacts {
            written.push(self.writer.write(artifact)?);
        }
        Ok(written)
    }

    /// Generate the artifacts for schema `content` without touching the
    /// filesystem. `file_stem` names the fetcher interface.
    pub fn generate_from_str(
        &self,
        file_stem: &str,
        content: &str,
    ) -> Result<Vec<GeneratedArtifact>> {
        self.generate(None, file_stem, content)
    }

    fn generate(
        &self,
        file_path: Option<&Path>,
        file_stem: &str,
        content: &str,
    ) -> Result<Vec<GeneratedArtifact>> {
        let doc = SchemaDocument::parse(file_path, content)?;
        let mut artifacts = TypeEmitter::new(&self.config).emit(&doc)?;
        artifacts.push(FetcherEmitter::new(&self.config).emit(file_stem, &doc)?);
        Ok(artifacts)
    }
}

/// Recursively find the schema files under the configured schema directory,
/// skipping excluded file names. The result is sorted so runs are
/// reproducible regardless of directory iteration order.
pub fn discover_schema_files(config: &GeneratorConfig) -> Result<Vec<PathBuf>> {
    let schema_dir = config.schema_dir();
    if !schema_dir.exists() {
        return Err(ConfigurationError::SchemaDirNotFound(schema_dir.to_path_buf()).into());
    }
    if !schema_dir.is_dir() {
        return Err(ConfigurationError::SchemaDirNotADirectory(schema_dir.to_path_buf()).into());
    }

    log::info!(
        "Excluding files: {}",
        config.exclude_files().iter()
            .map(|name| format!("`{name}`"))
            .collect::<Vec<_>>()
            .join(", "),
    );

    let suffix = format!(".{SCHEMA_FILE_EXTENSION}");
    let mut file_paths = vec![];
    for entry in WalkDir::new(schema_dir).follow_links(true) {
        let entry = entry?;
        let path = entry.path();
        if !entry.file_type().is_file() {
            log::trace!("Skipping non-file: {path:?}.");
            continue;
        }

        let file_name = entry.file_name().to_string_lossy();
        if !file_name.ends_with(suffix.as_str()) {
            log::trace!("Skipping non-schema file: {path:?}.");
        } else if config.is_excluded(&file_name) {
            log::debug!("Skipping excluded schema file: {path:?}.");
        } else {
            file_paths.push(path.to_path_buf());
        }
    }
    file_paths.sort();
    Ok(file_paths)
}

fn schema_file_stem(file_path: &Path) -> String {
    let file_name =
        file_path.file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
    match file_name.strip_suffix(format!(".{SCHEMA_FILE_EXTENSION}").as_str()) {
        Some(stem) => stem.to_string(),
        None => file_name,
    }
}
