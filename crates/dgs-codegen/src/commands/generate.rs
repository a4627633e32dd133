use anyhow::Context;
use crate::output_utils;
use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use libdgs_codegen::config::EXCLUDE_FILES_KEY;
use libdgs_codegen::config::OUTPUT_DIR_KEY;
use libdgs_codegen::config::PACKAGE_NAME_KEY;
use libdgs_codegen::config::SCHEMA_DIR_KEY;
use libdgs_codegen::GenerationReport;
use libdgs_codegen::Generator;
use libdgs_codegen::GeneratorConfig;
use std::path::PathBuf;

#[derive(Debug, clap::Args)]
pub(crate) struct GenerateCmd {
    #[arg(
        help="Comma-separated schema file names to skip. Defaults to \
             `codegen.graphqls`.",
        long="excludeFiles",
        value_name="FILE_NAMES",
    )]
    exclude_files: Option<String>,

    #[arg(
        help="Directory the generated Java sources are written under.",
        long="outputDir",
        value_name="DIR",
    )]
    output_dir: Option<PathBuf>,

    #[arg(
        help="Base Java package; sources land in `<package>.types` and \
             `<package>.fetchers`.",
        long="packageName",
        value_name="PACKAGE",
    )]
    package_name: Option<String>,

    #[arg(
        help="Directory searched recursively for `.graphqls` files.",
        long="schemaDir",
        value_name="DIR",
    )]
    schema_dir: Option<PathBuf>,
}
impl GenerateCmd {
    /// The options given on the command line, as the `key=value` pairs the
    /// generator config is built from.
    fn key_value_args(&self) -> Vec<String> {
        let mut args = vec![];
        if let Some(schema_dir) = &self.schema_dir {
            args.push(format!("{SCHEMA_DIR_KEY}={}", schema_dir.display()));
        }
        if let Some(output_dir) = &self.output_dir {
            args.push(format!("{OUTPUT_DIR_KEY}={}", output_dir.display()));
        }
        if let Some(package_name) = &self.package_name {
            args.push(format!("{PACKAGE_NAME_KEY}={package_name}"));
        }
        if let Some(exclude_files) = &self.exclude_files {
            args.push(format!("{EXCLUDE_FILES_KEY}={exclude_files}"));
        }
        args
    }

    fn config(&self) -> anyhow::Result<GeneratorConfig> {
        GeneratorConfig::from_key_value_args(self.key_value_args())
            .context("Invalid generator configuration")
    }

    fn generate(&self) -> anyhow::Result<GenerationReport> {
        let config = self.config()?;
        log::debug!("Generator configuration: {config:#?}");
        let schema_dir = config.schema_dir().to_path_buf();
        Generator::new(config)
            .run()
            .with_context(|| format!("Code generation from {schema_dir:?} failed"))
    }
}

#[inherent::inherent]
impl RunnableCommand for GenerateCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        match self.generate() {
            Ok(report) => CommandResult::stdout(format_args!(
                concat!(
                    "{} Code generation finished:\n",
                    "  * Processed {} schema files.\n",
                    "  * Wrote {} Java source files.",
                ),
                output_utils::GREEN_CHECK,
                report.schema_files.len(),
                report.written_files.len(),
            )),

            Err(err) => CommandResult::stderr(format_args!(
                "{} {err:#}",
                output_utils::RED_X,
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::commands::CommandEnum;
    use crate::Cli;
    use clap::Parser;
    use libdgs_codegen::ConfigurationError;

    fn parse_generate(args: &[&str]) -> super::GenerateCmd {
        let cli = Cli::try_parse_from(
            ["dgs-codegen", "generate"].iter().chain(args.iter()),
        ).unwrap();
        match cli.cmd {
            Some(CommandEnum::Generate(cmd)) => *cmd,
            other => panic!("unexpected subcommand: {other:?}"),
        }
    }

    #[test]
    fn accepts_camel_case_flags() {
        let cmd = parse_generate(&[
            "--schemaDir=src/main/resources/schema",
            "--outputDir=build/generated",
            "--packageName=com.example",
            "--excludeFiles=codegen.graphqls,legacy.graphqls",
        ]);

        let config = cmd.config().unwrap();
        assert_eq!(config.base_package(), "com.example");
        assert!(config.is_excluded("legacy.graphqls"));
        assert!(config.is_excluded("codegen.graphqls"));
        assert!(!config.is_excluded("user.graphqls"));
        assert_eq!(config.schema_dir(), std::path::Path::new("src/main/resources/schema"));
    }

    #[test]
    fn missing_package_name_is_a_configuration_error() {
        let cmd = parse_generate(&["--schemaDir=schema", "--outputDir=out"]);

        let err = cmd.config().unwrap_err();
        assert_eq!(
            err.downcast_ref::<ConfigurationError>(),
            Some(&ConfigurationError::MissingParameter("packageName")),
        );
    }
}
