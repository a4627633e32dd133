use crate::output_utils;
use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use libdgs_codegen::scaffold;
use libdgs_codegen::scaffold::ScaffoldOutcome;
use std::path::PathBuf;

#[derive(Debug, clap::Args)]
pub(crate) struct InitCmd {
    #[arg(
        default_value="src/main/resources/schema",
        help="Directory to write `codegen.graphqls` into.",
        long="schemaDir",
        value_name="DIR",
    )]
    schema_dir: PathBuf,
}

#[inherent::inherent]
impl RunnableCommand for InitCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        match scaffold::init_base_schema(self.schema_dir.as_path()) {
            Ok(ScaffoldOutcome::Created(path)) => CommandResult::stdout(format_args!(
                "{} Created {}.",
                output_utils::GREEN_CHECK,
                path.display(),
            )),

            Ok(ScaffoldOutcome::AlreadyExists(path)) => CommandResult::stdout(format_args!(
                "{} {} already exists; left unchanged.",
                output_utils::GREEN_CHECK,
                path.display(),
            )),

            Err(err) => CommandResult::stderr(format_args!(
                "{} Failed to initialize the schema directory: {err}",
                output_utils::RED_X,
            )),
        }
    }
}
