mod generate;
mod init;

use crate::Cli;
use crate::CommandResult;
use generate::GenerateCmd;
use init::InitCmd;

#[derive(Debug, clap::Parser)]
#[command(name = "dgs-codegen")]
pub(crate) enum CommandEnum {
    /// Generate Java sources from every schema file under a directory.
    Generate(Box<GenerateCmd>),

    /// Write a starter `codegen.graphqls` into the schema directory.
    Init(InitCmd),
}
impl CommandEnum {
    pub(crate) async fn run(self, cli: Cli) -> CommandResult {
        match self {
            Self::Generate(cmd) => cmd.run(cli).await,
            Self::Init(cmd) => cmd.run(cli).await,
        }
    }
}
