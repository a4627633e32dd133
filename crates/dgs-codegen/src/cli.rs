use clap::CommandFactory;
use crate::commands;

#[derive(clap::Parser, Debug)]
#[command(
    name = "dgs-codegen",
    about = "Generate DGS fetcher interfaces and data classes from GraphQL \
             schema files.",
    version,
)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) cmd: Option<commands::CommandEnum>,

    #[arg(
        global=true,
        help="Enable verbose output.",
        long,
        short='v',
    )]
    pub verbose: bool,
}
impl Cli {
    pub(crate) async fn run_default(self) -> anyhow::Result<()> {
        Self::command().print_help()?;
        Ok(())
    }
}
