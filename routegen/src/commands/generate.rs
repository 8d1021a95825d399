use clap::Args;
use eyre::Result;

use super::ProjectArgs;
use crate::{
    ops::{self, GenerateOptions},
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct GenerateCommand {
    #[command(flatten)]
    pub project: ProjectArgs,

    /// Print the declaration instead of writing it
    #[arg(long)]
    pub dry_run: bool,
}

impl GenerateCommand {
    /// Run the generate command
    pub fn run(&self) -> Result<()> {
        let project = self.project.load();
        let report = ops::generate(
            &project,
            GenerateOptions {
                dry_run: self.dry_run,
            },
        )?;

        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}
