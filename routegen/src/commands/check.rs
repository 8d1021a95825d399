use clap::Args;
use eyre::Result;

use super::ProjectArgs;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct CheckCommand {
    #[command(flatten)]
    pub project: ProjectArgs,

    /// Treat lint warnings as failures
    #[arg(long)]
    pub deny_warnings: bool,
}

impl CheckCommand {
    /// Run the check command
    pub fn run(&self) -> Result<()> {
        let project = self.project.load();
        let report = ops::check(&project, self.deny_warnings)?;

        report.render(&mut TerminalOutput::new());

        if !report.passed() {
            std::process::exit(1);
        }

        Ok(())
    }
}
