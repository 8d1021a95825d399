use clap::Args;
use eyre::{Context, Result};

use super::ProjectArgs;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct ListCommand {
    #[command(flatten)]
    pub project: ProjectArgs,

    /// Print routes as JSON
    #[arg(long)]
    pub json: bool,
}

impl ListCommand {
    pub fn run(&self) -> Result<()> {
        let project = self.project.load();
        let report = ops::list(&project)?;

        if self.json {
            let json = serde_json::to_string_pretty(&report.routes)
                .wrap_err("Failed to serialize routes")?;
            println!("{}", json);
        } else {
            report.render(&mut TerminalOutput::new());
        }

        Ok(())
    }
}
