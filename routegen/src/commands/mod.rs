mod check;
mod completions;
mod generate;
mod list;

use std::path::PathBuf;

use check::CheckCommand;
use clap::{Args, Parser, Subcommand};
use completions::CompletionsCommand;
use eyre::Result;
use generate::GenerateCommand;
use list::ListCommand;
use routegen_manifest::{MANIFEST_FILE_NAME, ManifestFile};

use crate::ops::Project;

/// Extension trait for exiting on manifest errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for routegen_manifest::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

#[derive(Parser)]
#[command(name = "routegen")]
#[command(version)]
#[command(about = "Generate type-safe route declarations for Next.js projects")]
pub(crate) struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Generate(cmd) => cmd.run(),
            Commands::Check(cmd) => cmd.run(),
            Commands::List(cmd) => cmd.run(),
            Commands::Completions(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the route declaration file
    Generate(GenerateCommand),

    /// Verify the route declaration file is up to date
    Check(CheckCommand),

    /// List the routes found in the pages directory
    List(ListCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}

/// Options selecting the project and overriding routegen.toml.
#[derive(Args)]
pub struct ProjectArgs {
    /// Project directory (defaults to current directory)
    #[arg(short, long, default_value = ".")]
    pub dir: PathBuf,

    /// Path to routegen.toml (defaults to <dir>/routegen.toml)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Declaration file path, relative to the project directory
    #[arg(short, long)]
    pub output: Option<String>,

    /// Pages directory, relative to the project directory
    #[arg(long)]
    pub pages_dir: Option<String>,

    /// Name of the generated route union type
    #[arg(long)]
    pub type_name: Option<String>,
}

impl ProjectArgs {
    /// Load the manifest and apply command-line overrides.
    ///
    /// An explicit `--config` must exist; the default location is optional.
    pub fn load(&self) -> Project {
        let manifest_file = match &self.config {
            Some(path) => ManifestFile::open(path),
            None => ManifestFile::open_or_default(self.dir.join(MANIFEST_FILE_NAME)),
        }
        .unwrap_or_exit();

        let mut manifest = manifest_file.into_manifest();
        let mut overridden = false;

        if let Some(output) = &self.output {
            manifest.output.path = output.clone();
            overridden = true;
        }
        if let Some(pages_dir) = &self.pages_dir {
            manifest.routes.pages_dir = pages_dir.clone();
            overridden = true;
        }
        if let Some(type_name) = &self.type_name {
            manifest.output.type_name = type_name.clone();
            overridden = true;
        }

        if overridden {
            manifest.validate().unwrap_or_exit();
        }

        Project::new(&self.dir, manifest)
    }
}
