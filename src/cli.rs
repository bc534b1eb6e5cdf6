use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use tracing::error;

use crate::export::{
    self, ExportSettings, DEFAULT_AUTHOR, DEFAULT_INSTITUTION_ID, DEFAULT_OUTPUT_DIR,
};
use crate::logging;
use crate::revision::{
    GitFileHistory, RevisionProvider, VersionHistory, DEFAULT_VERSION_HISTORY_PATH,
};
use crate::validate::{validate_output_dir, ValidationSeverity};
use crate::vocab::{default_catalogue, VocabularyCatalogue};

#[derive(Debug, Parser)]
#[command(
    name = "cmip_cvs",
    about = "Write the CMIP controlled-vocabulary JSON documents"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    #[command(flatten)]
    pub export: ExportArgs,
}

/// Shared by every subcommand; accepted before or after the subcommand name.
#[derive(Debug, Clone, PartialEq, Eq, clap::Args)]
pub struct ExportArgs {
    /// Directory the documents are written to
    #[arg(long, global = true, env = "CMIP_CVS_OUT_DIR", default_value = DEFAULT_OUTPUT_DIR)]
    pub out_dir: PathBuf,

    /// Version-history JSON supplying per-vocabulary revision facts
    #[arg(long, global = true, env = "CMIP_CVS_HISTORY", default_value = DEFAULT_VERSION_HISTORY_PATH)]
    pub history: PathBuf,

    /// Resolve previous_commit from git instead of the history file
    #[arg(long, global = true)]
    pub git_previous_commit: bool,

    #[arg(long, global = true, env = "CMIP_CVS_AUTHOR", default_value = DEFAULT_AUTHOR)]
    pub author: String,

    #[arg(long, global = true, env = "CMIP_CVS_INSTITUTION_ID", default_value = DEFAULT_INSTITUTION_ID)]
    pub institution_id: String,
}

impl ExportArgs {
    pub fn settings(&self) -> ExportSettings {
        ExportSettings {
            author: self.author.clone(),
            institution_id: self.institution_id.clone(),
            ..ExportSettings::default().with_output_dir(&self.out_dir)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Write every catalogued vocabulary (default)
    Export,
    /// Print each vocabulary and the path it is written to
    List,
    /// Check an existing output directory against the catalogue
    Validate,
}

/// `Err` carries the exit code clap asked for (0 for `--help`, 2 for usage errors).
pub fn parse_command(args: &[String]) -> Result<Cli, i32> {
    Cli::try_parse_from(args).map_err(|err| {
        let _ = err.print();
        err.exit_code()
    })
}

pub fn run_with_args(args: &[String]) -> i32 {
    let cli = match parse_command(args) {
        Ok(cli) => cli,
        Err(code) => return code,
    };
    logging::init();

    let catalogue = match default_catalogue() {
        Ok(catalogue) => catalogue,
        Err(err) => {
            error!("{err}");
            return 1;
        }
    };

    match cli.command.unwrap_or(Command::Export) {
        Command::Export => handle_export(catalogue, &cli.export),
        Command::List => handle_list(&catalogue, &cli.export.out_dir),
        Command::Validate => handle_validate(&catalogue, &cli.export.out_dir),
    }
}

fn handle_export(catalogue: VocabularyCatalogue, args: &ExportArgs) -> i32 {
    let history = match VersionHistory::load(&args.history) {
        Ok(history) => history,
        Err(err) => {
            error!("export failed: {err}");
            return 1;
        }
    };
    let provider: Box<dyn RevisionProvider> = if args.git_previous_commit {
        Box::new(GitFileHistory::new(history))
    } else {
        Box::new(history)
    };

    match export::run(catalogue, &args.settings(), &provider) {
        Ok(summary) => {
            println!(
                "export complete: written={}, purged={}",
                summary.written(),
                summary.purged()
            );
            0
        }
        Err(err) => {
            error!("export failed: {err}");
            1
        }
    }
}

fn handle_list(catalogue: &VocabularyCatalogue, out_dir: &Path) -> i32 {
    for (name, table) in catalogue.iter() {
        println!(
            "{name}\t{}\t{}\t{}",
            table.kind(),
            table.len(),
            export::resolve_output_path(out_dir, name).display()
        );
    }
    0
}

fn handle_validate(catalogue: &VocabularyCatalogue, out_dir: &Path) -> i32 {
    let report = validate_output_dir(catalogue, out_dir);
    for diag in &report.diagnostics {
        match diag.severity {
            ValidationSeverity::Error => eprintln!("{diag}"),
            ValidationSeverity::Warning | ValidationSeverity::Info => println!("{diag}"),
        }
    }

    if report.has_errors() {
        eprintln!(
            "validation failed: {} error(s)",
            report.count(ValidationSeverity::Error)
        );
        1
    } else {
        println!("validation passed: {}", out_dir.display());
        0
    }
}
