use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use release_tree::cli::{run_workflow, InputSource, RenderWorkflowArgs};
use release_tree::config::{self, ReleaseOrder};
use release_tree::{logging, ui, ReleaseTreeError};

fn parse_order(value: &str) -> std::result::Result<ReleaseOrder, String> {
    value.parse().map_err(|e: ReleaseTreeError| e.to_string())
}

#[derive(clap::Parser)]
#[command(
    name = "release-tree",
    version,
    about = "Grow a tree of releases from user review sentiment"
)]
struct Args {
    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<String>,

    #[arg(
        short,
        long,
        help = "CSV file with review rows",
        required_unless_present = "demo",
        conflicts_with = "demo"
    )]
    input: Option<PathBuf>,

    #[arg(long, help = "Use the bundled sample reviews")]
    demo: bool,

    #[arg(short, long, help = "Write the scene description (JSON) to this file")]
    output: Option<PathBuf>,

    #[arg(long, help = "Print the scene description as JSON instead of the summary")]
    json: bool,

    #[arg(
        long,
        value_parser = parse_order,
        help = "Order in which releases get branches (first-appearance, version)"
    )]
    order: Option<ReleaseOrder>,

    #[arg(long, help = "Seed for reproducible leaf placement")]
    seed: Option<u64>,

    #[arg(short, long, help = "Overwrite the output file without asking")]
    force: bool,

    #[arg(long, help = "List releases in branch order and exit")]
    list_releases: bool,

    #[arg(short, long, help = "Enable debug logging")]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Load configuration
    let config = match config::load_config(args.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            ui::display_error(&format!("Error loading config: {}", e));
            std::process::exit(1);
        }
    };

    if let Err(e) = logging::init_logging(&config.logging, args.verbose) {
        ui::display_error(&e.to_string());
    }

    let input = match args.input {
        Some(path) => InputSource::File(path),
        None => InputSource::Demo,
    };

    let workflow_args = RenderWorkflowArgs {
        input,
        output: args.output,
        json: args.json,
        order: args.order,
        seed: args.seed,
        force: args.force,
        list_releases: args.list_releases,
    };

    if let Err(e) = run_workflow(workflow_args, config) {
        ui::display_error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}
