//! Main workflow orchestration logic
//!
//! Kept apart from `main.rs` so the workflow can be called programmatically
//! without depending on clap.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::info;

use crate::config::{Config, ReleaseOrder};
use crate::domain::ReleaseAggregate;
use crate::ingest::{self, Ingested};
use crate::layout::LayoutBuilder;
use crate::scene::{Scene, SceneBuilder};
use crate::ui;

/// Maximum number of ingestion warnings printed individually
const WARNING_DISPLAY_LIMIT: usize = 10;

/// Where the review table comes from
#[derive(Debug, Clone, PartialEq)]
pub enum InputSource {
    File(PathBuf),
    /// The bundled sample table
    Demo,
}

/// Arguments for the render workflow
///
/// Mirrors the CLI Args in a form the workflow can use without clap.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderWorkflowArgs {
    pub input: InputSource,

    /// Write the scene JSON here
    pub output: Option<PathBuf>,

    /// Print the scene JSON to stdout instead of the summary
    pub json: bool,

    /// Overrides `layout.order` from the configuration
    pub order: Option<ReleaseOrder>,

    /// Seed for reproducible leaf jitter
    pub seed: Option<u64>,

    /// Overwrite an existing output file without asking
    pub force: bool,

    /// Only list the releases in processing order
    pub list_releases: bool,
}

/// Result of a successful workflow run
#[derive(Debug, Clone, PartialEq)]
pub struct WorkflowResult {
    pub reviews: usize,
    pub warnings: usize,
    pub aggregates: Vec<ReleaseAggregate>,

    /// None when only listing releases
    pub scene: Option<Scene>,

    /// Output file actually written
    pub written: Option<PathBuf>,
}

fn load_input(source: &InputSource, config: &Config) -> Result<Ingested> {
    match source {
        InputSource::File(path) => ingest::load_reviews(path, &config.input)
            .with_context(|| format!("Failed to read reviews from '{}'", path.display())),
        InputSource::Demo => {
            ingest::sample_reviews(&config.input).context("Failed to read the sample reviews")
        }
    }
}

/// Main render workflow
///
/// 1. Read the review table
/// 2. Classify and aggregate reviews per release
/// 3. Build the scene description
/// 4. Print the summary or JSON, and optionally write the scene to a file
pub fn run_workflow(args: RenderWorkflowArgs, mut config: Config) -> Result<WorkflowResult> {
    if let Some(order) = args.order {
        config.layout.order = order;
    }

    let ingested = load_input(&args.input, &config)?;
    let quiet = args.json;
    if !quiet {
        ui::display_ingest_warnings(&ingested.warnings, WARNING_DISPLAY_LIMIT);
    }

    let aggregates = LayoutBuilder::from_config(&config).build_layout(&ingested.records);
    info!(
        reviews = ingested.records.len(),
        releases = aggregates.len(),
        "classified reviews"
    );

    if args.list_releases {
        ui::display_release_list(&aggregates);
        return Ok(WorkflowResult {
            reviews: ingested.records.len(),
            warnings: ingested.warnings.len(),
            aggregates,
            scene: None,
            written: None,
        });
    }

    let builder = SceneBuilder::new(config.scene.clone());
    let scene = match args.seed {
        Some(seed) => builder.build_seeded(&aggregates, seed),
        None => builder.build_random(&aggregates),
    };

    if args.json {
        println!("{}", scene.to_json()?);
    } else {
        ui::display_release_summary(&scene.title, &aggregates);
        ui::display_legend(&scene.legend);
    }

    let mut written = None;
    if let Some(path) = &args.output {
        if path.exists()
            && !args.force
            && !ui::confirm_action(&format!("Overwrite existing file '{}'?", path.display()))?
        {
            if !quiet {
                ui::display_status("Scene not written.");
            }
        } else {
            fs::write(path, scene.to_json()?)
                .with_context(|| format!("Failed to write scene to '{}'", path.display()))?;
            if !quiet {
                ui::display_success(&format!("Wrote scene to {}", path.display()));
            }
            written = Some(path.clone());
        }
    }

    Ok(WorkflowResult {
        reviews: ingested.records.len(),
        warnings: ingested.warnings.len(),
        aggregates,
        scene: Some(scene),
        written,
    })
}
