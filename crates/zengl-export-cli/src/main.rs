use std::fs;
use std::path::Path;

use anyhow::{Context as _, Result};
use clap::Parser;
use log::info;
use serde::Serialize;
use zengl_export::context::ContextSummary;
use zengl_export::dump::{self, BlitSource, DumpOptions};
use zengl_export::logging::{init_logging, LoggingConfig};
use zengl_export::snapshot::{Loaded, Snapshot};

mod cli;

use cli::{Cli, Commands};

fn load(path: &Path) -> Result<Loaded> {
    let text = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let snapshot = Snapshot::from_json(&text).with_context(|| format!("parsing {}", path.display()))?;
    snapshot.build().with_context(|| format!("building context from {}", path.display()))
}

#[derive(Serialize)]
struct InspectReport<'a> {
    snapshot: &'a Path,
    #[serde(flatten)]
    summary: ContextSummary,
}

fn run_dump(
    snapshot: &Path,
    output: Option<&Path>,
    no_defaults: bool,
    no_blit: bool,
    blit_source: Option<&str>,
) -> Result<()> {
    let loaded = load(snapshot)?;

    let blit_source = blit_source
        .map(|name| -> Result<BlitSource> {
            let image = loaded.image(name)?;
            Ok(BlitSource::for_image(&loaded.context, image)?)
        })
        .transpose()
        .context("resolving --blit-source")?;

    let options = DumpOptions { include_defaults: !no_defaults, include_blit: !no_blit, blit_source };
    let dump = dump::dump(&loaded.context, &options);

    match output {
        Some(path) => {
            fs::write(path, &dump.text).with_context(|| format!("writing {}", path.display()))?;
            info!("wrote {} calls to {}", dump.stats.calls, path.display());
        }
        None => print!("{}", dump.text),
    }
    Ok(())
}

fn run_inspect(snapshot: &Path, json: bool) -> Result<()> {
    let summary = load(snapshot)?.context.summary();

    if json {
        let report = InspectReport { snapshot, summary };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("buffers:       {}", summary.buffers);
    println!("images:        {}", summary.images);
    println!("samplers:      {}", summary.samplers);
    println!("framebuffers:  {}", summary.framebuffers);
    println!("vertex arrays: {}", summary.vertex_arrays);
    println!("shaders:       {}", summary.shaders);
    println!("programs:      {}", summary.programs);
    println!("pipelines:     {}", summary.pipelines);
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(LoggingConfig {
        env_filter: cli.log_level.clone(),
        write_style: cli.color.into(),
        ..LoggingConfig::default()
    });

    match cli.command {
        Commands::Dump { snapshot, output, no_defaults, no_blit, blit_source } => {
            run_dump(&snapshot, output.as_deref(), no_defaults, no_blit, blit_source.as_deref())
        }
        Commands::Inspect { snapshot, json } => run_inspect(&snapshot, json),
    }
}
