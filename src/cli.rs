use crate::config::{Config, load_config};
use crate::ir::{Direction, MindmapDocument};
use crate::layout::{
    DefaultDimensions, DimensionResolver, LayoutResult, TextDimensions, perform_complete_layout,
    try_perform_complete_layout,
};
use crate::layout_dump::write_layout_dump;
use anyhow::{Context, Result};
use clap::{ArgAction, Parser, ValueEnum};
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use tracing::Level;

#[derive(Parser, Debug)]
#[command(name = "mmlayout", version, about = "Mind-map tree layout (LR, RL, TB, BT, radial)")]
pub struct Args {
    /// Input document (.json) or '-' for stdin
    #[arg(short = 'i', long = "input")]
    pub input: Option<PathBuf>,

    /// Output file for the laid-out document. Defaults to stdout.
    #[arg(short = 'o', long = "output")]
    pub output: Option<PathBuf>,

    /// Config JSON/JSON5 file (layout constants and text measurement)
    #[arg(short = 'c', long = "configFile")]
    pub config: Option<PathBuf>,

    /// Layout direction; overrides the document's own
    #[arg(short = 'd', long = "direction", value_enum)]
    pub direction: Option<DirectionArg>,

    /// Root node id; overrides the document's own
    #[arg(short = 'r', long = "root")]
    pub root: Option<String>,

    /// Reject documents whose edges and parentId disagree
    #[arg(long = "strict")]
    pub strict: bool,

    /// Size nodes from their label text instead of fixed defaults
    #[arg(long = "measureText")]
    pub measure_text: bool,

    /// Also write a compact layout summary to this path
    #[arg(long = "dump")]
    pub dump: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirectionArg {
    Lr,
    Rl,
    Tb,
    Bt,
    Rd,
}

impl From<DirectionArg> for Direction {
    fn from(arg: DirectionArg) -> Self {
        match arg {
            DirectionArg::Lr => Direction::LeftRight,
            DirectionArg::Rl => Direction::RightLeft,
            DirectionArg::Tb => Direction::TopBottom,
            DirectionArg::Bt => Direction::BottomTop,
            DirectionArg::Rd => Direction::Radial,
        }
    }
}

pub fn run() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);
    let config = load_config(args.config.as_deref())?;

    let input = read_input(args.input.as_deref())?;
    let mut document: MindmapDocument =
        serde_json::from_str(&input).context("failed to parse mind map document")?;

    let layout = layout_document(&document, &args, &config)?;
    let direction = effective_direction(&document, &args);
    if let Some(path) = args.dump.as_deref() {
        write_layout_dump(path, &layout, direction)
            .with_context(|| format!("failed to write layout dump {}", path.display()))?;
    }

    if let Some(root) = &args.root {
        document.root_id = root.clone();
    }
    document.direction = Some(direction);
    document.nodes = layout.nodes;
    document.edges = layout.edges;
    write_output(&document, args.output.as_deref())
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    // A subscriber may already be installed when embedded; keep that one.
    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}

fn effective_direction(document: &MindmapDocument, args: &Args) -> Direction {
    args.direction
        .map(Direction::from)
        .or(document.direction)
        .unwrap_or_default()
}

fn layout_document(document: &MindmapDocument, args: &Args, config: &Config) -> Result<LayoutResult> {
    let root_id = args.root.as_deref().unwrap_or(&document.root_id);
    let direction = effective_direction(document, args);
    let text;
    let fixed;
    let resolver: &dyn DimensionResolver = if args.measure_text {
        text = TextDimensions::new(config.measure.clone());
        &text
    } else {
        fixed = DefaultDimensions::from_constants(&config.layout);
        &fixed
    };

    if args.strict {
        let layout = try_perform_complete_layout(
            &document.nodes,
            &document.edges,
            root_id,
            direction,
            &config.layout,
            resolver,
        )?;
        return Ok(layout);
    }
    Ok(perform_complete_layout(
        &document.nodes,
        &document.edges,
        root_id,
        direction,
        &config.layout,
        resolver,
    ))
}

fn read_input(path: Option<&Path>) -> Result<String> {
    if let Some(path) = path
        && path != Path::new("-")
    {
        return std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()));
    }
    let mut buf = String::new();
    io::stdin().read_to_string(&mut buf)?;
    Ok(buf)
}

fn write_output(document: &MindmapDocument, output: Option<&Path>) -> Result<()> {
    let json = serde_json::to_string_pretty(document)?;
    match output {
        Some(path) => std::fs::write(path, json)
            .with_context(|| format!("failed to write {}", path.display()))?,
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(json.as_bytes())?;
            stdout.write_all(b"\n")?;
        }
    }
    Ok(())
}
