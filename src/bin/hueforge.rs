use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};
use hueforge::{
    AspectRatio, DirSink, EntropySource, ExportSink as _, GradientSpec, RandomSource,
    SeededSource, SessionOpts,
};

#[derive(Parser, Debug)]
#[command(name = "hueforge", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the built-in presets.
    Presets,
    /// Print a built-in preset as gradient JSON.
    Preset {
        /// Preset id, e.g. `aurora`.
        id: String,
    },
    /// Print the CSS declaration for a gradient.
    Css(CssArgs),
    /// Export a JPEG at an aspect ratio.
    Raster(ExportArgs),
    /// Export an SVG at an aspect ratio.
    Svg(ExportArgs),
}

#[derive(Args, Debug)]
struct SpecArgs {
    /// Input gradient JSON (defaults to the stock gradient).
    #[arg(long = "in", conflicts_with = "preset")]
    in_path: Option<PathBuf>,

    /// Start from a built-in preset instead of a JSON file.
    #[arg(long)]
    preset: Option<String>,
}

#[derive(Args, Debug)]
struct CssArgs {
    #[command(flatten)]
    spec: SpecArgs,

    /// Print utility classes instead of a CSS declaration.
    #[arg(long, default_value_t = false)]
    utility: bool,
}

#[derive(Args, Debug)]
struct ExportArgs {
    #[command(flatten)]
    spec: SpecArgs,

    /// Aspect ratio, e.g. `16:9`.
    #[arg(long, default_value = "16:9")]
    ratio: String,

    /// Output directory.
    #[arg(long)]
    out_dir: PathBuf,

    /// Seed for noise and turbulence (random when omitted).
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();
    match cli.cmd {
        Command::Presets => cmd_presets(),
        Command::Preset { id } => cmd_preset(&id),
        Command::Css(args) => cmd_css(args),
        Command::Raster(args) => cmd_export(args, false),
        Command::Svg(args) => cmd_export(args, true),
    }
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_env("HUEFORGE_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_spec(args: &SpecArgs) -> anyhow::Result<GradientSpec> {
    if let Some(path) = &args.in_path {
        return GradientSpec::from_path(path)
            .with_context(|| format!("load gradient '{}'", path.display()));
    }
    if let Some(id) = &args.preset {
        let preset =
            hueforge::find_preset(id).with_context(|| format!("unknown preset '{id}'"))?;
        return Ok(preset.to_spec());
    }
    Ok(GradientSpec::default())
}

fn cmd_presets() -> anyhow::Result<()> {
    for p in hueforge::PRESETS {
        println!("{}\t{}", p.id, p.name);
    }
    Ok(())
}

fn cmd_preset(id: &str) -> anyhow::Result<()> {
    let preset = hueforge::find_preset(id).with_context(|| format!("unknown preset '{id}'"))?;
    println!("{}", preset.to_spec().to_json_pretty()?);
    Ok(())
}

fn cmd_css(args: CssArgs) -> anyhow::Result<()> {
    let spec = load_spec(&args.spec)?;
    if args.utility {
        println!("{}", hueforge::to_utility_classes(&spec));
    } else {
        println!("{}", hueforge::to_css_text(&spec));
    }
    Ok(())
}

fn cmd_export(args: ExportArgs, vector: bool) -> anyhow::Result<()> {
    let spec = load_spec(&args.spec)?;
    let ratio: AspectRatio = args
        .ratio
        .parse()
        .with_context(|| format!("parse --ratio '{}'", args.ratio))?;
    let opts = SessionOpts::from_env();

    let mut rng: Box<dyn RandomSource> = match args.seed {
        Some(seed) => Box::new(SeededSource::new(seed)),
        None => Box::new(EntropySource::new()),
    };

    let artifact = if vector {
        hueforge::export_vector(&spec, ratio, &mut rng)
    } else {
        hueforge::export_raster(&spec, ratio, &opts.jpeg, &mut rng)
    }
    .with_context(|| format!("export {ratio}"))?;

    let mut sink = DirSink::new(&args.out_dir);
    sink.deliver(artifact)
        .with_context(|| format!("write into '{}'", args.out_dir.display()))?;
    for path in sink.written() {
        eprintln!("wrote {}", path.display());
    }
    Ok(())
}
