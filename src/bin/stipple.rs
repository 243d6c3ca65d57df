use std::{
    io::Write as _,
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use stipple::{
    BoundingBox, CacheKey, CloudOrigin, FilterColor, ImageMobject, ImageOpts, PointCloud, Preset,
    source_identity,
};

#[derive(Parser, Debug)]
#[command(name = "stipple", version)]
struct Cli {
    /// Log cache hits, misses and conversion details to stderr.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Convert an image (path or identifier under --image-dir) into a point cloud.
    Convert(ConvertArgs),
    /// Convert a built-in preset image (`face`, `face:<mode>`, `video_icon`).
    Preset(PresetArgs),
    /// Print the cache key for an image path.
    CacheKey(CacheKeyArgs),
}

#[derive(Parser, Debug)]
struct ConvertArgs {
    /// Image path or identifier.
    identifier: String,

    #[command(flatten)]
    common: CommonArgs,
}

#[derive(Parser, Debug)]
struct PresetArgs {
    /// Preset name.
    preset: Preset,

    #[command(flatten)]
    common: CommonArgs,
}

#[derive(Args, Debug)]
struct CommonArgs {
    /// Options JSON; command-line flags override its fields.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Directory searched for bare identifiers.
    #[arg(long)]
    image_dir: Option<PathBuf>,

    /// Point cache directory.
    #[arg(long)]
    cache_dir: Option<PathBuf>,

    /// Background color to drop (name, #RRGGBB).
    #[arg(long)]
    filter_color: Option<FilterColor>,

    /// Do not invert colors before filtering.
    #[arg(long, default_value_t = false)]
    no_invert: bool,

    /// Neither read nor write the point cache.
    #[arg(long, default_value_t = false)]
    no_cache: bool,

    /// Uniform scale applied after conversion.
    #[arg(long)]
    scale: Option<f64>,

    /// Mark the cloud for persistent buffering by renderers.
    #[arg(long, default_value_t = false)]
    buffer_points: bool,

    /// Output JSON path (stdout when omitted).
    #[arg(long)]
    out: Option<PathBuf>,

    /// Include every position and color in the output.
    #[arg(long, default_value_t = false)]
    full: bool,
}

#[derive(Parser, Debug)]
struct CacheKeyArgs {
    /// Image path.
    path: PathBuf,

    /// Key for the non-inverted conversion.
    #[arg(long, default_value_t = false)]
    no_invert: bool,
}

#[derive(Serialize)]
struct Summary<'a> {
    name: &'a str,
    source: String,
    cache_key: String,
    origin: CloudOrigin,
    points: usize,
    bounding_box: Option<BoundingBox>,
    #[serde(skip_serializing_if = "Option::is_none")]
    cloud: Option<&'a PointCloud>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(if cli.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::WARN
        })
        .init();

    match cli.cmd {
        Command::Convert(args) => cmd_convert(args),
        Command::Preset(args) => cmd_preset(args),
        Command::CacheKey(args) => cmd_cache_key(args),
    }
}

fn cmd_convert(args: ConvertArgs) -> anyhow::Result<()> {
    let opts = build_opts(&args.common, None)?;
    let mob = ImageMobject::new(&args.identifier, &opts)?;
    emit(&mob, &args.common)
}

fn cmd_preset(args: PresetArgs) -> anyhow::Result<()> {
    let opts = build_opts(&args.common, Some(args.preset))?;
    let mob = ImageMobject::new(&args.preset.identifier(), &opts)?;
    emit(&mob, &args.common)
}

fn cmd_cache_key(args: CacheKeyArgs) -> anyhow::Result<()> {
    let key = CacheKey::new(&source_identity(&args.path), !args.no_invert);
    println!("{key}");
    Ok(())
}

fn build_opts(common: &CommonArgs, preset: Option<Preset>) -> anyhow::Result<ImageOpts> {
    let mut opts = match &common.config {
        Some(path) => ImageOpts::from_path(path)?,
        None => ImageOpts::default(),
    };
    if let Some(preset) = preset {
        opts = preset.apply(opts);
    }
    if let Some(dir) = &common.image_dir {
        opts.image_dir = dir.clone();
    }
    if let Some(dir) = &common.cache_dir {
        opts.cache_dir = dir.clone();
    }
    if let Some(color) = common.filter_color {
        opts.filter_color = color;
    }
    if let Some(scale) = common.scale {
        opts.scale_value = scale;
    }
    if common.no_invert {
        opts.invert = false;
    }
    if common.no_cache {
        opts.use_cache = false;
    }
    if common.buffer_points {
        opts.should_buffer_points = true;
    }
    opts.validate()?;
    Ok(opts)
}

fn emit(mob: &ImageMobject, common: &CommonArgs) -> anyhow::Result<()> {
    let summary = Summary {
        name: mob.name(),
        source: mob.source().display().to_string(),
        cache_key: mob.cache_key().to_hex(),
        origin: mob.origin(),
        points: mob.cloud().len(),
        bounding_box: mob.cloud().bounding_box(),
        cloud: common.full.then(|| mob.cloud()),
    };

    match &common.out {
        Some(path) => write_json(path, &summary)?,
        None => {
            let mut stdout = std::io::stdout().lock();
            serde_json::to_writer_pretty(&mut stdout, &summary).context("write summary")?;
            writeln!(stdout).context("write summary")?;
        }
    }
    Ok(())
}

fn write_json(path: &Path, summary: &Summary<'_>) -> anyhow::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    let f = std::fs::File::create(path)
        .with_context(|| format!("create output '{}'", path.display()))?;
    serde_json::to_writer_pretty(f, summary)
        .with_context(|| format!("write summary '{}'", path.display()))?;
    eprintln!("wrote {}", path.display());
    Ok(())
}
