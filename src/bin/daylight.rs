use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "daylight", version)]
struct Cli {
    /// Engine config JSON (defaults apply when omitted).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the derived values for a timeline value as JSON.
    Info(InfoArgs),
    /// Snap a raw slider position (0..100) to its nearest anchor.
    Snap(SnapArgs),
    /// Print the clock and percent labels for a scroll progress value.
    Clock(ClockArgs),
    /// Cross-fade a day and night image at a timeline value into a PNG.
    Blend(BlendArgs),
}

#[derive(Parser, Debug)]
struct InfoArgs {
    /// Timeline value in [0, 1]; defaults to the config's initial value.
    #[arg(long = "t")]
    t: Option<f64>,
}

#[derive(Parser, Debug)]
struct SnapArgs {
    /// Raw slider position in [0, 100].
    #[arg(long)]
    raw: f64,

    /// Slider variant; defaults to the config's variant.
    #[arg(long, value_enum)]
    variant: Option<VariantChoice>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum VariantChoice {
    Labeled,
    Compact,
}

impl From<VariantChoice> for daylight::SliderVariant {
    fn from(v: VariantChoice) -> Self {
        match v {
            VariantChoice::Labeled => Self::Labeled,
            VariantChoice::Compact => Self::Compact,
        }
    }
}

#[derive(Parser, Debug)]
struct ClockArgs {
    /// Scroll progress in [0, 1].
    #[arg(long)]
    progress: f64,
}

#[derive(Parser, Debug)]
struct BlendArgs {
    /// Day image.
    #[arg(long)]
    day: Option<PathBuf>,

    /// Night image.
    #[arg(long)]
    night: Option<PathBuf>,

    /// Timeline value in [0, 1]; defaults to the config's initial value.
    #[arg(long = "t")]
    t: Option<f64>,

    /// Output width; the configured sizing decides the height. Defaults to the day image's
    /// width (then the night image's, then 640).
    #[arg(long)]
    width: Option<f64>,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = read_config(cli.config.as_deref())?;
    match cli.cmd {
        Command::Info(args) => cmd_info(&config, args),
        Command::Snap(args) => cmd_snap(&config, args),
        Command::Clock(args) => cmd_clock(args),
        Command::Blend(args) => cmd_blend(&config, args),
    }
}

fn read_config(path: Option<&Path>) -> anyhow::Result<daylight::EngineConfig> {
    let Some(path) = path else {
        return Ok(daylight::EngineConfig::default());
    };
    daylight::EngineConfig::from_path(path)
        .with_context(|| format!("load config '{}'", path.display()))
}

fn cmd_info(config: &daylight::EngineConfig, args: InfoArgs) -> anyhow::Result<()> {
    let state = config.build_state();
    if let Some(t) = args.t {
        state.set_timeline(t);
    }
    let anchor = daylight::nearest_anchor(state.timeline());
    let out = serde_json::json!({
        "snapshot": state.snapshot(),
        "theme": state.theme().name,
        "anchor": {
            "label": anchor.hour_label,
            "icon": anchor.icon.name(),
        },
    });
    println!("{}", serde_json::to_string_pretty(&out)?);
    Ok(())
}

fn cmd_snap(config: &daylight::EngineConfig, args: SnapArgs) -> anyhow::Result<()> {
    let state = config.build_state();
    let scope = daylight::Scope::provide(state.clone());
    let mut config = config.clone();
    if let Some(v) = args.variant {
        config.slider.variant = v.into();
    }
    let mut slider = config.build_slider(&scope)?;
    let value = slider.commit_raw(args.raw);
    let anchor = slider.active_anchor();
    let mark = match slider.variant() {
        daylight::SliderVariant::Labeled => anchor.hour_label,
        daylight::SliderVariant::Compact => anchor.icon.name(),
    };
    println!(
        "{value} {mark} {}",
        if state.is_dark_mode() { "dark" } else { "light" }
    );
    Ok(())
}

fn cmd_clock(args: ClockArgs) -> anyhow::Result<()> {
    println!(
        "{} {}",
        daylight::clock_label(args.progress),
        daylight::percent_label(args.progress)
    );
    Ok(())
}

fn cmd_blend(config: &daylight::EngineConfig, args: BlendArgs) -> anyhow::Result<()> {
    let state = config.build_state();
    if let Some(t) = args.t {
        state.set_timeline(t);
    }
    let scope = daylight::Scope::provide(state);

    let day_src = args
        .day
        .as_deref()
        .map(daylight::ImageSource::probe)
        .transpose()?;
    let night_src = args
        .night
        .as_deref()
        .map(daylight::ImageSource::probe)
        .transpose()?;
    let blend = config.build_blend(&scope, day_src, night_src)?;

    let day = load_layer(args.day.as_deref())?;
    let night = load_layer(args.night.as_deref())?;

    let width = args.width.unwrap_or_else(|| {
        day.as_ref()
            .or(night.as_ref())
            .map_or(640.0, |img| f64::from(img.width))
    });
    let footprint = blend.footprint_size(width);
    let size = (
        footprint.width.round().max(1.0) as u32,
        footprint.height.round().max(1.0) as u32,
    );
    let weights = blend.weights();
    let img = daylight::blend_images(day.as_ref(), night.as_ref(), weights, size)?;

    if let Some(parent) = args.out.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    daylight::save_png(&img, &args.out)
        .with_context(|| format!("write png '{}'", args.out.display()))?;

    eprintln!(
        "wrote {} (day {:.3}, night {:.3})",
        args.out.display(),
        weights.day,
        weights.night
    );
    Ok(())
}

fn load_layer(path: Option<&Path>) -> anyhow::Result<Option<daylight::PremulImage>> {
    path.map(|p| {
        daylight::load_image(p).with_context(|| format!("load image '{}'", p.display()))
    })
    .transpose()
}
