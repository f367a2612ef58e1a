use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use rayon::prelude::*;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use backdrop::{
    Canvas, Color, CustomPaletteStore, PRESETS, RenderRequest, RenderSettings, ShareConfig,
    TEMPLATES, TemplateId, WaveParams,
};

#[derive(Parser, Debug)]
#[command(name = "backdrop", version, about = "Render 4K wallpapers from color palettes")]
struct Cli {
    /// Log at debug level unless RUST_LOG says otherwise.
    #[arg(long, short, global = true)]
    verbose: bool,

    /// Custom palette file. Defaults to $BACKDROP_PALETTE_PATH or ./backdrop-custom-palette.json.
    #[arg(long, global = true)]
    store: Option<PathBuf>,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render one wallpaper as a PNG.
    Render(RenderArgs),
    /// List templates.
    Templates,
    /// List palettes, including the saved custom palette.
    Palettes,
    /// Print a share query for a configuration.
    Share(ShareArgs),
    /// Render every template for one palette, in parallel.
    Gallery(GalleryArgs),
    /// Manage the custom palette.
    #[command(subcommand)]
    Palette(PaletteCommand),
}

#[derive(Parser, Debug)]
struct PaletteArgs {
    /// Palette id (see `backdrop palettes`), or `custom`.
    #[arg(long, conflicts_with = "colors")]
    palette: Option<String>,

    /// Comma-separated colors, `#RRGGBB` or `RRGGBB`.
    #[arg(long, value_delimiter = ',', value_parser = parse_color_arg)]
    colors: Vec<Color>,
}

#[derive(Parser, Debug)]
struct WaveArgs {
    /// Wave crests, 1-8. Only used by templates with wave settings.
    #[arg(long)]
    wave_count: Option<u32>,

    /// Wave amplitude in percent, 10-100.
    #[arg(long)]
    amplitude: Option<u32>,
}

#[derive(Parser, Debug)]
struct SizeArgs {
    #[arg(long, default_value_t = Canvas::UHD.width)]
    width: u32,

    #[arg(long, default_value_t = Canvas::UHD.height)]
    height: u32,
}

#[derive(Parser, Debug)]
struct RenderArgs {
    /// Template id (see `backdrop templates`).
    #[arg(long, required_unless_present_any = ["config", "share"])]
    template: Option<TemplateId>,

    #[command(flatten)]
    palette: PaletteArgs,

    #[command(flatten)]
    waves: WaveArgs,

    #[command(flatten)]
    size: SizeArgs,

    /// Render request JSON; overrides palette, template and wave flags.
    #[arg(long, conflicts_with = "share")]
    config: Option<PathBuf>,

    /// Share query string; overrides palette, template and wave flags.
    #[arg(long)]
    share: Option<String>,

    /// Output PNG path. Defaults to `wallpaper-<template>.png`.
    #[arg(long)]
    out: Option<PathBuf>,

    /// Leave pixels transparent where a template draws nothing.
    #[arg(long)]
    transparent: bool,

    /// Print the frame fingerprint.
    #[arg(long)]
    digest: bool,
}

#[derive(Parser, Debug)]
struct ShareArgs {
    #[arg(long)]
    template: TemplateId,

    #[command(flatten)]
    palette: PaletteArgs,

    #[command(flatten)]
    waves: WaveArgs,
}

#[derive(Parser, Debug)]
struct GalleryArgs {
    #[command(flatten)]
    palette: PaletteArgs,

    #[command(flatten)]
    waves: WaveArgs,

    #[command(flatten)]
    size: SizeArgs,

    /// Output directory.
    #[arg(long, default_value = ".")]
    out_dir: PathBuf,

    /// Worker threads. Defaults to the number of CPUs.
    #[arg(long)]
    threads: Option<usize>,
}

#[derive(Subcommand, Debug)]
enum PaletteCommand {
    /// Save the custom palette (at least 3 colors).
    Save {
        #[arg(required = true, value_delimiter = ',', value_parser = parse_color_arg)]
        colors: Vec<Color>,
    },
    /// Print the custom palette.
    Show,
    /// Delete the custom palette.
    Delete,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let store = cli
        .store
        .clone()
        .map(CustomPaletteStore::new)
        .unwrap_or_else(CustomPaletteStore::from_env);

    match cli.cmd {
        Command::Render(args) => cmd_render(args, &store),
        Command::Templates => cmd_templates(),
        Command::Palettes => cmd_palettes(&store),
        Command::Share(args) => cmd_share(args, &store),
        Command::Gallery(args) => cmd_gallery(args, &store),
        Command::Palette(cmd) => cmd_palette(cmd, &store),
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn parse_color_arg(s: &str) -> Result<Color, String> {
    let s = s.trim();
    let parsed = if s.starts_with('#') {
        Color::from_hex(s)
    } else {
        Color::from_bare_hex(s)
    };
    parsed.map_err(|e| e.to_string())
}

fn settings(transparent: bool) -> RenderSettings {
    RenderSettings {
        clear_rgba: (!transparent).then_some([18, 20, 28, 255]),
    }
}

fn resolve_colors(args: &PaletteArgs, store: &CustomPaletteStore) -> anyhow::Result<Vec<Color>> {
    if !args.colors.is_empty() {
        return Ok(args.colors.clone());
    }
    let id = args.palette.as_deref().unwrap_or(PRESETS[0].id);
    Ok(backdrop::resolve_palette(id, store)?.colors)
}

fn resolve_waves(args: &WaveArgs) -> anyhow::Result<Option<WaveParams>> {
    if args.wave_count.is_none() && args.amplitude.is_none() {
        return Ok(None);
    }
    let d = WaveParams::default();
    let waves = WaveParams::new(
        args.wave_count.unwrap_or(d.wave_count),
        args.amplitude.unwrap_or(d.amplitude),
    )?;
    Ok(Some(waves))
}

fn read_request_json(path: &Path) -> anyhow::Result<RenderRequest> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("open render config '{}'", path.display()))?;
    RenderRequest::from_json_str(&text).with_context(|| "parse render config JSON")
}

fn cmd_render(args: RenderArgs, store: &CustomPaletteStore) -> anyhow::Result<()> {
    let canvas = Canvas::new(args.size.width, args.size.height)?;
    let request = if let Some(path) = &args.config {
        read_request_json(path)?
    } else if let Some(query) = &args.share {
        ShareConfig::from_query(query)?.to_request(store)?.with_canvas(canvas)
    } else {
        let template = args
            .template
            .context("--template is required without --config or --share")?;
        RenderRequest {
            colors: resolve_colors(&args.palette, store)?,
            template,
            waves: resolve_waves(&args.waves)?,
            canvas,
        }
    };

    let frame = backdrop::render(&request, &settings(args.transparent))?;
    let out = args
        .out
        .unwrap_or_else(|| PathBuf::from(backdrop::render::default_output_name(request.template)));
    frame.save_png(&out)?;
    tracing::info!(template = %request.template, path = %out.display(), "rendered wallpaper");

    if args.digest {
        println!("{}", backdrop::fingerprint_frame(&frame));
    }
    eprintln!("wrote {}", out.display());
    Ok(())
}

fn cmd_templates() -> anyhow::Result<()> {
    for t in &TEMPLATES {
        let waves = if t.supports_wave_settings { "  [waves]" } else { "" };
        println!(
            "{:<22} {:<24} min {}{}  {}",
            t.id.as_str(),
            t.name,
            t.min_colors,
            waves,
            t.description
        );
    }
    Ok(())
}

fn format_colors(colors: &[Color]) -> String {
    colors
        .iter()
        .map(|c| c.to_hex())
        .collect::<Vec<_>>()
        .join(" ")
}

fn cmd_palettes(store: &CustomPaletteStore) -> anyhow::Result<()> {
    for p in &PRESETS {
        println!("{:<14} {:<16} {}", p.id, p.name, format_colors(p.colors));
    }
    if let Some(colors) = store.load()? {
        println!(
            "{:<14} {:<16} {}",
            backdrop::palette::CUSTOM_PALETTE_ID,
            "Custom Palette",
            format_colors(&colors)
        );
    }
    Ok(())
}

fn cmd_share(args: ShareArgs, store: &CustomPaletteStore) -> anyhow::Result<()> {
    let palette = if !args.palette.colors.is_empty() {
        backdrop::PaletteRef::Colors(args.palette.colors.clone())
    } else if let Some(id) = &args.palette.palette {
        // Fail early on ids the receiver could not resolve.
        backdrop::resolve_palette(id, store)?;
        backdrop::PaletteRef::Id(id.clone())
    } else {
        anyhow::bail!("pass --palette or --colors");
    };
    let cfg = ShareConfig {
        palette,
        template: args.template,
        waves: resolve_waves(&args.waves)?,
    };
    println!("?{}", cfg.to_query());
    Ok(())
}

fn cmd_gallery(args: GalleryArgs, store: &CustomPaletteStore) -> anyhow::Result<()> {
    let canvas = Canvas::new(args.size.width, args.size.height)?;
    let colors = resolve_colors(&args.palette, store)?;
    let waves = resolve_waves(&args.waves)?;
    std::fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("create output dir '{}'", args.out_dir.display()))?;

    let mut pool = rayon::ThreadPoolBuilder::new();
    if let Some(n) = args.threads {
        pool = pool.num_threads(n.max(1));
    }
    let pool = pool.build().context("build render thread pool")?;

    let settings = settings(false);
    let written: Vec<PathBuf> = pool.install(|| {
        TEMPLATES
            .par_iter()
            .filter(|t| t.accepts(&colors))
            .map(|t| -> anyhow::Result<PathBuf> {
                let request = RenderRequest {
                    colors: colors.clone(),
                    template: t.id,
                    waves,
                    canvas,
                };
                let frame = backdrop::render(&request, &settings)?;
                let out = args
                    .out_dir
                    .join(backdrop::render::default_output_name(t.id));
                frame.save_png(&out)?;
                Ok(out)
            })
            .collect::<anyhow::Result<Vec<_>>>()
    })?;

    for path in &written {
        eprintln!("wrote {}", path.display());
    }
    let skipped = TEMPLATES.len() - written.len();
    if skipped > 0 {
        eprintln!("skipped {skipped} template(s) needing more colors");
    }
    Ok(())
}

fn cmd_palette(cmd: PaletteCommand, store: &CustomPaletteStore) -> anyhow::Result<()> {
    match cmd {
        PaletteCommand::Save { colors } => {
            store.save(&colors)?;
            eprintln!("saved {} colors to {}", colors.len(), store.path().display());
        }
        PaletteCommand::Show => match store.load()? {
            Some(colors) => println!("{}", format_colors(&colors)),
            None => eprintln!("no custom palette at {}", store.path().display()),
        },
        PaletteCommand::Delete => {
            if store.delete()? {
                eprintln!("deleted {}", store.path().display());
            } else {
                eprintln!("no custom palette at {}", store.path().display());
            }
        }
    }
    Ok(())
}
