use std::fs::File;
use std::io::{BufWriter, Write as _};
use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};
use scenereel::{
    Canvas, EnterAnimation, FrameContext, FrameIndex, JsonLinesSink, RenderConfig, RenderOpts,
    SceneData, SceneMode, ScenePropsFile,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "scenereel", version)]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Args, Debug)]
struct GlobalArgs {
    /// Render config JSON (fps, canvas, camera presets, overlay theme).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Override the frame rate.
    #[arg(long, global = true)]
    fps: Option<u32>,

    /// Override the canvas width.
    #[arg(long, global = true)]
    width: Option<u32>,

    /// Override the canvas height.
    #[arg(long, global = true)]
    height: Option<u32>,

    /// Reject malformed scenes instead of rendering them with defaults.
    #[arg(long, global = true, default_value_t = false)]
    strict: bool,

    /// Debug logging (otherwise `RUST_LOG` decides).
    #[arg(short, long, global = true, default_value_t = false)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Resolve a single frame and print it as JSON.
    Frame(FrameArgs),
    /// Resolve every frame into a JSON-lines file.
    Render(RenderArgs),
    /// Summarize a scene without rendering it.
    Inspect(InspectArgs),
}

#[derive(Args, Debug)]
struct FrameArgs {
    /// Input props JSON (`{scene, width, height}` or a bare scene).
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Frame index (0-based).
    #[arg(long)]
    frame: u64,
}

#[derive(Args, Debug)]
struct RenderArgs {
    /// Input props JSON (`{scene, width, height}` or a bare scene).
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output JSON-lines path.
    #[arg(long)]
    out: PathBuf,

    /// Enable frame-level parallelism.
    #[arg(long, default_value_t = false)]
    parallel: bool,

    /// Override rayon worker threads (parallel mode only).
    #[arg(long)]
    threads: Option<usize>,

    /// Frames resolved per batch.
    #[arg(long, default_value_t = 64)]
    chunk_size: usize,

    /// Count static frames within chunks.
    #[arg(long, default_value_t = false)]
    static_frame_elision: bool,
}

#[derive(Args, Debug)]
struct InspectArgs {
    /// Input props JSON (`{scene, width, height}` or a bare scene).
    #[arg(long = "in")]
    in_path: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.global.verbose);
    match cli.cmd {
        Command::Frame(args) => cmd_frame(&cli.global, args),
        Command::Render(args) => cmd_render(&cli.global, args),
        Command::Inspect(args) => cmd_inspect(&cli.global, args),
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("scenereel=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("scenereel=info"))
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Scene plus the config and canvas it renders with, after every override is applied.
struct Loaded {
    scene: SceneData,
    config: RenderConfig,
}

impl Loaded {
    fn ctx(&self) -> FrameContext<'_> {
        FrameContext::new(&self.config)
    }
}

fn load(global: &GlobalArgs, in_path: &Path) -> anyhow::Result<Loaded> {
    let mut config = match &global.config {
        Some(path) => RenderConfig::from_path(path)
            .with_context(|| format!("load config '{}'", path.display()))?,
        None => RenderConfig::default(),
    };

    let props = ScenePropsFile::from_path(in_path)
        .with_context(|| format!("load scene '{}'", in_path.display()))?;
    if global.strict {
        props
            .scene
            .validate()
            .with_context(|| format!("strict check of '{}'", in_path.display()))?;
    }

    let canvas = props.canvas_or(config.canvas)?;
    config.canvas = Canvas::new(
        global.width.unwrap_or(canvas.width),
        global.height.unwrap_or(canvas.height),
    )
    .context("canvas override")?;
    if let Some(fps) = global.fps {
        config.fps = scenereel::Fps::integer(fps).context("fps override")?;
    }

    Ok(Loaded {
        scene: props.scene,
        config,
    })
}

fn cmd_frame(global: &GlobalArgs, args: FrameArgs) -> anyhow::Result<()> {
    let loaded = load(global, &args.in_path)?;
    let frame = scenereel::render_frame(&loaded.scene, FrameIndex(args.frame), &loaded.ctx())?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    serde_json::to_writer_pretty(&mut out, &frame).context("write frame JSON")?;
    writeln!(out).context("write frame JSON")?;
    Ok(())
}

fn cmd_render(global: &GlobalArgs, args: RenderArgs) -> anyhow::Result<()> {
    let loaded = load(global, &args.in_path)?;

    if let Some(parent) = args.out.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    let file = File::create(&args.out)
        .with_context(|| format!("create output '{}'", args.out.display()))?;
    let mut sink = JsonLinesSink::new(BufWriter::new(file));

    let opts = RenderOpts {
        parallel: args.parallel,
        chunk_size: args.chunk_size,
        threads: args.threads,
        static_frame_elision: args.static_frame_elision,
    };
    let stats = scenereel::render_scene(&loaded.scene, &loaded.ctx(), &opts, &mut sink)
        .with_context(|| format!("render '{}'", args.in_path.display()))?;

    tracing::info!(
        out = %args.out.display(),
        frames_total = stats.frames_total,
        frames_rendered = stats.frames_rendered,
        frames_elided = stats.frames_elided,
        "render stats"
    );
    Ok(())
}

fn cmd_inspect(global: &GlobalArgs, args: InspectArgs) -> anyhow::Result<()> {
    let loaded = load(global, &args.in_path)?;
    let scene = &loaded.scene;
    let fps = loaded.config.fps;
    let mode = if scene.is_overlay_mode() {
        SceneMode::Overlay
    } else {
        SceneMode::Elements
    };
    let curves: Vec<EnterAnimation> = match mode {
        SceneMode::Overlay => Vec::new(),
        SceneMode::Elements => scene.elements.iter().map(|e| e.animation.enter).collect(),
    };

    let summary = serde_json::json!({
        "sceneNumber": scene.scene_number,
        "mode": mode,
        "duration": scene.duration,
        "fps": fps,
        "totalFrames": scenereel::total_frames(scene, fps),
        "canvas": loaded.config.canvas,
        "background": scene.background,
        "cameraMotion": scene.camera_motion(),
        "animationRange": [scene.animation_start, scene.animation_end],
        "elements": curves,
        "droppedElements": if mode == SceneMode::Overlay { scene.elements.len() } else { 0 },
        "subtitle": scene.subtitle(),
    });
    println!(
        "{}",
        serde_json::to_string_pretty(&summary).context("write summary JSON")?
    );
    Ok(())
}
