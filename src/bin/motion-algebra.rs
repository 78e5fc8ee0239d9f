use std::{
    cell::RefCell,
    fs::File,
    io::{BufWriter, Write},
    path::PathBuf,
    rc::Rc,
};

use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};
use motion_algebra::{Animation, Ease, Effect, Fps, FrameIndex, Playback, Semiring};

#[derive(Parser, Debug)]
#[command(name = "motion-algebra", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Drive a demo scene and write one JSON object per frame.
    Sample(SampleArgs),
    /// Print a demo scene's duration and frame count.
    Info(InfoArgs),
}

#[derive(Parser, Debug)]
struct SampleArgs {
    /// Scene to drive.
    #[arg(long, value_enum)]
    demo: DemoChoice,

    /// Frames per second used to derive the frame count.
    #[arg(long, default_value_t = 60)]
    fps: u32,

    /// Play the scene this many times back to back.
    #[arg(long, default_value_t = 1)]
    repeat: u32,

    /// Output path (JSON lines). Defaults to stdout.
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct InfoArgs {
    /// Scene to inspect.
    #[arg(long, value_enum)]
    demo: DemoChoice,

    /// Frames per second used to derive the frame count.
    #[arg(long, default_value_t = 60)]
    fps: u32,

    /// Play the scene this many times back to back.
    #[arg(long, default_value_t = 1)]
    repeat: u32,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum DemoChoice {
    /// A square then a circle slide and grow, eased, then play back in reverse.
    Shapes,
    /// A single counter from 0 to 100.
    Counter,
}

#[derive(Clone, Debug, Default, serde::Serialize)]
struct SceneState {
    #[serde(skip_serializing_if = "Option::is_none")]
    circle_x: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    circle_radius: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    square_y: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    square_size: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    counter: Option<i64>,
}

#[derive(serde::Serialize)]
struct FrameRecord<'a> {
    frame: FrameIndex,
    time_s: f64,
    progress: f64,
    state: &'a SceneState,
}

type SharedState = Rc<RefCell<SceneState>>;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Sample(args) => cmd_sample(args),
        Command::Info(args) => cmd_info(args),
    }
}

fn setter(
    state: &SharedState,
    field: fn(&mut SceneState) -> &mut Option<i64>,
) -> impl Fn(i64) + use<> {
    let state = Rc::clone(state);
    move |v| *field(&mut state.borrow_mut()) = Some(v)
}

fn shapes_scene(state: &SharedState) -> anyhow::Result<Effect> {
    let translate_circle =
        Animation::linear(1000.0, 20, 580)?.bind(setter(state, |s| &mut s.circle_x));
    let grow_circle =
        Animation::linear(1000.0, 5, 50)?.bind(setter(state, |s| &mut s.circle_radius));
    let translate_square =
        Animation::linear(1000.0, 20, 380)?.bind(setter(state, |s| &mut s.square_y));
    let grow_square =
        Animation::linear(1000.0, 5, 50)?.bind(setter(state, |s| &mut s.square_size));

    let ease = Ease::InOut(1.5).curve();
    let square = Effect::add(translate_square, grow_square).ease(ease);
    let circle = Effect::add(translate_circle, grow_circle).ease(ease);
    Ok(Effect::mul(square, circle).loop_())
}

fn counter_scene(state: &SharedState) -> anyhow::Result<Effect> {
    Ok(Animation::linear(1000.0, 0, 100)?.bind(setter(state, |s| &mut s.counter)))
}

fn build_scene(demo: DemoChoice, repeat: u32, state: &SharedState) -> anyhow::Result<Effect> {
    let scene = match demo {
        DemoChoice::Shapes => shapes_scene(state)?,
        DemoChoice::Counter => counter_scene(state)?,
    };
    Ok(scene.repeat(repeat)?)
}

fn cmd_sample(args: SampleArgs) -> anyhow::Result<()> {
    let state = SharedState::default();
    let scene = build_scene(args.demo, args.repeat, &state)?;
    let playback = Playback::for_animation(Fps::new(args.fps, 1)?, &scene)?;

    let mut out: Box<dyn Write> = match &args.out {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("create output dir '{}'", parent.display()))?;
            }
            let f = File::create(path)
                .with_context(|| format!("create output '{}'", path.display()))?;
            Box::new(BufWriter::new(f))
        }
        None => Box::new(BufWriter::new(std::io::stdout().lock())),
    };

    for (frame, progress) in playback.frames() {
        scene.render(progress);
        let snapshot = state.borrow();
        let record = FrameRecord {
            frame,
            time_s: playback.time_at(frame),
            progress,
            state: &snapshot,
        };
        serde_json::to_writer(&mut out, &record).with_context(|| "serialize frame record")?;
        writeln!(out)?;
    }
    out.flush()?;

    if let Some(path) = &args.out {
        eprintln!("wrote {} frames to {}", playback.frame_count(), path.display());
    }
    Ok(())
}

fn cmd_info(args: InfoArgs) -> anyhow::Result<()> {
    let state = SharedState::default();
    let scene = build_scene(args.demo, args.repeat, &state)?;
    let playback = Playback::for_animation(Fps::new(args.fps, 1)?, &scene)?;
    let duration = scene.duration().unwrap_or(0.0);

    println!("duration_ms: {duration}");
    println!("frames:      {}", playback.frame_count());
    println!("fps:         {}", playback.fps().as_f64());
    Ok(())
}
