use std::{
    fs::File,
    io::{BufReader, Write as _},
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use scrollreel::scene::presets;

#[derive(Parser, Debug)]
#[command(name = "scrollreel", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the evaluated frame at one progress value as JSON.
    Sample(SampleArgs),
    /// Print one line per evenly spaced progress sample.
    Sweep(SweepArgs),
    /// Check a scene and build its geometry without rendering.
    Validate(SceneArg),
    /// Print a built-in scene as JSON, or list them when no name is given.
    Preset(PresetArgs),
}

#[derive(Parser, Debug)]
struct SceneArg {
    /// Built-in preset name or path to a scene JSON file.
    #[arg(long)]
    scene: String,
}

#[derive(Parser, Debug)]
struct SampleArgs {
    #[command(flatten)]
    scene: SceneArg,

    /// Scroll progress; values outside [0, 1] are clamped.
    #[arg(long)]
    progress: f64,
}

#[derive(Parser, Debug)]
struct SweepArgs {
    #[command(flatten)]
    scene: SceneArg,

    /// Number of samples, including both ends.
    #[arg(long, default_value_t = 101)]
    samples: usize,
}

#[derive(Parser, Debug)]
struct PresetArgs {
    name: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Sample(args) => cmd_sample(args),
        Command::Sweep(args) => cmd_sweep(args),
        Command::Validate(args) => cmd_validate(args),
        Command::Preset(args) => cmd_preset(args),
    }
}

fn read_scene_json(path: &Path) -> anyhow::Result<scrollreel::SceneConfig> {
    let f = File::open(path).with_context(|| format!("open scene '{}'", path.display()))?;
    let r = BufReader::new(f);
    let scene: scrollreel::SceneConfig =
        serde_json::from_reader(r).with_context(|| "parse scene JSON")?;
    Ok(scene)
}

fn load_scene(arg: &SceneArg) -> anyhow::Result<scrollreel::SceneConfig> {
    let path = PathBuf::from(&arg.scene);
    if path.extension().is_some_and(|e| e == "json") || path.exists() {
        return read_scene_json(&path);
    }
    Ok(presets::by_name(&arg.scene)?)
}

fn cmd_sample(args: SampleArgs) -> anyhow::Result<()> {
    let scene = load_scene(&args.scene)?;
    let choreo = scene.choreographer()?;
    let frame = choreo.evaluate(scrollreel::Progress::new(args.progress));
    let out = serde_json::json!({
        "scene": scene.name,
        "fingerprint": scrollreel::fingerprint_frame(&frame).to_string(),
        "frame": frame,
    });
    println!("{}", serde_json::to_string_pretty(&out)?);
    Ok(())
}

fn cmd_sweep(args: SweepArgs) -> anyhow::Result<()> {
    let scene = load_scene(&args.scene)?;
    let samples = scrollreel::sweep(&scene, args.samples)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    writeln!(out, "index\tprogress\tactive\tlocal_t\tfocus\tcamera\tfingerprint")?;
    for s in &samples {
        let f = &s.frame;
        let cam = f.camera.position;
        writeln!(
            out,
            "{}\t{:.4}\t{}\t{:.4}\t{:.4}\t{:.3},{:.3},{:.3}\t{}",
            s.index,
            f.progress.get(),
            f.active.signed_index(),
            f.active.local_t,
            f.focus,
            cam.x,
            cam.y,
            cam.z,
            s.fingerprint
        )?;
    }
    Ok(())
}

fn cmd_validate(args: SceneArg) -> anyhow::Result<()> {
    let scene = load_scene(&args)?;
    let render = scene
        .render_loop()
        .with_context(|| format!("scene '{}' is invalid", scene.name))?;
    println!(
        "ok: {} ({} sections, {} groups, {} objects)",
        scene.name,
        scene.section_count(),
        render.groups().len(),
        render.object_count()
    );
    Ok(())
}

fn cmd_preset(args: PresetArgs) -> anyhow::Result<()> {
    let Some(name) = args.name else {
        for name in presets::NAMES {
            println!("{name}");
        }
        return Ok(());
    };
    let scene = presets::by_name(&name)?;
    println!("{}", scene.to_json_pretty()?);
    Ok(())
}
