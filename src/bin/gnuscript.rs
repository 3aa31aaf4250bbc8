use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand};
use gnuscript_rs::{PlotConfig, RunStatus, demo, runner};
use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(
    name = "gnuscript",
    version,
    about = "Build gnuplot scripts and render them"
)]
struct Cli {
    /// JSON config (width, height, terminal_style, gnuplot).
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Write the demo chart script (and optionally render it).
    Demo(DemoArgs),
    /// Render an existing script with gnuplot.
    Run(RunArgs),
}

#[derive(Args, Debug)]
struct DemoArgs {
    /// Image to produce (.svg, .png, .htm or .html).
    #[arg(long)]
    out: PathBuf,
    /// Script file to write.
    #[arg(long, default_value = "demo.plt")]
    script: PathBuf,
    /// Image width (overrides config).
    #[arg(long)]
    width: Option<u32>,
    /// Image height (overrides config).
    #[arg(long)]
    height: Option<u32>,
    /// Number of points to draw.
    #[arg(long, default_value_t = 10)]
    points: usize,
    /// Run gnuplot on the script afterwards.
    #[arg(long, default_value_t = false)]
    run: bool,
}

#[derive(Args, Debug)]
struct RunArgs {
    /// Script to render.
    script: PathBuf,
}

fn load_config(path: Option<&Path>) -> Result<PlotConfig> {
    match path {
        Some(p) => PlotConfig::from_json_file(p)
            .with_context(|| format!("reading config {}", p.display())),
        None => Ok(PlotConfig::default()),
    }
}

fn exit_code(status: RunStatus) -> ExitCode {
    match status {
        RunStatus::Success => ExitCode::SUCCESS,
        RunStatus::Failed(code) => {
            eprintln!("gnuplot failed ({})", code.map_or("signal".into(), |c| c.to_string()));
            ExitCode::from(code.and_then(|c| u8::try_from(c).ok()).unwrap_or(1))
        }
    }
}

fn main() -> Result<ExitCode> {
    env_logger::init();
    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref())?;
    match cli.cmd {
        Command::Demo(args) => cmd_demo(args, config),
        Command::Run(args) => cmd_run(args, &config),
    }
}

fn cmd_demo(args: DemoArgs, mut config: PlotConfig) -> Result<ExitCode> {
    if let Some(w) = args.width {
        config.width = w;
    }
    if let Some(h) = args.height {
        config.height = h;
    }
    if config.width == 0 || config.height == 0 {
        bail!("width and height must be positive");
    }
    // Resolve the terminal before creating the script file.
    gnuscript_rs::Terminal::from_path(&args.out)?;

    let file = File::create(&args.script)
        .with_context(|| format!("creating {}", args.script.display()))?;
    demo::write_demo(BufWriter::new(file), &args.out, &config, args.points)?;
    eprintln!("Wrote script to {}", args.script.display());

    if args.run {
        let status = runner::run_plot(&args.script, &config)?;
        if status.success() {
            eprintln!("Wrote plot to {}", args.out.display());
        }
        return Ok(exit_code(status));
    }
    Ok(ExitCode::SUCCESS)
}

fn cmd_run(args: RunArgs, config: &PlotConfig) -> Result<ExitCode> {
    if !args.script.exists() {
        bail!("script not found: {}", args.script.display());
    }
    Ok(exit_code(runner::run_plot(&args.script, config)?))
}
