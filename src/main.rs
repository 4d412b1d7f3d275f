//! Gridloop demo runner (default binary).
//!
//! Runs one of the bundled demo applications on the frame engine, drawing
//! through crossterm.

mod telemetry;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing::info;

use tui_gridloop::demos::{Falling, Ping, FALLING_MODE, PING_MODE};
use tui_gridloop::engine::{App, Engine, ModeFlags};
use tui_gridloop::term::CrosstermTerminal;
use tui_gridloop::types::{DEFAULT_HEIGHT, DEFAULT_WIDTH};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Demo {
    /// Projectile launched from the bottom-left corner.
    Falling,
    /// Ball bouncing inside a window; `j` flips it, `q` quits.
    Ping,
}

#[derive(Debug, Parser)]
#[command(name = "gridloop", version, about = "Character-grid frame engine demos")]
struct Cli {
    /// Demo to run.
    #[arg(long, value_enum, default_value_t = Demo::Ping)]
    demo: Demo,

    /// Interior width of the window.
    #[arg(long, default_value_t = DEFAULT_WIDTH)]
    width: u16,

    /// Interior height of the window.
    #[arg(long, default_value_t = DEFAULT_HEIGHT)]
    height: u16,

    /// Mode flags, e.g. "CBREAK|NOECHO|RESIZE". Defaults to the demo's own set.
    #[arg(long, env = "GRIDLOOP_MODE")]
    mode: Option<ModeFlags>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let _telemetry = telemetry::init_tracing("info");

    let (mut app, default_mode): (Box<dyn App>, ModeFlags) = match cli.demo {
        Demo::Falling => (Box::new(Falling::default()), FALLING_MODE),
        Demo::Ping => (Box::new(Ping::new()), PING_MODE),
    };
    let flags = cli.mode.unwrap_or(default_mode);
    info!(demo = ?cli.demo, %flags, width = cli.width, height = cli.height, "starting");

    let mut engine = Engine::new(CrosstermTerminal::new());
    engine.create_window(cli.width, cli.height);
    let report = engine
        .start(&mut app, flags)
        .with_context(|| format!("running {:?} demo", cli.demo))?;

    println!("destroy status: {}", report.destroy_status);
    Ok(())
}
