use anyhow::{Context, Result};
use grid_robot::Interpreter;
use grid_robot::config::{NAME, Settings, VERSION};
use grid_robot::source::CommandFile;
use tracing::info;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::FmtSubscriber;

fn init_logging(level: LevelFilter) -> Result<()> {
    // stdout carries reports only
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("setting default subscriber failed")
}

fn main() -> Result<()> {
    let settings: Settings = argh::from_env();
    init_logging(settings.log_level)?;
    info!("{NAME} v{VERSION} running...");

    let grid = settings
        .grid()
        .with_context(|| format!("invalid board size {}", settings.board))?;
    let mut interpreter = Interpreter::new(grid);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match &settings.command_file {
        Some(path) => {
            let file = CommandFile::load(path)
                .with_context(|| format!("can't load commands from {}", path.display()))?;
            interpreter.run_lines(file.commands(), &mut out)
        }
        None => interpreter.repl(&mut out),
    }
}
