mod app;
mod commands;
mod plain;
mod styled;
mod ui;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use report_lens_config::Config;

use app::App;

#[derive(Parser)]
#[command(name = "report-lens")]
#[command(author, version, about = "Render generated intelligence reports and verify their citations")]
struct Cli {
    /// Config file to use instead of ~/.config/report-lens/config.toml
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print a report as plain text
    Render {
        file: PathBuf,

        /// Print the parsed blocks as JSON
        #[arg(long)]
        json: bool,

        /// Also print the generator's scratchpad
        #[arg(long)]
        scratchpad: bool,
    },

    /// List the citations of a report
    Citations {
        file: PathBuf,

        /// Probe every citation before listing
        #[arg(long)]
        check: bool,

        /// Print citations and stats as JSON
        #[arg(long)]
        json: bool,
    },

    /// Open a report in the interactive viewer
    View { file: PathBuf },
}

fn init_logging(interactive: bool) {
    // Log output would draw over the TUI, so it stays off there unless asked for.
    if interactive && std::env::var_os("RUST_LOG").is_none() {
        return;
    }
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();
}

fn load_config(explicit: Option<&PathBuf>) -> Result<Config> {
    let config = match explicit {
        Some(path) => Config::load_or_default(path)?,
        None => Config::load()?.unwrap_or_default(),
    };
    Ok(config)
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(matches!(cli.command, Commands::View { .. }));

    let config = load_config(cli.config.as_ref())?;
    log::debug!("config: {config:?}");

    match cli.command {
        Commands::Render {
            file,
            json,
            scratchpad,
        } => {
            let report = commands::load(&file, &config)?;
            println!("{}", commands::render(&report, json, scratchpad)?);
        }
        Commands::Citations { file, check, json } => {
            let report = commands::load(&file, &config)?;
            let probe = commands::probe_for(&config);
            println!("{}", commands::citations(&report, check, json, probe).await?);
        }
        Commands::View { file } => {
            let report = commands::load(&file, &config)?;
            let name = file.display().to_string();
            let mut app = App::new(name, report, commands::probe_for(&config));
            if config.check_on_load {
                app.check_all();
            }
            ui::run(&mut app)?;
        }
    }

    Ok(())
}
