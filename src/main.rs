//! Native high score tool
//!
//! The browser build exposes `saveHighScore` / `loadHighScore` from the
//! library; this binary drives the same operations against a data directory.

#[cfg(not(target_arch = "wasm32"))]
mod cli {
    use std::path::PathBuf;

    use clap::{Parser, Subcommand};
    use thiserror::Error;

    use highscore::{Config, ConfigError, StoreError};

    #[derive(Parser, Debug)]
    #[command(name = "highscore", version, about = "Save and load the game's high score")]
    struct Cli {
        /// Config file (JSON)
        #[arg(long, default_value = "highscore.json")]
        config: PathBuf,

        /// Override the data directory
        #[arg(long)]
        data_dir: Option<PathBuf>,

        #[command(subcommand)]
        command: Command,
    }

    #[derive(Subcommand, Debug)]
    enum Command {
        /// Overwrite the stored high score
        Save { score: u32 },
        /// Print the stored high score (0 if none)
        Load,
        /// Save the score only if it beats the stored one
        Record { score: u32 },
        /// Remove the stored high score
        Clear,
    }

    #[derive(Debug, Error)]
    pub enum CliError {
        #[error(transparent)]
        Config(#[from] ConfigError),
        #[error(transparent)]
        Store(#[from] StoreError),
    }

    pub fn run() -> Result<(), CliError> {
        let cli = Cli::parse();

        let (mut config, found) = Config::load(&cli.config)?;
        if let Some(dir) = cli.data_dir {
            config.data_dir = dir;
        }

        env_logger::Builder::from_env(
            env_logger::Env::default().default_filter_or(config.log_level.as_str()),
        )
        .init();
        if found {
            log::debug!("Loaded config from {}", cli.config.display());
        } else {
            log::debug!("No config at {}, using defaults", cli.config.display());
        }
        log::debug!("Data directory: {}", config.data_dir.display());

        let mut store = config.store();
        match cli.command {
            Command::Save { score } => highscore::try_save(&mut store, score)?,
            Command::Load => println!("{}", highscore::try_load(&store)?),
            Command::Record { score } => {
                if highscore::try_record(&mut store, score)? {
                    println!("new high score: {}", score);
                } else {
                    println!("kept {}", highscore::try_load(&store)?);
                }
            }
            Command::Clear => highscore::try_clear(&mut store)?,
        }
        Ok(())
    }

}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> std::process::ExitCode {
    match cli::run() {
        Ok(()) => std::process::ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("highscore: {}", err);
            std::process::ExitCode::FAILURE
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is the library's start hook
}
