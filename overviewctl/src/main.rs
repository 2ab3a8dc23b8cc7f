//! Command line surface for the card overview gallery.
#![allow(missing_docs)]

use std::{
    fs::File,
    io::{self, BufReader},
    path::PathBuf,
};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use env_logger::{Builder, Target};
use log::LevelFilter;
use overview_config::{ConfigSource, GalleryConfig};
use overview_core::GallerySelectionController;
use overview_model::CardId;

mod cli;

use cli::{render, script};

#[derive(Parser)]
#[command(
    name = "overviewctl",
    about = "Drive the card overview gallery from the terminal"
)]
struct Cli {
    /// Gallery config file (TOML or JSON). Overrides OVERVIEW_CONFIG_PATH.
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Log controller transitions at debug level
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the gallery as the surface would draw it
    Show {
        /// Select this card id before rendering
        #[arg(long)]
        select: Option<String>,
        /// Report a swipe to this page before rendering
        #[arg(long)]
        page: Option<usize>,
    },
    /// Replay a gesture script (swipe/select/reload/clear/show per line)
    Script {
        /// Script file, or `-` for stdin
        path: PathBuf,
    },
}

fn init_logger(verbose: bool) {
    if std::env::var("RUST_LOG").is_ok() {
        env_logger::init();
        return;
    }
    let crate_level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    Builder::new()
        .target(Target::Stderr)
        .filter_level(LevelFilter::Warn)
        .filter_module("overview_core", crate_level)
        .filter_module("overview_config", crate_level)
        .filter_module("overviewctl", crate_level)
        .init();
}

fn load_config(explicit: Option<PathBuf>) -> Result<(GalleryConfig, ConfigSource)> {
    let (config, source) = match explicit {
        Some(path) => {
            let config = GalleryConfig::load_from_file(&path)?;
            (config, ConfigSource::Explicit(path))
        }
        None => GalleryConfig::load_from_env()?,
    };
    config.validate().context("invalid gallery configuration")?;
    log::debug!("Using gallery config from {source:?}");
    Ok((config, source))
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    let (config, _source) = load_config(cli.config)?;
    let cards = config.load_cards()?;
    let mut gallery = GallerySelectionController::with_labels(
        cards,
        config.gallery_labels(),
    )?;
    let layout = config.pager_layout();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Command::Show { select, page } => {
            if let Some(raw) = select {
                let id = CardId::new(raw)?;
                let transition = gallery.select_card(&id)?;
                render::write_transition(&mut out, &transition)?;
            }
            if let Some(page) = page {
                let transition = gallery.on_page_changed(page)?;
                render::write_transition(&mut out, &transition)?;
            }
            render::write_view(&mut out, &gallery, &layout)?;
        }
        Command::Script { path } => {
            let mut session = script::Session::new(&mut gallery, &config, layout);
            if path.as_os_str() == "-" {
                session.run(io::stdin().lock(), &mut out)?;
            } else {
                let file = File::open(&path).with_context(|| {
                    format!("failed to open script {}", path.display())
                })?;
                session.run(BufReader::new(file), &mut out)?;
            }
        }
    }
    Ok(())
}
