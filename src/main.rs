#![allow(non_snake_case)]

mod app;
pub mod context;
mod pages;
mod theme;

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use anyhow::{Context, Result};
use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use tracing_subscriber::EnvFilter;
use trellis_core::{FieldStatus, Platform, SizeY, SwitchOption, SwitchOptions};

use crate::context::GallerySettings;

/// Global gallery settings, set from command line
static SETTINGS: OnceLock<GallerySettings> = OnceLock::new();

/// Get the gallery settings (set from command line or default)
pub fn get_settings() -> GallerySettings {
    SETTINGS.get().cloned().unwrap_or_default()
}

/// Trellis Gallery - component showcase
#[derive(Parser, Debug)]
#[command(name = "trellis-gallery")]
#[command(about = "Trellis Gallery - form fields and toggle switches")]
struct Args {
    /// Platform variant (android, ios, vkcom)
    #[arg(short, long, default_value = "android")]
    platform: Platform,

    /// Vertical density (compact, regular)
    #[arg(short, long, default_value = "regular")]
    size_y: SizeY,

    /// Status of the highlighted field (default, error, valid)
    #[arg(long, default_value = "default")]
    status: String,

    /// JSON file with the two options of the demo switch
    #[arg(short, long)]
    options: Option<PathBuf>,

    /// Log filter, used when RUST_LOG is not set
    #[arg(long, default_value = "info")]
    log: String,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let options = match args.options {
        Some(ref path) => load_options(path)?,
        None => demo_options()?,
    };

    let settings = GallerySettings {
        platform: args.platform,
        size_y: args.size_y,
        status: FieldStatus::parse_lenient(&args.status),
        options,
    };

    tracing::info!(
        "Starting gallery: platform={}, sizeY={}, status={}",
        settings.platform,
        settings.size_y,
        settings.status
    );

    // Store settings globally
    let _ = SETTINGS.set(settings);

    // Configure desktop window
    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title("Trellis Gallery")
            .with_inner_size(dioxus::desktop::LogicalSize::new(560.0, 860.0))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);

    Ok(())
}

/// Read switch options from a JSON array of `{ "name", "value" }` objects
fn load_options(path: &Path) -> Result<SwitchOptions> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read options file {:?}", path))?;
    let list: Vec<SwitchOption> = serde_json::from_str(&raw)
        .with_context(|| format!("Failed to parse options file {:?}", path))?;
    let options = SwitchOptions::try_from(list)?;

    tracing::debug!(
        "Loaded options '{}' / '{}' from {:?}",
        options.first().name,
        options.second().name,
        path
    );
    Ok(options)
}

fn demo_options() -> Result<SwitchOptions> {
    Ok(SwitchOptions::new(
        SwitchOption::new("Monthly", "month"),
        SwitchOption::new("Yearly", "year"),
    )?)
}
