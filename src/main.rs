#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod pages;
mod theme;

use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};

/// Palm Haven - resort marketing site
#[derive(Parser, Debug)]
#[command(name = "palmhaven-desktop")]
#[command(about = "Palm Haven - beach resort marketing site")]
struct Args {
    /// Window title override
    #[arg(short, long)]
    title: Option<String>,

    /// Window width in logical pixels
    #[arg(long, default_value_t = 1280.0)]
    width: f64,

    /// Window height in logical pixels
    #[arg(long, default_value_t = 860.0)]
    height: f64,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,palmhaven=debug".into()),
        )
        .init();

    let args = Args::parse();
    let title = args
        .title
        .unwrap_or_else(|| "Palm Haven - Beach Resort, Kochi".to_string());

    tracing::info!("Starting '{}' ({}x{})", title, args.width, args.height);

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title(&title)
            .with_inner_size(dioxus::desktop::LogicalSize::new(args.width, args.height))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);
}
