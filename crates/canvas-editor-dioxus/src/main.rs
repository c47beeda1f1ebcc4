use anyhow::{Context, bail};
use canvas_editor_config::Config;
use canvas_editor_dioxus::ui::{App, LaunchSettings};
use dioxus::prelude::*;
use std::env;
use std::path::PathBuf;
use std::process;

fn main() {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    log::info!("canvas-editor starting up!");

    let settings = match resolve_settings(env::args().skip(1).collect()) {
        Ok(settings) => settings,
        Err(e) => {
            let program_name = env::args()
                .next()
                .unwrap_or_else(|| "canvas-editor".to_string());
            eprintln!("Error: {e:#}");
            eprintln!("Usage: {program_name} [canvas-file]");
            eprintln!("Config file: {}", Config::config_path().display());
            process::exit(1);
        }
    };

    log::info!("Opening canvas {}", settings.canvas_path.display());

    dioxus::LaunchBuilder::desktop()
        .with_cfg(make_window_config())
        .with_context(settings)
        .launch(app_root);
}

/// Canvas path from the command line, falling back to the config file. The
/// first run without arguments writes a default config.
fn resolve_settings(args: Vec<String>) -> anyhow::Result<LaunchSettings> {
    match args.as_slice() {
        [path] => {
            let config = Config::load().context("Failed to load config file")?;
            Ok(LaunchSettings {
                canvas_path: PathBuf::from(path),
                autosave: config.map(|c| c.autosave).unwrap_or(true),
            })
        }
        [] => {
            let config = Config::load_or_init().context("Failed to load config file")?;
            log::info!("Loaded canvas path from config: {}", config.canvas_path.display());
            Ok(LaunchSettings {
                canvas_path: config.canvas_path,
                autosave: config.autosave,
            })
        }
        _ => bail!("Too many arguments"),
    }
}

fn app_root() -> Element {
    let settings = use_context::<LaunchSettings>();

    rsx! {
        App {
            canvas_path: settings.canvas_path,
            autosave: settings.autosave,
        }
    }
}

fn make_window_config() -> dioxus::desktop::Config {
    use dioxus::desktop::{Config, WindowBuilder};

    let window = WindowBuilder::new()
        .with_title("canvas-editor")
        .with_always_on_top(false);

    Config::default().with_window(window)
}
