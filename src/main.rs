//! speed-keys - serial speed sensor to keyboard bridge
//!
//! ## Usage
//!
//! ```bash
//! # List serial ports (find the Bluetooth COM port)
//! speed-keys --list-ports
//!
//! # Run with speed-keys.toml from the working directory, or defaults
//! speed-keys
//!
//! # Explicit config file, port override
//! speed-keys --config treadmill.toml --port COM9 --baud 115200
//! ```

use clap::Parser;
use speed_keys::config::{Config, DEFAULT_CONFIG_FILE};
use speed_keys::display::StatusDisplay;
use speed_keys::error::Result;
use speed_keys::keyboard::{EnigoKeyboard, KeyBindings};
use speed_keys::transport::{SerialTransport, list_ports};
use speed_keys::{App, signal};
use std::path::Path;

/// Drive walk/run keys from a Bluetooth-serial speed sensor
#[derive(Parser, Debug, Default)]
#[command(name = "speed-keys", version, about, long_about = None)]
struct Args {
    /// TOML config file (default: ./speed-keys.toml if present)
    #[arg(value_name = "CONFIG", conflicts_with = "config")]
    config_file: Option<String>,

    /// TOML config file
    #[arg(short, long, value_name = "PATH")]
    config: Option<String>,

    /// Serial port of the speed sensor
    #[arg(short, long)]
    port: Option<String>,

    /// Baud rate
    #[arg(short, long = "baud", value_name = "RATE")]
    baud_rate: Option<u32>,

    /// Do not clear the screen between samples
    #[arg(long)]
    no_clear: bool,

    /// List serial ports and exit
    #[arg(long)]
    list_ports: bool,
}

impl Args {
    /// Config path from either the positional argument or `--config`
    fn config_path(&self) -> Option<&str> {
        self.config.as_deref().or(self.config_file.as_deref())
    }
}

/// Load the config file (explicit, local, or defaults) and apply overrides
fn load_config(args: &Args) -> Result<Config> {
    let mut config = match args.config_path() {
        Some(path) => Config::load(path)?,
        None if Path::new(DEFAULT_CONFIG_FILE).exists() => Config::load(DEFAULT_CONFIG_FILE)?,
        None => Config::default(),
    };

    if let Some(port) = &args.port {
        config.serial.port = port.clone();
    }
    if let Some(baud_rate) = args.baud_rate {
        config.serial.baud_rate = baud_rate;
    }
    if args.no_clear {
        config.display.clear_screen = false;
    }

    config.validate()?;
    Ok(config)
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.list_ports {
        return list_ports();
    }

    let config = load_config(&args)?;

    // Initialize logger
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&config.logging.level))
        .init();

    log::info!("speed-keys v{} starting...", env!("CARGO_PKG_VERSION"));
    match args.config_path() {
        Some(path) => log::info!("Using config: {}", path),
        None => log::info!("Using config: {} (or defaults)", DEFAULT_CONFIG_FILE),
    }

    let running = signal::setup_ctrl_c_handler()?;

    let bindings = KeyBindings::from_config(&config.keys)?;
    let keyboard = EnigoKeyboard::new(bindings)?;
    let transport = SerialTransport::open(&config.serial)?;
    let display = StatusDisplay::stdout(config.display.clear_screen);

    let mut app = App::from_config(&config, transport, keyboard, display, running);
    app.run()?;

    log::info!("speed-keys stopped");
    Ok(())
}
