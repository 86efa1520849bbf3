use clap::Parser;
use minefield_core::GameConfig;
use wasm_bindgen::prelude::*;

mod game;
mod screen;
mod utils;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    /// Force a seed instead of random
    #[arg(short, long)]
    seed: Option<u64>,

    /// Width of the first board
    #[arg(long, default_value_t = 8)]
    width: i64,

    /// Height of the first board
    #[arg(long, default_value_t = 8)]
    height: i64,

    /// Mines on the first board
    #[arg(long, default_value_t = 10)]
    mines: i64,
}

impl Args {
    /// Arguments come from the url hash, e.g. `#-vv&--seed=42&--width=16`.
    fn from_location_hash(hash: &str) -> Self {
        Self::try_parse_from(hash.split(['#', '&'])).unwrap_or_else(|err| {
            gloo::console::warn!(format!("ignoring url arguments: {err}"));
            Self::parse_from([""])
        })
    }

    fn first_game(&self) -> GameConfig {
        GameConfig::new(self.width, self.height, self.mines).unwrap_or_else(|err| {
            log::warn!("Invalid first game, using default: {}", err);
            GameConfig::default()
        })
    }
}

#[wasm_bindgen(start)]
pub fn run_app() {
    use gloo::utils::{body, document, window};

    #[cfg(feature = "console_error_panic_hook")]
    {
        console_error_panic_hook::set_once();
    }

    let location_hash = window().location().hash().unwrap_or_default();
    let args = Args::from_location_hash(&location_hash);
    if let Some(log_level) = args.verbose.log_level() {
        if let Err(err) = console_log::init_with_level(log_level) {
            gloo::console::warn!(format!("logger already set: {err}"));
        }
    }
    log::debug!("args: {:?}", args);

    let props = game::GameProps {
        seed: args.seed,
        config: args.first_game(),
    };

    let root = document()
        .get_element_by_id("game")
        .unwrap_or_else(|| body().into());

    log::debug!("App started");
    yew::Renderer::<game::GameView>::with_root_and_props(root, props).render();
}
