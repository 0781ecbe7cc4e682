use clap::Parser;
use wasm_bindgen::prelude::*;

mod game;
mod source;
mod utils;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    #[command(flatten)]
    game: game::GameProps,
}

impl Args {
    /// Reads flags out of the location hash, e.g. `#-vv&--categories=4`.
    fn from_hash(hash: &str) -> Result<Self, clap::Error> {
        Self::try_parse_from(hash.split(['#', '&']))
    }

    /// Flags from the page's location hash, defaults when the hash does not parse.
    fn from_location() -> Self {
        let hash = gloo::utils::window()
            .location()
            .hash()
            .unwrap_or_default();

        Self::from_hash(&hash).unwrap_or_else(|err| {
            gloo::console::warn!(format!("ignoring location hash {hash:?}: {err}"));
            Self::from_hash("").expect("defaults always parse")
        })
    }
}

#[wasm_bindgen(start)]
pub fn run_app() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    let args = Args::from_location();
    if let Some(level) = args.verbose.log_level() {
        if let Err(err) = console_log::init_with_level(level) {
            gloo::console::error!(format!("logger setup failed: {err}"));
        }
    }
    log::debug!("board settings: {:?}", args.game);

    let Some(root) = gloo::utils::document().get_element_by_id("game") else {
        log::error!("page has no element with id=\"game\" to mount the board in");
        return;
    };
    yew::Renderer::<game::GameView>::with_root_and_props(root, args.game).render();
}
