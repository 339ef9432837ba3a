use crate::reports;
use clap::Args;
use sculptforge::config::Config;
use sculptforge::error::{SculptError, SculptResult};
use sculptforge::keymap::Keymap;
use sculptforge::layers::Layer;
use std::str::FromStr;
use strum::IntoEnumIterator;

#[derive(Args, Debug, Clone)]
pub struct KeymapArgs {
    #[command(flatten)]
    pub config: Config,

    /// pc_base, media_fn_pc, mac_base, media_fn_mac, or "all".
    #[arg(short, long, default_value = "all")]
    pub layer: String,
}

pub fn run(args: KeymapArgs, config: Config) -> SculptResult<()> {
    let keymap = Keymap::sculpt();

    let layers: Vec<Layer> = if args.layer.eq_ignore_ascii_case("all") {
        Layer::iter().collect()
    } else {
        let layer = Layer::from_str(&args.layer).map_err(|_| {
            SculptError::Config(format!("unknown layer '{}'", args.layer))
        })?;
        vec![layer]
    };

    for layer in layers {
        reports::print_layer_grid(layer, keymap.table(layer), &config.matrix);
    }
    Ok(())
}
