use crate::reports;
use clap::Args;
use sculptforge::config::Config;
use sculptforge::error::SculptResult;
use sculptforge::keymap::Keymap;
use sculptforge::trace;
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct SimulateArgs {
    #[command(flatten)]
    pub config: Config,

    /// JSON array of trace steps.
    #[arg(short, long)]
    pub trace: String,

    /// Print the full report as JSON instead of tables.
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

pub fn run(args: SimulateArgs, config: Config) -> SculptResult<()> {
    info!("Loading trace: {}", args.trace);
    let steps = trace::load_trace(&args.trace)?;
    let report = trace::replay(config, Keymap::sculpt(), &steps)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        reports::print_trace_report(&report);
        reports::print_summary(&report);
    }
    Ok(())
}
