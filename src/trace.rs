//! Scripted event traces replayed through the controller on a `SimBoard`.

use crate::config::Config;
use crate::controller::{Controller, ControllerStats, EventOutcome};
use crate::error::{SculptError, SculptResult};
use crate::geometry::MatrixCoord;
use crate::indicator::LedState;
use crate::keymap::Keymap;
use crate::layers::{Layer, LayerState, OsKind};
use crate::sim::{KeyEvent, SimBoard};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;
use tracing::info;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TraceStep {
    pub at_ms: u32,
    #[serde(flatten)]
    pub action: TraceAction,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum TraceAction {
    Press { row: u8, col: u8 },
    Release { row: u8, col: u8 },
    Analog { value: u16 },
    Os { kind: OsKind },
    Caps { on: bool },
    Tick,
}

impl fmt::Display for TraceAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TraceAction::Press { row, col } => write!(f, "press ({}, {})", row, col),
            TraceAction::Release { row, col } => write!(f, "release ({}, {})", row, col),
            TraceAction::Analog { value } => write!(f, "analog {}", value),
            TraceAction::Os { kind } => write!(f, "os {}", kind),
            TraceAction::Caps { on } => write!(f, "caps {}", if *on { "on" } else { "off" }),
            TraceAction::Tick => write!(f, "tick"),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct StepRecord {
    pub at_ms: u32,
    pub step: String,
    pub outcome: String,
    pub emitted: Vec<KeyEvent>,
    pub overlay_toggled: bool,
    pub layer: Layer,
}

#[derive(Debug, Clone, Serialize)]
pub struct TraceReport {
    pub records: Vec<StepRecord>,
    pub stats: ControllerStats,
    pub final_state: LayerState,
    pub final_layer: Layer,
    pub caps_led: bool,
}

impl TraceReport {
    pub fn emitted(&self) -> impl Iterator<Item = &KeyEvent> {
        self.records.iter().flat_map(|r| r.emitted.iter())
    }
}

pub fn load_trace<P: AsRef<Path>>(path: P) -> SculptResult<Vec<TraceStep>> {
    let content = fs::read_to_string(&path)?;
    parse_trace(&content)
}

pub fn parse_trace(json: &str) -> SculptResult<Vec<TraceStep>> {
    let steps: Vec<TraceStep> = serde_json::from_str(json)?;
    if let Some(w) = steps.windows(2).find(|w| w[1].at_ms < w[0].at_ms) {
        return Err(SculptError::Validation(format!(
            "trace time goes backwards: {} ms after {} ms",
            w[1].at_ms, w[0].at_ms
        )));
    }
    Ok(steps)
}

/// Boots a controller at t=0 and feeds it `steps`. Each step sets the
/// clock, applies its action, then runs one scan tick.
pub fn replay(config: Config, keymap: Keymap, steps: &[TraceStep]) -> SculptResult<TraceReport> {
    config.validate()?;

    let mut board = SimBoard::from_config(&config);
    let mut controller = Controller::boot(config, keymap, &mut board);
    let mut records = Vec::with_capacity(steps.len());

    for step in steps {
        board.set_time(step.at_ms);

        let outcome = match step.action {
            TraceAction::Press { row, col } => {
                let coord = MatrixCoord::new(row, col);
                board.close(coord);
                describe(controller.on_matrix_event(coord, true, &mut board))
            }
            TraceAction::Release { row, col } => {
                let coord = MatrixCoord::new(row, col);
                board.open(coord);
                describe(controller.on_matrix_event(coord, false, &mut board))
            }
            TraceAction::Analog { value } => {
                board.set_analog(value);
                String::new()
            }
            TraceAction::Os { kind } => {
                let base = controller.on_os_detected(kind, &mut board);
                format!("base {}", base)
            }
            TraceAction::Caps { on } => {
                let led = LedState {
                    caps_lock: on,
                    ..LedState::default()
                };
                controller.on_led_update(led, &mut board);
                String::new()
            }
            TraceAction::Tick => String::new(),
        };

        let overlay_toggled = controller.on_scan_tick(&mut board);
        records.push(StepRecord {
            at_ms: step.at_ms,
            step: step.action.to_string(),
            outcome,
            emitted: board.take_events(),
            overlay_toggled,
            layer: controller.current_effective_layer(),
        });
    }

    let stats = controller.stats();
    info!(
        "Replayed {} steps: {} ghosts rejected, {} keycodes emitted",
        steps.len(),
        stats.ghosts_rejected,
        stats.keycodes_emitted
    );

    Ok(TraceReport {
        records,
        stats,
        final_state: controller.layer_state(),
        final_layer: controller.current_effective_layer(),
        caps_led: board.caps_led(),
    })
}

fn describe(outcome: EventOutcome) -> String {
    match outcome {
        EventOutcome::Emitted(0) => "no-op".to_string(),
        EventOutcome::Emitted(n) => format!("{} event(s)", n),
        EventOutcome::Ghosted => "ghost".to_string(),
        EventOutcome::OutOfRange => "out of range".to_string(),
    }
}
