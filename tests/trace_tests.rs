use sculptforge::config::Config;
use sculptforge::error::SculptError;
use sculptforge::keycodes::Keycode;
use sculptforge::keymap::Keymap;
use sculptforge::layers::{BaseLayer, Layer};
use sculptforge::trace::{self, TraceAction, TraceStep};

const SESSION: &str = r#"[
    { "at_ms": 0,    "action": "analog", "value": 3000 },
    { "at_ms": 20,   "action": "os", "kind": "mac_os" },
    { "at_ms": 50,   "action": "press", "row": 1, "col": 11 },
    { "at_ms": 80,   "action": "release", "row": 1, "col": 11 },
    { "at_ms": 100,  "action": "analog", "value": 10 },
    { "at_ms": 900,  "action": "tick" },
    { "at_ms": 1020, "action": "tick" },
    { "at_ms": 1100, "action": "press", "row": 1, "col": 11 },
    { "at_ms": 1150, "action": "release", "row": 1, "col": 11 },
    { "at_ms": 1200, "action": "caps", "on": true }
]"#;

#[test]
fn test_parse_trace() {
    let steps = trace::parse_trace(SESSION).unwrap();
    assert_eq!(steps.len(), 10);
    assert_eq!(
        steps[2],
        TraceStep {
            at_ms: 50,
            action: TraceAction::Press { row: 1, col: 11 }
        }
    );
    assert_eq!(steps[5].action, TraceAction::Tick);
}

#[test]
fn test_backwards_time_rejected() {
    let json = r#"[
        { "at_ms": 10, "action": "tick" },
        { "at_ms": 5, "action": "tick" }
    ]"#;
    let err = trace::parse_trace(json).unwrap_err();
    assert!(matches!(err, SculptError::Validation(_)));
}

#[test]
fn test_replay_session() {
    let steps = trace::parse_trace(SESSION).unwrap();
    let report = trace::replay(Config::default(), Keymap::sculpt(), &steps).unwrap();

    // Overlay on at OS detection: F3 position fires the desktop-left chord.
    let chord = &report.records[2];
    assert_eq!(chord.layer, Layer::MediaFnMac);
    assert_eq!(chord.emitted.len(), 6);
    assert!(report.records[3].emitted.is_empty());

    // Switch turned off at 100ms, only seen on the first read after 1020ms.
    assert!(!report.records[5].overlay_toggled);
    assert!(report.records[6].overlay_toggled);
    assert_eq!(report.records[6].layer, Layer::MacBase);

    let plain: Vec<(Keycode, bool)> = report.records[7..9]
        .iter()
        .flat_map(|r| r.emitted.iter().map(|e| (e.code, e.pressed)))
        .collect();
    assert_eq!(plain, vec![(Keycode::F3, true), (Keycode::F3, false)]);

    assert_eq!(report.final_state.base, BaseLayer::Mac);
    assert_eq!(report.final_layer, Layer::MacBase);
    assert!(report.caps_led);
    assert_eq!(report.stats.chords_fired, 1);
    assert_eq!(report.stats.overlay_transitions, 2);
    assert_eq!(report.emitted().count(), 8);
}

#[test]
fn test_replay_counts_ghosts() {
    let json = r#"[
        { "at_ms": 0, "action": "press", "row": 0, "col": 11 },
        { "at_ms": 1, "action": "press", "row": 0, "col": 12 },
        { "at_ms": 2, "action": "press", "row": 2, "col": 11 },
        { "at_ms": 3, "action": "press", "row": 2, "col": 12 }
    ]"#;
    let steps = trace::parse_trace(json).unwrap();
    let report = trace::replay(Config::default(), Keymap::sculpt(), &steps).unwrap();
    assert_eq!(report.stats.ghosts_rejected, 1);
    assert_eq!(report.records[3].outcome, "ghost");
    assert!(report.records[3].emitted.is_empty());
}

#[test]
fn test_load_trace_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("trace.json");
    std::fs::write(&path, SESSION).unwrap();
    assert_eq!(trace::load_trace(&path).unwrap().len(), 10);
}
