use rstest::rstest;
use sculptforge::hal::LayerStack;
use sculptforge::layers::{BaseLayer, Layer, LayerState, LayerStateMachine, OsKind};
use sculptforge::sim::SimBoard;
use std::str::FromStr;

fn machine() -> (LayerStateMachine, SimBoard) {
    let mut board = SimBoard::new(8, 18);
    let lsm = LayerStateMachine::new();
    board.move_to(Layer::PcBase);
    (lsm, board)
}

#[test]
fn test_initial_state() {
    let lsm = LayerStateMachine::new();
    assert_eq!(
        lsm.state(),
        LayerState {
            base: BaseLayer::Pc,
            overlay_engaged: false
        }
    );
    assert_eq!(lsm.effective_layer(), Layer::PcBase);
}

#[test]
fn test_overlays_sit_above_their_base() {
    for base in [BaseLayer::Pc, BaseLayer::Mac] {
        assert!(!base.layer().is_overlay());
        assert!(base.overlay().is_overlay());
        assert_eq!(base.overlay().index(), base.layer().index() + 1);
        assert_eq!(Layer::from_index(base.overlay().index()), Some(base.overlay()));
    }
    assert_eq!(Layer::from_index(4), None);
}

#[rstest]
#[case(OsKind::MacOs, BaseLayer::Mac)]
#[case(OsKind::Ios, BaseLayer::Mac)]
#[case(OsKind::Windows, BaseLayer::Pc)]
#[case(OsKind::Linux, BaseLayer::Pc)]
#[case(OsKind::Unsure, BaseLayer::Pc)]
#[case(OsKind::Unrecognized, BaseLayer::Pc)]
fn test_os_mapping(#[case] os: OsKind, #[case] expected: BaseLayer) {
    let (mut lsm, mut board) = machine();
    assert_eq!(lsm.on_os_detected(os, false, &mut board), expected);
    assert_eq!(lsm.state().base, expected);
    assert!(board.is_layer_on(expected.layer()));
}

#[rstest]
#[case(0, OsKind::Unsure)]
#[case(1, OsKind::Linux)]
#[case(2, OsKind::Windows)]
#[case(3, OsKind::MacOs)]
#[case(4, OsKind::Ios)]
#[case(5, OsKind::Unrecognized)]
#[case(255, OsKind::Unrecognized)]
fn test_os_from_raw(#[case] raw: u8, #[case] expected: OsKind) {
    assert_eq!(OsKind::from_raw(raw), expected);
}

#[test]
fn test_os_names_parse() {
    assert_eq!(OsKind::from_str("mac_os").unwrap(), OsKind::MacOs);
    assert_eq!(OsKind::from_str("WINDOWS").unwrap(), OsKind::Windows);
    assert_eq!(Layer::from_str("media_fn_mac").unwrap(), Layer::MediaFnMac);
}

#[test]
fn test_mode_change_is_idempotent() {
    let (mut lsm, mut board) = machine();

    assert!(lsm.on_mode_sensor_changed(true, &mut board));
    assert!(!lsm.on_mode_sensor_changed(true, &mut board));
    assert_eq!(lsm.overlay_transitions(), 1);
    assert!(board.is_layer_on(Layer::MediaFnPc));

    assert!(lsm.on_mode_sensor_changed(false, &mut board));
    assert!(!lsm.on_mode_sensor_changed(false, &mut board));
    assert_eq!(lsm.overlay_transitions(), 2);
    assert!(!board.is_layer_on(Layer::MediaFnPc));
}

#[test]
fn test_unchanged_flag_does_not_touch_stack() {
    let (mut lsm, mut board) = machine();
    assert!(!lsm.on_mode_sensor_changed(false, &mut board));
    assert_eq!(lsm.overlay_transitions(), 0);
    assert_eq!(board.highest_layer(), Some(Layer::PcBase));
}

#[test]
fn test_overlay_follows_mac_base() {
    let (mut lsm, mut board) = machine();
    lsm.on_os_detected(OsKind::MacOs, false, &mut board);

    lsm.on_mode_sensor_changed(true, &mut board);
    assert_eq!(lsm.effective_layer(), Layer::MediaFnMac);
    assert!(board.is_layer_on(Layer::MediaFnMac));
    assert!(!board.is_layer_on(Layer::MediaFnPc));
}

#[test]
fn test_os_detection_resyncs_overlay() {
    let (mut lsm, mut board) = machine();

    // PC overlay engaged before the handshake completes.
    lsm.on_mode_sensor_changed(true, &mut board);
    assert!(board.is_layer_on(Layer::MediaFnPc));

    // Handshake says Mac and the switch still reads on.
    lsm.on_os_detected(OsKind::Ios, true, &mut board);
    assert_eq!(lsm.effective_layer(), Layer::MediaFnMac);
    assert!(!board.is_layer_on(Layer::MediaFnPc));
    assert!(!board.is_layer_on(Layer::PcBase));
    assert!(board.is_layer_on(Layer::MacBase));
    assert!(board.is_layer_on(Layer::MediaFnMac));

    // Re-firing with a switch that now reads off.
    lsm.on_os_detected(OsKind::Ios, false, &mut board);
    assert_eq!(lsm.effective_layer(), Layer::MacBase);
    assert!(!board.is_layer_on(Layer::MediaFnMac));
}

#[test]
fn test_os_detection_refire_is_idempotent() {
    let (mut lsm, mut board) = machine();
    lsm.on_os_detected(OsKind::MacOs, true, &mut board);
    let first = lsm.state();
    lsm.on_os_detected(OsKind::MacOs, true, &mut board);
    assert_eq!(lsm.state(), first);
    assert_eq!(board.highest_layer(), Some(Layer::MediaFnMac));
}

#[rstest]
#[case(BaseLayer::Pc, false, Layer::PcBase)]
#[case(BaseLayer::Pc, true, Layer::MediaFnPc)]
#[case(BaseLayer::Mac, false, Layer::MacBase)]
#[case(BaseLayer::Mac, true, Layer::MediaFnMac)]
fn test_effective_layer(
    #[case] base: BaseLayer,
    #[case] overlay_engaged: bool,
    #[case] expected: Layer,
) {
    let state = LayerState {
        base,
        overlay_engaged,
    };
    assert_eq!(state.effective_layer(), expected);
    let offset = if overlay_engaged { 1 } else { 0 };
    assert_eq!(expected.index(), base.layer().index() + offset);
}
