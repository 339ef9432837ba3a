use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use sculptforge::config::MatrixParams;
use sculptforge::dispatch::KeyAction;
use sculptforge::keymap::LayerTable;
use sculptforge::layers::Layer;
use sculptforge::sim::KeyEvent;
use sculptforge::trace::TraceReport;

fn action_cell(action: &KeyAction) -> Cell {
    let cell = match action {
        KeyAction::No => Cell::new(" "),
        KeyAction::Transparent => Cell::new("▽").fg(Color::DarkGrey),
        KeyAction::Key(k) => Cell::new(k.label()),
        KeyAction::Chord(c) => Cell::new(c.to_string()).fg(Color::Magenta),
    };
    cell.set_alignment(CellAlignment::Center)
}

pub fn print_layer_grid(layer: Layer, table_data: &LayerTable, matrix: &MatrixParams) {
    let kind = if layer.is_overlay() { "overlay" } else { "base" };
    println!("\nLayer: {} ({}, {})", layer, layer.index(), kind);
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    let mut header = vec![Cell::new("row").add_attribute(Attribute::Bold)];
    header.extend((0..matrix.cols).map(|c| Cell::new(c).add_attribute(Attribute::Bold)));
    table.set_header(header);

    for (r, row) in table_data.iter().take(matrix.rows as usize).enumerate() {
        let mut cells = vec![Cell::new(r).add_attribute(Attribute::Bold)];
        cells.extend(row.iter().take(matrix.cols as usize).map(action_cell));
        table.add_row(cells);
    }
    println!("{}", table);
}

fn format_events(events: &[KeyEvent]) -> String {
    events
        .iter()
        .map(|e| format!("{}{}", if e.pressed { "+" } else { "-" }, e.code.label()))
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn print_trace_report(report: &TraceReport) {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(vec![
        Cell::new("ms").add_attribute(Attribute::Bold),
        Cell::new("Step").add_attribute(Attribute::Bold),
        Cell::new("Outcome").add_attribute(Attribute::Bold),
        Cell::new("Emitted").add_attribute(Attribute::Bold),
        Cell::new("Layer").add_attribute(Attribute::Bold),
    ]);
    if let Some(col) = table.column_mut(0) {
        col.set_cell_alignment(CellAlignment::Right);
    }

    for rec in &report.records {
        let outcome = if rec.outcome == "ghost" {
            Cell::new(&rec.outcome).fg(Color::Red)
        } else {
            Cell::new(&rec.outcome)
        };
        let layer = if rec.overlay_toggled {
            Cell::new(format!("{} *", rec.layer)).fg(Color::Yellow)
        } else {
            Cell::new(rec.layer.to_string())
        };
        table.add_row(vec![
            Cell::new(rec.at_ms),
            Cell::new(&rec.step),
            outcome,
            Cell::new(format_events(&rec.emitted)).fg(Color::Green),
            layer,
        ]);
    }
    println!("{}", table);
}

pub fn print_summary(report: &TraceReport) {
    let s = &report.stats;
    let mut table = Table::new();
    table.load_preset(ASCII_FULL);

    let rows: Vec<(&str, String)> = vec![
        ("Presses", s.presses.to_string()),
        ("Releases", s.releases.to_string()),
        ("Ghosts rejected", s.ghosts_rejected.to_string()),
        ("Keycodes emitted", s.keycodes_emitted.to_string()),
        ("Chords fired", s.chords_fired.to_string()),
        ("Overlay transitions", s.overlay_transitions.to_string()),
        ("Sensor reads", s.sensor_reads.to_string()),
        ("Base layer", report.final_state.base.to_string()),
        ("Effective layer", report.final_layer.to_string()),
        ("Caps LED", if report.caps_led { "on" } else { "off" }.to_string()),
    ];
    for (name, value) in rows {
        table.add_row(vec![
            Cell::new(name).add_attribute(Attribute::Bold),
            Cell::new(value).set_alignment(CellAlignment::Right),
        ]);
    }
    println!("\nSummary");
    println!("{}", table);
}
