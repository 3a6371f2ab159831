/// Prints every attached monitor with its bounds and work area.
#[cfg(windows)]
pub fn execute() {
    use comfy_table::presets::UTF8_FULL;
    use comfy_table::{Cell, CellAlignment, ContentArrangement, Table};

    let monitors = match casement_windows::enumerate_monitors() {
        Ok(monitors) => monitors,
        Err(e) => {
            eprintln!("Error: could not enumerate monitors: {e}");
            std::process::exit(1);
        }
    };

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("#"),
            Cell::new("Primary"),
            Cell::new("Bounds"),
            Cell::new("Work area"),
            Cell::new("Width").set_alignment(CellAlignment::Right),
            Cell::new("Height").set_alignment(CellAlignment::Right),
        ]);

    for (i, m) in monitors.iter().enumerate() {
        table.add_row(vec![
            Cell::new(i),
            Cell::new(if m.primary { "yes" } else { "" }),
            Cell::new(m.bounds),
            Cell::new(m.work_area),
            Cell::new(m.work_area.width).set_alignment(CellAlignment::Right),
            Cell::new(m.work_area.height).set_alignment(CellAlignment::Right),
        ]);
    }

    println!("{table}");
    println!("\n{} monitor(s) found", monitors.len());
}

#[cfg(not(windows))]
pub fn execute() {
    eprintln!("Error: monitor enumeration is only available on Windows.");
    std::process::exit(1);
}
