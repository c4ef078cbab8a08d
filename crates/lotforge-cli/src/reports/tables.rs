use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use lotforge_core::scenario::{DevelopmentScenario, EligibilityResult};

pub fn scenarios(rows: &[DevelopmentScenario], recommended: &str) {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.add_row(vec![
        Cell::new("Scenario").add_attribute(Attribute::Bold),
        Cell::new("Units").fg(Color::Cyan),
        Cell::new("Afford").fg(Color::Green),
        Cell::new("Sqft"),
        Cell::new("Height"),
        Cell::new("Stories"),
        Cell::new("Parking"),
        Cell::new("Basis").add_attribute(Attribute::Bold),
    ]);

    for i in 1..=6 {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }

    for s in rows {
        let mut name = Cell::new(&s.scenario_name);
        if s.scenario_name == recommended {
            name = name.add_attribute(Attribute::Bold).fg(Color::Yellow);
        }
        table.add_row(vec![
            name,
            Cell::new(s.max_units).fg(Color::Cyan),
            Cell::new(s.affordable_units_required).fg(Color::Green),
            Cell::new(format!("{:.0}", s.max_building_sqft)),
            Cell::new(format!("{:.0} ft", s.max_height_ft)),
            Cell::new(s.max_stories),
            Cell::new(s.parking_spaces_required),
            Cell::new(&s.legal_basis),
        ]);
    }
    println!("\n{}", table);
}

pub fn eligibility(law: &str, result: &EligibilityResult) {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    let verdict = if result.eligible {
        Cell::new("ELIGIBLE").fg(Color::Green).add_attribute(Attribute::Bold)
    } else {
        Cell::new("NOT ELIGIBLE").fg(Color::Red).add_attribute(Attribute::Bold)
    };
    table.add_row(vec![Cell::new(law).add_attribute(Attribute::Bold), verdict]);

    for reason in &result.reasons {
        table.add_row(vec![Cell::new("✓").fg(Color::Green), Cell::new(reason)]);
    }
    for exclusion in &result.exclusions {
        table.add_row(vec![Cell::new("✗").fg(Color::Red), Cell::new(exclusion)]);
    }
    for warning in &result.warnings {
        table.add_row(vec![Cell::new("⚠").fg(Color::Yellow), Cell::new(warning)]);
    }

    println!("\n{}", table);
}
