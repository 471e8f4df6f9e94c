use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use neff::evaluator::{Band, CoefficientResult};
use neff::measurements::{Arch, MeasurementField, MeasurementSet};
use neff::reference;
use strum::IntoEnumIterator;

pub fn measurement_table(set: &MeasurementSet) -> Table {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(vec![
        Cell::new("Arch").add_attribute(Attribute::Bold),
        Cell::new("Tooth").add_attribute(Attribute::Bold),
        Cell::new("Field"),
        Cell::new("Width (mm)").fg(Color::Cyan),
        Cell::new("Ideal"),
        Cell::new("Normal"),
    ]);

    for field in MeasurementField::iter() {
        let range = field.reference_range();
        table.add_row(vec![
            Cell::new(field.arch()),
            Cell::new(field.label()),
            Cell::new(field),
            Cell::new(format!("{:.2}", set.get(field))).set_alignment(CellAlignment::Right),
            Cell::new(format!("{:.1}", field.ideal())).set_alignment(CellAlignment::Right),
            Cell::new(format!("{:.1}-{:.1}", range.start(), range.end())),
        ]);
    }

    table.add_row(vec![
        Cell::new(Arch::Maxillary),
        Cell::new("Sum").add_attribute(Attribute::Bold),
        Cell::new(""),
        Cell::new(format!("{:.2}", set.maxillary_sum())).set_alignment(CellAlignment::Right),
        Cell::new(""),
        Cell::new(""),
    ]);
    table.add_row(vec![
        Cell::new(Arch::Mandibular),
        Cell::new("Sum").add_attribute(Attribute::Bold),
        Cell::new(""),
        Cell::new(format!("{:.2}", set.mandibular_sum())).set_alignment(CellAlignment::Right),
        Cell::new(""),
        Cell::new(""),
    ]);
    table
}

pub fn range_notes(set: &MeasurementSet, fields: &[MeasurementField]) -> Vec<String> {
    fields
        .iter()
        .map(|f| {
            let range = f.reference_range();
            format!(
                "Note: {} {} = {:.2} mm is outside the usual {:.1}-{:.1} mm",
                f.arch(),
                f.label(),
                set.get(*f),
                range.start(),
                range.end()
            )
        })
        .collect()
}

pub fn result_table(result: &CoefficientResult) -> Table {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    let colour = match result.band {
        Band::Ideal => Color::Green,
        Band::BelowIdeal | Band::AboveIdeal => Color::Red,
    };

    table.add_row(vec![
        Cell::new("Anterior Coefficient").add_attribute(Attribute::Bold),
        Cell::new(result.coefficient_line()).fg(Color::Blue),
    ]);
    table.add_row(vec![
        Cell::new("Interpretation").add_attribute(Attribute::Bold),
        Cell::new(&result.message).fg(colour),
    ]);
    table
}

/// The reference text with its section headings in a bold left column.
pub fn reference_panel() -> String {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    for (heading, body) in reference::sections() {
        table.add_row(vec![
            Cell::new(heading).add_attribute(Attribute::Bold),
            Cell::new(body.join("\n")),
        ]);
    }
    format!("{}\n{}", reference::banner(), table)
}

pub fn print_measurement_table(set: &MeasurementSet) {
    println!("\n{}", reference::TITLE);
    println!("{}", measurement_table(set));
}

pub fn print_range_notes(set: &MeasurementSet, fields: &[MeasurementField]) {
    for note in range_notes(set, fields) {
        println!("{}", note);
    }
}

pub fn print_result(result: &CoefficientResult) {
    println!("{}", result_table(result));
}

pub fn print_reference_panel() {
    println!("{}", reference_panel());
}
