use comfy_table::presets::ASCII_FULL;
use comfy_table::{Cell, CellAlignment, Color, Table};
use kitcheck::catalog;
use kitcheck::classifier::{PredictionResult, Tier};
use kitcheck::record::ConfigurationRecord;

pub fn print_configuration(record: &ConfigurationRecord) {
    let mut table = Table::new();
    table.load_preset(ASCII_FULL);
    table.set_header(vec!["Field", "Value", "Unit"]);

    for (name, value) in record.iter() {
        let (text, unit) = match catalog::spec(name) {
            Some(spec) => (format_value(value, spec.decimals), spec.unit),
            None => (format!("{}", value), ""),
        };
        table.add_row(vec![
            Cell::new(name),
            Cell::new(text).set_alignment(CellAlignment::Right),
            Cell::new(unit),
        ]);
    }

    println!("\nCurrent Configuration:");
    println!("{table}");
}

pub fn print_result(result: &PredictionResult) {
    let (icon, color) = match result.tier {
        Tier::Excellent => ("✅", Color::Green),
        Tier::Good => ("⚠️ ", Color::Yellow),
        Tier::Low => ("❌", Color::Red),
    };

    let mut table = Table::new();
    table.load_preset(ASCII_FULL);
    table.add_row(vec![
        Cell::new("Predicted System Compatibility"),
        Cell::new(format!("{:.1}%", result.display_score))
            .fg(color)
            .set_alignment(CellAlignment::Right),
        Cell::new(format!("{}", result.tier)).fg(color),
    ]);
    println!("{table}");
    println!(
        "{} {} compatibility: {}",
        icon,
        result.tier,
        result.tier.message()
    );
}

fn format_value(value: f64, decimals: u32) -> String {
    format!("{:.*}", decimals as usize, value)
}
