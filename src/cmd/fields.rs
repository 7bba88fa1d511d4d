use comfy_table::presets::ASCII_FULL;
use comfy_table::{Cell, CellAlignment, Table};
use kitcheck::catalog::{fields, DefaultRule};

pub fn run() {
    let mut table = Table::new();
    table.load_preset(ASCII_FULL);
    table.set_header(vec!["Field", "Unit", "Min", "Max", "Default Rule"]);

    for spec in fields() {
        let max = spec
            .max
            .map_or("-".to_string(), |m| format!("{}", m));
        let rule = match spec.rule {
            DefaultRule::Uniform { lo, hi } => format!("uniform {}..{}", lo, hi),
            DefaultRule::Choice(set) => {
                let opts: Vec<String> = set.iter().map(|v| format!("{}", v)).collect();
                format!("one of {{{}}}", opts.join(","))
            }
        };
        table.add_row(vec![
            Cell::new(spec.name),
            Cell::new(spec.unit),
            Cell::new(spec.min).set_alignment(CellAlignment::Right),
            Cell::new(max).set_alignment(CellAlignment::Right),
            Cell::new(rule),
        ]);
    }

    println!("{table}");
}
