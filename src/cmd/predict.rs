use crate::reports;
use clap::Args;
use kitcheck::catalog;
use kitcheck::defaults::SessionDefaults;
use kitcheck::predictor::LinearModel;
use kitcheck::run_prediction;
use std::collections::HashMap;
use std::process;

#[derive(Args, Debug, Clone)]
pub struct PredictArgs {
    /// Seed for the session defaults (omit for a fresh random baseline).
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Override a field, e.g. --set "Cooling_Power(W)=120". Repeatable.
    #[arg(long = "set", value_name = "NAME=VALUE")]
    pub overrides: Vec<String>,
}

pub fn run(args: PredictArgs, model: &LinearModel) {
    let overrides = parse_overrides(&args.overrides).unwrap_or_else(|msg| {
        eprintln!("❌ {}", msg);
        process::exit(1);
    });

    let mut session = match args.seed {
        Some(seed) => SessionDefaults::with_seed(seed),
        None => SessionDefaults::new(),
    };

    match run_prediction(&mut session, model, &overrides) {
        Ok(outcome) => {
            reports::print_configuration(&outcome.record);
            reports::print_result(&outcome.result);
        }
        Err(e) => {
            eprintln!("❌ {}", e);
            process::exit(1);
        }
    }
}

fn parse_overrides(raw: &[String]) -> Result<HashMap<String, f64>, String> {
    let mut overrides = HashMap::new();
    for entry in raw {
        let (name, value_str) = entry
            .split_once('=')
            .ok_or_else(|| format!("Override '{}' is not NAME=VALUE", entry))?;
        let name = name.trim();
        if catalog::spec(name).is_none() {
            return Err(format!("Unknown field '{}' (see `kitcheck fields`)", name));
        }
        let value: f64 = value_str
            .trim()
            .parse()
            .map_err(|_| format!("Invalid number '{}' for field '{}'", value_str, name))?;
        overrides.insert(name.to_string(), value);
    }
    Ok(overrides)
}
