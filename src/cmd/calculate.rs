use crate::reports;
use clap::{ArgMatches, Args, ValueEnum};
use neff::config::MeasurementArgs;
use neff::error::NeffResult;
use neff::evaluator::evaluate;
use neff::measurements::MeasurementSet;
use std::path::PathBuf;
use tracing::warn;

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

#[derive(Args, Debug, Clone)]
pub struct CalculateArgs {
    #[command(flatten)]
    pub measurements: MeasurementArgs,

    /// JSON file with measurements; explicit flags override it
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,
}

pub fn run(args: CalculateArgs, matches: &ArgMatches) -> NeffResult<()> {
    let measurements = match &args.input {
        Some(path) => {
            let mut from_file = MeasurementArgs::load_from_file(path)?;
            from_file.merge_from_cli(&args.measurements, matches);
            from_file
        }
        None => args.measurements,
    };
    let set = MeasurementSet::from(measurements);

    let out_of_range = set.out_of_range();
    for field in &out_of_range {
        let range = field.reference_range();
        warn!(
            "{} = {} mm is outside the documented {}-{} mm range",
            field,
            set.get(*field),
            range.start(),
            range.end()
        );
    }

    let result = evaluate(&set)?;

    match args.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&result)?),
        OutputFormat::Table => {
            reports::print_measurement_table(&set);
            reports::print_range_notes(&set, &out_of_range);
            reports::print_result(&result);
        }
    }
    Ok(())
}
