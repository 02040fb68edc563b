use clap::Parser;
use df_expansion::{DEFAULT_SPECIFIC_HEAT_RATIO, ExpansionError, FlowParameters, FlowResult, solve};
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "df-cli")]
#[command(
    about = "Compressible sudden expansion with drag force. Assumes constant specific heats and subsonic, non-swirling flow",
    long_about = None
)]
struct Cli {
    /// Inlet Mach number
    #[arg(long = "mach1", visible_alias = "m1", value_name = "M1")]
    mach1: Option<f64>,

    /// Exit area / inlet area
    #[arg(long = "area-ratio", visible_alias = "ar", value_name = "AR")]
    area_ratio: Option<f64>,

    /// Drag area / inlet area
    #[arg(long = "drag-area-ratio", visible_alias = "ad", value_name = "AD")]
    drag_area_ratio: Option<f64>,

    /// Drag coefficient
    #[arg(long = "cd", value_name = "CD")]
    cd: Option<f64>,

    /// Ratio of specific heats
    #[arg(
        long = "specific-heat-ratio",
        short = 'k',
        visible_alias = "k",
        value_name = "K",
        default_value_t = DEFAULT_SPECIFIC_HEAT_RATIO
    )]
    specific_heat_ratio: f64,

    /// Emit the result as JSON instead of the formatted report
    #[arg(long)]
    json: bool,
}

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("{0} not given")]
    Missing(&'static str),

    #[error(transparent)]
    Expansion(#[from] ExpansionError),

    #[error("Failed to serialize result: {0}")]
    Json(#[from] serde_json::Error),
}

fn main() -> ExitCode {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            println!("{:<20}{err}\n", "ERROR");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    intro("Compressible Sudden Expansion with Drag");

    let inlet_mach = cli.mach1.ok_or(CliError::Missing("Inlet Mach Number"))?;
    let area_ratio = cli.area_ratio.ok_or(CliError::Missing("Area Ratio"))?;
    let drag_area_ratio = cli
        .drag_area_ratio
        .ok_or(CliError::Missing("Drag Area Ratio"))?;
    let drag_coefficient = cli.cd.ok_or(CliError::Missing("Drag Coefficient"))?;

    let params = FlowParameters::with_heat_ratio(
        inlet_mach,
        area_ratio,
        drag_area_ratio,
        drag_coefficient,
        cli.specific_heat_ratio,
    )?;

    echo_inputs(&params);

    let result = solve(&params)?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        report(&result);
    }

    Ok(())
}

fn intro(title: &str) {
    println!("\n");
    println!("+{:-<78}+", "");
    println!("|{title:^78}|");
    println!("+{:-<78}+", "");
    println!();
}

fn echo_inputs(params: &FlowParameters) {
    println!("Inputs");
    println!("{:-<20}", "");
    println!("{:<20}{:>10.6}", "Area Ratio", params.area_ratio);
    println!("{:<20}{:>10.6}", "Drag Area Ratio", params.drag_area_ratio);
    println!("{:<20}{:>10.6}", "Drag Coefficient", params.drag_coefficient);
    println!("{:<20}{:>10.6}", "Inlet Mach No", params.inlet_mach);
    println!("{:<20}{:>10.6}", "Cp/Cv", params.specific_heat_ratio);
    println!("\n");
}

fn report(result: &FlowResult) {
    println!("Converged in {:3} evaluations\n", result.evaluations);
    println!("{:<20}{:>10.6}\n", "Exit Mach No.", result.exit_mach);
    println!("{:<20}{:>10.6}\n", "Pt2/Pt1", result.pressure_ratio);
    println!("{:<20}{:>10.6}\n", "Pt Loss", result.stagnation_pressure_loss);
    println!(
        "{:<20}{:>10.6}\n",
        "Cp Loss", result.pressure_loss_coefficient
    );
}
