use clap::{Parser, ValueEnum};
use serde::Serialize;
use std::error::Error;
use std::process::ExitCode;
use takeoff_vspeeds::labels::{format_pounds, reported_ceiling_lb};
use takeoff_vspeeds::{
    lbs_to_metric_tons, AircraftVariant, Calculator, CalculatorConfig, CeilingLabel, Evaluation,
    OutcomeLabels, SpeedError, V2Rule,
};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

const EXIT_MTOW_EXCEEDED: u8 = 1;
const EXIT_INVALID_INPUT: u8 = 2;

#[derive(Parser)]
#[command(name = "vspeeds-cli")]
#[command(version)]
#[command(about = "Boeing 737NG V-speed estimator (NOT FOR FLIGHT PLANNING)", long_about = None)]
struct Cli {
    /// Aircraft variant (700 or 800)
    #[arg(long, value_parser = parse_variant)]
    variant: AircraftVariant,

    /// Takeoff weight (lb)
    #[arg(short = 'w', long, allow_negative_numbers = true)]
    weight_lb: f64,

    /// How V2 is formed from the weight digits
    #[arg(long, value_enum, env = "VSPEEDS_V2_RULE", default_value = "digit-splice")]
    v2_rule: V2RuleArg,

    /// Report 154,500 lb as the MTOW for both variants, as older builds did
    #[arg(long, env = "VSPEEDS_LEGACY_MTOW_LABEL")]
    legacy_mtow_label: bool,

    /// Output format
    #[arg(short = 'o', long, value_enum, default_value = "line")]
    output: OutputFormat,

    /// Enable debug logging on stderr
    #[arg(short = 'v', long)]
    verbose: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum V2RuleArg {
    DigitSplice,
    Arithmetic,
}

impl From<V2RuleArg> for V2Rule {
    fn from(arg: V2RuleArg) -> Self {
        match arg {
            V2RuleArg::DigitSplice => V2Rule::DigitSplice,
            V2RuleArg::Arithmetic => V2Rule::Arithmetic,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Line,
    Labels,
    Json,
    Csv,
}

#[derive(Debug, Serialize)]
struct Report {
    variant: AircraftVariant,
    weight_lb: f64,
    weight_tons: f64,
    config: CalculatorConfig,
    ceiling_label: CeilingLabel,
    outcome: Evaluation,
    labels: OutcomeLabels,
}

fn parse_variant(s: &str) -> Result<AircraftVariant, SpeedError> {
    s.parse()
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    let subscriber = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .compact()
        .finish();
    match tracing::subscriber::set_global_default(subscriber) {
        Ok(_) => debug!("Logging initialised"),
        Err(e) => eprintln!("Failed to initialise logging: {e}"),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = CalculatorConfig { v2_rule: cli.v2_rule.into() };
    let ceiling_label = if cli.legacy_mtow_label { CeilingLabel::Legacy } else { CeilingLabel::Corrected };
    info!(variant = %cli.variant, weight_lb = cli.weight_lb, ?config, "evaluating takeoff speeds");

    let evaluation = match Calculator::new(config).evaluate(cli.weight_lb, cli.variant) {
        Ok(evaluation) => evaluation,
        Err(e) => {
            eprintln!("ERROR: {e}");
            return ExitCode::from(EXIT_INVALID_INPUT);
        }
    };

    if let Err(e) = display_results(&cli, config, ceiling_label, &evaluation) {
        eprintln!("ERROR: {e}");
        return ExitCode::from(EXIT_INVALID_INPUT);
    }

    if evaluation.is_over_max_weight() {
        ExitCode::from(EXIT_MTOW_EXCEEDED)
    } else {
        ExitCode::SUCCESS
    }
}

fn display_results(
    cli: &Cli,
    config: CalculatorConfig,
    ceiling_label: CeilingLabel,
    evaluation: &Evaluation,
) -> Result<(), Box<dyn Error>> {
    let labels = OutcomeLabels::render(evaluation, cli.variant, ceiling_label);

    match cli.output {
        OutputFormat::Line => match evaluation {
            Evaluation::Speeds(s) => println!("V1={} VR={} V2={}", s.v1, s.vr, s.v2),
            Evaluation::OverMaxWeight { ceiling_lb } => {
                println!("ERROR: exceeds MTOW {:.0}", reported_ceiling_lb(*ceiling_lb, ceiling_label));
            }
        },

        OutputFormat::Labels => {
            println!("{}", cli.variant);
            println!("Takeoff weight:  {} lb", format_pounds(cli.weight_lb));
            println!("V1 = {}", labels.v1);
            println!("VR = {}", labels.vr);
            println!("V2 = {}", labels.v2);
        },

        OutputFormat::Json => {
            let report = Report {
                variant: cli.variant,
                weight_lb: cli.weight_lb,
                weight_tons: lbs_to_metric_tons(cli.weight_lb),
                config,
                ceiling_label,
                outcome: *evaluation,
                labels,
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
        },

        OutputFormat::Csv => {
            println!("variant,weight_lb,v1,vr,v2,mtow_exceeded");
            let (v1, vr, v2) = match evaluation.speeds() {
                Some(s) => (s.v1.to_string(), s.vr.to_string(), s.v2.to_string()),
                None => (String::new(), String::new(), String::new()),
            };
            println!("{},{},{},{},{},{}", cli.variant.code(), cli.weight_lb, v1, vr, v2, evaluation.is_over_max_weight());
        },
    }

    Ok(())
}
