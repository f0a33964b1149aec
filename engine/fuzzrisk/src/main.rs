use std::ffi::OsString;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use fuzzrisk_engine::{AssessError, Assessment, Inputs, RuleEngine};
use fuzzrisk_profile::{diabetes_profile, Profile, ProfileError, DIABETES_TOML};
use serde_json::json;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OutputMode {
    Text,
    Json,
}

#[derive(Debug, Parser)]
#[command(
    name = "fuzzrisk",
    version,
    about = "Fuzzy-logic diabetes risk assessment",
    long_about = "fuzzrisk scores diabetes risk with a Mamdani fuzzy inference engine.\n\n\
        EXAMPLES:\n\
        \n  fuzzrisk assess --fbs 150 --bmi 27 --age 45 --physical-activity 100\n\
        \n  fuzzrisk assess --profile custom.toml -i temp=25 -i humidity=60\n\
        \n  fuzzrisk terms                      List variables and their terms\n\
        \n  fuzzrisk profile > diabetes.toml    Dump the built-in profile"
)]
struct Cli {
    /// Increase verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Rule-base profile to load instead of the built-in diabetes profile
    #[arg(long, value_name = "FILE", global = true)]
    profile: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Assess one set of measurements
    Assess(AssessArgs),
    /// List input variables and their linguistic terms
    Terms,
    /// List the rule base
    Rules,
    /// Print the built-in profile as TOML
    Profile,
}

#[derive(Debug, Args)]
struct AssessArgs {
    /// Fasting blood sugar (mg/dL)
    #[arg(long)]
    fbs: Option<f64>,
    /// Body mass index
    #[arg(long)]
    bmi: Option<f64>,
    /// Age in years
    #[arg(long)]
    age: Option<f64>,
    /// Physical activity (minutes per week)
    #[arg(long = "physical-activity")]
    physical_activity: Option<f64>,
    /// Extra input as NAME=VALUE; repeatable
    #[arg(short = 'i', long = "input", value_name = "NAME=VALUE", value_parser = parse_input)]
    inputs: Vec<(String, f64)>,
    /// Emit JSON instead of text
    #[arg(long)]
    json: bool,
    /// Also print fuzzified inputs and fired rules
    #[arg(long)]
    explain: bool,
}

impl AssessArgs {
    fn collect_inputs(&self) -> Inputs {
        let mut inputs = Inputs::new();
        let named = [
            ("fbs", self.fbs),
            ("bmi", self.bmi),
            ("age", self.age),
            ("physical_activity", self.physical_activity),
        ];
        for (name, value) in named {
            if let Some(v) = value {
                inputs.insert(name.to_string(), v);
            }
        }
        inputs.extend(self.inputs.iter().cloned());
        inputs
    }

    fn mode(&self) -> OutputMode {
        if self.json {
            OutputMode::Json
        } else {
            OutputMode::Text
        }
    }
}

fn parse_input(raw: &str) -> Result<(String, f64), String> {
    let (name, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected NAME=VALUE, got '{raw}'"))?;
    let name = name.trim();
    if name.is_empty() {
        return Err(format!("missing variable name in '{raw}'"));
    }
    let value: f64 = value
        .trim()
        .parse()
        .map_err(|e| format!("invalid number in '{raw}': {e}"))?;
    Ok((name.to_string(), value))
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    let _ = env_logger::Builder::from_default_env()
        .filter_level(level)
        .try_init();
}

fn load_profile(path: Option<&PathBuf>) -> Result<Profile, ProfileError> {
    match path {
        Some(p) => Profile::load(p),
        None => diabetes_profile(),
    }
}

fn print_assessment(engine: &RuleEngine, result: &Assessment, mode: OutputMode, explain: bool) {
    match mode {
        OutputMode::Json => {
            let activations: serde_json::Map<String, serde_json::Value> = result
                .activations
                .iter()
                .map(|(name, s)| (name.to_string(), json!(s)))
                .collect();
            let mut body = json!({
                "crispValue": result.rounded_score(),
                "classification": result.category(),
                "label": result.label,
                "activations": activations,
            });
            if explain {
                body["firedRules"] = result
                    .fired_rules()
                    .iter()
                    .map(|f| {
                        json!({
                            "rule": engine.rules()[f.rule].to_string(),
                            "strength": f.strength,
                        })
                    })
                    .collect();
            }
            println!("{body:#}");
        }
        OutputMode::Text => {
            println!("score: {:.2}", result.rounded_score());
            println!("classification: {}", result.category());
            for (name, strength) in result.activations.iter() {
                println!("  {name:<16} {strength:.4}");
            }
            if explain {
                println!("fired rules:");
                for f in result.fired_rules() {
                    println!("  {:.4}  #{:<3} {}", f.strength, f.rule, engine.rules()[f.rule]);
                }
            }
        }
    }
}

fn print_readings(engine: &RuleEngine, inputs: &Inputs) {
    match engine.fuzzify(inputs) {
        Ok(readings) => {
            for (var, reading) in engine.explain(&readings) {
                let parts: Vec<String> = reading
                    .iter()
                    .map(|(term, mu)| format!("{term}={mu:.3}"))
                    .collect();
                println!("{var}: {}", parts.join(" "));
            }
        }
        Err(e) => log::debug!("no readings to explain: {e}"),
    }
}

fn run_assess(engine: &RuleEngine, args: &AssessArgs) -> i32 {
    let inputs = args.collect_inputs();
    let mode = args.mode();
    if args.explain && mode == OutputMode::Text {
        print_readings(engine, &inputs);
    }
    match engine.assess(&inputs) {
        Ok(result) => {
            print_assessment(engine, &result, mode, args.explain);
            0
        }
        Err(err @ AssessError::Inference(_)) => {
            eprintln!("error: {err}");
            1
        }
        Err(err) => {
            eprintln!("error: {err}");
            2
        }
    }
}

fn run_terms(engine: &RuleEngine) {
    for var in engine.variables() {
        match var.range() {
            Some((lo, hi)) => println!("{} [{lo}, {hi}]", var.name()),
            None => println!("{}", var.name()),
        }
        for term in var.terms() {
            println!("  {term}");
        }
    }
    println!("output");
    for term in engine.output_terms() {
        println!("  {} {}", term.name, term.shape);
    }
}

fn run_rules(engine: &RuleEngine) {
    for (i, rule) in engine.rules().iter().enumerate() {
        println!("#{i:<3} {rule}");
    }
}

fn run_cli_from<I>(args: I) -> i32
where
    I: IntoIterator<Item = OsString>,
{
    let cli = match Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            return if e.use_stderr() { 2 } else { 0 };
        }
    };
    init_logging(cli.verbose);

    if let Command::Profile = cli.command {
        print!("{DIABETES_TOML}");
        return 0;
    }

    let engine = match load_profile(cli.profile.as_ref()).and_then(|p| p.build()) {
        Ok(engine) => engine,
        Err(e) => {
            eprintln!("error: {e}");
            return 2;
        }
    };

    match &cli.command {
        Command::Assess(args) => run_assess(&engine, args),
        Command::Terms => {
            run_terms(&engine);
            0
        }
        Command::Rules => {
            run_rules(&engine);
            0
        }
        Command::Profile => 0,
    }
}

fn main() {
    std::process::exit(run_cli_from(std::env::args_os()));
}
