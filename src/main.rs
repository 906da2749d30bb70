use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

use notenpfad::grades::GradeRecord;
use notenpfad::scoring::{ScoringError, SimulatedGrades};

const EXIT_SUCCESS: i32 = 0;
const EXIT_GRADES: i32 = 2;
const EXIT_INVALID_ARGUMENT: i32 = 3;
const EXIT_CONFIG: i32 = 4;
const EXIT_OUTPUT: i32 = 5;

#[derive(Subcommand, Debug)]
enum Commands {
    /// Show the composite admission score (default if no subcommand)
    Score,
    /// Grade needed on the next assessment to reach a target average
    Predict {
        /// Target average (defaults to prediction.target_average from config)
        #[arg(short, long)]
        target: Option<f64>,

        /// Weight of the next assessment (defaults to prediction.next_weight, else 1.0)
        #[arg(short = 'w', long)]
        next_weight: Option<f64>,
    },
    /// Simulate the composite score from component grades
    Simulate {
        #[arg(long)]
        math_vornote: Option<f64>,
        #[arg(long)]
        deutsch_vornote: Option<f64>,
        #[arg(long)]
        math_exam: Option<f64>,
        #[arg(long)]
        aufsatz: Option<f64>,
        #[arg(long)]
        sprachbetrachtung: Option<f64>,
    },
    /// List the subject weighting table
    Subjects,
    /// Write a default config file
    Init {
        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },
}

#[derive(Parser, Debug)]
#[command(name = "notenpfad")]
#[command(about = "Gymi admission score and target grade calculator", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to config file (defaults to ~/.config/notenpfad/config.yaml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Path to grade sheet (defaults to grades_file from config)
    #[arg(short, long, global = true)]
    grades: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("notenpfad={}", default_level)));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn load_records(cli_path: Option<PathBuf>, config_path: Option<PathBuf>) -> Vec<GradeRecord> {
    let Some(path) = cli_path.or(config_path) else {
        eprintln!("No grade sheet given. Pass --grades <FILE> or set grades_file in the config.");
        std::process::exit(EXIT_GRADES);
    };
    read_records(&path)
}

fn read_records(path: &Path) -> Vec<GradeRecord> {
    match notenpfad::grades::load_grades(path) {
        Ok(records) => records,
        Err(e) => {
            eprintln!("Grade sheet error: {:#}", e);
            std::process::exit(EXIT_GRADES);
        }
    }
}

fn print_json<T: serde::Serialize>(value: &T) {
    match notenpfad::output::to_json(value) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("Output error: {:#}", e);
            std::process::exit(EXIT_OUTPUT);
        }
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let command = cli.command.unwrap_or(Commands::Score);
    let use_colors = notenpfad::output::should_use_colors();

    // Init runs before loading, so a broken config can be replaced
    if let Commands::Init { force } = command {
        let path = match cli.config.clone() {
            Some(p) => Ok(p),
            None => notenpfad::config::get_config_path(),
        };
        let path = match path {
            Ok(p) => p,
            Err(e) => {
                eprintln!("Config error: {:#}", e);
                std::process::exit(EXIT_CONFIG);
            }
        };
        if let Err(e) = notenpfad::config::write_default_config(&path, force) {
            eprintln!("Config error: {:#}", e);
            std::process::exit(EXIT_CONFIG);
        }
        println!("Wrote default config to {}", path.display());
        std::process::exit(EXIT_SUCCESS);
    }

    let config = match notenpfad::config::load_config(cli.config) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Config error: {:#}", e);
            std::process::exit(EXIT_CONFIG);
        }
    };

    if let Err(errors) = notenpfad::config::validate_config(&config) {
        eprintln!("Config errors:");
        for error in errors {
            eprintln!("  - {}", error);
        }
        std::process::exit(EXIT_CONFIG);
    }

    match command {
        Commands::Score => {
            let records = load_records(cli.grades, config.grades_path());
            if cli.verbose {
                eprintln!("{}", notenpfad::output::format_grade_list(&records, use_colors));
                eprintln!();
            }

            let result = notenpfad::scoring::score(&records);
            if cli.json {
                print_json(&result);
            } else {
                println!("{}", notenpfad::output::format_score_report(&result, use_colors));
            }
        }
        Commands::Predict {
            target,
            next_weight,
        } => {
            let Some(target) = target.or_else(|| config.target_average()) else {
                eprintln!("No target average given. Pass --target or set prediction.target_average.");
                std::process::exit(EXIT_INVALID_ARGUMENT);
            };
            let next_weight = next_weight.unwrap_or_else(|| config.next_weight());
            let records = load_records(cli.grades, config.grades_path());
            let weights = config.weighting_table();

            match notenpfad::scoring::predict(&records, &weights, target, next_weight) {
                Ok(prediction) => {
                    if cli.json {
                        print_json(&prediction);
                    } else {
                        println!(
                            "{}",
                            notenpfad::output::format_prediction(&prediction, target, use_colors)
                        );
                    }
                }
                Err(ScoringError::InvalidArgument(msg)) => {
                    eprintln!("Invalid argument: {}", msg);
                    std::process::exit(EXIT_INVALID_ARGUMENT);
                }
            }
        }
        Commands::Simulate {
            math_vornote,
            deutsch_vornote,
            math_exam,
            aufsatz,
            sprachbetrachtung,
        } => {
            let grades = SimulatedGrades {
                math_pre_exam: math_vornote,
                german_pre_exam: deutsch_vornote,
                math_exam,
                german_essay: aufsatz,
                german_language_analysis: sprachbetrachtung,
            };
            match notenpfad::scoring::simulate(&grades) {
                Some(result) if cli.json => print_json(&result),
                Some(result) => {
                    println!("{}", notenpfad::output::format_score_report(&result, use_colors))
                }
                None if cli.json => println!("null"),
                None => println!("Gib Noten ein, um das Ergebnis zu sehen."),
            }
        }
        Commands::Subjects => {
            // Without a grade sheet every subject is listed without an average
            let records = cli
                .grades
                .or_else(|| config.grades_path())
                .map(|path| read_records(&path))
                .unwrap_or_default();
            let subjects = notenpfad::scoring::subject_averages(
                config.subjects.iter().map(|s| (s.name.as_str(), s.weighting)),
                &records,
            );
            if cli.json {
                print_json(&subjects);
            } else {
                println!(
                    "{}",
                    notenpfad::output::format_subjects(&subjects, use_colors)
                );
            }
        }
        // Handled before config loading
        Commands::Init { .. } => {}
    }

    std::process::exit(EXIT_SUCCESS);
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_exit_codes_distinct() {
        let codes = [
            EXIT_SUCCESS,
            EXIT_GRADES,
            EXIT_INVALID_ARGUMENT,
            EXIT_CONFIG,
            EXIT_OUTPUT,
        ];
        for (i, a) in codes.iter().enumerate() {
            for b in &codes[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_subjects_accepts_grade_sheet() {
        let cli = Cli::try_parse_from(["notenpfad", "subjects", "--grades", "noten.yaml"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Subjects)));
        assert_eq!(cli.grades, Some(PathBuf::from("noten.yaml")));
    }
}
