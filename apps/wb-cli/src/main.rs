use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use wb_app::AppResult;
use wb_project::{load_circuit, validate_components};
use wb_sim::{SimulationResult, simulate};

#[derive(Parser)]
#[command(name = "wb-cli")]
#[command(about = "Wirebench CLI - Protoboard circuit analysis tool", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a circuit file's records
    Validate {
        /// Path to the circuit JSON file
        circuit_path: PathBuf,
    },
    /// Analyze a circuit and emit the raw result snapshot as JSON
    Simulate {
        /// Path to the circuit JSON file
        circuit_path: PathBuf,
    },
    /// Analyze a circuit and print a human-readable electrical report
    Report {
        /// Path to the circuit JSON file
        circuit_path: PathBuf,
    },
}

fn main() -> AppResult<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Validate { circuit_path } => cmd_validate(&circuit_path),
        Commands::Simulate { circuit_path } => cmd_simulate(&circuit_path),
        Commands::Report { circuit_path } => cmd_report(&circuit_path),
    }
}

fn cmd_validate(circuit_path: &Path) -> AppResult<()> {
    println!("Validating circuit: {}", circuit_path.display());
    let components = load_circuit(circuit_path).map_err(wb_app::AppError::from)?;
    let issues = validate_components(&components);

    if issues.is_empty() {
        println!("✓ Circuit is valid ({} components)", components.len());
    } else {
        println!("Found {} issue(s):", issues.len());
        for issue in &issues {
            println!("  {}", issue);
        }
    }
    Ok(())
}

fn cmd_simulate(circuit_path: &Path) -> AppResult<()> {
    let components = load_circuit(circuit_path).map_err(wb_app::AppError::from)?;
    let result = simulate(&components);
    println!(
        "{}",
        serde_json::to_string_pretty(&result)
            .map_err(|e| wb_app::AppError::Project(e.to_string()))?
    );
    Ok(())
}

fn cmd_report(circuit_path: &Path) -> AppResult<()> {
    let components = load_circuit(circuit_path).map_err(wb_app::AppError::from)?;
    print_report(&simulate(&components));
    Ok(())
}

fn print_report(result: &SimulationResult) {
    if result.is_complete {
        println!("✓ Circuit is complete");
    } else {
        println!("✗ Circuit is not complete");
    }
    if result.has_short_circuit {
        println!("✗ Short circuit detected");
    }

    for error in &result.errors {
        println!("  error: {}", error);
    }
    for warning in &result.warnings {
        println!("  warning: {}", warning);
    }

    if !result.components.is_empty() {
        println!("\nComponents:");
        for (id, state) in &result.components {
            let mut flags = String::new();
            if state.is_on {
                flags.push_str("  ON");
            }
            if state.is_burned {
                flags.push_str("  BURNED");
            }
            println!(
                "  {:<12} I={:>8.4} A  V={:>6.2} V  P={:>7.4} W{}",
                id, state.current, state.voltage, state.power, flags
            );
        }
    }

    println!("\nNodes:");
    for (name, node) in &result.nodes {
        println!("  {:<24} {:>6.2} V", name, node.voltage);
    }
}
