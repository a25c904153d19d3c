use bmi_core::*;
use clap::{Parser, Subcommand};
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "bmical")]
#[command(about = "Interactive BMI calculator with session history", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Override export directory
    #[arg(long, global = true)]
    export_dir: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute a single BMI reading and print the result
    Compute {
        /// Unit system (metric, imperial)
        #[arg(long)]
        units: Option<String>,

        /// Height in cm (metric) or inches (imperial)
        #[arg(long)]
        height: f64,

        /// Weight in kg (metric) or lbs (imperial)
        #[arg(long)]
        weight: f64,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Run an interactive session with history tracking (default)
    Session {
        /// Unit system (metric, imperial)
        #[arg(long)]
        units: Option<String>,
    },
}

fn main() -> Result<()> {
    // Initialize logging
    bmi_core::logging::init();

    let cli = Cli::parse();

    let config = Config::load()?;
    let export_dir = cli
        .export_dir
        .unwrap_or_else(|| config.export.dir.clone());
    tracing::debug!("export directory: {:?}", export_dir);

    match cli.command {
        Some(Commands::Compute {
            units,
            height,
            weight,
            json,
        }) => cmd_compute(&config, units, height, weight, json),
        Some(Commands::Session { units }) => cmd_session(&config, export_dir, units),
        None => {
            // Default to an interactive session
            cmd_session(&config, export_dir, None)
        }
    }
}

// ============================================================================
// Input ranges (the original slider bounds; the engine itself only
// requires positive values)
// ============================================================================

fn height_range(units: UnitSystem) -> (f64, f64) {
    match units {
        UnitSystem::Metric => (40.0, 270.0),
        UnitSystem::Imperial => (40.0, 100.0),
    }
}

fn weight_range(units: UnitSystem) -> (f64, f64) {
    match units {
        UnitSystem::Metric => (40.0, 300.0),
        UnitSystem::Imperial => (80.0, 600.0),
    }
}

fn clamp_to_range(label: &str, value: f64, lo: f64, hi: f64) -> f64 {
    if value < lo || value > hi {
        eprintln!(
            "{} {} is outside {:.0} to {:.0}, clamping.",
            label, value, lo, hi
        );
        value.clamp(lo, hi)
    } else {
        value
    }
}

fn resolve_units(flag: Option<String>, config: &Config) -> UnitSystem {
    match flag {
        Some(s) => match s.parse::<UnitSystem>() {
            Ok(units) => units,
            Err(_) => {
                eprintln!("Unknown unit system: {}. Using {}.", s, config.units.default);
                config.units.default
            }
        },
        None => config.units.default,
    }
}

fn other_units(units: UnitSystem) -> UnitSystem {
    match units {
        UnitSystem::Metric => UnitSystem::Imperial,
        UnitSystem::Imperial => UnitSystem::Metric,
    }
}

// ============================================================================
// Commands
// ============================================================================

fn cmd_compute(
    config: &Config,
    units_flag: Option<String>,
    height: f64,
    weight: f64,
    json: bool,
) -> Result<()> {
    let units = resolve_units(units_flag, config);
    let (h_lo, h_hi) = height_range(units);
    let (w_lo, w_hi) = weight_range(units);

    let measurement = Measurement {
        height: clamp_to_range("Height", height, h_lo, h_hi),
        weight: clamp_to_range("Weight", weight, w_lo, w_hi),
        units,
    };
    let result = compute_bmi(&measurement)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        display_result(&result);
    }

    Ok(())
}

fn cmd_session(config: &Config, export_dir: PathBuf, units_flag: Option<String>) -> Result<()> {
    let mut units = resolve_units(units_flag, config);
    let mut log = HistoryLog::new();

    print_banner(units);

    'session: loop {
        let height = match prompt_value("Height", units.height_unit(), height_range(units))? {
            Some(v) => v,
            None => break,
        };
        let weight = match prompt_value("Weight", units.weight_unit(), weight_range(units))? {
            Some(v) => v,
            None => break,
        };

        let result = compute_bmi(&Measurement {
            height,
            weight,
            units,
        })?;
        display_result(&result);

        // Action loop - acts on the displayed reading until the user
        // asks for a new one
        loop {
            print_action_menu()?;

            let line = match read_input_line()? {
                Some(l) => l,
                None => break 'session,
            };

            match line.to_lowercase().as_str() {
                "" => continue 'session,

                "s" => {
                    let entry = log.record(&result, chrono::Utc::now());
                    println!("\n✓ Saved reading ({:.2}, {})", entry.value, entry.category);
                }

                "h" => display_history(&log, config.display.history_limit),

                "e" => {
                    let path = export_dir.join(EXPORT_FILE_NAME);
                    let count = log.export_csv_file(&path)?;
                    println!("\n✓ Exported {} entries to {}", count, path.display());
                }

                "u" => {
                    units = other_units(units);
                    println!("\nUnits switched to {}.", units);
                    continue 'session;
                }

                "r" => {
                    log.clear();
                    println!("\n✓ History cleared");
                }

                "q" => break 'session,

                other => println!("Unknown command: {}", other),
            }
        }
    }

    println!("\nGoodbye!");
    Ok(())
}

// ============================================================================
// Prompting
// ============================================================================

/// Read one line from stdin; None on EOF
fn read_input_line() -> Result<Option<String>> {
    let mut input = String::new();
    let bytes = io::stdin().read_line(&mut input)?;
    if bytes == 0 {
        return Ok(None);
    }
    Ok(Some(input.trim().to_string()))
}

/// Prompt for a numeric value until one parses; None on EOF or 'q'.
/// Out-of-range values are clamped to the displayed bounds.
fn prompt_value(label: &str, unit: &str, range: (f64, f64)) -> Result<Option<f64>> {
    let (lo, hi) = range;
    loop {
        print!("{} in {} ({:.0} to {:.0}): ", label, unit, lo, hi);
        io::stdout().flush()?;

        let line = match read_input_line()? {
            Some(l) => l,
            None => return Ok(None),
        };
        if line.eq_ignore_ascii_case("q") {
            return Ok(None);
        }

        match line.parse::<f64>() {
            Ok(value) => return Ok(Some(clamp_to_range(label, value, lo, hi))),
            Err(_) => println!("Enter a number, or 'q' to quit."),
        }
    }
}

fn print_action_menu() -> Result<()> {
    println!("─────────────────────────────────────────");
    println!("Press Enter for a new reading");
    println!("  's' + Enter to save this reading to history");
    println!("  'h' + Enter to show recent history");
    println!("  'e' + Enter to export history to CSV");
    println!("  'u' + Enter to switch units");
    println!("  'r' + Enter to reset history");
    println!("  'q' + Enter to quit");
    print!("> ");
    io::stdout().flush()?;
    Ok(())
}

// ============================================================================
// Rendering
// ============================================================================

fn print_banner(units: UnitSystem) {
    println!("╭─────────────────────────────────────────╮");
    println!("│  BMI CALCULATOR");
    println!("╰─────────────────────────────────────────╯");
    println!();
    println!("Units: {} (switch with 'u' after a reading)", units);
    println!();
}

fn display_result(result: &BmiResult) {
    let (lower, upper) = result.category.bounds();

    println!();
    println!("╭─────────────────────────────────────────╮");
    println!("│  YOUR BMI: {:.2}", result.value);
    println!("╰─────────────────────────────────────────╯");
    println!();
    println!(
        "  {} {} {} ({})",
        tone_marker(result.tone),
        result.emoji,
        result.category,
        format_band(lower, upper)
    );
    println!("  {}", render_gauge(result.value));
    println!();
    println!("  {}", result.advice);
    println!();
    println!("  Suggested day:");
    println!("    Breakfast  {}", result.plan.breakfast);
    println!("    Lunch      {}", result.plan.lunch);
    println!("    Dinner     {}", result.plan.dinner);
    println!("    Tip        {}", result.plan.tip);
    println!();
}

fn display_history(log: &HistoryLog, limit: usize) {
    println!();
    if log.is_empty() {
        println!("History is empty.");
        return;
    }

    println!("Recent readings (newest first):");
    for entry in log.list_recent(limit) {
        println!(
            "  {}  {:>6.2}  {}",
            entry.recorded_at.format("%H:%M:%S"),
            entry.value,
            entry.category
        );
    }
    if log.len() > limit {
        println!("  ... and {} more", log.len() - limit);
    }
}

fn tone_marker(tone: Tone) -> &'static str {
    match tone {
        Tone::Success => "✓",
        Tone::Warning => "⚠",
        Tone::Danger => "✗",
    }
}

fn format_band(lower: f64, upper: f64) -> String {
    if upper.is_infinite() {
        format!("{:.1} and above", lower)
    } else {
        format!("{:.1} to {:.1}", lower, upper)
    }
}

/// Text gauge over the displayed 10 to 50 scale
fn render_gauge(value: f64) -> String {
    const SCALE_LO: f64 = 10.0;
    const SCALE_HI: f64 = 50.0;
    const WIDTH: usize = 36;

    let frac = ((value - SCALE_LO) / (SCALE_HI - SCALE_LO)).clamp(0.0, 1.0);
    let filled = (frac * WIDTH as f64).round() as usize;
    format!(
        "10 [{}{}] 50",
        "█".repeat(filled),
        "░".repeat(WIDTH - filled)
    )
}
