use std::fs;
use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use sizhu_calendar::MonthTransitionTable;
use sizhu_chart::{AnnotatedPillar, BaziChart, BirthInfo, ChartContext};
use sizhu_report::{
    StarDetailTable, StarRuleTable, current_year_energy, five_year_forecast,
    next_week_daily_energy, star_report,
};

#[derive(Parser)]
#[command(name = "sizhu", about = "Four-Pillars (BaZi) chart CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Full birth chart: pillars, luck schedule, element distribution
    Chart {
        /// Birth date (YYYY-MM-DD)
        #[arg(long)]
        date: String,
        /// Birth time (HH:MM); omit when unknown
        #[arg(long)]
        time: Option<String>,
        /// Sex: male or female
        #[arg(long)]
        sex: String,
        /// Path to the month transition table (CSV)
        #[arg(long)]
        transitions: PathBuf,
        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Annual pillar plus the 12 month pillars of the reference year
    YearEnergy {
        /// Anchor date (YYYY-MM-DD)
        #[arg(long)]
        date: String,
        /// Path to the month transition table (CSV)
        #[arg(long)]
        transitions: PathBuf,
        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Year pillars of the next five years
    Forecast {
        /// Anchor date (YYYY-MM-DD)
        #[arg(long)]
        date: String,
        /// Path to the month transition table (CSV)
        #[arg(long)]
        transitions: PathBuf,
        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Day pillars of the coming Monday-to-Sunday week
    Week {
        /// Anchor date (YYYY-MM-DD)
        #[arg(long)]
        date: String,
        /// Path to the month transition table (CSV)
        #[arg(long)]
        transitions: PathBuf,
        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Stars linking a birth chart to a target day
    Stars {
        /// Birth date (YYYY-MM-DD)
        #[arg(long)]
        birth_date: String,
        /// Target date (YYYY-MM-DD)
        #[arg(long)]
        target_date: String,
        /// Path to the month transition table (CSV)
        #[arg(long)]
        transitions: PathBuf,
        /// Path to the star rule table (CSV)
        #[arg(long)]
        rules: PathBuf,
        /// Path to the star detail table (CSV)
        #[arg(long)]
        details: PathBuf,
        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

fn parse_date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap_or_else(|_| {
        eprintln!("Invalid date '{s}', expected YYYY-MM-DD");
        std::process::exit(1);
    })
}

fn read_table(path: &PathBuf) -> String {
    fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("Failed to read {}: {e}", path.display());
        std::process::exit(1);
    })
}

fn load_transitions(path: &PathBuf) -> MonthTransitionTable {
    MonthTransitionTable::parse(&read_table(path)).unwrap_or_else(|e| {
        eprintln!("Failed to parse {}: {e}", path.display());
        std::process::exit(1);
    })
}

fn load_star_rules(path: &PathBuf) -> StarRuleTable {
    StarRuleTable::parse(&read_table(path)).unwrap_or_else(|e| {
        eprintln!("Failed to parse {}: {e}", path.display());
        std::process::exit(1);
    })
}

fn load_star_details(path: &PathBuf) -> StarDetailTable {
    StarDetailTable::parse(&read_table(path)).unwrap_or_else(|e| {
        eprintln!("Failed to parse {}: {e}", path.display());
        std::process::exit(1);
    })
}

fn print_json<T: serde::Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(text) => println!("{text}"),
        Err(e) => {
            eprintln!("Failed to serialize: {e}");
            std::process::exit(1);
        }
    }
}

fn print_pillar(label: &str, pillar: &AnnotatedPillar) {
    let hidden: Vec<String> = pillar
        .hidden_stems
        .iter()
        .zip(&pillar.hidden_stem_ten_gods)
        .map(|(stem, god)| format!("{} {}", stem.name(), god.label()))
        .collect();
    println!(
        "{label}: {}  {}  {}  hidden: {}",
        pillar.pair(),
        pillar.branch_animal.name(),
        pillar.stem_ten_god.label(),
        hidden.join(", ")
    );
}

fn print_chart(chart: &BaziChart) {
    println!("Lunar date: {}", chart.four_pillars.lunar_date);
    print_pillar("Year ", &chart.four_pillars.year);
    print_pillar("Month", &chart.four_pillars.month);
    print_pillar("Day  ", &chart.four_pillars.day);
    match &chart.four_pillars.hour {
        Some(hour) => print_pillar("Hour ", hour),
        None => println!("Hour : unknown (no birth time)"),
    }
    println!();
    println!(
        "Luck pillars ({}), starting at age {}:",
        chart.luck_pillars.direction.name(),
        chart.luck_pillars.start_age
    );
    for period in &chart.luck_pillars.periods {
        println!("  {:>2}-{:<3} {}", period.start_age, period.end_age, period.pillar.pair());
    }
    println!();
    println!("Element distribution:");
    for (element, fraction) in chart.element_distribution.entries() {
        println!("  {:<5} {:.3}", element.name(), fraction);
    }
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Chart { date, time, sex, transitions, json } => {
            let birth = BirthInfo::parse(&date, time.as_deref(), &sex).unwrap_or_else(|e| {
                eprintln!("{e}");
                std::process::exit(1);
            });
            let table = load_transitions(&transitions);
            let ctx = ChartContext::new(&table);
            match ctx.chart(&birth) {
                Ok(chart) => {
                    if json {
                        print_json(&chart);
                    } else {
                        print_chart(&chart);
                    }
                }
                Err(e) => {
                    eprintln!("Error: {e}");
                    std::process::exit(1);
                }
            }
        }

        Commands::YearEnergy { date, transitions, json } => {
            let anchor = parse_date(&date);
            let table = load_transitions(&transitions);
            let ctx = ChartContext::new(&table);
            match current_year_energy(&ctx, anchor) {
                Ok(report) => {
                    if json {
                        print_json(&report);
                    } else {
                        println!(
                            "Annual pillar at {}: {}",
                            report.anchor_date,
                            report.annual.pair()
                        );
                        println!("Months of {}:", report.reference_year);
                        for month in &report.months {
                            println!("  {:>2}  {}", month.month, month.pillar.pair());
                        }
                    }
                }
                Err(e) => {
                    eprintln!("Error: {e}");
                    std::process::exit(1);
                }
            }
        }

        Commands::Forecast { date, transitions, json } => {
            let anchor = parse_date(&date);
            let table = load_transitions(&transitions);
            let ctx = ChartContext::new(&table);
            match five_year_forecast(&ctx, anchor) {
                Ok(entries) => {
                    if json {
                        print_json(&entries);
                    } else {
                        println!("Five-year outlook from {anchor}:");
                        for entry in &entries {
                            println!("  {}  {}", entry.year, entry.pillar.pair());
                        }
                    }
                }
                Err(e) => {
                    eprintln!("Error: {e}");
                    std::process::exit(1);
                }
            }
        }

        Commands::Week { date, transitions, json } => {
            let anchor = parse_date(&date);
            let table = load_transitions(&transitions);
            let ctx = ChartContext::new(&table);
            match next_week_daily_energy(&ctx, anchor) {
                Ok(report) => {
                    if json {
                        print_json(&report);
                    } else {
                        println!(
                            "Week after {}: year {}, month {}",
                            report.anchor_date,
                            report.year.pair(),
                            report.month.pair()
                        );
                        for day in &report.days {
                            println!("  {:<9} {}  {}", day.weekday, day.date, day.pillar.pair());
                        }
                    }
                }
                Err(e) => {
                    eprintln!("Error: {e}");
                    std::process::exit(1);
                }
            }
        }

        Commands::Stars { birth_date, target_date, transitions, rules, details, json } => {
            let birth = parse_date(&birth_date);
            let target = parse_date(&target_date);
            let table = load_transitions(&transitions);
            let rules = load_star_rules(&rules);
            let details = load_star_details(&details);
            let ctx = ChartContext::new(&table);
            match star_report(&ctx, birth, target, &rules, &details) {
                Ok(report) => {
                    if json {
                        print_json(&report);
                    } else if report.stars.is_empty() {
                        println!(
                            "No stars on {} for the {} chart",
                            report.target_date, report.birth_date
                        );
                    } else {
                        println!(
                            "Stars on {} for the {} chart:",
                            report.target_date, report.birth_date
                        );
                        for star in &report.stars {
                            println!("  {}: {}", star.star, star.description);
                        }
                    }
                }
                Err(e) => {
                    eprintln!("Error: {e}");
                    std::process::exit(1);
                }
            }
        }
    }
}
