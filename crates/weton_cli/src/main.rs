use std::path::PathBuf;

use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::debug;
use tracing_subscriber::EnvFilter;
use weton_rs::{
    BirthDate, BoundaryKind, DayPairing, EngineConfig, EngineError, JodohOutcome, JodohResult,
    WetonError, WetonProfile, WukuProfile,
};

#[derive(Parser)]
#[command(name = "weton", about = "Javanese weton, wuku and jodoh calculator")]
struct Cli {
    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,
    /// TOML config file (day_boundary, sunset_hour, day_pairing)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Use the sunset day boundary regardless of config
    #[arg(long, global = true)]
    sunset: bool,
    /// More log output (-v debug, -vv trace); RUST_LOG overrides
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Weton profile of a birth date
    Profile {
        /// Birth date (YYYY-MM-DD)
        date: String,
        /// Birth time (hh:mm[:ss])
        #[arg(long)]
        time: Option<String>,
    },
    /// Wuku profile of a birth date
    Wuku {
        /// Birth date (YYYY-MM-DD)
        date: String,
        /// Birth time (hh:mm[:ss])
        #[arg(long)]
        time: Option<String>,
    },
    /// Jodoh (compatibility) of two birth dates
    Jodoh {
        /// Person A's birth date
        a: String,
        /// Person B's birth date
        b: String,
        /// Keep (A, B) order in the day-name lookup
        #[arg(long)]
        ordered: bool,
    },
    /// Next (or previous) dates falling on a weton
    Next {
        /// Weton, e.g. "Jumat Kliwon"
        weton: String,
        /// Search from this date (exclusive)
        #[arg(long)]
        after: String,
        /// Number of dates to list
        #[arg(long, default_value = "1")]
        count: u32,
        /// Search backwards
        #[arg(long)]
        prev: bool,
    },
    /// First day of the next occurrence of a wuku
    NextWuku {
        /// Wuku name, e.g. "Galungan"
        wuku: String,
        /// Search from this date (exclusive)
        #[arg(long)]
        after: String,
    },
    /// Next weton anniversary (selapan) of a birth
    Selapan {
        /// Birth date (YYYY-MM-DD)
        date: String,
        /// Birth time (hh:mm[:ss])
        #[arg(long)]
        time: Option<String>,
        /// Search from this date (exclusive)
        #[arg(long)]
        after: String,
    },
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn load_config(cli: &Cli) -> EngineConfig {
    let mut config = match &cli.config {
        Some(path) => EngineConfig::from_file(path).unwrap_or_else(|e| fail(e)),
        None => EngineConfig::default(),
    };
    if cli.sunset {
        config.day_boundary = BoundaryKind::Sunset;
    }
    if let Commands::Jodoh { ordered: true, .. } = cli.command {
        config.day_pairing = DayPairing::Ordered;
    }
    config
}

fn fail(e: WetonError) -> ! {
    eprintln!("Error: {e}");
    std::process::exit(1);
}

fn or_exit<T>(r: Result<T, WetonError>) -> T {
    r.unwrap_or_else(|e| fail(e))
}

/// Up to `count` successive dates on `weton`, stopping early at either
/// end of the supported range.
fn find_wetons(
    weton: &str,
    from: String,
    count: u32,
    prev: bool,
) -> Result<Vec<BirthDate>, WetonError> {
    let mut dates = Vec::new();
    let mut from = from;
    for _ in 0..count {
        let found = if prev {
            weton_rs::prev_weton(&from, weton)
        } else {
            weton_rs::next_weton(&from, weton)
        };
        let d = match found {
            Ok(d) => d,
            Err(WetonError::Date(_) | WetonError::Engine(EngineError::InvalidDate(_)))
                if !dates.is_empty() =>
            {
                debug!(count = dates.len(), "search reached the end of the supported range");
                break;
            }
            Err(e) => return Err(e),
        };
        from = d.to_string();
        dates.push(d);
    }
    Ok(dates)
}

fn print_json<T: Serialize + ?Sized>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(s) => println!("{s}"),
        Err(e) => {
            eprintln!("Error: failed to encode JSON: {e}");
            std::process::exit(1);
        }
    }
}

fn print_profile(p: &WetonProfile) {
    println!("Date:         {}", p.date);
    if let Some(t) = p.birth_time {
        println!("Time:         {t}");
    }
    if p.day_shifted {
        println!("              (after the day boundary; counted as the next day)");
    }
    println!(
        "Weton:        {} ({} {})",
        p.weton,
        p.dina().krama_name(),
        p.pasaran().krama_name()
    );
    println!(
        "Neptu:        {} + {} = {}",
        p.neptu_dina, p.neptu_pasaran, p.total_neptu
    );
    println!("Laku:         {} - {}", p.laku.title, p.laku.description);
    println!("Rakam:        {} - {}", p.rakam.title, p.rakam.description);
    println!(
        "Pancasuda:    {} ({}) - {}",
        p.pancasuda.title, p.pancasuda_remainder, p.pancasuda.description
    );
    println!("Sadwara:      {} ({})", p.sadwara.name(), p.sadwara_character.title);
    println!(
        "Hastawara:    {} ({})",
        p.hastawara.name(),
        p.hastawara_character.title
    );
    println!("Day:          {}", p.day_character.description);
    println!("Pasaran:      {}", p.pasaran_character.description);
    println!("Archetype:    {} - {}", p.archetype.archetype, p.archetype.vibe);
}

fn print_wuku(w: &WukuProfile) {
    println!("Wuku:         {} ({} of 30)", w.wuku.name(), w.number);
    println!("Day:          {} of 7 ({} of 210)", w.day_in_wuku, w.pawukon_day);
    println!("Deity:        {} - {}", w.guardian_deity.name, w.guardian_deity.meaning);
    println!("Tree:         {} - {}", w.tree.name, w.tree.meaning);
    println!("Bird:         {} - {}", w.bird.name, w.bird.meaning);
    println!("Character:    {}", w.character);
}

fn print_outcome(o: &JodohOutcome) {
    println!(
        "  mod {}: {} ({}) - {}",
        o.modulus, o.label, o.remainder, o.description
    );
}

fn print_jodoh(a: &WetonProfile, b: &WetonProfile, r: &JodohResult) {
    println!(
        "{} ({}) + {} ({}) = {}",
        a.weton, a.total_neptu, b.weton, b.total_neptu, r.combined_neptu
    );
    for o in [&r.jodoh4, &r.jodoh5, &r.jodoh7, &r.jodoh8] {
        print_outcome(o);
    }
    println!(
        "  mod 9: {} ({}, {}) - {}",
        r.jodoh9.label, r.jodoh9.remainder_a, r.jodoh9.remainder_b, r.jodoh9.description
    );
    println!(
        "  days:  {} - {}: {} - {}",
        r.jodoh_day.first.name(),
        r.jodoh_day.second.name(),
        r.jodoh_day.label,
        r.jodoh_day.description
    );
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = load_config(&cli);
    debug!(?config, "loaded configuration");
    or_exit(weton_rs::init(config));

    match cli.command {
        Commands::Profile { date, time } => {
            let p = or_exit(weton_rs::weton_profile(&date, time.as_deref()));
            if cli.json {
                print_json(&p);
            } else {
                print_profile(&p);
            }
        }

        Commands::Wuku { date, time } => {
            let w = or_exit(weton_rs::wuku_profile(&date, time.as_deref()));
            if cli.json {
                print_json(&w);
            } else {
                print_wuku(&w);
            }
        }

        Commands::Jodoh { a, b, .. } => {
            let pa = or_exit(weton_rs::weton_profile(&a, None));
            let pb = or_exit(weton_rs::weton_profile(&b, None));
            let r = or_exit(weton_rs::jodoh(&pa, &pb));
            if cli.json {
                print_json(&r);
            } else {
                print_jodoh(&pa, &pb, &r);
            }
        }

        Commands::Next {
            weton,
            after,
            count,
            prev,
        } => {
            let dates = or_exit(find_wetons(&weton, after, count, prev));
            if cli.json {
                print_json(&dates);
            } else {
                for d in &dates {
                    println!("{d}  {weton}");
                }
            }
        }

        Commands::NextWuku { wuku, after } => {
            let d = or_exit(weton_rs::next_wuku_start(&after, &wuku));
            if cli.json {
                print_json(&d);
            } else {
                println!("{d}  wuku {wuku} begins");
            }
        }

        Commands::Selapan { date, time, after } => {
            let s = or_exit(weton_rs::next_selapan(&date, time.as_deref(), &after));
            if cli.json {
                print_json(&s);
            } else {
                println!("Selapan {}: {}", s.number, s.date);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn ordered_flag_sets_pairing() {
        let cli = Cli::parse_from(["weton", "jodoh", "1990-05-12", "1992-11-03", "--ordered"]);
        assert_eq!(load_config(&cli).day_pairing, DayPairing::Ordered);
        let cli = Cli::parse_from(["weton", "--sunset", "profile", "1990-05-12"]);
        let config = load_config(&cli);
        assert_eq!(config.day_boundary, BoundaryKind::Sunset);
        assert_eq!(config.day_pairing, DayPairing::Unordered);
    }

    #[test]
    fn huge_count_stops_at_range_end() {
        let dates = find_wetons("Jumat Kliwon", "9999-01-01".to_string(), u32::MAX, false).unwrap();
        assert!((10..=11).contains(&dates.len()));
        assert!(dates.last().unwrap().year() == 9999);

        let dates = find_wetons("Jumat Kliwon", "0001-03-01".to_string(), u32::MAX, true).unwrap();
        assert!((1..=2).contains(&dates.len()));
    }

    #[test]
    fn bad_weton_name_fails() {
        assert!(matches!(
            find_wetons("Jumat Blabla", "2024-01-01".to_string(), 3, false),
            Err(WetonError::Name(_))
        ));
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::parse_from([
            "weton",
            "next",
            "Jumat Kliwon",
            "--after",
            "2024-01-01",
            "--json",
            "-vv",
        ]);
        assert!(cli.json);
        assert_eq!(cli.verbose, 2);
    }
}
