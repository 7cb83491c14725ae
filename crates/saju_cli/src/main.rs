use anyhow::Context;
use clap::{Parser, Subcommand};
use saju_astro::{ALL_SOLAR_TERMS, term_time};
use saju_core::{Sex, four_pillars, luck_cycles, to_lunar};
use saju_time::{CivilDateTime, Moment};
use tracing::debug;

mod logging;

#[derive(Parser)]
#[command(name = "saju", about = "Saju four-pillars CLI")]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Emit machine-readable JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Four pillars for a birth moment
    Pillars {
        /// Local date (YYYY-MM-DD)
        date: String,
        /// Local time (hh:mm or hh:mm:ss)
        time: String,
        /// UTC offset in hours
        #[arg(long, default_value = "9")]
        tz: f64,
        /// Geographic longitude in degrees (east positive)
        #[arg(long, default_value = "126.98")]
        lon: f64,
        /// Bin hours by local mean solar time instead of the civil clock
        #[arg(long)]
        lmt: bool,
    },
    /// Lunisolar calendar date for a Gregorian date
    Lunar {
        /// Gregorian date (YYYY-MM-DD)
        date: String,
    },
    /// Luck-cycle (decade pillar) timeline for a birth moment
    Luck {
        /// Local date (YYYY-MM-DD)
        date: String,
        /// Local time (hh:mm or hh:mm:ss)
        time: String,
        /// Sex: male or female
        sex: String,
        /// Number of cycles to compute
        #[arg(long, default_value = "8")]
        cycles: u16,
        /// UTC offset in hours
        #[arg(long, default_value = "9")]
        tz: f64,
        /// Geographic longitude in degrees (east positive)
        #[arg(long, default_value = "126.98")]
        lon: f64,
        /// Bin hours by local mean solar time instead of the civil clock
        #[arg(long)]
        lmt: bool,
    },
    /// Solar-term crossing instants (UTC) for a year
    Terms {
        /// Gregorian year
        year: i32,
    },
}

fn parse_date(s: &str) -> Result<(i32, u32, u32), String> {
    let parts: Vec<&str> = s.split('-').collect();
    if parts.len() != 3 {
        return Err(format!("expected YYYY-MM-DD, got {s}"));
    }
    let year: i32 = parts[0].parse().map_err(|e| format!("{e}"))?;
    let month: u32 = parts[1].parse().map_err(|e| format!("{e}"))?;
    let day: u32 = parts[2].parse().map_err(|e| format!("{e}"))?;
    Ok((year, month, day))
}

fn parse_time(s: &str) -> Result<(u32, u32, f64), String> {
    let parts: Vec<&str> = s.split(':').collect();
    if parts.len() != 2 && parts.len() != 3 {
        return Err(format!("expected hh:mm or hh:mm:ss, got {s}"));
    }
    let hour: u32 = parts[0].parse().map_err(|e| format!("{e}"))?;
    let minute: u32 = parts[1].parse().map_err(|e| format!("{e}"))?;
    let second: f64 = if parts.len() == 3 {
        parts[2].parse().map_err(|e| format!("{e}"))?
    } else {
        0.0
    };
    Ok((hour, minute, second))
}

fn parse_sex(s: &str) -> Sex {
    match s.to_lowercase().as_str() {
        "male" | "m" => Sex::Male,
        "female" | "f" => Sex::Female,
        _ => {
            eprintln!("Invalid sex: {s} (male or female)");
            std::process::exit(1);
        }
    }
}

fn require_moment(date: &str, time: &str, tz: f64, lon: f64) -> Moment {
    let moment = parse_date(date)
        .and_then(|(y, mo, d)| {
            let (h, mi, s) = parse_time(time)?;
            Moment::with_seconds(y, mo, d, h, mi, s, tz, lon).map_err(|e| format!("{e}"))
        })
        .unwrap_or_else(|e| {
            eprintln!("{e}");
            std::process::exit(1);
        });
    debug!(jd_utc = moment.to_jd_utc(), "parsed birth moment");
    moment
}

fn pillar_json(gz: saju_core::GanZhi) -> serde_json::Value {
    serde_json::json!({
        "index": gz.index(),
        "hanja": gz.to_string(),
        "name": gz.name(),
        "stem": gz.stem().name(),
        "branch": gz.branch().name(),
    })
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match cli.command {
        Commands::Pillars {
            date,
            time,
            tz,
            lon,
            lmt,
        } => {
            let moment = require_moment(&date, &time, tz, lon);
            let p = four_pillars(&moment, lmt);
            if cli.json {
                println!(
                    "{}",
                    serde_json::json!({
                        "year": pillar_json(p.year),
                        "month": pillar_json(p.month),
                        "day": pillar_json(p.day),
                        "hour": pillar_json(p.hour),
                    })
                );
            } else {
                println!("Year:  {} ({})", p.year, p.year.name());
                println!("Month: {} ({})", p.month, p.month.name());
                println!("Day:   {} ({})", p.day, p.day.name());
                println!("Hour:  {} ({})", p.hour, p.hour.name());
                println!("Animal: {}", p.year.branch().animal());
            }
        }

        Commands::Lunar { date } => {
            let (y, mo, d) = parse_date(&date).unwrap_or_else(|e| {
                eprintln!("{e}");
                std::process::exit(1);
            });
            let l = to_lunar(y, mo, d).with_context(|| format!("converting {date}"))?;
            if cli.json {
                println!(
                    "{}",
                    serde_json::json!({
                        "year": l.year,
                        "month": l.month,
                        "day": l.day,
                        "is_leap_month": l.is_leap_month,
                    })
                );
            } else {
                let leap = if l.is_leap_month { " (leap month)" } else { "" };
                println!("Lunar: {}-{:02}-{:02}{leap}", l.year, l.month, l.day);
            }
        }

        Commands::Luck {
            date,
            time,
            sex,
            cycles,
            tz,
            lon,
            lmt,
        } => {
            let moment = require_moment(&date, &time, tz, lon);
            let sex = parse_sex(&sex);
            let p = four_pillars(&moment, lmt);
            let t = luck_cycles(&moment, p.month, sex, p.year.stem(), cycles)
                .context("computing luck cycles")?;
            debug!(
                term = t.boundary_term.name(),
                jd = t.boundary_jd,
                "boundary crossing"
            );
            if cli.json {
                let cycles: Vec<serde_json::Value> = t
                    .cycles
                    .iter()
                    .map(|c| {
                        serde_json::json!({
                            "order": c.order,
                            "start_age_years": c.start_age_years,
                            "end_age_years": c.end_age_years,
                            "start_utc": CivilDateTime::from_jd(c.start_jd).to_string(),
                            "pillar": pillar_json(c.pillar),
                        })
                    })
                    .collect();
                println!(
                    "{}",
                    serde_json::json!({
                        "direction": t.direction.name(),
                        "boundary_term": t.boundary_term.name(),
                        "boundary_utc": CivilDateTime::from_jd(t.boundary_jd).to_string(),
                        "start_age_years": t.start_age_years,
                        "cycles": cycles,
                    })
                );
            } else {
                println!(
                    "Direction: {}  Boundary: {} at {} UTC",
                    t.direction.name(),
                    t.boundary_term.name(),
                    CivilDateTime::from_jd(t.boundary_jd)
                );
                println!("Start age: {:.2} years", t.start_age_years);
                for c in &t.cycles {
                    println!(
                        "  {:>2}. age {:6.2}-{:6.2}  {} ({})  from {} UTC",
                        c.order,
                        c.start_age_years,
                        c.end_age_years,
                        c.pillar,
                        c.pillar.name(),
                        CivilDateTime::from_jd(c.start_jd)
                    );
                }
            }
        }

        Commands::Terms { year } => {
            if cli.json {
                let terms: Vec<serde_json::Value> = ALL_SOLAR_TERMS
                    .iter()
                    .map(|&term| {
                        let jd = term_time(year, term);
                        serde_json::json!({
                            "term": term.name(),
                            "hanja": term.hanja(),
                            "longitude_deg": term.target_longitude_deg(),
                            "utc": CivilDateTime::from_jd(jd).to_string(),
                            "jd": jd,
                        })
                    })
                    .collect();
                println!("{}", serde_json::json!({ "year": year, "terms": terms }));
            } else {
                for term in ALL_SOLAR_TERMS {
                    let jd = term_time(year, term);
                    println!(
                        "{:<12} {} {:>5.1} deg  {} UTC",
                        term.name(),
                        term.hanja(),
                        term.target_longitude_deg(),
                        CivilDateTime::from_jd(jd)
                    );
                }
            }
        }
    }

    Ok(())
}
