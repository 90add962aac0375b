use clap::{Parser, Subcommand};

use chandra_insights::bracelet_for;
use chandra_rs::{moon_longitudes, moon_rashi};
use chandra_time::BirthInstant;
use chandra_vedic::{deg_to_dms, lahiri_ayanamsa_deg, normalize_360, rashi_from_longitude};

#[derive(Parser)]
#[command(name = "chandra", about = "Moon rashi (Vedic lunar zodiac) CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Rashi from sidereal longitude
    Rashi {
        /// Sidereal ecliptic longitude in degrees
        lon: f64,
    },
    /// Moon rashi for a UTC birth instant
    MoonRashi {
        /// UTC datetime (YYYY-MM-DDThh:mm:ssZ)
        #[arg(long)]
        date: String,
    },
    /// Moon longitude decomposition for a UTC birth instant
    MoonLongitude {
        /// UTC datetime (YYYY-MM-DDThh:mm:ssZ)
        #[arg(long)]
        date: String,
    },
    /// Lahiri ayanamsa for a UTC instant
    Ayanamsa {
        /// UTC datetime (YYYY-MM-DDThh:mm:ssZ)
        #[arg(long)]
        date: String,
    },
    /// Bracelet recommendation for a UTC birth instant
    Bracelet {
        /// UTC datetime (YYYY-MM-DDThh:mm:ssZ)
        #[arg(long)]
        date: String,
    },
    /// Convert degrees to DMS
    Dms {
        /// Angle in decimal degrees
        deg: f64,
    },
}

fn parse_instant(s: &str) -> BirthInstant {
    s.parse().unwrap_or_else(|e| {
        eprintln!("{e}");
        std::process::exit(1);
    })
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Rashi { lon } => {
            let info = rashi_from_longitude(lon);
            let dms = info.dms;
            println!(
                "{} (index {}) - {} deg {} min {:.1} sec ({:.4} deg in rashi)",
                info.rashi, info.rashi_index, dms.degrees, dms.minutes, dms.seconds,
                info.degrees_in_rashi
            );
        }

        Commands::MoonRashi { date } => {
            let instant = parse_instant(&date);
            let info = moon_rashi(&instant);
            let dms = info.dms;
            println!(
                "{} (index {}) - {} deg {} min {:.1} sec ({:.4} deg in rashi)",
                info.rashi, info.rashi_index, dms.degrees, dms.minutes, dms.seconds,
                info.degrees_in_rashi
            );
        }

        Commands::MoonLongitude { date } => {
            let instant = parse_instant(&date);
            let lons = moon_longitudes(&instant);
            println!("Julian Day: {:.6}", instant.julian_day());
            println!("Tropical:  {:.4} deg", lons.tropical_deg);
            println!("Ayanamsa:  {:.4} deg", lons.ayanamsa_deg);
            println!("Sidereal:  {:.4} deg", lons.sidereal_deg);
            println!("Normalized: {:.4} deg", normalize_360(lons.sidereal_deg));
        }

        Commands::Ayanamsa { date } => {
            let instant = parse_instant(&date);
            let aya = lahiri_ayanamsa_deg(instant.julian_centuries());
            println!("Lahiri ayanamsa: {:.4} deg", aya);
        }

        Commands::Bracelet { date } => {
            let instant = parse_instant(&date);
            let info = moon_rashi(&instant);
            let bracelet = bracelet_for(info.rashi);
            println!("{}", bracelet.name());
            println!("Crystals: {}", bracelet.crystals.join(", "));
        }

        Commands::Dms { deg } => {
            let d = deg_to_dms(deg);
            println!("{} deg {} min {:.2} sec", d.degrees, d.minutes, d.seconds);
        }
    }
}
