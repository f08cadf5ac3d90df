use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use encoding_rs::WINDOWS_1252;
use image::{Rgb, RgbImage};

const DATA_FILE: &str = "coaches_data.csv";
const ASSET_DIR: &str = "assets";

struct SampleCoach {
    name: &'static str,
    born_in: &'static str,
    age: &'static str,
    status: &'static str,
    picture: &'static str,
    highlights: &'static str,
}

/// Sample rows covering the cases the viewer handles: accented
/// Windows-1252 text, a comma inside a quoted field, picture values with
/// and without the `assets/` prefix, an empty picture, empty highlights,
/// a reference to a file that is never written, and a duplicate name.
const COACHES: [SampleCoach; 6] = [
    SampleCoach {
        name: "José Ferreira",
        born_in: "Lisboa",
        age: "58",
        status: "Active",
        picture: "jose_ferreira.png",
        highlights: "Won three league titles. Unbeaten home run of 41 matches. Coach of the Year 2011",
    },
    SampleCoach {
        name: "Maria Keller",
        born_in: "Basel, Switzerland",
        age: "47",
        status: "Active",
        picture: "assets/maria_keller.png",
        highlights: "Youngest coach to reach a continental final. Two super cups",
    },
    SampleCoach {
        name: "Ben Okafor",
        born_in: "Lagos",
        age: "61",
        status: "Retired",
        picture: "",
        highlights: "Four national championships. Built a record-breaking youth academy",
    },
    SampleCoach {
        name: "Søren Lindqvist",
        born_in: "Malmö",
        age: "54",
        status: "Active",
        picture: "soren_lindqvist.png",
        highlights: "",
    },
    SampleCoach {
        name: "Ana Duarte",
        born_in: "Porto",
        age: "52",
        status: "Active",
        picture: "ana_duarte.png",
        highlights: "Two domestic doubles. Promoted twice in three seasons",
    },
    SampleCoach {
        name: "José Ferreira",
        born_in: "Faro",
        age: "99",
        status: "Retired",
        picture: "",
        highlights: "Row shadowed by the first José Ferreira entry",
    },
];

/// Portraits actually written to disk. `soren_lindqvist.png` is left out
/// on purpose so the viewer's image-not-found warning can be seen.
const PORTRAITS: [&str; 3] = ["jose_ferreira.png", "maria_keller.png", "ana_duarte.png"];

fn build_csv() -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(["Coach_Name", "Born_in", "Age", "Status", "Picture", "Highlights"])?;
    for coach in &COACHES {
        writer.write_record([
            coach.name,
            coach.born_in,
            coach.age,
            coach.status,
            coach.picture,
            coach.highlights,
        ])?;
    }
    let bytes = writer.into_inner().context("flushing CSV writer")?;
    String::from_utf8(bytes).context("CSV writer produced invalid UTF-8")
}

/// A deterministic two-axis gradient stands in for a real portrait.
fn portrait(seed: u8) -> RgbImage {
    RgbImage::from_fn(128, 160, move |x, y| {
        let vertical = (y * 255 / 159) as u8;
        let horizontal = (x * 255 / 127) as u8;
        Rgb([
            vertical.wrapping_add(seed.wrapping_mul(60)),
            horizontal / 2 + 60,
            200u8.wrapping_sub(seed.wrapping_mul(35)),
        ])
    })
}

fn main() -> Result<()> {
    let csv_text = build_csv()?;
    let (encoded, _, _) = WINDOWS_1252.encode(&csv_text);
    fs::write(DATA_FILE, &encoded)
        .with_context(|| format!("writing {DATA_FILE}"))?;
    println!("Wrote {DATA_FILE} ({} coaches, Windows-1252)", COACHES.len());

    fs::create_dir_all(ASSET_DIR)
        .with_context(|| format!("creating {ASSET_DIR}/"))?;
    for (i, file) in PORTRAITS.iter().enumerate() {
        let path = Path::new(ASSET_DIR).join(file);
        portrait(i as u8)
            .save(&path)
            .with_context(|| format!("writing {}", path.display()))?;
        println!("Wrote {}", path.display());
    }

    println!("Done. Run the viewer with: cargo run");
    Ok(())
}
