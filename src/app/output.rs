use crate::domain::model::Earthquake;
use crate::utils::error::{QuakeError, Result};
use std::io::Write;

/// Column order used by the CSV renderer; matches the JSON keys.
pub const CSV_HEADER: [&str; 9] = [
    "id",
    "magnitude",
    "place",
    "latitude",
    "longitude",
    "kmDepth",
    "earthquakeTime",
    "code",
    "url",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    Csv,
}

pub fn render<W: Write>(quakes: &[Earthquake], format: OutputFormat, writer: W) -> Result<()> {
    match format {
        OutputFormat::Table => render_table(quakes, writer),
        OutputFormat::Json => render_json(quakes, writer),
        OutputFormat::Csv => render_csv(quakes, writer),
    }
}

fn render_json<W: Write>(quakes: &[Earthquake], mut writer: W) -> Result<()> {
    // A serde_json error here comes from the writer, not from API data.
    serde_json::to_writer_pretty(&mut writer, quakes)
        .map_err(|e| QuakeError::IoError(e.into()))?;
    writeln!(writer)?;
    Ok(())
}

fn render_csv<W: Write>(quakes: &[Earthquake], writer: W) -> Result<()> {
    let mut csv_writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);

    // Written by hand so an empty collection still gets a header row.
    csv_writer.write_record(CSV_HEADER)?;
    for quake in quakes {
        csv_writer.serialize(quake)?;
    }
    csv_writer.flush()?;
    Ok(())
}

fn render_table<W: Write>(quakes: &[Earthquake], mut writer: W) -> Result<()> {
    writeln!(
        writer,
        "{:<14} {:>5} {:>8} {:<20} {}",
        "CODE", "MAG", "DEPTH", "TIME (UTC)", "PLACE"
    )?;

    for quake in quakes {
        // Fall back to the raw string when the server's timestamp does not parse.
        let time = quake
            .event_time()
            .map(|t| t.format("%Y-%m-%d %H:%M:%S").to_string())
            .unwrap_or_else(|| quake.earthquake_time.clone());

        writeln!(
            writer,
            "{:<14} {:>5.1} {:>8.1} {:<20} {}",
            quake.code, quake.magnitude, quake.km_depth, time, quake.place
        )?;
    }

    writeln!(writer, "{} earthquake(s)", quakes.len())?;
    Ok(())
}
