//! Writers for finished score sheets: a JSON document and a per-round CSV.

use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use flate2::write::GzEncoder;
use flate2::Compression;
use scoreboard::ScoreSheet;
use serde::Serialize;

/// One CSV line: a single player's result in a single round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CsvRoundRow {
    pub round_no: u8,
    pub player: String,
    pub call: u32,
    pub made: u32,
    pub score: i32,
    pub running_total: i32,
}

/// Flatten a sheet into CSV rows in round, then seat, order.
pub fn csv_rows(sheet: &ScoreSheet) -> Vec<CsvRoundRow> {
    let mut running = vec![0i32; sheet.players.len()];
    let mut rows = Vec::new();
    for row in &sheet.rows {
        for ((player, line), total) in sheet.players.iter().zip(&row.lines).zip(running.iter_mut()) {
            *total = total.saturating_add(line.score);
            rows.push(CsvRoundRow {
                round_no: row.round_no,
                player: player.name.clone(),
                call: line.call,
                made: line.made,
                score: line.score,
                running_total: *total,
            });
        }
    }
    rows
}

pub struct OutputWriter {
    dir: PathBuf,
    stem: String,
    compress: bool,
}

impl OutputWriter {
    pub fn new(output_dir: &str, compress: bool) -> Result<Self, Box<dyn std::error::Error>> {
        let dir = Path::new(output_dir);
        std::fs::create_dir_all(dir)?;

        let timestamp = time::OffsetDateTime::now_utc()
            .format(&time::format_description::well_known::Iso8601::DEFAULT)
            .unwrap_or_else(|_| "unknown".to_string())
            .replace(':', "-");

        Ok(Self {
            dir: dir.to_path_buf(),
            stem: format!("scoresheet_{timestamp}"),
            compress,
        })
    }

    /// Write both files and return their paths (JSON, CSV).
    pub fn write_sheet(
        &self,
        sheet: &ScoreSheet,
    ) -> Result<(PathBuf, PathBuf), Box<dyn std::error::Error>> {
        let json_path = self.write_json(sheet)?;
        let csv_path = self.write_csv(sheet)?;
        Ok((json_path, csv_path))
    }

    fn write_json(&self, sheet: &ScoreSheet) -> Result<PathBuf, Box<dyn std::error::Error>> {
        let filename = format!("{}.json", self.stem);
        let (mut writer, path): (Box<dyn Write>, PathBuf) = if self.compress {
            let gz_path = self.dir.join(format!("{filename}.gz"));
            let writer = BufWriter::new(GzEncoder::new(
                File::create(&gz_path)?,
                Compression::default(),
            ));
            (Box::new(writer), gz_path)
        } else {
            let path = self.dir.join(&filename);
            (Box::new(BufWriter::new(create_truncated(&path)?)), path)
        };

        serde_json::to_writer_pretty(&mut writer, sheet)?;
        writeln!(writer)?;
        writer.flush()?;
        Ok(path)
    }

    fn write_csv(&self, sheet: &ScoreSheet) -> Result<PathBuf, Box<dyn std::error::Error>> {
        let path = self.dir.join(format!("{}_rounds.csv", self.stem));
        let mut writer = csv::Writer::from_writer(BufWriter::new(create_truncated(&path)?));
        for row in csv_rows(sheet) {
            writer.serialize(&row)?;
        }
        writer.flush()?;
        Ok(path)
    }
}

fn create_truncated(path: &Path) -> std::io::Result<File> {
    OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(path)
}
