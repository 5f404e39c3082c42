//! Export helpers for CSV and JSON artifacts.

pub mod polar {
    use std::fs::{self, File};
    use std::io::{self, BufWriter, Write};
    use std::path::Path;

    use airframe_core::units::rad_to_deg;
    use serde::{Deserialize, Serialize};
    use thiserror::Error;

    /// Column order of the polar CSV.
    pub const HEADER: [&str; 5] = [
        "alpha_deg",
        "alpha_rad",
        "lift_coefficient",
        "drag_coefficient",
        "lift_to_drag",
    ];

    /// Create a writer for the target path, handling stdout (`-`) by convention.
    pub fn writer_for_path(path: &Path) -> io::Result<Box<dyn Write>> {
        if path == Path::new("-") {
            return Ok(Box::new(BufWriter::new(io::stdout())));
        }
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let file = File::create(path)?;
        Ok(Box::new(BufWriter::new(file)))
    }

    /// One row of a drag polar.
    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    pub struct PolarRow {
        pub alpha_deg: f64,
        pub alpha_rad: f64,
        pub lift_coefficient: f64,
        pub drag_coefficient: f64,
        /// Empty when the drag coefficient is zero.
        pub lift_to_drag: Option<f64>,
    }

    #[derive(Debug, Clone, PartialEq, Eq, Error)]
    pub enum PolarError {
        #[error("polar columns differ in length: {alpha} alpha, {lift} lift, {drag} drag samples")]
        LengthMismatch {
            alpha: usize,
            lift: usize,
            drag: usize,
        },
    }

    /// Zip angle samples and aircraft totals into polar rows.
    ///
    /// All three sequences must have the same length.
    pub fn rows(alpha_rad: &[f64], lift: &[f64], drag: &[f64]) -> Result<Vec<PolarRow>, PolarError> {
        if lift.len() != alpha_rad.len() || drag.len() != alpha_rad.len() {
            return Err(PolarError::LengthMismatch {
                alpha: alpha_rad.len(),
                lift: lift.len(),
                drag: drag.len(),
            });
        }
        Ok(alpha_rad
            .iter()
            .zip(lift.iter().zip(drag))
            .map(|(&alpha, (&cl, &cd))| PolarRow {
                alpha_deg: rad_to_deg(alpha),
                alpha_rad: alpha,
                lift_coefficient: cl,
                drag_coefficient: cd,
                lift_to_drag: if cd != 0.0 { Some(cl / cd) } else { None },
            })
            .collect())
    }

    /// Write the header and every row as CSV.
    pub fn write_polar<W: Write>(writer: W, rows: &[PolarRow]) -> csv::Result<()> {
        let mut csv = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(writer);
        csv.write_record(HEADER)?;
        for row in rows {
            csv.serialize(row)?;
        }
        csv.flush()?;
        Ok(())
    }

    /// Read a polar CSV written by [`write_polar`].
    pub fn read_polar(path: &Path) -> csv::Result<Vec<PolarRow>> {
        let mut reader = csv::ReaderBuilder::new().from_path(path)?;
        reader.deserialize().collect()
    }
}

pub mod summary {
    use std::fs::{self, File};
    use std::io;
    use std::path::{Path, PathBuf};

    use airframe_core::series::{argmax, argmin};
    use serde::Serialize;
    use serde_json::to_writer_pretty;

    use crate::polar::PolarRow;

    /// A notable point on the polar.
    #[derive(Debug, Clone, Copy, PartialEq, Serialize)]
    pub struct Extremum {
        pub alpha_deg: f64,
        pub value: f64,
    }

    /// Headline numbers of an evaluated case.
    #[derive(Debug, Clone, Serialize)]
    pub struct PolarSummary {
        pub case: String,
        pub generated_utc: String,
        pub samples: usize,
        pub max_lift_coefficient: Option<Extremum>,
        pub min_drag_coefficient: Option<Extremum>,
        pub max_lift_to_drag: Option<Extremum>,
    }

    pub fn summarize(case: &str, rows: &[PolarRow]) -> PolarSummary {
        let lift: Vec<f64> = rows.iter().map(|r| r.lift_coefficient).collect();
        let drag: Vec<f64> = rows.iter().map(|r| r.drag_coefficient).collect();
        let ratio: Vec<f64> = rows
            .iter()
            .map(|r| r.lift_to_drag.unwrap_or(f64::NAN))
            .collect();
        let at = |found: Option<(usize, f64)>| {
            found.map(|(i, value)| Extremum {
                alpha_deg: rows[i].alpha_deg,
                value,
            })
        };

        PolarSummary {
            case: case.to_string(),
            generated_utc: chrono::Utc::now()
                .format("%Y-%m-%dT%H:%M:%SZ")
                .to_string(),
            samples: rows.len(),
            max_lift_coefficient: at(argmax(&lift)),
            min_drag_coefficient: at(argmin(&drag)),
            max_lift_to_drag: at(argmax(&ratio)),
        }
    }

    /// Sidecar path next to a polar CSV: `<stem>_summary.json`.
    pub fn sidecar_path(output: &Path) -> PathBuf {
        let parent = output.parent().unwrap_or_else(|| Path::new("."));
        let stem = output
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("polar");
        parent.join(format!("{}_summary.json", stem))
    }

    /// Write the summary as pretty JSON, creating parent directories.
    pub fn write_summary(path: &Path, summary: &PolarSummary) -> io::Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        to_writer_pretty(File::create(path)?, summary)?;
        Ok(())
    }
}
