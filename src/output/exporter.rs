use std::fs;
use std::fs::File;
use std::io::{Write, BufWriter};
use std::path::Path;
use bincode;
use csv;
use serde_json;
use super::{TrajectorySink, SinkError, TrajectoryRecorder};
use super::super::bodies::Axes;
use super::super::tools::now_utc;

#[derive(Debug, Serialize)]
struct CsvRow<'a> {
    body: &'a str,
    step: Option<usize>, // Empty for the label row
    x: f64,
    y: f64,
}

/// File sink: accumulates the run in memory and writes it on `finalize`.
///
/// The format follows the destination extension:
/// - `.json`: pretty printed JSON
/// - `.csv`: one `body,step,x,y` row per recorded point plus a label row per body
/// - anything else: binary (bincode)
#[derive(Debug, Clone, Default)]
pub struct TrajectoryExporter {
    recorder: TrajectoryRecorder,
    silent_mode: bool,
}

impl TrajectoryExporter {
    pub fn new(silent_mode: bool) -> TrajectoryExporter {
        TrajectoryExporter { recorder: TrajectoryRecorder::new(), silent_mode: silent_mode }
    }

    pub fn recorded(&self) -> &TrajectoryRecorder {
        &self.recorder
    }

    fn write_json<W: Write>(&self, writer: &mut W) -> Result<(), SinkError> {
        serde_json::to_writer_pretty(&mut *writer, &self.recorder)?;
        writer.write_all(b"\n")?;
        Ok(())
    }

    fn write_csv<W: Write>(&self, writer: &mut W) -> Result<(), SinkError> {
        let mut csv_writer = csv::Writer::from_writer(writer);
        for recorded in self.recorder.bodies.iter() {
            for (i, point) in recorded.trajectory.iter().enumerate() {
                csv_writer.serialize(CsvRow { body: &recorded.name, step: Some(i+1), x: point.x, y: point.y })?;
            }
        }
        for recorded in self.recorder.bodies.iter() {
            if let Some(label_position) = recorded.label_position {
                csv_writer.serialize(CsvRow { body: &recorded.name, step: None, x: label_position.x, y: label_position.y })?;
            }
        }
        csv_writer.flush()?;
        Ok(())
    }

    fn write_binary<W: Write>(&self, writer: &mut W) -> Result<(), SinkError> {
        bincode::serialize_into(writer, &self.recorder)?;
        Ok(())
    }
}

impl TrajectorySink for TrajectoryExporter {
    fn receive_trajectory(&mut self, body_name: &str, points: Vec<Axes>) {
        self.recorder.receive_trajectory(body_name, points);
    }

    fn receive_label_position(&mut self, body_name: &str, position: Axes) {
        self.recorder.receive_label_position(body_name, position);
    }

    fn finalize(&mut self, destination: &str) -> Result<(), SinkError> {
        let path = Path::new(destination);
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let mut writer = BufWriter::new(File::create(path)?);
        let extension = path.extension().and_then(|e| e.to_str()).map(|e| e.to_ascii_lowercase());
        match extension.as_deref() {
            Some("json") => self.write_json(&mut writer)?,
            Some("csv") => self.write_csv(&mut writer)?,
            _ => self.write_binary(&mut writer)?,
        }
        writer.flush()?;
        self.recorder.finalize(destination)?;

        if !self.silent_mode {
            println!("[INFO {} UTC] Trajectories of {} bodies saved in '{}'.", now_utc(), self.recorder.bodies.len(), path.display());
        }
        Ok(())
    }
}
