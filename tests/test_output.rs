extern crate orbitsim;
extern crate serde_json;
extern crate bincode;
extern crate csv;

mod common;
use std::fs;
use std::fs::File;
use std::io::BufReader;
use orbitsim::{Simulator, TrajectoryExporter, TrajectoryRecorder, TrajectorySink};

fn exported_run(steps: u32) -> TrajectoryExporter {
    let mut simulator = Simulator::with_bodies(1.0, common::three_bodies()).unwrap();
    let mut exporter = TrajectoryExporter::new(true);
    simulator.simulate(0.01, steps, &mut exporter).unwrap();
    exporter
}

#[test]
fn json_export_can_be_read_back() {
    let path = common::temporary_path("json", "json");
    let mut exporter = exported_run(20);
    exporter.finalize(path.to_str().unwrap()).unwrap();

    let reader = BufReader::new(File::open(&path).unwrap());
    let restored: TrajectoryRecorder = serde_json::from_reader(reader).unwrap();
    assert_eq!(restored.bodies, exporter.recorded().bodies);
    assert_eq!(restored.names(), vec!["A", "B", "C"]);
    assert_eq!(restored.trajectory("B").unwrap().len(), 20);

    let _ = fs::remove_dir_all(path.parent().unwrap());
}

#[test]
fn csv_export_has_a_row_per_point_and_per_label() {
    let path = common::temporary_path("csv", "csv");
    let mut exporter = exported_run(7);
    exporter.finalize(path.to_str().unwrap()).unwrap();

    let mut reader = csv::Reader::from_path(&path).unwrap();
    let headers = reader.headers().unwrap().clone();
    assert_eq!(headers.iter().collect::<Vec<&str>>(), vec!["body", "step", "x", "y"]);

    let records: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
    assert_eq!(records.len(), 3*7 + 3);
    assert_eq!(&records[0][0], "A");
    assert_eq!(&records[0][1], "1");
    assert_eq!(&records[6][1], "7");
    // Label rows come last and have no step
    let labels = &records[3*7..];
    assert_eq!(labels.iter().map(|r| r[0].to_string()).collect::<Vec<String>>(), vec!["A", "B", "C"]);
    assert!(labels.iter().all(|r| r[1].is_empty()));
    let last_b = exporter.recorded().label_position("B").unwrap();
    assert_eq!(labels[1][2].parse::<f64>().unwrap(), last_b.x);
    assert_eq!(labels[1][3].parse::<f64>().unwrap(), last_b.y);

    let _ = fs::remove_dir_all(path.parent().unwrap());
}

#[test]
fn other_extensions_are_written_in_binary() {
    let path = common::temporary_path("binary", "bin");
    let mut exporter = exported_run(5);
    exporter.finalize(path.to_str().unwrap()).unwrap();

    let reader = BufReader::new(File::open(&path).unwrap());
    let restored: TrajectoryRecorder = bincode::deserialize_from(reader).unwrap();
    assert_eq!(restored.bodies, exporter.recorded().bodies);

    let _ = fs::remove_dir_all(path.parent().unwrap());
}

#[test]
fn unwritable_destination_is_reported() {
    let path = common::temporary_path("unwritable", "json");
    fs::create_dir_all(&path).unwrap(); // A directory where the file should go
    let mut exporter = exported_run(1);
    assert!(exporter.finalize(path.to_str().unwrap()).is_err());

    let _ = fs::remove_dir_all(path.parent().unwrap());
}
