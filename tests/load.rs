mod common;

use activity_dash::error::LoadError;
use activity_dash::pipeline::load::{self, parse_date, parse_number};
use activity_dash::types::activity::{ActivityType, FileFormat};
use common::{csv, date, write_temp, HEADER};

#[test]
fn csv_rows_become_records_in_source_order() {
    let data = csv(&[
        "Evening Run,Run,2024-06-11 18:05:00,5.25,31.5,40".to_string(),
        "Zwift,Virtual Ride,2024-06-10 07:00:00,20,45,120".to_string(),
        "Commute,Ride,2024-06-09,12.4,30,15.5".to_string(),
    ]);

    let table = load::load(data.as_bytes(), FileFormat::Csv).expect("table");

    assert_eq!(table.len(), 3);
    assert_eq!(table.file_format, FileFormat::Csv);
    let first = &table.records[0];
    assert_eq!(first.row, 0);
    assert_eq!(first.name, "Evening Run");
    assert_eq!(first.activity_type, ActivityType::Run);
    assert_eq!(first.start_date, Some(date(2024, 6, 11)));
    assert_eq!(first.distance_km, Some(5.25));
    assert_eq!(first.moving_time_min, Some(31.5));
    assert_eq!(first.elevation_gain_m, Some(40.0));
    assert_eq!(table.records[1].activity_type, ActivityType::VirtualRide);
    assert_eq!(table.records[2].start_date, Some(date(2024, 6, 9)));
}

#[test]
fn invalid_cells_are_coerced_to_missing() {
    let data = csv(&[
        "Broken,Run,not a date,abc,,n/a".to_string(),
        "Hike,Hike,2024-06-01,7.5,NaN,300".to_string(),
    ]);

    let table = load::load(data.as_bytes(), FileFormat::Csv).expect("table");

    let broken = &table.records[0];
    assert_eq!(broken.start_date, None);
    assert_eq!(broken.distance_km, None);
    assert_eq!(broken.moving_time_min, None);
    assert_eq!(broken.elevation_gain_m, None);
    assert!(!broken.is_aggregatable());

    let hike = &table.records[1];
    assert_eq!(hike.activity_type, ActivityType::Other("Hike".to_string()));
    assert_eq!(hike.moving_time_min, None);
}

#[test]
fn columns_are_found_by_header_name() {
    let data = "Total Elevation Gain (m),Moving Time (min),Distance (km),Start Date,Type,Name,Extra\n\
                10,20,3.5,2024-05-01,Run,Shuffled,x\n";

    let table = load::load(data.as_bytes(), FileFormat::Csv).expect("table");

    let record = &table.records[0];
    assert_eq!(record.name, "Shuffled");
    assert_eq!(record.distance_km, Some(3.5));
    assert_eq!(record.moving_time_min, Some(20.0));
    assert_eq!(record.elevation_gain_m, Some(10.0));
}

#[test]
fn blank_rows_are_skipped() {
    let data = format!("{HEADER}\nA,Run,2024-05-01,1,2,3\n,,,,,\nB,Run,2024-05-02,1,2,3\n");

    let table = load::load(data.as_bytes(), FileFormat::Csv).expect("table");

    assert_eq!(table.len(), 2);
    assert_eq!(table.records[1].name, "B");
    assert_eq!(table.records[1].row, 2);
}

#[test]
fn missing_column_is_reported_by_name() {
    let data = "Name,Type,Start Date,Distance (km),Total Elevation Gain (m)\nA,Run,2024-05-01,1,3\n";

    let err = load::load(data.as_bytes(), FileFormat::Csv).expect_err("missing column");

    assert!(matches!(err, LoadError::MissingColumn("Moving Time (min)")));
}

#[test]
fn empty_csv_is_an_error() {
    let err = load::load(b"", FileFormat::Csv).expect_err("empty file");
    assert!(matches!(err, LoadError::EmptyFile));
}

#[test]
fn garbage_workbook_is_an_error() {
    let err = load::load(b"definitely not a zip archive", FileFormat::Workbook)
        .expect_err("invalid workbook");
    assert!(matches!(err, LoadError::InvalidWorkbook(_)));
}

#[test]
fn xlsx_workbook_rows_become_records() {
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/activities.xlsx");

    let table = load::load_path(&path).expect("table");

    assert_eq!(table.file_format, FileFormat::Workbook);
    assert_eq!(table.len(), 3);

    // Date-formatted cell with a time of day.
    let run = &table.records[0];
    assert_eq!(run.name, "Morning Run");
    assert_eq!(run.activity_type, ActivityType::Run);
    assert_eq!(run.start_date, Some(date(2024, 6, 10)));
    assert_eq!(run.distance_km, Some(5.25));
    assert_eq!(run.moving_time_min, Some(31.5));
    assert_eq!(run.elevation_gain_m, Some(40.0));

    // Date stored as text, elevation cell absent.
    let commute = &table.records[1];
    assert_eq!(commute.activity_type, ActivityType::Ride);
    assert_eq!(commute.start_date, Some(date(2024, 6, 9)));
    assert_eq!(commute.distance_km, Some(12.0));
    assert_eq!(commute.elevation_gain_m, None);

    let mystery = &table.records[2];
    assert_eq!(mystery.activity_type, ActivityType::VirtualRide);
    assert_eq!(mystery.start_date, None);
    assert_eq!(mystery.distance_km, None);
    assert_eq!(mystery.moving_time_min, Some(45.0));
    assert!(!mystery.is_aggregatable());
}

#[test]
fn load_path_reads_csv_files() {
    let path = write_temp("csv", &csv(&["A,Ride,2024-05-01,10,30,50".to_string()]));

    let table = load::load_path(&path).expect("table");

    assert_eq!(table.len(), 1);
    let _ = std::fs::remove_file(path);
}

#[test]
fn load_path_reports_missing_file() {
    let path = std::env::temp_dir().join("activity-dash-does-not-exist.csv");

    let err = load::load_path(&path).expect_err("missing file");

    assert!(matches!(err, LoadError::Io { .. }));
}

#[test]
fn load_path_rejects_unknown_extension() {
    let path = write_temp("txt", "hello");

    let err = load::load_path(&path).expect_err("unsupported");

    assert!(matches!(err, LoadError::UnsupportedFormat(_)));
    let _ = std::fs::remove_file(path);
}

#[test]
fn file_format_from_filename() {
    assert_eq!(FileFormat::from_filename("export.CSV"), Some(FileFormat::Csv));
    assert_eq!(
        FileFormat::from_filename("Strava_All_ActivitiesNew.xlsx"),
        Some(FileFormat::Workbook)
    );
    assert_eq!(FileFormat::from_filename("notes.txt"), None);
}

#[test]
fn dates_parse_in_common_export_formats() {
    let expected = Some(date(2024, 5, 3));
    assert_eq!(parse_date("2024-05-03"), expected);
    assert_eq!(parse_date("2024-05-03 23:59:59"), expected);
    assert_eq!(parse_date("2024-05-03T07:12:00"), expected);
    assert_eq!(parse_date("2024-05-03T07:12:00Z"), expected);
    assert_eq!(parse_date("2024-05-03 07:12:00+02:00"), expected);
    assert_eq!(parse_date("May 3, 2024, 7:12:00 AM"), expected);
    assert_eq!(parse_date("05/03/2024"), expected);
    assert_eq!(parse_date(""), None);
    assert_eq!(parse_date("yesterday"), None);
}

#[test]
fn numbers_reject_non_finite_values() {
    assert_eq!(parse_number(" 12.5 "), Some(12.5));
    assert_eq!(parse_number("inf"), None);
    assert_eq!(parse_number("NaN"), None);
    assert_eq!(parse_number("12 km"), None);
}
