use std::fs;

use chrono::{TimeZone, Utc};
use polars::prelude::{Column, DataFrame, IntoColumn, NamedFrom, Series};
use tempfile::TempDir;

use contact_ingest::read_contact_table;
use contact_model::ValidationSelection;
use contact_report::{OutputNames, write_outputs, write_summary_json};
use contact_validate::partition;

fn contacts() -> DataFrame {
    let columns: Vec<Column> = vec![
        Series::new("Id".into(), vec!["1", "2", "3"]).into_column(),
        Series::new("Nombre".into(), vec![Some("Ana"), Some("O'Brien"), None]).into_column(),
        Series::new(
            "Email".into(),
            vec!["ana@example.com", "obrien@example.com", "admin@example.com"],
        )
        .into_column(),
    ];
    DataFrame::new(columns).unwrap()
}

fn strings(df: &DataFrame, column: &str) -> Vec<Option<String>> {
    df.column(column)
        .unwrap()
        .str()
        .unwrap()
        .into_iter()
        .map(|value| value.map(str::to_string))
        .collect()
}

#[test]
fn writes_both_tables_under_timestamped_names() {
    let dir = TempDir::new().unwrap();
    let output_dir = dir.path().join("uploads");
    let result = partition(&contacts(), &ValidationSelection::all()).unwrap();
    let names = OutputNames::at(&Utc.with_ymd_and_hms(2024, 5, 17, 12, 30, 0).unwrap());

    let paths = write_outputs(&result, &output_dir, &names).unwrap();

    assert_eq!(paths.cleaned, output_dir.join("base_limpia_20240517123000.csv"));
    assert_eq!(paths.report, output_dir.join("informe_20240517123000.csv"));

    let cleaned = read_contact_table(&paths.cleaned).unwrap();
    assert_eq!(cleaned.width(), 3);
    assert_eq!(strings(&cleaned, "Id"), vec![Some("1".to_string())]);

    let report = read_contact_table(&paths.report).unwrap();
    assert_eq!(report.width(), 4);
    assert_eq!(
        strings(&report, "Id"),
        vec![Some("2".to_string()), Some("3".to_string())]
    );
    assert_eq!(
        strings(&report, "Motivo"),
        vec![
            Some("Nombre inválido".to_string()),
            Some("Nombre inválido, Email inválido".to_string()),
        ]
    );
    assert_eq!(strings(&report, "Nombre")[1], None);
}

#[test]
fn writes_header_only_report_when_nothing_is_removed() {
    let dir = TempDir::new().unwrap();
    let result = partition(&contacts(), &ValidationSelection::none()).unwrap();
    let names = OutputNames::at(&Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap());

    let paths = write_outputs(&result, dir.path(), &names).unwrap();

    let report = fs::read_to_string(&paths.report).unwrap();
    assert_eq!(report.trim_end(), "Id,Nombre,Email,Motivo");
    let cleaned = read_contact_table(&paths.cleaned).unwrap();
    assert_eq!(cleaned.height(), 3);
}

#[test]
fn writes_summary_json() {
    let dir = TempDir::new().unwrap();
    let result = partition(&contacts(), &ValidationSelection::all()).unwrap();
    let path = dir.path().join("nested").join("summary.json");

    write_summary_json(&result.summary, &path).unwrap();

    let value: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(value["total"], 3);
    assert_eq!(value["kept"], 1);
    assert_eq!(value["removed"], 2);
    assert_eq!(value["by_reason"]["InvalidName"], 2);
    assert_eq!(value["by_reason"]["InvalidEmail"], 1);
}

#[test]
fn payload_headers_survive_byte_for_byte() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("contactos.csv");
    fs::write(
        &input,
        "Nombre,Email,Fecha  de alta\nAna,ana@example.com,2024-01-02\nO'Brien,ob@example.com,2024-03-04\n",
    )
    .unwrap();
    let df = read_contact_table(&input).unwrap();
    let result = partition(&df, &ValidationSelection::all()).unwrap();
    let names = OutputNames::at(&Utc.with_ymd_and_hms(2024, 2, 2, 8, 0, 0).unwrap());

    let paths = write_outputs(&result, dir.path(), &names).unwrap();

    let cleaned = fs::read_to_string(&paths.cleaned).unwrap();
    assert_eq!(cleaned, "Nombre,Email,Fecha  de alta\nAna,ana@example.com,2024-01-02\n");
    let report = fs::read_to_string(&paths.report).unwrap();
    assert_eq!(
        report.lines().next(),
        Some("Nombre,Email,Fecha  de alta,Motivo")
    );
}
