//! Integration tests for the partition engine.

use polars::prelude::{Column, DataFrame, IntoColumn, NamedFrom, Series};

use contact_model::{Field, RejectionReason, ValidationSelection};
use contact_validate::{PartitionError, partition};

fn contacts() -> DataFrame {
    let columns: Vec<Column> = vec![
        Series::new("Id".into(), vec![1i64, 2, 3, 4, 5]).into_column(),
        Series::new(
            "Nombre".into(),
            vec![
                Some("María Pérez 2"),
                Some("O'Brien"),
                Some("Luis"),
                None,
                Some("Ana"),
            ],
        )
        .into_column(),
        Series::new(
            "Email".into(),
            vec![
                Some("maria@example.com"),
                Some("obrien@example.com"),
                Some("admin@example.com"),
                Some("user@domain.de"),
                Some("ana@example.com"),
            ],
        )
        .into_column(),
    ];
    DataFrame::new(columns).unwrap()
}

fn ids(df: &DataFrame) -> Vec<i64> {
    df.column("Id")
        .unwrap()
        .i64()
        .unwrap()
        .into_iter()
        .flatten()
        .collect()
}

fn motivos(df: &DataFrame) -> Vec<String> {
    df.column("Motivo")
        .unwrap()
        .str()
        .unwrap()
        .into_iter()
        .map(|value| value.unwrap_or_default().to_string())
        .collect()
}

#[test]
fn test_partition_both_fields() {
    let df = contacts();
    let result = partition(&df, &ValidationSelection::all()).unwrap();

    assert_eq!(ids(&result.cleaned), vec![1, 5]);
    assert_eq!(ids(&result.removed), vec![2, 3, 4]);
    assert_eq!(
        motivos(&result.removed),
        vec![
            "Nombre inválido",
            "Email inválido",
            "Nombre inválido, Email inválido",
        ]
    );
    assert_eq!(result.summary.total, 5);
    assert_eq!(result.summary.kept, 2);
    assert_eq!(result.summary.removed, 3);
    assert_eq!(result.summary.reason_count(RejectionReason::InvalidName), 2);
    assert_eq!(result.summary.reason_count(RejectionReason::InvalidEmail), 2);
}

#[test]
fn test_partition_keeps_columns() {
    let df = contacts();
    let result = partition(&df, &ValidationSelection::all()).unwrap();

    assert_eq!(result.cleaned.get_column_names(), df.get_column_names());
    let removed_columns: Vec<String> = result
        .removed
        .get_column_names()
        .into_iter()
        .map(|name| name.to_string())
        .collect();
    assert_eq!(removed_columns, vec!["Id", "Nombre", "Email", "Motivo"]);
}

#[test]
fn test_partition_email_only_ignores_names() {
    let df = contacts();
    let selection = ValidationSelection::none().with(Field::Email);
    let result = partition(&df, &selection).unwrap();

    // O'Brien has a valid email and stays.
    assert_eq!(ids(&result.cleaned), vec![1, 2, 5]);
    assert_eq!(motivos(&result.removed), vec!["Email inválido", "Email inválido"]);
}

#[test]
fn test_partition_name_only() {
    let df = contacts();
    let selection = ValidationSelection::none().with(Field::Nombre);
    let result = partition(&df, &selection).unwrap();

    assert_eq!(ids(&result.cleaned), vec![1, 3, 5]);
    assert_eq!(ids(&result.removed), vec![2, 4]);
    assert_eq!(motivos(&result.removed), vec!["Nombre inválido", "Nombre inválido"]);
}

#[test]
fn test_partition_empty_selection_keeps_everything() {
    let df = contacts();
    let result = partition(&df, &ValidationSelection::none()).unwrap();

    assert!(result.cleaned.equals_missing(&df));
    assert_eq!(result.removed.height(), 0);
    assert!(!result.summary.has_removals());
}

#[test]
fn test_partition_is_idempotent_on_cleaned() {
    let df = contacts();
    let selection = ValidationSelection::all();
    let first = partition(&df, &selection).unwrap();
    let second = partition(&first.cleaned, &selection).unwrap();

    assert_eq!(second.removed.height(), 0);
    assert!(second.cleaned.equals_missing(&first.cleaned));
}

#[test]
fn test_partition_missing_email_column() {
    let df = DataFrame::new(vec![
        Series::new("Nombre".into(), vec!["Ana"]).into_column(),
    ])
    .unwrap();
    let selection = ValidationSelection::none().with(Field::Email);

    let err = partition(&df, &selection).unwrap_err();
    assert!(matches!(err, PartitionError::MissingColumn { ref column } if column == "Email"));

    // Not selected: the missing column does not matter.
    let selection = ValidationSelection::none().with(Field::Nombre);
    let result = partition(&df, &selection).unwrap();
    assert_eq!(result.cleaned.height(), 1);
}

#[test]
fn test_partition_coerces_non_string_cells() {
    let df = DataFrame::new(vec![
        Series::new("Nombre".into(), vec![Some(12i64), None]).into_column(),
        Series::new("Email".into(), vec![Some(3.5f64), Some(f64::NAN)]).into_column(),
    ])
    .unwrap();
    let result = partition(&df, &ValidationSelection::all()).unwrap();

    assert_eq!(result.cleaned.height(), 0);
    assert_eq!(
        motivos(&result.removed),
        vec!["Email inválido", "Nombre inválido, Email inválido"]
    );

    let selection = ValidationSelection::none().with(Field::Nombre);
    let result = partition(&df, &selection).unwrap();
    assert_eq!(result.cleaned.height(), 1);
}

#[test]
fn test_partition_float_names_keep_fraction() {
    let df = DataFrame::new(vec![
        Series::new("Nombre".into(), vec![Some(3.0f64), None]).into_column(),
        Series::new("Email".into(), vec!["ana@example.com", "luis@example.com"]).into_column(),
    ])
    .unwrap();
    let selection = ValidationSelection::none().with(Field::Nombre);
    let result = partition(&df, &selection).unwrap();

    assert_eq!(result.cleaned.height(), 0);
    assert_eq!(result.removed.height(), 2);
    assert_eq!(motivos(&result.removed), vec!["Nombre inválido", "Nombre inválido"]);
}

#[test]
fn test_partition_empty_table() {
    let df = DataFrame::new(vec![
        Series::new("Nombre".into(), Vec::<String>::new()).into_column(),
        Series::new("Email".into(), Vec::<String>::new()).into_column(),
    ])
    .unwrap();
    let result = partition(&df, &ValidationSelection::all()).unwrap();

    assert_eq!(result.cleaned.height(), 0);
    assert_eq!(result.removed.height(), 0);
    assert_eq!(result.removed.width(), 3);
}
