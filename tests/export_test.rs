//! Excel出力→読み込みの統合テスト

use student_notes_ai::export::{self, excel};
use student_notes_ai::reader;
use student_notes_common::export::excel_core::{generate_excel_buffer, SHEET_NAME};
use student_notes_common::{
    CellValue, CommentTable, SummaryResult, ID_COLUMN, NAME_COLUMN, SKILLS_COLUMN, SUMMARY_COLUMN,
};
use tempfile::tempdir;

fn create_test_table() -> CommentTable {
    let columns = vec![
        ID_COLUMN.to_string(),
        NAME_COLUMN.to_string(),
        "September Comments".to_string(),
        "October Comments".to_string(),
        "November Comments".to_string(),
    ];

    let rows = (1..=4)
        .map(|i| {
            vec![
                CellValue::Number(1000.0 + i as f64),
                CellValue::text(format!("Student {}", i)),
                CellValue::text(format!("Attends every session ({}).", i)),
                if i % 2 == 0 { CellValue::Empty } else { CellValue::text("Needs to read more.") },
                CellValue::text("Submitted the project on time."),
            ]
        })
        .collect();

    CommentTable::new(columns, rows)
}

fn create_test_results(n: usize) -> Vec<SummaryResult> {
    (1..=n)
        .map(|i| {
            SummaryResult::new(
                format!("Student {} has shown steady improvement, \"quotes\" & symbols < >.", i),
                if i == 2 { "None".to_string() } else { "Discipline, Punctuality".to_string() },
            )
        })
        .collect()
}

#[test]
fn test_round_trip_preserves_table() {
    let table = create_test_table();
    let summarized = table.with_summaries(&create_test_results(table.len())).unwrap();

    let buffer = generate_excel_buffer(&summarized).expect("Excel生成に失敗");
    let read_back = reader::read_table_from_bytes(&buffer).expect("読み込みに失敗");

    assert_eq!(read_back.columns(), summarized.columns());
    assert_eq!(read_back.len(), summarized.len());
    assert_eq!(read_back, summarized);

    let summary_idx = read_back.column_index(SUMMARY_COLUMN).unwrap();
    let skills_idx = read_back.column_index(SKILLS_COLUMN).unwrap();
    assert_eq!(summary_idx, 5);
    assert_eq!(skills_idx, 6);
    assert_eq!(
        read_back.rows()[0][summary_idx],
        CellValue::text("Student 1 has shown steady improvement, \"quotes\" & symbols < >.")
    );
    assert_eq!(read_back.rows()[1][skills_idx], CellValue::text("None"));
}

#[test]
fn test_round_trip_row_order() {
    let table = create_test_table();
    let summarized = table.with_summaries(&create_test_results(table.len())).unwrap();
    let buffer = generate_excel_buffer(&summarized).unwrap();
    let read_back = reader::read_table_from_bytes(&buffer).unwrap();

    let ids: Vec<String> = read_back.records().into_iter().map(|r| r.application_id).collect();
    assert_eq!(ids, vec!["1001", "1002", "1003", "1004"]);
}

#[test]
fn test_sheet_name() {
    let table = create_test_table();
    let buffer = generate_excel_buffer(&table).unwrap();
    let name = reader::first_sheet_name(&buffer).unwrap();
    assert_eq!(name.as_deref(), Some(SHEET_NAME));
    assert_eq!(SHEET_NAME, "Student Summary");
}

#[test]
fn test_excel_file_generation() {
    let dir = tempdir().expect("Failed to create temp dir");
    let output_path = export::resolve_output_path(Some(dir.path()), dir.path());

    let table = create_test_table();
    let summarized = table.with_summaries(&create_test_results(table.len())).unwrap();
    excel::generate_excel(&summarized, &output_path).expect("Excel出力に失敗");

    assert!(output_path.exists(), "Excelファイルが作成されていない");
    assert!(output_path.ends_with("Student summary & skills.xlsx"));

    let read_back = reader::read_table(&output_path).unwrap();
    assert_eq!(read_back, summarized);
}

#[test]
fn test_excel_generation_creates_parent_dir() {
    let dir = tempdir().unwrap();
    let output_path = dir.path().join("out").join("summary.xlsx");

    let table = create_test_table();
    excel::generate_excel(&table, &output_path).unwrap();
    assert!(output_path.exists());
}

#[test]
fn test_identifier_only_table_round_trip() {
    let table = CommentTable::new(
        vec![ID_COLUMN.to_string(), NAME_COLUMN.to_string()],
        vec![vec![CellValue::text("A-17"), CellValue::text("Mona")]],
    );
    assert_eq!(table.records()[0].combined_comments(), "");

    let summarized = table
        .with_summaries(&[SummaryResult::new("No comments were provided.", "None")])
        .unwrap();
    let buffer = generate_excel_buffer(&summarized).unwrap();
    let read_back = reader::read_table_from_bytes(&buffer).unwrap();

    assert_eq!(read_back, summarized);
}

#[test]
fn test_blank_interior_row_round_trip() {
    let table = CommentTable::new(
        vec![ID_COLUMN.into(), NAME_COLUMN.into(), "Jan".into()],
        vec![
            vec!["A1".into(), "Sara".into(), "hi".into()],
            vec![CellValue::Empty, CellValue::Empty, CellValue::Empty],
            vec!["A2".into(), "Omar".into(), "bye".into()],
        ],
    );

    let buffer = generate_excel_buffer(&table).unwrap();
    let read_back = reader::read_table_from_bytes(&buffer).unwrap();

    assert_eq!(read_back, table);
    assert_eq!(read_back.sheet_row(2), 4);
}
