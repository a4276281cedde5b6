//! Tests for the numeric table

use approx::assert_abs_diff_eq;

use super::{DataError, NumericFrame, NumericFrameBuilder};

fn sample_frame() -> NumericFrame {
    NumericFrameBuilder::new()
        .with_column("a", vec![1.0, 2.0, 3.0, 4.0])
        .unwrap()
        .with_column("b", vec![10.0, f64::NAN, 30.0, 40.0])
        .unwrap()
        .with_column("c", vec![0.5, 1.5, f64::NAN, 3.5])
        .unwrap()
        .build()
}

#[test]
fn test_shape_and_names() {
    let frame = sample_frame();

    assert_eq!(frame.shape(), (4, 3));
    assert_eq!(frame.nrows(), 4);
    assert_eq!(frame.ncols(), 3);
    assert_eq!(frame.column_names(), vec!["a", "b", "c"]);
    assert!(frame.has_column("b"));
    assert!(!frame.has_column("z"));
}

#[test]
fn test_from_columns_preserves_declared_order() {
    let frame = NumericFrame::from_columns(vec![
        ("z", vec![1.0]),
        ("a", vec![2.0]),
        ("m", vec![3.0]),
    ])
    .unwrap();

    assert_eq!(frame.column_names(), vec!["z", "a", "m"]);
}

#[test]
fn test_column_lookup() {
    let frame = sample_frame();

    let a = frame.column("a").unwrap();
    assert_abs_diff_eq!(a[2], 3.0, epsilon = 1e-12);

    let err = frame.column("missing").unwrap_err();
    assert!(matches!(err, DataError::ColumnNotFound(name) if name == "missing"));
}

#[test]
fn test_duplicate_column_rejected() {
    let result = NumericFrameBuilder::new()
        .with_column("a", vec![1.0])
        .unwrap()
        .with_column("a", vec![2.0]);

    assert!(matches!(result, Err(DataError::DuplicateColumn(name)) if name == "a"));
}

#[test]
fn test_length_mismatch_rejected() {
    let result = NumericFrameBuilder::new()
        .with_column("a", vec![1.0, 2.0])
        .unwrap()
        .with_column("b", vec![1.0, 2.0, 3.0]);

    assert!(matches!(
        result,
        Err(DataError::LengthMismatch {
            expected: 2,
            actual: 3
        })
    ));
}

#[test]
fn test_complete_rows_is_pairwise() {
    let frame = sample_frame();

    // "b" is missing at row 1, "c" at row 2; each subset only drops its own
    assert_eq!(frame.complete_rows(&["a"]).unwrap(), vec![0, 1, 2, 3]);
    assert_eq!(frame.complete_rows(&["a", "b"]).unwrap(), vec![0, 2, 3]);
    assert_eq!(frame.complete_rows(&["a", "c"]).unwrap(), vec![0, 1, 3]);
    assert_eq!(frame.complete_rows(&["a", "b", "c"]).unwrap(), vec![0, 3]);
}

#[test]
fn test_complete_rows_empty_selection() {
    let frame = sample_frame();
    let names: [&str; 0] = [];

    assert!(matches!(
        frame.complete_rows(&names),
        Err(DataError::EmptySelection)
    ));
}

#[test]
fn test_gather() {
    let frame = sample_frame();

    let gathered = frame.gather("b", &[0, 2, 3]).unwrap();
    assert_eq!(gathered.len(), 3);
    assert_abs_diff_eq!(gathered[0], 10.0, epsilon = 1e-12);
    assert_abs_diff_eq!(gathered[1], 30.0, epsilon = 1e-12);
    assert_abs_diff_eq!(gathered[2], 40.0, epsilon = 1e-12);
}

#[test]
fn test_gather_out_of_bounds() {
    let frame = sample_frame();

    assert!(matches!(
        frame.gather("a", &[0, 9]),
        Err(DataError::IndexOutOfBounds { index: 9, len: 4 })
    ));
}

#[test]
fn test_empty_frame() {
    let frame = NumericFrame::new();
    assert_eq!(frame.shape(), (0, 0));
}
