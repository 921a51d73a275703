//! Reading truth tables from PLA files on disk

use kmap_logic::{Form, KmapError, PlaReadError, TruthTable};
use std::io::Write;
use tempfile::NamedTempFile;

fn write_pla(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn test_read_and_minimize() {
    let file = write_pla(
        "# majority of three\n.i 3\n.o 1\n.p 4\n011 1\n101 1\n110 1\n111 1\n.e\n",
    );
    let table = TruthTable::from_pla_file(file.path()).unwrap();
    assert_eq!(table.true_set(), vec![3, 5, 6, 7]);

    let result = table.minimize(Form::Sop);
    assert_eq!(result.expression().to_string(), "x_1x_2 + x_0x_2 + x_0x_1");
}

#[test]
fn test_dont_care_output_rows() {
    let file = write_pla(".i 3\n.o 1\n0-1 1\n111 -\n.e\n");
    let table = TruthTable::from_pla_file(file.path()).unwrap();
    assert_eq!(table.true_set(), vec![1, 3]);
    assert_eq!(table.dont_care_set(), vec![7]);
    assert_eq!(table.minimize(Form::Sop).expression().to_string(), "x_0'x_2");
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = TruthTable::from_pla_file(dir.path().join("absent.pla")).unwrap_err();
    assert!(matches!(err, PlaReadError::Io(_)));

    let err: KmapError = err.into();
    assert!(matches!(err, KmapError::PlaRead(_)));
}

#[test]
fn test_too_many_variables_rejected() {
    let file = write_pla(".i 6\n.o 1\n000000 1\n");
    let err = TruthTable::from_pla_file(file.path()).unwrap_err();
    assert!(matches!(err, PlaReadError::TruthTable(_)));
}
