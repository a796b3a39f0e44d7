//! Scripted runs of the interactive operation menu

use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};

use sparse_ops::session::run_menu;
use sparse_ops::{OutputConfig, Session, SparseMatrix};

/// Fresh scratch directory unique to this test
fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("sparse-ops-menu-{}-{}", name, std::process::id()));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).unwrap();
    dir
}

fn session(left: SparseMatrix<i64>, right: SparseMatrix<i64>) -> Session {
    Session {
        left_path: PathBuf::from("data/a.txt"),
        right_path: PathBuf::from("data/b.txt"),
        left,
        right,
    }
}

/// Feed `script` to the menu and return everything it printed
fn run_script(script: &str, session: &Session, config: &OutputConfig) -> String {
    let mut input = Cursor::new(script.to_string());
    let mut output = Vec::new();
    run_menu(&mut input, &mut output, session, config).unwrap();
    String::from_utf8(output).unwrap()
}

fn result_files(dir: &Path) -> Vec<String> {
    if !dir.exists() {
        return Vec::new();
    }
    let mut names: Vec<String> = fs::read_dir(dir)
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

#[test]
fn test_menu_reports_gate_failure_then_continues() {
    let dir = scratch_dir("gate");
    let config = OutputConfig::with_result_dir(dir.join("results"));

    // Two 2×3 matrices: addition is fine, multiplication fails the gate
    let a = SparseMatrix::from_triplets(2, 3, vec![(0, 0, 1), (1, 2, 2)]).unwrap();
    let b = SparseMatrix::from_triplets(2, 3, vec![(0, 0, 3)]).unwrap();
    let printed = run_script("3\n9\n1\n0\n", &session(a, b), &config);

    assert!(printed.contains("Can not perform multiply"));
    assert!(printed.contains("Invalid choice. Please enter a valid option."));
    assert!(printed.contains("Addition result written to"));
    assert!(printed.ends_with("Exiting program...\n"));
    assert_eq!(printed.matches("Enter your choice: ").count(), 4);

    assert_eq!(result_files(&dir.join("results")), vec!["a_add_b.txt"]);
    let text = fs::read_to_string(dir.join("results").join("a_add_b.txt")).unwrap();
    let mut lines: Vec<&str> = text.lines().collect();
    lines.sort();
    assert_eq!(lines, vec!["(0, 0, 4)", "(1, 2, 2)"]);
    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn test_menu_quits_at_end_of_input() {
    let dir = scratch_dir("eof");
    let config = OutputConfig::with_result_dir(dir.join("results"));

    let a = SparseMatrix::from_triplets(2, 2, vec![(0, 0, 5)]).unwrap();
    let b = SparseMatrix::from_triplets(2, 2, vec![(1, 0, 7)]).unwrap();
    let printed = run_script("2\n3", &session(a, b), &config);

    assert!(printed.contains("Subtraction result written to"));
    assert!(printed.contains("Multiplication result written to"));
    assert!(printed.ends_with("Exiting program...\n"));
    assert_eq!(
        result_files(&dir.join("results")),
        vec!["a_multiply_b.txt", "a_subtract_b.txt"]
    );
    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn test_menu_reports_overflow_and_writes_nothing() {
    let dir = scratch_dir("overflow");
    let config = OutputConfig::with_result_dir(dir.join("results"));

    let a = SparseMatrix::from_triplets(1, 1, vec![(0, 0, i64::MAX)]).unwrap();
    let printed = run_script("1\n0\n", &session(a.clone(), a), &config);

    assert!(printed.contains("Can not perform add"));
    assert!(printed.contains("overflowed"));
    assert!(result_files(&dir.join("results")).is_empty());
    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn test_menu_quit_immediately() {
    let a = SparseMatrix::<i64>::new(1, 1);
    let printed = run_script("0\n", &session(a.clone(), a), &OutputConfig::default());

    assert!(printed.contains("1. Addition"));
    assert!(printed.contains("0. Quit"));
    assert!(printed.ends_with("Exiting program...\n"));
}
