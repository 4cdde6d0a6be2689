//! End-to-end tests for the conversion pipeline.

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

use cmatch_cli::pipeline::{GenerateRequest, run_generate};
use cmatch_core::hash_cell;
use cmatch_geo::ZipLookup;
use cmatch_ingest::read_table;
use cmatch_model::MatchError;

/// Deterministic lookup double: knows Seattle, WA and nothing else.
struct SeattleOnly;

impl ZipLookup for SeattleOnly {
    fn zip_for(&self, city: &str, state: &str) -> Option<String> {
        (city.eq_ignore_ascii_case("seattle") && state.eq_ignore_ascii_case("wa"))
            .then(|| "98101".to_string())
    }
}

fn write_input(dir: &TempDir, contents: &str) -> PathBuf {
    let path = dir.path().join("input.csv");
    fs::write(&path, contents).expect("write input");
    path
}

fn request(dir: &TempDir, input: &PathBuf, hash: bool) -> GenerateRequest {
    GenerateRequest {
        input: input.clone(),
        output: dir.path().join("result.csv"),
        hash,
    }
}

#[test]
fn scenario_translates_mixed_headers_to_the_canonical_schema() {
    let dir = TempDir::new().expect("temp dir");
    let input = write_input(
        &dir,
        "First_Name,last name,Email Address,phone,zip\n\
         Ada,Lovelace,ada@example.com,555-0100,98101\n",
    );
    let request = request(&dir, &input, false);

    let summary = run_generate(&request, &SeattleOnly, &|_: &str| false)
        .expect("run")
        .expect("written");
    assert_eq!(summary.records, 1);
    assert!(summary.zip_inference.is_none());

    let output = read_table(&request.output).expect("read output");
    assert_eq!(
        output.headers,
        vec!["First Name", "Last Name", "Email", "Phone", "Zip"]
    );
    assert_eq!(
        output.rows,
        vec![vec!["Ada", "Lovelace", "ada@example.com", "555-0100", "98101"]]
    );
}

#[test]
fn scenario_infers_zips_from_city_and_state_when_accepted() {
    let dir = TempDir::new().expect("temp dir");
    let input = write_input(
        &dir,
        "first_name,last_name,phone,email,city,state\n\
         Ada,Lovelace,555-0100,ada@example.com,Seattle,WA\n\
         Bob,Byrne,555-0101,bob@example.com,,WA\n",
    );
    let request = request(&dir, &input, false);

    let summary = run_generate(&request, &SeattleOnly, &|_: &str| true)
        .expect("run")
        .expect("written");
    let zip = summary.zip_inference.expect("zip inference ran");
    assert_eq!(zip.resolved, 1);
    assert_eq!(zip.missed, 1);

    let output = read_table(&request.output).expect("read output");
    assert_eq!(
        output.headers,
        vec!["First Name", "Last Name", "Phone", "Email", "Zip"]
    );
    assert_eq!(output.rows[0][4], "98101");
    assert_eq!(output.rows[1][4], "");
}

#[test]
fn scenario_declined_inference_writes_nothing() {
    let dir = TempDir::new().expect("temp dir");
    let input = write_input(
        &dir,
        "first_name,last_name,phone,email,city,state\n\
         Ada,Lovelace,555-0100,ada@example.com,Seattle,WA\n",
    );
    let request = request(&dir, &input, false);

    let outcome = run_generate(&request, &SeattleOnly, &|_: &str| false).expect("run");
    assert!(outcome.is_none());
    assert!(!request.output.exists());
}

#[test]
fn scenario_wider_gaps_abort_naming_the_missing_fields() {
    let dir = TempDir::new().expect("temp dir");
    let input = write_input(
        &dir,
        "first_name,last_name,zip\n\
         Ada,Lovelace,98101\n",
    );
    let request = request(&dir, &input, false);

    let error = run_generate(&request, &SeattleOnly, &|_: &str| true).expect_err("should fail");
    let MatchError::Format { missing } = error else {
        panic!("expected a format error");
    };
    assert_eq!(missing, vec!["Phone", "Email"]);
    assert!(!request.output.exists());
}

#[test]
fn scenario_hashing_covers_every_cell() {
    let dir = TempDir::new().expect("temp dir");
    let input = write_input(
        &dir,
        "first_name,last_name,phone,email,zip\n\
         Ada,Lovelace,555-0100,ada@example.com,98101\n\
         Bob,Byrne,,bob@example.com,02108\n",
    );
    let request = request(&dir, &input, true);

    run_generate(&request, &SeattleOnly, &|_: &str| false)
        .expect("run")
        .expect("written");

    let output = read_table(&request.output).expect("read output");
    let original = read_table(&input).expect("read input");
    for (row_index, row) in output.rows.iter().enumerate() {
        for (col_index, cell) in row.iter().enumerate() {
            let source = &original.rows[row_index][col_index];
            assert_ne!(cell, source);
            assert_eq!(cell, &hash_cell(source));
        }
    }
}

#[test]
fn missing_city_and_state_columns_fail_structurally() {
    let dir = TempDir::new().expect("temp dir");
    let input = write_input(
        &dir,
        "first_name,last_name,phone,email,town\n\
         Ada,Lovelace,555-0100,ada@example.com,Seattle\n",
    );
    let request = request(&dir, &input, false);

    let error = run_generate(&request, &SeattleOnly, &|_: &str| true).expect_err("should fail");
    let MatchError::LocationColumns { missing } = error else {
        panic!("expected a location-columns error");
    };
    assert_eq!(missing, vec!["city", "state"]);
}
