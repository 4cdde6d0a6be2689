//! Conversion pipeline with explicit stages.
//!
//! The pipeline follows these stages in order:
//! 1. **Ingest**: Check paths, sniff the dialect, load the source table
//! 2. **Translate**: Resolve raw headers to canonical fields
//! 3. **Validate**: Check required-field completeness
//! 4. **Recover** (optional): Infer missing zips from city/state columns
//! 5. **Transform**: Project, rename, optionally hash every cell
//! 6. **Output**: Write the Customer Match CSV
//!
//! The zip-only gap is the single recoverable validation outcome; the
//! operator decides (via the injected `confirm` capability) whether to
//! attempt recovery or abort.

use std::path::PathBuf;
use std::time::Instant;

use indicatif::{ProgressBar, ProgressStyle};
use tracing::{info, info_span, warn};

use cmatch_core::{
    SchemaCheck, check_schema, find_location_columns, format_error, hash_table, project,
    resolve_zips, translate_headers,
};
use cmatch_geo::ZipLookup;
use cmatch_ingest::{check_output, read_table, write_table};
use cmatch_model::{CanonicalField, Result, SynonymTable};

use crate::types::{RunSummary, ZipSummary};

/// Inputs for one conversion run.
pub struct GenerateRequest {
    pub input: PathBuf,
    pub output: PathBuf,
    pub hash: bool,
}

/// Run the conversion pipeline.
///
/// Returns `None` when the operator declines zip inference; no output file
/// is written in that case.
///
/// # Errors
///
/// Any [`cmatch_model::MatchError`]: bad paths, an undetectable dialect,
/// or missing required fields (including missing city/state columns on the
/// recovery path).
pub fn run_generate(
    request: &GenerateRequest,
    lookup: &dyn ZipLookup,
    confirm: &dyn Fn(&str) -> bool,
) -> Result<Option<RunSummary>> {
    let span = info_span!("generate", input = %request.input.display());
    let _guard = span.enter();

    check_output(&request.output)?;

    // =========================================================================
    // Stage 1: Ingest
    // =========================================================================
    let table = read_table(&request.input)?;
    info!(
        rows = table.row_count(),
        columns = table.headers.len(),
        "loaded source table"
    );

    // =========================================================================
    // Stage 2+3: Translate and validate
    // =========================================================================
    let synonyms = SynonymTable::builtin();
    let translation = translate_headers(&table.headers, &synonyms);
    let duplicate_headers = translation.duplicates.len();

    let (field_map, zip_scan) = match check_schema(translation.field_map, true) {
        SchemaCheck::Complete(map) => (map, None),
        SchemaCheck::Invalid(missing) => return Err(format_error(&missing)),
        SchemaCheck::MissingZip(map) => {
            // =================================================================
            // Stage 4: Recover zips from city/state
            // =================================================================
            warn!(
                "a zip code column could not be found in the CSV file; if there \
                 are city and state columns, zip codes may be detectable"
            );
            if !confirm("Would you like to try to detect zip codes?") {
                info!("zip inference declined, nothing written");
                return Ok(None);
            }
            let columns = find_location_columns(&table.headers)?;
            let bar = zip_progress_bar(table.row_count() as u64);
            let scan = resolve_zips(&table, &columns, lookup, |_| bar.inc(1));
            bar.finish_and_clear();
            info!(
                resolved = scan.resolved,
                missed = scan.missed,
                city = %columns.city_source,
                state = %columns.state_source,
                "zip scan finished"
            );
            (map, Some(scan))
        }
    };

    // =========================================================================
    // Stage 5: Transform
    // =========================================================================
    let mut output_table = project(&table, &field_map);
    let zip_inference = zip_scan.map(|scan| {
        let summary = ZipSummary {
            resolved: scan.resolved,
            missed: scan.missed,
        };
        output_table.push_column(CanonicalField::Zip.name().to_string(), scan.zips);
        summary
    });

    if request.hash {
        let cells = output_table.cell_count();
        info!(cells, "hashing cells");
        let start = Instant::now();
        hash_table(&mut output_table);
        info!(
            cells,
            elapsed_ms = start.elapsed().as_millis() as u64,
            "finished hashing"
        );
    }

    // =========================================================================
    // Stage 6: Output
    // =========================================================================
    write_table(&output_table, &request.output)?;

    let dropped_columns = table
        .headers
        .iter()
        .enumerate()
        .filter(|(index, _)| !field_map.bindings.iter().any(|b| b.column == *index))
        .map(|(_, header)| header.clone())
        .collect();

    Ok(Some(RunSummary {
        input: request.input.clone(),
        output: request.output.clone(),
        records: output_table.row_count(),
        field_map,
        dropped_columns,
        duplicate_headers,
        zip_inference,
        hashed: request.hash,
    }))
}

fn zip_progress_bar(len: u64) -> ProgressBar {
    let bar = ProgressBar::new(len);
    bar.set_style(
        ProgressStyle::with_template("{msg} [{bar:40}] {pos}/{len}")
            .map(|style| style.progress_chars("=> "))
            .unwrap_or_else(|_| ProgressStyle::default_bar()),
    );
    bar.set_message("Getting zipcodes");
    bar
}
