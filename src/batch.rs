use std::fs;
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::error::ExtractError;
use crate::extract_tourism_record;
use crate::model::{TourismRecord, TourismTable};
use crate::options::{ExtractOptions, YearSet};
use crate::warning::{ExtractWarning, WarningCode};

#[derive(Debug, Clone, PartialEq)]
pub struct BatchOutcome {
    pub table: TourismTable,
    pub warnings: Vec<ExtractWarning>,
    pub document_count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum YearMatch {
    None,
    One(i32),
    Many(Vec<i32>),
}

pub(crate) fn infer_year_from_filename(file_name: &str, years: &YearSet) -> YearMatch {
    let mut matched = years.matches_in(file_name);
    match matched.len() {
        0 => YearMatch::None,
        1 => YearMatch::One(matched.remove(0)),
        _ => YearMatch::Many(matched),
    }
}

fn candidate_pdfs(input_dir: &Path) -> Result<Vec<PathBuf>, ExtractError> {
    let mut paths = Vec::new();
    for entry in fs::read_dir(input_dir)? {
        let path = entry?.path();
        if !path.is_file() {
            continue;
        }
        let is_pdf = path
            .extension()
            .and_then(|extension| extension.to_str())
            .is_some_and(|extension| extension.eq_ignore_ascii_case("pdf"));
        if is_pdf {
            paths.push(path);
        }
    }

    paths.sort();
    Ok(paths)
}

pub fn run_batch(input_dir: &Path, options: &ExtractOptions) -> Result<BatchOutcome, ExtractError> {
    if options.county.trim().is_empty() {
        return Err(ExtractError::InvalidOption(
            "county name must not be empty".to_string(),
        ));
    }
    if options.years.is_empty() {
        return Err(ExtractError::InvalidOption(
            "recognized year set must not be empty".to_string(),
        ));
    }

    let paths = candidate_pdfs(input_dir)?;
    if paths.is_empty() {
        info!("no PDF files found in '{}'", input_dir.display());
    }

    let mut table = TourismTable::default();
    let mut warnings = Vec::new();

    for path in &paths {
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();

        let year = match infer_year_from_filename(&file_name, &options.years) {
            YearMatch::One(year) => year,
            YearMatch::None => {
                warn!("skipping '{file_name}': no recognized year in filename");
                warnings.push(
                    ExtractWarning::new(
                        WarningCode::NoYearInFilename,
                        "filename matches no recognized year",
                    )
                    .with_file(file_name),
                );
                continue;
            }
            YearMatch::Many(matched) => {
                warn!("skipping '{file_name}': filename matches multiple years {matched:?}");
                warnings.push(
                    ExtractWarning::new(
                        WarningCode::AmbiguousYearInFilename,
                        format!("filename matches multiple recognized years: {matched:?}"),
                    )
                    .with_file(file_name),
                );
                continue;
            }
        };

        info!("processing '{file_name}' as year {year}");
        match extract_tourism_record(path, year, options) {
            Ok(extraction) => {
                warnings.extend(
                    extraction
                        .warnings
                        .into_iter()
                        .map(|warning| warning.with_year(year).with_file(file_name.clone())),
                );
                table.push(extraction.record);
            }
            Err(error) => {
                warn!("failed to read '{file_name}': {error}");
                warnings.push(
                    ExtractWarning::new(
                        WarningCode::DocumentUnreadable,
                        format!("document could not be read: {error}"),
                    )
                    .with_year(year)
                    .with_file(file_name),
                );
                table.push(TourismRecord::empty(year, &options.county));
            }
        }
    }

    table.sort_by_year();
    Ok(BatchOutcome {
        document_count: paths.len(),
        table,
        warnings,
    })
}
