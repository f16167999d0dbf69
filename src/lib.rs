mod batch;
mod classify;
mod csv_out;
mod error;
mod model;
mod numeric;
mod options;
mod pdf_reader;
mod table_detect;
mod warning;

use std::path::Path;

use serde::Serialize;
use tracing::info;

use crate::classify::{apply_industry_row, classify_industry};
use crate::csv_out::write_table;
use crate::model::{PageTable, PageText};
use crate::pdf_reader::read_pdf_pages;
use crate::table_detect::detect_tables_in_page;

pub use batch::{BatchOutcome, run_batch};
pub use error::ExtractError;
pub use model::{DocumentExtraction, TourismRecord, TourismTable};
pub use numeric::extract_number;
pub use options::{ExtractOptions, YearSet};
pub use warning::{ExtractWarning, WarningCode};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BatchReport {
    pub document_count: usize,
    pub record_count: usize,
    pub output_written: bool,
    pub warnings: Vec<ExtractWarning>,
}

pub fn extract_tourism_record(
    input_pdf: &Path,
    year: i32,
    options: &ExtractOptions,
) -> Result<DocumentExtraction, ExtractError> {
    let pages = read_pdf_pages(input_pdf)?;
    Ok(scan_pages(&pages, year, options))
}

fn row_mentions_caption(row: &[String], caption: &str) -> bool {
    if row
        .iter()
        .any(|cell| cell.to_lowercase().contains(caption))
    {
        return true;
    }
    // Cell splitting can fragment a caption that spans several words.
    row.join(" ").to_lowercase().contains(caption)
}

fn populate_from_table(record: &mut TourismRecord, table: &PageTable) -> usize {
    let mut classified = 0_usize;
    for row in table.rows.iter().skip(2) {
        let Some(first_cell) = row.first() else {
            continue;
        };
        if let Some(category) = classify_industry(first_cell) {
            apply_industry_row(record, category, row);
            classified += 1;
        }
    }
    classified
}

fn scan_pages(pages: &[PageText], year: i32, options: &ExtractOptions) -> DocumentExtraction {
    let mut record = TourismRecord::empty(year, &options.county);
    let mut warnings = Vec::new();
    let needle = options.county_needle();
    let caption = options.county_caption();

    for page in pages {
        if !page.text.to_lowercase().contains(&needle) {
            continue;
        }

        for table in detect_tables_in_page(page) {
            if table.rows.len() < 2 {
                continue;
            }
            if !row_mentions_caption(&table.rows[0], &caption) {
                continue;
            }

            info!("found '{caption}' table on page {}", table.page);
            record.data_found = true;
            let classified = populate_from_table(&mut record, &table);
            if classified == 0 {
                warnings.push(
                    ExtractWarning::new(
                        WarningCode::NoIndustryRows,
                        "county table matched but no industry rows were classified",
                    )
                    .with_page(table.page),
                );
            }
            return DocumentExtraction { record, warnings };
        }
    }

    warnings.push(ExtractWarning::new(
        WarningCode::NoCountyTable,
        "no page contained a matching county table",
    ));
    DocumentExtraction { record, warnings }
}

pub fn extract_pdf_to_csv(
    input_pdf: &Path,
    output_csv: &Path,
    year: i32,
    options: &ExtractOptions,
) -> Result<DocumentExtraction, ExtractError> {
    let extraction = extract_tourism_record(input_pdf, year, options)?;

    let mut table = TourismTable::default();
    table.push(extraction.record.clone());
    write_table(output_csv, &table, options.delimiter)?;

    Ok(extraction)
}

pub fn extract_directory_to_csv(
    input_dir: &Path,
    output_csv: &Path,
    options: &ExtractOptions,
) -> Result<BatchReport, ExtractError> {
    let outcome = run_batch(input_dir, options)?;

    let output_written = if outcome.table.is_empty() {
        info!("no records extracted; skipping CSV output");
        false
    } else {
        write_table(output_csv, &outcome.table, options.delimiter)?;
        true
    };

    Ok(BatchReport {
        document_count: outcome.document_count,
        record_count: outcome.table.len(),
        output_written,
        warnings: outcome.warnings,
    })
}
