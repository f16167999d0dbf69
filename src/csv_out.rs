use std::fs;
use std::path::Path;

use csv::WriterBuilder;

use crate::error::ExtractError;
use crate::model::TourismTable;

pub(crate) fn write_table(
    path: &Path,
    table: &TourismTable,
    delimiter: u8,
) -> Result<(), ExtractError> {
    if let Some(parent) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    let mut writer = WriterBuilder::new().delimiter(delimiter).from_path(path)?;
    for record in table.records() {
        writer.serialize(record)?;
    }
    writer.flush()?;
    Ok(())
}

pub(crate) fn write_table_to_string(
    table: &TourismTable,
    delimiter: u8,
) -> Result<String, ExtractError> {
    let mut writer = WriterBuilder::new()
        .delimiter(delimiter)
        .from_writer(Vec::<u8>::new());
    for record in table.records() {
        writer.serialize(record)?;
    }
    writer.flush()?;

    let bytes = writer
        .into_inner()
        .map_err(|error| ExtractError::Csv(error.into_error().into()))?;
    String::from_utf8(bytes)
        .map_err(|error| ExtractError::InvalidOption(format!("invalid utf-8 csv output: {error}")))
}
