use std::path::Path;

use rust_xlsxwriter::{Table, TableColumn, Workbook};
use tempfile::NamedTempFile;

use crate::error::Result;

/// A table that will be materialised as an Excel sheet.
#[derive(Debug, Clone, PartialEq)]
pub struct SheetTable {
    pub sheet_name: String,
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// Writes the table as the only sheet of a new workbook at `path`.
///
/// The workbook is built in memory and only replaces `path` once it has been
/// saved completely.
pub fn write_sheet(path: &Path, table: &SheetTable) -> Result<()> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(&table.sheet_name)?;

    for (col_idx, header) in table.columns.iter().enumerate() {
        worksheet.write_string(0, col_idx as u16, header)?;
    }

    for (row_idx, row) in table.rows.iter().enumerate() {
        for (col_idx, cell) in row.iter().enumerate() {
            worksheet.write_string((row_idx + 1) as u32, col_idx as u16, cell)?;
        }
    }

    if !table.rows.is_empty() && !table.columns.is_empty() {
        let headers: Vec<TableColumn> = table
            .columns
            .iter()
            .map(|header| TableColumn::new().set_header(header))
            .collect();
        let mut excel_table = Table::new();
        excel_table.set_autofilter(true).set_columns(&headers);
        let col_end = (table.columns.len() as u16).saturating_sub(1);
        worksheet.add_table(0, 0, table.rows.len() as u32, col_end, &excel_table)?;
    }
    worksheet.autofit();

    // Saved beside the target and renamed into place, so a failed save
    // leaves no partial report at `path`.
    let directory = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let staged = NamedTempFile::new_in(directory)?;
    workbook.save(staged.path())?;
    staged.persist(path).map_err(|error| error.error)?;
    Ok(())
}
