//! Spreadsheet access behind a small trait.
//!
//! The progression workbook is the only spreadsheet input of a build. A
//! source hands out a [`Sheet`] for a title and an A1 range; the sheet
//! then answers numeric cell reads by absolute `(row, column)` index.

pub mod error;
pub mod range;
pub mod workbook;

pub use error::{Result, SheetError};
pub use range::CellRange;
pub use workbook::{Grid, InMemoryWorkbook, WorkbookFile};

/// Something that can load a rectangular region of a named sheet.
pub trait SheetSource: Send + Sync {
    fn load_sheet(&self, title: &str, range: &CellRange) -> Result<Sheet>;
}

/// A loaded region of one sheet.
#[derive(Clone, Debug, PartialEq)]
pub struct Sheet {
    title: String,
    range: CellRange,
    /// Rows of the range, relative to its top-left corner.
    cells: Vec<Vec<Option<f64>>>,
}

impl Sheet {
    pub fn new(title: impl Into<String>, range: CellRange, cells: Vec<Vec<Option<f64>>>) -> Self {
        Self {
            title: title.into(),
            range,
            cells,
        }
    }

    /// Reads a numeric cell. Empty cells read as `0`.
    pub fn cell(&self, row: u32, column: u32) -> Result<f64> {
        if !self.range.contains(row, column) {
            return Err(SheetError::CellOutOfRange {
                row,
                column,
                range: self.range.to_string(),
            });
        }
        let value = self
            .cells
            .get((row - self.range.start_row) as usize)
            .and_then(|cells| cells.get((column - self.range.start_column) as usize))
            .copied()
            .flatten();
        Ok(value.unwrap_or(0.0))
    }

    /// Reads a cell holding a level number.
    pub fn level(&self, row: u32, column: u32) -> Result<u32> {
        let value = self.cell(row, column)?;
        if value.fract() != 0.0 || !(0.0..=f64::from(u32::MAX)).contains(&value) {
            return Err(SheetError::NotALevel { row, column, value });
        }
        Ok(value as u32)
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn range(&self) -> &CellRange {
        &self.range
    }
}
