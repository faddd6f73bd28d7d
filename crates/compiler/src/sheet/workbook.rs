//! Workbook-backed sheet sources.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use super::{CellRange, Result, Sheet, SheetError, SheetSource};

/// Rows of cells indexed from 0. `None` is an empty cell.
pub type Grid = Vec<Vec<Option<f64>>>;

/// Sheets held in memory, for tests and generated fixtures.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct InMemoryWorkbook {
    sheets: BTreeMap<String, Grid>,
}

impl InMemoryWorkbook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_sheet(mut self, title: impl Into<String>, grid: Grid) -> Self {
        self.sheets.insert(title.into(), grid);
        self
    }

    /// Sets one cell, growing the grid as needed.
    pub fn set(&mut self, title: &str, row: u32, column: u32, value: f64) {
        let grid = self.sheets.entry(title.to_owned()).or_default();
        let (row, column) = (row as usize, column as usize);
        if grid.len() <= row {
            grid.resize(row + 1, Vec::new());
        }
        let cells = &mut grid[row];
        if cells.len() <= column {
            cells.resize(column + 1, None);
        }
        cells[column] = Some(value);
    }
}

impl SheetSource for InMemoryWorkbook {
    fn load_sheet(&self, title: &str, range: &CellRange) -> Result<Sheet> {
        let grid = self
            .sheets
            .get(title)
            .ok_or_else(|| SheetError::UnknownSheet {
                title: title.to_owned(),
            })?;

        let cells = (range.start_row..=range.end_row)
            .map(|row| {
                let source = grid.get(row as usize);
                (range.start_column..=range.end_column)
                    .map(|column| source.and_then(|cells| cells.get(column as usize)).copied().flatten())
                    .collect()
            })
            .collect();

        tracing::debug!("Loaded sheet '{}' range {}", title, range);
        Ok(Sheet::new(title, *range, cells))
    }
}

/// A workbook exported to RON: a map from sheet title to [`Grid`].
#[derive(Clone, Debug)]
pub struct WorkbookFile {
    path: PathBuf,
    workbook: InMemoryWorkbook,
}

impl WorkbookFile {
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let content = std::fs::read_to_string(&path)?;
        let sheets: BTreeMap<String, Grid> = ron::from_str(&content)
            .map_err(|e| SheetError::Parse(format!("{}: {}", path.display(), e)))?;

        tracing::debug!("Opened workbook {} ({} sheets)", path.display(), sheets.len());
        Ok(Self {
            path,
            workbook: InMemoryWorkbook { sheets },
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SheetSource for WorkbookFile {
    fn load_sheet(&self, title: &str, range: &CellRange) -> Result<Sheet> {
        self.workbook.load_sheet(title, range)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_grows_grid_and_loads_range() {
        let mut workbook = InMemoryWorkbook::new();
        workbook.set("Progression", 2, 6, 1.0);
        workbook.set("Progression", 2, 7, 5.0);

        let range: CellRange = "G2:H12".parse().unwrap();
        let sheet = workbook.load_sheet("Progression", &range).unwrap();
        assert_eq!(sheet.cell(2, 6).unwrap(), 1.0);
        assert_eq!(sheet.cell(2, 7).unwrap(), 5.0);
        assert_eq!(sheet.cell(11, 7).unwrap(), 0.0);
    }

    #[test]
    fn unknown_sheet() {
        let range: CellRange = "A1:B2".parse().unwrap();
        let err = InMemoryWorkbook::new().load_sheet("Missing", &range).unwrap_err();
        assert!(matches!(err, SheetError::UnknownSheet { .. }));
    }

    #[test]
    fn opens_ron_workbook() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("book.ron");
        std::fs::write(&path, r#"{"Sheet1": [[Some(1.0), None], [], [None, Some(7.5)]]}"#).unwrap();

        let workbook = WorkbookFile::open(&path).unwrap();
        let range: CellRange = "A1:B3".parse().unwrap();
        let sheet = workbook.load_sheet("Sheet1", &range).unwrap();
        assert_eq!(sheet.cell(0, 0).unwrap(), 1.0);
        assert_eq!(sheet.cell(1, 1).unwrap(), 0.0);
        assert_eq!(sheet.cell(2, 1).unwrap(), 7.5);
        assert_eq!(workbook.path(), path.as_path());
    }

    #[test]
    fn malformed_workbook_is_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("book.ron");
        std::fs::write(&path, "not ron").unwrap();
        assert!(matches!(WorkbookFile::open(&path), Err(SheetError::Parse(_))));
    }
}
