//! Level requirements read from the progression workbook.
//!
//! Skills and weapons each have a two-column block on the progression
//! sheet: the unlockable level and the minimum player level required for
//! it. Rows are read by absolute `(row, column)` index inside the loaded
//! cell range.

use balance_core::LevelRequirement;
use serde::{Deserialize, Serialize};

use crate::sheet::{CellRange, Result, SheetSource};

pub const PROGRESSION_SHEET: &str = "Account XP and Progression";

/// Where a requirement block lives in the workbook.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequirementLayout {
    pub sheet_title: String,
    /// A1 range loaded from the sheet (for example `G2:H12`).
    pub cell_range: String,
    /// First row read, inclusive.
    pub first_row: u32,
    /// Last row read, exclusive.
    pub end_row: u32,
    pub level_column: u32,
    pub min_player_level_column: u32,
}

impl RequirementLayout {
    /// Skill level requirements: ten levels in `G2:H12`.
    pub fn skills() -> Self {
        Self {
            sheet_title: PROGRESSION_SHEET.to_owned(),
            cell_range: "G2:H12".to_owned(),
            first_row: 2,
            end_row: 12,
            level_column: 6,
            min_player_level_column: 7,
        }
    }

    /// Weapon level requirements: fifty levels in `J2:K52`.
    pub fn weapons() -> Self {
        Self {
            sheet_title: PROGRESSION_SHEET.to_owned(),
            cell_range: "J2:K52".to_owned(),
            first_row: 2,
            end_row: 52,
            level_column: 9,
            min_player_level_column: 10,
        }
    }
}

/// Reads one requirement per row of `layout`.
pub fn extract(
    sheets: &dyn SheetSource,
    layout: &RequirementLayout,
) -> Result<Vec<LevelRequirement>> {
    let range: CellRange = layout.cell_range.parse()?;
    let sheet = sheets.load_sheet(&layout.sheet_title, &range)?;

    (layout.first_row..layout.end_row)
        .map(|row| {
            let level = sheet.level(row, layout.level_column)?;
            let min_player_level = sheet.level(row, layout.min_player_level_column)?;
            Ok(LevelRequirement::new(level, min_player_level))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sheet::{InMemoryWorkbook, SheetError};

    fn workbook() -> InMemoryWorkbook {
        let mut workbook = InMemoryWorkbook::new();
        let minimums = [1, 5, 10, 20, 30, 45, 60, 80, 100, 125];
        for (offset, min) in minimums.iter().enumerate() {
            let row = 2 + offset as u32;
            workbook.set(PROGRESSION_SHEET, row, 6, offset as f64 + 1.0);
            workbook.set(PROGRESSION_SHEET, row, 7, *min as f64);
        }
        workbook
    }

    #[test]
    fn extracts_skill_requirements() {
        let requirements = extract(&workbook(), &RequirementLayout::skills()).unwrap();
        assert_eq!(requirements.len(), 10);
        assert_eq!(requirements[0], LevelRequirement::new(1, 1));
        assert_eq!(requirements[1], LevelRequirement::new(2, 5));
        assert_eq!(requirements[9], LevelRequirement::new(10, 125));
    }

    #[test]
    fn empty_rows_read_as_zero() {
        let workbook = InMemoryWorkbook::new().with_sheet(PROGRESSION_SHEET, vec![]);
        let requirements = extract(&workbook, &RequirementLayout::skills()).unwrap();
        assert!(requirements.iter().all(|r| *r == LevelRequirement::new(0, 0)));
    }

    #[test]
    fn fractional_levels_are_rejected() {
        let mut workbook = workbook();
        workbook.set(PROGRESSION_SHEET, 4, 7, 9.5);
        let err = extract(&workbook, &RequirementLayout::skills()).unwrap_err();
        assert!(matches!(
            err,
            SheetError::NotALevel { row: 4, column: 7, .. }
        ));
    }

    #[test]
    fn rows_past_the_range_fail() {
        let layout = RequirementLayout {
            end_row: 13,
            ..RequirementLayout::skills()
        };
        let err = extract(&workbook(), &layout).unwrap_err();
        assert!(matches!(err, SheetError::CellOutOfRange { row: 12, .. }));
    }
}
