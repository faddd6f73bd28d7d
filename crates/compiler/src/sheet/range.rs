//! A1-notation cell ranges.

use std::fmt;
use std::str::FromStr;

use super::error::SheetError;

/// An inclusive rectangle of cells with 0-based row and column indices.
///
/// `"G2:H12"` covers rows 1 through 11 and columns 6 through 7.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CellRange {
    pub start_row: u32,
    pub start_column: u32,
    pub end_row: u32,
    pub end_column: u32,
}

impl CellRange {
    pub fn contains(&self, row: u32, column: u32) -> bool {
        (self.start_row..=self.end_row).contains(&row)
            && (self.start_column..=self.end_column).contains(&column)
    }
}

/// Parses one `<letters><digits>` reference into 0-based `(row, column)`.
fn parse_cell(reference: &str) -> Option<(u32, u32)> {
    let split = reference.find(|c: char| c.is_ascii_digit())?;
    let (letters, digits) = reference.split_at(split);
    if letters.is_empty() || !letters.chars().all(|c| c.is_ascii_alphabetic()) {
        return None;
    }

    let mut column: u32 = 0;
    for letter in letters.chars() {
        let value = u32::from(letter.to_ascii_uppercase() as u8 - b'A') + 1;
        column = column.checked_mul(26)?.checked_add(value)?;
    }
    let row: u32 = digits.parse().ok()?;
    if row == 0 {
        return None;
    }
    Some((row - 1, column - 1))
}

fn column_name(mut column: u32) -> String {
    let mut letters = Vec::new();
    loop {
        letters.push(char::from(b'A' + (column % 26) as u8));
        if column < 26 {
            break;
        }
        column = column / 26 - 1;
    }
    letters.iter().rev().collect()
}

impl FromStr for CellRange {
    type Err = SheetError;

    fn from_str(range: &str) -> Result<Self, Self::Err> {
        let invalid = |reason: &str| SheetError::InvalidRange {
            range: range.to_owned(),
            reason: reason.to_owned(),
        };

        let (start, end) = range.split_once(':').unwrap_or((range, range));
        let (start_row, start_column) =
            parse_cell(start.trim()).ok_or_else(|| invalid("bad start cell"))?;
        let (end_row, end_column) = parse_cell(end.trim()).ok_or_else(|| invalid("bad end cell"))?;
        if end_row < start_row || end_column < start_column {
            return Err(invalid("end cell precedes start cell"));
        }

        Ok(Self {
            start_row,
            start_column,
            end_row,
            end_column,
        })
    }
}

impl fmt::Display for CellRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}:{}{}",
            column_name(self.start_column),
            self.start_row + 1,
            column_name(self.end_column),
            self.end_row + 1
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a1_range() {
        let range: CellRange = "G2:H12".parse().unwrap();
        assert_eq!(
            range,
            CellRange {
                start_row: 1,
                start_column: 6,
                end_row: 11,
                end_column: 7,
            }
        );
        assert!(range.contains(2, 6));
        assert!(!range.contains(12, 6));
        assert!(!range.contains(2, 8));
        assert_eq!(range.to_string(), "G2:H12");
    }

    #[test]
    fn multi_letter_columns() {
        let range: CellRange = "Z1:AB3".parse().unwrap();
        assert_eq!(range.start_column, 25);
        assert_eq!(range.end_column, 27);
        assert_eq!(range.to_string(), "Z1:AB3");
    }

    #[test]
    fn single_cell_range() {
        let range: CellRange = "j2".parse().unwrap();
        assert_eq!((range.start_row, range.start_column), (1, 9));
        assert_eq!(range.start_row, range.end_row);
    }

    #[test]
    fn rejects_malformed_ranges() {
        for bad in ["", "G", "12", "G0:H2", "H12:G2", "G2:H", "G-2:H3"] {
            assert!(
                matches!(bad.parse::<CellRange>(), Err(SheetError::InvalidRange { .. })),
                "{bad} should be rejected"
            );
        }
    }
}
