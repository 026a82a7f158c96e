use super::cell::CellValue;
use std::fmt;

/// Column positions of a worklog row.
pub const COL_DATE: usize = 0;
pub const COL_TIME_FROM: usize = 1;
pub const COL_TIME_TO: usize = 2;
pub const COL_DURATION: usize = 3;
pub const COL_ISSUE_ID: usize = 4;
pub const COL_DESCRIPTION: usize = 5;

/// Minimum number of populated cells a row needs.
pub const REQUIRED_FIELDS: usize = 6;

/// One sheet row, positional cells as read from the file.
#[derive(Debug, Clone, PartialEq)]
pub struct RawRow {
    /// 1-based row number in the sheet, for messages.
    pub number: usize,
    pub cells: Vec<CellValue>,
}

impl RawRow {
    /// Build a row, dropping trailing empty cells so that `len()` counts the
    /// populated positions only.
    pub fn new(number: usize, mut cells: Vec<CellValue>) -> Self {
        while cells.last().is_some_and(CellValue::is_empty) {
            cells.pop();
        }
        Self { number, cells }
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn cell(&self, idx: usize) -> &CellValue {
        self.cells.get(idx).unwrap_or(&CellValue::Empty)
    }
}

impl fmt::Display for RawRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{} [", self.number)?;
        for (i, c) in self.cells.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", c)?;
        }
        write!(f, "]")
    }
}
