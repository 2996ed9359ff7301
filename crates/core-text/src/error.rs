use std::fmt;
use thiserror::Error;

/// Which coordinate an offset was addressing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Column,
    Row,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::Column => f.write_str("column"),
            Axis::Row => f.write_str("row"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TextError {
    /// `offset` is outside the valid range for the operation; `limit` is the
    /// length of the addressed line (columns) or the line count (rows).
    #[error("{axis} offset {offset} out of bounds (limit {limit})")]
    OutOfBounds {
        axis: Axis,
        offset: usize,
        limit: usize,
    },
}

impl TextError {
    pub(crate) fn column(offset: usize, limit: usize) -> Self {
        TextError::OutOfBounds {
            axis: Axis::Column,
            offset,
            limit,
        }
    }

    pub(crate) fn row(offset: usize, limit: usize) -> Self {
        TextError::OutOfBounds {
            axis: Axis::Row,
            offset,
            limit,
        }
    }
}
