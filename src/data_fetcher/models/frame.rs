use serde_json::{Map, Value};
use std::ops::Range;

use super::envelope::ResponseEnvelope;

/// One row of a frame: column name to typed JSON value.
pub type Row = Map<String, Value>;

/// Tabular result with the response envelope attached out of band.
///
/// Rows are indexed `0..len()` in the order they were produced; the envelope
/// never appears as a column.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    columns: Vec<String>,
    rows: Vec<Row>,
    pub attr: ResponseEnvelope,
}

impl Frame {
    /// Builds a frame whose columns are the union of row keys in first-seen order.
    pub fn new(rows: Vec<Row>, attr: ResponseEnvelope) -> Self {
        let mut columns: Vec<String> = Vec::new();
        for row in &rows {
            for key in row.keys() {
                if !columns.iter().any(|c| c == key) {
                    columns.push(key.clone());
                }
            }
        }
        Frame {
            columns,
            rows,
            attr,
        }
    }

    /// Zero rows, zero columns. Used for 304 responses.
    pub fn empty(attr: ResponseEnvelope) -> Self {
        Frame {
            columns: Vec::new(),
            rows: Vec::new(),
            attr,
        }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// `(rows, columns)`
    pub fn shape(&self) -> (usize, usize) {
        (self.rows.len(), self.columns.len())
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn index(&self) -> Range<usize> {
        0..self.rows.len()
    }

    pub fn row(&self, index: usize) -> Option<&Row> {
        self.rows.get(index)
    }

    pub fn get(&self, index: usize, column: &str) -> Option<&Value> {
        self.rows.get(index).and_then(|row| row.get(column))
    }

    /// Every row's value for `column`; `None` where a row lacks it.
    /// Returns `None` when no row has the column.
    pub fn column(&self, column: &str) -> Option<Vec<Option<&Value>>> {
        if !self.columns.iter().any(|c| c == column) {
            return None;
        }
        Some(self.rows.iter().map(|row| row.get(column)).collect())
    }

    /// Appends frames in order, renumbering rows contiguously from zero.
    /// The result carries the envelope of the last frame.
    pub fn concat(frames: Vec<Frame>) -> Option<Frame> {
        let attr = frames.last()?.attr.clone();
        let rows: Vec<Row> = frames.into_iter().flat_map(|f| f.rows).collect();
        Some(Frame::new(rows, attr))
    }
}
