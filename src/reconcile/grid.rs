//! Table reconstruction from flat cell lists.
//!
//! Analysis services report tables as an unordered set of cells with
//! row/column coordinates and spans, plus declared grid dimensions.
//! The reconstructor turns that into a rectangular grid of strings the
//! rest of the pipeline can rely on.

use crate::ingest::DetectedTable;
use crate::model::Table;

use super::markup::escape_cell;

/// Reconstructs a rectangular [`Table`] from detected cells.
///
/// Guarantees on the output:
/// - every row has the declared column count (rectangular);
/// - positions not covered by any cell hold empty strings, not gaps;
/// - spanned positions repeat the spanning cell's text, so consumers
///   never see holes inside a merged region;
/// - cell text is stored markup-safe: delimiter characters are escaped
///   on write-in so the table can later be serialized as delimited
///   markup without ambiguity.
///
/// Malformed geometry is recoverable: a span reaching outside the
/// declared grid is clipped to the grid bounds and logged as a warning,
/// never raised.
#[derive(Debug, Clone, Default)]
pub struct TableReconstructor;

impl TableReconstructor {
    /// Create a new reconstructor.
    pub fn new() -> Self {
        Self
    }

    /// Reconstruct a table from detected cells.
    ///
    /// An empty cell set yields the empty table — a well-formed value
    /// distinct from "no table found", which callers represent as the
    /// absence of a table node.
    pub fn reconstruct(&self, detected: &DetectedTable) -> Table {
        if detected.cells.is_empty() {
            return Table::new();
        }

        let (row_count, col_count) = self.effective_dimensions(detected);
        if row_count == 0 || col_count == 0 {
            return Table::new();
        }

        let mut grid = vec![vec![String::new(); col_count]; row_count];

        for cell in &detected.cells {
            if cell.row_index >= row_count || cell.col_index >= col_count {
                log::warn!(
                    "table cell at ({}, {}) lies outside declared {}x{} grid; dropped",
                    cell.row_index,
                    cell.col_index,
                    row_count,
                    col_count
                );
                continue;
            }

            let row_end = cell.row_index.saturating_add(cell.row_span.max(1));
            let col_end = cell.col_index.saturating_add(cell.col_span.max(1));
            if row_end > row_count || col_end > col_count {
                log::warn!(
                    "table cell span ({}, {}) + {}x{} exceeds {}x{} grid; clipped",
                    cell.row_index,
                    cell.col_index,
                    cell.row_span,
                    cell.col_span,
                    row_count,
                    col_count
                );
            }

            let text = escape_cell(cell.text.trim());
            for row in grid.iter_mut().take(row_end.min(row_count)).skip(cell.row_index) {
                for slot in row.iter_mut().take(col_end.min(col_count)).skip(cell.col_index) {
                    *slot = text.clone();
                }
            }
        }

        Table { rows: grid }
    }

    /// Resolve the grid dimensions to build.
    ///
    /// When the service declares zero rows or columns but still reports
    /// cells, the declaration is inconsistent; dimensions fall back to
    /// the cell extents so data is not silently discarded.
    fn effective_dimensions(&self, detected: &DetectedTable) -> (usize, usize) {
        if detected.row_count > 0 && detected.col_count > 0 {
            return (detected.row_count, detected.col_count);
        }

        let rows = detected
            .cells
            .iter()
            .map(|c| c.row_index.saturating_add(c.row_span.max(1)))
            .max()
            .unwrap_or(0);
        let cols = detected
            .cells
            .iter()
            .map(|c| c.col_index.saturating_add(c.col_span.max(1)))
            .max()
            .unwrap_or(0);

        log::warn!(
            "table declared {}x{} but carries {} cells; using extents {}x{}",
            detected.row_count,
            detected.col_count,
            detected.cells.len(),
            rows,
            cols
        );
        (rows, cols)
    }
}
