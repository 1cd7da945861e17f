//! Packing of edit-layout rows into full-width grid rows.
//!
//! The editor always shows rows that add up to exactly [`GRID_WIDTH`] columns,
//! padding short rows with a filler entry. Filler never reaches the stored
//! configuration: [`unpack`] strips it again.

use crate::ir::{FieldRef, Layout, RawLayout, Row, GRID_WIDTH};

/// Total width of a row, filler included.
pub fn row_size(row: &[FieldRef]) -> u32 {
    row.iter().map(|f| u32::from(f.size)).sum()
}

/// Redistribute every row into rows no wider than the grid, pad each with
/// filler and renumber row ids from zero.
pub fn pack(rows: &[Row]) -> Layout {
    let mut packed: Vec<Vec<FieldRef>> = Vec::with_capacity(rows.len());

    for row in rows {
        let mut pending: Vec<FieldRef> = row
            .row_content
            .iter()
            .filter(|f| !f.is_filler())
            .map(clamp_size)
            .collect();

        // Fields that do not fit are deferred to a fresh row, which is packed
        // the same way until nothing is left over.
        while !pending.is_empty() {
            let mut current: Vec<FieldRef> = Vec::new();
            let mut overflow: Vec<FieldRef> = Vec::new();

            for field in pending {
                if row_size(&current) + u32::from(field.size) <= u32::from(GRID_WIDTH) {
                    current.push(field);
                } else {
                    overflow.push(field);
                }
            }

            pad(&mut current);
            packed.push(current);
            pending = overflow;
        }
    }

    packed
        .into_iter()
        .enumerate()
        .map(|(row_id, row_content)| Row::new(row_id, row_content))
        .collect()
}

/// Pack a layout in its stored shape.
pub fn pack_raw(raw: &[Vec<FieldRef>]) -> Layout {
    let rows: Vec<Row> = raw
        .iter()
        .enumerate()
        .map(|(row_id, content)| Row::new(row_id, content.clone()))
        .collect();
    pack(&rows)
}

/// Strip filler and row ids, giving the stored shape. Rows left without any
/// field are dropped.
pub fn unpack(rows: &[Row]) -> RawLayout {
    rows.iter()
        .map(|row| row.fields().cloned().collect::<Vec<_>>())
        .filter(|content| !content.is_empty())
        .collect()
}

fn pad(row: &mut Vec<FieldRef>) {
    let size = row_size(row);
    if size < u32::from(GRID_WIDTH) {
        // size < 12 so the difference fits in u8
        row.push(FieldRef::filler(GRID_WIDTH - size as u8));
    }
}

fn clamp_size(field: &FieldRef) -> FieldRef {
    let size = field.size.clamp(1, GRID_WIDTH);
    if size != field.size {
        tracing::warn!(
            field = %field.name,
            size = field.size,
            clamped = size,
            "field size outside the grid, clamping"
        );
    }
    FieldRef::new(field.name.clone(), size)
}
