//! Slice classifier: given a join-hull `H` and a third cover rectangle `R`,
//! classifies `H ∩ R` into one of four kinds and, when rectangular, returns
//! the residual bounds `R \ H`.

use bit_set::BitSet;

use crate::arena::RectId;
use crate::context::Context;
use crate::rect::Bounds;

/// Classification of a third rectangle's intersection with a join-hull.
/// Ordered ascending exactly as enumerated (`Void` < `Decreasing` <
/// `NonIncreasing` < `Increasing`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[repr(i8)]
pub enum IntersectionKind {
    /// `R` and `H` do not intersect at all
    Void = -2,
    /// `R` is fully contained in `H`
    Decreasing = -1,
    /// `R \ H` is itself rectangular
    NonIncreasing = 0,
    /// `R \ H` is not rectangular; applying the join would require
    /// splitting `R` into multiple pieces
    Increasing = 1,
}

/// The result of classifying one cover rectangle against a join-hull.
#[derive(Debug, Clone)]
pub struct Slice {
    /// the cover rectangle being classified
    pub rect: RectId,
    /// the classification
    pub kind: IntersectionKind,
    /// populated only when `kind == NonIncreasing`
    pub residual: Option<Bounds>,
}

/// Classifies `rect`'s intersection with `hull`, materializing both spans
/// if needed.
pub fn classify(ctx: &mut Context, hull: RectId, rect: RectId) -> Slice {
    let num_columns = ctx.num_columns();
    ctx.arena_mut().ensure_span(hull, num_columns);
    ctx.arena_mut().ensure_span(rect, num_columns);

    let hull_span = ctx.arena().span(hull).clone();
    let rect_span = ctx.arena().span(rect).clone();

    if rect_span.is_disjoint(&hull_span) {
        return Slice { rect, kind: IntersectionKind::Void, residual: None };
    }
    if rect_span.is_subset(&hull_span) {
        return Slice { rect, kind: IntersectionKind::Decreasing, residual: None };
    }

    let mut left_over = rect_span;
    left_over.difference_with(&hull_span);

    let (kind, residual) = classify_residual(&left_over, num_columns);
    Slice { rect, kind, residual }
}

/// Classifies the non-empty, non-total `left_over = R \ H` bitset. Bounds
/// are derived from the first and last bits visited while scanning
/// `left_over` in ascending (row-major) order: the first bit gives the
/// candidate top-left corner, the last bit gives the candidate
/// bottom-right corner.
fn classify_residual(left_over: &BitSet, num_columns: usize) -> (IntersectionKind, Option<Bounds>) {
    let mut min_row = usize::MAX;
    let mut max_row = 0usize;
    let mut min_col = usize::MAX;
    let mut max_col = 0usize;
    let mut first: Option<(usize, usize)> = None;
    let mut last: Option<(usize, usize)> = None;

    for bit in left_over.iter() {
        let r = bit / num_columns;
        let c = bit % num_columns;
        min_row = min_row.min(r);
        max_row = max_row.max(r);
        min_col = min_col.min(c);
        max_col = max_col.max(c);
        if first.is_none() {
            first = Some((r, c));
        }
        last = Some((r, c));
    }

    let (top_row, top_col) = first.expect("left_over is non-empty");
    let (bottom_row, bottom_col) = last.expect("left_over is non-empty");

    let is_bounding_box = top_row == min_row
        && top_col == min_col
        && bottom_row == max_row
        && bottom_col == max_col;
    if !is_bounding_box {
        return (IntersectionKind::Increasing, None);
    }

    let mut test = BitSet::with_capacity(num_columns * (bottom_row + 1));
    for r in top_row..=bottom_row {
        let row_base = r * num_columns;
        for c in top_col..=bottom_col {
            test.insert(row_base + c);
        }
    }

    if &test == left_over {
        let bounds = Bounds { top_row, top_col, bottom_row, bottom_col };
        (IntersectionKind::NonIncreasing, Some(bounds))
    } else {
        (IntersectionKind::Increasing, None)
    }
}
