//! Shade: a `(r1, r2, join)` candidate evaluated during local search,
//! carrying its envelope, its penumbra, and its cost-penalty ordinal.

use crate::arena::RectId;
use crate::context::Context;
use crate::rect::Bounds;

/// `(r1, r2, join)` plus the bookkeeping needed to apply the join to the
/// cover: `envelope` (cover members fully contained in `join`) and
/// `penumbra` (cover members bisected by `join`, mapped to their
/// rectangular residuals).
#[derive(Debug, Clone)]
pub struct Shade {
    /// first rectangle of the pair
    pub r1: RectId,
    /// second rectangle of the pair
    pub r2: RectId,
    /// bounding hull of `r1` and `r2`
    pub join: RectId,
    /// cover members (other than `r1`/`r2`) fully contained in `join`
    pub envelope: Vec<RectId>,
    /// `original -> residual` for cover members bisected by `join`
    pub penumbra: Vec<(RectId, RectId)>,
    /// `cost(join) - (cost(r1) + cost(r2) + Σ cost(envelope) + Σ area saved by penumbra)`
    pub penalty: i64,
}

impl Shade {
    /// ascending by `(penalty, envelope.len())`: smaller envelopes are
    /// preferred on ties because they leave more options open downstream.
    fn sort_key(&self) -> (i64, usize) {
        (self.penalty, self.envelope.len())
    }

    /// `true` iff `self` should be preferred over `other`
    pub fn is_better_than(&self, other: &Shade) -> bool {
        self.sort_key() < other.sort_key()
    }
}

/// Builds the bounding hull of two disjoint cover rectangles and
/// materializes its span.
pub fn join_rectangles(ctx: &mut Context, r1: RectId, r2: RectId) -> RectId {
    let b1 = ctx.arena().get(r1).bounds();
    let b2 = ctx.arena().get(r2).bounds();
    let bounds = Bounds {
        top_row: b1.top_row.min(b2.top_row),
        top_col: b1.top_col.min(b2.top_col),
        bottom_row: b1.bottom_row.max(b2.bottom_row),
        bottom_col: b1.bottom_col.max(b2.bottom_col),
    };
    let weight = ctx.grid().weight(bounds.top_row, bounds.top_col, bounds.bottom_row, bounds.bottom_col);
    let id = ctx.arena_mut().alloc(bounds, weight);
    let num_columns = ctx.num_columns();
    ctx.arena_mut().ensure_span(id, num_columns);
    id
}
