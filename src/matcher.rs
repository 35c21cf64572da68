//! Phase 2: greedy disjoint cover. Candidates are consumed from the back
//! (highest weight-to-cost ratio first); a candidate is discarded if its
//! span intersects what's already covered.

use bit_set::BitSet;

use crate::arena::RectId;
use crate::context::Context;

/// Builds a disjoint cover of the grid's strawberries from `candidates`
/// (ascending by ratio; consumed from the back). Returns the cover and the
/// final covering mask.
///
/// By construction (see [`crate::generator::generate`]) every strawberry
/// appears as a singleton candidate, so the candidate list can never
/// exhaust before every strawberry is covered.
pub fn greedy_cover(ctx: &mut Context, mut candidates: Vec<RectId>) -> (Vec<RectId>, BitSet) {
    let num_columns = ctx.num_columns();
    let mut covering_mask = BitSet::new();
    let mut unmatched = BitSet::new();
    for &(r, c) in ctx.grid().strawberries() {
        unmatched.insert(r * num_columns + c);
    }

    let mut cover = Vec::new();
    while !unmatched.is_empty() {
        let mut accepted = None;
        while let Some(id) = candidates.pop() {
            ctx.arena_mut().ensure_span(id, num_columns);
            if ctx.arena().span(id).is_disjoint(&covering_mask) {
                accepted = Some(id);
                break;
            }
            // discard: overlaps the current cover, try the next-highest ratio candidate
        }
        let id = accepted.unwrap_or_else(|| {
            panic!("candidate list exhausted before every strawberry was covered")
        });
        covering_mask.union_with(ctx.arena().span(id));
        cover.push(id);
        unmatched.difference_with(&covering_mask);
    }

    (cover, covering_mask)
}
