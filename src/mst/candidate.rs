//! Cheapest-edge selection with a deterministic tie-break.
//!
//! Two components must never hook onto each other in the same round. Both
//! sides therefore rank edges by the same total order: weight first, then the
//! ordered endpoint pair `(min, max)`. The result does not depend on the order
//! in which candidates are seen.

use crate::traits::VertexId;

/// An edge leaving a component, as seen from inside it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CandidateEdge {
    pub weight: f64,
    /// Smaller endpoint id.
    pub tie_a: VertexId,
    /// Larger endpoint id.
    pub tie_b: VertexId,
    /// Root of the component on the other side.
    pub target_root: VertexId,
}

impl CandidateEdge {
    /// Candidate for the edge `u - v`; endpoint order does not matter.
    pub fn new(weight: f64, u: VertexId, v: VertexId, target_root: VertexId) -> Self {
        Self {
            weight,
            tie_a: u.min(v),
            tie_b: u.max(v),
            target_root,
        }
    }

    /// `true` if `self` ranks strictly before `other`.
    #[inline]
    pub fn beats(&self, other: &Self) -> bool {
        self.weight < other.weight
            || (self.weight == other.weight
                && (self.tie_a, self.tie_b) < (other.tie_a, other.tie_b))
    }
}

/// Minimum of `candidates` under [`CandidateEdge::beats`].
pub fn select_min<I>(candidates: I) -> Option<CandidateEdge>
where
    I: IntoIterator<Item = CandidateEdge>,
{
    candidates.into_iter().fold(None, |best, c| match best {
        Some(b) if !c.beats(&b) => Some(b),
        _ => Some(c),
    })
}
