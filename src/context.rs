//! Per-vertex view handed to [`VertexProgram::compute`].

use crate::traits::{VertexId, VertexProgram};

/// Everything a single vertex turn may read or write.
///
/// The context borrows the vertex's own value mutably and everything else
/// read-only, so a turn cannot reach into another vertex's state.
pub struct ComputeContext<'a, P: VertexProgram + ?Sized> {
    superstep: u64,
    id: VertexId,
    value: &'a mut P::Value,
    edges: &'a [(VertexId, f64)],
    messages: &'a [P::Message],
    outbox: &'a mut Vec<(VertexId, P::Message)>,
    aggregates: &'a mut P::Aggregates,
}

impl<'a, P: VertexProgram + ?Sized> ComputeContext<'a, P> {
    pub(crate) fn new(
        superstep: u64,
        id: VertexId,
        value: &'a mut P::Value,
        edges: &'a [(VertexId, f64)],
        messages: &'a [P::Message],
        outbox: &'a mut Vec<(VertexId, P::Message)>,
        aggregates: &'a mut P::Aggregates,
    ) -> Self {
        Self {
            superstep,
            id,
            value,
            edges,
            messages,
            outbox,
            aggregates,
        }
    }

    /// Index of the superstep being executed.
    #[inline]
    pub fn superstep(&self) -> u64 {
        self.superstep
    }

    /// Id of the vertex whose turn this is.
    #[inline]
    pub fn id(&self) -> VertexId {
        self.id
    }

    #[inline]
    pub fn value(&self) -> &P::Value {
        self.value
    }

    /// Replace this vertex's value. Visible to the engine once the turn ends.
    #[inline]
    pub fn set_value(&mut self, value: P::Value) {
        *self.value = value;
    }

    /// Out-edges as `(neighbor, weight)`, in load order.
    #[inline]
    pub fn edges(&self) -> &'a [(VertexId, f64)] {
        self.edges
    }

    /// Messages sent to this vertex during the previous superstep.
    #[inline]
    pub fn messages(&self) -> &'a [P::Message] {
        self.messages
    }

    /// Queue a message for `target`; it is delivered in the next superstep.
    #[inline]
    pub fn send(&mut self, target: VertexId, message: P::Message) {
        self.outbox.push((target, message));
    }

    /// This turn's contribution to the global aggregates.
    #[inline]
    pub fn aggregate(&mut self) -> &mut P::Aggregates {
        self.aggregates
    }
}

impl<P> ComputeContext<'_, P>
where
    P: VertexProgram + ?Sized,
    P::Message: Clone,
{
    /// Send `message` once along every out-edge (parallel edges included).
    pub fn send_to_all_edges(&mut self, message: P::Message) {
        for &(target, _) in self.edges {
            self.outbox.push((target, message.clone()));
        }
    }
}
