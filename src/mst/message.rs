//! Messages exchanged by the Boruvka vertex program.

use crate::traits::VertexId;

/// One message kind per protocol step; each variant carries only its own fields.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MstMessage {
    /// A vertex advertising its current root to its neighbors.
    Announce { src_id: VertexId, src_root: VertexId },

    /// A member's cheapest inter-component edge, sent to its own root.
    /// `tie_a <= tie_b` are the edge's endpoints.
    Candidate {
        src_root: VertexId,
        target_root: VertexId,
        weight: f64,
        tie_a: VertexId,
        tie_b: VertexId,
    },

    /// Record of an accepted merge, sent to the root that was hooked onto.
    /// No phase acts on it.
    Hook {
        higher_root: VertexId,
        lower_root: VertexId,
        weight: f64,
    },

    /// Pointer-jump request: "send me your pointer".
    ParentQuery { child_id: VertexId },

    /// Answer to a [`MstMessage::ParentQuery`].
    ParentReply {
        child_id: VertexId,
        grandparent: VertexId,
    },
}

impl MstMessage {
    /// Short name of the variant, for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            MstMessage::Announce { .. } => "announce",
            MstMessage::Candidate { .. } => "candidate",
            MstMessage::Hook { .. } => "hook",
            MstMessage::ParentQuery { .. } => "parent_query",
            MstMessage::ParentReply { .. } => "parent_reply",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_are_distinct() {
        let all = [
            MstMessage::Announce {
                src_id: 1,
                src_root: 1,
            },
            MstMessage::Candidate {
                src_root: 1,
                target_root: 2,
                weight: 1.0,
                tie_a: 1,
                tie_b: 2,
            },
            MstMessage::Hook {
                higher_root: 2,
                lower_root: 1,
                weight: 1.0,
            },
            MstMessage::ParentQuery { child_id: 3 },
            MstMessage::ParentReply {
                child_id: 3,
                grandparent: 1,
            },
        ];
        let mut kinds: Vec<_> = all.iter().map(MstMessage::kind).collect();
        kinds.sort_unstable();
        kinds.dedup();
        assert_eq!(kinds.len(), 5);
    }
}
