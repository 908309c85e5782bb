//! The Boruvka phase cycle.

/// What every vertex does during one superstep.
///
/// Superstep 0 is [`Phase::Init`]; afterwards the six remaining phases repeat
/// in order, starting with [`Phase::Announce`] at superstep 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    Init,
    Announce,
    FindCandidate,
    Hook,
    QueryParent,
    ReplyParent,
    /// Apply the pointer jump and count roots; the cycle's last step.
    Compress,
}

impl Phase {
    /// Number of supersteps in one cycle.
    pub const CYCLE_LEN: u64 = 6;

    /// Phase of `superstep` in the fixed cycle.
    pub fn for_superstep(superstep: u64) -> Self {
        if superstep == 0 {
            return Phase::Init;
        }
        match superstep % Self::CYCLE_LEN {
            1 => Phase::Announce,
            2 => Phase::FindCandidate,
            3 => Phase::Hook,
            4 => Phase::QueryParent,
            5 => Phase::ReplyParent,
            _ => Phase::Compress,
        }
    }

    /// Phase that follows `self` in the fixed cycle.
    pub fn next(self) -> Self {
        match self {
            Phase::Init => Phase::Announce,
            Phase::Announce => Phase::FindCandidate,
            Phase::FindCandidate => Phase::Hook,
            Phase::Hook => Phase::QueryParent,
            Phase::QueryParent => Phase::ReplyParent,
            Phase::ReplyParent => Phase::Compress,
            Phase::Compress => Phase::Announce,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Phase::Init => "init",
            Phase::Announce => "announce",
            Phase::FindCandidate => "find_candidate",
            Phase::Hook => "hook",
            Phase::QueryParent => "query_parent",
            Phase::ReplyParent => "reply_parent",
            Phase::Compress => "compress",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Phase;

    #[test]
    fn superstep_zero_is_init() {
        assert_eq!(Phase::for_superstep(0), Phase::Init);
    }

    #[test]
    fn cycle_layout() {
        assert_eq!(Phase::for_superstep(1), Phase::Announce);
        assert_eq!(Phase::for_superstep(3), Phase::Hook);
        assert_eq!(Phase::for_superstep(6), Phase::Compress);
        assert_eq!(Phase::for_superstep(7), Phase::Announce);
        assert_eq!(Phase::for_superstep(12), Phase::Compress);
    }

    #[test]
    fn next_agrees_with_superstep_mapping() {
        for s in 0..100u64 {
            assert_eq!(
                Phase::for_superstep(s).next(),
                Phase::for_superstep(s + 1),
                "mismatch after superstep {s}"
            );
        }
    }

    #[test]
    fn init_never_recurs() {
        let mut phase = Phase::Init;
        for _ in 0..50 {
            phase = phase.next();
            assert_ne!(phase, Phase::Init);
        }
    }
}
