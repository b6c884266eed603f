use std::fmt;
use std::sync::Arc;

use super::*;

/// RFC 5245 - 5.7.2.  Computing Pair Priority and Ordering Pairs
/// Let G be the priority for the candidate provided by the controlling
/// agent.  Let D be the priority for the candidate provided by the
/// controlled agent.
/// pair priority = 2^32*MIN(G,D) + 2*MAX(G,D) + (G>D?1:0)
#[must_use]
pub fn pair_priority(g: u32, d: u32) -> u64 {
    // 1<<32 overflows uint32; and if both g && d are
    // maxUint32, this result would overflow uint64
    ((1 << 32_u64) - 1) * u64::from(std::cmp::min(g, d))
        + 2 * u64::from(std::cmp::max(g, d))
        + u64::from(g > d)
}

/// Represents a combination of a local and remote candidate.
#[derive(Clone)]
pub struct CandidatePair {
    pub(crate) ice_role_controlling: bool,
    pub remote: Arc<dyn Candidate + Send + Sync>,
    pub local: Arc<dyn Candidate + Send + Sync>,
}

impl fmt::Debug for CandidatePair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "prio {} (local, prio {}) {} <-> {} (remote, prio {})",
            self.priority(),
            self.local.priority(),
            self.local,
            self.remote,
            self.remote.priority()
        )
    }
}

impl fmt::Display for CandidatePair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "prio {} (local, prio {}) {} <-> {} (remote, prio {})",
            self.priority(),
            self.local.priority(),
            self.local,
            self.remote,
            self.remote.priority()
        )
    }
}

impl PartialEq for CandidatePair {
    fn eq(&self, other: &Self) -> bool {
        self.local.equal(&*other.local) && self.remote.equal(&*other.remote)
    }
}

impl CandidatePair {
    #[must_use]
    pub fn new(
        local: Arc<dyn Candidate + Send + Sync>,
        remote: Arc<dyn Candidate + Send + Sync>,
        controlling: bool,
    ) -> Self {
        Self {
            ice_role_controlling: controlling,
            remote,
            local,
        }
    }

    /// Whether the agent that formed this pair held the controlling role.
    pub fn is_controlling(&self) -> bool {
        self.ice_role_controlling
    }

    /// Computed on every call from the current candidate priorities.
    pub fn priority(&self) -> u64 {
        let (g, d) = if self.ice_role_controlling {
            (self.local.priority(), self.remote.priority())
        } else {
            (self.remote.priority(), self.local.priority())
        };

        pair_priority(g, d)
    }

    /// Makes one unbuffered send of `b` from the local candidate to the remote one.
    pub fn write(&self, b: &[u8]) -> Result<usize> {
        self.local.write_to(b, &*self.remote)
    }
}
