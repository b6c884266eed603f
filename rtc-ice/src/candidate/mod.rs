
pub mod candidate_base;
pub mod candidate_host;
pub mod candidate_pair;
pub mod candidate_peer_reflexive;
pub mod candidate_relay;
pub mod candidate_server_reflexive;

use serde::{Deserialize, Serialize};
use shared::error::*;
use std::fmt;
use std::net::SocketAddr;
use std::time::Instant;

use crate::network_type::NetworkType;
use crate::tcp_type::TcpType;

pub(crate) const DEFAULT_LOCAL_PREFERENCE: u16 = 65535;

/// Indicates that the candidate is used for RTP.
pub const COMPONENT_RTP: u16 = 1;

/// Candidate represents an ICE candidate.
///
/// Candidates are shared read-only between every pair that references them,
/// so anything that changes after construction (send/receive bookkeeping,
/// priority overrides) must use interior mutability.
pub trait Candidate: fmt::Display {
    /// An arbitrary string that is the same for two candidates
    /// that have the same type, base IP address, protocol (UDP, TCP,
    /// etc.), and STUN or TURN server.
    fn foundation(&self) -> String;

    /// A unique identifier for just this candidate.
    /// Unlike the foundation this is different for each candidate.
    fn id(&self) -> String;

    /// A component is a piece of a data stream.
    /// An example is one for RTP, and one for RTCP
    fn component(&self) -> u16;

    /// The last time this candidate received traffic
    fn last_received(&self) -> Instant;

    /// The last time this candidate sent traffic
    fn last_sent(&self) -> Instant;

    fn network_type(&self) -> NetworkType;
    fn address(&self) -> String;
    fn port(&self) -> u16;

    fn priority(&self) -> u32;

    /// A transport address related to a candidate,
    /// which is useful for diagnostics and other purposes.
    fn related_address(&self) -> Option<CandidateRelatedAddress>;

    fn candidate_type(&self) -> CandidateType;
    fn tcp_type(&self) -> TcpType;

    fn addr(&self) -> SocketAddr;

    /// Marks the candidate as having sent (`outbound`) or received traffic now.
    fn seen(&self, outbound: bool);

    /// Sends `raw` to `dst` through this candidate's connection and returns
    /// the number of bytes written.
    fn write_to(&self, raw: &[u8], dst: &dyn Candidate) -> Result<usize>;

    fn equal(&self, other: &dyn Candidate) -> bool;
}

/// Represents the type of candidate `CandidateType` enum.
#[derive(Default, Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CandidateType {
    #[default]
    #[serde(rename = "unspecified")]
    Unspecified,
    #[serde(rename = "host")]
    Host,
    #[serde(rename = "srflx")]
    ServerReflexive,
    #[serde(rename = "prflx")]
    PeerReflexive,
    #[serde(rename = "relay")]
    Relay,
}

// String makes CandidateType printable
impl fmt::Display for CandidateType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match *self {
            CandidateType::Host => "host",
            CandidateType::ServerReflexive => "srflx",
            CandidateType::PeerReflexive => "prflx",
            CandidateType::Relay => "relay",
            CandidateType::Unspecified => "Unknown candidate type",
        };
        write!(f, "{s}")
    }
}

impl CandidateType {
    /// Returns the preference weight of a `CandidateType`.
    ///
    /// 4.1.2.2.  Guidelines for Choosing Type and Local Preferences
    /// The RECOMMENDED values are 126 for host candidates, 100
    /// for server reflexive candidates, 110 for peer reflexive candidates,
    /// and 0 for relayed candidates.
    #[must_use]
    pub const fn preference(self) -> u16 {
        match self {
            Self::Host => 126,
            Self::PeerReflexive => 110,
            Self::ServerReflexive => 100,
            Self::Relay | CandidateType::Unspecified => 0,
        }
    }
}

/// Convey transport addresses related to the candidate, useful for diagnostics and other purposes.
#[derive(PartialEq, Eq, Debug, Clone)]
pub struct CandidateRelatedAddress {
    pub address: String,
    pub port: u16,
}

// String makes CandidateRelatedAddress printable
impl fmt::Display for CandidateRelatedAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, " related {}:{}", self.address, self.port)
    }
}
