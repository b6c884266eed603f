use crc::{CRC_32_ISCSI, Crc};
use std::fmt;
use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;
use std::sync::atomic::{AtomicU32, AtomicU64, Ordering};
use std::time::{Duration, Instant};

use super::*;
use crate::network_type::determine_network_type;
use shared::Conn;
use shared::error::*;

pub struct CandidateBaseConfig {
    pub candidate_id: String,
    pub network: String,
    pub address: String,
    pub port: u16,
    /// Between 1 and 256. Defaults to `COMPONENT_RTP`.
    pub component: u16,
    pub priority: u32,
    pub foundation: String,
    pub conn: Option<Arc<dyn Conn>>,
}

impl Default for CandidateBaseConfig {
    fn default() -> Self {
        Self {
            candidate_id: String::new(),
            network: String::new(),
            address: String::new(),
            port: 0,
            component: COMPONENT_RTP,
            priority: 0,
            foundation: String::new(),
            conn: None,
        }
    }
}

impl CandidateBaseConfig {
    /// RFC 8445 section 5.1.1.3: the component ID is a positive integer
    /// between 1 and 256, and the priority formula relies on that bound.
    pub(crate) fn validate_component(&self) -> Result<()> {
        if self.component == 0 || self.component > 256 {
            return Err(Error::ErrInvalidComponent);
        }
        Ok(())
    }
}

pub struct CandidateBase {
    pub(crate) id: String,
    pub(crate) network_type: NetworkType,
    pub(crate) candidate_type: CandidateType,

    pub(crate) component: u16,
    pub(crate) address: String,
    pub(crate) port: u16,
    pub(crate) related_address: Option<CandidateRelatedAddress>,
    pub(crate) tcp_type: TcpType,

    pub(crate) resolved_addr: SocketAddr,

    pub(crate) baseline_time: Instant,
    pub(crate) last_sent: AtomicU64,
    pub(crate) last_received: AtomicU64,

    pub(crate) foundation_override: String,
    pub(crate) priority_override: AtomicU32,

    pub(crate) network: String,
    pub(crate) conn: Option<Arc<dyn Conn>>,
}

impl Default for CandidateBase {
    fn default() -> Self {
        Self {
            id: String::new(),
            network_type: NetworkType::Unspecified,
            candidate_type: CandidateType::default(),

            component: 0,
            address: String::new(),
            port: 0,
            related_address: None,
            tcp_type: TcpType::default(),

            resolved_addr: SocketAddr::new(IpAddr::from([0, 0, 0, 0]), 0),

            baseline_time: Instant::now(),
            last_sent: AtomicU64::new(0),
            last_received: AtomicU64::new(0),

            foundation_override: String::new(),
            priority_override: AtomicU32::new(0),
            network: String::new(),
            conn: None,
        }
    }
}

// String makes the candidateBase printable
impl fmt::Display for CandidateBase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(related_address) = self.related_address() {
            write!(
                f,
                "{} {} {}:{}{}",
                self.network_type(),
                self.candidate_type(),
                self.address(),
                self.port(),
                related_address,
            )
        } else {
            write!(
                f,
                "{} {} {}:{}",
                self.network_type(),
                self.candidate_type(),
                self.address(),
                self.port(),
            )
        }
    }
}

impl Candidate for CandidateBase {
    fn foundation(&self) -> String {
        if !self.foundation_override.is_empty() {
            return self.foundation_override.clone();
        }

        let mut buf = vec![];
        buf.extend_from_slice(self.candidate_type().to_string().as_bytes());
        buf.extend_from_slice(self.address.as_bytes());
        buf.extend_from_slice(self.network_type().to_string().as_bytes());

        let checksum = Crc::<u32>::new(&CRC_32_ISCSI).checksum(&buf);

        format!("{checksum}")
    }

    /// Returns Candidate ID.
    fn id(&self) -> String {
        self.id.clone()
    }

    /// Returns candidate component.
    fn component(&self) -> u16 {
        self.component
    }

    /// Returns a time indicating the last time this candidate was received.
    fn last_received(&self) -> Instant {
        self.baseline_time + Duration::from_nanos(self.last_received.load(Ordering::SeqCst))
    }

    /// Returns a time indicating the last time this candidate was sent.
    fn last_sent(&self) -> Instant {
        self.baseline_time + Duration::from_nanos(self.last_sent.load(Ordering::SeqCst))
    }

    /// Returns candidate NetworkType.
    fn network_type(&self) -> NetworkType {
        self.network_type
    }

    /// Returns Candidate Address.
    fn address(&self) -> String {
        self.address.clone()
    }

    /// Returns Candidate Port.
    fn port(&self) -> u16 {
        self.port
    }

    /// Computes the priority for this ICE Candidate.
    fn priority(&self) -> u32 {
        let priority_override = self.priority_override.load(Ordering::SeqCst);
        if priority_override != 0 {
            return priority_override;
        }

        // The local preference MUST be an integer from 0 (lowest preference) to
        // 65535 (highest preference) inclusive.  When there is only a single IP
        // address, this value SHOULD be set to 65535.  If there are multiple
        // candidates for a particular component for a particular data stream
        // that have the same type, the local preference MUST be unique for each
        // one.
        (1 << 24) * u32::from(self.candidate_type().preference())
            + (1 << 8) * u32::from(self.local_preference())
            + (256 - u32::from(self.component()))
    }

    /// Returns `Option<CandidateRelatedAddress>`.
    fn related_address(&self) -> Option<CandidateRelatedAddress> {
        self.related_address.as_ref().cloned()
    }

    /// Returns candidate type.
    fn candidate_type(&self) -> CandidateType {
        self.candidate_type
    }

    fn tcp_type(&self) -> TcpType {
        self.tcp_type
    }

    fn addr(&self) -> SocketAddr {
        self.resolved_addr
    }

    fn seen(&self, outbound: bool) {
        let d = Instant::now().duration_since(self.baseline_time);

        if outbound {
            self.set_last_sent(d);
        } else {
            self.set_last_received(d);
        }
    }

    fn write_to(&self, raw: &[u8], dst: &dyn Candidate) -> Result<usize> {
        let n = if let Some(conn) = &self.conn {
            conn.send_to(raw, dst.addr())?
        } else {
            return Err(Error::ErrCandidateNoConn);
        };
        self.seen(true);
        Ok(n)
    }

    /// Used to compare two candidateBases.
    fn equal(&self, other: &dyn Candidate) -> bool {
        self.network_type() == other.network_type()
            && self.candidate_type() == other.candidate_type()
            && self.address() == other.address()
            && self.port() == other.port()
            && self.tcp_type() == other.tcp_type()
            && self.related_address() == other.related_address()
    }
}

impl CandidateBase {
    pub fn set_last_received(&self, d: Duration) {
        self.last_received
            .store(d.as_nanos() as u64, Ordering::SeqCst);
    }

    pub fn set_last_sent(&self, d: Duration) {
        self.last_sent.store(d.as_nanos() as u64, Ordering::SeqCst);
    }

    /// Replaces the signalled priority of this candidate. Zero falls back to the
    /// computed priority. Pairs referencing this candidate observe the change on
    /// their next `priority()` call.
    pub fn set_priority_override(&self, priority: u32) {
        self.priority_override.store(priority, Ordering::SeqCst);
    }

    pub(crate) fn set_ip(&mut self, ip: &IpAddr) -> Result<()> {
        let network_type = determine_network_type(&self.network, ip)?;
        self.network_type = network_type;
        self.resolved_addr = SocketAddr::new(*ip, self.port);

        Ok(())
    }

    /// Returns the local preference for this candidate.
    pub fn local_preference(&self) -> u16 {
        if self.network_type().is_tcp() {
            // RFC 6544, section 4.2
            //
            // With TCP candidates, the local preference part of the recommended
            // priority formula is updated to also include the directionality
            // (active, passive, or simultaneous-open) of the TCP connection.  The
            // RECOMMENDED local preference is then defined as:
            //
            //     local preference = (2^13) * direction-pref + other-pref
            //
            // It is RECOMMENDED that the host, UDP-tunneled, and relayed TCP
            // candidates have the direction-pref assigned as follows: 6 for active,
            // 4 for passive, and 2 for S-O.  For the NAT-assisted and server
            // reflexive candidates, the RECOMMENDED values are: 6 for S-O, 4 for
            // active, and 2 for passive.
            //
            // When there is only a single IP address, other-pref SHOULD be set to
            // the maximum allowed value (8191).
            let other_pref: u16 = 8191;

            let direction_pref: u16 = match self.candidate_type() {
                CandidateType::Host | CandidateType::Relay => match self.tcp_type() {
                    TcpType::Active => 6,
                    TcpType::Passive => 4,
                    TcpType::SimultaneousOpen => 2,
                    TcpType::Unspecified => 0,
                },
                CandidateType::PeerReflexive | CandidateType::ServerReflexive => {
                    match self.tcp_type() {
                        TcpType::SimultaneousOpen => 6,
                        TcpType::Active => 4,
                        TcpType::Passive => 2,
                        TcpType::Unspecified => 0,
                    }
                }
                CandidateType::Unspecified => 0,
            };

            (1 << 13) * direction_pref + other_pref
        } else {
            DEFAULT_LOCAL_PREFERENCE
        }
    }
}
