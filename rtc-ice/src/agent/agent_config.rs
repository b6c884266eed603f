/// Minimum entropy of the local ufrag, in bits (RFC 8445 section 5.3).
pub(crate) const MIN_UFRAG_BITS: usize = 24;
/// Minimum entropy of the local pwd, in bits (RFC 8445 section 5.3).
pub(crate) const MIN_PWD_BITS: usize = 128;

/// Settings for `Agent::new`.
///
/// Only the local side is configured here. Remote credentials arrive later
/// through signalling and are set with `Agent::set_remote_credentials`.
#[derive(Default)]
pub struct AgentConfig {
    /// Local username fragment. It forms the second half of the USERNAME
    /// (`remote:local`) on every keepalive this agent sends. A random one is
    /// generated when left empty; a supplied one must carry at least
    /// `MIN_UFRAG_BITS` bits.
    pub local_ufrag: String,
    /// Local password, which the remote agent uses to key MESSAGE-INTEGRITY
    /// on what it sends us. Generated when empty; a supplied one must carry
    /// at least `MIN_PWD_BITS` bits.
    pub local_pwd: String,

    /// Decides which candidate counts as G in the pair priority of every pair
    /// the agent forms.
    pub is_controlling: bool,
}
