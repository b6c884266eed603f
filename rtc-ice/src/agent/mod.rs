
pub mod agent_config;

use agent_config::*;
use std::sync::Arc;

use crate::candidate::{candidate_pair::*, *};
use crate::keepalive::send_keepalive;
use crate::rand::*;
use shared::error::*;

#[derive(Default)]
pub(crate) struct UfragPwd {
    pub(crate) local_ufrag: String,
    pub(crate) local_pwd: String,
    pub(crate) remote_ufrag: String,
    pub(crate) remote_pwd: String,
}

/// Represents the ICE agent.
///
/// The agent owns the session credentials and the candidates on both sides,
/// and pairs every local candidate with every remote one. Deciding when a pair
/// is checked or kept alive is left to the caller.
pub struct Agent {
    pub(crate) is_controlling: bool,

    pub(crate) ufrag_pwd: UfragPwd,

    pub(crate) local_candidates: Vec<Arc<dyn Candidate + Send + Sync>>,
    pub(crate) remote_candidates: Vec<Arc<dyn Candidate + Send + Sync>>,
    pub(crate) candidate_pairs: Vec<CandidatePair>,
}

impl Agent {
    /// Creates a new Agent.
    pub fn new(config: AgentConfig) -> Result<Self> {
        let mut agent = Self {
            is_controlling: config.is_controlling,
            ufrag_pwd: UfragPwd::default(),
            local_candidates: vec![],
            remote_candidates: vec![],
            candidate_pairs: vec![],
        };

        // Restart is also used to initialize the agent for the first time
        agent.restart(config.local_ufrag, config.local_pwd, false)?;

        Ok(agent)
    }

    /// Adds a new local candidate.
    pub fn add_local_candidate(&mut self, c: Arc<dyn Candidate + Send + Sync>) -> Result<()> {
        for cand in &self.local_candidates {
            if cand.equal(&*c) {
                return Ok(());
            }
        }

        self.local_candidates.push(c);

        for remote_cand in 0..self.remote_candidates.len() {
            self.add_pair(self.local_candidates.len() - 1, remote_cand);
        }

        Ok(())
    }

    /// Adds a new remote candidate.
    pub fn add_remote_candidate(&mut self, c: Arc<dyn Candidate + Send + Sync>) -> Result<()> {
        if c.candidate_type() == CandidateType::Host && c.address().ends_with(".local") {
            log::warn!(
                "[{}]: remote mDNS candidate added, but mDNS is disabled: ({})",
                self.get_name(),
                c.address()
            );
            return Err(Error::ErrMulticastDnsNotSupported);
        }

        for cand in &self.remote_candidates {
            if cand.equal(&*c) {
                return Ok(());
            }
        }

        self.remote_candidates.push(c);

        for local_cand in 0..self.local_candidates.len() {
            self.add_pair(local_cand, self.remote_candidates.len() - 1);
        }

        Ok(())
    }

    /// Returns the local user credentials.
    pub fn get_local_user_credentials(&self) -> (String, String) {
        (
            self.ufrag_pwd.local_ufrag.clone(),
            self.ufrag_pwd.local_pwd.clone(),
        )
    }

    /// Returns the remote user credentials.
    pub fn get_remote_user_credentials(&self) -> (String, String) {
        (
            self.ufrag_pwd.remote_ufrag.clone(),
            self.ufrag_pwd.remote_pwd.clone(),
        )
    }

    /// Sets the credentials of the remote agent.
    pub fn set_remote_credentials(
        &mut self,
        remote_ufrag: String,
        remote_pwd: String,
    ) -> Result<()> {
        if remote_ufrag.is_empty() {
            return Err(Error::ErrRemoteUfragEmpty);
        } else if remote_pwd.is_empty() {
            return Err(Error::ErrRemotePwdEmpty);
        }

        self.ufrag_pwd.remote_ufrag = remote_ufrag;
        self.ufrag_pwd.remote_pwd = remote_pwd;
        Ok(())
    }

    /// Restarts the ICE Agent with the provided ufrag/pwd
    /// If no ufrag/pwd is provided the Agent will generate one itself.
    pub fn restart(
        &mut self,
        mut ufrag: String,
        mut pwd: String,
        keep_local_candidates: bool,
    ) -> Result<()> {
        if ufrag.is_empty() {
            ufrag = generate_ufrag();
        }
        if pwd.is_empty() {
            pwd = generate_pwd();
        }

        if ufrag.len() * 8 < MIN_UFRAG_BITS {
            return Err(Error::ErrLocalUfragInsufficientBits);
        }
        if pwd.len() * 8 < MIN_PWD_BITS {
            return Err(Error::ErrLocalPwdInsufficientBits);
        }

        // Clear all agent needed to take back to fresh state
        self.ufrag_pwd.local_ufrag = ufrag;
        self.ufrag_pwd.local_pwd = pwd;
        self.ufrag_pwd.remote_ufrag = String::new();
        self.ufrag_pwd.remote_pwd = String::new();

        self.candidate_pairs = vec![];
        self.delete_all_candidates(keep_local_candidates);

        Ok(())
    }

    /// Returns every pair formed so far, in the order they were formed.
    pub fn get_candidate_pairs(&self) -> &[CandidatePair] {
        &self.candidate_pairs
    }

    /// Returns the pair of `local` and `remote`, if both candidates are known.
    pub fn find_pair(
        &self,
        local: &dyn Candidate,
        remote: &dyn Candidate,
    ) -> Option<&CandidatePair> {
        self.candidate_pairs
            .iter()
            .find(|p| p.local.equal(local) && p.remote.equal(remote))
    }

    /// Returns the pair with the highest priority. The earliest formed pair
    /// wins among pairs of equal priority.
    pub fn get_best_candidate_pair(&self) -> Option<&CandidatePair> {
        let mut best: Option<&CandidatePair> = None;

        for p in &self.candidate_pairs {
            if let Some(b) = &mut best {
                if b.priority() < p.priority() {
                    *b = p;
                }
            } else {
                best = Some(p);
            }
        }

        best
    }

    /// Sends a STUN Binding Indication over `pair` using this agent's
    /// credentials. Failures are logged and otherwise ignored.
    ///
    /// Nothing is sent until the remote credentials are known, since the peer
    /// could not authenticate the indication.
    pub fn keepalive_candidate(&self, pair: &CandidatePair) {
        let ufrag_pwd = &self.ufrag_pwd;
        if ufrag_pwd.remote_ufrag.is_empty() || ufrag_pwd.remote_pwd.is_empty() {
            log::debug!(
                "[{}]: skipping keepalive on {}, remote credentials not set",
                self.get_name(),
                pair
            );
            return;
        }

        log::trace!("[{}]: keepalive on {}", self.get_name(), pair);
        send_keepalive(
            pair,
            &ufrag_pwd.local_ufrag,
            &ufrag_pwd.remote_ufrag,
            &ufrag_pwd.remote_pwd,
        );
    }

    pub(crate) fn add_pair(&mut self, local_index: usize, remote_index: usize) {
        let p = CandidatePair::new(
            Arc::clone(&self.local_candidates[local_index]),
            Arc::clone(&self.remote_candidates[remote_index]),
            self.is_controlling,
        );
        self.candidate_pairs.push(p);
    }

    /// Remove all candidates.
    /// This is used for restarts, failures and on close.
    pub(crate) fn delete_all_candidates(&mut self, keep_local_candidates: bool) {
        if !keep_local_candidates {
            self.local_candidates.clear();
        }
        self.remote_candidates.clear();
    }

    pub(crate) fn get_name(&self) -> &str {
        if self.is_controlling {
            "controlling"
        } else {
            "controlled"
        }
    }
}
