#[cfg(test)]
mod keepalive_test;

use shared::error::*;
use stun::agent::*;
use stun::attributes::*;
use stun::fingerprint::*;
use stun::integrity::*;
use stun::message::*;
use stun::textattrs::*;

use crate::candidate::candidate_pair::CandidatePair;

/// Builds a STUN Binding Indication authenticated with the remote password.
///
/// The USERNAME is `remote_ufrag:local_ufrag`, which is how the remote agent
/// expects to see itself addressed. FINGERPRINT goes last because it covers
/// every byte before it, MESSAGE-INTEGRITY included.
pub fn build_keepalive(
    local_ufrag: &str,
    remote_ufrag: &str,
    remote_pwd: &str,
) -> Result<Message> {
    let username = remote_ufrag.to_owned() + ":" + local_ufrag;
    let mut msg = Message::new();
    msg.build(&[
        Box::new(MessageType::new(METHOD_BINDING, CLASS_INDICATION)),
        Box::new(TransactionId::new()),
        Box::new(Username::new(ATTR_USERNAME, username)),
        Box::new(MessageIntegrity::new_short_term_integrity(remote_pwd.to_owned())),
        Box::new(FINGERPRINT),
    ])
    .map_err(|err| Error::OtherStunErr(err.to_string()))?;

    Ok(msg)
}

/// Sends a STUN Binding Indication to the remote candidate of `pair`.
///
/// Keepalives are best effort: a message that cannot be built is logged as an
/// error, and a failed send is logged at trace level. Neither is reported to
/// the caller, and nothing is retried here.
pub fn send_keepalive(
    pair: &CandidatePair,
    local_ufrag: &str,
    remote_ufrag: &str,
    remote_pwd: &str,
) {
    let msg = match build_keepalive(local_ufrag, remote_ufrag, remote_pwd) {
        Ok(msg) => msg,
        Err(err) => {
            log::error!("{}", err);
            return;
        }
    };

    match send_stun(&msg, pair) {
        Ok(n) => log::trace!("sent keepalive ({} bytes) on {}", n, pair),
        Err(err) => log::trace!("failed to send STUN message: {}", err),
    }
}

pub(crate) fn send_stun(msg: &Message, pair: &CandidatePair) -> Result<usize> {
    pair.write(&msg.raw)
}
