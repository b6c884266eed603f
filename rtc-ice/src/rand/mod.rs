//! Random identifiers and credentials handed out by the agent and the
//! candidate constructors.

use shared::util::generate_crypto_random_string;

#[cfg(test)]
mod rand_test;

/// ALPHA characters, used for the generated ufrag and pwd.
const ALPHA: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";
/// `ice-char = ALPHA / DIGIT / "+" / "/"` (RFC 8839 section 5.1).
const ICE_CHARS: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789/+";

pub(crate) const CANDIDATE_ID_PREFIX: &str = "candidate:";
pub(crate) const CANDIDATE_ID_FOUNDATION_LEN: usize = 32;

/// 16 ALPHA characters carry about 91 bits, well above the 24 required.
pub(crate) const GENERATED_UFRAG_LEN: usize = 16;
/// 32 ALPHA characters carry about 182 bits, well above the 128 required.
pub(crate) const GENERATED_PWD_LEN: usize = 32;

/// Returns an id for a candidate built without one, of the form
/// `candidate:` followed by 32 ice-chars.
pub fn generate_cand_id() -> String {
    CANDIDATE_ID_PREFIX.to_owned()
        + &generate_crypto_random_string(CANDIDATE_ID_FOUNDATION_LEN, ICE_CHARS)
}

/// Returns the local pwd used when an agent is created or restarted without
/// one. Remote agents key MESSAGE-INTEGRITY on keepalives they send us with it.
pub fn generate_pwd() -> String {
    generate_crypto_random_string(GENERATED_PWD_LEN, ALPHA)
}

/// Returns the local ufrag used when an agent is created or restarted without
/// one. It is the second half of the USERNAME on our keepalives.
pub fn generate_ufrag() -> String {
    generate_crypto_random_string(GENERATED_UFRAG_LEN, ALPHA)
}
