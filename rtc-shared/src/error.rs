#![allow(dead_code)]

use std::io;
use std::net;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug, PartialEq)]
#[non_exhaustive]
pub enum Error {
    #[error("failed to parse address")]
    ErrAddressParseFailed,

    /// Indicates local username fragment insufficient bits are provided.
    /// Have to be at least 24 bits long.
    #[error("local username fragment is less than 24 bits long")]
    ErrLocalUfragInsufficientBits,
    /// Indicates local passoword insufficient bits are provided.
    /// Have to be at least 128 bits long.
    #[error("local password is less than 128 bits long")]
    ErrLocalPwdInsufficientBits,
    /// Indicates agent was started with an empty remote ufrag.
    #[error("remote ufrag is empty")]
    ErrRemoteUfragEmpty,
    /// Indicates agent was started with an empty remote pwd.
    #[error("remote pwd is empty")]
    ErrRemotePwdEmpty,
    /// Indicates a remote .local candidate arrived while mDNS resolution is unavailable.
    #[error("mDNS is not supported")]
    ErrMulticastDnsNotSupported,
    /// Indicates a candidate component outside the 1..=256 range RFC 8445 allows.
    #[error("candidate component must be between 1 and 256")]
    ErrInvalidComponent,
    #[error("unable to determine networkType")]
    ErrDetermineNetworkType,
    /// Indicates a candidate was asked to send without a connection bound to it.
    #[error("candidate has no connection to write on")]
    ErrCandidateNoConn,

    //Third Party Error
    #[error("parse ip: {0}")]
    ParseIp(#[from] net::AddrParseError),
    #[error("{0}")]
    Io(#[source] IoError),

    //Other Errors
    #[error("Other STUN Err: {0}")]
    OtherStunErr(String),
}

#[derive(Debug, Error)]
#[error("io error: {0}")]
pub struct IoError(#[from] pub io::Error);

// Workaround for wanting PartialEq for io::Error.
impl PartialEq for IoError {
    fn eq(&self, other: &Self) -> bool {
        self.0.kind() == other.0.kind()
    }
}

impl From<io::Error> for Error {
    fn from(e: io::Error) -> Self {
        Error::Io(IoError(e))
    }
}
