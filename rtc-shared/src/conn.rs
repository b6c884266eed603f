use crate::error::Result;
use std::net::{SocketAddr, UdpSocket};

/// Conn is the datagram-oriented transport a local candidate sends through.
///
/// Implementations must not block indefinitely: a send either completes,
/// fails, or times out according to how the underlying socket was set up.
pub trait Conn: Send + Sync {
    /// Sends `buf` to `target` and returns the number of bytes written.
    fn send_to(&self, buf: &[u8], target: SocketAddr) -> Result<usize>;
}

impl Conn for UdpSocket {
    fn send_to(&self, buf: &[u8], target: SocketAddr) -> Result<usize> {
        Ok(UdpSocket::send_to(self, buf, target)?)
    }
}
