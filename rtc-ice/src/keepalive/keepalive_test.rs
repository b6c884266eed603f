use super::*;
use crate::candidate::Candidate;
use crate::candidate::candidate_pair_test::{RecordingConn, udp_host};

use std::net::{SocketAddr, UdpSocket};
use std::sync::Arc;
use std::time::Duration;

const LOCAL_UFRAG: &str = "ufragA";
const REMOTE_UFRAG: &str = "ufragB";
const REMOTE_PWD: &str = "remotePasswordremotePassword";

fn init_log() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn decode(raw: &[u8]) -> Message {
    let mut m = Message::new();
    m.raw = raw.to_vec();
    m.decode().expect("keepalive must decode as STUN");
    m
}

fn username_of(m: &Message) -> String {
    let mut username = Username::new(ATTR_USERNAME, String::new());
    username.get_from(m).expect("keepalive must carry USERNAME");
    username.to_string()
}

fn recording_pair(conn: &Arc<RecordingConn>) -> Result<CandidatePair> {
    let local = udp_host("10.0.0.1", 5000, 0, Some(conn.clone()))?;
    let remote = udp_host("10.0.0.2", 6000, 0, None)?;
    Ok(CandidatePair::new(local, remote, true))
}

#[test]
fn test_keepalive_username_order() -> Result<()> {
    let msg = build_keepalive(LOCAL_UFRAG, REMOTE_UFRAG, REMOTE_PWD)?;
    let m = decode(&msg.raw);

    assert_eq!(username_of(&m), "ufragB:ufragA");

    Ok(())
}

#[test]
fn test_keepalive_is_authenticated_binding_indication() -> Result<()> {
    let msg = build_keepalive(LOCAL_UFRAG, REMOTE_UFRAG, REMOTE_PWD)?;
    let mut m = decode(&msg.raw);

    assert_eq!(m.typ, MessageType::new(METHOD_BINDING, CLASS_INDICATION));

    let order: Vec<AttrType> = m.attributes.0.iter().map(|a| a.typ).collect();
    assert_eq!(
        order,
        vec![ATTR_USERNAME, ATTR_MESSAGE_INTEGRITY, ATTR_FINGERPRINT]
    );

    assert!(FINGERPRINT.check(&m).is_ok(), "fingerprint mismatch");
    assert!(
        MessageIntegrity::new_short_term_integrity(REMOTE_PWD.to_owned())
            .check(&mut m)
            .is_ok(),
        "integrity must verify with the remote password"
    );
    assert!(
        MessageIntegrity::new_short_term_integrity("someOtherPassword".to_owned())
            .check(&mut m)
            .is_err(),
        "integrity must not verify with another password"
    );

    Ok(())
}

#[test]
fn test_keepalive_fresh_transaction_id() -> Result<()> {
    let a = build_keepalive(LOCAL_UFRAG, REMOTE_UFRAG, REMOTE_PWD)?;
    let b = build_keepalive(LOCAL_UFRAG, REMOTE_UFRAG, REMOTE_PWD)?;

    assert_ne!(a.transaction_id, b.transaction_id);

    Ok(())
}

#[test]
fn test_keepalive_build_failure() {
    // USERNAME is capped at 513 bytes.
    let oversized = "u".repeat(600);
    let result = build_keepalive(LOCAL_UFRAG, &oversized, REMOTE_PWD);

    assert!(
        matches!(result, Err(Error::OtherStunErr(_))),
        "expected a STUN build error, got {:?}",
        result.map(|m| m.raw.len())
    );
}

#[test]
fn test_send_keepalive() -> Result<()> {
    init_log();

    let conn = Arc::new(RecordingConn::default());
    let pair = recording_pair(&conn)?;
    let last_sent = pair.local.last_sent();

    std::thread::sleep(Duration::from_millis(2));
    send_keepalive(&pair, LOCAL_UFRAG, REMOTE_UFRAG, REMOTE_PWD);

    let sent = conn.sent();
    assert_eq!(sent.len(), 1);
    assert!(pair.local.last_sent() > last_sent);
    let (raw, dst) = &sent[0];
    assert_eq!(*dst, SocketAddr::from(([10, 0, 0, 2], 6000)));
    assert_eq!(username_of(&decode(raw)), "ufragB:ufragA");

    Ok(())
}

#[test]
fn test_send_keepalive_build_failure_sends_nothing() -> Result<()> {
    init_log();

    let conn = Arc::new(RecordingConn::default());
    let pair = recording_pair(&conn)?;

    send_keepalive(&pair, LOCAL_UFRAG, &"u".repeat(600), REMOTE_PWD);

    assert!(conn.sent().is_empty());

    Ok(())
}

#[test]
fn test_send_keepalive_swallows_send_errors() -> Result<()> {
    init_log();

    let conn = Arc::new(RecordingConn::default());
    let pair = recording_pair(&conn)?;

    let last_sent = pair.local.last_sent();
    conn.set_fail(true);
    send_keepalive(&pair, LOCAL_UFRAG, REMOTE_UFRAG, REMOTE_PWD);
    assert!(conn.sent().is_empty());
    assert_eq!(pair.local.last_sent(), last_sent);

    // The pair stays usable and the next keepalive is a fresh attempt.
    conn.set_fail(false);
    send_keepalive(&pair, LOCAL_UFRAG, REMOTE_UFRAG, REMOTE_PWD);
    send_keepalive(&pair, LOCAL_UFRAG, REMOTE_UFRAG, REMOTE_PWD);

    let sent = conn.sent();
    assert_eq!(sent.len(), 2);
    assert_ne!(
        decode(&sent[0].0).transaction_id,
        decode(&sent[1].0).transaction_id
    );

    Ok(())
}

#[test]
fn test_send_keepalive_without_conn() -> Result<()> {
    init_log();

    let local = udp_host("10.0.0.1", 5000, 0, None)?;
    let remote = udp_host("10.0.0.2", 6000, 0, None)?;
    let pair = CandidatePair::new(local, remote, false);
    let last_sent = pair.local.last_sent();

    let msg = build_keepalive(LOCAL_UFRAG, REMOTE_UFRAG, REMOTE_PWD)?;
    assert_eq!(send_stun(&msg, &pair), Err(Error::ErrCandidateNoConn));

    // The same failure inside send_keepalive is logged and dropped.
    send_keepalive(&pair, LOCAL_UFRAG, REMOTE_UFRAG, REMOTE_PWD);
    assert_eq!(pair.local.last_sent(), last_sent);

    Ok(())
}

#[test]
fn test_send_keepalive_over_udp() -> Result<()> {
    init_log();

    let local_sock = UdpSocket::bind("127.0.0.1:0")?;
    let remote_sock = UdpSocket::bind("127.0.0.1:0")?;
    remote_sock.set_read_timeout(Some(Duration::from_secs(5)))?;

    let local_addr = local_sock.local_addr()?;
    let remote_addr = remote_sock.local_addr()?;

    let local = udp_host("127.0.0.1", local_addr.port(), 0, Some(Arc::new(local_sock)))?;
    let remote = udp_host("127.0.0.1", remote_addr.port(), 0, None)?;
    let pair = CandidatePair::new(local, remote, true);

    send_keepalive(&pair, LOCAL_UFRAG, REMOTE_UFRAG, REMOTE_PWD);

    let mut buf = vec![0u8; 1500];
    let (n, from) = remote_sock.recv_from(&mut buf)?;
    assert_eq!(from, local_addr);

    let mut m = decode(&buf[..n]);
    assert_eq!(username_of(&m), "ufragB:ufragA");
    assert!(FINGERPRINT.check(&m).is_ok());
    assert!(
        MessageIntegrity::new_short_term_integrity(REMOTE_PWD.to_owned())
            .check(&mut m)
            .is_ok()
    );

    Ok(())
}
