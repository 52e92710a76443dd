#![cfg(feature = "std")]

use std::time::Duration;

use broadside::{Message, TcpTransport, Transport, MAX_LINE_LEN};
use tokio::io::AsyncWriteExt;
use tokio::net::{TcpListener, TcpStream};

async fn connected() -> anyhow::Result<(TcpStream, TcpStream)> {
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    let (client, accepted) = tokio::join!(TcpStream::connect(addr), listener.accept());
    Ok((client?, accepted?.0))
}

#[tokio::test(flavor = "multi_thread")]
async fn test_lines_round_trip() -> anyhow::Result<()> {
    let (a, b) = connected().await?;
    let mut a = TcpTransport::new(a);
    let mut b = TcpTransport::new(b);

    a.send(&Message::Shoot { row: 4, col: 5 }).await?;
    a.send_line("Ahab").await?;
    assert_eq!(b.recv_line().await?, "SHOOT|4,5");
    assert_eq!(b.recv_line().await?, "Ahab");
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn test_crlf_is_stripped() -> anyhow::Result<()> {
    let (mut raw, b) = connected().await?;
    let mut b = TcpTransport::new(b);

    raw.write_all(b"MISS|0,9\r\nREADY\n").await?;
    assert_eq!(b.recv_line().await?, "MISS|0,9");
    assert_eq!(b.recv_line().await?, "READY");
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn test_overlong_line_is_rejected() -> anyhow::Result<()> {
    let (mut raw, b) = connected().await?;
    let mut b = TcpTransport::new(b);

    let mut line = vec![b'A'; MAX_LINE_LEN * 2];
    line.push(b'\n');
    raw.write_all(&line).await?;

    let err = b.recv_line().await.unwrap_err();
    assert!(err.to_string().contains("Line too long"));
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn test_peer_close_is_reported() -> anyhow::Result<()> {
    let (raw, b) = connected().await?;
    let mut b = TcpTransport::new(b);
    drop(raw);

    let err = b.recv_line().await.unwrap_err();
    assert!(err.to_string().contains("Connection closed by peer"));
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn test_read_deadline_expires() -> anyhow::Result<()> {
    let (_raw, b) = connected().await?;
    let mut b = TcpTransport::with_timeout(b, Duration::from_millis(50));

    let err = b.recv_line().await.unwrap_err();
    assert!(err.to_string().contains("Receive timeout"));
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn test_embedded_newline_is_refused() -> anyhow::Result<()> {
    let (a, _b) = connected().await?;
    let mut a = TcpTransport::new(a);
    assert!(a.send_line("HIT|1,1\nHIT|2,2").await.is_err());
    Ok(())
}
