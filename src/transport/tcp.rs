use std::future::Future;

use tokio::io::{AsyncBufReadExt, AsyncReadExt, AsyncWriteExt, BufReader};
use tokio::net::tcp::{OwnedReadHalf, OwnedWriteHalf};
use tokio::net::{TcpStream, ToSocketAddrs};
use tokio::time::{timeout, Duration};

use crate::config::MAX_LINE_LEN;
use crate::transport::Transport;

/// Newline-delimited text over a TCP connection.
///
/// Reads block until a full line arrives unless a deadline is configured
/// with [`TcpTransport::with_timeout`], in which case an expired deadline is
/// reported as a transport error.
pub struct TcpTransport {
    reader: BufReader<OwnedReadHalf>,
    writer: OwnedWriteHalf,
    timeout_duration: Option<Duration>,
    max_line_len: usize,
}

impl TcpTransport {
    pub fn new(stream: TcpStream) -> Self {
        let (read, write) = stream.into_split();
        Self {
            reader: BufReader::new(read),
            writer: write,
            timeout_duration: None,
            max_line_len: MAX_LINE_LEN,
        }
    }

    pub fn with_timeout(stream: TcpStream, timeout_duration: Duration) -> Self {
        Self {
            timeout_duration: Some(timeout_duration),
            ..Self::new(stream)
        }
    }

    pub async fn connect<A: ToSocketAddrs>(addr: A) -> anyhow::Result<Self> {
        let stream = TcpStream::connect(addr).await?;
        Ok(Self::new(stream))
    }

    async fn deadline<F, T>(limit: Option<Duration>, what: &str, op: F) -> anyhow::Result<T>
    where
        F: Future<Output = anyhow::Result<T>>,
    {
        match limit {
            Some(limit) => timeout(limit, op)
                .await
                .map_err(|_| anyhow::anyhow!("{} timeout after {:?}", what, limit))?,
            None => op.await,
        }
    }
}

fn io_error(e: std::io::Error) -> anyhow::Error {
    match e.kind() {
        std::io::ErrorKind::BrokenPipe | std::io::ErrorKind::ConnectionReset => {
            anyhow::anyhow!("Connection reset by peer")
        }
        std::io::ErrorKind::UnexpectedEof => anyhow::anyhow!("Connection closed by peer"),
        std::io::ErrorKind::InvalidData => anyhow::anyhow!("Line is not valid UTF-8"),
        _ => anyhow::anyhow!("I/O error: {}", e),
    }
}

#[async_trait::async_trait]
impl Transport for TcpTransport {
    async fn send_line(&mut self, line: &str) -> anyhow::Result<()> {
        if line.contains('\n') {
            return Err(anyhow::anyhow!("Refusing to send embedded newline"));
        }
        let writer = &mut self.writer;
        let send_op = async move {
            writer.write_all(line.as_bytes()).await.map_err(io_error)?;
            writer.write_all(b"\n").await.map_err(io_error)?;
            writer.flush().await.map_err(io_error)?;
            anyhow::Ok(())
        };
        Self::deadline(self.timeout_duration, "Send", send_op).await
    }

    async fn recv_line(&mut self) -> anyhow::Result<String> {
        let limit = self.max_line_len;
        let reader = &mut self.reader;
        let recv_op = async move {
            let mut buf = String::new();
            let n = reader
                .take(limit as u64)
                .read_line(&mut buf)
                .await
                .map_err(io_error)?;
            if n == 0 {
                return Err(anyhow::anyhow!("Connection closed by peer"));
            }
            if !buf.ends_with('\n') && n >= limit {
                return Err(anyhow::anyhow!("Line too long (max: {} bytes)", limit));
            }
            let trimmed = buf.trim_end_matches(&['\r', '\n'][..]).len();
            buf.truncate(trimmed);
            anyhow::Ok(buf)
        };
        Self::deadline(self.timeout_duration, "Receive", recv_op).await
    }
}
