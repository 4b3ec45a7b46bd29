//! Line-delimited transport for the MCP server.
//!
//! MCP's stdio transport frames each JSON-RPC message as one UTF-8 line:
//! requests arrive on stdin, responses leave on stdout, and stderr is free for
//! logging. The transport is generic over the byte streams so the server can
//! be driven from in-memory pipes in tests.

use std::io;

use serde::Serialize;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};

/// The transport used in production.
pub type StdioTransport = Transport<BufReader<tokio::io::Stdin>, tokio::io::Stdout>;

/// One line received from the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line {
    /// A UTF-8 line with the terminator stripped.
    Text(String),
    /// A line that was not valid UTF-8. The stream stays usable.
    InvalidUtf8,
}

/// Reads messages from `R` and writes messages to `W`, one per line.
pub struct Transport<R, W> {
    reader: R,
    writer: W,
}

impl StdioTransport {
    /// Creates a transport over the process's stdin and stdout.
    #[must_use]
    pub fn stdio() -> Self {
        Self::new(BufReader::new(tokio::io::stdin()), tokio::io::stdout())
    }
}

impl<R, W> Transport<R, W>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    /// Creates a transport over arbitrary streams.
    pub const fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Reads the next message line.
    ///
    /// Returns `None` once the host closes its end. Bytes that are not UTF-8
    /// yield [`Line::InvalidUtf8`] rather than an error.
    ///
    /// # Errors
    ///
    /// Returns an error if reading fails.
    pub async fn read_line(&mut self) -> io::Result<Option<Line>> {
        let mut buf = Vec::new();
        if self.reader.read_until(b'\n', &mut buf).await? == 0 {
            return Ok(None);
        }

        while matches!(buf.last(), Some(b'\n' | b'\r')) {
            buf.pop();
        }
        Ok(Some(String::from_utf8(buf).map_or(Line::InvalidUtf8, Line::Text)))
    }

    /// Serialises `message` and writes it as a single line.
    ///
    /// # Errors
    ///
    /// Returns an error if serialisation or writing fails.
    pub async fn write_message<T: Serialize + Sync>(&mut self, message: &T) -> io::Result<()> {
        let json = serde_json::to_string(message)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;

        // serde_json escapes newlines inside strings, so compact output is one line
        debug_assert!(!json.contains('\n'));

        self.writer.write_all(json.as_bytes()).await?;
        self.writer.write_all(b"\n").await?;
        self.writer.flush().await
    }
}
