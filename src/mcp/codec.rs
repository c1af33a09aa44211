//! Line codec for the stdio transport.
//!
//! One JSON-RPC message per line, UTF-8, terminated by `\n` (`\r\n` accepted
//! on input).

use serde::Serialize;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncReadExt, AsyncWrite, AsyncWriteExt};

/// Read one line.
///
/// Returns `None` on clean EOF. The trailing line terminator is stripped.
/// Lines whose payload, terminator excluded, is longer than
/// `max_message_bytes` fail with `InvalidData`.
pub async fn read_message<R: AsyncBufRead + Unpin>(
    reader: &mut R,
    max_message_bytes: usize,
) -> std::io::Result<Option<Vec<u8>>> {
    let mut buf = Vec::new();
    // Room for the payload plus `\r\n`.
    let limit = max_message_bytes as u64 + 2;
    let n = (&mut *reader).take(limit).read_until(b'\n', &mut buf).await?;
    if n == 0 {
        return Ok(None);
    }

    if buf.last() == Some(&b'\n') {
        buf.pop();
        if buf.last() == Some(&b'\r') {
            buf.pop();
        }
    }
    if buf.len() > max_message_bytes {
        return Err(std::io::Error::new(
            std::io::ErrorKind::InvalidData,
            format!("Message too large: exceeds {} bytes", max_message_bytes),
        ));
    }

    Ok(Some(buf))
}

/// Write one message as a single line and flush.
pub async fn write_message<W, T>(writer: &mut W, message: &T) -> std::io::Result<()>
where
    W: AsyncWrite + Unpin,
    T: Serialize + ?Sized,
{
    let mut line = serde_json::to_vec(message)?;
    line.push(b'\n');
    writer.write_all(&line).await?;
    writer.flush().await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tokio::io::BufReader;

    #[tokio::test]
    async fn test_reads_lines_until_eof() {
        let input: &[u8] = b"{\"a\":1}\r\n{\"b\":2}\nlast";
        let mut reader = BufReader::new(input);
        assert_eq!(read_message(&mut reader, 64).await.unwrap().unwrap(), b"{\"a\":1}");
        assert_eq!(read_message(&mut reader, 64).await.unwrap().unwrap(), b"{\"b\":2}");
        assert_eq!(read_message(&mut reader, 64).await.unwrap().unwrap(), b"last");
        assert!(read_message(&mut reader, 64).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_rejects_oversized_line() {
        let input = vec![b'x'; 100];
        let mut reader = BufReader::new(input.as_slice());
        let err = read_message(&mut reader, 10).await.unwrap_err();
        assert_eq!(err.kind(), std::io::ErrorKind::InvalidData);
    }

    #[tokio::test]
    async fn test_exact_limit_is_accepted() {
        let input: &[u8] = b"0123456789\n";
        let mut reader = BufReader::new(input);
        assert_eq!(read_message(&mut reader, 10).await.unwrap().unwrap().len(), 10);
    }

    #[tokio::test]
    async fn test_crlf_does_not_count_against_limit() {
        let input: &[u8] = b"0123456789\r\n0123456789\n";
        let mut reader = BufReader::new(input);
        assert_eq!(read_message(&mut reader, 10).await.unwrap().unwrap(), b"0123456789");
        assert_eq!(read_message(&mut reader, 10).await.unwrap().unwrap(), b"0123456789");
        assert!(read_message(&mut reader, 10).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_one_byte_over_is_rejected() {
        for input in [&b"0123456789a\n"[..], &b"0123456789a\r\n"[..]] {
            let mut reader = BufReader::new(input);
            let err = read_message(&mut reader, 10).await.unwrap_err();
            assert_eq!(err.kind(), std::io::ErrorKind::InvalidData);
        }
    }

    #[tokio::test]
    async fn test_write_appends_newline() {
        let mut out = Vec::new();
        write_message(&mut out, &json!({"ok": true})).await.unwrap();
        assert_eq!(out, b"{\"ok\":true}\n");
    }
}
