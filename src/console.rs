// src/console.rs

//! Operator-facing console I/O: the completion line and the "press Enter"
//! pause. Generic over tokio's async I/O traits so tests can drive them with
//! in-memory buffers.

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

use crate::errors::Result;

/// Write `message` followed by a newline and flush.
pub async fn announce_finished<W>(out: &mut W, message: &str) -> Result<()>
where
    W: AsyncWrite + Unpin,
{
    out.write_all(message.as_bytes()).await?;
    out.write_all(b"\n").await?;
    out.flush().await?;
    Ok(())
}

/// Consume exactly one line from `input` and discard it.
///
/// EOF counts as the line. Returns the number of bytes discarded, newline
/// included. Bytes that are not valid UTF-8 are discarded too.
pub async fn wait_for_enter<R>(input: &mut R) -> Result<usize>
where
    R: AsyncBufRead + Unpin,
{
    let mut discarded = Vec::new();
    let n = input.read_until(b'\n', &mut discarded).await?;
    Ok(n)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn message_is_written_as_one_line() {
        let mut out = Vec::new();
        announce_finished(&mut out, "done").await.unwrap();
        assert_eq!(out, b"done\n");
    }

    #[tokio::test]
    async fn only_the_first_line_is_consumed() {
        let mut input: &[u8] = b"yes\nleftover\n";
        let n = wait_for_enter(&mut input).await.unwrap();
        assert_eq!(n, 4);
        assert_eq!(input, b"leftover\n");
    }

    #[tokio::test]
    async fn eof_counts_as_enter() {
        let mut input: &[u8] = b"";
        assert_eq!(wait_for_enter(&mut input).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn non_utf8_input_is_accepted() {
        let mut input: &[u8] = &[0xff, 0xfe, b'\n'];
        assert_eq!(wait_for_enter(&mut input).await.unwrap(), 3);
    }
}
