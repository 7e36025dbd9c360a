//! Email module.
//!
//! This module gathers helpers acting on message ids of the selected
//! folder: preview sampling, chunking and subject rendering.

use anyhow::{Context, Result};
use log::{debug, warn};
use mailparse::MailHeaderMap;
use serde::Serialize;
use std::collections::BTreeSet;

use crate::{
    backend::Backend,
    printer::{Print, Printer, WriteColor},
};

/// Number of messages previewed from each end of a folder.
pub const PREVIEW_EDGE_SIZE: usize = 128;

/// Picks the messages to preview: the first and the last
/// [`PREVIEW_EDGE_SIZE`] ids, without duplicates.
pub fn preview_ids(ids: &[u32]) -> Vec<u32> {
    let head = ids.iter().take(PREVIEW_EDGE_SIZE);
    let tail = ids.iter().skip(ids.len().saturating_sub(PREVIEW_EDGE_SIZE));
    head.chain(tail)
        .copied()
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Splits ids into consecutive chunks of at most `size` ids.
///
/// # Panics
///
/// Panics if `size` is 0.
pub fn chunk_ids(ids: &[u32], size: usize) -> impl Iterator<Item = &[u32]> {
    ids.chunks(size)
}

/// Extracts the decoded subject of a raw message.
///
/// Returns `None` when headers cannot be parsed or when the message
/// has no subject.
pub fn parse_subject(raw: &[u8]) -> Option<String> {
    match mailparse::parse_headers(raw) {
        Ok((headers, _)) => headers.get_first_value("Subject"),
        Err(err) => {
            warn!("cannot parse message headers, skipping subject: {err}");
            None
        }
    }
}

/// Represents the subject line of a previewed message.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct Subject {
    pub id: u32,
    pub subject: String,
}

impl Print for Subject {
    fn print(&self, writer: &mut dyn WriteColor) -> Result<()> {
        writeln!(writer, "{}", self.subject).context("cannot write subject to writer")?;
        Ok(writer.reset()?)
    }
}

/// Fetches the given messages and prints their subject.
pub fn preview<B: Backend + ?Sized, P: Printer>(
    backend: &mut B,
    printer: &mut P,
    ids: &[u32],
) -> Result<()> {
    debug!("previewing {} message(s)", ids.len());

    let messages = backend
        .fetch_raw(ids)
        .context("cannot fetch messages to preview")?;

    for (id, raw) in messages {
        let subject = parse_subject(&raw).unwrap_or_default();
        printer.print(Subject { id, subject })?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preview_small_folder_takes_everything() {
        let ids: Vec<u32> = (1..=200).collect();
        assert_eq!(preview_ids(&ids), ids);

        assert!(preview_ids(&[]).is_empty());
        assert_eq!(preview_ids(&[42]), vec![42]);
    }

    #[test]
    fn preview_large_folder_takes_both_edges() {
        let ids: Vec<u32> = (1..=1000).collect();
        let preview = preview_ids(&ids);

        assert_eq!(preview.len(), 2 * PREVIEW_EDGE_SIZE);
        assert_eq!(&preview[..128], &ids[..128]);
        assert_eq!(&preview[128..], &ids[872..]);
    }

    #[test]
    fn preview_size_is_bounded() {
        for n in [0u32, 1, 127, 128, 129, 255, 256, 257, 300, 5000] {
            let ids: Vec<u32> = (1..=n).collect();
            assert_eq!(preview_ids(&ids).len(), (n as usize).min(256), "n = {n}");
        }
    }

    #[test]
    fn chunks_preserve_order_and_size() {
        for (n, size) in [(0u32, 3usize), (1, 1), (10, 3), (3000, 1000), (1025, 1024)] {
            let ids: Vec<u32> = (1..=n).collect();
            let chunks: Vec<&[u32]> = chunk_ids(&ids, size).collect();

            assert_eq!(chunks.len(), (n as usize).div_ceil(size), "n = {n}");
            assert!(chunks.iter().all(|chunk| chunk.len() <= size));
            assert_eq!(chunks.concat(), ids);
        }
    }

    #[test]
    fn subject_is_decoded() {
        let raw = b"From: alice@localhost\r\nSubject: =?UTF-8?B?Q2VjaSBlc3QgdW4gbWVzc2FnZQ==?=\r\n\r\nHello";
        assert_eq!(parse_subject(raw).as_deref(), Some("Ceci est un message"));
    }

    #[test]
    fn missing_subject() {
        let raw = b"From: alice@localhost\r\n\r\nHello";
        assert_eq!(parse_subject(raw), None);
    }

    #[test]
    fn garbage_does_not_panic() {
        let _ = parse_subject(b"\xff\xfe\x00not: a\r\n valid\r\nmessage");
        let _ = parse_subject(b"");
    }
}
