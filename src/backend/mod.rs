//! Backend module.
//!
//! This module exposes the backend trait, which describes every
//! mail transport operation the folder workflows rely on, and its
//! IMAP implementation.

pub mod imap;

use std::result;

use thiserror::Error;

use crate::folder::Folders;

pub use self::imap::ImapBackend;

#[derive(Error, Debug)]
pub enum Error {
    #[error("cannot create tls connector")]
    CreateTlsConnectorError(#[source] native_tls::Error),
    #[error("cannot connect to imap server {1}:{2}")]
    ConnectImapServerError(#[source] ::imap::Error, String, u16),
    #[error("cannot authenticate {1}: credentials rejected by the imap server")]
    AuthenticationError(#[source] ::imap::Error, String),
    #[error("cannot list folders")]
    ListFoldersError(#[source] ::imap::Error),
    #[error("cannot select folder {1}")]
    SelectFolderError(#[source] ::imap::Error, String),
    #[error("cannot search messages")]
    SearchMsgsError(#[source] ::imap::Error),
    #[error("cannot fetch messages {1}")]
    FetchMsgsError(#[source] ::imap::Error, String),
    #[error("cannot set label {1} on messages {2}")]
    SetLabelError(#[source] ::imap::Error, String, String),
    #[error("cannot flag messages {1} as deleted")]
    DeleteMsgsError(#[source] ::imap::Error, String),
    #[error("cannot expunge folder")]
    ExpungeError(#[source] ::imap::Error),
    #[error("cannot close folder")]
    CloseFolderError(#[source] ::imap::Error),
    #[error("cannot delete folder {1}")]
    DeleteFolderError(#[source] ::imap::Error, String),
    #[error("cannot logout from imap server")]
    LogoutError(#[source] ::imap::Error),
}

pub type Result<T> = result::Result<T, Error>;

/// Operations of an authenticated mail session.
///
/// Message ids are only meaningful relative to the last
/// [`Backend::select_folder`] call.
pub trait Backend {
    fn list_folders(&mut self) -> Result<Folders>;
    fn select_folder(&mut self, folder: &str) -> Result<()>;
    /// Returns the ids of all messages of the selected folder, in
    /// ascending order.
    fn search_all(&mut self) -> Result<Vec<u32>>;
    /// Returns the raw content of the given messages, paired with
    /// their id.
    fn fetch_raw(&mut self, ids: &[u32]) -> Result<Vec<(u32, Vec<u8>)>>;
    /// Replaces the Gmail labels of the given messages with the given
    /// one.
    fn set_label(&mut self, ids: &[u32], label: &str) -> Result<()>;
    fn delete_messages(&mut self, ids: &[u32]) -> Result<()>;
    fn expunge(&mut self) -> Result<()>;
    fn close_folder(&mut self) -> Result<()>;
    fn delete_folder(&mut self, folder: &str) -> Result<()>;
    fn logout(&mut self) -> Result<()>;
}

/// Builds an IMAP sequence set out of the given ids.
///
/// Consecutive ids are collapsed into ranges, so `[1, 2, 3, 7, 9,
/// 10]` becomes `1:3,7,9:10`. Ids are expected to be sorted.
pub fn to_sequence_set(ids: &[u32]) -> String {
    let mut ranges: Vec<(u32, u32)> = Vec::new();

    for &id in ids {
        match ranges.last_mut() {
            Some((_, end)) if end.checked_add(1) == Some(id) => *end = id,
            _ => ranges.push((id, id)),
        }
    }

    ranges
        .into_iter()
        .map(|(start, end)| {
            if start == end {
                start.to_string()
            } else {
                format!("{start}:{end}")
            }
        })
        .collect::<Vec<_>>()
        .join(",")
}
