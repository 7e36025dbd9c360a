//! IMAP backend module.
//!
//! This module contains the definition of the IMAP backend, bound to
//! the Gmail IMAP endpoint.

use ::imap::types::NameAttribute;
use log::{debug, info, log_enabled, trace, Level};
use native_tls::{TlsConnector, TlsStream};
use std::net::TcpStream;

use crate::{
    account::AccountConfig,
    backend::{to_sequence_set, Backend, Error, Result},
    folder::{Folder, Folders},
};

pub const IMAP_HOST: &str = "imap.gmail.com";
pub const IMAP_PORT: u16 = 993;

/// Builds the `STORE` query replacing the Gmail labels of messages.
fn set_labels_query(label: &str) -> String {
    format!("X-GM-LABELS ({label})")
}

type ImapSess = ::imap::Session<TlsStream<TcpStream>>;

pub struct ImapBackend {
    sess: ImapSess,
}

impl ImapBackend {
    /// Opens an authenticated TLS session for the given account.
    pub fn connect(account: &AccountConfig) -> Result<Self> {
        debug!("create TLS connector");
        let tls = TlsConnector::builder()
            .build()
            .map_err(Error::CreateTlsConnectorError)?;

        info!("connecting to {IMAP_HOST}:{IMAP_PORT}…");
        let client = ::imap::connect((IMAP_HOST, IMAP_PORT), IMAP_HOST, &tls)
            .map_err(|err| Error::ConnectImapServerError(err, IMAP_HOST.into(), IMAP_PORT))?;

        debug!("login: {}", account.username);
        let mut sess = client
            .login(&account.username, &account.password)
            .map_err(|(err, _client)| Error::AuthenticationError(err, account.username.clone()))?;
        sess.debug = log_enabled!(Level::Trace);
        info!("connected as {}", account.username);

        Ok(Self { sess })
    }
}

impl Backend for ImapBackend {
    fn list_folders(&mut self) -> Result<Folders> {
        let names = self
            .sess
            .list(Some(""), Some("*"))
            .map_err(Error::ListFoldersError)?;

        let folders: Folders = names
            .iter()
            .map(|name| Folder {
                name: name.name().into(),
                delim: name.delimiter().unwrap_or_default().into(),
                selectable: !name
                    .attributes()
                    .iter()
                    .any(|attr| matches!(attr, NameAttribute::NoSelect)),
                has_children: name.attributes().iter().any(|attr| {
                    matches!(attr, NameAttribute::Custom(custom) if custom.eq_ignore_ascii_case("\\HasChildren"))
                }),
            })
            .collect();

        trace!("imap folders: {:?}", folders);
        Ok(folders)
    }

    fn select_folder(&mut self, folder: &str) -> Result<()> {
        let mailbox = self
            .sess
            .select(folder)
            .map_err(|err| Error::SelectFolderError(err, folder.to_owned()))?;
        debug!("select folder {folder:?} response: {mailbox:?}");
        Ok(())
    }

    fn search_all(&mut self) -> Result<Vec<u32>> {
        let mut uids: Vec<u32> = self
            .sess
            .uid_search("ALL")
            .map_err(Error::SearchMsgsError)?
            .into_iter()
            .collect();
        uids.sort_unstable();
        debug!("found {} messages", uids.len());
        trace!("uids: {:?}", uids);
        Ok(uids)
    }

    fn fetch_raw(&mut self, ids: &[u32]) -> Result<Vec<(u32, Vec<u8>)>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let set = to_sequence_set(ids);
        let fetches = self
            .sess
            .uid_fetch(&set, "(UID BODY.PEEK[])")
            .map_err(|err| Error::FetchMsgsError(err, set.clone()))?;

        Ok(fetches
            .iter()
            .map(|fetch| {
                let uid = fetch.uid.unwrap_or(fetch.message);
                (uid, fetch.body().unwrap_or_default().to_vec())
            })
            .collect())
    }

    fn set_label(&mut self, ids: &[u32], label: &str) -> Result<()> {
        let set = to_sequence_set(ids);
        let resp = self
            .sess
            .uid_store(&set, set_labels_query(label))
            .map_err(|err| Error::SetLabelError(err, label.to_owned(), set.clone()))?;
        debug!("set label response: {} fetch(es)", resp.len());
        Ok(())
    }

    fn delete_messages(&mut self, ids: &[u32]) -> Result<()> {
        let set = to_sequence_set(ids);
        let resp = self
            .sess
            .uid_store(&set, "+FLAGS.SILENT (\\Deleted)")
            .map_err(|err| Error::DeleteMsgsError(err, set.clone()))?;
        debug!("delete messages response: {} fetch(es)", resp.len());
        Ok(())
    }

    fn expunge(&mut self) -> Result<()> {
        self.sess.expunge().map_err(Error::ExpungeError)?;
        Ok(())
    }

    fn close_folder(&mut self) -> Result<()> {
        self.sess.close().map_err(Error::CloseFolderError)
    }

    fn delete_folder(&mut self, folder: &str) -> Result<()> {
        self.sess
            .delete(folder)
            .map_err(|err| Error::DeleteFolderError(err, folder.to_owned()))
    }

    fn logout(&mut self) -> Result<()> {
        debug!("logout from imap server");
        self.sess.logout().map_err(Error::LogoutError)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_labels_query_replaces_labels() {
        assert_eq!(set_labels_query("\\Trash"), "X-GM-LABELS (\\Trash)");
        assert!(!set_labels_query("\\Trash").starts_with('+'));
    }
}
