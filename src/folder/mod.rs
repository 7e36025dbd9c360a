pub mod arg;
pub mod command;
pub mod handlers;

use anyhow::{Context, Result};
use serde::Serialize;
use std::ops;

use crate::printer::{Print, WriteColor};

/// Name of the inbox, which IMAP servers refuse to delete.
pub const INBOX: &str = "INBOX";

/// Label Gmail uses to move messages to the trash.
pub const TRASH_LABEL: &str = "\\Trash";

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct Folder {
    pub name: String,
    pub delim: String,
    /// Whether the folder can be selected (no `\Noselect` attribute).
    pub selectable: bool,
    pub has_children: bool,
}

impl Folder {
    pub fn new(name: impl ToString) -> Self {
        Self {
            name: name.to_string(),
            delim: "/".into(),
            selectable: true,
            has_children: false,
        }
    }

    /// Whether the folder belongs to the provider and must never be
    /// touched.
    ///
    /// Gmail exposes its system folders under a bracketed namespace,
    /// `[Gmail]` or `[Google Mail]` depending on the account locale.
    pub fn is_reserved(&self) -> bool {
        let root = match self.delim.as_str() {
            "" => self.name.as_str(),
            delim => self.name.split(delim).next().unwrap_or_default(),
        };
        let bracketed = root.len() > 2 && root.starts_with('[') && root.ends_with(']');

        bracketed || self.name.eq_ignore_ascii_case(INBOX)
    }
}

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct Folders(Vec<Folder>);

impl ops::Deref for Folders {
    type Target = Vec<Folder>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromIterator<Folder> for Folders {
    fn from_iter<T: IntoIterator<Item = Folder>>(iter: T) -> Self {
        Folders(iter.into_iter().collect())
    }
}

impl IntoIterator for Folders {
    type Item = Folder;
    type IntoIter = std::vec::IntoIter<Folder>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl Folders {
    /// Whether another folder lives under the given one.
    ///
    /// Servers do not always advertise `\HasChildren`, so the listing
    /// itself is checked as well.
    pub fn has_children(&self, folder: &Folder) -> bool {
        if folder.has_children {
            return true;
        }

        if folder.delim.is_empty() {
            return false;
        }

        let prefix = format!("{}{}", folder.name, folder.delim);
        self.iter().any(|other| other.name.starts_with(&prefix))
    }
}

impl Print for Folders {
    fn print(&self, writer: &mut dyn WriteColor) -> Result<()> {
        for folder in self.iter() {
            writeln!(writer, "{}", folder.name).context("cannot write folder name to writer")?;
        }
        Ok(writer.reset()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reserved_folders() {
        assert!(Folder::new("[Gmail]").is_reserved());
        assert!(Folder::new("[Gmail]/All Mail").is_reserved());
        assert!(Folder::new("[Google Mail]").is_reserved());
        assert!(Folder::new("[Google Mail]/Spam").is_reserved());
        assert!(Folder::new("[Google Mail]/Papierkorb").is_reserved());
        assert!(Folder::new("INBOX").is_reserved());
        assert!(Folder::new("Inbox").is_reserved());
        assert!(!Folder::new("Gmail").is_reserved());
        assert!(!Folder::new("Archives/[Gmail]").is_reserved());
        assert!(!Folder::new("INBOX-old").is_reserved());
        assert!(!Folder::new("[Draft] ideas").is_reserved());
        assert!(!Folder::new("[]").is_reserved());
    }

    #[test]
    fn children_from_listing() {
        let folders = Folders::from_iter([
            Folder::new("Work"),
            Folder::new("Work/2020"),
            Folder::new("Workshop"),
        ]);

        assert!(folders.has_children(&folders[0]));
        assert!(!folders.has_children(&folders[1]));
        assert!(!folders.has_children(&folders[2]));
    }

    #[test]
    fn children_from_attribute() {
        let parent = Folder {
            has_children: true,
            ..Folder::new("Work")
        };
        let folders = Folders::from_iter([parent.clone()]);

        assert!(folders.has_children(&parent));
    }
}
