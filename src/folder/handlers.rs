//! Folder handling module.
//!
//! This module gathers all folder workflows triggered by the CLI.
//! They only talk to the [`Backend`], [`Printer`] and [`Prompt`]
//! traits, and always log out before returning.

use anyhow::{Context, Result};
use chrono::Local;
use log::{debug, info, warn};

use crate::{
    backend::Backend,
    email::{self, chunk_ids, preview_ids},
    folder::TRASH_LABEL,
    printer::Printer,
    ui::prompt::Prompt,
};

pub const DEFAULT_CHUNK_SIZE: usize = 1024;

/// Options of the delete messages workflow.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct DeleteOpts {
    /// Maximum number of messages per label/delete request.
    pub chunk_size: usize,
    pub confirm: bool,
    pub dry_run: bool,
}

impl Default for DeleteOpts {
    fn default() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
            confirm: true,
            dry_run: false,
        }
    }
}

/// Lists all folders then logs out.
pub fn list<P: Printer, B: Backend + ?Sized>(printer: &mut P, backend: &mut B) -> Result<()> {
    let res = backend
        .list_folders()
        .context("cannot list folders")
        .and_then(|folders| printer.print(folders));
    finish(backend, res, false)
}

/// Deletes all messages of the given folder.
///
/// Messages are moved to the trash then flagged as deleted, chunk by
/// chunk, and the folder is finally expunged. The folder is closed and
/// the session logged out whatever happens.
pub fn delete_messages<P: Printer, B: Backend + ?Sized, Q: Prompt + ?Sized>(
    printer: &mut P,
    backend: &mut B,
    prompt: &mut Q,
    folder: &str,
    opts: DeleteOpts,
) -> Result<()> {
    printer.print_log(format!("Removing messages from folder {folder}"))?;

    if let Err(err) = backend.select_folder(folder) {
        let res = Err(err).with_context(|| format!("cannot select folder {folder}"));
        return finish(backend, res, false);
    }

    let res = delete_selected_messages(printer, backend, prompt, folder, opts);
    finish(backend, res, true)
}

fn delete_selected_messages<P: Printer, B: Backend + ?Sized, Q: Prompt + ?Sized>(
    printer: &mut P,
    backend: &mut B,
    prompt: &mut Q,
    folder: &str,
    opts: DeleteOpts,
) -> Result<()> {
    let ids = backend
        .search_all()
        .with_context(|| format!("cannot search messages of folder {folder}"))?;
    let total = ids.len();

    if opts.confirm
        && prompt.confirm(&format!(
            "Do you want to preview {total} messages from {folder:?}?"
        ))?
    {
        email::preview(backend, printer, &preview_ids(&ids))?;
    }

    if opts.confirm
        && !prompt.confirm(&format!(
            "Do you want to delete {total} messages from {folder:?}?"
        ))?
    {
        return printer.print(format!("No message deleted from folder {folder}"));
    }

    let dry_run = if opts.dry_run { "(dry run) " } else { "" };
    let mut remaining = total;

    for chunk in chunk_ids(&ids, opts.chunk_size) {
        printer.print_log(format!(
            "{dry_run}[{}] Deleting {} of {total} messages, {remaining} to go...",
            Local::now().format("%Y-%m-%d %H:%M:%S%.6f"),
            chunk.len(),
        ))?;
        remaining -= chunk.len();

        if opts.dry_run {
            continue;
        }

        debug!("setting label {TRASH_LABEL}…");
        backend
            .set_label(chunk, TRASH_LABEL)
            .context("cannot move messages to trash")?;

        debug!("deleting messages…");
        backend
            .delete_messages(chunk)
            .context("cannot delete messages")?;
    }

    if opts.dry_run {
        info!("dry run, skipping expunge");
        return printer.print(format!(
            "{total} messages would be deleted from folder {folder}"
        ));
    }

    info!("expunging messages…");
    backend
        .expunge()
        .with_context(|| format!("cannot expunge folder {folder}"))?;

    printer.print(format!("{total} messages deleted from folder {folder}"))
}

/// Deletes every folder that contains no message.
///
/// Reserved folders and folders owning child folders are never
/// selected. A folder that cannot be selected is skipped.
pub fn delete_empty<P: Printer, B: Backend + ?Sized, Q: Prompt + ?Sized>(
    printer: &mut P,
    backend: &mut B,
    prompt: &mut Q,
    confirm: bool,
    dry_run: bool,
) -> Result<()> {
    let res = delete_empty_folders(printer, backend, prompt, confirm, dry_run);
    finish(backend, res, false)
}

fn delete_empty_folders<P: Printer, B: Backend + ?Sized, Q: Prompt + ?Sized>(
    printer: &mut P,
    backend: &mut B,
    prompt: &mut Q,
    confirm: bool,
    dry_run: bool,
) -> Result<()> {
    let folders = backend.list_folders().context("cannot list folders")?;
    let mut deleted = 0;

    for folder in folders.iter() {
        let name = &folder.name;

        if folder.is_reserved() {
            debug!("skipping reserved folder {name:?}");
            continue;
        }

        if !folder.selectable {
            debug!("skipping non-selectable folder {name:?}");
            continue;
        }

        if folders.has_children(folder) {
            info!("skipping folder {name:?}: it contains other folders");
            continue;
        }

        if let Err(err) = backend.select_folder(name) {
            warn!("skipping folder {name:?}: {:#}", anyhow::Error::new(err));
            continue;
        }

        let count = backend
            .search_all()
            .with_context(|| format!("cannot search messages of folder {name}"))?
            .len();
        backend
            .close_folder()
            .with_context(|| format!("cannot close folder {name}"))?;

        if count > 0 {
            debug!("keeping folder {name:?}: {count} message(s)");
            continue;
        }

        if dry_run {
            printer.print_log(format!("(dry run) Empty folder {name} would be deleted"))?;
            continue;
        }

        if confirm && !prompt.confirm(&format!("Do you want to delete empty folder {name:?}?"))? {
            continue;
        }

        backend
            .delete_folder(name)
            .with_context(|| format!("cannot delete folder {name}"))?;
        printer.print_log(format!("Folder {name} deleted"))?;
        deleted += 1;
    }

    printer.print(format!("{deleted} empty folder(s) deleted"))
}

/// Closes the selected folder (if any) and logs out.
///
/// When the workflow already failed, teardown errors are only logged
/// and the workflow error is returned.
fn finish<T, B: Backend + ?Sized>(backend: &mut B, res: Result<T>, close: bool) -> Result<T> {
    let closed = if close {
        backend.close_folder().context("cannot close folder")
    } else {
        Ok(())
    };
    let logged_out = backend.logout().context("cannot logout from imap server");

    match res {
        Ok(val) => closed.and(logged_out).map(|()| val),
        Err(err) => {
            for teardown_err in [closed.err(), logged_out.err()].into_iter().flatten() {
                warn!("{teardown_err:#}");
            }
            Err(err)
        }
    }
}
