mod delete;
mod delete_empty;
mod list;

pub use self::{
    delete::FolderDeleteCommand, delete_empty::FolderDeleteEmptyCommand, list::FolderListCommand,
};
