use clap::Parser;

/// The folder name flag parser.
#[derive(Debug, Parser)]
pub struct FolderNameFlag {
    /// The name of the folder
    #[arg(long = "folder", short = 'f')]
    #[arg(name = "folder_name", value_name = "FOLDER")]
    pub name: String,
}
