pub mod account;
pub mod backend;
pub mod cli;
pub mod config;
pub mod email;
pub mod folder;
pub mod output;
pub mod printer;
pub mod ui;
