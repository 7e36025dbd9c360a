pub mod confirm;
pub mod dry_run;
