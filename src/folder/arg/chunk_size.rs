use clap::{builder::RangedU64ValueParser, Parser};

use crate::folder::handlers::DEFAULT_CHUNK_SIZE;

/// The chunk size flag parser.
#[derive(Debug, Parser)]
pub struct ChunkSizeFlag {
    /// Maximum number of messages deleted per request
    ///
    /// Gmail rejects requests targeting too many messages at once, so
    /// deletion is split into chunks of at most this size.
    #[arg(long = "chunk-size", value_name = "N", default_value_t = DEFAULT_CHUNK_SIZE)]
    #[arg(value_parser = RangedU64ValueParser::<usize>::new().range(1..))]
    pub size: usize,
}
