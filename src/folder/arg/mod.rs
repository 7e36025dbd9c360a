pub mod chunk_size;
pub mod name;
