pub mod benchmark;
pub mod compress;
pub mod decompress;
