/// Shared constants between modules.
pub mod constants;

/// Determine if a file is a DDS file.
pub mod likely_dds;

/// Build and read the DDS header.
pub mod header;

pub use header::*;
pub use likely_dds::*;
