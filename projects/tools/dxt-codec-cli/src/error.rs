use dxt_codec_api::{CodecError, DdsDecodeError};
use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Image(#[from] image::ImageError),
    #[error(transparent)]
    Codec(#[from] CodecError),
    #[error(transparent)]
    Dds(#[from] DdsDecodeError),
}
