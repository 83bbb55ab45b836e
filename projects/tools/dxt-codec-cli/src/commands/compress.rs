use crate::error::CliError;
use crate::util::{load_rgba, output_path, parse_endpoint_selection, parse_format, Throughput};
use argh::FromArgs;
use bytesize::ByteSize;
use dxt_codec_api::{Encoder, EncoderBuilder, EndpointSelection, TextureFormat};
#[cfg(feature = "multithreaded")]
use rayon::prelude::*;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;
use tracing::{error, info};

#[derive(FromArgs, Debug)]
/// Compress image files into DDS textures
#[argh(subcommand, name = "compress")]
pub struct CompressCmd {
    /// input image files
    #[argh(positional)]
    pub inputs: Vec<PathBuf>,

    /// output directory [default: next to each input]
    #[argh(option)]
    pub output: Option<PathBuf>,

    /// format: dxt1, dxt1a, dxt5, ycocg, raw [default: dxt5]
    #[argh(option, default = "TextureFormat::Dxt5", from_str_fn(parse_format))]
    pub format: TextureFormat,

    /// endpoint selection: luminance, bbox [default: luminance]
    #[argh(
        option,
        default = "EndpointSelection::Luminance",
        from_str_fn(parse_endpoint_selection)
    )]
    pub endpoints: EndpointSelection,

    /// write the encoded data without a DDS header
    #[argh(switch)]
    pub no_header: bool,
}

pub fn handle_compress_command(cmd: CompressCmd) -> Result<(), CliError> {
    if let Some(output) = &cmd.output {
        std::fs::create_dir_all(output)?;
    }

    let encoder = EncoderBuilder::new()
        .format(cmd.format)
        .endpoint_selection(cmd.endpoints)
        .write_header(!cmd.no_header)
        .build();
    let suffix = if cmd.no_header { ".bin" } else { ".dds" };

    let start = Instant::now();
    let bytes_processed = AtomicU64::new(0);

    #[cfg(feature = "multithreaded")]
    let inputs = cmd.inputs.par_iter();
    #[cfg(not(feature = "multithreaded"))]
    let inputs = cmd.inputs.iter();

    inputs.for_each(|input| {
        let target = output_path(input, cmd.output.as_deref(), suffix);
        match compress_file(&encoder, input, &target) {
            Ok(written) => {
                bytes_processed.fetch_add(written, Ordering::Relaxed);
                info!(input = %input.display(), output = %target.display(), size = %ByteSize(written), "compressed");
            }
            Err(e) => error!(input = %input.display(), "failed to compress: {e}"),
        }
    });

    let elapsed = start.elapsed();
    let total = bytes_processed.load(Ordering::Relaxed);
    info!(
        files = cmd.inputs.len(),
        written = %ByteSize(total),
        elapsed = ?elapsed,
        throughput = %Throughput::new(total, elapsed),
        "compression complete"
    );
    Ok(())
}

/// Compresses one image, returning the number of bytes written.
pub fn compress_file(encoder: &Encoder, input: &Path, output: &Path) -> Result<u64, CliError> {
    let image = load_rgba(input)?;
    let encoded = encoder.encode_to_vec(&image.pixels, image.width, image.height)?;
    std::fs::write(output, &encoded)?;
    Ok(encoded.len() as u64)
}
