use crate::error::CliError;
use crate::util::output_path;
use argh::FromArgs;
use dxt_codec_api::decode_dds;
use image::ExtendedColorType;
use std::path::{Path, PathBuf};
use tracing::{error, info};

#[derive(FromArgs, Debug)]
/// Decompress DDS textures into PNG images
#[argh(subcommand, name = "decompress")]
pub struct DecompressCmd {
    /// input DDS files
    #[argh(positional)]
    pub inputs: Vec<PathBuf>,

    /// output directory [default: next to each input]
    #[argh(option)]
    pub output: Option<PathBuf>,
}

pub fn handle_decompress_command(cmd: DecompressCmd) -> Result<(), CliError> {
    if let Some(output) = &cmd.output {
        std::fs::create_dir_all(output)?;
    }

    for input in &cmd.inputs {
        let target = output_path(input, cmd.output.as_deref(), ".png");
        match decompress_file(input, &target) {
            Ok(()) => info!(input = %input.display(), output = %target.display(), "decompressed"),
            Err(e) => error!(input = %input.display(), "failed to decompress: {e}"),
        }
    }

    Ok(())
}

/// Decodes a DDS file and saves it as an image; the format follows the output extension.
pub fn decompress_file(input: &Path, output: &Path) -> Result<(), CliError> {
    let data = std::fs::read(input)?;
    let image = decode_dds(&data)?;

    let color = if image.has_alpha() {
        ExtendedColorType::Rgba8
    } else {
        ExtendedColorType::Rgb8
    };
    image::save_buffer(
        output,
        &image.data,
        image.width as u32,
        image.height as u32,
        color,
    )?;
    Ok(())
}
