use crate::error::CliError;
use bytesize::ByteSize;
use dxt_codec_api::{EndpointSelection, TextureFormat};
use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// An image loaded into memory as tightly packed RGBA pixels.
pub struct RgbaImage {
    pub width: usize,
    pub height: usize,
    pub pixels: Vec<u8>,
}

/// Loads any image format supported by the `image` crate and converts it to RGBA.
pub fn load_rgba(path: &Path) -> Result<RgbaImage, CliError> {
    let image = image::open(path)?.to_rgba8();
    Ok(RgbaImage {
        width: image.width() as usize,
        height: image.height() as usize,
        pixels: image.into_raw(),
    })
}

/// Parses a `--format` argument.
pub fn parse_format(value: &str) -> Result<TextureFormat, String> {
    match value.to_lowercase().as_str() {
        "dxt1" | "bc1" => Ok(TextureFormat::Dxt1),
        "dxt1a" | "dxt1-alpha" => Ok(TextureFormat::Dxt1Alpha),
        "dxt5" | "bc3" => Ok(TextureFormat::Dxt5),
        "ycocg" | "ycocg-dxt5" => Ok(TextureFormat::YCoCgDxt5),
        "raw" | "uncompressed" => Ok(TextureFormat::Uncompressed),
        _ => Err(format!(
            "Unknown format: {value}. Valid options: dxt1, dxt1a, dxt5, ycocg, raw"
        )),
    }
}

/// Parses an `--endpoints` argument.
pub fn parse_endpoint_selection(value: &str) -> Result<EndpointSelection, String> {
    match value.to_lowercase().as_str() {
        "luminance" => Ok(EndpointSelection::Luminance),
        "bbox" | "bounding-box" => Ok(EndpointSelection::BoundingBox),
        _ => Err(format!(
            "Unknown endpoint selection: {value}. Valid options: luminance, bbox"
        )),
    }
}

/// Short lowercase name of a format, used in file names and logs.
pub fn format_name(format: TextureFormat) -> &'static str {
    match format {
        TextureFormat::Dxt1 => "dxt1",
        TextureFormat::Dxt1Alpha => "dxt1a",
        TextureFormat::Dxt5 => "dxt5",
        TextureFormat::YCoCgDxt5 => "ycocg",
        TextureFormat::Uncompressed => "raw",
    }
}

/// `dir/<stem><suffix>`, or next to `input` when no directory is given.
pub fn output_path(input: &Path, dir: Option<&Path>, suffix: &str) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| "output".to_owned());
    let dir = dir
        .map(Path::to_path_buf)
        .or_else(|| input.parent().map(Path::to_path_buf))
        .unwrap_or_default();
    dir.join(format!("{stem}{suffix}"))
}

/// Bytes per second, printed in human readable units.
pub struct Throughput(ByteSize);

impl Throughput {
    pub fn new(bytes: u64, elapsed: Duration) -> Self {
        let seconds = elapsed.as_secs_f64();
        if seconds > 0.0 {
            Self(ByteSize((bytes as f64 / seconds) as u64))
        } else {
            Self(ByteSize(0))
        }
    }
}

impl fmt::Display for Throughput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/s", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("dxt1", TextureFormat::Dxt1)]
    #[case("DXT1A", TextureFormat::Dxt1Alpha)]
    #[case("bc3", TextureFormat::Dxt5)]
    #[case("ycocg", TextureFormat::YCoCgDxt5)]
    #[case("raw", TextureFormat::Uncompressed)]
    fn parses_formats(#[case] value: &str, #[case] expected: TextureFormat) {
        assert_eq!(parse_format(value), Ok(expected));
    }

    #[test]
    fn rejects_unknown_format() {
        assert!(parse_format("bc7").is_err());
        assert!(parse_endpoint_selection("median").is_err());
    }

    #[test]
    fn output_path_uses_stem() {
        assert_eq!(
            output_path(Path::new("in/a.png"), None, ".dds"),
            PathBuf::from("in/a.dds")
        );
        assert_eq!(
            output_path(Path::new("in/a.png"), Some(Path::new("out")), ".dxt5.dds"),
            PathBuf::from("out/a.dxt5.dds")
        );
    }

    #[test]
    fn throughput_of_zero_duration_is_zero() {
        let throughput = Throughput::new(100, Duration::ZERO).to_string();
        assert!(throughput.starts_with('0'));
        assert!(throughput.ends_with("/s"));
    }
}
