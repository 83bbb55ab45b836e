use crate::error::CliError;
use crate::util::{format_name, load_rgba, output_path, parse_format, RgbaImage, Throughput};
use argh::FromArgs;
use dxt_codec_api::{EncoderBuilder, TextureFormat};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use tracing::info;

const DEFAULT_FORMATS: [TextureFormat; 4] = [
    TextureFormat::Dxt1,
    TextureFormat::Dxt1Alpha,
    TextureFormat::Dxt5,
    TextureFormat::YCoCgDxt5,
];

#[derive(FromArgs, Debug)]
/// Time repeated encodes of one or more images and append the results to a log
#[argh(subcommand, name = "benchmark")]
pub struct BenchmarkCmd {
    /// input image files
    #[argh(positional)]
    pub inputs: Vec<PathBuf>,

    /// number of encodes per image and format [default: 10]
    #[argh(option, default = "10")]
    pub iterations: u32,

    /// format to time; may be repeated [default: dxt1, dxt1a, dxt5, ycocg]
    #[argh(option, from_str_fn(parse_format))]
    pub format: Vec<TextureFormat>,

    /// directory for the encoded .dds files [default: next to each input]
    #[argh(option)]
    pub output: Option<PathBuf>,

    /// timing log, appended to [default: dxt-codec-benchmark.log]
    #[argh(option, default = "PathBuf::from(\"dxt-codec-benchmark.log\")")]
    pub log: PathBuf,

    /// encode block rows on all cores
    #[cfg(feature = "multithreaded")]
    #[argh(switch)]
    pub parallel: bool,
}

/// The timing of one image encoded repeatedly in one format.
pub struct BenchmarkResult {
    pub format: TextureFormat,
    pub iterations: u32,
    pub total: Duration,
    pub encoded: Vec<u8>,
}

impl BenchmarkResult {
    pub fn per_iteration(&self) -> Duration {
        self.total / self.iterations.max(1)
    }
}

pub fn handle_benchmark_command(cmd: BenchmarkCmd) -> Result<(), CliError> {
    if let Some(output) = &cmd.output {
        std::fs::create_dir_all(output)?;
    }

    let formats = if cmd.format.is_empty() {
        DEFAULT_FORMATS.to_vec()
    } else {
        cmd.format.clone()
    };

    #[cfg(feature = "multithreaded")]
    let parallel = cmd.parallel;
    #[cfg(not(feature = "multithreaded"))]
    let parallel = false;

    let mut log = OpenOptions::new().create(true).append(true).open(&cmd.log)?;

    for input in &cmd.inputs {
        let image = load_rgba(input)?;
        for &format in &formats {
            let result = benchmark_image(&image, format, cmd.iterations, parallel)?;
            let per_iteration = result.per_iteration();
            let throughput = Throughput::new(image.pixels.len() as u64, per_iteration);

            let suffix = format!(".{}.dds", format_name(format));
            let target = output_path(input, cmd.output.as_deref(), &suffix);
            std::fs::write(&target, &result.encoded)?;

            info!(
                input = %input.display(),
                format = format_name(format),
                iterations = result.iterations,
                total = ?result.total,
                per_iteration = ?per_iteration,
                throughput = %throughput,
                "benchmarked"
            );
            write_log_line(&mut log, input, &image, &result, &throughput)?;
        }
    }

    info!(log = %cmd.log.display(), "timings appended");
    Ok(())
}

/// Encodes `image` `iterations` times, keeping the output of the last run.
#[cfg_attr(not(feature = "multithreaded"), allow(unused_variables))]
pub fn benchmark_image(
    image: &RgbaImage,
    format: TextureFormat,
    iterations: u32,
    parallel: bool,
) -> Result<BenchmarkResult, CliError> {
    let encoder = EncoderBuilder::new().format(format).build();
    let mut encoded = Vec::with_capacity(encoder.encoded_size(image.width, image.height));

    let start = Instant::now();
    for _ in 0..iterations.max(1) {
        #[cfg(feature = "multithreaded")]
        if parallel {
            encoded = encoder.encode_parallel_to_vec(&image.pixels, image.width, image.height)?;
            continue;
        }

        encoded.clear();
        encoder.encode(&image.pixels, image.width, image.height, &mut encoded)?;
    }

    Ok(BenchmarkResult {
        format,
        iterations: iterations.max(1),
        total: start.elapsed(),
        encoded,
    })
}

fn write_log_line(
    log: &mut impl Write,
    input: &Path,
    image: &RgbaImage,
    result: &BenchmarkResult,
    throughput: &Throughput,
) -> Result<(), CliError> {
    writeln!(
        log,
        "{}\t{}\t{}x{}\t{} iterations\t{:.3} ms total\t{:.3} ms/encode\t{}",
        input.display(),
        format_name(result.format),
        image.width,
        image.height,
        result.iterations,
        result.total.as_secs_f64() * 1000.0,
        result.per_iteration().as_secs_f64() * 1000.0,
        throughput
    )?;
    Ok(())
}
