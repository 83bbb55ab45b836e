#![allow(unexpected_cfgs)]
#![cfg(not(tarpaulin_include))]

mod commands;
mod error;
mod util;
use argh::FromArgs;
use core::error::Error;
use tracing_subscriber::EnvFilter;

#[derive(FromArgs, Debug)]
/// Compress images to DXT1/DXT5/YCoCg-DXT5 DDS textures and back
struct TopLevel {
    #[argh(subcommand)]
    command: Commands,
}

#[derive(FromArgs, Debug)]
#[argh(subcommand)]
enum Commands {
    Compress(commands::compress::CompressCmd),
    Decompress(commands::decompress::DecompressCmd),
    Benchmark(commands::benchmark::BenchmarkCmd),
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli: TopLevel = argh::from_env();

    // RUST_LOG overrides the default level
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .init();

    match cli.command {
        Commands::Compress(cmd) => {
            commands::compress::handle_compress_command(cmd)?;
        }
        Commands::Decompress(cmd) => {
            commands::decompress::handle_decompress_command(cmd)?;
        }
        Commands::Benchmark(cmd) => {
            commands::benchmark::handle_benchmark_command(cmd)?;
        }
    }

    Ok(())
}
