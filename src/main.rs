use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use uf2_thumb_disasm::driver;

/// Parse a UF2 firmware image and disassemble its payload as ARMv6-M Thumb.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// UF2 image to disassemble.
    file: PathBuf,

    /// Extra positional arguments are accepted and ignored.
    #[arg(hide = true)]
    trailing: Vec<String>,
}

fn main() -> ExitCode {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let stdout = std::io::stdout();
    let mut handle = stdout.lock();

    match driver::run(&args.file, &mut handle) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
