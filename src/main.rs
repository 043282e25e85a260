use std::fs::File;
use std::io::{self, IsTerminal, Read, Write};
use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use espcolor::cli::{Cli, ColorMode};
use espcolor::config::{self, ColorConfig};
use espcolor::decode::Utf8ChunkDecoder;
use espcolor::error::Error;
use espcolor::filter::MonitorFilter;

fn main() -> ExitCode {
    // Reset SIGPIPE to default behavior so upstream writers get a clean
    // SIGPIPE signal instead of a BrokenPipeError when espcolor exits early.
    reset_sigpipe();

    let cli = Cli::parse();

    if let Some(shell) = cli.completions {
        clap_complete::generate(shell, &mut Cli::command(), "espcolor", &mut io::stdout());
        return ExitCode::SUCCESS;
    }

    init_tracing(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(Error::Io(e)) if e.kind() == io::ErrorKind::BrokenPipe => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("espcolor: {e}");
            ExitCode::from(2)
        }
    }
}

fn run(cli: &Cli) -> Result<(), Error> {
    let colors = if resolve_color_mode(cli.color) {
        let path = cli.config.clone().unwrap_or_else(config::default_config_path);
        ColorConfig::resolve(&path, cli.theme.as_deref())
    } else {
        ColorConfig::plain()
    };

    let mut reader: Box<dyn Read> = match &cli.input {
        Some(path) => Box::new(File::open(path).map_err(|source| Error::Input {
            path: path.clone(),
            source,
        })?),
        None => Box::new(io::stdin().lock()),
    };

    let mut filter = MonitorFilter::open(colors);
    let mut decoder = Utf8ChunkDecoder::new();
    let mut writer = io::stdout().lock();
    let mut chunk = vec![0u8; cli.chunk_size];

    loop {
        let n = match reader.read(&mut chunk) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e.into()),
        };

        let text = decoder.decode(&chunk[..n]);
        let out = filter.rx(&text);
        if !out.is_empty() {
            writer.write_all(out.as_bytes())?;
            writer.flush()?;
        }
    }

    let mut out = filter.rx(&decoder.finish());
    out.push_str(&filter.close());
    writer.write_all(out.as_bytes())?;
    writer.flush()?;

    Ok(())
}

fn init_tracing(verbose: bool) {
    let default_directive = if verbose { "espcolor=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .with_target(false)
        .init();
}

fn resolve_color_mode(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            if std::env::var_os("FORCE_COLOR").is_some_and(|v| !v.is_empty()) {
                return true;
            }
            if std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty()) {
                return false;
            }
            if !io::stdout().is_terminal() {
                return false;
            }
            if std::env::var("TERM").is_ok_and(|v| v == "dumb") {
                return false;
            }
            true
        }
    }
}

/// Reset SIGPIPE to the default (terminate) behavior.
///
/// By default, Rust ignores SIGPIPE to surface `BrokenPipe` I/O errors.
/// For a filter sitting at the end of `pio device monitor | espcolor | ...`,
/// restoring `SIG_DFL` lets the OS end the pipeline normally.
#[cfg(unix)]
fn reset_sigpipe() {
    unsafe {
        libc::signal(libc::SIGPIPE, libc::SIG_DFL);
    }
}

#[cfg(not(unix))]
fn reset_sigpipe() {}
