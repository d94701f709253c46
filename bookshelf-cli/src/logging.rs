//! Logger setup. All user-facing output goes through `log`, so this decides
//! what the user sees.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use log::Level;

/// Writes log lines to stdout and, when a log file is configured, to that
/// file with ANSI escapes removed.
struct LogWriter {
    file: Option<strip_ansi_escapes::Writer<File>>,
}

impl Write for LogWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        io::stdout().write_all(buf)?;
        if let Some(file) = self.file.as_mut() {
            file.write_all(buf)?;
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        io::stdout().flush()?;
        if let Some(file) = self.file.as_mut() {
            file.flush()?;
        }
        Ok(())
    }
}

/// Install the global logger.
///
/// Default shows info and above from bookshelf crates; `quiet` drops to
/// warnings; `verbose` enables debug output with timestamps. `RUST_LOG`
/// overrides the level filter when set.
pub(crate) fn init(quiet: bool, verbose: bool, logfile: Option<&Path>) -> io::Result<()> {
    let default_filter = if verbose {
        "warn,bookshelf=debug"
    } else if quiet {
        "warn"
    } else {
        "warn,bookshelf=info"
    };

    let file = match logfile {
        Some(path) => Some(strip_ansi_escapes::Writer::new(File::create(path)?)),
        None => None,
    };

    let mut builder = env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(default_filter),
    );
    builder.target(env_logger::Target::Pipe(Box::new(LogWriter { file })));
    builder.format(move |buf, record| {
        if verbose {
            writeln!(
                buf,
                "[{} {:<5} {}] {}",
                buf.timestamp(),
                record.level(),
                record.target(),
                record.args()
            )
        } else {
            match record.level() {
                Level::Debug | Level::Trace => {
                    writeln!(buf, "{}: {}", record.level(), record.args())
                }
                _ => writeln!(buf, "{}", record.args()),
            }
        }
    });
    builder.try_init().map_err(io::Error::other)
}
