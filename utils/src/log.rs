
use flexi_logger::{FileSpec, Logger, LoggerHandle, with_thread, WriteMode};
use super::error::*;

///
/// Macros to write to the backing file logger.
///
pub use log::{trace as trace, debug as debug, info as info, warn as warn, error as error};

///
/// Starts the logstream, writing to a timestamped file in the given directory at the given level.
///
/// The returned handle must be kept alive for as long as records should be flushed.
///
pub fn initialize (path: & str, filename: & str, level: & str) -> Result<LoggerHandle>
{
    let file_spec = FileSpec::default()
        .directory(path)
        .basename(filename)
        .use_timestamp(true)
        .suffix("log");

    let handle = Logger::try_with_str(level)
        .context(format!("Invalid log level '{}'.", level))?
        .log_to_file(file_spec)
        .write_mode(WriteMode::BufferAndFlush)
        .format_for_files(with_thread)
        .start()
        .context(format!("Failed to start the file logger in '{}'.", path))?;

    Ok(handle)
}
