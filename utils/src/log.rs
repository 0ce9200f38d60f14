
use flexi_logger::{FileSpec, Logger, LoggerHandle, with_thread, WriteMode};
use super::error::*;

///
/// Macros to write to the backing file logger.
///
pub use ::log::{trace as trace, debug as debug, info as info, warn as warn, error as error};

///
/// Starts the logstream at the given level spec (e.g. "debug" or "info, arcade=trace"), 
/// writing to a timestamped file in the given directory.
///
/// The returned handle must be held for as long as the program logs; dropping it
/// flushes and closes the file.
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

#[cfg(test)]
mod tests 
{
    use super::*;

    #[test]
    fn debug_records_pass_at_debug_level ()
    {
        let dir = std::env::temp_dir().join("utils-log-test");
        let handle = initialize(& dir.to_string_lossy(), "debug", "debug").unwrap();

        assert!(::log::log_enabled!(::log::Level::Debug));
        assert!(!::log::log_enabled!(::log::Level::Trace));

        drop(handle);
    }
}
