use chrono::Local;
use ::log::{Level, LevelFilter, SetLoggerError};
use std::io::Write;

pub fn level_to_sign(level: Level) -> &'static str {
    match level {
        Level::Trace | Level::Debug => ".",
        Level::Info => "-",
        Level::Warn => "*",
        Level::Error => "#",
    }
}

/// Installs an `env_logger` backend with the `day month time sign message`
/// line format. Fails if a logger is already set.
pub fn init_logger(level: LevelFilter) -> Result<(), SetLoggerError> {
    let mut builder = env_logger::Builder::new();
    builder.filter_level(level);
    builder.format(
        |buf, record|
            writeln!(
                buf,
                "{} {} {}",
                Local::now().format("%d %b %H:%M:%S"),
                level_to_sign(record.level()),
                record.args()
            )
    );

    builder.try_init()
}
