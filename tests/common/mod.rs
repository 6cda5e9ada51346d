#![allow(dead_code)]
use std::error::Error;
use std::fmt;
use std::io::Write;

pub type TestResult = Result<(), Box<dyn Error>>;

#[derive(Debug)]
pub struct ReturnError {
    pub expected: String,
    pub real: String,
}

impl fmt::Display for ReturnError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Expected: {}\n\
                   Real:     {}", self.expected, self.real)
    }
}

impl Error for ReturnError {}

pub fn compare<T: fmt::Debug + PartialEq>(expected: T, real: T) -> TestResult {
    if expected != real {
        return Err(Box::new(ReturnError {
            expected: format!("{:?}", expected),
            real: format!("{:?}", real),
        }));
    }
    Ok(())
}

pub fn is_none<T: fmt::Debug>(real: Option<T>) -> TestResult {
    match real {
        None => Ok(()),
        Some(v) => Err(Box::new(ReturnError {
            expected: "None".to_string(),
            real: format!("{:?}", v),
        })),
    }
}

pub fn level_to_character(level: log::Level) -> &'static str {
    match level {
        log::Level::Error => "TEST",
        _ => "LIST",
    }
}

pub fn test_init_logger() {
    let mut builder = env_logger::Builder::new();
    builder.filter_level(log::LevelFilter::Debug);
    builder.is_test(true);
    builder.format(
        |buf, record|
            writeln!(
                buf,
                "{}: {}",
                level_to_character(record.level()),
                record.args(),
            )
    );
    let _ = builder.try_init();
}
