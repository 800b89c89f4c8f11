//! Error macros for campusnet

/// Macro for creating input parse errors at a given line
#[macro_export]
macro_rules! bail_parse {
    ($line:expr, $($arg:tt)*) => {
        return Err($crate::error::CampusError::parse($line, format!($($arg)*)))
    };
}
