use std::ffi::OsStr;

use clap::error::ErrorKind;

use campusnet_core::error::CampusError;
use campusnet_core::format::OutputFormat;

/// Parse output format from string
pub fn parse_output_format(s: &str) -> std::result::Result<OutputFormat, String> {
    s.parse::<OutputFormat>().map_err(|e| e.to_string())
}

/// Whether raw arguments ask for `--format json`.
///
/// Scanned by hand because clap may reject the command line before the
/// parsed `Cli.format` exists.
pub fn args_request_json<I, S>(args: I) -> bool
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        let arg = arg.as_ref();
        if arg == "--format=json" {
            return true;
        }
        if arg == "--format" && args.next().is_some_and(|v| v.as_ref() == "json") {
            return true;
        }
    }
    false
}

/// Classify a clap failure. `None` for help and version output, which are
/// not errors.
pub fn clap_to_campus_error(err: &clap::Error) -> Option<CampusError> {
    match err.kind() {
        ErrorKind::DisplayHelp
        | ErrorKind::DisplayVersion
        | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => None,
        ErrorKind::ValueValidation
        | ErrorKind::InvalidValue
        | ErrorKind::InvalidSubcommand
        | ErrorKind::UnknownArgument
        | ErrorKind::MissingRequiredArgument
        | ErrorKind::MissingSubcommand
        | ErrorKind::ArgumentConflict
        | ErrorKind::TooManyValues
        | ErrorKind::WrongNumberOfValues => Some(CampusError::UsageError(err.to_string())),
        _ => Some(CampusError::Other(err.to_string())),
    }
}
