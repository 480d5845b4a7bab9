//! Process exit codes and the informational flags that map to them.

use std::process::ExitCode;

use clap::ArgMatches;
use clap::parser::ValueSource;
use dla_core::LogError;

pub const AUTHOR: &str = env!("CARGO_PKG_AUTHORS");
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const LICENSE: &str = "This program is licensed and distributed under GNU/GPLv3 in the hope \
    that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of \
    MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. For more information see attached \
    license file or visit http://www.gnu.org/licenses/gpl.txt";

/// Why the process is exiting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exit {
    Success = 0,
    Version = 1,
    License = 2,
    Author = 3,
    /// No log file was given, or the arguments could not be parsed.
    Usage = 4,
    FileNotFound = 5,
    ParseError = 6,
    /// Any other failure, such as a broken config file.
    Failure = 7,
}

impl From<Exit> for ExitCode {
    fn from(exit: Exit) -> Self {
        Self::from(exit as u8)
    }
}

impl Exit {
    /// Picks the exit code for an error returned by a run.
    pub fn for_error(err: &anyhow::Error) -> Self {
        match err.downcast_ref::<LogError>() {
            Some(LogError::Read { .. }) => Self::FileNotFound,
            Some(LogError::Parse(_) | LogError::Empty) => Self::ParseError,
            None => Self::Failure,
        }
    }
}

/// Informational flags and the exits they trigger, keyed by argument id.
const INFO_FLAGS: [(&str, Exit); 3] = [
    ("version", Exit::Version),
    ("license", Exit::License),
    ("author", Exit::Author),
];

/// Text printed for the first informational flag on the command line, if any.
///
/// Flags are honoured in the order they were typed, so `-A -V` prints the author.
pub fn info_message(matches: &ArgMatches) -> Option<(Exit, String)> {
    let (_, exit) = INFO_FLAGS
        .iter()
        .filter(|(id, _)| matches.value_source(id) == Some(ValueSource::CommandLine))
        .min_by_key(|(id, _)| matches.index_of(id))?;

    let message = match exit {
        Exit::Version => VERSION.to_string(),
        Exit::License => LICENSE.to_string(),
        _ => format!("This program has been developed by {AUTHOR}"),
    };
    Some((*exit, message))
}
