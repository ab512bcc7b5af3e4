//! Unrecoverable server conditions and their process exit codes.

use std::fmt;

/// A condition the server cannot continue from.
///
/// Each variant terminates the process with its own exit code so callers
/// (scripts, supervisors) can tell the failure classes apart.
#[derive(Debug)]
pub enum FatalError {
    /// Miscellaneous failure, e.g. the working directory is unavailable
    Misc(anyhow::Error),
    /// Help text was printed; not an error as such, but the server stops
    Help,
    /// Command-line or configuration values were rejected
    Args(String),
    /// The log sink could not be installed
    Log(String),
    /// The listening socket could not be set up
    Socket(anyhow::Error),
}

impl FatalError {
    pub fn exit_code(&self) -> u8 {
        match self {
            FatalError::Misc(_) => 1,
            FatalError::Help => 2,
            FatalError::Args(_) => 3,
            FatalError::Log(_) => 4,
            FatalError::Socket(_) => 5,
        }
    }
}

impl fmt::Display for FatalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FatalError::Misc(e) => write!(f, "{e:#}"),
            FatalError::Help => f.write_str("help requested"),
            FatalError::Args(msg) => write!(f, "invalid arguments: {msg}"),
            FatalError::Log(msg) => write!(f, "could not set up logging: {msg}"),
            FatalError::Socket(e) => write!(f, "could not open network socket: {e:#}"),
        }
    }
}

impl std::error::Error for FatalError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_are_distinct() {
        let codes = [
            FatalError::Misc(anyhow::anyhow!("x")).exit_code(),
            FatalError::Help.exit_code(),
            FatalError::Args(String::new()).exit_code(),
            FatalError::Log(String::new()).exit_code(),
            FatalError::Socket(anyhow::anyhow!("x")).exit_code(),
        ];

        for (i, a) in codes.iter().enumerate() {
            for b in &codes[i + 1..] {
                assert_ne!(a, b);
            }
        }
        assert_eq!(FatalError::Socket(anyhow::anyhow!("bind")).exit_code(), 5);
    }
}
