use thiserror::Error;

/// Errors that can end a monitor run early.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// A status line could not be written, typically because stdout was closed.
    #[error("failed to write status line: {0}")]
    Io(#[from] std::io::Error),

    /// A configuration override would make the run ill-defined.
    #[error("invalid configuration: {field} = {value}: {problem}")]
    InvalidConfig {
        field: &'static str,
        value: u64,
        problem: &'static str,
    },
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_config_message_names_the_field() {
        let err = Error::InvalidConfig {
            field: "batch_size",
            value: 0,
            problem: "must be greater than zero",
        };

        assert_eq!(
            err.to_string(),
            "invalid configuration: batch_size = 0: must be greater than zero"
        );
    }

    #[test]
    fn io_errors_convert() {
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        let err: Error = io.into();

        assert!(matches!(err, Error::Io(_)));
        assert!(err.to_string().contains("pipe closed"));
    }
}
