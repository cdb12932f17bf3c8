use thiserror::Error;

/// Custom error types for beach
#[derive(Debug, Error)]
pub enum BeachError {
    #[error("compiler `{0}` not found in PATH")]
    CompilerNotFound(String),

    #[error("a build is already in progress")]
    BuildBusy,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compiler_not_found_names_the_compiler() {
        let err = BeachError::CompilerNotFound("g++".to_string());
        assert!(err.to_string().contains("g++"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "nope");
        let err: BeachError = io.into();
        assert!(matches!(err, BeachError::Io(_)));
    }
}
