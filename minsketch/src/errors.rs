//! Error definitions.
use std::error::Error;
use std::{fmt, result};

/// A specialized Result type for this library.
pub type Result<T, E = MinsketchError> = result::Result<T, E>;

/// Errors in minsketch.
#[derive(Debug)]
pub enum MinsketchError {
    /// Contains [`InputError`].
    Input(InputError),

    /// Contains [`SizeMismatchError`].
    SizeMismatch(SizeMismatchError),
}

impl fmt::Display for MinsketchError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Input(e) => e.fmt(f),
            Self::SizeMismatch(e) => e.fmt(f),
        }
    }
}

impl Error for MinsketchError {}

impl MinsketchError {
    pub(crate) const fn input(msg: &'static str) -> Self {
        Self::Input(InputError { msg })
    }

    pub(crate) const fn size_mismatch(lhs: usize, rhs: usize) -> Self {
        Self::SizeMismatch(SizeMismatchError { lhs, rhs })
    }
}

/// Error used when the input argument is invalid.
#[derive(Debug)]
pub struct InputError {
    msg: &'static str,
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "InputError: {}", self.msg)
    }
}

/// Error used when two sketches of different sizes are compared or merged.
#[derive(Debug)]
pub struct SizeMismatchError {
    lhs: usize,
    rhs: usize,
}

impl fmt::Display for SizeMismatchError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "SizeMismatchError: sketch sizes must be equal, but got {} and {}",
            self.lhs, self.rhs
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_error_message() {
        let e = MinsketchError::input("Sketch size must not be 0.");
        assert_eq!(e.to_string(), "InputError: Sketch size must not be 0.");
    }

    #[test]
    fn test_size_mismatch_error_message() {
        let e = MinsketchError::size_mismatch(128, 64);
        assert_eq!(
            e.to_string(),
            "SizeMismatchError: sketch sizes must be equal, but got 128 and 64"
        );
    }
}
