//! Errors for integration methods

/// Validation errors returned by the sampler and every stepper built on it.
///
/// Numerical misbehaviour (overflow, NaN from a diverging right-hand side) is
/// not an error; it surfaces unchanged in the returned trace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Fewer than two sample points leave the step size undefined.
    #[error("sample count must be at least 2 (got {0})")]
    InvalidSampleCount(usize),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_names_the_offending_count() {
        let e = Error::InvalidSampleCount(1);
        assert_eq!(e.to_string(), "sample count must be at least 2 (got 1)");
    }
}
