use thiserror::Error;

/// Errors reported by the fallible [`RingBuffer`](crate::RingBuffer) constructors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RingBufferError {
    /// A ring buffer needs at least one slot; an empty sequence or a zero
    /// capacity cannot back one.
    #[error("ring buffer capacity must be at least 1")]
    ZeroCapacity,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            RingBufferError::ZeroCapacity.to_string(),
            "ring buffer capacity must be at least 1"
        );
    }
}
