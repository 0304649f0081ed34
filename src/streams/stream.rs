use std::io::Error;

/// Pull-based interface for sources of byte values in `[0, 255]`.
///
/// Implementations may be finite (e.g., a recorded sequence used in tests) or
/// unbounded generators. Values are produced one at a time; the consumer owns
/// any buffering it needs.
pub trait ByteStream {
    /// Indicates whether the stream *may* produce more values.
    ///
    /// Finite streams should return `false` once exhausted. Unbounded
    /// generators typically return `true` always.
    ///
    /// This call should be cheap and side effect free. If it returns `false`,
    /// a subsequent call to [`next_value`] must return `None`.
    ///
    /// [`next_value`]: ByteStream::next_value
    fn has_more_values(&self) -> bool;

    /// Produces the next value, or `None` if the stream is exhausted.
    fn next_value(&mut self) -> Option<u8>;

    /// Resets the stream to its initial state.
    ///
    /// For generators this re-seeds the RNG and clears internal counters, so
    /// the same value sequence is produced again. Returns an error if the
    /// underlying source cannot be reset.
    fn restart(&mut self) -> Result<(), Error>;
}
