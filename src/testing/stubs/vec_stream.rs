use std::io::Error;

use crate::streams::ByteStream;

/// Finite, replayable stream over a fixed value sequence. Test stub.
pub struct VecStream {
    pub values: Vec<u8>,
    idx: usize,
}

impl VecStream {
    pub fn new(values: Vec<u8>) -> Self {
        Self { values, idx: 0 }
    }

    /// Stream of `n` copies of `value`.
    pub fn constant(value: u8, n: usize) -> Self {
        Self::new(vec![value; n])
    }
}

impl ByteStream for VecStream {
    fn has_more_values(&self) -> bool {
        self.idx < self.values.len()
    }

    fn next_value(&mut self) -> Option<u8> {
        if !self.has_more_values() {
            return None;
        }
        let v = self.values[self.idx];
        self.idx += 1;
        Some(v)
    }

    fn restart(&mut self) -> Result<(), Error> {
        self.idx = 0;
        Ok(())
    }
}
