//! A consuming, bounds-checked reader over received IPMI data.

/// Returned when a [`ByteCursor`] does not hold enough data
/// to satisfy a pop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("short buffer: needed {needed} byte(s), {remaining} remaining")]
pub struct ShortBuffer {
    pub needed: usize,
    pub remaining: usize,
}

/// Reads little-endian values from the front of a byte slice.
///
/// The cursor only moves forward. A failed pop leaves the position
/// where it was.
#[derive(Debug, Clone)]
pub struct ByteCursor<'a> {
    data: &'a [u8],
    position: usize,
}

impl<'a> ByteCursor<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, position: 0 }
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn remaining(&self) -> usize {
        self.data.len() - self.position
    }

    pub fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    /// The bytes that have not been consumed yet.
    pub fn rest(&self) -> &'a [u8] {
        &self.data[self.position..]
    }

    pub fn pop_slice(&mut self, len: usize) -> Result<&'a [u8], ShortBuffer> {
        let remaining = self.remaining();
        if len > remaining {
            return Err(ShortBuffer {
                needed: len,
                remaining,
            });
        }

        let start = self.position;
        self.position += len;
        Ok(&self.data[start..self.position])
    }

    fn pop_array<const N: usize>(&mut self) -> Result<[u8; N], ShortBuffer> {
        let mut out = [0u8; N];
        out.copy_from_slice(self.pop_slice(N)?);
        Ok(out)
    }

    pub fn pop_u8(&mut self) -> Result<u8, ShortBuffer> {
        let [value] = self.pop_array::<1>()?;
        Ok(value)
    }

    pub fn pop_u16(&mut self) -> Result<u16, ShortBuffer> {
        self.pop_array().map(u16::from_le_bytes)
    }

    pub fn pop_u24(&mut self) -> Result<u32, ShortBuffer> {
        let [b0, b1, b2] = self.pop_array::<3>()?;
        Ok(u32::from_le_bytes([b0, b1, b2, 0]))
    }

    pub fn pop_u32(&mut self) -> Result<u32, ShortBuffer> {
        self.pop_array().map(u32::from_le_bytes)
    }

    /// Pop `len` bytes and interpret them as text.
    ///
    /// Invalid UTF-8 sequences are replaced rather than rejected, since
    /// controllers are not consistent about the encoding of ID strings.
    pub fn pop_string(&mut self, len: usize) -> Result<String, ShortBuffer> {
        self.pop_slice(len)
            .map(|bytes| String::from_utf8_lossy(bytes).into_owned())
    }
}
