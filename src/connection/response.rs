use crate::cursor::{ByteCursor, ShortBuffer};

/// A response frame: the completion code and whatever data followed it.
#[derive(Debug, Clone, PartialEq)]
pub struct Response {
    completion_code: u8,
    data: Vec<u8>,
}

impl Response {
    pub fn new(completion_code: u8, data: Vec<u8>) -> Self {
        Self {
            completion_code,
            data,
        }
    }

    /// Split a raw response frame into its completion code (byte 0)
    /// and the remaining data.
    pub fn from_frame(frame: &[u8]) -> Result<Self, ShortBuffer> {
        let mut cursor = ByteCursor::new(frame);
        let completion_code = cursor.pop_u8()?;
        Ok(Self::new(completion_code, cursor.rest().to_vec()))
    }

    pub fn cc(&self) -> u8 {
        self.completion_code
    }

    pub fn is_success(&self) -> bool {
        self.completion_code == 0
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }
}
