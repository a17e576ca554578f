use crate::{
    connection::{CompletionErrorCode, NetFn},
    cursor::ShortBuffer,
    storage::sdr::RecordId as SdrRecordId,
};

/// An error while decoding data received from a controller.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ParseError {
    #[error(transparent)]
    ShortBuffer(#[from] ShortBuffer),
    #[error("expected exactly {expected} bytes, got {actual}")]
    InvalidLength { expected: usize, actual: usize },
    #[error("unsupported SDR record type 0x{0:02X}")]
    UnsupportedRecordType(u8),
    #[error("unknown linearization 0x{0:02X}")]
    UnknownLinearization(u8),
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum IpmiError<CON> {
    /// The connection failed. Never retried.
    #[error("connection error: {0:?}")]
    Connection(CON),
    /// The controller answered with a non-zero completion code.
    #[error("{netfn} command 0x{cmd:02X} failed with completion code 0x{completion_code:02X}")]
    Failed {
        netfn: NetFn,
        cmd: u8,
        completion_code: u8,
        data: Vec<u8>,
    },
    /// The controller answered successfully, but the response data
    /// could not be decoded.
    #[error("could not parse response to {netfn} command 0x{cmd:02X}: {error}")]
    Parse {
        netfn: NetFn,
        cmd: u8,
        error: ParseError,
    },
    /// An SDR record of a type that is not decoded. `next_id` is the
    /// record that follows it in the repository.
    #[error("unsupported SDR record type 0x{record_type:02X} (next record 0x{:04X})", .next_id.value())]
    UnsupportedRecordType {
        record_type: u8,
        next_id: SdrRecordId,
    },
    /// The SEL has never had an entry added to it.
    #[error("the SEL has no entries")]
    EmptyLog,
    /// A record body could not be decoded.
    #[error(transparent)]
    Decode(ParseError),
}

impl<CON> IpmiError<CON> {
    /// The decoded completion code, if the controller reported a failure.
    pub fn completion_code(&self) -> Option<CompletionErrorCode> {
        match self {
            Self::Failed {
                completion_code, ..
            } => CompletionErrorCode::try_from(*completion_code).ok(),
            _ => None,
        }
    }

    pub fn map<CON2, F>(self, f: F) -> IpmiError<CON2>
    where
        F: FnOnce(CON) -> CON2,
    {
        match self {
            IpmiError::Connection(e) => IpmiError::Connection(f(e)),
            IpmiError::Failed {
                netfn,
                cmd,
                completion_code,
                data,
            } => IpmiError::Failed {
                netfn,
                cmd,
                completion_code,
                data,
            },
            IpmiError::Parse { netfn, cmd, error } => IpmiError::Parse { netfn, cmd, error },
            IpmiError::UnsupportedRecordType {
                record_type,
                next_id,
            } => IpmiError::UnsupportedRecordType {
                record_type,
                next_id,
            },
            IpmiError::EmptyLog => IpmiError::EmptyLog,
            IpmiError::Decode(e) => IpmiError::Decode(e),
        }
    }
}
