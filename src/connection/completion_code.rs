#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResponseUnavailableReason {
    Unknown,
    SDRInUpdate,
    DeviceInFwUpdate,
    BMCInitializing,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CompletionErrorCode {
    NodeBusy,
    InvalidCommand,
    InvalidCommandForLun,
    ProcessingTimeout,
    OutOfSpace,
    ReservationCancelledOrInvalidId,
    RequestDataTruncated,
    RequestDataLenInvalid,
    RequestDataLengthLimitExceeded,
    ParameterOutOfRange,
    CannotReturnNumOfRequestedBytes,
    RequestedDatapointNotPresent,
    InvalidDataFieldInRequest,
    CommandIllegalForSensorOrRecord,
    ResponseUnavailable { reason: ResponseUnavailableReason },
    CannotExecuteDuplicateRequest,
    DestinationUnavailable,
    InsufficientPrivilege,
    CannotExecuteCommandInCurrentState,
    SubFunctionDisabled,
    Unspecified,
    Oem(u8),
    CommandSpecific(u8),
    Reserved(u8),
}

impl TryFrom<u8> for CompletionErrorCode {
    type Error = ();

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        let value = match value {
            0 => return Err(()),
            0xC0 => Self::NodeBusy,
            0xC1 => Self::InvalidCommand,
            0xC2 => Self::InvalidCommandForLun,
            0xC3 => Self::ProcessingTimeout,
            0xC4 => Self::OutOfSpace,
            0xC5 => Self::ReservationCancelledOrInvalidId,
            0xC6 => Self::RequestDataTruncated,
            0xC7 => Self::RequestDataLenInvalid,
            0xC8 => Self::RequestDataLengthLimitExceeded,
            0xC9 => Self::ParameterOutOfRange,
            0xCA => Self::CannotReturnNumOfRequestedBytes,
            0xCB => Self::RequestedDatapointNotPresent,
            0xCC => Self::InvalidDataFieldInRequest,
            0xCD => Self::CommandIllegalForSensorOrRecord,
            0xCE => Self::ResponseUnavailable {
                reason: ResponseUnavailableReason::Unknown,
            },
            0xCF => Self::CannotExecuteDuplicateRequest,
            0xD0 => Self::ResponseUnavailable {
                reason: ResponseUnavailableReason::SDRInUpdate,
            },
            0xD1 => Self::ResponseUnavailable {
                reason: ResponseUnavailableReason::DeviceInFwUpdate,
            },
            0xD2 => Self::ResponseUnavailable {
                reason: ResponseUnavailableReason::BMCInitializing,
            },
            0xD3 => Self::DestinationUnavailable,
            0xD4 => Self::InsufficientPrivilege,
            0xD5 => Self::CannotExecuteCommandInCurrentState,
            0xD6 => Self::SubFunctionDisabled,
            0xFF => Self::Unspecified,
            0x01..=0x7E => Self::Oem(value),
            0x80..=0xBE => Self::CommandSpecific(value),
            v => Self::Reserved(v),
        };

        Ok(value)
    }
}

impl CompletionErrorCode {
    /// Whether this completion code is a reserved value or not.
    pub fn is_reserved(&self) -> bool {
        matches!(self, Self::Reserved(_))
    }

    /// Whether this code reports that the reservation used for a
    /// multi-part read was cancelled, which means the read must be
    /// restarted from scratch.
    pub fn is_reservation_lost(&self) -> bool {
        matches!(self, Self::ReservationCancelledOrInvalidId)
    }
}

impl core::fmt::Display for CompletionErrorCode {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let text = match self {
            Self::NodeBusy => "node busy",
            Self::InvalidCommand => "invalid command",
            Self::InvalidCommandForLun => "invalid command for LUN",
            Self::ProcessingTimeout => "timeout while processing command",
            Self::OutOfSpace => "out of space",
            Self::ReservationCancelledOrInvalidId => "reservation cancelled or invalid",
            Self::RequestDataTruncated => "request data truncated",
            Self::RequestDataLenInvalid => "request data length invalid",
            Self::RequestDataLengthLimitExceeded => "request data field length limit exceeded",
            Self::ParameterOutOfRange => "parameter out of range",
            Self::CannotReturnNumOfRequestedBytes => "cannot return number of requested data bytes",
            Self::RequestedDatapointNotPresent => "requested sensor, data, or record not present",
            Self::InvalidDataFieldInRequest => "invalid data field in request",
            Self::CommandIllegalForSensorOrRecord => "command illegal for specified sensor or record",
            Self::ResponseUnavailable { reason } => match reason {
                ResponseUnavailableReason::Unknown => "response could not be provided",
                ResponseUnavailableReason::SDRInUpdate => "SDR repository in update mode",
                ResponseUnavailableReason::DeviceInFwUpdate => "device in firmware update mode",
                ResponseUnavailableReason::BMCInitializing => "BMC initialization in progress",
            },
            Self::CannotExecuteDuplicateRequest => "cannot execute duplicated request",
            Self::DestinationUnavailable => "destination unavailable",
            Self::InsufficientPrivilege => "insufficient privilege level",
            Self::CannotExecuteCommandInCurrentState => "command not supported in present state",
            Self::SubFunctionDisabled => "command sub-function disabled or unavailable",
            Self::Unspecified => "unspecified error",
            Self::Oem(v) => return write!(f, "OEM error 0x{v:02X}"),
            Self::CommandSpecific(v) => return write!(f, "command-specific error 0x{v:02X}"),
            Self::Reserved(v) => return write!(f, "reserved completion code 0x{v:02X}"),
        };

        f.write_str(text)
    }
}
