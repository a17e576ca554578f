use crate::{
    connection::{IpmiCommand, NetFn, Request},
    cursor::ByteCursor,
    error::ParseError,
    log_vec,
    storage::Timestamp,
    Loggable,
};

/// Get SEL Info.
pub struct GetInfo;

impl IpmiCommand for GetInfo {
    type Output = Info;

    fn parse_success_response(data: &[u8]) -> Result<Self::Output, ParseError> {
        Info::parse(data)
    }
}

impl From<GetInfo> for Request {
    fn from(_: GetInfo) -> Self {
        Request::new(NetFn::Storage, 0x40, Vec::new())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Clear,
    PartialAddEntry,
    Reserve,
    GetAllocInfo,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Info {
    pub version_maj: u8,
    pub version_min: u8,
    pub entries: u16,
    pub bytes_free: u16,
    pub last_add_time: Timestamp,
    pub last_del_time: Timestamp,
    pub overflow: bool,
    pub supported_cmds: Vec<Command>,
}

impl Info {
    pub const LEN: usize = 14;

    pub fn parse(data: &[u8]) -> Result<Self, ParseError> {
        if data.len() != Self::LEN {
            return Err(ParseError::InvalidLength {
                expected: Self::LEN,
                actual: data.len(),
            });
        }

        let mut cursor = ByteCursor::new(data);

        let version = cursor.pop_u8()?;
        let entries = cursor.pop_u16()?;
        let bytes_free = cursor.pop_u16()?;
        let last_add_time = Timestamp::from(cursor.pop_u32()?);
        let last_del_time = Timestamp::from(cursor.pop_u32()?);
        let flags = cursor.pop_u8()?;

        let supported_cmds = [
            (0x08u8, Command::Clear),
            (0x04, Command::PartialAddEntry),
            (0x02, Command::Reserve),
            (0x01, Command::GetAllocInfo),
        ]
        .into_iter()
        .filter(|(bit, _)| flags & bit == *bit)
        .map(|(_, cmd)| cmd)
        .collect();

        Ok(Self {
            version_maj: version & 0xF,
            version_min: (version >> 4) & 0xF,
            entries,
            bytes_free,
            last_add_time,
            last_del_time,
            overflow: flags & 0x80 == 0x80,
            supported_cmds,
        })
    }

    /// Whether nothing has ever been added to the log.
    pub fn is_empty(&self) -> bool {
        self.last_add_time.is_unspecified()
    }
}

impl Loggable for Info {
    fn as_log(&self) -> Vec<crate::fmt::LogItem> {
        let (ver_maj, ver_min) = (self.version_maj, self.version_min);

        let supported_cmds: Vec<_> = self
            .supported_cmds
            .iter()
            .map(|cmd| match cmd {
                Command::GetAllocInfo => "Get Alloc Info",
                Command::Clear => "Clear",
                Command::PartialAddEntry => "Partial Add",
                Command::Reserve => "Reserve",
            })
            .collect();

        log_vec![
            (0, "SEL information"),
            (1, "Version", format!("{}.{}", ver_maj, ver_min)),
            (1, "Entries", self.entries),
            (1, "Bytes free", self.bytes_free),
            (1, "Last addition", self.last_add_time),
            (1, "Last erase", self.last_del_time),
            (1, "Overflowed", self.overflow),
            (1, "Supported cmds", format!("{:?}", supported_cmds)),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_info() {
        let data = hex::decode("51200000f000e1f505000000008a").unwrap();
        let info = GetInfo::parse_success_response(&data).unwrap();

        assert_eq!((info.version_maj, info.version_min), (1, 5));
        assert_eq!(info.entries, 0x20);
        assert_eq!(info.bytes_free, 0xF000);
        assert_eq!(info.last_add_time, Timestamp::from(100_000_000));
        assert!(info.last_del_time.is_unspecified());
        assert!(info.overflow);
        assert_eq!(
            info.supported_cmds,
            vec![Command::Clear, Command::Reserve]
        );
        assert!(!info.is_empty());
    }

    #[test]
    fn empty_log() {
        let info = Info::parse(&[0x51, 0, 0, 0, 0xF0, 0, 0, 0, 0, 0, 0, 0, 0, 0]).unwrap();
        assert!(info.is_empty());
    }

    #[test]
    fn wrong_length() {
        assert_eq!(
            Info::parse(&[0x51; 13]),
            Err(ParseError::InvalidLength {
                expected: 14,
                actual: 13
            })
        );
    }
}
