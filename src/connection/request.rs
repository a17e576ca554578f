use crate::connection::{LogicalUnit, NetFn};

/// A request frame handed to an [`IpmiConnection`](super::IpmiConnection).
#[derive(Debug, Clone, PartialEq)]
pub struct Request {
    netfn: NetFn,
    lun: LogicalUnit,
    cmd: u8,
    data: Vec<u8>,
}

impl Request {
    pub fn new(netfn: NetFn, cmd: u8, data: Vec<u8>) -> Self {
        Self {
            netfn,
            lun: LogicalUnit::Zero,
            cmd,
            data,
        }
    }

    /// Address the request to a different LUN of the BMC.
    pub fn with_lun(mut self, lun: LogicalUnit) -> Self {
        self.lun = lun;
        self
    }

    pub fn netfn(&self) -> NetFn {
        self.netfn
    }

    pub fn lun(&self) -> LogicalUnit {
        self.lun
    }

    pub fn cmd(&self) -> u8 {
        self.cmd
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn data_mut(&mut self) -> &mut Vec<u8> {
        &mut self.data
    }
}
