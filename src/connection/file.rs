use std::{
    ffi::{c_int, c_long},
    io,
    os::fd::AsRawFd,
    path::Path,
    time::{Duration, Instant},
};

use nix::poll::{poll, PollFd, PollFlags};

use crate::{
    config::{DEFAULT_DEVICE_PATHS, DEFAULT_RECV_TIMEOUT},
    connection::{IpmiConnection, LogicalUnit, Request, Response},
    fmt::{LogItem, LogOutput, Loggable, Logger},
};

#[derive(Debug, thiserror::Error)]
pub enum FileError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("no response within {0:?}")]
    Timeout(Duration),
    #[error("no IPMI device found at any of {0:?}")]
    NoDevice(Vec<String>),
    #[error("received a response without a completion code")]
    EmptyResponse,
    #[error("the connection is closed")]
    Closed,
}

impl From<nix::errno::Errno> for FileError {
    fn from(value: nix::errno::Errno) -> Self {
        Self::Io(value.into())
    }
}

#[repr(C)]
#[derive(Debug)]
pub struct IpmiMessage {
    netfn: u8,
    cmd: u8,
    data_len: u16,
    data: *mut u8,
}

impl IpmiMessage {
    fn data(&self) -> &[u8] {
        // SAFETY: `data` always points into a buffer owned by the caller of
        // the ioctl, and the driver never reports more than it was given.
        unsafe { core::slice::from_raw_parts(self.data, self.data_len as usize) }
    }
}

impl Loggable for IpmiMessage {
    fn as_log(&self) -> Vec<LogItem> {
        let mut items = crate::log_vec![
            (1, "NetFn", format!("0x{:02X}", self.netfn)),
            (1, "Command", format!("0x{:02X}", self.cmd)),
            (1, "Data len", self.data_len),
        ];

        if self.data_len > 0 {
            items.push((1, "Data", format!("{:02X?}", self.data())).into());
        }

        items
    }
}

#[repr(C)]
#[derive(Debug)]
pub struct IpmiRequest {
    addr: *mut u8,
    addr_len: u32,
    msg_id: c_long,
    message: IpmiMessage,
}

impl Loggable for IpmiRequest {
    fn as_log(&self) -> Vec<LogItem> {
        let mut items = crate::log_vec![(0, "Request"), (1, "Message ID", self.msg_id)];
        items.extend(self.message.as_log());
        items
    }
}

#[repr(C)]
#[derive(Debug)]
pub struct IpmiRecv {
    recv_type: c_int,
    addr: *mut u8,
    addr_len: u32,
    msg_id: c_long,
    message: IpmiMessage,
}

impl IpmiRecv {
    const RESPONSE_RECV_TYPE: c_int = 1;
}

impl Loggable for IpmiRecv {
    fn as_log(&self) -> Vec<LogItem> {
        let mut items = crate::log_vec![
            (0, "Response"),
            (1, "Type", self.recv_type),
            (1, "Message ID", self.msg_id),
        ];
        items.extend(self.message.as_log());
        items
    }
}

mod ioctl {
    const IPMI_IOC_MAGIC: u8 = b'i';

    use nix::{ioctl_read, ioctl_readwrite};

    use super::*;

    ioctl_readwrite!(ipmi_recv_msg_trunc, IPMI_IOC_MAGIC, 11, IpmiRecv);
    ioctl_read!(ipmi_send_request, IPMI_IOC_MAGIC, 13, IpmiRequest);
    ioctl_read!(ipmi_set_gets_events, IPMI_IOC_MAGIC, 16, c_int);
}

#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq)]
struct IpmiSysIfaceAddr {
    ty: c_int,
    channel: i16,
    lun: u8,
}

impl IpmiSysIfaceAddr {
    const IPMI_SYSTEM_INTERFACE_ADDR_TYPE: c_int = 0x0c;
    const IPMI_BMC_CHANNEL: i16 = 0xf;

    const fn bmc(lun: LogicalUnit) -> Self {
        let lun = match lun {
            LogicalUnit::Zero => 0,
            LogicalUnit::One => 1,
            LogicalUnit::Two => 2,
            LogicalUnit::Three => 3,
        };

        Self {
            ty: Self::IPMI_SYSTEM_INTERFACE_ADDR_TYPE,
            channel: Self::IPMI_BMC_CHANNEL,
            lun,
        }
    }
}

/// Large enough for any address the driver reports a response from.
#[repr(C)]
#[derive(Clone, Copy, Debug)]
struct IpmiAddr {
    ty: c_int,
    channel: i16,
    data: [u8; 32],
}

/// A connection to the local controller through the Linux IPMI driver
/// (`/dev/ipmi0` and friends).
///
/// The device is closed when the connection is dropped, or earlier with
/// [`File::close`]. A closed connection fails every request with
/// [`FileError::Closed`].
#[derive(Debug)]
pub struct File {
    inner: Option<std::fs::File>,
    recv_timeout: Duration,
    seq: c_long,
}

impl File {
    pub fn new(path: impl AsRef<Path>, recv_timeout: Duration) -> Result<Self, FileError> {
        let inner = std::fs::OpenOptions::new()
            .read(true)
            .write(true)
            .open(path.as_ref())?;

        let mut gets_events: c_int = 0;
        // SAFETY: the ioctl reads a single, owned c_int.
        unsafe {
            ioctl::ipmi_set_gets_events(inner.as_raw_fd(), &mut gets_events as *mut _)?;
        }

        log::debug!("Opened IPMI device {}", path.as_ref().display());

        Ok(Self {
            inner: Some(inner),
            recv_timeout,
            seq: 0,
        })
    }

    /// Open the first device node that exists out of
    /// [`DEFAULT_DEVICE_PATHS`], with the default receive timeout.
    pub fn open_default() -> Result<Self, FileError> {
        for path in DEFAULT_DEVICE_PATHS {
            match Self::new(path, DEFAULT_RECV_TIMEOUT) {
                Ok(file) => return Ok(file),
                Err(FileError::Io(e)) if e.kind() == io::ErrorKind::NotFound => {
                    log::trace!("{path} does not exist");
                }
                Err(e) => return Err(e),
            }
        }

        Err(FileError::NoDevice(
            DEFAULT_DEVICE_PATHS.iter().map(|p| p.to_string()).collect(),
        ))
    }

    pub fn is_closed(&self) -> bool {
        self.inner.is_none()
    }

    pub fn close(&mut self) {
        if self.inner.take().is_some() {
            log::debug!("Closed IPMI device");
        }
    }

    fn fd(&self) -> Result<c_int, FileError> {
        self.inner
            .as_ref()
            .map(|f| f.as_raw_fd())
            .ok_or(FileError::Closed)
    }

    fn send(&mut self, request: &Request) -> Result<c_long, FileError> {
        let fd = self.fd()?;

        let bmc_addr = &mut IpmiSysIfaceAddr::bmc(request.lun());
        let mut data = request.data().to_vec();

        let msg_id = self.seq;
        self.seq = self.seq.wrapping_add(1);

        let mut ipmi_request = IpmiRequest {
            addr: bmc_addr as *mut _ as *mut u8,
            addr_len: core::mem::size_of_val(bmc_addr) as u32,
            msg_id,
            message: IpmiMessage {
                netfn: request.netfn().request_value(),
                cmd: request.cmd(),
                data_len: data.len() as u16,
                data: data.as_mut_ptr(),
            },
        };

        log::debug!("Sending request");
        Logger::log(&LogOutput::Log(log::Level::Trace), &ipmi_request);

        // SAFETY: `ipmi_request` has the layout the ioctl expects, and the
        // address and data it points to outlive the call.
        unsafe {
            ioctl::ipmi_send_request(fd, &mut ipmi_request as *mut _)?;
        }

        Ok(msg_id)
    }

    fn recv(&mut self, msg_id: c_long) -> Result<Response, FileError> {
        let fd = self.fd()?;
        let start = Instant::now();

        loop {
            let remaining = self
                .recv_timeout
                .checked_sub(start.elapsed())
                .ok_or(FileError::Timeout(self.recv_timeout))?;

            let mut fds = [PollFd::new(fd, PollFlags::POLLIN)];
            let timeout_ms = c_int::try_from(remaining.as_millis()).unwrap_or(c_int::MAX);

            if poll(&mut fds, timeout_ms)? == 0 {
                log::warn!(
                    "No response after waiting for {} ms",
                    start.elapsed().as_millis()
                );
                return Err(FileError::Timeout(self.recv_timeout));
            }

            let mut addr = IpmiAddr {
                ty: 0,
                channel: 0,
                data: [0; 32],
            };
            let mut response_data = [0u8; 1024];

            let mut recv = IpmiRecv {
                recv_type: 0,
                addr: &mut addr as *mut _ as *mut u8,
                addr_len: core::mem::size_of_val(&addr) as u32,
                msg_id: 0,
                message: IpmiMessage {
                    netfn: 0,
                    cmd: 0,
                    data_len: response_data.len() as u16,
                    data: response_data.as_mut_ptr(),
                },
            };

            // SAFETY: `recv` has the layout the ioctl expects, and the
            // address and data buffers it points to outlive the call.
            unsafe {
                ioctl::ipmi_recv_msg_trunc(fd, &mut recv as *mut _)?;
            }

            Logger::log(&LogOutput::Log(log::Level::Trace), &recv);

            if recv.recv_type != IpmiRecv::RESPONSE_RECV_TYPE || recv.msg_id != msg_id {
                log::debug!(
                    "Ignoring message {} of type {} while waiting for {}",
                    recv.msg_id,
                    recv.recv_type,
                    msg_id
                );
                continue;
            }

            log::debug!(
                "Received response after {} ms",
                start.elapsed().as_millis()
            );

            return Response::from_frame(recv.message.data())
                .map_err(|_| FileError::EmptyResponse);
        }
    }
}

impl IpmiConnection for File {
    type Error = FileError;

    fn send_recv(&mut self, request: &Request) -> Result<Response, Self::Error> {
        let msg_id = self.send(request)?;
        self.recv(msg_id)
    }
}

impl Drop for File {
    fn drop(&mut self) {
        self.close();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::connection::NetFn;

    #[test]
    fn closed_connection_rejects_requests() {
        let mut file = File {
            inner: None,
            recv_timeout: DEFAULT_RECV_TIMEOUT,
            seq: 0,
        };

        assert!(file.is_closed());

        let request = Request::new(NetFn::App, 0x01, Vec::new());
        assert!(matches!(file.send_recv(&request), Err(FileError::Closed)));
    }

    #[test]
    fn bmc_address() {
        let addr = IpmiSysIfaceAddr::bmc(LogicalUnit::Two);
        assert_eq!(addr.ty, 0x0c);
        assert_eq!(addr.channel, 0xf);
        assert_eq!(addr.lun, 2);
    }
}
