use crate::{
    connection::{IpmiCommand, NetFn, Request},
    cursor::ByteCursor,
    error::ParseError,
    log_vec, Loggable,
};

/// The Get Device ID command.
pub struct GetDeviceId;

impl From<GetDeviceId> for Request {
    fn from(_: GetDeviceId) -> Self {
        Request::new(NetFn::App, 0x01, Vec::new())
    }
}

impl IpmiCommand for GetDeviceId {
    type Output = DeviceId;

    fn parse_success_response(data: &[u8]) -> Result<Self::Output, ParseError> {
        DeviceId::parse(data)
    }
}

/// All of the fields that are returned when retrieving a
/// device's ID.
#[derive(Clone, Debug, PartialEq)]
pub struct DeviceId {
    /// The raw ID of the device.
    pub device_id: u8,
    /// The revision of the device.
    pub device_revision: u8,
    /// `true` if the device provides device SDRs.
    pub provides_device_sdrs: bool,
    /// `true` if the device is available, `false` if the device
    /// is in device firmware, SDR repository update, or self-initialization state.
    pub device_available: bool,
    pub major_fw_revision: u8,
    pub minor_fw_revision: u8,
    /// The major version of the IPMI version supported by the device.
    pub major_version: u8,
    /// The minor version of the IPMI version supported by the device.
    pub minor_version: u8,
    pub chassis_support: bool,
    pub bridge_support: bool,
    pub ipmb_event_generator_support: bool,
    pub ipmb_event_receiver_support: bool,
    pub fru_inventory_support: bool,
    pub sel_device_support: bool,
    pub sdr_repository_support: bool,
    pub sensor_device_support: bool,
    /// The raw manufacturer ID bytes, least significant first.
    pub manufacturer_id: [u8; 3],
    pub product_id: u16,
    /// Optional auxiliary firmware revision information.
    pub aux_revision: Option<[u8; 4]>,
}

impl DeviceId {
    /// Parse a `DeviceId` from IPMI response data.
    pub fn parse(data: &[u8]) -> Result<Self, ParseError> {
        let mut cursor = ByteCursor::new(data);

        let device_id = cursor.pop_u8()?;
        let revision = cursor.pop_u8()?;
        let firmware_major = cursor.pop_u8()?;
        let firmware_minor = cursor.pop_u8()?;
        let ipmi_version = cursor.pop_u8()?;
        let support = cursor.pop_u8()?;

        let mut manufacturer_id = [0u8; 3];
        manufacturer_id.copy_from_slice(cursor.pop_slice(3)?);

        let product_id = cursor.pop_u16()?;

        let aux_revision = cursor.pop_u32().ok().map(u32::to_le_bytes);

        // BCD encoded
        let minor_fw_revision = (firmware_minor & 0xF) + ((firmware_minor >> 4) & 0xF) * 10;

        Ok(Self {
            device_id,
            device_revision: revision & 0xF,
            provides_device_sdrs: (revision & 0x80) == 0x80,
            device_available: (firmware_major & 0x80) != 0x80,
            major_fw_revision: firmware_major & 0x7F,
            minor_fw_revision,
            major_version: ipmi_version & 0xF,
            minor_version: (ipmi_version >> 4) & 0xF,
            chassis_support: (support & 0x80) == 0x80,
            bridge_support: (support & 0x40) == 0x40,
            ipmb_event_generator_support: (support & 0x20) == 0x20,
            ipmb_event_receiver_support: (support & 0x10) == 0x10,
            fru_inventory_support: (support & 0x08) == 0x08,
            sel_device_support: (support & 0x04) == 0x04,
            sdr_repository_support: (support & 0x02) == 0x02,
            sensor_device_support: (support & 0x01) == 0x01,
            manufacturer_id,
            product_id,
            aux_revision,
        })
    }

    /// The 20-bit IANA enterprise number of the manufacturer, as used to
    /// select OEM event tables.
    pub fn oem_id(&self) -> u32 {
        let [b0, b1, b2] = self.manufacturer_id;
        ((b2 as u32 & 0x0F) << 16) | ((b1 as u32) << 8) | b0 as u32
    }
}

impl Loggable for DeviceId {
    fn as_log(&self) -> Vec<crate::fmt::LogItem> {
        let (dev_id, dev_rev) = (self.device_id, self.device_revision);
        let (fw_maj, fw_min) = (self.major_fw_revision, self.minor_fw_revision);
        let (v_maj, v_min) = (self.major_version, self.minor_version);

        let mut log = log_vec![
            (0, "Device ID information"),
            (1, "Device ID", format!("0x{dev_id:02X}")),
            (1, "Device revision", format!("0x{dev_rev:02X}")),
            (1, "Manufacturer ID", self.oem_id()),
            (1, "Product ID", format!("0x{:04X}", self.product_id)),
            (1, "IPMI Version", format!("{v_maj}.{v_min}")),
            (1, "FW revision", format!("{fw_maj}.{fw_min}")),
            (1, "Device available", self.device_available),
            (1, "Provides device SDRs", self.provides_device_sdrs),
            (1, "SEL Device support", self.sel_device_support),
            (1, "SDR Repository sup", self.sdr_repository_support),
            (1, "Sensor Device sup", self.sensor_device_support)
        ];

        if let Some(aux_rev) = &self.aux_revision {
            log.push((1, "Auxiliary revision", format!("{aux_rev:02X?}")).into());
        }

        log
    }
}
