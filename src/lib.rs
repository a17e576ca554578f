//! Read-only access to the Sensor Data Repository and System Event Log of
//! an IPMI management controller.
//!
//! Command serialization and deserialization lives in the [`app`],
//! [`storage`] and [`sensor_event`] modules. [`Ipmi`] drives the
//! multi-request walks over the SDR and SEL on top of any
//! [`IpmiConnection`](connection::IpmiConnection), such as the local Linux
//! driver in [`connection::File`].

pub mod app;

pub mod config;
pub use config::{CompactRecordPolicy, WalkConfig};

pub mod connection;

pub mod cursor;

mod error;
pub use error::{IpmiError, ParseError};

pub mod storage;
pub use storage::sdr::record::SensorRecord;

pub mod sensor_event;

#[macro_use]
mod fmt;
#[cfg(test)]
mod tests;

pub use fmt::{LogItem, LogOutput, Loggable, Logger};

use app::GetDeviceId;
use connection::{IpmiCommand, IpmiConnection, Request};
use sensor_event::GetSensorReading;
use storage::{
    sdr::{record::FullSensorRecord, record::RecordContents, SdrWalk},
    sel::{Entry as SelEntry, SelWalk},
};

pub struct Ipmi<CON> {
    inner: CON,
    config: WalkConfig,
    oem_id: Option<u32>,
}

impl<CON> Ipmi<CON> {
    pub fn release(self) -> CON {
        self.inner
    }

    pub fn config(&self) -> &WalkConfig {
        &self.config
    }
}

impl<CON> From<CON> for Ipmi<CON>
where
    CON: IpmiConnection,
{
    fn from(value: CON) -> Self {
        Self::new(value)
    }
}

/// One sensor as reported by [`Ipmi::sensor_entries`].
///
/// If reading or converting the sensor failed, `error` is set and `value`
/// is `None`. The metadata fields are filled in regardless.
#[derive(Debug)]
pub struct SensorEntry<E> {
    pub name: String,
    pub value: Option<f64>,
    pub unit_code: u8,
    pub unit_name: &'static str,
    pub sensor_type_code: u8,
    pub entity_instance: u8,
    pub sensor_type_name: &'static str,
    pub error: Option<IpmiError<E>>,
}

impl<E> SensorEntry<E> {
    fn new<R: SensorRecord>(record: &R) -> Self {
        let common = record.common();

        Self {
            name: common.sensor_id.to_string(),
            value: None,
            unit_code: common.sensor_units.base_unit.into(),
            unit_name: common.sensor_units.base_unit.name(),
            sensor_type_code: common.ty.into(),
            entity_instance: common.entity_instance.into(),
            sensor_type_name: common.ty.name(),
            error: None,
        }
    }
}

impl<CON> Ipmi<CON>
where
    CON: IpmiConnection,
{
    pub fn new(inner: CON) -> Self {
        Self::with_config(inner, WalkConfig::default())
    }

    pub fn with_config(inner: CON, config: WalkConfig) -> Self {
        Self {
            inner,
            config,
            oem_id: None,
        }
    }

    pub fn inner_mut(&mut self) -> &mut CON {
        &mut self.inner
    }

    /// Send a command and decode its response.
    ///
    /// A non-zero completion code is returned as [`IpmiError::Failed`]
    /// without looking at the response data any further. Nothing is
    /// retried.
    pub fn send_recv<CMD>(&mut self, command: CMD) -> Result<CMD::Output, IpmiError<CON::Error>>
    where
        CMD: IpmiCommand,
    {
        let request: Request = command.into();
        let (netfn, cmd) = (request.netfn(), request.cmd());

        let response = self
            .inner
            .send_recv(&request)
            .map_err(IpmiError::Connection)?;

        if !response.is_success() {
            return Err(IpmiError::Failed {
                netfn,
                cmd,
                completion_code: response.cc(),
                data: response.data().to_vec(),
            });
        }

        CMD::parse_success_response(response.data())
            .map_err(|error| IpmiError::Parse { netfn, cmd, error })
    }

    /// Walk the Sensor Data Repository.
    pub fn sdrs(&mut self) -> SdrWalk<'_, CON> {
        SdrWalk::new(self)
    }

    /// Walk the System Event Log, yielding raw entries.
    pub fn sel(&mut self) -> SelWalk<'_, CON> {
        SelWalk::new(self)
    }

    /// The manufacturer's IANA enterprise number. Requested from the
    /// controller once, then cached for the lifetime of this handle.
    pub fn oem_id(&mut self) -> Result<u32, IpmiError<CON::Error>> {
        if let Some(oem_id) = self.oem_id {
            return Ok(oem_id);
        }

        let device_id = self.send_recv(GetDeviceId)?;
        let oem_id = device_id.oem_id();
        log::debug!("Controller OEM id: {oem_id}");

        self.oem_id = Some(oem_id);
        Ok(oem_id)
    }

    /// Read the current value of a sensor. `None` if the controller has no
    /// reading available.
    pub fn read_sensor(
        &mut self,
        record: &FullSensorRecord,
    ) -> Result<Option<f64>, IpmiError<CON::Error>> {
        let reading = self.send_recv(GetSensorReading::for_sensor(record.key_data()))?;

        reading
            .reading
            .map(|raw| record.convert(raw))
            .transpose()
            .map_err(IpmiError::Decode)
    }

    /// Read every sensor in the Sensor Data Repository.
    ///
    /// Failures reading a single sensor are passed to `callback` and do not
    /// stop the walk. Failures of the walk itself are returned. Compact
    /// sensor records are skipped or reported without a value, as chosen
    /// by [`WalkConfig::compact_records`].
    pub fn sensor_entries<F>(&mut self, mut callback: F) -> Result<(), IpmiError<CON::Error>>
    where
        F: FnMut(SensorEntry<CON::Error>),
    {
        let policy = self.config.compact_records;
        let mut walk = self.sdrs();

        while let Some(record) = walk.next() {
            let record = record?;

            match &record.contents {
                RecordContents::FullSensor(full) => {
                    let mut entry = SensorEntry::new(full);

                    match walk.ipmi().read_sensor(full) {
                        Ok(value) => entry.value = value,
                        Err(e) => {
                            log::warn!("Could not read sensor '{}': {e}", entry.name);
                            entry.error = Some(e);
                        }
                    }

                    callback(entry);
                }
                RecordContents::CompactSensor(compact) => match policy {
                    CompactRecordPolicy::Skip => {
                        log::trace!("Skipping compact sensor '{}'", compact.id_string());
                    }
                    CompactRecordPolicy::Report => callback(SensorEntry::new(compact)),
                },
            }
        }

        Ok(())
    }

    /// Call `callback` with the raw bytes of every SEL entry, until it
    /// returns `false` or the log ends.
    pub fn sel_entries_raw<F>(&mut self, mut callback: F) -> Result<(), IpmiError<CON::Error>>
    where
        F: FnMut(&[u8]) -> bool,
    {
        for entry in self.sel() {
            if !callback(&entry?.raw) {
                break;
            }
        }

        Ok(())
    }

    /// Like [`Ipmi::sel_entries_raw`], but with decoded entries. An entry
    /// that cannot be decoded ends the walk with an error.
    pub fn sel_entries<F>(&mut self, mut callback: F) -> Result<(), IpmiError<CON::Error>>
    where
        F: FnMut(&SelEntry) -> bool,
    {
        for entry in self.sel() {
            let entry = entry?.entry().map_err(IpmiError::Decode)?;

            if !callback(&entry) {
                break;
            }
        }

        Ok(())
    }
}
