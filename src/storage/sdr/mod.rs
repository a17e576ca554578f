//! The Sensor Data Repository.

mod get_sdr;
pub use get_sdr::{GetSdr, SdrChunk};

mod reserve;
pub use reserve::{ReservationId, ReserveSdrRepository};

pub mod conversion;
pub mod record;

mod sensor_type;
pub use sensor_type::SensorType;

mod units;
pub use units::Unit;

mod walk;
pub use walk::SdrWalk;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct RecordId(u16);

impl RecordId {
    pub const FIRST: Self = Self(0);
    pub const LAST: Self = Self(0xFFFF);

    pub fn new_raw(value: u16) -> Self {
        Self(value)
    }

    pub fn is_first(&self) -> bool {
        self.0 == Self::FIRST.0
    }

    pub fn is_last(&self) -> bool {
        self.0 == Self::LAST.0
    }

    pub fn value(&self) -> u16 {
        self.0
    }
}
