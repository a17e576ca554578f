//! App NetFn commands.

mod get_device_id;
pub use get_device_id::{DeviceId, GetDeviceId};
