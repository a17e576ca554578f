//! Sensor/Event NetFn commands.

mod get_sensor_reading;
pub use get_sensor_reading::{GetSensorReading, SensorReading, SensorStates, ThresholdStatus};
