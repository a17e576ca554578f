use super::*;

use crate::{
    config::{CompactRecordPolicy, WalkConfig},
    connection::CompletionErrorCode,
    storage::sdr::{
        record::{FullSensorRecord, Record, RecordContents},
        RecordId,
    },
    Ipmi, IpmiError, SensorRecord,
};

#[test]
fn two_full_records() {
    let mut mock = MockConnection::new();
    mock.respond([0x34, 0x12]);
    script_record(&mut mock, 0x0000, 0x0005, 0x01, &full_sensor_body(0x30, "CPU Temp"));
    script_record(&mut mock, 0x0005, 0xFFFF, 0x01, &full_sensor_body(0x31, "DIMM Temp"));

    let mut ipmi = Ipmi::new(&mut mock);
    let records: Vec<_> = ipmi.sdrs().collect::<Result<_, _>>().unwrap();

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].sensor_id().as_str(), "CPU Temp");
    assert_eq!(records[1].sensor_id().as_str(), "DIMM Temp");
    assert_eq!(records[1].id(), RecordId::new_raw(0x0005));
    assert!(records.iter().all(|r| r.full_sensor().is_some()));

    let sent = mock.sent();
    assert_eq!(sent.len(), 5);
    assert_eq!(sent[0], (NetFn::Storage, 0x22, vec![]));
    assert_eq!(
        sent[1],
        (NetFn::Storage, 0x23, vec![0x34, 0x12, 0x00, 0x00, 0x00, 0x05])
    );

    let body_len = full_sensor_body(0x31, "DIMM Temp").len() as u8;
    assert_eq!(
        sent[4],
        (
            NetFn::Storage,
            0x23,
            vec![0x34, 0x12, 0x05, 0x00, 0x05, body_len]
        )
    );
}

#[test]
fn unsupported_record_is_skipped() {
    let mut mock = MockConnection::new();
    mock.respond([0x01, 0x00]);
    script_record(&mut mock, 0x0000, 0x0002, 0x12, &[0x20, 0x00, 0x00]);
    script_record(&mut mock, 0x0002, 0xFFFF, 0x01, &full_sensor_body(0x30, "CPU Temp"));

    let mut ipmi = Ipmi::new(&mut mock);
    let records: Vec<_> = ipmi.sdrs().collect::<Result<_, _>>().unwrap();

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].id(), RecordId::new_raw(0x0002));
    assert_eq!(records[0].sensor_number(), 0x30);
}

#[test]
fn completion_code_ends_walk() {
    let mut mock = MockConnection::new();
    mock.respond([0x01, 0x00]);
    mock.fail(0xC5);

    let mut ipmi = Ipmi::new(&mut mock);
    let mut walk = ipmi.sdrs();

    let error = walk.next().unwrap().unwrap_err();
    assert_eq!(
        error.completion_code(),
        Some(CompletionErrorCode::ReservationCancelledOrInvalidId)
    );
    assert!(walk.next().is_none());
}

#[test]
fn connection_error_ends_walk() {
    let mut ipmi = Ipmi::new(MockConnection::new());
    let mut walk = ipmi.sdrs();

    assert_eq!(
        walk.next(),
        Some(Err(IpmiError::Connection(MockError::Exhausted)))
    );
    assert!(walk.next().is_none());
}

#[test]
fn duplicate_record_id_stops() {
    let mut mock = MockConnection::new();
    mock.respond([0x01, 0x00]);
    script_record(&mut mock, 0x0000, 0x0000, 0x01, &full_sensor_body(0x30, "CPU Temp"));

    let mut ipmi = Ipmi::new(&mut mock);
    assert_eq!(ipmi.sdrs().count(), 1);
}

#[test]
fn record_cycle_stops() {
    let mut repository = sdr_repository(vec![
        (0x0001, 0x0002, full_sensor_body(0x30, "CPU Temp")),
        (0x0002, 0x0001, full_sensor_body(0x31, "DIMM Temp")),
    ]);

    let mut ipmi = Ipmi::new(&mut repository);
    let records: Vec<_> = ipmi
        .sdrs()
        .take(50)
        .collect::<Result<_, _>>()
        .unwrap();

    let ids: Vec<_> = records.iter().map(|r| r.id()).collect();
    assert_eq!(ids, vec![RecordId::new_raw(0x0001), RecordId::new_raw(0x0002)]);
    assert_eq!(repository.requests.len(), 5);
}

#[test]
fn sensor_entries_read_full_sensors() {
    let mut mock = MockConnection::new();
    mock.respond([0x01, 0x00]);
    script_record(&mut mock, 0x0000, 0x0001, 0x01, &full_sensor_body(0x30, "CPU Temp"));
    mock.respond([0x5A, 0xC0]);
    script_record(&mut mock, 0x0001, 0x0002, 0x02, &compact_sensor_body(0x52, "CPU2"));
    script_record(&mut mock, 0x0002, 0xFFFF, 0x01, &full_sensor_body(0x31, "Unread"));
    mock.fail(0xCB);

    let mut ipmi = Ipmi::new(&mut mock);
    let mut entries = Vec::new();
    ipmi.sensor_entries(|entry| entries.push(entry)).unwrap();

    assert_eq!(entries.len(), 2);

    let cpu = &entries[0];
    assert_eq!(cpu.name, "CPU Temp");
    assert!((cpu.value.unwrap() - 35.0).abs() < 1e-9);
    assert_eq!(cpu.unit_code, 0x01);
    assert_eq!(cpu.unit_name, "degrees C");
    assert_eq!(cpu.sensor_type_code, 0x01);
    assert_eq!(cpu.sensor_type_name, "Temperature");
    assert_eq!(cpu.entity_instance, 0x01);
    assert!(cpu.error.is_none());

    let unread = &entries[1];
    assert_eq!(unread.name, "Unread");
    assert_eq!(unread.value, None);
    assert_eq!(
        unread.error.as_ref().and_then(|e| e.completion_code()),
        Some(CompletionErrorCode::RequestedDatapointNotPresent)
    );

    let reading_request = &mock.sent()[3];
    assert_eq!(reading_request, &(NetFn::SensorEvent, 0x2D, vec![0x30]));
}

#[test]
fn sensor_entries_can_report_compact_records() {
    let mut mock = MockConnection::new();
    mock.respond([0x01, 0x00]);
    script_record(&mut mock, 0x0000, 0xFFFF, 0x02, &compact_sensor_body(0x52, "CPU2"));

    let config = WalkConfig::default().with_compact_records(CompactRecordPolicy::Report);
    let mut ipmi = Ipmi::with_config(&mut mock, config);

    let mut entries = Vec::new();
    ipmi.sensor_entries(|entry| entries.push(entry)).unwrap();

    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].name, "CPU2");
    assert_eq!(entries[0].value, None);
    assert_eq!(entries[0].sensor_type_name, "Processor");
    assert!(entries[0].error.is_none());
}

#[test]
fn sensor_entries_abort_on_walk_error() {
    let mut mock = MockConnection::new();
    mock.fail(0xC1);

    let mut ipmi = Ipmi::new(&mut mock);
    let result = ipmi.sensor_entries(|_| panic!("no sensors expected"));

    assert!(matches!(
        result,
        Err(IpmiError::Failed {
            completion_code: 0xC1,
            ..
        })
    ));
}

fn cpu_temp_record() -> FullSensorRecord {
    let body = full_sensor_body(0x30, "CPU Temp");
    let mut data = vec![0x00, 0x00, 0x51, 0x01, body.len() as u8];
    data.extend_from_slice(&body);

    let RecordContents::FullSensor(record) = Record::parse(&data).unwrap().contents else {
        panic!("expected a full sensor record");
    };

    record
}

#[test]
fn scanning_enabled_sensor_has_value() {
    let record = cpu_temp_record();

    let mut mock = MockConnection::new();
    mock.respond([0x5A, 0xC0]);

    let mut ipmi = Ipmi::new(&mut mock);
    let value = ipmi.read_sensor(&record).unwrap();
    assert!((value.unwrap() - 35.0).abs() < 1e-9);
}

#[test]
fn scanning_disabled_sensor_has_no_value() {
    let record = cpu_temp_record();

    let mut mock = MockConnection::new();
    mock.respond([0x5A, 0x80]);

    let mut ipmi = Ipmi::new(&mut mock);
    assert_eq!(ipmi.read_sensor(&record), Ok(None));
}
