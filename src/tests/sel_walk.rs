use super::*;

use crate::{
    config::WalkConfig,
    storage::sel::{EntryVariant, EventCatalog, RecordId},
    Ipmi, IpmiError,
};

const LAST_ADD: u32 = 100_000_000;

#[test]
fn walks_until_last_entry() {
    let mut mock = MockConnection::new();
    mock.respond(sel_info(2, LAST_ADD));
    mock.respond([0x0A, 0x00]);
    mock.respond(sel_entry(0x0001, 0x0002, 0x08, [0x06, 0x01, 0x00]));
    mock.respond(sel_entry(0x0002, 0xFFFF, 0x08, [0x07, 0xFF, 0xFF]));

    let mut ipmi = Ipmi::new(&mut mock);
    let mut descriptions = Vec::new();

    ipmi.sel_entries(|entry| {
        descriptions.push(entry.description(&EventCatalog::default(), 0));
        true
    })
    .unwrap();

    assert_eq!(
        descriptions,
        vec![
            "Power Supply #0x01 | Config Error: Revision Mismatch | Asserted".to_string(),
            "Power Supply #0x01 | Power Supply Inactive | Asserted".to_string(),
        ]
    );

    let sent = mock.sent();
    assert_eq!(sent[0], (NetFn::Storage, 0x40, vec![]));
    assert_eq!(sent[1], (NetFn::Storage, 0x42, vec![]));
    assert_eq!(
        sent[2],
        (NetFn::Storage, 0x43, vec![0x00, 0x00, 0x00, 0x00, 0x00, 0xFF])
    );
    // The reservation is not used for whole-entry reads
    assert_eq!(
        sent[3],
        (NetFn::Storage, 0x43, vec![0x00, 0x00, 0x02, 0x00, 0x00, 0xFF])
    );
}

#[test]
fn empty_log() {
    let mut mock = MockConnection::new();
    mock.respond(sel_info(0, 0));

    let mut ipmi = Ipmi::new(&mut mock);
    let result = ipmi.sel_entries_raw(|_| panic!("no entries expected"));

    assert_eq!(result, Err(IpmiError::EmptyLog));
    assert_eq!(mock.requests.len(), 1);
}

#[test]
fn two_zero_next_ids_are_tolerated() {
    let mut mock = MockConnection::new();
    mock.respond(sel_info(1, LAST_ADD));
    mock.respond([0x0A, 0x00]);
    mock.respond(sel_entry(0x0000, 0x0000, 0x01, [0; 3]));
    mock.respond(sel_entry(0x0000, 0x0000, 0x01, [0; 3]));
    mock.respond(sel_entry(0x0001, 0xFFFF, 0x01, [0; 3]));

    let mut ipmi = Ipmi::new(&mut mock);
    let mut raw = Vec::new();

    ipmi.sel_entries_raw(|entry| {
        raw.push(entry.to_vec());
        true
    })
    .unwrap();

    assert_eq!(raw.len(), 1);
    assert_eq!(raw[0].len(), 16);
    assert_eq!(&raw[0][..2], &[0x01, 0x00]);
    assert_eq!(mock.requests.len(), 5);
}

#[test]
fn third_zero_next_id_stops() {
    let mut mock = MockConnection::new();
    mock.respond(sel_info(1, LAST_ADD));
    mock.respond([0x0A, 0x00]);
    for _ in 0..3 {
        mock.respond(sel_entry(0x0000, 0x0000, 0x01, [0; 3]));
    }

    let mut ipmi = Ipmi::new(&mut mock);
    let mut calls = 0;

    ipmi.sel_entries_raw(|_| {
        calls += 1;
        true
    })
    .unwrap();

    assert_eq!(calls, 0);
    assert_eq!(mock.requests.len(), 5);
}

#[test]
fn zero_count_spans_the_walk() {
    let mut mock = MockConnection::new();
    mock.respond(sel_info(3, LAST_ADD));
    mock.respond([0x0A, 0x00]);
    mock.respond(sel_entry(0x0000, 0x0000, 0x01, [0; 3]));
    mock.respond(sel_entry(0x0001, 0x0003, 0x01, [0; 3]));
    mock.respond(sel_entry(0x0003, 0x0000, 0x01, [0; 3]));
    mock.respond(sel_entry(0x0004, 0x0009, 0x01, [0; 3]));
    mock.respond(sel_entry(0x0009, 0x0000, 0x01, [0; 3]));

    let mut ipmi = Ipmi::new(&mut mock);
    let ids: Vec<_> = ipmi
        .sel()
        .map(|e| e.unwrap().entry().unwrap().record_id)
        .collect();

    assert_eq!(ids, vec![RecordId::new_raw(0x0001), RecordId::new_raw(0x0004)]);
    assert_eq!(mock.requests.len(), 7);
}

#[test]
fn entry_pointing_back_ends_walk() {
    let mut log = sel_log(vec![
        (0x0000, sel_entry(0x0001, 0x0005, 0x01, [0; 3])),
        (0x0005, sel_entry(0x0005, 0x0000, 0x01, [0; 3])),
    ]);

    let mut ipmi = Ipmi::new(&mut log);
    let ids: Vec<_> = ipmi
        .sel()
        .take(50)
        .map(|e| e.unwrap().entry().unwrap().record_id)
        .collect();

    assert_eq!(ids, vec![RecordId::new_raw(0x0001)]);

    let requested: Vec<_> = log.requests.iter().skip(2).map(requested_id).collect();
    assert_eq!(requested, vec![0x0000, 0x0005, 0x0000]);
}

#[test]
fn zero_tolerance_is_configurable() {
    let mut mock = MockConnection::new();
    mock.respond(sel_info(1, LAST_ADD));
    mock.respond([0x0A, 0x00]);
    mock.respond(sel_entry(0x0000, 0x0000, 0x01, [0; 3]));

    let config = WalkConfig::default().with_zero_next_id_tolerance(0);
    let mut ipmi = Ipmi::with_config(&mut mock, config);

    assert_eq!(ipmi.sel().count(), 0);
    assert_eq!(mock.requests.len(), 3);
}

#[test]
fn callback_stops_walk() {
    let mut mock = MockConnection::new();
    mock.respond(sel_info(2, LAST_ADD));
    mock.respond([0x0A, 0x00]);
    mock.respond(sel_entry(0x0001, 0x0002, 0x01, [0; 3]));
    mock.respond(sel_entry(0x0002, 0xFFFF, 0x01, [0; 3]));

    let mut ipmi = Ipmi::new(&mut mock);
    let mut seen = Vec::new();

    ipmi.sel_entries(|entry| {
        seen.push(entry.record_id);
        false
    })
    .unwrap();

    assert_eq!(seen, vec![RecordId::new_raw(0x0001)]);
    assert_eq!(mock.requests.len(), 3);
}

#[test]
fn completion_code_is_fatal() {
    let mut mock = MockConnection::new();
    mock.respond(sel_info(2, LAST_ADD));
    mock.respond([0x0A, 0x00]);
    mock.respond(sel_entry(0x0001, 0x0002, 0x01, [0; 3]));
    mock.fail(0xC5);

    let mut ipmi = Ipmi::new(&mut mock);
    let mut calls = 0;

    let result = ipmi.sel_entries(|entry| {
        assert!(matches!(entry.variant, EntryVariant::Standard(_)));
        calls += 1;
        true
    });

    assert_eq!(calls, 1);
    assert!(matches!(
        result,
        Err(IpmiError::Failed {
            netfn: NetFn::Storage,
            cmd: 0x43,
            completion_code: 0xC5,
            ..
        })
    ));
}

#[test]
fn oem_id_is_requested_once() {
    let mut mock = MockConnection::new();
    mock.respond(hex::decode("20810523510f983a0001f0").unwrap());

    let mut ipmi = Ipmi::new(&mut mock);
    assert_eq!(ipmi.oem_id(), Ok(15000));
    assert_eq!(ipmi.oem_id(), Ok(15000));

    assert_eq!(mock.sent(), vec![(NetFn::App, 0x01, vec![])]);
}
