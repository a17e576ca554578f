use std::collections::VecDeque;

use crate::connection::{IpmiConnection, NetFn, Request, Response};

mod sdr_walk;
mod sel_walk;

#[derive(Debug, Clone, PartialEq)]
pub enum MockError {
    Exhausted,
}

/// Answers requests with scripted responses, in order, and records every
/// request it receives.
#[derive(Default)]
pub struct MockConnection {
    responses: VecDeque<Response>,
    pub requests: Vec<Request>,
}

impl MockConnection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(&mut self, data: impl Into<Vec<u8>>) -> &mut Self {
        self.responses.push_back(Response::new(0x00, data.into()));
        self
    }

    pub fn fail(&mut self, completion_code: u8) -> &mut Self {
        self.responses
            .push_back(Response::new(completion_code, Vec::new()));
        self
    }

    /// (NetFn, command, data) of every request received so far.
    pub fn sent(&self) -> Vec<(NetFn, u8, Vec<u8>)> {
        self.requests
            .iter()
            .map(|r| (r.netfn(), r.cmd(), r.data().to_vec()))
            .collect()
    }
}

impl IpmiConnection for MockConnection {
    type Error = MockError;

    fn send_recv(&mut self, request: &Request) -> Result<Response, Self::Error> {
        self.requests.push(request.clone());
        self.responses.pop_front().ok_or(MockError::Exhausted)
    }
}

/// Answers every request through `handler`, for controllers whose answer
/// depends on what was asked rather than on the order of requests.
pub struct StatefulConnection<F> {
    handler: F,
    pub requests: Vec<Request>,
}

impl<F> StatefulConnection<F>
where
    F: FnMut(&Request) -> Option<Response>,
{
    pub fn new(handler: F) -> Self {
        Self {
            handler,
            requests: Vec::new(),
        }
    }
}

impl<F> IpmiConnection for StatefulConnection<F>
where
    F: FnMut(&Request) -> Option<Response>,
{
    type Error = MockError;

    fn send_recv(&mut self, request: &Request) -> Result<Response, Self::Error> {
        self.requests.push(request.clone());
        (self.handler)(request).ok_or(MockError::Exhausted)
    }
}

fn requested_id(request: &Request) -> u16 {
    let data = request.data();
    u16::from_le_bytes([data[2], data[3]])
}

/// A repository of full sensor records, given as `(id, next id, body)`.
/// Get SDR for id 0 returns the first record.
pub fn sdr_repository(
    records: Vec<(u16, u16, Vec<u8>)>,
) -> StatefulConnection<impl FnMut(&Request) -> Option<Response>> {
    StatefulConnection::new(move |request: &Request| match (request.netfn(), request.cmd()) {
        (NetFn::Storage, 0x22) => Some(Response::new(0x00, vec![0x01, 0x00])),
        (NetFn::Storage, 0x23) => {
            let requested = requested_id(request);
            let (offset, count) = (request.data()[4] as usize, request.data()[5] as usize);

            let (id, next, body) = if requested == 0 {
                records.first()?
            } else {
                records.iter().find(|(id, _, _)| *id == requested)?
            };

            let mut record = id.to_le_bytes().to_vec();
            record.extend_from_slice(&[0x51, 0x01, body.len() as u8]);
            record.extend_from_slice(body);

            let end = (offset + count).min(record.len());
            let mut data = next.to_le_bytes().to_vec();
            data.extend_from_slice(&record[offset..end]);
            Some(Response::new(0x00, data))
        }
        _ => None,
    })
}

/// A non-empty SEL whose Get SEL Entry responses are looked up by the
/// requested id.
pub fn sel_log(
    entries: Vec<(u16, Vec<u8>)>,
) -> StatefulConnection<impl FnMut(&Request) -> Option<Response>> {
    StatefulConnection::new(move |request: &Request| match (request.netfn(), request.cmd()) {
        (NetFn::Storage, 0x40) => Some(Response::new(0x00, sel_info(1, 100_000_000))),
        (NetFn::Storage, 0x42) => Some(Response::new(0x00, vec![0x0A, 0x00])),
        (NetFn::Storage, 0x43) => {
            let requested = requested_id(request);
            let (_, data) = entries.iter().find(|(id, _)| *id == requested)?;
            Some(Response::new(0x00, data.clone()))
        }
        _ => None,
    })
}

/// Body of a temperature sensor reading `0.5 * raw - 10` degrees C.
pub fn full_sensor_body(sensor_number: u8, name: &str) -> Vec<u8> {
    let mut body = vec![
        0x20, 0x00, sensor_number, // owner, LUN 0, number
        0x03, 0x01, // entity: processor #1
        0x7F, 0x68, // initialization, capabilities
        0x01, 0x01, // temperature, threshold
        0x95, 0x7A, 0x95, 0x7A, 0x3F, 0x38, // masks
        0x00, 0x01, 0x00, // unsigned, degrees C
        0x00, // linear
        0x05, 0x00, // m = 5
        0x9C, 0xC0, // b = -100
        0x00, // accuracy, direction
        0xF0, // k2 = -1, k1 = 0
        0x00, // analog characteristics
        0x5A, 0xA0, 0x10, 0xFF, 0x00, // nominal, normal max/min, max, min
        0xC8, 0xBE, 0xB4, 0x00, 0x0A, 0x14, // thresholds
        0x02, 0x03, // hysteresis
        0x00, 0x00, // reserved
        0x00, // oem
    ];

    body.push(0xC0 | name.len() as u8);
    body.extend_from_slice(name.as_bytes());
    body
}

pub fn compact_sensor_body(sensor_number: u8, name: &str) -> Vec<u8> {
    let mut body = vec![
        0x20, 0x00, sensor_number, // owner, LUN 0, number
        0x07, 0x02, // entity: processor #2
        0x63, 0x40, // initialization, capabilities
        0x07, 0x6F, // processor, sensor specific
        0x80, 0x04, 0x00, 0x00, 0x80, 0x04, // masks
        0x00, 0x00, 0x00, // units
        0x00, 0x00, // record sharing
        0x00, 0x00, // hysteresis
        0x00, 0x00, 0x00, // reserved
        0x00, // oem
    ];

    body.push(0xC0 | name.len() as u8);
    body.extend_from_slice(name.as_bytes());
    body
}

/// Script the two Get SDR responses of a single record: the header chunk
/// and the body chunk.
pub fn script_record(
    mock: &mut MockConnection,
    record_id: u16,
    next_id: u16,
    record_type: u8,
    body: &[u8],
) {
    let next = next_id.to_le_bytes();
    let id = record_id.to_le_bytes();

    let header = [next[0], next[1], id[0], id[1], 0x51, record_type, body.len() as u8];
    mock.respond(header.to_vec());

    let mut chunk = next.to_vec();
    chunk.extend_from_slice(body);
    mock.respond(chunk);
}

/// A Get SEL Info response. A `last_add` of 0 means the log is empty.
pub fn sel_info(entries: u16, last_add: u32) -> Vec<u8> {
    let mut data = vec![0x51];
    data.extend_from_slice(&entries.to_le_bytes());
    data.extend_from_slice(&0x1000u16.to_le_bytes());
    data.extend_from_slice(&last_add.to_le_bytes());
    data.extend_from_slice(&0u32.to_le_bytes());
    data.push(0x02);
    data
}

/// A Get SEL Entry response carrying a system event record.
pub fn sel_entry(record_id: u16, next_id: u16, sensor_type: u8, event_data: [u8; 3]) -> Vec<u8> {
    let mut data = next_id.to_le_bytes().to_vec();
    data.extend_from_slice(&record_id.to_le_bytes());
    data.push(0x02);
    data.extend_from_slice(&100_000_000u32.to_le_bytes());
    data.extend_from_slice(&[0x20, 0x00, 0x04, sensor_type, 0x01, 0x6F]);
    data.extend_from_slice(&event_data);
    data
}
