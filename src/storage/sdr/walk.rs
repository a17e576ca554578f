use std::collections::HashSet;

use crate::{
    connection::IpmiConnection,
    cursor::ByteCursor,
    error::{IpmiError, ParseError},
    Ipmi,
};

use super::{
    record::{CommonHeader, Record},
    GetSdr, RecordId, ReservationId, ReserveSdrRepository,
};

#[derive(Debug, Clone, Copy, PartialEq)]
enum State {
    Reserve,
    Read(ReservationId, RecordId),
    Done,
}

/// Iterates over the records of the Sensor Data Repository.
///
/// Each record is read in two parts under a single reservation: the
/// common header, then the record body. Records of types other than
/// Full and Compact sensor records are skipped. Any other error is
/// yielded once and ends the iteration, since the reservation may no
/// longer be valid. A record that points back at one already read ends
/// the iteration.
pub struct SdrWalk<'ipmi, CON> {
    ipmi: &'ipmi mut Ipmi<CON>,
    state: State,
    visited: HashSet<RecordId>,
}

impl<'ipmi, CON> SdrWalk<'ipmi, CON>
where
    CON: IpmiConnection,
{
    pub(crate) fn new(ipmi: &'ipmi mut Ipmi<CON>) -> Self {
        Self {
            ipmi,
            state: State::Reserve,
            visited: HashSet::new(),
        }
    }

    /// The controller handle the walk reads through. Commands sent in
    /// between records must not take a reservation.
    pub(crate) fn ipmi(&mut self) -> &mut Ipmi<CON> {
        self.ipmi
    }

    /// Read the record `record_id`. Returns the decode result together
    /// with the id of the record that follows it.
    fn read_record(
        &mut self,
        reservation: ReservationId,
        record_id: RecordId,
    ) -> Result<(Result<Record, ParseError>, RecordId), IpmiError<CON::Error>> {
        let header_len = CommonHeader::LEN as u8;
        let header_chunk = self.ipmi.send_recv(GetSdr::chunk(
            reservation,
            record_id,
            0,
            header_len,
        ))?;

        let header = CommonHeader::parse(&mut ByteCursor::new(&header_chunk.data))
            .map_err(IpmiError::Decode)?;

        self.visited.insert(header.record_id);

        let mut data = header_chunk.data;
        let mut next_id = header_chunk.next_id;

        if header.payload_length > 0 {
            let body_chunk = self.ipmi.send_recv(GetSdr::chunk(
                reservation,
                header.record_id,
                data.len() as u8,
                header.payload_length,
            ))?;

            next_id = body_chunk.next_id;
            data.extend_from_slice(&body_chunk.data);
        }

        Ok((Record::parse(&data), next_id))
    }
}

impl<CON> Iterator for SdrWalk<'_, CON>
where
    CON: IpmiConnection,
{
    type Item = Result<Record, IpmiError<CON::Error>>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let (reservation, current_id) = match self.state {
                State::Done => return None,
                State::Reserve => match self.ipmi.send_recv(ReserveSdrRepository) {
                    Ok(reservation) => {
                        log::debug!("Reserved SDR repository: 0x{:04X}", reservation.value());
                        self.state = State::Read(reservation, RecordId::FIRST);
                        continue;
                    }
                    Err(e) => {
                        self.state = State::Done;
                        return Some(Err(e));
                    }
                },
                State::Read(reservation, current_id) => (reservation, current_id),
            };

            self.visited.insert(current_id);

            let (record, next_id) = match self.read_record(reservation, current_id) {
                Ok(v) => v,
                Err(e) => {
                    log::error!(
                        "Unrecoverable error while reading SDR record 0x{:04X}: {e:?}",
                        current_id.value()
                    );
                    self.state = State::Done;
                    return Some(Err(e));
                }
            };

            self.state = if next_id.is_last() {
                State::Done
            } else if self.visited.contains(&next_id) {
                log::error!(
                    "SDR record 0x{:04X} was already read. Stopping iteration.",
                    next_id.value()
                );
                State::Done
            } else {
                State::Read(reservation, next_id)
            };

            match record {
                Ok(record) => return Some(Ok(record)),
                Err(ParseError::UnsupportedRecordType(record_type)) => {
                    let skipped: IpmiError<CON::Error> = IpmiError::UnsupportedRecordType {
                        record_type,
                        next_id,
                    };
                    log::warn!(
                        "Skipping SDR record 0x{:04X}: {skipped}",
                        current_id.value()
                    );
                    continue;
                }
                Err(e) => {
                    log::error!(
                        "Could not decode SDR record 0x{:04X}: {e}",
                        current_id.value()
                    );
                    self.state = State::Done;
                    return Some(Err(IpmiError::Decode(e)));
                }
            }
        }
    }
}
