use std::collections::HashSet;

use crate::{connection::IpmiConnection, error::IpmiError, Ipmi};

use super::{GetSelEntry, GetSelInfo, RecordId, ReserveSel, SelEntryInfo};

#[derive(Debug, Clone, Copy, PartialEq)]
enum State {
    Start,
    Read(RecordId),
    Done,
}

/// Iterates over the raw entries of the System Event Log.
///
/// Fails with [`IpmiError::EmptyLog`] if nothing was ever added to the
/// log. Some controllers transiently report a next id of `0x0000`. Such
/// responses are skipped and the first entry is requested again. The
/// walk ends once more than
/// [`WalkConfig::zero_next_id_tolerance`](crate::config::WalkConfig)
/// of them have arrived. It also ends when an entry points back at one
/// that was already requested. The entry that reports `0xFFFF` as its
/// successor is the last one yielded.
///
/// Any error ends the iteration.
pub struct SelWalk<'ipmi, CON> {
    ipmi: &'ipmi mut Ipmi<CON>,
    state: State,
    zeros: u8,
    visited: HashSet<RecordId>,
}

impl<'ipmi, CON> SelWalk<'ipmi, CON>
where
    CON: IpmiConnection,
{
    pub(crate) fn new(ipmi: &'ipmi mut Ipmi<CON>) -> Self {
        Self {
            ipmi,
            state: State::Start,
            zeros: 0,
            visited: HashSet::new(),
        }
    }

    fn start(&mut self) -> Result<(), IpmiError<CON::Error>> {
        let info = self.ipmi.send_recv(GetSelInfo)?;

        if info.is_empty() {
            log::debug!("SEL is empty");
            return Err(IpmiError::EmptyLog);
        }

        log::debug!("SEL has {} entries", info.entries);

        let reservation = self.ipmi.send_recv(ReserveSel)?;
        log::debug!("Reserved SEL: 0x{:04X}", reservation.value());

        Ok(())
    }
}

impl<CON> Iterator for SelWalk<'_, CON>
where
    CON: IpmiConnection,
{
    type Item = Result<SelEntryInfo, IpmiError<CON::Error>>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let current_id = match self.state {
                State::Done => return None,
                State::Start => {
                    if let Err(e) = self.start() {
                        self.state = State::Done;
                        return Some(Err(e));
                    }

                    self.state = State::Read(RecordId::FIRST);
                    continue;
                }
                State::Read(id) => id,
            };

            self.visited.insert(current_id);

            let entry = match self.ipmi.send_recv(GetSelEntry::new(current_id)) {
                Ok(entry) => entry,
                Err(e) => {
                    log::error!(
                        "Unrecoverable error while reading SEL entry 0x{:04X}: {e:?}",
                        current_id.value()
                    );
                    self.state = State::Done;
                    return Some(Err(e));
                }
            };

            let next_id = entry.next_entry;

            if next_id.is_first() {
                self.zeros = self.zeros.saturating_add(1);
                let tolerance = self.ipmi.config().zero_next_id_tolerance;

                self.state = if self.zeros > tolerance {
                    log::warn!(
                        "Got {} SEL entries without a next id. Stopping iteration.",
                        self.zeros
                    );
                    State::Done
                } else {
                    log::warn!(
                        "Skipping SEL entry without a next id ({}/{tolerance})",
                        self.zeros
                    );
                    State::Read(next_id)
                };

                continue;
            }

            if self.visited.contains(&next_id) {
                log::error!(
                    "SEL entry 0x{:04X} was already read. Stopping iteration.",
                    next_id.value()
                );
                self.state = State::Done;
                return None;
            }

            self.state = if next_id.is_last() {
                State::Done
            } else {
                State::Read(next_id)
            };

            return Some(Ok(entry));
        }
    }
}
