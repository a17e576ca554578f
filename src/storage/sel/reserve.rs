use crate::{
    connection::{IpmiCommand, NetFn, Request},
    error::ParseError,
    storage::sdr::ReservationId,
};

/// Reserve SEL. The reservation id has the same form as the one
/// returned by Reserve SDR Repository.
pub struct ReserveSel;

impl From<ReserveSel> for Request {
    fn from(_: ReserveSel) -> Self {
        Request::new(NetFn::Storage, 0x42, Vec::new())
    }
}

impl IpmiCommand for ReserveSel {
    type Output = ReservationId;

    fn parse_success_response(data: &[u8]) -> Result<Self::Output, ParseError> {
        ReservationId::parse(data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reserve_sel() {
        let request: Request = ReserveSel.into();
        assert_eq!((request.netfn(), request.cmd()), (NetFn::Storage, 0x42));

        assert_eq!(
            ReserveSel::parse_success_response(&[0x01, 0x00]),
            Ok(ReservationId::new_raw(1))
        );
    }
}
