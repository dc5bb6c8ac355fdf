use crate::{error::Error, header::make_header, helpers};

use frame::{CpuType, Header, DEFAULT_INVOKE_ID, DEFAULT_PLC_INFO, HEADER_LEN, MAX_DATA_LEN};
use std::convert::TryInto;
use std::fmt::Display;

fn check_length<L>(length: L) -> Result<u16, Error>
where
    L: TryInto<u16> + Display + Copy,
{
    length.try_into().map_err(|_| {
        Error::InvalidArgument(format!(
            "length {} must fit into 0..={}",
            length, MAX_DATA_LEN
        ))
    })
}

/// Builds a client header that declares `length` bytes of payload.
/// Negative lengths and lengths above `MAX_DATA_LEN` are rejected.
pub fn client_header<L>(
    cpu: CpuType,
    length: L,
    position: u8,
    invoke_id: u16,
    plc_info: u16,
) -> Result<[u8; HEADER_LEN], Error>
where
    L: TryInto<u16> + Display + Copy,
{
    let len = check_length(length)?;
    let header = Header::client(cpu, len, position)
        .with_invoke_id(invoke_id)
        .with_plc_info(plc_info);
    make_header(&header)
}

/// Builds a client header followed by `payload`. Works with `Vec<u8>`,
/// arrays and slices alike.
pub fn client_packet<P>(
    cpu: CpuType,
    payload: P,
    position: u8,
    invoke_id: u16,
    plc_info: u16,
) -> Result<Vec<u8>, Error>
where
    P: AsRef<[u8]>,
{
    let payload = payload.as_ref();
    let header = client_header(cpu, payload.len(), position, invoke_id, plc_info)?;

    let mut packet = Vec::with_capacity(HEADER_LEN + payload.len());
    packet.extend_from_slice(&header);
    packet.extend_from_slice(payload);

    helpers::log_data("packet", "build", &packet);
    Ok(packet)
}

/// Client packet parameters with the protocol defaults filled in.
#[derive(Debug, Clone)]
pub struct PacketBuilder<'a> {
    cpu: CpuType,
    position: u8,
    invoke_id: u16,
    plc_info: u16,
    payload: Option<&'a [u8]>,
}

impl<'a> Default for PacketBuilder<'a> {
    fn default() -> PacketBuilder<'a> {
        PacketBuilder::new(CpuType::default())
    }
}

impl<'a> PacketBuilder<'a> {
    pub fn new(cpu: CpuType) -> PacketBuilder<'a> {
        PacketBuilder {
            cpu,
            position: 0,
            invoke_id: DEFAULT_INVOKE_ID,
            plc_info: DEFAULT_PLC_INFO,
            payload: None,
        }
    }

    pub fn position(mut self, position: u8) -> Self {
        self.position = position;
        self
    }

    pub fn invoke_id(mut self, invoke_id: u16) -> Self {
        self.invoke_id = invoke_id;
        self
    }

    pub fn plc_info(mut self, plc_info: u16) -> Self {
        self.plc_info = plc_info;
        self
    }

    pub fn payload(mut self, payload: &'a [u8]) -> Self {
        self.payload = Some(payload);
        self
    }

    pub fn build_header<L>(&self, length: L) -> Result<[u8; HEADER_LEN], Error>
    where
        L: TryInto<u16> + Display + Copy,
    {
        client_header(
            self.cpu,
            length,
            self.position,
            self.invoke_id,
            self.plc_info,
        )
    }

    pub fn build(&self) -> Result<Vec<u8>, Error> {
        let payload = self.payload.ok_or(Error::MissingPayload)?;
        client_packet(
            self.cpu,
            payload,
            self.position,
            self.invoke_id,
            self.plc_info,
        )
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::bcc::bcc;
    use frame::{
        FrameSource, COMPANY_ID, IDX_BCC, IDX_COMPANY_ID, IDX_CPU_INFO, IDX_INVOKE_ID, IDX_LENGTH,
        IDX_PLC_INFO, IDX_POSITION, IDX_RESERVED, IDX_SOURCE,
    };

    const CONTROL_EMPTY: [u8; HEADER_LEN] = [
        0x4C, 0x53, 0x49, 0x53, 0x2D, 0x58, 0x47, 0x54, 0x00, 0x00, 0x00, 0x00, 0xA0, 0x33, 0x01,
        0x00, 0x00, 0x00, 0x00, 0xF1,
    ];

    fn read_u16(buffer: &[u8], idx: usize) -> u16 {
        u16::from_le_bytes([buffer[idx], buffer[idx + 1]])
    }

    #[test]
    fn empty_packet() {
        let packet = client_packet(CpuType::Xgk, Vec::<u8>::new(), 0, 1, 0).unwrap();
        assert_eq!(packet, CONTROL_EMPTY);
    }

    #[test]
    fn header_only() {
        let header = client_header(CpuType::Xgk, 0, 0, 1, 0).unwrap();
        assert_eq!(header, CONTROL_EMPTY);
    }

    #[test]
    fn packet_with_payload() {
        let packet = client_packet(CpuType::Xgk, [0x01u8, 0x02, 0x03], 0, 1, 0).unwrap();
        assert_eq!(packet.len(), 23);
        assert_eq!(&packet[HEADER_LEN..], &[0x01, 0x02, 0x03]);
        assert_eq!(read_u16(&packet, IDX_LENGTH), 0x0003);
        assert_eq!(packet[IDX_BCC], 0xF2);
    }

    #[test]
    fn vec_and_array_payloads_match() {
        let data = [0x54u8, 0x00, 0x02, 0x00, 0x00, 0x00, 0x01, 0x00];
        let from_array = client_packet(CpuType::Xgi, data, 3, 0x10, 0x20).unwrap();
        let from_vec = client_packet(CpuType::Xgi, data.to_vec(), 3, 0x10, 0x20).unwrap();
        let from_slice = client_packet(CpuType::Xgi, &data[..], 3, 0x10, 0x20).unwrap();
        assert_eq!(from_array, from_vec);
        assert_eq!(from_array, from_slice);
        assert_eq!(&from_array[HEADER_LEN..], &data[..]);
    }

    #[test]
    fn packet_header_matches_header_only() {
        let payload = vec![0xEEu8; 300];
        let packet = client_packet(CpuType::Xgr, &payload, 7, 0xABCD, 0x0102).unwrap();
        let header = client_header(CpuType::Xgr, payload.len(), 7, 0xABCD, 0x0102).unwrap();
        assert_eq!(packet.len(), HEADER_LEN + 300);
        assert_eq!(&packet[..HEADER_LEN], &header[..]);
        assert_eq!(read_u16(&packet, IDX_LENGTH), 300);
    }

    #[test]
    fn fields_and_checksum() {
        let cpus = [CpuType::Xgk, CpuType::Xgi, CpuType::Xgr];
        let ids = [0u16, 1, 0x00FF, 0xFFFF];
        for cpu in cpus {
            for id in ids {
                let header = client_header(cpu, 0xFFFFu32, 0xFF, id, !id).unwrap();
                assert_eq!(&header[IDX_COMPANY_ID..8], COMPANY_ID);
                assert_eq!(&header[IDX_RESERVED..IDX_RESERVED + 2], &[0, 0]);
                assert_eq!(read_u16(&header, IDX_PLC_INFO), !id);
                assert_eq!(header[IDX_CPU_INFO], u8::from(cpu));
                assert_eq!(header[IDX_SOURCE], u8::from(FrameSource::Client));
                assert_eq!(read_u16(&header, IDX_INVOKE_ID), id);
                assert_eq!(read_u16(&header, IDX_LENGTH), 0xFFFF);
                assert_eq!(header[IDX_POSITION], 0xFF);
                assert_eq!(Some(header[IDX_BCC]), bcc(&header[..IDX_BCC]));
            }
        }
    }

    #[test]
    fn deterministic() {
        let first = client_packet(CpuType::Xgi, b"RSS", 1, 42, 0).unwrap();
        let second = client_packet(CpuType::Xgi, b"RSS", 1, 42, 0).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn reject_invalid_length() {
        let res = client_header(CpuType::Xgk, -1i32, 0, 1, 0);
        assert!(matches!(res, Err(Error::InvalidArgument(_))));

        let res = client_header(CpuType::Xgk, MAX_DATA_LEN + 1, 0, 1, 0);
        assert!(matches!(res, Err(Error::InvalidArgument(_))));

        let res = client_header(CpuType::Xgk, i64::MIN, 0, 1, 0);
        assert!(matches!(res, Err(Error::InvalidArgument(_))));

        let res = client_header(CpuType::Xgk, MAX_DATA_LEN, 0, 1, 0);
        assert!(res.is_ok());
    }

    #[test]
    fn reject_oversized_payload() {
        let payload = vec![0u8; MAX_DATA_LEN + 1];
        let res = client_packet(CpuType::Xgk, &payload, 0, 1, 0);
        assert!(matches!(res, Err(Error::InvalidArgument(_))));
    }

    #[test]
    fn builder_defaults() {
        let packet = PacketBuilder::default().payload(&[]).build().unwrap();
        assert_eq!(packet, CONTROL_EMPTY);

        let header = PacketBuilder::new(CpuType::Xgk).build_header(0).unwrap();
        assert_eq!(header, CONTROL_EMPTY);
    }

    #[test]
    fn builder_parameters() {
        let payload = [0x01u8, 0x02];
        let packet = PacketBuilder::new(CpuType::Xgr)
            .position(2)
            .invoke_id(0x0203)
            .plc_info(0x0405)
            .payload(&payload)
            .build()
            .unwrap();
        let control = client_packet(CpuType::Xgr, payload, 2, 0x0203, 0x0405).unwrap();
        assert_eq!(packet, control);
    }

    #[test]
    fn builder_missing_payload() {
        let res = PacketBuilder::new(CpuType::Xgi).build();
        assert!(matches!(res, Err(Error::MissingPayload)));
    }
}
