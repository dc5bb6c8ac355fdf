use crate::{bcc::bcc, error::Error, helpers};

use byteorder::{LittleEndian, WriteBytesExt};
use bytes::BytesMut;
use frame::{Header, COMPANY_ID, HEADER_LEN, IDX_BCC};
use std::io::{self, Cursor, Write};
use tokio_util::codec::Encoder;

/// Writes `header` into the first `HEADER_LEN` bytes of `dst`.
/// Multi-byte fields are little-endian; the BCC over bytes 0..19 is written last.
pub fn write_header(header: &Header, dst: &mut [u8]) -> Result<(), Error> {
    if dst.len() < HEADER_LEN {
        return Err(Error::BufferTooSmall);
    }

    let mut cursor = Cursor::new(&mut dst[..HEADER_LEN]);
    cursor.write_all(COMPANY_ID)?;
    cursor.write_u16::<LittleEndian>(0)?; // reserved
    cursor.write_u16::<LittleEndian>(header.plc_info)?;
    cursor.write_u8(header.cpu.into())?;
    cursor.write_u8(header.source.into())?;
    cursor.write_u16::<LittleEndian>(header.invoke_id)?;
    cursor.write_u16::<LittleEndian>(header.len)?;
    cursor.write_u8(header.position)?;

    let dst = cursor.into_inner();
    let checksum = bcc(&dst[..IDX_BCC]).ok_or_else(|| {
        Error::internal(
            "failed to compute checksum",
            io::Error::new(io::ErrorKind::InvalidData, "empty checksum region"),
        )
    })?;
    dst[IDX_BCC] = checksum;
    Ok(())
}

/// Builds a fresh header buffer.
pub fn make_header(header: &Header) -> Result<[u8; HEADER_LEN], Error> {
    let mut buffer = [0u8; HEADER_LEN];
    write_header(header, &mut buffer)?;
    helpers::log_frame("header", "make", header);
    Ok(buffer)
}

#[derive(Default)]
pub struct HeaderCodec;

impl Encoder<Header> for HeaderCodec {
    type Error = Error;
    fn encode(&mut self, header: Header, dst: &mut BytesMut) -> Result<(), Self::Error> {
        let buffer = make_header(&header)?;
        dst.extend_from_slice(&buffer);
        Ok(())
    }
}
