use crate::{error::Error, helpers, packet::client_header};

use bytes::{Bytes, BytesMut};
use frame::{CpuType, DEFAULT_INVOKE_ID, DEFAULT_PLC_INFO, HEADER_LEN};
use tokio_util::codec::Encoder;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    pub cpu: CpuType,
    pub position: u8,
    pub invoke_id: u16,
    pub plc_info: u16,
    pub payload: Bytes,
}

impl Request {
    pub fn new<P: Into<Bytes>>(cpu: CpuType, position: u8, payload: P) -> Request {
        Request {
            cpu,
            position,
            invoke_id: DEFAULT_INVOKE_ID,
            plc_info: DEFAULT_PLC_INFO,
            payload: payload.into(),
        }
    }

    pub fn with_invoke_id(mut self, invoke_id: u16) -> Request {
        self.invoke_id = invoke_id;
        self
    }

    pub fn with_plc_info(mut self, plc_info: u16) -> Request {
        self.plc_info = plc_info;
        self
    }
}

/// Frames client requests for a transport, e.g. `FramedWrite`.
pub struct ClientCodec {
    name: String,
}

impl Default for ClientCodec {
    fn default() -> ClientCodec {
        ClientCodec::new("client")
    }
}

impl ClientCodec {
    pub fn new(name: &str) -> ClientCodec {
        ClientCodec {
            name: name.to_owned(),
        }
    }
}

impl Encoder<Request> for ClientCodec {
    type Error = Error;
    fn encode(&mut self, msg: Request, dst: &mut BytesMut) -> Result<(), Self::Error> {
        let header = client_header(
            msg.cpu,
            msg.payload.len(),
            msg.position,
            msg.invoke_id,
            msg.plc_info,
        )?;

        let start = dst.len();
        dst.reserve(HEADER_LEN + msg.payload.len());
        dst.extend_from_slice(&header);
        dst.extend_from_slice(&msg.payload);

        helpers::log_data(&self.name, "out", &dst[start..]);
        Ok(())
    }
}
