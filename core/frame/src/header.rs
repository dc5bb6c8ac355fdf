use super::info::{CpuType, FrameSource};
use super::{DEFAULT_INVOKE_ID, DEFAULT_PLC_INFO};

/// Field values of an application header. Company ID, reserved bytes and
/// BCC are derived when the header is written.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct Header {
    pub plc_info: u16,
    pub cpu: CpuType,
    pub source: FrameSource,
    pub invoke_id: u16,
    pub len: u16,
    pub position: u8,
}

impl Default for Header {
    fn default() -> Header {
        Header {
            plc_info: DEFAULT_PLC_INFO,
            cpu: CpuType::default(),
            source: FrameSource::Client,
            invoke_id: DEFAULT_INVOKE_ID,
            len: 0,
            position: 0,
        }
    }
}

impl Header {
    pub fn client(cpu: CpuType, len: u16, position: u8) -> Header {
        Header {
            cpu,
            len,
            position,
            ..Header::default()
        }
    }

    pub fn with_invoke_id(mut self, invoke_id: u16) -> Header {
        self.invoke_id = invoke_id;
        self
    }

    pub fn with_plc_info(mut self, plc_info: u16) -> Header {
        self.plc_info = plc_info;
        self
    }
}
