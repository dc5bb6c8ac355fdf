use std::convert::{From, TryFrom};
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone, Copy)]
#[error("unknown wire code 0x{0:02X}")]
pub struct UnknownCode(pub u8);

/// PLC family of the target CPU.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
pub enum CpuType {
    #[default]
    Xgk = 0xA0,
    Xgi = 0xA4,
    Xgr = 0xA8,
}

/// Role of the station that originates a frame.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
pub enum FrameSource {
    #[default]
    Client = 0x33,
    Server = 0x11,
}

impl From<CpuType> for u8 {
    fn from(value: CpuType) -> u8 {
        value as u8
    }
}

impl From<FrameSource> for u8 {
    fn from(value: FrameSource) -> u8 {
        value as u8
    }
}

impl TryFrom<u8> for CpuType {
    type Error = UnknownCode;
    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0xA0 => Ok(CpuType::Xgk),
            0xA4 => Ok(CpuType::Xgi),
            0xA8 => Ok(CpuType::Xgr),
            _ => Err(UnknownCode(value)),
        }
    }
}

impl TryFrom<u8> for FrameSource {
    type Error = UnknownCode;
    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0x33 => Ok(FrameSource::Client),
            0x11 => Ok(FrameSource::Server),
            _ => Err(UnknownCode(value)),
        }
    }
}

impl FromStr for CpuType {
    type Err = ();
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "xgk" => Ok(CpuType::Xgk),
            "xgi" => Ok(CpuType::Xgi),
            "xgr" => Ok(CpuType::Xgr),
            _ => Err(()),
        }
    }
}
