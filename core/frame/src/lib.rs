pub mod header;
pub mod info;

pub use header::Header;
pub use info::{CpuType, FrameSource, UnknownCode};

pub const HEADER_LEN: usize = 20; // Fixed size of the application header
pub const MAX_DATA_LEN: usize = u16::MAX as usize; // Max. payload length declared by a header
pub const COMPANY_ID: &[u8; 8] = b"LSIS-XGT";

// Field offsets inside the header
pub const IDX_COMPANY_ID: usize = 0;
pub const IDX_RESERVED: usize = 8;
pub const IDX_PLC_INFO: usize = 10;
pub const IDX_CPU_INFO: usize = 12;
pub const IDX_SOURCE: usize = 13;
pub const IDX_INVOKE_ID: usize = 14;
pub const IDX_LENGTH: usize = 16;
pub const IDX_POSITION: usize = 18;
pub const IDX_BCC: usize = 19;

pub const DEFAULT_INVOKE_ID: u16 = 1;
pub const DEFAULT_PLC_INFO: u16 = 0;
