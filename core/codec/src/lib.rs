pub mod bcc;
pub mod client;
pub mod error;
pub mod header;
pub mod helpers;
pub mod packet;

pub use client::{ClientCodec, Request};
pub use error::{Error, Result};
pub use header::{make_header, write_header, HeaderCodec};
pub use packet::{client_header, client_packet, PacketBuilder};
