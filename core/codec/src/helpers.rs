use log::{debug, trace};
use std::fmt::Write;

pub fn log_data(name: &str, txt: &str, data: &[u8]) {
    if !data.is_empty() {
        trace!("{} {}: [{}]", name, txt, to_hex(data));
    }
}

pub fn log_frame<A, B, C>(name: &A, txt: &B, data: &C)
where
    A: std::fmt::Display + ?Sized,
    B: std::fmt::Display + ?Sized,
    C: std::fmt::Debug,
{
    debug!("{} {}: {:?}", name, txt, data);
}

/// Space separated upper-case hex, e.g. `4C 53 00`.
pub fn to_hex(data: &[u8]) -> String {
    let mut out = String::with_capacity(data.len() * 3);
    for (idx, byte) in data.iter().enumerate() {
        if idx > 0 {
            out.push(' ');
        }
        let _ = write!(out, "{:02X}", byte);
    }
    out
}
