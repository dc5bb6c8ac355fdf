/// Block check character: XOR of every byte in `bytes`, folded left to right.
/// An empty region has no checksum, which is not the same as a zero one.
pub fn bcc(bytes: &[u8]) -> Option<u8> {
    if bytes.is_empty() {
        None
    } else {
        Some(bytes.iter().fold(0u8, |acc, b| acc ^ b))
    }
}

#[cfg(test)]
mod test {
    use super::bcc;

    #[test]
    fn empty_region() {
        assert_eq!(bcc(&[]), None);
    }

    #[test]
    fn xor_fold() {
        assert_eq!(bcc(&[0x00]), Some(0x00));
        assert_eq!(bcc(&[0xA5]), Some(0xA5));
        assert_eq!(bcc(&[0xFF, 0xFF]), Some(0x00));
        assert_eq!(bcc(&[0x01, 0x02, 0x04, 0x08]), Some(0x0F));
        assert_eq!(bcc(b"LSIS-XGT"), Some(0x63));
    }
}
