//! Hex encoding helpers shared by the signer service and the default
//! Ed25519 capability (no external hex crate dependency).

/// Render bytes as a lowercase hex string.
pub(crate) fn encode(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{b:02x}")).collect()
}

/// Parse a hex string into bytes. Accepts upper or lower case.
pub(crate) fn decode(hex: &str) -> Result<Vec<u8>, String> {
    if !hex.is_ascii() {
        return Err("hex string must be ASCII".to_string());
    }
    if hex.len() % 2 != 0 {
        return Err("hex string must have even length".to_string());
    }
    (0..hex.len())
        .step_by(2)
        .map(|i| {
            u8::from_str_radix(&hex[i..i + 2], 16)
                .map_err(|e| format!("invalid hex at position {i}: {e}"))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roundtrip() {
        let bytes = vec![0x00, 0x0f, 0xab, 0xff];
        assert_eq!(decode(&encode(&bytes)).unwrap(), bytes);
    }

    #[test]
    fn test_uppercase_accepted() {
        assert_eq!(decode("ABCD").unwrap(), vec![0xab, 0xcd]);
    }

    #[test]
    fn test_odd_length_rejected() {
        assert!(decode("abc").is_err());
    }

    #[test]
    fn test_non_hex_rejected() {
        assert!(decode("zz").is_err());
    }
}
