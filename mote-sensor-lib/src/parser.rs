use thiserror::Error;

/// Errors that can occur when deserializing a message record from a byte slice.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum DeserializationError {
    #[error("Invalid record length: expected {expected} bytes, got {actual}")]
    InvalidLength { expected: usize, actual: usize },
    #[error("Invalid array conversion")]
    SliceArrayConversion,
    #[error("Unknown active message id 0x{0:02X}")]
    UnknownActiveMessage(u8),
}

/// Converts a 16-bit value to its 2-byte portable (big-endian) representation.
pub fn u16_to_bytes(value: u16) -> [u8; 2] {
    let mut bytes: [u8; 2] = [0; 2];
    bytes[0] = (value >> 8) as u8;
    bytes[1] = (value & 0xFF) as u8;
    bytes
}

/// Converts 2 bytes in portable (big-endian) order back to a 16-bit value.
pub fn u16_from_bytes(bytes: [u8; 2]) -> u16 {
    let mut value: u16 = 0;
    value |= (bytes[0] as u16) << 8;
    value |= bytes[1] as u16;
    value
}

/// Records are fixed-size, so anything shorter or longer than `expected` is rejected.
pub fn check_length(data: &[u8], expected: usize) -> Result<(), DeserializationError> {
    if data.len() != expected {
        return Err(DeserializationError::InvalidLength {
            expected,
            actual: data.len(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_u16_is_big_endian() {
        assert_eq!(u16_to_bytes(0x1234), [0x12, 0x34]);
        assert_eq!(u16_to_bytes(0x00FF), [0x00, 0xFF]);
        assert_eq!(u16_from_bytes([0xAB, 0xCD]), 0xABCD);
    }

    #[test]
    fn test_u16_roundtrip_conversion() {
        for value in [0, 1, 0x00FF, 0x0100, 0x7FFF, 0x8000, u16::MAX] {
            assert_eq!(value, u16_from_bytes(u16_to_bytes(value)));
        }
    }

    #[test]
    fn test_check_length() {
        assert_eq!(check_length(&[0; 3], 3), Ok(()));
        assert_eq!(
            check_length(&[0; 2], 3),
            Err(DeserializationError::InvalidLength {
                expected: 3,
                actual: 2
            })
        );
        assert_eq!(
            check_length(&[0; 4], 3),
            Err(DeserializationError::InvalidLength {
                expected: 3,
                actual: 4
            })
        );
    }
}
