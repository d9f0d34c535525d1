use crate::{
    consts::MSG_LENGTH,
    parser::{DeserializationError, check_length},
};
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum SerialMessageError {
    #[error("Payload of {actual} bytes does not fit in a {max}-byte serial message")]
    PayloadTooLong { max: usize, actual: usize },
}

/// A block of bytes sent to the host PC over the serial link.
///
/// The binary format is the `data` field and nothing else: exactly `N` bytes
/// ([MSG_LENGTH] unless named otherwise), with no length prefix and no terminator.
/// A payload shorter than `N` still occupies the whole field, see [SerialMessage::from_payload].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SerialMessage<const N: usize = MSG_LENGTH> {
    data: [u8; N],
}

impl<const N: usize> Default for SerialMessage<N> {
    fn default() -> Self {
        Self { data: [0; N] }
    }
}

impl<const N: usize> SerialMessage<N> {
    /// The size of the serialized record in bytes
    pub const SIZE: usize = N;

    pub fn new(data: [u8; N]) -> Self {
        Self { data }
    }

    /// Builds a message from a payload of at most `N` bytes, zero-filling the rest of the field.
    pub fn from_payload(payload: &[u8]) -> Result<Self, SerialMessageError> {
        if payload.len() > N {
            return Err(SerialMessageError::PayloadTooLong {
                max: N,
                actual: payload.len(),
            });
        }
        let mut data: [u8; N] = [0; N];
        data[..payload.len()].copy_from_slice(payload);
        Ok(Self { data })
    }

    pub fn data(&self) -> &[u8; N] {
        &self.data
    }

    /// Deserializes a [SerialMessage] from a byte slice of exactly `N` bytes.
    pub fn deserialize_from_bytes(data: &[u8]) -> Result<SerialMessage<N>, DeserializationError> {
        check_length(data, N)?;
        let data: [u8; N] = data
            .try_into()
            .map_err(|_| DeserializationError::SliceArrayConversion)?;
        Ok(SerialMessage { data })
    }

    pub fn serialize_to_bytes(&self) -> [u8; N] {
        self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_size_is_msg_length() {
        assert_eq!(SerialMessage::<MSG_LENGTH>::SIZE, MSG_LENGTH);
        assert_eq!(
            SerialMessage::<MSG_LENGTH>::default().serialize_to_bytes().len(),
            MSG_LENGTH
        );
    }

    #[test]
    fn test_size_follows_length_parameter() {
        assert_eq!(SerialMessage::<28>::SIZE, 28);
        assert_eq!(SerialMessage::<28>::default().serialize_to_bytes().len(), 28);
        assert_eq!(SerialMessage::<64>::SIZE, 64);
        assert_eq!(SerialMessage::<1>::SIZE, 1);
    }

    #[test]
    fn test_from_payload_zero_fills() {
        let message = SerialMessage::<8>::from_payload(b"hi").unwrap();
        assert_eq!(
            message.serialize_to_bytes(),
            [b'h', b'i', 0, 0, 0, 0, 0, 0]
        );
    }

    #[test]
    fn test_from_payload_exact_fit() {
        let message = SerialMessage::<4>::from_payload(&[1, 2, 3, 4]).unwrap();
        assert_eq!(message.data(), &[1, 2, 3, 4]);
    }

    #[test]
    fn test_from_payload_too_long() {
        assert_eq!(
            SerialMessage::<4>::from_payload(&[0; 5]),
            Err(SerialMessageError::PayloadTooLong { max: 4, actual: 5 })
        );
    }

    #[test]
    fn test_deserialize_rejects_wrong_length() {
        assert_eq!(
            SerialMessage::<28>::deserialize_from_bytes(&[0; 27]),
            Err(DeserializationError::InvalidLength {
                expected: 28,
                actual: 27
            })
        );
        assert_eq!(
            SerialMessage::<28>::deserialize_from_bytes(&[0; 29]),
            Err(DeserializationError::InvalidLength {
                expected: 28,
                actual: 29
            })
        );
    }

    #[test]
    fn test_serde_roundtrip() {
        let mut payload: [u8; 28] = [0; 28];
        for (i, byte) in payload.iter_mut().enumerate() {
            *byte = (i as u8).wrapping_mul(37) ^ 0xA5;
        }
        let message = SerialMessage::<28>::new(payload);
        let bytes = message.serialize_to_bytes();
        let message_from_bytes = SerialMessage::<28>::deserialize_from_bytes(&bytes).unwrap();
        assert_eq!(message, message_from_bytes);
        assert_eq!(message_from_bytes.data(), &payload);
    }
}
