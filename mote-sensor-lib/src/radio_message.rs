use crate::parser::{DeserializationError, check_length, u16_from_bytes, u16_to_bytes};

/// Offset of the `kind` byte
const KIND_OFFSET: usize = 0;
/// Offset of the 2-byte `reading` value
const READING_OFFSET: usize = 1;
/// The size of the reading value in bytes
const READING_SIZE: usize = 2;

/// A single sensor reading sent over the radio. It has the following packed binary format:
///
/// * byte 0: `kind`, a u8 discriminator telling temperature and luminance readings apart
/// * bytes 1-2: `reading`, a u16 in portable (big-endian) byte order
///
/// There is no padding between the fields, so the record is always [RadioMessage::SIZE] bytes.
///
/// The numeric values of `kind` belong to the sending application and are not interpreted here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RadioMessage {
    /// Which physical quantity the reading represents
    pub kind: u8,
    /// The temperature or luminance reading from the sensor
    pub reading: u16,
}

impl RadioMessage {
    /// The size of the serialized record in bytes
    pub const SIZE: usize = READING_OFFSET + READING_SIZE;
    pub const KIND_OFFSET: usize = KIND_OFFSET;
    pub const READING_OFFSET: usize = READING_OFFSET;

    pub fn new(kind: u8, reading: u16) -> Self {
        Self { kind, reading }
    }

    /// Deserializes a [RadioMessage] struct from a byte slice.
    /// See [RadioMessage] for more information about the binary format.
    pub fn deserialize_from_bytes(data: &[u8]) -> Result<RadioMessage, DeserializationError> {
        check_length(data, Self::SIZE)?;

        let kind = data[KIND_OFFSET];
        let reading_slice: [u8; READING_SIZE] = data[READING_OFFSET..READING_OFFSET + READING_SIZE]
            .try_into()
            .map_err(|_| DeserializationError::SliceArrayConversion)?;
        let reading = u16_from_bytes(reading_slice);

        Ok(RadioMessage { kind, reading })
    }

    /// Serializes a [RadioMessage] struct to its fixed-size wire representation.
    pub fn serialize_to_bytes(&self) -> [u8; Self::SIZE] {
        let mut bytes: [u8; Self::SIZE] = [0; Self::SIZE];
        bytes[KIND_OFFSET] = self.kind;
        bytes[READING_OFFSET..READING_OFFSET + READING_SIZE]
            .copy_from_slice(&u16_to_bytes(self.reading));
        bytes
    }
}
