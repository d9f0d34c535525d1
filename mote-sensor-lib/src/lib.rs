mod consts;
mod parser;
pub mod radio_message;
pub mod serial_message;

pub use consts::{
    DEFAULT_MSG_LENGTH, MSG_LENGTH, RADIO_AM_ID, SENSOR1_TIMER_PERIOD_MILLI,
    SENSOR2_TIMER_PERIOD_MILLI, SERIAL_AM_ID, SensorTimer, msg_length_from_str,
};
pub use parser::DeserializationError;
pub use radio_message::RadioMessage;
pub use serial_message::{SerialMessage, SerialMessageError};

/// A message payload tagged with the active message ID it travels under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActiveMessage {
    Radio(RadioMessage),
    Serial(SerialMessage),
}

impl ActiveMessage {
    pub fn am_id(&self) -> u8 {
        match self {
            ActiveMessage::Radio(_) => RADIO_AM_ID,
            ActiveMessage::Serial(_) => SERIAL_AM_ID,
        }
    }

    /// Deserializes a payload whose active message ID has already been read by the messaging layer.
    pub fn deserialize_from_bytes(
        am_id: u8,
        data: &[u8],
    ) -> Result<ActiveMessage, DeserializationError> {
        match am_id {
            RADIO_AM_ID => RadioMessage::deserialize_from_bytes(data).map(ActiveMessage::Radio),
            SERIAL_AM_ID => SerialMessage::<MSG_LENGTH>::deserialize_from_bytes(data)
                .map(ActiveMessage::Serial),
            _ => Err(DeserializationError::UnknownActiveMessage(am_id)),
        }
    }

    pub fn serialize_to_bytes(&self) -> Vec<u8> {
        match self {
            ActiveMessage::Radio(message) => message.serialize_to_bytes().to_vec(),
            ActiveMessage::Serial(message) => message.serialize_to_bytes().to_vec(),
        }
    }
}

impl From<RadioMessage> for ActiveMessage {
    fn from(message: RadioMessage) -> Self {
        ActiveMessage::Radio(message)
    }
}

impl From<SerialMessage> for ActiveMessage {
    fn from(message: SerialMessage) -> Self {
        ActiveMessage::Serial(message)
    }
}
