use chrono::TimeDelta;

/// Active message ID of [crate::RadioMessage] packets
pub const RADIO_AM_ID: u8 = 0xC0;
/// Active message ID of [crate::SerialMessage] packets
pub const SERIAL_AM_ID: u8 = 0x89;

/// Period of the first sensor's sampling timer, in milliseconds
pub const SENSOR1_TIMER_PERIOD_MILLI: u32 = 1024;
/// Period of the second sensor's sampling timer, in milliseconds
pub const SENSOR2_TIMER_PERIOD_MILLI: u32 = 2048;

/// Payload length of a serial message when no build-time override is given
pub const DEFAULT_MSG_LENGTH: usize = 28;

/// Payload length of a [crate::SerialMessage].
/// Set `MOTE_SENSOR_MSG_LENGTH` when building this crate to override it.
pub const MSG_LENGTH: usize = match option_env!("MOTE_SENSOR_MSG_LENGTH") {
    Some(value) => msg_length_from_str(value),
    None => DEFAULT_MSG_LENGTH,
};

/// Parses a decimal message length at compile time.
/// Panics (a compile error when evaluated in a const context) on empty, non-decimal or zero input.
pub const fn msg_length_from_str(value: &str) -> usize {
    let bytes = value.as_bytes();
    assert!(!bytes.is_empty(), "MOTE_SENSOR_MSG_LENGTH must not be empty");

    let mut length: usize = 0;
    let mut i = 0;
    while i < bytes.len() {
        let digit = bytes[i];
        assert!(
            digit.is_ascii_digit(),
            "MOTE_SENSOR_MSG_LENGTH must be a decimal number"
        );
        length = length * 10 + (digit - b'0') as usize;
        i += 1;
    }
    assert!(length > 0, "MOTE_SENSOR_MSG_LENGTH must be greater than zero");
    length
}

/// The two periodic sampling timers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SensorTimer {
    Sensor1,
    Sensor2,
}

impl SensorTimer {
    pub fn period_millis(&self) -> u32 {
        match self {
            SensorTimer::Sensor1 => SENSOR1_TIMER_PERIOD_MILLI,
            SensorTimer::Sensor2 => SENSOR2_TIMER_PERIOD_MILLI,
        }
    }

    pub fn period(&self) -> TimeDelta {
        TimeDelta::milliseconds(i64::from(self.period_millis()))
    }
}
