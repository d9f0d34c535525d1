use anyhow::{Context, Result, anyhow};
use clap::{Parser, Subcommand, command};
use indoc::printdoc;
use mote_sensor_lib::{
    ActiveMessage, MSG_LENGTH, RADIO_AM_ID, RadioMessage, SERIAL_AM_ID, SensorTimer,
    SerialMessage,
};
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the active message IDs, timer periods and serial message length
    Constants,
    /// Encode a radio reading message
    EncodeRadio {
        #[arg(index = 1, value_parser = parse_u8)]
        kind: u8,
        #[arg(index = 2, value_parser = parse_u16)]
        reading: u16,
    },
    /// Decode a hex-encoded radio reading message
    DecodeRadio {
        #[arg(index = 1)]
        hex: String,
    },
    /// Encode a payload into a fixed-length serial message
    EncodeSerial {
        /// Treat the payload as hex instead of UTF-8 text
        #[arg(long)]
        hex: bool,
        #[arg(index = 1)]
        payload: String,
    },
    /// Decode a hex-encoded serial message
    DecodeSerial {
        #[arg(index = 1)]
        hex: String,
    },
    /// Decode a hex-encoded payload received under the given active message ID
    Decode {
        #[arg(long, value_parser = parse_u8)]
        am_id: u8,
        #[arg(index = 1)]
        hex: String,
    },
}

/// Parses a decimal or `0x`-prefixed hexadecimal integer.
fn parse_integer(s: &str) -> Result<u64> {
    let s = s.trim();
    let value = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some(digits) => u64::from_str_radix(digits, 16),
        None => s.parse::<u64>(),
    };
    value.with_context(|| format!("'{}' is not a decimal or 0x-prefixed hex number", s))
}

fn parse_u8(s: &str) -> Result<u8> {
    let value = parse_integer(s)?;
    u8::try_from(value).map_err(|_| anyhow!("{} does not fit in 8 bits", value))
}

fn parse_u16(s: &str) -> Result<u16> {
    let value = parse_integer(s)?;
    u16::try_from(value).map_err(|_| anyhow!("{} does not fit in 16 bits", value))
}

/// Decodes hex input, ignoring whitespace and an optional `0x` prefix.
fn decode_hex(input: &str) -> Result<Vec<u8>> {
    let digits: String = input.split_whitespace().collect();
    let digits = digits
        .strip_prefix("0x")
        .or_else(|| digits.strip_prefix("0X"))
        .unwrap_or(digits.as_str());
    hex::decode(digits).with_context(|| format!("Invalid hex input '{}'", input))
}

/// Renders a serial payload as text, dropping the zero fill at the end of the field.
fn payload_text(data: &[u8]) -> String {
    let end = data.iter().rposition(|&b| b != 0).map_or(0, |i| i + 1);
    String::from_utf8_lossy(&data[..end]).into_owned()
}

fn print_radio_message(message: &RadioMessage) {
    printdoc!(
        r#"
        Radio message (AM 0x{:02X}):
          - kind:    0x{:02X} ({})
          - reading: {} (0x{:04X})
        "#,
        RADIO_AM_ID,
        message.kind,
        message.kind,
        message.reading,
        message.reading,
    );
}

fn print_serial_message(message: &SerialMessage) {
    let text = payload_text(message.data());
    if text.contains(char::REPLACEMENT_CHARACTER) {
        warn!("serial payload is not valid UTF-8, text shown lossily");
    }
    printdoc!(
        r#"
        Serial message (AM 0x{:02X}, {} bytes):
          - data: {}
          - text: {:?}
        "#,
        SERIAL_AM_ID,
        SerialMessage::<MSG_LENGTH>::SIZE,
        hex::encode_upper(message.data()),
        text,
    );
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let cli = Cli::parse();
    debug!(command = ?cli.command, "parsed command line");

    match cli.command {
        Commands::Constants => {
            printdoc!(
                r#"
                Active message IDs:
                  - radio:  0x{:02X}
                  - serial: 0x{:02X}

                Timer periods:
                  - sensor 1: {} ms
                  - sensor 2: {} ms

                Serial message length: {} bytes
                "#,
                RADIO_AM_ID,
                SERIAL_AM_ID,
                SensorTimer::Sensor1.period().num_milliseconds(),
                SensorTimer::Sensor2.period().num_milliseconds(),
                MSG_LENGTH,
            );
        }
        Commands::EncodeRadio { kind, reading } => {
            let message = RadioMessage::new(kind, reading);
            debug!(?message, "encoding radio message");
            println!("{}", hex::encode_upper(message.serialize_to_bytes()));
        }
        Commands::DecodeRadio { hex } => {
            let bytes = decode_hex(&hex)?;
            let message = RadioMessage::deserialize_from_bytes(&bytes)
                .map_err(|e| anyhow!("Failed to decode radio message: {}", e))?;
            debug!(?message, "decoded radio message");
            print_radio_message(&message);
        }
        Commands::EncodeSerial { hex, payload } => {
            let payload_bytes = match hex {
                true => decode_hex(&payload)?,
                false => payload.into_bytes(),
            };
            let message = SerialMessage::<MSG_LENGTH>::from_payload(&payload_bytes)?;
            debug!(payload_len = payload_bytes.len(), "encoding serial message");
            println!("{}", hex::encode_upper(message.serialize_to_bytes()));
        }
        Commands::DecodeSerial { hex } => {
            let bytes = decode_hex(&hex)?;
            let message = SerialMessage::<MSG_LENGTH>::deserialize_from_bytes(&bytes)
                .map_err(|e| anyhow!("Failed to decode serial message: {}", e))?;
            debug!("decoded serial message");
            print_serial_message(&message);
        }
        Commands::Decode { am_id, hex } => {
            let bytes = decode_hex(&hex)?;
            let message = ActiveMessage::deserialize_from_bytes(am_id, &bytes)
                .map_err(|e| anyhow!("Failed to decode payload: {}", e))?;
            debug!(am_id = message.am_id(), "decoded active message");
            match message {
                ActiveMessage::Radio(radio) => print_radio_message(&radio),
                ActiveMessage::Serial(serial) => print_serial_message(&serial),
            }
        }
    }
    Ok(())
}
