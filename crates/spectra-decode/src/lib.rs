//! PCM sample decoding: pure byte-slice-to-normalized-double converters.
//!
//! `decode` never allocates more than the requested `count` doubles and
//! never looks past `count * bytes_per_sample(fmt)` bytes of input; the
//! caller (an STFT/CWT engine, or a host feeding one) owns the byte
//! stream and its framing.

mod error;

pub use error::{DecodeError, Result};

/// A recognized PCM byte encoding. `Dbl` is only meaningful to the CWT
/// engine, which accepts raw host-endian doubles as input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PcmFormat {
    U8,
    U16LE,
    U16BE,
    S16LE,
    S16BE,
    S24LE,
    S24BE,
    Dbl,
}

impl PcmFormat {
    /// Parse a case-insensitive ASCII format tag, as used by the engine
    /// construction surface (`(format_tag, capacity)` for STFT, `put_in`
    /// for CWT).
    pub fn parse(tag: &str) -> Result<Self> {
        match tag.to_ascii_lowercase().as_str() {
            "u8" => Ok(PcmFormat::U8),
            "u16le" => Ok(PcmFormat::U16LE),
            "u16be" => Ok(PcmFormat::U16BE),
            "s16le" => Ok(PcmFormat::S16LE),
            "s16be" => Ok(PcmFormat::S16BE),
            "s24le" => Ok(PcmFormat::S24LE),
            "s24be" => Ok(PcmFormat::S24BE),
            "dbl" => Ok(PcmFormat::Dbl),
            other => Err(DecodeError::UnknownFormat(other.to_string())),
        }
    }

    pub fn bytes_per_sample(self) -> usize {
        match self {
            PcmFormat::U8 => 1,
            PcmFormat::U16LE | PcmFormat::U16BE | PcmFormat::S16LE | PcmFormat::S16BE => 2,
            PcmFormat::S24LE | PcmFormat::S24BE => 3,
            PcmFormat::Dbl => 8,
        }
    }
}

/// Decode `count` samples of `fmt` from the front of `bytes` into
/// normalized doubles in `[-1.0, 1.0)`.
pub fn decode(fmt: PcmFormat, bytes: &[u8], count: usize) -> Result<Vec<f64>> {
    let bps = fmt.bytes_per_sample();
    let need = count * bps;
    if bytes.len() < need {
        return Err(DecodeError::ShortInput {
            need,
            got: bytes.len(),
            count,
        });
    }

    let mut out = Vec::with_capacity(count);
    for chunk in bytes[..need].chunks_exact(bps) {
        out.push(decode_one(fmt, chunk));
    }
    Ok(out)
}

fn decode_one(fmt: PcmFormat, b: &[u8]) -> f64 {
    match fmt {
        PcmFormat::U8 => (b[0] as f64 - 128.0) / 128.0,
        PcmFormat::U16LE => (u16::from_le_bytes([b[0], b[1]]) as f64 - 32768.0) / 32768.0,
        PcmFormat::U16BE => (u16::from_be_bytes([b[0], b[1]]) as f64 - 32768.0) / 32768.0,
        PcmFormat::S16LE => i16::from_le_bytes([b[0], b[1]]) as f64 / 32768.0,
        PcmFormat::S16BE => i16::from_be_bytes([b[0], b[1]]) as f64 / 32768.0,
        PcmFormat::S24LE => decode_s24(b[0], b[1], b[2]),
        PcmFormat::S24BE => decode_s24(b[2], b[1], b[0]),
        PcmFormat::Dbl => f64::from_le_bytes([b[0], b[1], b[2], b[3], b[4], b[5], b[6], b[7]]),
    }
}

/// Combine three little-endian-ordered bytes (lsb, mid, msb) into the
/// upper 24 bits of a signed 32-bit integer, then normalize. Placing the
/// most significant input byte at bit 31 sign-extends the 24-bit value
/// for free when the 32-bit pattern is reinterpreted as signed.
fn decode_s24(lsb: u8, mid: u8, msb: u8) -> f64 {
    let bits = u32::from_le_bytes([0, lsb, mid, msb]);
    (bits as i32) as f64 / 2147483648.0
}
