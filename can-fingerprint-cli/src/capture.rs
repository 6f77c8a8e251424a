//! Capture file parsing
//!
//! Reads candump-format text captures and reduces each frame to the
//! (address, payload length) observation the matcher consumes. Payload bytes
//! are counted, never interpreted.
//!
//! Expected line shape:
//!
//! ```text
//! (1693222731.012345) can0 1A4#DEADBEEF11223344
//! (1693222731.013456) can0 18DAF110#0322F190
//! (1693222731.014567) can0 2C1##311223344556677   <- CAN-FD, flags nibble after ##
//! ```
//!
//! Blank lines and lines starting with `#` are skipped. Malformed frame lines
//! surface as per-line errors so the caller decides whether to abort or skip.

use anyhow::{anyhow, Context, Result};
use can_fingerprint::Observation;
use chrono::{DateTime, TimeZone, Utc};
use std::fs::File;
use std::io::{BufRead, BufReader, Lines};
use std::path::Path;

/// A single capture frame reduced to what fingerprinting needs
#[derive(Debug, Clone, PartialEq)]
pub struct CaptureFrame {
    /// Capture timestamp
    pub timestamp: DateTime<Utc>,
    /// Bus interface name (e.g. "can0")
    pub interface: String,
    /// The observation: address and payload length
    pub observation: Observation,
}

/// Lazy reader over a capture file, yielding one `Result` per frame line
pub struct CaptureReader {
    lines: Lines<BufReader<File>>,
    line_no: usize,
}

impl CaptureReader {
    /// Open a capture file
    pub fn open(path: &Path) -> Result<Self> {
        let file =
            File::open(path).with_context(|| format!("Failed to open capture {:?}", path))?;
        log::info!("Reading capture: {:?}", path);
        Ok(Self {
            lines: BufReader::new(file).lines(),
            line_no: 0,
        })
    }
}

impl Iterator for CaptureReader {
    type Item = Result<CaptureFrame>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let line = match self.lines.next()? {
                Ok(line) => line,
                Err(e) => return Some(Err(e.into())),
            };
            self.line_no += 1;

            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }

            return Some(
                parse_line(trimmed)
                    .with_context(|| format!("Malformed capture line {}", self.line_no)),
            );
        }
    }
}

/// Parse one candump log line into a capture frame
pub fn parse_line(line: &str) -> Result<CaptureFrame> {
    let mut parts = line.split_whitespace();

    let ts_field = parts.next().ok_or_else(|| anyhow!("empty line"))?;
    let timestamp = parse_timestamp(ts_field)?;

    let interface = parts
        .next()
        .ok_or_else(|| anyhow!("missing interface field"))?
        .to_string();

    let frame_field = parts
        .next()
        .ok_or_else(|| anyhow!("missing frame field"))?;
    let observation = parse_frame(frame_field)?;

    Ok(CaptureFrame {
        timestamp,
        interface,
        observation,
    })
}

/// Parse a "(seconds.micros)" timestamp field
fn parse_timestamp(field: &str) -> Result<DateTime<Utc>> {
    let inner = field
        .strip_prefix('(')
        .and_then(|s| s.strip_suffix(')'))
        .ok_or_else(|| anyhow!("timestamp field {:?} not parenthesized", field))?;

    let (secs, frac) = inner.split_once('.').unwrap_or((inner, "0"));
    let secs: i64 = secs
        .parse()
        .map_err(|_| anyhow!("bad timestamp seconds {:?}", inner))?;
    // Fractional part is at most microseconds in candump output
    let micros: u32 = format!("{:0<6}", frac)
        .get(..6)
        .and_then(|s| s.parse().ok())
        .ok_or_else(|| anyhow!("bad timestamp fraction {:?}", inner))?;

    Utc.timestamp_opt(secs, micros * 1000)
        .single()
        .ok_or_else(|| anyhow!("timestamp {:?} out of range", inner))
}

/// Parse an "ID#HEXDATA" (or CAN-FD "ID##FHEXDATA") frame field
fn parse_frame(field: &str) -> Result<Observation> {
    let (id_part, data_part) = field
        .split_once('#')
        .ok_or_else(|| anyhow!("frame field {:?} has no '#' separator", field))?;

    let address = u32::from_str_radix(id_part, 16)
        .map_err(|_| anyhow!("bad frame ID {:?}", id_part))?;

    // CAN-FD frames carry a flags nibble between "##" and the data
    let data_hex = match data_part.strip_prefix('#') {
        Some(fd) => fd.get(1..).unwrap_or(""),
        None => data_part,
    };

    if data_hex.len() % 2 != 0 || !data_hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(anyhow!("bad frame data {:?}", data_part));
    }

    Ok(Observation::new(address, data_hex.len() / 2))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_classic_frame() {
        let frame = parse_line("(1693222731.012345) can0 1A4#DEADBEEF11223344").unwrap();
        assert_eq!(frame.interface, "can0");
        assert_eq!(frame.observation, Observation::new(0x1A4, 8));
        assert_eq!(frame.timestamp.timestamp(), 1693222731);
    }

    #[test]
    fn test_parse_extended_frame() {
        let frame = parse_line("(1693222731.013456) can0 18DAF110#0322F190").unwrap();
        assert_eq!(frame.observation, Observation::new(0x18DAF110, 4));
        assert!(frame.observation.is_extended());
    }

    #[test]
    fn test_parse_fd_frame() {
        // "##3" flags nibble, then 12 data bytes
        let frame =
            parse_line("(1693222731.014567) can1 2C1##3112233445566778899AABBCC").unwrap();
        assert_eq!(frame.observation, Observation::new(0x2C1, 12));
    }

    #[test]
    fn test_parse_empty_payload() {
        let frame = parse_line("(1693222731.0) can0 1A4#").unwrap();
        assert_eq!(frame.observation, Observation::new(0x1A4, 0));
    }

    #[test]
    fn test_malformed_lines() {
        assert!(parse_line("(not-a-ts) can0 1A4#00").is_err());
        assert!(parse_line("1693222731.0 can0 1A4#00").is_err());
        assert!(parse_line("(1693222731.0) can0").is_err());
        assert!(parse_line("(1693222731.0) can0 1A4").is_err());
        assert!(parse_line("(1693222731.0) can0 ZZZ#00").is_err());
        assert!(parse_line("(1693222731.0) can0 1A4#0").is_err());
        assert!(parse_line("(1693222731.0) can0 1A4#GG").is_err());
    }

    #[test]
    fn test_reader_skips_blank_and_comment_lines() {
        use std::io::Write;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("trace.log");
        let mut file = File::create(&path).unwrap();
        writeln!(file, "# exported capture").unwrap();
        writeln!(file).unwrap();
        writeln!(file, "(1693222731.000001) can0 092#1122334455667788").unwrap();
        writeln!(file, "(1693222731.000002) can0 1A4#1122334455667788").unwrap();

        let frames: Vec<_> = CaptureReader::open(&path)
            .unwrap()
            .collect::<Result<_>>()
            .unwrap();
        assert_eq!(frames.len(), 2);
        assert_eq!(frames[0].observation, Observation::new(0x92, 8));
        assert_eq!(frames[1].observation, Observation::new(0x1A4, 8));
    }

    #[test]
    fn test_reader_reports_line_number() {
        use std::io::Write;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("trace.log");
        let mut file = File::create(&path).unwrap();
        writeln!(file, "(1693222731.000001) can0 092#00").unwrap();
        writeln!(file, "garbage line").unwrap();

        let results: Vec<_> = CaptureReader::open(&path).unwrap().collect();
        assert!(results[0].is_ok());
        let err = results[1].as_ref().unwrap_err();
        assert!(format!("{:#}", err).contains("line 2"));
    }
}
