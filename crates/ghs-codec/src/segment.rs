//! Observation segmentation against a negotiated transport unit.

use crate::error::SegmentationError;

/// Control header prefixing every transmitted segment.
///
/// `Solo` is a distinct wire constant from `First`: receivers rely on it to
/// tell one complete single-packet observation from the start of a
/// multi-packet sequence. All wire conversion happens here and nowhere else.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentHeader {
    /// First and only segment.
    Solo,
    /// First of several segments.
    First,
    /// Interior segment carrying its sequence number.
    Continuation(u8),
    /// Final segment carrying its sequence number.
    Last(u8),
}

impl SegmentHeader {
    pub fn to_byte(self) -> u8 {
        match self {
            SegmentHeader::Solo => 0x03,
            SegmentHeader::First => 0x01,
            SegmentHeader::Continuation(seq) => seq.wrapping_shl(2),
            SegmentHeader::Last(seq) => seq.wrapping_shl(2) | 0x02,
        }
    }

    pub fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            0x03 => Some(SegmentHeader::Solo),
            0x01 => Some(SegmentHeader::First),
            b if b & 0b11 == 0b00 => Some(SegmentHeader::Continuation(b >> 2)),
            b if b & 0b11 == 0b10 => Some(SegmentHeader::Last(b >> 2)),
            _ => None,
        }
    }
}

/// One transport-unit-sized chunk of a serialized record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub header: SegmentHeader,
    pub payload: Vec<u8>,
}

impl Segment {
    /// Control byte followed by the payload, ready for the notify channel.
    pub fn to_packet(&self) -> Vec<u8> {
        let mut packet = Vec::with_capacity(1 + self.payload.len());
        packet.push(self.header.to_byte());
        packet.extend_from_slice(&self.payload);
        packet
    }
}

/// Splits `record` into ordered segments of at most `max_payload` bytes.
///
/// A record that fits whole becomes a single `Solo` segment; otherwise the
/// chunks are headed `First`, `Continuation(i)`..., `Last(i)`. Delivery
/// order is the emission order; loss recovery belongs to the transport.
pub fn segment_record(
    record: &[u8],
    max_payload: usize,
) -> Result<Vec<Segment>, SegmentationError> {
    if max_payload == 0 {
        return Err(SegmentationError::NoViableTransportUnit);
    }
    if record.len() <= max_payload {
        return Ok(vec![Segment {
            header: SegmentHeader::Solo,
            payload: record.to_vec(),
        }]);
    }

    let last = record.len().div_ceil(max_payload) - 1;
    Ok(record
        .chunks(max_payload)
        .enumerate()
        .map(|(i, chunk)| {
            let header = if i == 0 {
                SegmentHeader::First
            } else if i == last {
                SegmentHeader::Last(i as u8)
            } else {
                SegmentHeader::Continuation(i as u8)
            };
            Segment {
                header,
                payload: chunk.to_vec(),
            }
        })
        .collect())
}
