//! Byte sanitizer for legacy report files.
//!
//! Report definition files interleave binary structure bytes with embedded
//! readable text. Mapping every control byte to a space turns the file
//! into one long, decodable, whitespace-separated text stream without
//! corrupting the readable spans.

use encoding_rs::UTF_8;

/// Convert raw report bytes into a safe text buffer.
///
/// Every byte that is NUL or an ASCII control character (`0..=31`) becomes
/// a space; all other bytes pass through unchanged. The result is decoded
/// as permissive UTF-8: invalid sequences become replacement characters,
/// never an error.
pub fn sanitize_bytes(bytes: &[u8]) -> String {
    let cleaned: Vec<u8> = bytes
        .iter()
        .map(|&b| if b < 0x20 { b' ' } else { b })
        .collect();

    let (decoded, _, _) = UTF_8.decode(&cleaned);
    decoded.into_owned()
}
