use crate::types::record::BYTE_CHANNELS;

// Examples of the two raw-data shapes:
// packed:     "3E420300390003FF"
// token list: "62 66 3 0 57 0 3 255"
/// Expands a raw data field into exactly 8 optional byte channels.
///
/// The shape is auto-detected: a field with internal whitespace is a
/// space-separated token list (each token a decimal number), a single token
/// is the legacy packed format (adjacent character pairs, hex). In both
/// shapes a missing or unparsable position is `None` — never zero — and the
/// result always has exactly 8 slots: extra bytes are discarded, short
/// payloads are padded with `None`.
pub fn split(raw_data: &str) -> [Option<f64>; BYTE_CHANNELS] {
    let mut bytes: [Option<f64>; BYTE_CHANNELS] = [None; BYTE_CHANNELS];

    let trimmed: &str = raw_data.trim();
    if trimmed.is_empty() {
        return bytes;
    }

    if trimmed.split_whitespace().nth(1).is_some() {
        // token list: up to the first 8 tokens, parsed as decimal numbers
        for (slot, token) in bytes.iter_mut().zip(trimmed.split_whitespace()) {
            *slot = token.parse::<f64>().ok().filter(|v| v.is_finite());
        }
    } else {
        // packed: character pairs as hex byte values, positions past the
        // end of the token stay None
        let chars: Vec<char> = trimmed.chars().collect();
        for (i, slot) in bytes.iter_mut().enumerate() {
            let start: usize = i * 2;
            if start >= chars.len() {
                break;
            }
            let end: usize = (start + 2).min(chars.len());
            let pair: String = chars[start..end].iter().collect();
            *slot = u8::from_str_radix(&pair, 16).ok().map(f64::from);
        }
    }

    bytes
}
