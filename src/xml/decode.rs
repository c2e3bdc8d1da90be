//! Input decoding ahead of the XML engines.
//!
//! The engines read UTF-8 only. Documents in other encodings are transcoded
//! once, choosing the encoding from (in order) a byte order mark, the
//! UTF-16 shape of `<?`, or the `encoding` of the XML declaration.

use std::borrow::Cow;

use encoding_rs::{Encoding, UTF_8, UTF_16BE, UTF_16LE};
use tracing::debug;

use super::EncodingError;

/// How far into the input the XML declaration's `?>` is looked for.
const DECLARATION_SCAN: usize = 256;

/// The input as UTF-8, borrowed when it already is.
///
/// Invalid UTF-8 is passed through untouched so the engines report it with a
/// position; invalid input in any other encoding is an error here.
pub fn to_utf8(input: &[u8]) -> Result<Cow<'_, [u8]>, EncodingError> {
    let (encoding, body) = match Encoding::for_bom(input) {
        Some((encoding, bom_length)) => (encoding, &input[bom_length..]),
        None => {
            let encoding = utf16_without_bom(input)
                .or_else(|| declared_encoding(input).filter(|e| e.is_ascii_compatible()))
                .unwrap_or(UTF_8);
            (encoding, input)
        }
    };
    if encoding == UTF_8 {
        return Ok(Cow::Borrowed(body));
    }

    let (text, had_errors) = encoding.decode_without_bom_handling(body);
    if had_errors {
        return Err(EncodingError {
            encoding: encoding.name(),
        });
    }
    debug!(encoding = encoding.name(), "decoded input to UTF-8");
    Ok(Cow::Owned(text.into_owned().into_bytes()))
}

/// `<?` spelled in UTF-16 code units.
fn utf16_without_bom(input: &[u8]) -> Option<&'static Encoding> {
    match input.get(..4)? {
        [0x3C, 0x00, 0x3F, 0x00] => Some(UTF_16LE),
        [0x00, 0x3C, 0x00, 0x3F] => Some(UTF_16BE),
        _ => None,
    }
}

/// The `encoding` pseudo-attribute of a leading `<?xml ... ?>`.
fn declared_encoding(input: &[u8]) -> Option<&'static Encoding> {
    let head = input.strip_prefix(b"<?xml")?;
    let head = &head[..head.len().min(DECLARATION_SCAN)];
    let end = head.windows(2).position(|pair| pair == b"?>")?;
    let declaration = &head[..end];

    let key = declaration
        .windows(b"encoding".len())
        .position(|window| window == b"encoding")?;
    let rest = declaration[key + b"encoding".len()..].trim_ascii_start();
    let rest = rest.strip_prefix(b"=")?.trim_ascii_start();
    let (&quote, rest) = rest.split_first()?;
    if quote != b'"' && quote != b'\'' {
        return None;
    }
    let label_end = rest.iter().position(|&byte| byte == quote)?;
    Encoding::for_label(&rest[..label_end])
}
