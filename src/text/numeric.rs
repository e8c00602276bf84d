//! Locale-independent integer formatting.

/// Render a signed 64-bit integer as minimal decimal text.
///
/// Port numbers (and anything else serialized into configuration strings)
/// must come out identically on every system, so this never goes through
/// locale-sensitive formatting. The magnitude is computed in unsigned space
/// because `-i64::MIN` is not representable as an `i64`.
pub fn to_decimal_text(n: i64) -> String {
    // 1 sign byte + 19 digits covers the full i64 range.
    let mut buf = [0u8; 20];
    let mut pos = buf.len();

    let mut magnitude = n.unsigned_abs();
    loop {
        pos -= 1;
        buf[pos] = b'0' + (magnitude % 10) as u8;
        magnitude /= 10;
        if magnitude == 0 {
            break;
        }
    }
    if n < 0 {
        pos -= 1;
        buf[pos] = b'-';
    }

    buf[pos..].iter().map(|&b| b as char).collect()
}
