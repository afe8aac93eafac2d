//! # Permissive Numeric Literal Scanning
//!
//! A cell counts as numeric when it *starts* with a floating point literal,
//! in the same sense as C's `strtof`:
//!
//! * optional leading whitespace;
//! * an optional sign;
//! * then one of:
//!   * decimal digits, with an optional fraction and an optional exponent;
//!   * a hex float, ``0x1.8p3``;
//!   * ``inf`` / ``infinity`` / ``nan`` / ``nan(...)``, ignoring case.
//!
//! Anything after the literal is ignored, so ``"3.5kg"`` is numeric.
//!
//! Decimal and special literals are parsed with `fast_float`, which
//! reports how many bytes it consumed.

/// Whitespace as understood by C's `isspace`.
fn is_c_space(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | b'\x0b' | b'\x0c' | b'\r')
}

fn starts_with_ignore_case(
    bytes: &[u8],
    pattern: &[u8],
) -> bool {
    bytes.len() >= pattern.len() && bytes[..pattern.len()].eq_ignore_ascii_case(pattern)
}

fn count_while(
    bytes: &[u8],
    from: usize,
    pred: fn(&u8) -> bool,
) -> usize {
    bytes
        .get(from..)
        .map_or(0, |tail| tail.iter().take_while(|&b| pred(b)).count())
}

/// Length of an exponent suffix (``e-7``, ``P+3``); 0 if there is no complete one.
fn scan_exponent(
    bytes: &[u8],
    marker: u8,
) -> usize {
    match bytes.first() {
        Some(b) if b.eq_ignore_ascii_case(&marker) => {}
        _ => return 0,
    }
    let sign = usize::from(matches!(bytes.get(1), Some(b'+' | b'-')));
    let digits = count_while(bytes, 1 + sign, u8::is_ascii_digit);
    if digits == 0 { 0 } else { 1 + sign + digits }
}

fn scan_hex(bytes: &[u8]) -> Option<usize> {
    if !starts_with_ignore_case(bytes, b"0x") {
        return None;
    }
    let int_digits = count_while(bytes, 2, u8::is_ascii_hexdigit);
    let mut pos = 2 + int_digits;
    let mut frac_digits = 0;
    if bytes.get(pos) == Some(&b'.') {
        frac_digits = count_while(bytes, pos + 1, u8::is_ascii_hexdigit);
        if int_digits + frac_digits > 0 {
            pos += 1 + frac_digits;
        }
    }
    if int_digits + frac_digits == 0 {
        return None;
    }
    Some(pos + scan_exponent(&bytes[pos..], b'p'))
}

/// Length of a ``(chars)`` payload after a ``nan`` literal ending at `end`.
fn scan_nan_payload(
    bytes: &[u8],
    end: usize,
) -> usize {
    if end < 3 || !bytes[end - 3..end].eq_ignore_ascii_case(b"nan") {
        return 0;
    }
    if bytes.get(end) != Some(&b'(') {
        return 0;
    }
    let body = count_while(bytes, end + 1, |b| b.is_ascii_alphanumeric() || *b == b'_');
    if bytes.get(end + 1 + body) == Some(&b')') {
        2 + body
    } else {
        0
    }
}

/// Locate the leading literal; returns its `(start, end)` byte range.
fn scan_literal(bytes: &[u8]) -> Option<(usize, usize)> {
    let start = bytes.iter().take_while(|b| is_c_space(**b)).count();
    let sign = usize::from(matches!(bytes.get(start), Some(b'+' | b'-')));
    if let Some(len) = scan_hex(&bytes[start + sign..]) {
        return Some((start, start + sign + len));
    }
    let (_, len) = fast_float::parse_partial::<f64, _>(&bytes[start..]).ok()?;
    let end = start + len;
    Some((start, end + scan_nan_payload(bytes, end)))
}

/// Returns the leading numeric literal of `cell`, without leading whitespace.
///
/// ## Returns
/// `None` when the cell does not start with a numeric literal;
/// this is how missing / categorical cells are detected.
pub fn numeric_prefix(cell: &str) -> Option<&str> {
    // The scanned range only spans ASCII bytes, so the bounds are char boundaries.
    scan_literal(cell.as_bytes()).map(|(start, end)| &cell[start..end])
}

fn hex_value(digits: &str) -> f64 {
    let bytes = digits.as_bytes();
    let mut mantissa = 0.0f64;
    let mut exp: i32 = 0;
    let mut seen_point = false;
    let mut pos = 2;
    while let Some(&b) = bytes.get(pos) {
        match b {
            b'.' => seen_point = true,
            b'p' | b'P' => break,
            _ => {
                mantissa = mantissa * 16.0 + f64::from((b as char).to_digit(16).unwrap_or(0));
                if seen_point {
                    exp = exp.saturating_sub(4);
                }
            }
        }
        pos += 1;
    }
    if pos < bytes.len() {
        let suffix = &digits[pos + 1..];
        let p = suffix.parse::<i32>().unwrap_or(if suffix.starts_with('-') {
            i32::MIN
        } else {
            i32::MAX
        });
        exp = exp.saturating_add(p);
    }
    mantissa * 2f64.powi(exp)
}

/// Parse the leading numeric literal of `cell`.
///
/// Out-of-range literals saturate to infinity rather than failing.
pub fn parse_numeric_prefix(cell: &str) -> Option<f64> {
    numeric_prefix(cell).map(literal_value)
}

/// The value of a literal previously returned by [`numeric_prefix`].
pub(crate) fn literal_value(literal: &str) -> f64 {
    let (negative, body) = match literal.as_bytes().first() {
        Some(b'-') => (true, &literal[1..]),
        Some(b'+') => (false, &literal[1..]),
        _ => (false, literal),
    };
    if starts_with_ignore_case(body.as_bytes(), b"0x") {
        let magnitude = hex_value(body);
        return if negative { -magnitude } else { magnitude };
    }
    fast_float::parse_partial::<f64, _>(literal).map_or(f64::NAN, |(value, _)| value)
}
