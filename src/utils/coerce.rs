// ABOUTME: Lenient string-to-number conversion for command-line values
// Reads the longest numeric prefix and falls back to zero instead of failing

/// Parses the leading integer of `value`, or 0 when there is none.
///
/// Leading whitespace and a single sign are accepted, and underscores may
/// separate digits. Anything after the digits is ignored, so `"1.9"` is 1 and
/// `"12abc"` is 12. Out-of-range values saturate.
pub fn coerce_int(value: &str) -> i64 {
    let mut chars = value.trim_start().chars().peekable();

    let negative = match chars.peek() {
        Some('-') => {
            chars.next();
            true
        }
        Some('+') => {
            chars.next();
            false
        }
        _ => false,
    };

    let mut magnitude: i64 = 0;
    let mut last_was_digit = false;

    while let Some(&c) = chars.peek() {
        if let Some(digit) = c.to_digit(10) {
            let digit = digit as i64;
            magnitude = if negative {
                magnitude.saturating_mul(10).saturating_sub(digit)
            } else {
                magnitude.saturating_mul(10).saturating_add(digit)
            };
            last_was_digit = true;
        } else if c == '_' && last_was_digit {
            last_was_digit = false;
        } else {
            break;
        }
        chars.next();
    }

    magnitude
}

/// Parses the leading decimal float of `value`, or 0.0 when there is none.
///
/// Accepts an optional sign, digits with an optional fractional part, and an
/// optional exponent. `"0.005"` is 0.005, `"1e-3x"` is 0.001, `"abc"` is 0.0.
pub fn coerce_float(value: &str) -> f64 {
    let bytes = value.trim_start().as_bytes();
    let mut prefix = String::new();
    let mut i = 0;

    if let Some(&(sign @ (b'-' | b'+'))) = bytes.first() {
        prefix.push(sign as char);
        i += 1;
    }

    let integer_digits = push_digits(bytes, &mut i, &mut prefix);

    let mut fraction_digits = 0;
    if bytes.get(i) == Some(&b'.') && bytes.get(i + 1).is_some_and(u8::is_ascii_digit) {
        if integer_digits == 0 {
            prefix.push('0');
        }
        prefix.push('.');
        i += 1;
        fraction_digits = push_digits(bytes, &mut i, &mut prefix);
    }

    if integer_digits == 0 && fraction_digits == 0 {
        return 0.0;
    }

    if let Some(b'e' | b'E') = bytes.get(i) {
        let mut exponent = String::from("e");
        let mut j = i + 1;
        if let Some(&(sign @ (b'-' | b'+'))) = bytes.get(j) {
            exponent.push(sign as char);
            j += 1;
        }
        if push_digits(bytes, &mut j, &mut exponent) > 0 {
            prefix.push_str(&exponent);
        }
    }

    prefix.parse().unwrap_or(0.0)
}

/// Copies digits (and underscores between digits) from `bytes[*i..]` into `out`.
fn push_digits(bytes: &[u8], i: &mut usize, out: &mut String) -> usize {
    let mut count = 0;

    while let Some(&b) = bytes.get(*i) {
        if b.is_ascii_digit() {
            out.push(b as char);
            count += 1;
        } else if b == b'_' && count > 0 && bytes.get(*i + 1).is_some_and(u8::is_ascii_digit) {
            // separator only
        } else {
            break;
        }
        *i += 1;
    }

    count
}
