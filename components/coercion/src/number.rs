//! Number to string formatting and numeric-string parsing.
//!
//! Base 10 output follows the ECMAScript `Number::toString` layout using the
//! shortest round-tripping digits from `ryu`. Other bases emit positional
//! digits, switching to an exponential form written in the same base for
//! very large or very small magnitudes.

use core_types::{JsError, JsResult};

/// Digit alphabet shared by every supported radix.
const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Longest positional rendering emitted for a non-decimal radix.
const SCRATCH_LEN: usize = 30;

/// Magnitudes at or above this switch to exponential form.
const EXPONENTIAL_UPPER: f64 = 1e21;

/// Magnitudes below this switch to exponential form.
const EXPONENTIAL_LOWER: f64 = 1e-6;

/// A validated radix in `2..=36`.
///
/// # Examples
///
/// ```
/// use coercion::number::Radix;
///
/// assert_eq!(Radix::new(16).unwrap().get(), 16);
/// assert!(Radix::new(37).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Radix(u32);

impl Radix {
    /// Base 10
    pub const DECIMAL: Radix = Radix(10);

    /// Validate a radix, failing with a `RangeError` outside `2..=36`
    pub fn new(radix: u32) -> JsResult<Self> {
        if (2..=36).contains(&radix) {
            Ok(Radix(radix))
        } else {
            Err(JsError::range_error(
                "toString() radix must be between 2 and 36",
            ))
        }
    }

    /// The numeric base
    pub fn get(self) -> u32 {
        self.0
    }
}

impl Default for Radix {
    fn default() -> Self {
        Radix::DECIMAL
    }
}

/// `Number.prototype.toString(radix)`.
///
/// # Errors
///
/// `RangeError` when `radix` is outside `2..=36`.
///
/// # Examples
///
/// ```
/// use coercion::number::number_to_string;
///
/// assert_eq!(number_to_string(255.0, 16).unwrap(), "ff");
/// assert_eq!(number_to_string(0.5, 2).unwrap(), "0.1");
/// assert_eq!(number_to_string(1e21, 10).unwrap(), "1e+21");
/// ```
pub fn number_to_string(value: f64, radix: u32) -> JsResult<String> {
    Ok(format_number_radix(value, Radix::new(radix)?))
}

/// ToString for numbers in base 10.
pub fn format_number(value: f64) -> String {
    format_number_radix(value, Radix::DECIMAL)
}

/// ToString for numbers in an already validated radix.
pub fn format_number_radix(value: f64, radix: Radix) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 {
            "Infinity".to_string()
        } else {
            "-Infinity".to_string()
        };
    }
    // Covers -0 as well
    if value == 0.0 {
        return "0".to_string();
    }

    let mut out = String::new();
    if value < 0.0 {
        out.push('-');
    }
    let magnitude = value.abs();
    if radix == Radix::DECIMAL {
        write_decimal(&mut out, magnitude);
    } else if !(EXPONENTIAL_LOWER..EXPONENTIAL_UPPER).contains(&magnitude) {
        write_radix_exponential(&mut out, magnitude, radix.get());
    } else {
        write_radix_positional(&mut out, magnitude, radix.get());
    }
    out
}

fn write_decimal(out: &mut String, magnitude: f64) {
    let mut buffer = ryu::Buffer::new();
    let (digits, point) = significant_digits(buffer.format_finite(magnitude));
    let k = digits.len() as i32;
    let n = point;

    if k <= n && n <= 21 {
        out.push_str(&digits);
        out.extend(std::iter::repeat('0').take((n - k) as usize));
    } else if 0 < n && n <= 21 {
        let (int_part, frac_part) = digits.split_at(n as usize);
        out.push_str(int_part);
        out.push('.');
        out.push_str(frac_part);
    } else if -6 < n && n <= 0 {
        out.push_str("0.");
        out.extend(std::iter::repeat('0').take((-n) as usize));
        out.push_str(&digits);
    } else {
        let (first, rest) = digits.split_at(1);
        out.push_str(first);
        if !rest.is_empty() {
            out.push('.');
            out.push_str(rest);
        }
        let exponent = n - 1;
        out.push('e');
        out.push(if exponent < 0 { '-' } else { '+' });
        out.push_str(&exponent.unsigned_abs().to_string());
    }
}

/// Split a finite, non-zero decimal rendering into its significant digits
/// and the position of the decimal point relative to the first digit.
///
/// `"123.45"` gives `("12345", 3)`, `"1.5e-7"` gives `("15", -6)`.
fn significant_digits(repr: &str) -> (String, i32) {
    let (mantissa, exponent) = match repr.find(['e', 'E']) {
        Some(index) => (&repr[..index], repr[index + 1..].parse::<i32>().unwrap_or(0)),
        None => (repr, 0),
    };
    let (int_part, frac_part) = mantissa.split_once('.').unwrap_or((mantissa, ""));

    let all: String = int_part.chars().chain(frac_part.chars()).collect();
    let trimmed_start = all.trim_start_matches('0');
    let leading = all.len() - trimmed_start.len();
    let digits = trimmed_start.trim_end_matches('0').to_string();
    let point = int_part.len() as i32 + exponent - leading as i32;
    (digits, point)
}

fn digit_char(digit: u32) -> char {
    char::from(DIGITS[digit as usize % DIGITS.len()])
}

fn write_radix_positional(out: &mut String, magnitude: f64, radix: u32) {
    let base = f64::from(radix);
    let integer = magnitude.trunc();
    let mut fraction = magnitude - integer;

    // Below 1e21, so the integer part fits comfortably in a u128
    let mut n = integer as u128;
    let mut int_digits = Vec::new();
    loop {
        int_digits.push(digit_char((n % u128::from(radix)) as u32));
        n /= u128::from(radix);
        if n == 0 {
            break;
        }
    }
    int_digits.reverse();

    let mut frac_digits = String::new();
    let budget = SCRATCH_LEN.saturating_sub(int_digits.len() + 1);
    while fraction > 0.0 && frac_digits.len() < budget {
        fraction *= base;
        let digit = fraction.trunc().min(base - 1.0);
        frac_digits.push(digit_char(digit as u32));
        fraction -= digit;
    }

    out.extend(int_digits);
    let frac_digits = frac_digits.trim_end_matches('0');
    if !frac_digits.is_empty() {
        out.push('.');
        out.push_str(frac_digits);
    }
}

fn write_radix_exponential(out: &mut String, magnitude: f64, radix: u32) {
    let base = f64::from(radix);
    let mut exponent = (magnitude.ln() / base.ln()).floor() as i32;
    let mut mantissa = scale_down(magnitude, base, exponent);
    if mantissa >= base {
        mantissa /= base;
        exponent += 1;
    } else if mantissa < 1.0 {
        mantissa *= base;
        exponent -= 1;
    }

    write_radix_positional(out, mantissa, radix);
    out.push('e');
    out.push(if exponent < 0 { '-' } else { '+' });
    write_radix_positional(out, f64::from(exponent.unsigned_abs()), radix);
}

/// `magnitude / base^exponent` in two steps so neither power overflows or
/// underflows for subnormal and near-maximal inputs.
fn scale_down(magnitude: f64, base: f64, exponent: i32) -> f64 {
    let half = exponent / 2;
    magnitude / base.powi(half) / base.powi(exponent - half)
}

/// Parse a numeric string.
///
/// Leading spaces and newlines are skipped and an all-blank string is `0`.
/// After an optional sign, either `Infinity` or a decimal literal
/// (`digits[.digits][e[+-]digits]`, with digits on at least one side of the
/// point) is accepted. Anything else, trailing characters included, is
/// `NaN`.
///
/// # Examples
///
/// ```
/// use coercion::number::parse_number;
///
/// assert_eq!(parse_number(" 42"), 42.0);
/// assert_eq!(parse_number("-1.5e3"), -1500.0);
/// assert_eq!(parse_number(""), 0.0);
/// assert!(parse_number("12px").is_nan());
/// ```
pub fn parse_number(text: &str) -> f64 {
    let trimmed = text.trim_start_matches([' ', '\n']);
    if trimmed.is_empty() {
        return 0.0;
    }

    let (sign, unsigned) = if let Some(rest) = trimmed.strip_prefix('-') {
        (-1.0, rest)
    } else if let Some(rest) = trimmed.strip_prefix('+') {
        (1.0, rest)
    } else {
        (1.0, trimmed)
    };

    if unsigned == "Infinity" {
        return sign * f64::INFINITY;
    }

    match normalize_decimal(unsigned) {
        Some(literal) => sign * literal.parse::<f64>().unwrap_or(f64::NAN),
        None => f64::NAN,
    }
}

/// Validate a decimal literal and rewrite it as `I.FeE`, the shape Rust's
/// float parser accepts unconditionally.
fn normalize_decimal(text: &str) -> Option<String> {
    let (mantissa, exponent) = match text.find(['e', 'E']) {
        Some(index) => (&text[..index], Some(&text[index + 1..])),
        None => (text, None),
    };
    let (int_part, frac_part) = mantissa.split_once('.').unwrap_or((mantissa, ""));

    let all_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
    if int_part.is_empty() && frac_part.is_empty() {
        return None;
    }
    if !all_digits(int_part) || !all_digits(frac_part) {
        return None;
    }

    let exponent = match exponent {
        None => "0",
        Some(exp) => {
            let digits = exp.strip_prefix(['+', '-']).unwrap_or(exp);
            if digits.is_empty() || !all_digits(digits) {
                return None;
            }
            exp
        }
    };

    let int_part = if int_part.is_empty() { "0" } else { int_part };
    let frac_part = if frac_part.is_empty() { "0" } else { frac_part };
    Some(format!("{}.{}e{}", int_part, frac_part, exponent))
}

/// ECMAScript ToUint32: truncate and wrap modulo 2^32; NaN and infinities
/// become 0.
pub fn to_uint32(value: f64) -> u32 {
    if !value.is_finite() {
        return 0;
    }
    value.trunc().rem_euclid(4_294_967_296.0) as u32
}

/// ECMAScript ToInt32: ToUint32 reinterpreted as signed.
pub fn to_int32(value: f64) -> i32 {
    to_uint32(value) as i32
}
