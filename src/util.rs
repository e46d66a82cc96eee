//! Contains utility functions that are useful when working with the AD9832


/// Parses an unsigned integer the way the Linux `kstrtou*` helpers do
///
/// Accepts an optional leading `+`, then a `0x`/`0X` prefix for hexadecimal,
/// a leading `0` for octal, or plain decimal digits. A single trailing
/// newline is ignored, as text written to a control file usually has one.
///
/// Returns `None`, if the text is empty, contains anything else, or the value
/// doesn't fit in `u32`.
pub fn parse_u32(text: &str) -> Option<u32> {
    let text = text.strip_suffix('\n').unwrap_or(text);
    let text = text.strip_prefix('+').unwrap_or(text);

    let (digits, radix) = if let Some(hex) = text
        .strip_prefix("0x")
        .or_else(|| text.strip_prefix("0X"))
    {
        (hex, 16)
    }
    else if text.len() > 1 && text.starts_with('0') {
        (&text[1..], 8)
    }
    else {
        (text, 10)
    };

    // `from_str_radix` would take another sign here.
    if digits.is_empty() || !digits.bytes().all(|b| (b as char).is_digit(radix)) {
        return None;
    }

    u32::from_str_radix(digits, radix).ok()
}

/// Like [`parse_u32`], but for values that must fit in `u16`
pub fn parse_u16(text: &str) -> Option<u16> {
    parse_u32(text).and_then(|value| u16::try_from(value).ok())
}

/// Like [`parse_u32`], but for values that must fit in `u8`
pub fn parse_u8(text: &str) -> Option<u8> {
    parse_u32(text).and_then(|value| u8::try_from(value).ok())
}


/// Computes the frequency word for an output frequency
///
/// The AD9832 adds the frequency word to a 32-bit phase accumulator once per
/// MCLK cycle, so the output frequency is `word * mclk / 2^32`. Both
/// arguments are in Hz.
///
/// Returns `None`, if `mclk` is zero or `f_out` is above the Nyquist
/// frequency (`mclk / 2`).
pub fn frequency_word(f_out: u32, mclk: u32) -> Option<u32> {
    if mclk == 0 || f_out > mclk / 2 {
        return None;
    }

    let word = ((f_out as u64) << 32) / mclk as u64;

    // Since `f_out <= mclk / 2`, `word` is at most `2^31`.
    Some(word as u32)
}
