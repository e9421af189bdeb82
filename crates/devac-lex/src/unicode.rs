//! Byte-level classification used by the scanner.
//!
//! The scanner works directly on UTF-8 bytes rather than decoded `char`s so
//! that it can apply the exact byte tests the language spec calls for: an
//! identifier may start with an ASCII letter, an underscore, or any leading
//! byte of a multi-byte UTF-8 sequence (`>= 0xE0`, which covers the
//! three-byte lead byte of the Devanagari block). Continuation bytes
//! (`0x80..=0xBF`) and two/four-byte lead bytes don't match that test on
//! their own, so the "continue" predicate below widens it to any byte with
//! the high bit set - otherwise a run like `पूर्णांक` would scan as one
//! single-byte identifier per loop iteration and keyword matching would
//! never see the whole slice.

/// True if `b` may begin an identifier: ASCII letter, underscore, or the
/// leading byte of a multi-byte UTF-8 sequence.
#[inline]
pub fn is_ident_start_byte(b: u8) -> bool {
    b.is_ascii_alphabetic() || b == b'_' || b >= 0xE0
}

/// True if `b` may continue an identifier once started: anything that can
/// start one, an ASCII digit, or a continuation/lead byte of a multi-byte
/// sequence (`>= 0x80`).
#[inline]
pub fn is_ident_continue_byte(b: u8) -> bool {
    is_ident_start_byte(b) || b.is_ascii_digit() || b >= 0x80
}

#[inline]
pub fn is_ascii_digit_byte(b: u8) -> bool {
    b.is_ascii_digit()
}
