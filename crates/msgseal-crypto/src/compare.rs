use subtle::ConstantTimeEq;

/// Compare two byte strings in time independent of where they first differ.
///
/// Slices of different length compare unequal without inspecting contents;
/// the length of a digest is not secret.
pub fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    a.ct_eq(b).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equal_slices() {
        assert!(constant_time_eq(b"b1bdb9d2", b"b1bdb9d2"));
    }

    #[test]
    fn differing_last_byte() {
        assert!(!constant_time_eq(b"b1bdb9d2", b"b1bdb9d3"));
    }

    #[test]
    fn differing_first_byte() {
        assert!(!constant_time_eq(b"a1bdb9d2", b"b1bdb9d2"));
    }

    #[test]
    fn length_mismatch() {
        assert!(!constant_time_eq(b"b1bd", b"b1bdb9d2"));
        assert!(!constant_time_eq(b"", b"b1"));
    }

    #[test]
    fn empty_slices_are_equal() {
        assert!(constant_time_eq(b"", b""));
    }
}
