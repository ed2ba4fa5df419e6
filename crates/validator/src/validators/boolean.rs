//! Boolean validators

/// Returns `true` if the box is checked.
#[inline]
#[must_use]
pub const fn checked(input: bool) -> bool {
    input
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checked() {
        assert!(checked(true));
        assert!(!checked(false));
    }
}
