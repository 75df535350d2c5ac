/// Parse a Python version from the digits of a tag (e.g., convert `39` into `(3, 9)` and `312`
/// into `(3, 12)`).
///
/// The first digit is the major version and the remaining digits form the minor version. If
/// `minor_optional` is set, a lone major digit (e.g., `3` in `py3`) yields a minor version of `0`.
pub(crate) fn parse_python_version(digits: &str, minor_optional: bool) -> Option<(u8, u8)> {
    let (first, rest) = digits.split_at_checked(1)?;
    let major = first.parse::<u8>().ok()?;
    if rest.is_empty() {
        return minor_optional.then_some((major, 0));
    }
    if !rest.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let minor = rest.parse::<u8>().ok()?;
    Some((major, minor))
}

/// Parse an operating system version pair (e.g., the `2_17` in `manylinux_2_17_x86_64`),
/// returning the remaining suffix.
pub(crate) fn parse_os_version(rest: &str) -> Option<((u16, u16), &str)> {
    let mut parts = rest.splitn(3, '_');
    let major = parse_u16(parts.next()?)?;
    let minor = parse_u16(parts.next()?)?;
    let suffix = parts.next()?;
    Some(((major, minor), suffix))
}

fn parse_u16(s: &str) -> Option<u16> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::{parse_os_version, parse_python_version};

    #[test]
    fn python_version() {
        assert_eq!(parse_python_version("39", false), Some((3, 9)));
        assert_eq!(parse_python_version("312", false), Some((3, 12)));
        assert_eq!(parse_python_version("3", false), None);
        assert_eq!(parse_python_version("3", true), Some((3, 0)));
        assert_eq!(parse_python_version("", true), None);
        assert_eq!(parse_python_version("x9", false), None);
        assert_eq!(parse_python_version("3x", true), None);
        assert_eq!(parse_python_version("31000", false), None);
    }

    #[test]
    fn os_version() {
        assert_eq!(parse_os_version("2_17_x86_64"), Some(((2, 17), "x86_64")));
        assert_eq!(parse_os_version("11_0_universal2"), Some(((11, 0), "universal2")));
        assert_eq!(parse_os_version("2_17"), None);
        assert_eq!(parse_os_version("x_17_x86_64"), None);
        assert_eq!(parse_os_version("2__x86_64"), None);
    }
}
