//! Strict "is the target release newer" comparison.

use crate::version::Version;
use std::cmp::Ordering;

/// Returns `true` if `target` is a strictly later release than `current`.
///
/// Both strings must parse as three-component [`Version`]s. If either does
/// not, the answer is `false`: a malformed version never advertises an update.
/// Equal versions are not newer.
///
/// ```
/// use hintpane_version::is_newer;
///
/// assert!(is_newer("1.1.0", "1.2.0"));
/// assert!(!is_newer("1.1.0", "1.1.0"));
/// assert!(!is_newer("1.1.0", "1.1"));
/// ```
pub fn is_newer(current: &str, target: &str) -> bool {
    let current = match current.parse::<Version>() {
        Ok(v) => v,
        Err(e) => {
            tracing::debug!(error = %e, "current version rejected, reporting no update");
            return false;
        }
    };
    let target = match target.parse::<Version>() {
        Ok(v) => v,
        Err(e) => {
            tracing::debug!(error = %e, "target version rejected, reporting no update");
            return false;
        }
    };
    target_postdates(&current, &target)
}

/// Compares parsed versions component by component, most significant first.
pub(crate) fn target_postdates(current: &Version, target: &Version) -> bool {
    let pairs = [
        (target.major, current.major),
        (target.minor, current.minor),
        (target.patch, current.patch),
    ];
    for (t, c) in pairs {
        match t.cmp(&c) {
            Ordering::Greater => return true,
            Ordering::Less => return false,
            Ordering::Equal => continue,
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equal_is_not_newer() {
        assert!(!is_newer("1.1.0", "1.1.0"));
        assert!(!is_newer("0.0.0", "0.0.0"));
    }

    #[test]
    fn newer_minor() {
        assert!(is_newer("1.1.0", "1.2.0"));
        assert!(!is_newer("1.2.0", "1.1.0"));
    }

    #[test]
    fn minor_outranks_patch() {
        assert!(is_newer("1.0.9", "1.1.0"));
    }

    #[test]
    fn major_outranks_minor_and_patch() {
        assert!(!is_newer("2.0.0", "1.9.9"));
        assert!(is_newer("1.9.9", "2.0.0"));
    }

    #[test]
    fn newer_patch() {
        assert!(is_newer("3.4.5", "3.4.6"));
        assert!(!is_newer("3.4.6", "3.4.5"));
    }

    #[test]
    fn numeric_not_textual_comparison() {
        assert!(is_newer("1.9.0", "1.10.0"));
    }

    #[test]
    fn malformed_target_fails_closed() {
        assert!(!is_newer("1.1.0", "1.1"));
        assert!(!is_newer("1.1.0", "abc.def.ghi"));
        assert!(!is_newer("1.1.0", "9.9.9.9"));
        assert!(!is_newer("1.1.0", "2.0.x"));
    }

    #[test]
    fn malformed_current_fails_closed() {
        assert!(!is_newer("dev", "2.0.0"));
        assert!(!is_newer("", "2.0.0"));
    }

    #[test]
    fn agrees_with_ord() {
        let versions = [
            Version::new(0, 9, 9),
            Version::new(1, 0, 0),
            Version::new(1, 0, 1),
            Version::new(1, 1, 0),
            Version::new(2, 0, 0),
        ];
        for a in &versions {
            for b in &versions {
                assert_eq!(target_postdates(a, b), b > a, "{a} vs {b}");
            }
        }
    }
}
