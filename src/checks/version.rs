//! Version string parsing and comparison.
//!
//! Comparison is segment-wise numeric, most significant segment first.
//! `"v14.2.0"` is greater than `"v9.0.0"`, which a lexical compare gets
//! wrong. Missing segments count as zero, so `"1.0"` equals `"1.0.0"`.

use std::cmp::Ordering;

/// Parse a version string into its numeric segments.
///
/// Strips a leading `v`/`V`, then takes the numeric prefix of every
/// dot-separated segment (`"2.0-beta"` parses as `[2, 0]`). Segments with
/// no numeric prefix parse as zero.
pub fn parse_segments(version: &str) -> Vec<u64> {
    version
        .trim()
        .trim_start_matches(['v', 'V'])
        .split('.')
        .map(|segment| {
            segment
                .chars()
                .take_while(|c| c.is_ascii_digit())
                .collect::<String>()
                .parse()
                .unwrap_or(0)
        })
        .collect()
}

/// Compare two version strings segment-wise.
pub fn compare_versions(a: &str, b: &str) -> Ordering {
    let a_parts = parse_segments(a);
    let b_parts = parse_segments(b);
    let len = a_parts.len().max(b_parts.len());

    for i in 0..len {
        let a_seg = a_parts.get(i).copied().unwrap_or(0);
        let b_seg = b_parts.get(i).copied().unwrap_or(0);
        match a_seg.cmp(&b_seg) {
            Ordering::Equal => continue,
            other => return other,
        }
    }

    Ordering::Equal
}

/// Check whether `current` satisfies `minimum` (current >= minimum).
pub fn meets_minimum(current: &str, minimum: &str) -> bool {
    compare_versions(current, minimum) != Ordering::Less
}

/// Extract a version number from tool output.
///
/// Tries progressively looser patterns so both `"v22.1.0"` and
/// `"node version 22.1"` style output resolve.
pub fn extract_version(output: &str) -> Option<String> {
    let patterns = [r"(\d+\.\d+\.\d+)", r"version\s+(\d+\.\d+)", r"v(\d+\.\d+)"];

    for pattern in &patterns {
        if let Ok(re) = regex::Regex::new(pattern) {
            if let Some(caps) = re.captures(output) {
                if let Some(m) = caps.get(1) {
                    return Some(m.as_str().to_string());
                }
            }
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_segments_plain() {
        assert_eq!(parse_segments("14.2.0"), vec![14, 2, 0]);
    }

    #[test]
    fn parse_segments_strips_v_prefix() {
        assert_eq!(parse_segments("v14.2.0"), vec![14, 2, 0]);
        assert_eq!(parse_segments("V1.0"), vec![1, 0]);
    }

    #[test]
    fn parse_segments_numeric_prefix_only() {
        assert_eq!(parse_segments("2.0-beta.1"), vec![2, 0, 1]);
        assert_eq!(parse_segments("1.x"), vec![1, 0]);
    }

    #[test]
    fn compare_equal_versions() {
        assert_eq!(compare_versions("1.2.3", "1.2.3"), Ordering::Equal);
        assert_eq!(compare_versions("v1.2.3", "1.2.3"), Ordering::Equal);
    }

    #[test]
    fn compare_missing_segments_are_zero() {
        assert_eq!(compare_versions("1.0", "1.0.0"), Ordering::Equal);
        assert_eq!(compare_versions("1", "1.0.0"), Ordering::Equal);
        assert_eq!(compare_versions("1.0.1", "1.0"), Ordering::Greater);
    }

    #[test]
    fn compare_is_numeric_not_lexical() {
        // The case a lexical compare gets backwards.
        assert_eq!(compare_versions("v14.2.0", "v9.0.0"), Ordering::Greater);
        assert_eq!(compare_versions("10.0.0", "9.99.99"), Ordering::Greater);
        assert_eq!(compare_versions("2.10.0", "2.9.0"), Ordering::Greater);
    }

    #[test]
    fn meets_minimum_at_boundary() {
        assert!(meets_minimum("v14.0.0", "v14.0.0"));
        assert!(meets_minimum("14.0.1", "v14.0.0"));
        assert!(!meets_minimum("v13.99.99", "v14.0.0"));
    }

    #[test]
    fn meets_minimum_above_and_below() {
        assert!(meets_minimum("v22.1.0", "v14.0.0"));
        assert!(!meets_minimum("v9.0.0", "v14.0.0"));
    }

    #[test]
    fn extract_version_from_node_output() {
        assert_eq!(extract_version("v22.1.0"), Some("22.1.0".to_string()));
    }

    #[test]
    fn extract_version_from_verbose_output() {
        assert_eq!(
            extract_version("node version 18.4"),
            Some("18.4".to_string())
        );
    }

    #[test]
    fn extract_version_none_for_junk() {
        assert_eq!(extract_version("command not found"), None);
        assert_eq!(extract_version(""), None);
    }
}
