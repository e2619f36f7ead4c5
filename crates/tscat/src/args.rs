//! Positional `%N` placeholder substitution.
//!
//! # Invariants
//!
//! 1. **Single pass**: substituted values are copied verbatim and never
//!    re-scanned, so an argument containing `%1` stays `%1`.
//! 2. **Greedy two-digit indices**: `%` followed by up to two ASCII digits
//!    names one placeholder. `%12` is placeholder 12, not `%1` + `"2"`.
//! 3. **Literal leftovers**: `%0`, indices past the argument count and a
//!    `%` without digits are emitted unchanged.
//!
//! # Failure Modes
//!
//! | Failure | Cause | Behavior |
//! |---------|-------|----------|
//! | Too few args | `%3` with two args | `%3` left as-is |
//! | Too many args | three args, only `%1` | extras ignored |
//! | Trailing `%` | `"100%"` | emitted as-is |

/// Replace `%1`, `%2`, ... with `args[0]`, `args[1]`, ...
///
/// ```
/// use tscat::args::substitute;
///
/// assert_eq!(substitute("Request error %1", &["404"]), "Request error 404");
/// assert_eq!(substitute("%1/%2", &["A"]), "A/%2");
/// ```
#[must_use]
pub fn substitute<S: AsRef<str>>(template: &str, args: &[S]) -> String {
    let mut result = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(pos) = rest.find('%') {
        result.push_str(&rest[..pos]);
        let after = &rest[pos + 1..];
        let (index, digits) = leading_index(after);
        match index.checked_sub(1).and_then(|i| args.get(i)) {
            Some(value) if digits > 0 => result.push_str(value.as_ref()),
            _ => {
                result.push('%');
                result.push_str(&after[..digits]);
            }
        }
        rest = &after[digits..];
    }

    result.push_str(rest);
    result
}

/// Replace `%n` (and the locale-aware spelling `%Ln`) with `count`.
#[must_use]
pub fn substitute_count(template: &str, count: i64) -> String {
    if !template.contains('%') {
        return template.to_string();
    }
    let count = count.to_string();
    let mut result = String::with_capacity(template.len() + count.len());
    let mut rest = template;

    while let Some(pos) = rest.find('%') {
        result.push_str(&rest[..pos]);
        let after = &rest[pos + 1..];
        if let Some(tail) = after.strip_prefix('n') {
            result.push_str(&count);
            rest = tail;
        } else if let Some(tail) = after.strip_prefix("Ln") {
            result.push_str(&count);
            rest = tail;
        } else {
            result.push('%');
            rest = after;
        }
    }

    result.push_str(rest);
    result
}

/// Sorted, de-duplicated placeholder indices used by `text`.
#[must_use]
pub fn placeholder_indices(text: &str) -> Vec<u8> {
    let mut indices = Vec::new();
    let mut rest = text;
    while let Some(pos) = rest.find('%') {
        let after = &rest[pos + 1..];
        let (index, digits) = leading_index(after);
        if digits > 0 && index > 0 {
            // At most two digits, so the index always fits.
            indices.push(index as u8);
        }
        rest = &after[digits..];
    }
    indices.sort_unstable();
    indices.dedup();
    indices
}

/// Parse up to two leading ASCII digits. Returns `(value, digit_count)`.
fn leading_index(s: &str) -> (usize, usize) {
    let bytes = s.as_bytes();
    let mut value = 0usize;
    let mut digits = 0usize;
    while digits < 2 {
        match bytes.get(digits) {
            Some(b) if b.is_ascii_digit() => {
                value = value * 10 + usize::from(b - b'0');
                digits += 1;
            }
            _ => break,
        }
    }
    (value, digits)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_placeholder() {
        assert_eq!(substitute("Download failed: %1", &["timeout"]), "Download failed: timeout");
    }

    #[test]
    fn placeholders_out_of_order() {
        assert_eq!(substitute("%2 before %1", &["a", "b"]), "b before a");
    }

    #[test]
    fn repeated_placeholder() {
        assert_eq!(substitute("%1 and %1", &["x"]), "x and x");
    }

    #[test]
    fn missing_args_left_literal() {
        assert_eq!(substitute("%1/%2", &["A"]), "A/%2");
        assert_eq!(substitute("%1", &[] as &[&str]), "%1");
    }

    #[test]
    fn extra_args_ignored() {
        assert_eq!(substitute("only %1", &["one", "two", "three"]), "only one");
    }

    #[test]
    fn percent_edge_cases() {
        assert_eq!(substitute("100%", &["x"]), "100%");
        assert_eq!(substitute("%%1", &["x"]), "%x");
        assert_eq!(substitute("%0 stays", &["x"]), "%0 stays");
        assert_eq!(substitute("50% off", &["x"]), "50% off");
    }

    #[test]
    fn two_digit_index_is_greedy() {
        let args: Vec<String> = (1..=12).map(|i| format!("v{i}")).collect();
        assert_eq!(substitute("%12|%1", &args), "v12|v1");
        assert_eq!(substitute("%10", &["only"]), "%10");
    }

    #[test]
    fn substituted_values_are_not_rescanned() {
        assert_eq!(substitute("%1 %2", &["%2", "b"]), "%2 b");
    }

    #[test]
    fn multibyte_text_survives() {
        assert_eq!(
            substitute("Wyłącz Wi-Fi po %1 min bezczynności", &["5"]),
            "Wyłącz Wi-Fi po 5 min bezczynności"
        );
    }

    #[test]
    fn count_substitution() {
        assert_eq!(substitute_count("%n minutes", 5), "5 minutes");
        assert_eq!(substitute_count("%Ln files", 3), "3 files");
        assert_eq!(substitute_count("%1 and %n", 2), "%1 and 2");
        assert_eq!(substitute_count("no markers", 2), "no markers");
        assert_eq!(substitute_count("trailing %", 2), "trailing %");
    }

    #[test]
    fn indices_sorted_and_deduped() {
        assert_eq!(placeholder_indices("%2 %1 %2"), vec![1, 2]);
        assert_eq!(placeholder_indices("100% sure, %0"), Vec::<u8>::new());
        assert_eq!(placeholder_indices("&apos;%1&apos; at %2"), vec![1, 2]);
    }
}
