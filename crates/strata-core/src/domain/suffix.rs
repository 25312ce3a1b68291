//! Class-name suffix policy (`Post` → `PostController`).

/// Append `suffix` to `name` unless it already ends with it.
///
/// The "already ends with" check ignores case; the output keeps the casing
/// of both inputs. With `enabled == false` the name is returned unchanged.
pub fn apply_suffix(name: &str, suffix: &str, enabled: bool) -> String {
    if !enabled || suffix.is_empty() || ends_with_ignore_case(name, suffix) {
        return name.to_string();
    }
    format!("{name}{suffix}")
}

fn ends_with_ignore_case(name: &str, suffix: &str) -> bool {
    let name = name.to_lowercase();
    let suffix = suffix.to_lowercase();
    name.ends_with(&suffix)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn appends_missing_suffix() {
        assert_eq!(apply_suffix("Post", "Controller", true), "PostController");
    }

    #[test]
    fn keeps_existing_suffix_case_insensitively() {
        assert_eq!(apply_suffix("PostController", "Controller", true), "PostController");
        assert_eq!(apply_suffix("Postcontroller", "Controller", true), "Postcontroller");
    }

    #[test]
    fn disabled_or_empty_is_noop() {
        assert_eq!(apply_suffix("Post", "Controller", false), "Post");
        assert_eq!(apply_suffix("Post", "", true), "Post");
    }

    #[test]
    fn empty_name_yields_suffix() {
        assert_eq!(apply_suffix("", "Request", true), "Request");
    }

    #[test]
    fn suffixing_is_idempotent() {
        for name in ["Post", "PostController", "", "Controller", "postCONTROLLER"] {
            let once = apply_suffix(name, "Controller", true);
            assert_eq!(apply_suffix(&once, "Controller", true), once);
        }
    }
}
