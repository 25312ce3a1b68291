//! Provider registration in the host bootstrap file.
//!
//! This is text matching, not a PHP parser. A provider counts as registered
//! when the bootstrap source contains any of:
//!
//! 1. `App\Modules\Blog\Providers\BlogServiceProvider::class`
//! 2. `use App\Modules\Blog\Providers\BlogServiceProvider;` together with a
//!    bare `BlogServiceProvider::class` (or `'BlogServiceProvider'`), or
//!    `use ... as BlogProvider;` together with `BlogProvider::class`
//! 3. `'App\Modules\Blog\Providers\BlogServiceProvider'` as a string literal
//!    (the `\\`-escaped form is accepted too)
//!
//! Every pattern is bounded on identifier characters so that a query for
//! `Blog` never matches `BlogExtended` or `MyBlog`.

use regex::Regex;

/// Characters that may not directly precede a class reference.
const NOT_IDENTIFIER_BEFORE: &str = r"(?:^|[^A-Za-z0-9_\\])";

/// `true` when `fqcn` appears registered in `content`.
pub fn is_registered(content: &str, fqcn: &str) -> bool {
    let fqcn = fqcn.trim_start_matches('\\');
    if fqcn.is_empty() {
        return false;
    }
    let base = class_basename(fqcn);
    let fqcn_re = regex::escape(fqcn);
    let base_re = regex::escape(base);

    let class_literal = format!(r"{NOT_IDENTIFIER_BEFORE}\\?{fqcn_re}::class\b");
    if matches(&class_literal, content) {
        return true;
    }

    let import = format!(r"(?m)^\s*use\s+\\?{fqcn_re}\s*;");
    let bare_reference =
        format!(r#"{NOT_IDENTIFIER_BEFORE}{base_re}::class\b|['"]{base_re}['"]"#);
    if matches(&import, content) && matches(&bare_reference, content) {
        return true;
    }

    let aliased =
        format!(r"(?m)^\s*use\s+\\?{fqcn_re}\s+[Aa][Ss]\s+([A-Za-z_][A-Za-z0-9_]*)\s*;");
    let aliases: Vec<&str> = match Regex::new(&aliased) {
        Ok(re) => re
            .captures_iter(content)
            .filter_map(|c| c.get(1).map(|m| m.as_str()))
            .collect(),
        Err(_) => Vec::new(),
    };
    if aliases.iter().any(|alias| {
        let alias_re = regex::escape(alias);
        matches(&format!(r"{NOT_IDENTIFIER_BEFORE}{alias_re}::class\b"), content)
    }) {
        return true;
    }

    let escaped_segments: Vec<String> = fqcn.split('\\').map(regex::escape).collect();
    let quoted = format!(
        r#"['"](?:\\{{1,2}})?{}['"]"#,
        escaped_segments.join(r"\\{1,2}")
    );
    matches(&quoted, content)
}

/// Add `fqcn` to the provider array of a bootstrap file.
///
/// Inserts a `use` import and a `Base::class,` entry before the closing
/// bracket of the returned array. Returns `None` when the provider is
/// already registered or no `return [ ... ]` array is present.
pub fn register(content: &str, fqcn: &str) -> Option<String> {
    let fqcn = fqcn.trim_start_matches('\\');
    if fqcn.is_empty() || is_registered(content, fqcn) {
        return None;
    }

    let open = Regex::new(r"return\s*\[").ok()?.find(content)?;
    let close = closing_bracket(content, open.end())?;

    let anchor = import_anchor(content);
    let entry = match anchor {
        Some(_) => format!("{}::class,", class_basename(fqcn)),
        None => format!("\\{fqcn}::class,"),
    };

    let head = content[..close].trim_end();
    let mut updated = String::with_capacity(content.len() + entry.len() * 3);
    updated.push_str(head);
    if !head.ends_with('[') && !head.ends_with(',') {
        updated.push(',');
    }
    updated.push_str("\n    ");
    updated.push_str(&entry);
    updated.push('\n');
    updated.push_str(&content[close..]);

    if let Some(at) = anchor {
        let import = if content[..at].trim_end().ends_with(';')
            && matches(r"(?m)^use\s", &content[..at])
        {
            format!("\nuse {fqcn};")
        } else {
            format!("\n\nuse {fqcn};")
        };
        updated.insert_str(at, &import);
    }

    Some(updated)
}

/// Last path segment of a fully-qualified class name.
pub fn class_basename(fqcn: &str) -> &str {
    fqcn.rsplit('\\').next().unwrap_or(fqcn)
}

/// Byte offset of the `]` closing an array whose body starts at `start`.
///
/// String literals and comments are skipped, so a `]` inside them does not
/// count.
fn closing_bracket(content: &str, start: usize) -> Option<usize> {
    let bytes = content.as_bytes();
    let mut depth = 1usize;
    let mut i = start;

    while i < bytes.len() {
        match bytes[i] {
            b'[' => depth += 1,
            b']' => {
                depth -= 1;
                if depth == 0 {
                    return Some(i);
                }
            }
            quote @ (b'\'' | b'"') => {
                i += 1;
                while i < bytes.len() && bytes[i] != quote {
                    if bytes[i] == b'\\' {
                        i += 1;
                    }
                    i += 1;
                }
            }
            b'/' if bytes.get(i + 1) == Some(&b'*') => {
                i = content[i + 2..].find("*/").map_or(bytes.len(), |end| i + 2 + end + 1);
            }
            b'#' if bytes.get(i + 1) != Some(&b'[') => {
                i = content[i..].find('\n').map_or(bytes.len(), |end| i + end);
            }
            b'/' if bytes.get(i + 1) == Some(&b'/') => {
                i = content[i..].find('\n').map_or(bytes.len(), |end| i + end);
            }
            _ => {}
        }
        i += 1;
    }

    None
}

/// Byte offset right after the last `use` line, the `declare(...)` line or
/// the `<?php` tag, whichever is found first in that order.
fn import_anchor(content: &str) -> Option<usize> {
    let candidates = [
        r"(?m)^use\s+[^;]+;[ \t]*$",
        r"(?m)^declare\s*\([^)]*\)\s*;[ \t]*$",
        r"(?m)^<\?php[ \t]*$",
    ];

    candidates.iter().find_map(|pattern| {
        Regex::new(pattern)
            .ok()?
            .find_iter(content)
            .last()
            .map(|m| m.end())
    })
}

fn matches(pattern: &str, content: &str) -> bool {
    match Regex::new(pattern) {
        Ok(re) => re.is_match(content),
        Err(err) => {
            tracing::warn!(%pattern, %err, "Invalid registration pattern");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BLOG: &str = "App\\Modules\\Blog\\Providers\\BlogServiceProvider";

    #[test]
    fn detects_class_literal() {
        let content = "<?php\n\nreturn [\n    App\\Modules\\Blog\\Providers\\BlogServiceProvider::class,\n];\n";
        assert!(is_registered(content, BLOG));
        assert!(is_registered(content, &format!("\\{BLOG}")));
    }

    #[test]
    fn detects_leading_backslash_literal() {
        let content = "return [\\App\\Modules\\Blog\\Providers\\BlogServiceProvider::class];";
        assert!(is_registered(content, BLOG));
    }

    #[test]
    fn prefix_similar_class_is_not_a_match() {
        let content = "<?php\n\nreturn [\n    App\\Modules\\BlogExtended\\Providers\\BlogExtendedServiceProvider::class,\n];\n";
        assert!(!is_registered(content, BLOG));
    }

    #[test]
    fn suffix_similar_class_is_not_a_match() {
        let content = "return [\n    App\\Modules\\MyBlog\\Providers\\MyBlogServiceProvider::class,\n    \"Vendor\\App\\Modules\\Blog\\Providers\\BlogServiceProvider\",\n];";
        assert!(!is_registered(content, BLOG));
    }

    #[test]
    fn detects_import_with_bare_reference() {
        let content = "<?php\n\nuse App\\Modules\\Blog\\Providers\\BlogServiceProvider;\n\nreturn [\n    BlogServiceProvider::class,\n];\n";
        assert!(is_registered(content, BLOG));
    }

    #[test]
    fn import_alone_is_not_registration() {
        let content = "<?php\n\nuse App\\Modules\\Blog\\Providers\\BlogServiceProvider;\n\nreturn [\n    OtherBlogServiceProvider::class,\n];\n";
        assert!(!is_registered(content, BLOG));
    }

    #[test]
    fn detects_quoted_string_forms() {
        assert!(is_registered(
            "return ['App\\Modules\\Blog\\Providers\\BlogServiceProvider'];",
            BLOG
        ));
        assert!(is_registered(
            "return [\"App\\\\Modules\\\\Blog\\\\Providers\\\\BlogServiceProvider\"];",
            BLOG
        ));
        assert!(!is_registered(
            "return ['App\\Modules\\Blog\\Providers\\BlogServiceProviderV2'];",
            BLOG
        ));
    }

    #[test]
    fn register_inserts_import_and_entry() {
        let content = "<?php\n\nreturn [\n    App\\Providers\\AppServiceProvider::class,\n];\n";
        let updated = register(content, BLOG).unwrap();

        assert!(updated.contains("use App\\Modules\\Blog\\Providers\\BlogServiceProvider;"));
        assert!(updated.contains("    BlogServiceProvider::class,\n];"));
        assert!(updated.contains("AppServiceProvider::class,"));
        assert!(is_registered(&updated, BLOG));
    }

    #[test]
    fn register_appends_after_existing_imports() {
        let content = "<?php\n\nuse App\\Providers\\AppServiceProvider;\n\nreturn [\n    AppServiceProvider::class\n];\n";
        let updated = register(content, BLOG).unwrap();

        assert!(updated.contains(
            "use App\\Providers\\AppServiceProvider;\nuse App\\Modules\\Blog\\Providers\\BlogServiceProvider;"
        ));
        assert!(updated.contains("AppServiceProvider::class,\n    BlogServiceProvider::class,\n];"));
    }

    #[test]
    fn register_handles_empty_array() {
        let updated = register("<?php\n\nreturn [];\n", BLOG).unwrap();
        assert!(updated.contains("return [\n    BlogServiceProvider::class,\n];"));
    }

    #[test]
    fn register_is_noop_when_present_or_unparseable() {
        let content = "<?php\n\nreturn [\n    App\\Modules\\Blog\\Providers\\BlogServiceProvider::class,\n];\n";
        assert_eq!(register(content, BLOG), None);
        assert_eq!(register("<?php\n\n// nothing here\n", BLOG), None);
    }

    #[test]
    fn detects_aliased_import() {
        let content = "<?php\n\nuse App\\Modules\\Blog\\Providers\\BlogServiceProvider as BlogProvider;\n\nreturn [\n    BlogProvider::class,\n];\n";
        assert!(is_registered(content, BLOG));
        assert_eq!(register(content, BLOG), None);

        let unused = "<?php\n\nuse App\\Modules\\Blog\\Providers\\BlogServiceProvider as BlogProvider;\n\nreturn [\n    OtherBlogProvider::class,\n];\n";
        assert!(!is_registered(unused, BLOG));
    }

    #[test]
    fn register_targets_the_returned_array_bracket() {
        let content = "<?php\n\nreturn [\n    App\\Providers\\AppServiceProvider::class,\n];\n\n// see docs [providers]\n";
        let updated = register(content, BLOG).unwrap();

        assert!(updated.contains("AppServiceProvider::class,\n    BlogServiceProvider::class,\n];"));
        assert!(updated.ends_with("// see docs [providers]\n"));
    }

    #[test]
    fn brackets_inside_strings_and_nested_arrays_are_skipped() {
        let content = "<?php\n\nreturn [\n    ['nested'],\n    'odd]name', /* ] */\n    App\\Providers\\AppServiceProvider::class,\n];\n";
        let close = closing_bracket(content, content.find('[').unwrap() + 1).unwrap();
        assert_eq!(&content[close..], "];\n");

        let updated = register(content, BLOG).unwrap();
        assert!(updated.contains("AppServiceProvider::class,\n    BlogServiceProvider::class,\n];"));
    }

    #[test]
    fn basename_is_last_segment() {
        assert_eq!(class_basename(BLOG), "BlogServiceProvider");
        assert_eq!(class_basename("Plain"), "Plain");
    }
}
