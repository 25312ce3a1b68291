//! Path and namespace mapping.
//!
//! Configuration always stores paths with forward slashes
//! (`"Presentation/Http/Controllers"`); PHP namespaces use backslashes. These
//! helpers translate between the two and build fully-qualified names.

use std::path::{Path, PathBuf};

/// PHP namespace separator.
pub const NAMESPACE_SEPARATOR: char = '\\';

/// Replace every `/` with `\`. Case and segment content are untouched.
pub fn path_to_namespace(path: &str) -> String {
    path.replace('/', "\\")
}

/// `base\module\path`, with `path` converted to namespace form.
///
/// No prefix stripping happens here: `configured_path` must be relative to
/// the module root. Configuration is checked up front with [`duplicated_segment`].
pub fn namespace_for(base_namespace: &str, module: &str, configured_path: &str) -> String {
    let base = base_namespace.trim_end_matches(NAMESPACE_SEPARATOR);
    let relative = path_to_namespace(&normalize(configured_path));

    if relative.is_empty() {
        format!("{base}\\{module}")
    } else {
        format!("{base}\\{module}\\{relative}")
    }
}

/// Join `base_path/module/relative_dir/filename` with the host separator.
///
/// `extension` is appended only when `filename` has none of its own.
pub fn file_path_for(
    base_path: impl AsRef<Path>,
    module: &str,
    relative_dir: &str,
    filename: &str,
    extension: &str,
) -> PathBuf {
    let mut path = base_path.as_ref().join(module);
    for segment in split_segments(relative_dir) {
        path.push(segment);
    }

    let extension = extension.trim_start_matches('.');
    if Path::new(filename).extension().is_some() || extension.is_empty() {
        path.push(filename);
    } else {
        path.push(format!("{filename}.{extension}"));
    }

    path
}

/// Map a stub-relative path to the PHP file it produces.
///
/// | Input | Output |
/// |-------|--------|
/// | `routes/web` | `routes/web.php` |
/// | `routes/web.stub` | `routes/web.php` |
/// | `config/app.json` | `config/app.json` |
pub fn generate_php_file_path(path: &str) -> String {
    match Path::new(path).extension().and_then(|e| e.to_str()) {
        None => format!("{path}.php"),
        Some("stub") => format!("{}.php", &path[..path.len() - ".stub".len()]),
        Some(_) => path.to_string(),
    }
}

/// Clean up human/config input.
///
/// Separators (`/` and `\` alike) are collapsed, leading and trailing
/// separators and whitespace are stripped, and the result is joined with `/`.
pub fn normalize(path: &str) -> String {
    split_segments(path).collect::<Vec<_>>().join("/")
}

/// Find the base prefix a configured relative path already carries.
///
/// `App/Modules/Blog/Models` under base namespace `App\Modules` would
/// produce `App\Modules\Blog\App\Modules\Blog\Models`. Returns the repeated
/// prefix (namespace form for `base_namespace`, path form for `base_path`).
/// Comparison is case-insensitive. A module named after a layer folder
/// (`Domain`, `Events`, `Http`) is not a repeat.
pub fn duplicated_segment(
    configured_path: &str,
    base_namespace: &str,
    base_path: &str,
) -> Option<String> {
    let segments: Vec<&str> = split_segments(configured_path).collect();

    [(base_namespace, "\\"), (base_path, "/")]
        .into_iter()
        .find_map(|(base, separator)| {
            let prefix: Vec<&str> = split_segments(base).collect();
            let repeats = !prefix.is_empty()
                && segments.len() >= prefix.len()
                && segments
                    .iter()
                    .zip(&prefix)
                    .all(|(s, p)| s.eq_ignore_ascii_case(p));
            repeats.then(|| prefix.join(separator))
        })
}

fn split_segments(path: &str) -> impl Iterator<Item = &str> {
    path.split(['/', '\\'])
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
}
