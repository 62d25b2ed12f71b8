//! Route path composition: join segments with normalized separators.

/// Join two path fragments into a rooted route path.
/// e.g. `join("/users", ":id")` -> "/users/:id", `join("", "")` -> "/"
///
/// The result always starts with `/`, never contains `//`, and never ends
/// with `/` except for the root path itself. axum rejects unrooted route
/// patterns, so an empty base composes to `/`.
pub fn join(base: &str, segment: &str) -> String {
    let mut out = String::with_capacity(base.len() + segment.len() + 2);
    out.push('/');
    let mut first = true;
    for part in base
        .split('/')
        .chain(segment.split('/'))
        .filter(|s| !s.is_empty())
    {
        if !first {
            out.push('/');
        }
        out.push_str(part);
        first = false;
    }
    out
}

/// Normalize a single path to rooted form. e.g. `normalize("users/")` -> "/users"
pub fn normalize(path: &str) -> String {
    join(path, "")
}
