/// Split a dotted path into its first segment and the remainder.
///
/// Splits on the first `.` only. With no `.` the remainder is empty, which
/// means the path is exhausted after `head`. Total over all inputs: an empty
/// path yields `("", "")`, so callers must guard against empty paths.
pub fn split_dot_path(path: &str) -> (&str, &str) {
    match path.split_once('.') {
        Some((head, rest)) => (head, rest),
        None => (path, ""),
    }
}
