/// Name of the parameter a property path points at
///
/// Paths are dot-separated (`getCategoryById.id`); the last non-empty segment
/// is the parameter. Empty segments are skipped, so a trailing dot does not
/// produce an empty name.
pub fn last_segment(path: &str) -> &str {
    path.split('.').rfind(|segment| !segment.is_empty()).unwrap_or_default()
}
