/// Whether a style is published with its library.
///
/// Follows the host's hide-on-publish rule: a style is private when its name or
/// any `/`-separated group in it starts with `.` or `_`.
pub fn is_public_style_name(name: &str) -> bool {
    !name
        .split('/')
        .any(|segment| segment.starts_with('.') || segment.starts_with('_'))
}
