/// Normalizes a raw `website` value into an absolute URL string
///
/// # Rules (in order)
///
/// 1. Empty, whitespace-only or absent → `None`
/// 2. Already starts with `http://` or `https://` → returned unchanged
/// 3. Contains at least one `.` → prefixed with `https://`
/// 4. Anything else → `None` (not a plausible domain)
///
/// Surrounding whitespace is stripped before the rules apply. The function is
/// total and never fails.
///
/// # Examples
///
/// ```
/// use readiness_scout::url::normalize_website;
///
/// assert_eq!(normalize_website(Some("acme.test")), Some("https://acme.test".to_string()));
/// assert_eq!(normalize_website(Some("http://acme.test")), Some("http://acme.test".to_string()));
/// assert_eq!(normalize_website(Some("localhost")), None);
/// assert_eq!(normalize_website(None), None);
/// ```
pub fn normalize_website(raw: Option<&str>) -> Option<String> {
    let raw = raw?.trim();

    if raw.is_empty() {
        return None;
    }

    if raw.starts_with("http://") || raw.starts_with("https://") {
        return Some(raw.to_string());
    }

    if raw.contains('.') {
        return Some(format!("https://{}", raw));
    }

    None
}
