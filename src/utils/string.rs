/// Normalize a header cell by replacing control characters with spaces and
/// collapsing whitespace runs, so headers typed with stray newlines or
/// double spaces still match the required column names.
pub fn normalize_string(value: &str) -> String {
    value
        .chars()
        .map(|c| if c.is_control() { ' ' } else { c })
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<&str>>()
        .join(" ")
        .trim()
        .to_string()
}
