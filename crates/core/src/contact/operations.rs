/// Builds the `LIKE` pattern for a contact search.
///
/// The term is wrapped in `%` on both sides and is not escaped: `%` and `_`
/// typed by the user keep their wildcard meaning. An empty term yields `%%`,
/// which matches every row.
pub fn like_pattern(term: &str) -> String {
    format!("%{term}%")
}
