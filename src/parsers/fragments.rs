/// Separator between two objects in a Daslog file
pub const FRAGMENT_SEPARATOR: &str = "},{";

/// Split raw file content into repaired JSON object fragments
///
/// Content is split on `},{` and each piece is patched back into an object:
/// a missing leading `{` is restored, a missing trailing `}` is restored on every
/// piece but the last, and the last piece always loses exactly one trailing
/// character (the separator Cozmo leaves after the final object).
///
/// The last-piece strip is applied unconditionally. A file holding a single
/// object with nothing after its closing brace therefore loses that brace and
/// will not parse. An empty file yields one empty fragment.
///
/// # Examples
///
/// ```
/// use daslog_clean::split_fragments;
///
/// let fragments = split_fragments(r#"{"a":1},{"b":2},"#);
/// assert_eq!(fragments, vec![r#"{"a":1}"#, r#"{"b":2}"#]);
/// ```
pub fn split_fragments(content: &str) -> Vec<String> {
    let pieces: Vec<&str> = content.split(FRAGMENT_SEPARATOR).collect();
    let total = pieces.len();

    pieces
        .into_iter()
        .enumerate()
        .map(|(index, piece)| {
            let mut fragment = String::with_capacity(piece.len() + 2);
            if !piece.starts_with('{') {
                fragment.push('{');
            }
            fragment.push_str(piece);

            if index + 1 == total {
                fragment.pop();
            } else if !fragment.ends_with('}') {
                fragment.push('}');
            }
            fragment
        })
        .collect()
}
