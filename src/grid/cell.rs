/// Characters reserved around every cell for `"[ "` and `" ]"`.
pub(crate) const FRAME_WIDTH: usize = 4;

/// Returns the uniform token width for a set of cells.
/// An empty set falls back to the bare frame width.
pub(crate) fn cell_width<S: AsRef<str>>(cells: &[S]) -> usize {
    cells
        .iter()
        .map(|cell| cell.as_ref().chars().count())
        .max()
        .unwrap_or(0)
        + FRAME_WIDTH
}

/// Formats a single cell as `[ value ]`, padded with spaces before the closing
/// bracket so the token is exactly `width` characters wide.
pub(crate) fn format_cell(value: &str, width: usize) -> String {
    let length = value.chars().count();
    let padding = width.saturating_sub(length + 3);
    let mut token = String::with_capacity(width);
    token.push_str("[ ");
    token.push_str(value);
    token.extend(std::iter::repeat(' ').take(padding));
    token.push(']');
    token
}

/// Builds a dividing bar of `length` dashes.
pub(crate) fn bar(length: usize) -> String {
    "-".repeat(length)
}
