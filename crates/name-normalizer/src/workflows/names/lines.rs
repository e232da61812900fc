/// A trimmed data row and its 1-based position in the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawLine<'a> {
    pub number: usize,
    pub text: &'a str,
}

/// Turns raw CSV text into the name rows it carries.
///
/// Each line loses one trailing field separator, blank rows are discarded and
/// the first remaining row is treated as the header and dropped. Rows keep
/// their input order.
pub fn extract_lines(csv: &str) -> Vec<RawLine<'_>> {
    let rows = csv
        .lines()
        .enumerate()
        .map(|(index, line)| RawLine {
            number: index + 1,
            text: strip_trailing_comma(line.trim()).trim_end(),
        })
        .filter(|line| !line.text.is_empty());

    drop_header(rows).collect()
}

fn strip_trailing_comma(line: &str) -> &str {
    line.strip_suffix(',').unwrap_or(line)
}

fn drop_header<I: Iterator>(rows: I) -> std::iter::Skip<I> {
    rows.skip(1)
}
