/// Split raw OCR output into trimmed, non-empty lines in reading order.
///
/// Handles `\n` and `\r\n` boundaries. Trimming uses Unicode whitespace, so the
/// form feed Tesseract appends after each page is dropped along with blank lines.
pub fn split_lines(raw: &str) -> Vec<String> {
    raw.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}
