//! Comment stripping.
//!
//! A `;` starts a comment that runs to the end of its line. Stripping keeps
//! every line (blank ones included) so line numbers reported later still
//! match the source.

/// Remove everything from the first `;` to the end of each line.
///
/// Lines are re-joined with `\n`; a `\r` left over from CRLF input is
/// dropped together with the line ending.
///
/// ```
/// use mmldur::strip_comments;
///
/// assert_eq!(strip_comments("TEMPO:120 ; fast\n;intro\nR:4"), "TEMPO:120 \n\nR:4");
/// ```
pub fn strip_comments(text: &str) -> String {
    text.lines()
        .map(|line| match line.find(';') {
            Some(pos) => &line[..pos],
            None => line,
        })
        .collect::<Vec<_>>()
        .join("\n")
}
