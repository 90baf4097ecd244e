use crate::error::{ConfscribeError, Result};

/// Known mis-decoded sequences in the page snapshot and their plain ASCII
/// stand-ins. Applied in table order as literal substring replacements.
const REPLACEMENTS: &[(&str, &str)] = &[
    ("\u{2019}", "'"),  // right single quote
    ("\u{2022}", "-"),  // bullet
    ("\u{2013}", "-"),  // en dash
    ("\u{2014}", "-"),  // em dash
    ("\u{00ae}", ""),   // registered mark
    ("\u{00e1}", "a"),  // a acute
    ("\u{2122}", ""),   // trademark
    ("\u{00f6}", "o"),  // o umlaut
    ("\u{014d}", "o"),  // o macron
    ("\u{00f3}", "o"),  // o acute
    ("\u{2018}", "'"),  // left single quote
    ("\u{200b}", ""),   // zero-width space
];

/// Replace every known mis-decoded sequence, then verify nothing outside
/// the 7-bit range is left. A leftover non-ASCII character means the
/// snapshot contains an encoding artifact the table doesn't cover yet, and
/// the run must stop before the artifact leaks into the output.
pub fn sanitize_text(text: &str) -> Result<String> {
    let mut clean = text.to_string();
    for (from, to) in REPLACEMENTS {
        clean = clean.replace(from, to);
    }

    if let Some((offset, ch)) = clean.char_indices().find(|(_, c)| !c.is_ascii()) {
        return Err(ConfscribeError::UnmappedCharacter { ch, offset });
    }

    Ok(clean)
}
