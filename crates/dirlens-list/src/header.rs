/// Header indicator glyphs.
///
/// The sorted column's header label carries a two-character
/// directional prefix. The label underneath is always recoverable by
/// stripping exactly the first two characters, so the engine strips
/// the old glyph before applying a new one and never stacks two.

/// Prefix shown on the header of a column sorted ascending.
pub const GLYPH_ASCENDING: &str = "< ";

/// Prefix shown on the header of a column sorted descending.
pub const GLYPH_DESCENDING: &str = "> ";

/// Prepend the directional glyph for `ascending` to a plain label.
pub fn apply_glyph(label: &str, ascending: bool) -> String {
    let glyph = if ascending {
        GLYPH_ASCENDING
    } else {
        GLYPH_DESCENDING
    };
    format!("{glyph}{label}")
}

/// Remove exactly the first two characters, recovering the plain
/// label from a glyphed one.
///
/// Counts characters, not bytes, so a label that begins with
/// multi-byte text survives a stray strip without panicking.
pub fn strip_glyph(label: &str) -> String {
    let mut chars = label.chars();
    chars.next();
    chars.next();
    chars.as_str().to_string()
}
