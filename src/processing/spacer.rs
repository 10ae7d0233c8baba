/*!
 * Sentence spacing normalization.
 *
 * Translated text often comes back with sentences glued together
 * ("Hello.World"). This module inserts a single space after each
 * sentence-terminal mark that is immediately followed by a
 * non-whitespace character.
 */

/// Returns true for the sentence-terminal punctuation marks we normalize.
fn is_terminal_mark(c: char) -> bool {
    matches!(c, '.' | '!' | '?')
}

/// Insert a single space after each `.`, `!` or `?` that is immediately
/// followed by a non-whitespace character. Existing spacing is left alone.
///
/// The rule is a lookahead (`([.!?])(?=\S)`), which the regex crate cannot
/// express, so a single peeking pass over the characters is used instead.
/// The function is pure and idempotent: after one pass no terminal mark is
/// followed by a non-whitespace character.
pub fn space_sentences(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        result.push(c);
        if is_terminal_mark(c) {
            if let Some(&next) = chars.peek() {
                if !next.is_whitespace() {
                    result.push(' ');
                }
            }
        }
    }

    result
}
