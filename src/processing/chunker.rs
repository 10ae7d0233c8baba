/*!
 * Positional text chunking.
 *
 * Translation backends cap the amount of text accepted per request, so long
 * input is split into bounded segments before translation and the translated
 * segments are concatenated afterwards. Boundaries are purely positional
 * (character offsets): a boundary may fall inside a word or sentence, which
 * can cost the backend cross-chunk context. That trade-off is accepted here;
 * sentence-aware splitting is deliberately not attempted.
 */

/// Default maximum number of characters per chunk.
pub const DEFAULT_CHUNK_CHARS: usize = 5000;

/// Split `text` into in-order segments of at most `max_chars` characters
/// (Unicode scalar values, so multi-byte Hangul counts as one character).
///
/// Concatenating the returned chunks in order reproduces `text` exactly:
/// no overlap, no gap, no reordering. Empty input yields an empty vec.
/// The function is total: `max_chars` of zero is treated as 1 rather than
/// producing chunks that could never hold a character.
pub fn chunk_text(text: &str, max_chars: usize) -> Vec<String> {
    let max_chars = max_chars.max(1);

    let mut chunks = Vec::new();
    let mut current = String::new();
    let mut count = 0;

    for c in text.chars() {
        current.push(c);
        count += 1;
        if count == max_chars {
            chunks.push(std::mem::take(&mut current));
            count = 0;
        }
    }

    if !current.is_empty() {
        chunks.push(current);
    }

    chunks
}
