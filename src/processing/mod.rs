/*!
 * Text processing primitives used by the translation pipeline.
 *
 * - `spacer`: punctuation spacing normalization for translated text
 * - `chunker`: positional splitting of long input into bounded segments
 */

pub mod chunker;
pub mod spacer;

pub use chunker::{chunk_text, DEFAULT_CHUNK_CHARS};
pub use spacer::space_sentences;
