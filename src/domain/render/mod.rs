//! Template rendering engine.
//!
//! Input text is parsed into an ordered placeholder mapping, which is then
//! applied to an HTML body by literal substring replacement.
//!
//! # Example
//!
//! ```ignore
//! let input = "**NAME:** Alice\n**CITY:** Lisbon";
//! let rendered = generate("<p>NAME lives in CITY</p>", input);
//!
//! assert_eq!(rendered.generated_html, "<p>Alice lives in Lisbon</p>");
//! assert_eq!(rendered.replacements_count, 2);
//! ```

mod extract;
mod substitution;

pub use extract::{extract_replacements, ReplacementMap, IGNORED_KEYS};
pub use substitution::{generate, render, RenderedHtml};
