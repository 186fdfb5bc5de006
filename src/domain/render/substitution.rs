//! Literal placeholder substitution into template bodies

use serde::Serialize;

use super::extract::{extract_replacements, ReplacementMap};

/// Output of a render pass
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedHtml {
    pub generated_html: String,
    /// Number of keys that matched at least once, not the number of occurrences
    pub replacements_count: usize,
}

/// Apply `replacements` to `template` in insertion order.
///
/// Each key replaces every literal occurrence in the current body, so a value
/// that contains a later key is rewritten by that key as well.
pub fn render(template: &str, replacements: &ReplacementMap) -> RenderedHtml {
    let mut html = template.to_string();
    let mut count = 0;

    for (key, value) in replacements.iter() {
        if html.contains(key) {
            html = html.replace(key, value);
            count += 1;
        }
    }

    RenderedHtml {
        generated_html: html,
        replacements_count: count,
    }
}

/// Extract placeholders from `input_text` and render them into `template`.
pub fn generate(template: &str, input_text: &str) -> RenderedHtml {
    let replacements = extract_replacements(input_text);
    render(template, &replacements)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_substitute_all_occurrences_counts_once() {
        let map: ReplacementMap = [("NAME", "Alice")].into_iter().collect();

        let result = render("Hi NAME, NAME!", &map);
        assert_eq!(result.generated_html, "Hi Alice, Alice!");
        assert_eq!(result.replacements_count, 1);
    }

    #[test]
    fn test_substitute_multiple() {
        let map: ReplacementMap = [("ORDER_ID", "ORD-123"), ("CARRIER", "FedEx")]
            .into_iter()
            .collect();

        let result = render("<p>Order ORDER_ID ships via CARRIER</p>", &map);
        assert_eq!(result.generated_html, "<p>Order ORD-123 ships via FedEx</p>");
        assert_eq!(result.replacements_count, 2);
    }

    #[test]
    fn test_sequential_substitution_chains() {
        let map: ReplacementMap = [("A", "B"), ("B", "C")].into_iter().collect();

        let result = render("A", &map);
        assert_eq!(result.generated_html, "C");
        assert_eq!(result.replacements_count, 2);
    }

    #[test]
    fn test_earlier_key_not_reapplied() {
        let map: ReplacementMap = [("B", "C"), ("A", "B")].into_iter().collect();

        let result = render("A", &map);
        assert_eq!(result.generated_html, "B");
        assert_eq!(result.replacements_count, 1);
    }

    #[test]
    fn test_absent_key_not_counted() {
        let map: ReplacementMap = [("MISSING", "x")].into_iter().collect();

        let result = render("<div>static</div>", &map);
        assert_eq!(result.generated_html, "<div>static</div>");
        assert_eq!(result.replacements_count, 0);
    }

    #[test]
    fn test_no_escaping_applied() {
        let map: ReplacementMap = [("BODY_TEXT", "<script>alert(1)</script> & more")]
            .into_iter()
            .collect();

        let result = render("<main>BODY_TEXT</main>", &map);
        assert_eq!(
            result.generated_html,
            "<main><script>alert(1)</script> & more</main>"
        );
    }

    #[test]
    fn test_empty_value_removes_placeholder() {
        let map: ReplacementMap = [("SUBTITLE", "")].into_iter().collect();

        let result = render("<h2>SUBTITLE</h2>", &map);
        assert_eq!(result.generated_html, "<h2></h2>");
        assert_eq!(result.replacements_count, 1);
    }

    #[test]
    fn test_blank_key_inserts_between_every_character() {
        let result = generate("ab", "**  :** X");
        assert_eq!(result.generated_html, "XaXbX");
        assert_eq!(result.replacements_count, 1);
    }

    #[test]
    fn test_generate_end_to_end() {
        let input = "**TITLE:** Spring Sale\n**DIV:** ignored\nnotes\n**DISCOUNT:** 20%";
        let template = "<div><h1>TITLE</h1><p>DISCOUNT off</p></div>";

        let result = generate(template, input);
        assert_eq!(
            result.generated_html,
            "<div><h1>Spring Sale</h1><p>20% off</p></div>"
        );
        assert_eq!(result.replacements_count, 2);
    }
}
