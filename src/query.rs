//! arXiv query construction.

/// Build a field-scoped arXiv query from a user keyword.
///
/// The keyword is trimmed and lower-cased, then quoted for exact-phrase
/// match against the title, abstract, and category fields, combined with
/// OR so a hit in any field qualifies. The exact output shape is a fixed
/// contract:
///
/// ```
/// use arxiv_scout::query::build_query;
///
/// assert_eq!(
///     build_query(" Quantum Computing "),
///     r#"ti:"quantum computing" OR abs:"quantum computing" OR cat:"quantum computing""#
/// );
/// ```
///
/// Emptiness is the caller's concern; this function does not validate it.
pub fn build_query(keyword: &str) -> String {
    let keyword = keyword.trim().to_lowercase();
    format!("ti:\"{0}\" OR abs:\"{0}\" OR cat:\"{0}\"", keyword)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_scoped_shape() {
        assert_eq!(
            build_query("quantum"),
            "ti:\"quantum\" OR abs:\"quantum\" OR cat:\"quantum\""
        );
    }

    #[test]
    fn test_trims_and_lowercases() {
        assert_eq!(
            build_query("  Quantum Computing \n"),
            "ti:\"quantum computing\" OR abs:\"quantum computing\" OR cat:\"quantum computing\""
        );
    }

    #[test]
    fn test_idempotent_under_normalization() {
        assert_eq!(build_query(" Neural Networks "), build_query("neural networks"));
    }

    #[test]
    fn test_category_code_keyword() {
        // Category codes pass through unchanged apart from case
        assert_eq!(
            build_query("quant-ph"),
            "ti:\"quant-ph\" OR abs:\"quant-ph\" OR cat:\"quant-ph\""
        );
    }
}
