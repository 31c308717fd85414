//! Replaces query terms with truth literals for one document.
//!
//! Terms are compared case-insensitively: the query and document are both
//! lowercased and each term is tested for substring containment. The
//! replacement itself runs over the original-case query and swaps every
//! occurrence of the lowercase term text, so:
//!
//! - upper-case `AND`, `OR` and `NOT` are never rewritten, while a lowercase
//!   `and` is an ordinary term;
//! - a term typed with capitals is looked up but left in place, and the
//!   tokenizer later discards it;
//! - a term that occurs inside a longer word is replaced there too.

/// Replace each term of `query` with `T` when `document` contains it and `F`
/// otherwise.
///
/// # Examples
/// ```
/// use rpn_query::substitute_terms;
///
/// assert_eq!(
///     substitute_terms("(python OR java) AND guide", "Java guide tutorial"),
///     "(F OR T) AND T"
/// );
/// ```
#[must_use]
pub fn substitute_terms(query: &str, document: &str) -> String {
    let query_lower = query.to_lowercase();
    let document_lower = document.to_lowercase();
    let mut converted = query.to_string();
    let mut word = String::new();

    for ch in query_lower.chars() {
        // Never true over lowercased text; the operator keywords are protected
        // by the case-sensitive replacement instead.
        if is_reserved(&word) {
            word.clear();
            continue;
        }
        if matches!(ch, ' ' | '(' | ')') {
            if !word.is_empty() {
                converted = replace_term(&converted, &word, &document_lower);
                word.clear();
            }
            continue;
        }
        word.push(ch);
    }

    if !word.is_empty() {
        converted = replace_term(&converted, &word, &document_lower);
    }

    converted
}

fn is_reserved(word: &str) -> bool {
    matches!(word, "AND" | "OR" | "NOT")
}

fn replace_term(converted: &str, term: &str, document_lower: &str) -> String {
    let literal = if document_lower.contains(term) {
        "T"
    } else {
        "F"
    };
    converted.replace(term, literal)
}
