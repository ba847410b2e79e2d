//! Corpus normalization.
//!
//! Every extraction run searches a single lowercase string. Document mode
//! passes one block (the document body); conversation mode passes the turn
//! contents in order, already stripped of the leading system turns.

/// Lowercase `sources` and join them with a single space, preserving order.
///
/// An empty iterator yields an empty corpus.
pub(crate) fn normalize<I, S>(sources: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut corpus = String::new();
    for (idx, source) in sources.into_iter().enumerate() {
        if idx > 0 {
            corpus.push(' ');
        }
        corpus.push_str(&source.as_ref().to_lowercase());
    }
    corpus
}
