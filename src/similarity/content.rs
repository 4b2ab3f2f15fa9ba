//! Page-content similarity via TF-IDF cosine over a two-document corpus
//!
//! Each text is vectorized against the vocabulary of the pair, with smoothed
//! inverse document frequency and L2 normalization, and the score is 100x the
//! cosine of the two vectors.

use std::collections::HashMap;

/// Content similarity in `[0, 100]` between two text bodies.
///
/// Returns 0.0 when either input is empty, and 0.0 when no vocabulary can be
/// extracted from either text (e.g. punctuation-only bodies) rather than
/// failing.
pub fn score(a: &str, b: &str) -> f64 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }

    let terms_a = tokenize(a);
    let terms_b = tokenize(b);

    let mut vocabulary: Vec<&str> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();
    for term in terms_a.keys().chain(terms_b.keys()) {
        if !index.contains_key(term.as_str()) {
            index.insert(term, vocabulary.len());
            vocabulary.push(term);
        }
    }

    // Empty vocabulary: neither text yielded any terms
    if vocabulary.is_empty() {
        return 0.0;
    }

    let vec_a = tfidf_vector(&terms_a, &terms_b, &vocabulary);
    let vec_b = tfidf_vector(&terms_b, &terms_a, &vocabulary);

    100.0 * cosine(&vec_a, &vec_b)
}

/// Term counts: lowercase alphanumeric runs of length >= 2.
fn tokenize(text: &str) -> HashMap<String, usize> {
    let mut counts = HashMap::new();
    for token in text
        .split(|c: char| !c.is_alphanumeric())
        .filter(|t| t.chars().count() >= 2)
    {
        *counts.entry(token.to_lowercase()).or_insert(0) += 1;
    }
    counts
}

/// TF-IDF vector for `own` over the pair corpus, L2-normalized.
///
/// Smoothed IDF over the two-document corpus: `ln((1 + n) / (1 + df)) + 1`
/// with n = 2, so a term in both documents weighs 1.0 and a term in one
/// weighs `ln(3/2) + 1`.
fn tfidf_vector(
    own: &HashMap<String, usize>,
    other: &HashMap<String, usize>,
    vocabulary: &[&str],
) -> Vec<f64> {
    let mut vector: Vec<f64> = vocabulary
        .iter()
        .map(|term| {
            let tf = *own.get(*term).unwrap_or(&0) as f64;
            let df = 1 + usize::from(other.contains_key(*term));
            let idf = ((1.0 + 2.0) / (1.0 + df as f64)).ln() + 1.0;
            tf * idf
        })
        .collect();

    let norm: f64 = vector.iter().map(|v| v * v).sum::<f64>().sqrt();
    if norm > 0.0 {
        for v in &mut vector {
            *v /= norm;
        }
    }
    vector
}

fn cosine(a: &[f64], b: &[f64]) -> f64 {
    // Inputs are already L2-normalized, so the dot product is the cosine.
    a.iter().zip(b).map(|(x, y)| x * y).sum::<f64>().clamp(0.0, 1.0)
}
