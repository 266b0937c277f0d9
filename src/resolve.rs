// src/resolve.rs
// Fuzzy lookup of a query name against the known-name universe.

/// Best fuzzy match for `query` among `candidates`, or the empty string
/// when nothing is comparable. Callers must treat the empty string as
/// "no suggestion", never as an error.
///
/// Only candidates sharing the query's first character (ASCII
/// case-insensitive) are compared at all; a typo in the first letter
/// yields no suggestion. Ties keep the first candidate in iteration
/// order, so pass candidates in a reproducible order.
pub fn find_similar<'a, I>(query: &str, candidates: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    let Some(first) = query.chars().next() else {
        return String::new();
    };

    let mut most_similar = String::new();
    let mut high_similarity = 0.0f64;

    for other in candidates {
        let same_bucket = other
            .chars()
            .next()
            .is_some_and(|c| c.eq_ignore_ascii_case(&first));
        if !same_bucket {
            continue;
        }
        let similarity = similarity_ratio(query, other);
        if similarity > high_similarity {
            most_similar = other.to_string();
            high_similarity = similarity;
        }
    }

    most_similar
}

/// Normalized overlap in [0, 1]: twice the number of aligned matching
/// characters (longest common subsequence) over the summed lengths.
pub fn similarity_ratio(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    if a.is_empty() && b.is_empty() {
        return 1.0;
    }

    // One-row LCS table; prev holds the upper-left diagonal.
    let mut row = vec![0usize; b.len() + 1];
    for ca in &a {
        let mut prev = 0;
        for (j, cb) in b.iter().enumerate() {
            let up = row[j + 1];
            row[j + 1] = if ca == cb { prev + 1 } else { up.max(row[j]) };
            prev = up;
        }
    }

    2.0 * row[b.len()] as f64 / (a.len() + b.len()) as f64
}
