//! Deterministic fuzzy recipe matching, no embeddings required.
//!
//! Two phases share one similarity metric so their scores sort together:
//!
//! - Phase A: closest recipe names to the query, minimum ratio
//!   `name_cutoff`, capped at `top_k`.
//! - Phase B: token-level content scan over recipes Phase A missed, only
//!   attempted while fewer than `top_k` results exist; a recipe qualifies
//!   strictly above `content_cutoff`.

use krua_core::config::SearchConfig;
use krua_core::{MatchKind, RecipeCorpus, SearchMode, SearchResult};

/// Normalized matching-subsequence ratio between two strings.
///
/// `2 * LCS(a, b) / (|a| + |b|)` over chars: symmetric, 1.0 for identical
/// strings, 0.0 for wholly dissimilar ones. Two empty strings are
/// identical (1.0). This is the subsequence-based ratio family, not edit
/// distance; it rewards a query appearing inside a longer name more than
/// edit distance would.
pub fn sequence_ratio(a: &str, b: &str) -> f64 {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();
    let total = a_chars.len() + b_chars.len();
    if total == 0 {
        return 1.0;
    }
    if a_chars.is_empty() || b_chars.is_empty() {
        return 0.0;
    }

    // Longest common subsequence, two-row DP.
    let mut prev = vec![0usize; b_chars.len() + 1];
    let mut curr = vec![0usize; b_chars.len() + 1];
    for &ca in &a_chars {
        for (j, &cb) in b_chars.iter().enumerate() {
            curr[j + 1] = if ca == cb {
                prev[j] + 1
            } else {
                prev[j + 1].max(curr[j])
            };
        }
        std::mem::swap(&mut prev, &mut curr);
    }
    let lcs = prev[b_chars.len()];

    (2 * lcs) as f64 / total as f64
}

/// Best token-level ratio of `query` against whitespace tokens of `text`.
fn best_token_ratio(query: &str, text: &str) -> f64 {
    text.split_whitespace()
        .map(|token| sequence_ratio(query, token))
        .fold(0.0, f64::max)
}

/// Fuzzy search over the corpus.
///
/// Results are sorted by similarity descending (stable: phase A entries
/// precede phase B entries on equal scores) and truncated to `top_k`.
pub fn fuzzy_search(
    query: &str,
    corpus: &RecipeCorpus,
    top_k: usize,
    mode: SearchMode,
    config: &SearchConfig,
) -> Vec<SearchResult> {
    let query_lower = query.to_lowercase();
    let mut results: Vec<SearchResult> = Vec::new();

    // Phase A: direct name matching.
    if matches!(mode, SearchMode::Combined | SearchMode::Name) {
        let mut name_matches: Vec<(usize, f64)> = corpus
            .iter()
            .enumerate()
            .map(|(idx, recipe)| (idx, sequence_ratio(&query_lower, &recipe.name.to_lowercase())))
            .filter(|(_, ratio)| *ratio >= config.name_cutoff)
            .collect();
        name_matches
            .sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
        name_matches.truncate(top_k);

        for (idx, similarity) in name_matches {
            let recipe = match corpus.get(idx) {
                Some(recipe) => recipe,
                None => continue,
            };
            results.push(SearchResult {
                name: recipe.name.clone(),
                similarity,
                ingredients: recipe.ingredient.clone(),
                method: recipe.method.clone(),
                index: idx,
                match_kind: MatchKind::Fuzzy,
                search_mode: mode,
            });
        }
    }

    // Phase B: content scan for the remaining slots.
    if results.len() < top_k {
        let seen: Vec<usize> = results.iter().map(|r| r.index).collect();
        for (idx, recipe) in corpus.iter().enumerate() {
            if seen.contains(&idx) {
                continue;
            }

            let name_lower = recipe.name.to_lowercase();
            let ingredients_lower = recipe.ingredient.to_lowercase();
            let method_lower = recipe.method.to_lowercase();

            let score = match mode {
                SearchMode::Ingredient => best_token_ratio(&query_lower, &ingredients_lower),
                SearchMode::Name => sequence_ratio(&query_lower, &name_lower),
                SearchMode::Combined => sequence_ratio(&query_lower, &name_lower)
                    .max(best_token_ratio(&query_lower, &ingredients_lower))
                    .max(best_token_ratio(&query_lower, &method_lower)),
            };

            if score > config.content_cutoff {
                results.push(SearchResult {
                    name: recipe.name.clone(),
                    similarity: score,
                    ingredients: recipe.ingredient.clone(),
                    method: recipe.method.clone(),
                    index: idx,
                    match_kind: MatchKind::ContentMatch,
                    search_mode: mode,
                });
            }
        }
    }

    results.sort_by(|a, b| {
        b.similarity
            .partial_cmp(&a.similarity)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    results.truncate(top_k);
    results
}

#[cfg(test)]
mod tests {
    use super::*;
    use krua_core::Recipe;

    fn thai_corpus() -> RecipeCorpus {
        RecipeCorpus::from_records(vec![
            Recipe::new("ต้มยำกุ้ง", "กุ้ง 200 กรัม\nตะไคร้ 2 ต้น\nใบมะกรูด", "ต้มน้ำ ใส่กุ้ง ปรุงรส"),
            Recipe::new("ผัดไทย", "เส้นจันท์\nกุ้งแห้ง\nถั่วงอก", "แช่เส้น ผัดกับซอส"),
            Recipe::new("แกงเผ็ดไก่", "ไก่ 300 กรัม\nพริกแกง\nกะทิ", "ผัดพริกแกง ใส่ไก่"),
            Recipe::new("ส้มตำ", "มะละกอ\nพริก 5 เม็ด\nมะนาว", "ตำส่วนผสมรวมกัน"),
            Recipe::new("ข้าวผัด", "ข้าว 2 ถ้วย\nไข่ 2 ฟอง", "ผัดข้าวกับไข่"),
        ])
    }

    fn config() -> SearchConfig {
        SearchConfig::default()
    }

    #[test]
    fn test_ratio_identical() {
        assert!((sequence_ratio("ต้มยำ", "ต้มยำ") - 1.0).abs() < 1e-9);
        assert!((sequence_ratio("", "") - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_ratio_disjoint() {
        assert_eq!(sequence_ratio("abc", "xyz"), 0.0);
        assert_eq!(sequence_ratio("", "ต้มยำ"), 0.0);
    }

    #[test]
    fn test_ratio_symmetric() {
        let ab = sequence_ratio("ต้มยำ", "ต้มยำกุ้ง");
        let ba = sequence_ratio("ต้มยำกุ้ง", "ต้มยำ");
        assert!((ab - ba).abs() < 1e-12);
    }

    #[test]
    fn test_ratio_prefix_query() {
        // 5-char query fully inside the 9-char name: 2*5/14.
        let ratio = sequence_ratio("ต้มยำ", "ต้มยำกุ้ง");
        assert!((ratio - 10.0 / 14.0).abs() < 1e-9);
    }

    #[test]
    fn test_name_phase_ranks_query_containment_first() {
        // ส้มตำ shares chars with ต้มยำ but ต้มยำกุ้ง contains the whole query.
        assert!(
            sequence_ratio("ต้มยำ", "ต้มยำกุ้ง") > sequence_ratio("ต้มยำ", "ส้มตำ")
        );
    }

    #[test]
    fn test_fuzzy_name_mode_finds_tom_yum() {
        let results = fuzzy_search("ต้มยำ", &thai_corpus(), 3, SearchMode::Name, &config());
        assert!(!results.is_empty());
        assert_eq!(results[0].name, "ต้มยำกุ้ง");
        assert_eq!(results[0].match_kind, MatchKind::Fuzzy);
        assert_eq!(results[0].index, 0);
    }

    #[test]
    fn test_fuzzy_results_sorted_descending() {
        let results = fuzzy_search("ต้มยำ", &thai_corpus(), 5, SearchMode::Name, &config());
        for pair in results.windows(2) {
            assert!(pair[0].similarity >= pair[1].similarity);
        }
    }

    #[test]
    fn test_fuzzy_respects_top_k() {
        let results = fuzzy_search("ต้มยำ", &thai_corpus(), 1, SearchMode::Name, &config());
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].name, "ต้มยำกุ้ง");
    }

    #[test]
    fn test_fuzzy_no_duplicate_indices() {
        let results = fuzzy_search("กุ้ง", &thai_corpus(), 5, SearchMode::Combined, &config());
        let mut indices: Vec<usize> = results.iter().map(|r| r.index).collect();
        indices.sort_unstable();
        indices.dedup();
        assert_eq!(indices.len(), results.len());
    }

    #[test]
    fn test_ingredient_mode_skips_name_phase() {
        // Ingredient mode never produces Fuzzy (phase A) entries.
        let results =
            fuzzy_search("กุ้ง", &thai_corpus(), 5, SearchMode::Ingredient, &config());
        assert!(results
            .iter()
            .all(|r| r.match_kind == MatchKind::ContentMatch));
        // กุ้ง appears as an ingredient token of ต้มยำกุ้ง.
        assert!(results.iter().any(|r| r.index == 0));
    }

    #[test]
    fn test_content_match_tagging() {
        // เส้นจันท์ is an ingredient token of ผัดไทย only; the query misses
        // every recipe name so phase B produces the match.
        let results = fuzzy_search(
            "เส้นจันท์",
            &thai_corpus(),
            5,
            SearchMode::Combined,
            &config(),
        );
        let pad_thai = results.iter().find(|r| r.index == 1).unwrap();
        assert_eq!(pad_thai.match_kind, MatchKind::ContentMatch);
        assert!(pad_thai.similarity > config().content_cutoff);
    }

    #[test]
    fn test_equal_scores_keep_phase_a_first() {
        // Both recipes score 1.0: one by name (phase A), one by an
        // ingredient token (phase B). The stable sort keeps phase A ahead.
        let corpus = RecipeCorpus::from_records(vec![
            Recipe::new("พริกเผา", "น้ำตาล\nกระเทียม", "เคี่ยวจนข้น"),
            Recipe::new("น้ำจิ้มไก่", "พริกเผา\nน้ำส้มสายชู", "ผสมให้เข้ากัน"),
        ]);
        let results = fuzzy_search("พริกเผา", &corpus, 5, SearchMode::Combined, &config());
        assert_eq!(results.len(), 2);
        assert!((results[0].similarity - 1.0).abs() < 1e-9);
        assert!((results[1].similarity - 1.0).abs() < 1e-9);
        assert_eq!(results[0].match_kind, MatchKind::Fuzzy);
        assert_eq!(results[1].match_kind, MatchKind::ContentMatch);
    }

    #[test]
    fn test_empty_query_returns_nothing() {
        assert!(fuzzy_search("", &thai_corpus(), 5, SearchMode::Combined, &config()).is_empty());
    }

    #[test]
    fn test_empty_corpus_returns_nothing() {
        let corpus = RecipeCorpus::default();
        assert!(fuzzy_search("ต้มยำ", &corpus, 5, SearchMode::Name, &config()).is_empty());
    }

    #[test]
    fn test_unrelated_query_returns_nothing() {
        let results = fuzzy_search(
            "pizza margherita",
            &thai_corpus(),
            5,
            SearchMode::Combined,
            &config(),
        );
        assert!(results.is_empty());
    }
}
