use crate::domain::model::{CompatibilityResult, Tier};
use crate::utils::error::Result;
use crate::utils::validation::{is_input_whitespace, require_non_blank};
use std::collections::HashMap;

const BASE_SCORE: f64 = 50.0;
const MIN_SCORE: f64 = 10.0;
const MAX_SCORE: f64 = 100.0;

/// Scores two names on a 10..=100 scale.
///
/// Fully deterministic: the "random" adjustment is derived from the first
/// character of each name as typed. Halves round away from zero.
pub fn score(name_a: &str, name_b: &str) -> Result<CompatibilityResult> {
    require_non_blank("name_a", name_a)?;
    require_non_blank("name_b", name_b)?;

    let combined: String = format!("{}{}", name_a, name_b)
        .to_lowercase()
        .chars()
        .filter(|c| !is_input_whitespace(*c))
        .collect();

    let mut frequency: HashMap<char, usize> = HashMap::new();
    for c in combined.chars() {
        *frequency.entry(c).or_insert(0) += 1;
    }

    let total_chars = combined.chars().count();
    let common_chars = total_chars - frequency.len();
    // 長度差使用原始輸入（未正規化）
    let length_factor = name_a.chars().count().abs_diff(name_b.chars().count());
    let vowel_count = combined
        .chars()
        .filter(|c| matches!(c, 'a' | 'e' | 'i' | 'o' | 'u'))
        .count();
    let adjustment = name_adjustment(name_a, name_b);

    let mut raw = BASE_SCORE;
    raw += common_chars as f64 * 3.0;
    raw -= length_factor as f64 * 2.0;
    raw += vowel_count as f64 * 1.5;
    raw += adjustment as f64;

    let value = raw.clamp(MIN_SCORE, MAX_SCORE).round() as u8;

    tracing::debug!(
        combined = %combined,
        common_chars,
        length_factor,
        vowel_count,
        adjustment,
        raw,
        value,
        "Computed compatibility score"
    );

    Ok(CompatibilityResult {
        score: value,
        tier: tier_for(i64::from(value)),
    })
}

/// First matching band, evaluated from the top.
pub fn tier_for(value: i64) -> Tier {
    Tier::ALL
        .into_iter()
        .find(|tier| value >= tier.threshold())
        .unwrap_or(Tier::BetterAsFriends)
}

/// (first(a) + first(b)) mod 30 - 15, on the untrimmed inputs.
fn name_adjustment(name_a: &str, name_b: &str) -> i64 {
    let first = |s: &str| s.chars().next().map(|c| c as i64).unwrap_or(0);
    (first(name_a) + first(name_b)) % 30 - 15
}
