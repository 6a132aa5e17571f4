//! # Sentiment scoring
//!
//! Lexicon/rule based polarity scoring in the VADER family.
//!
//! Each token is looked up in a valence lexicon (roughly -4..4). A booster
//! word just before a hit strengthens it, a negation just before flips and
//! dampens it. The token valences are folded into the familiar four-score
//! shape: `negative`/`neutral`/`positive` proportions that sum to 1, and a
//! `compound` scalar in [-1, 1] from the normalized valence sum.
//!
//! The scorer sits behind a trait so the query and ingestion paths only
//! depend on the score contract, not on this implementation.

use std::collections::HashMap;

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SentimentScores {
    pub negative: f64,
    pub neutral: f64,
    pub positive: f64,
    pub compound: f64,
}

/// Scores free text for polarity. Implementations must be deterministic for
/// identical input within a process and must not fail on well-formed text.
pub trait SentimentScorer: Send + Sync {
    fn score(&self, text: &str) -> SentimentScores;
}

const NEGATIONS: [&str; 20] = [
    "not", "no", "never", "nothing", "none", "neither", "nor", "hardly", "barely", "cannot",
    "can't", "don't", "didn't", "doesn't", "isn't", "wasn't", "weren't", "won't", "couldn't",
    "wouldn't",
];

const BOOSTERS: [&str; 8] = [
    "very",
    "really",
    "extremely",
    "absolutely",
    "incredibly",
    "truly",
    "super",
    "totally",
];

const NEGATION_DAMPENER: f64 = -0.74;
const BOOSTER_INCREMENT: f64 = 0.29;

// Valence lexicon, general polarity words plus the vocabulary that actually
// shows up in restaurant reviews.
const LEXICON: [(&str, f64); 96] = [
    ("amazing", 2.8),
    ("awesome", 3.1),
    ("excellent", 2.7),
    ("outstanding", 3.0),
    ("fantastic", 2.6),
    ("incredible", 2.5),
    ("wonderful", 2.7),
    ("perfect", 2.7),
    ("superb", 2.9),
    ("delicious", 2.6),
    ("tasty", 1.9),
    ("flavorful", 1.8),
    ("fresh", 1.3),
    ("crisp", 1.1),
    ("tender", 1.2),
    ("juicy", 1.4),
    ("great", 2.1),
    ("good", 1.9),
    ("nice", 1.8),
    ("fine", 0.8),
    ("decent", 1.0),
    ("solid", 1.1),
    ("enjoyable", 1.9),
    ("enjoyed", 1.8),
    ("love", 3.2),
    ("loved", 2.9),
    ("like", 1.5),
    ("liked", 1.6),
    ("favorite", 2.0),
    ("best", 3.2),
    ("better", 1.9),
    ("friendly", 2.2),
    ("welcoming", 1.9),
    ("attentive", 1.6),
    ("helpful", 1.8),
    ("polite", 1.7),
    ("prompt", 1.3),
    ("quick", 1.1),
    ("fast", 0.9),
    ("clean", 1.4),
    ("cozy", 1.5),
    ("charming", 2.0),
    ("generous", 1.9),
    ("recommend", 1.7),
    ("recommended", 1.7),
    ("worth", 1.2),
    ("happy", 2.1),
    ("pleased", 1.8),
    ("satisfied", 1.6),
    ("impressed", 2.0),
    ("gem", 1.9),
    ("terrible", -2.6),
    ("horrible", -2.8),
    ("awful", -2.7),
    ("disgusting", -3.0),
    ("dreadful", -2.6),
    ("atrocious", -2.9),
    ("bad", -2.0),
    ("worst", -3.1),
    ("worse", -2.1),
    ("poor", -1.8),
    ("mediocre", -1.2),
    ("bland", -1.4),
    ("tasteless", -1.7),
    ("stale", -1.8),
    ("soggy", -1.5),
    ("greasy", -1.3),
    ("burnt", -1.6),
    ("undercooked", -1.8),
    ("overcooked", -1.6),
    ("raw", -1.0),
    ("cold", -1.2),
    ("dry", -1.1),
    ("salty", -0.9),
    ("rude", -2.4),
    ("unfriendly", -2.0),
    ("slow", -1.3),
    ("dirty", -2.1),
    ("filthy", -2.6),
    ("noisy", -1.1),
    ("crowded", -0.8),
    ("expensive", -1.0),
    ("overpriced", -1.8),
    ("rip", -1.9),
    ("waited", -0.9),
    ("wait", -0.6),
    ("disappointed", -2.2),
    ("disappointing", -2.1),
    ("disappointment", -2.2),
    ("hate", -2.7),
    ("hated", -2.6),
    ("avoid", -1.9),
    ("inedible", -2.8),
    ("sick", -2.2),
    ("complaint", -1.4),
    ("refund", -1.3),
];

pub struct LexiconScorer {
    lexicon: HashMap<&'static str, f64>,
}

impl LexiconScorer {
    pub fn new() -> Self {
        Self {
            lexicon: LEXICON.iter().copied().collect(),
        }
    }
}

impl Default for LexiconScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl SentimentScorer for LexiconScorer {
    fn score(&self, text: &str) -> SentimentScores {
        let tokens = tokenize(text);

        let mut valence_sum = 0.0;
        let mut positive_sum = 0.0;
        let mut negative_sum = 0.0;
        let mut neutral_count = 0usize;

        for (index, token) in tokens.iter().enumerate() {
            let Some(&base) = self.lexicon.get(token.as_str()) else {
                neutral_count += 1;
                continue;
            };

            // Look back two tokens for boosters and negations.
            let mut valence = base;
            for prior in &tokens[index.saturating_sub(2)..index] {
                if BOOSTERS.contains(&prior.as_str()) {
                    valence += BOOSTER_INCREMENT.copysign(base);
                }
                if NEGATIONS.contains(&prior.as_str()) {
                    valence *= NEGATION_DAMPENER;
                }
            }

            valence_sum += valence;
            if valence > 0.0 {
                positive_sum += valence + 1.0;
            } else if valence < 0.0 {
                negative_sum += valence.abs() + 1.0;
            } else {
                neutral_count += 1;
            }
        }

        let total = positive_sum + negative_sum + neutral_count as f64;
        if total == 0.0 {
            return SentimentScores {
                negative: 0.0,
                neutral: 1.0,
                positive: 0.0,
                compound: 0.0,
            };
        }

        SentimentScores {
            negative: round3(negative_sum / total),
            neutral: round3(neutral_count as f64 / total),
            positive: round3(positive_sum / total),
            compound: round4(normalize(valence_sum)),
        }
    }
}

/// Maps an unbounded valence sum into [-1, 1].
fn normalize(valence_sum: f64) -> f64 {
    (valence_sum / (valence_sum * valence_sum + 15.0).sqrt()).clamp(-1.0, 1.0)
}

fn tokenize(text: &str) -> Vec<String> {
    text.split(|c: char| !c.is_alphanumeric() && c != '\'')
        .map(|word| word.trim_matches('\'').to_lowercase())
        .filter(|word| !word.is_empty())
        .collect()
}

fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

fn round4(value: f64) -> f64 {
    (value * 10000.0).round() / 10000.0
}
