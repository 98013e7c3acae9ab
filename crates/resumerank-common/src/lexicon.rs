//! Fixed vocabularies used by the text feature extractors.
//!
//! The `const` tables are the built-in defaults; a `Lexicon` value carries
//! them (or a user override from config) into the scoring pipeline.

use serde::{Deserialize, Serialize};

/// Hedging words that suggest shallow experience.
pub const VAGUE_TERMS: &[&str] = &["basic", "familiar", "learning", "exposure"];

/// Words that claim depth of experience.
pub const STRONG_TERMS: &[&str] = &["expert", "advanced", "certified", "professional", "experienced"];

pub const VAGUE_TERM_WEIGHT: f64 = 0.3;
pub const STRONG_TERM_WEIGHT: f64 = 1.0;

/// (skill, evidence) pairs: a skill only counts when backed by its evidence term.
pub const SKILL_EVIDENCE: &[(&str, &str)] = &[
    ("python", "project"),
    ("java", "application"),
    ("machine learning", "model"),
    ("data science", "analysis"),
    ("web", "website"),
];

/// Standard English stop-word list excluded from the TF-IDF vocabulary.
pub const ENGLISH_STOP_WORDS: &[&str] = &[
    "a", "about", "above", "across", "after", "afterwards", "again", "against",
    "all", "almost", "alone", "along", "already", "also", "although", "always",
    "am", "among", "amongst", "amoungst", "amount", "an", "and", "another",
    "any", "anyhow", "anyone", "anything", "anyway", "anywhere", "are",
    "around", "as", "at", "back", "be", "became", "because", "become",
    "becomes", "becoming", "been", "before", "beforehand", "behind", "being",
    "below", "beside", "besides", "between", "beyond", "bill", "both",
    "bottom", "but", "by", "call", "can", "cannot", "cant", "co", "con",
    "could", "couldnt", "cry", "de", "describe", "detail", "do", "done",
    "down", "due", "during", "each", "eg", "eight", "either", "eleven", "else",
    "elsewhere", "empty", "enough", "etc", "even", "ever", "every", "everyone",
    "everything", "everywhere", "except", "few", "fifteen", "fifty", "fill",
    "find", "fire", "first", "five", "for", "former", "formerly", "forty",
    "found", "four", "from", "front", "full", "further", "get", "give", "go",
    "had", "has", "hasnt", "have", "he", "hence", "her", "here", "hereafter",
    "hereby", "herein", "hereupon", "hers", "herself", "him", "himself", "his",
    "how", "however", "hundred", "i", "ie", "if", "in", "inc", "indeed",
    "interest", "into", "is", "it", "its", "itself", "keep", "last", "latter",
    "latterly", "least", "less", "ltd", "made", "many", "may", "me",
    "meanwhile", "might", "mill", "mine", "more", "moreover", "most", "mostly",
    "move", "much", "must", "my", "myself", "name", "namely", "neither",
    "never", "nevertheless", "next", "nine", "no", "nobody", "none", "noone",
    "nor", "not", "nothing", "now", "nowhere", "of", "off", "often", "on",
    "once", "one", "only", "onto", "or", "other", "others", "otherwise", "our",
    "ours", "ourselves", "out", "over", "own", "part", "per", "perhaps",
    "please", "put", "rather", "re", "same", "see", "seem", "seemed",
    "seeming", "seems", "serious", "several", "she", "should", "show", "side",
    "since", "sincere", "six", "sixty", "so", "some", "somehow", "someone",
    "something", "sometime", "sometimes", "somewhere", "still", "such",
    "system", "take", "ten", "than", "that", "the", "their", "them",
    "themselves", "then", "thence", "there", "thereafter", "thereby",
    "therefore", "therein", "thereupon", "these", "they", "thick", "thin",
    "third", "this", "those", "though", "three", "through", "throughout",
    "thru", "thus", "to", "together", "too", "top", "toward", "towards",
    "twelve", "twenty", "two", "un", "under", "until", "up", "upon", "us",
    "very", "via", "was", "we", "well", "were", "what", "whatever", "when",
    "whence", "whenever", "where", "whereafter", "whereas", "whereby",
    "wherein", "whereupon", "wherever", "whether", "which", "while", "whither",
    "who", "whoever", "whole", "whom", "whose", "why", "will", "with",
    "within", "without", "would", "yet", "you", "your", "yours", "yourself",
    "yourselves",
];

/// A skill term and the evidence term that must accompany it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillPair {
    pub skill: String,
    pub evidence: String,
}

impl SkillPair {
    pub fn new(skill: impl Into<String>, evidence: impl Into<String>) -> Self {
        Self { skill: skill.into(), evidence: evidence.into() }
    }
}

/// Vocabularies for one scoring run. All terms are matched lower-case.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lexicon {
    #[serde(default = "default_vague_terms")]
    pub vague_terms: Vec<String>,

    #[serde(default = "default_vague_weight")]
    pub vague_weight: f64,

    #[serde(default = "default_strong_terms")]
    pub strong_terms: Vec<String>,

    #[serde(default = "default_strong_weight")]
    pub strong_weight: f64,

    #[serde(default = "default_skill_pairs")]
    pub skill_pairs: Vec<SkillPair>,

    #[serde(default = "default_stop_words")]
    pub stop_words: Vec<String>,
}

fn owned(terms: &[&str]) -> Vec<String> {
    terms.iter().map(|t| t.to_string()).collect()
}

fn default_vague_terms() -> Vec<String> { owned(VAGUE_TERMS) }
fn default_vague_weight() -> f64 { VAGUE_TERM_WEIGHT }
fn default_strong_terms() -> Vec<String> { owned(STRONG_TERMS) }
fn default_strong_weight() -> f64 { STRONG_TERM_WEIGHT }
fn default_skill_pairs() -> Vec<SkillPair> {
    SKILL_EVIDENCE.iter().map(|(s, e)| SkillPair::new(*s, *e)).collect()
}
fn default_stop_words() -> Vec<String> { owned(ENGLISH_STOP_WORDS) }

impl Default for Lexicon {
    fn default() -> Self {
        Self {
            vague_terms: default_vague_terms(),
            vague_weight: default_vague_weight(),
            strong_terms: default_strong_terms(),
            strong_weight: default_strong_weight(),
            skill_pairs: default_skill_pairs(),
            stop_words: default_stop_words(),
        }
    }
}

impl Lexicon {
    /// Lower-case every term so matching can assume lower-case input.
    pub fn lowercased(mut self) -> Self {
        let lower = |v: &mut Vec<String>| v.iter_mut().for_each(|t| *t = t.to_lowercase());
        lower(&mut self.vague_terms);
        lower(&mut self.strong_terms);
        lower(&mut self.stop_words);
        for pair in &mut self.skill_pairs {
            pair.skill = pair.skill.to_lowercase();
            pair.evidence = pair.evidence.to_lowercase();
        }
        self
    }

    pub fn is_stop_word(&self, token: &str) -> bool {
        self.stop_words.iter().any(|w| w == token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_lexicon_matches_tables() {
        let lex = Lexicon::default();
        assert_eq!(lex.vague_terms.len(), 4);
        assert_eq!(lex.strong_terms.len(), 5);
        assert_eq!(lex.skill_pairs[2], SkillPair::new("machine learning", "model"));
        assert!((lex.vague_weight - 0.3).abs() < 1e-12);
        assert!((lex.strong_weight - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_stop_words_cover_common_terms() {
        let lex = Lexicon::default();
        assert!(lex.is_stop_word("the"));
        assert!(lex.is_stop_word("with"));
        assert!(!lex.is_stop_word("python"));
        assert!(!lex.is_stop_word("hello"));
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let lex: Lexicon = serde_yaml::from_str("vague_terms: [beginner]\n").unwrap();
        assert_eq!(lex.vague_terms, vec!["beginner".to_string()]);
        assert_eq!(lex.strong_terms.len(), 5);
        assert_eq!(lex.skill_pairs.len(), 5);
    }

    #[test]
    fn test_lowercased() {
        let lex = Lexicon {
            strong_terms: vec!["EXPERT".to_string()],
            skill_pairs: vec![SkillPair::new("Rust", "Crate")],
            ..Default::default()
        }
        .lowercased();
        assert_eq!(lex.strong_terms, vec!["expert".to_string()]);
        assert_eq!(lex.skill_pairs[0], SkillPair::new("rust", "crate"));
    }
}
