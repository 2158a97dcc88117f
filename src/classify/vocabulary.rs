//! Static vocabulary and pattern tables for the heuristic classifier
//!
//! Tables are iterated in declaration order, which fixes the ordering of
//! derived tags, categories, and topics.

/// How a matched keyword is cased when it becomes a tag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagCasing {
    /// First letter upper-cased, rest untouched ("machine learning" → "Machine learning")
    Capitalized,
    /// Whole keyword upper-cased ("ux" → "UX")
    Upper,
}

impl TagCasing {
    /// Apply this casing rule to a lowercase keyword
    pub fn apply(&self, keyword: &str) -> String {
        match self {
            Self::Capitalized => {
                let mut chars = keyword.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                    None => String::new(),
                }
            }
            Self::Upper => keyword.to_uppercase(),
        }
    }
}

/// A keyword vocabulary tied to a category and a tag-casing rule
#[derive(Debug)]
pub struct Vocabulary {
    /// Category activated when any keyword matches
    pub category: &'static str,
    /// Casing rule for matched keywords
    pub casing: TagCasing,
    /// Lowercase keywords, matched by substring
    pub keywords: &'static [&'static str],
}

/// Keyword vocabularies, in activation order
pub const VOCABULARIES: &[Vocabulary] = &[
    Vocabulary {
        category: "Technology",
        casing: TagCasing::Capitalized,
        keywords: &[
            "react",
            "javascript",
            "typescript",
            "python",
            "nodejs",
            "api",
            "database",
            "frontend",
            "backend",
            "ai",
            "machine learning",
            "docker",
            "kubernetes",
        ],
    },
    Vocabulary {
        category: "Design",
        casing: TagCasing::Upper,
        keywords: &["ui", "ux", "design", "figma", "sketch", "typography", "color"],
    },
    Vocabulary {
        category: "Business",
        casing: TagCasing::Capitalized,
        keywords: &["meeting", "strategy", "product", "roadmap", "revenue", "growth"],
    },
    Vocabulary {
        category: "Learning",
        casing: TagCasing::Capitalized,
        keywords: &["tutorial", "guide", "learn", "course", "documentation"],
    },
];

/// Topic patterns as (word alternation, topic label), in match order.
///
/// Each alternation is compiled case-insensitively between word boundaries.
pub const TOPIC_PATTERNS: &[(&str, &str)] = &[
    ("web|frontend|backend|fullstack", "Web Development"),
    ("mobile|ios|android|app", "Mobile Development"),
    ("data|analytics|visualization", "Data Science"),
    ("ai|ml|neural|deep learning", "Artificial Intelligence"),
    ("design|ui|ux|user experience", "Design"),
    ("marketing|seo|content", "Marketing"),
    ("business|strategy|management", "Business"),
    ("tutorial|guide|how to", "Tutorial"),
];

/// Words counted toward a positive sentiment
pub const POSITIVE_WORDS: &[&str] = &[
    "great",
    "excellent",
    "awesome",
    "love",
    "amazing",
    "good",
    "best",
];

/// Words counted toward a negative sentiment
pub const NEGATIVE_WORDS: &[&str] = &[
    "bad",
    "terrible",
    "hate",
    "worst",
    "problem",
    "issue",
    "error",
];
