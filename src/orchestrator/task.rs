//! Task categories and keyword classification.
//!
//! A prompt is classified by scanning an ordered rule table; the first
//! rule with a keyword present in the lower-cased prompt wins. Rule
//! order is significant: review keywords take precedence over debug
//! keywords, and so on down the table.

use serde::{Deserialize, Serialize};

/// The kind of work a prompt is asking for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskCategory {
    /// Straightforward code generation
    SimpleCode,
    /// Complex algorithm design or optimization
    ComplexAlgorithm,
    /// Code review
    CodeReview,
    /// Debugging and error analysis
    Debugging,
    /// Documentation writing
    Documentation,
    /// Research and lookup of current information
    Research,
    /// Frontend / UI development
    Frontend,
}

impl TaskCategory {
    /// All categories, in declaration order.
    pub const ALL: &'static [TaskCategory] = &[
        TaskCategory::SimpleCode,
        TaskCategory::ComplexAlgorithm,
        TaskCategory::CodeReview,
        TaskCategory::Debugging,
        TaskCategory::Documentation,
        TaskCategory::Research,
        TaskCategory::Frontend,
    ];

    /// Identifier used in config files and the `--task` flag.
    pub fn id(self) -> &'static str {
        match self {
            TaskCategory::SimpleCode => "simple_code",
            TaskCategory::ComplexAlgorithm => "complex_algorithm",
            TaskCategory::CodeReview => "code_review",
            TaskCategory::Debugging => "debugging",
            TaskCategory::Documentation => "documentation",
            TaskCategory::Research => "research",
            TaskCategory::Frontend => "frontend",
        }
    }

    /// Parse from the id string.
    pub fn from_id(id: &str) -> Option<Self> {
        match id {
            "simple_code" => Some(TaskCategory::SimpleCode),
            "complex_algorithm" => Some(TaskCategory::ComplexAlgorithm),
            "code_review" => Some(TaskCategory::CodeReview),
            "debugging" => Some(TaskCategory::Debugging),
            "documentation" => Some(TaskCategory::Documentation),
            "research" => Some(TaskCategory::Research),
            "frontend" => Some(TaskCategory::Frontend),
            _ => None,
        }
    }
}

impl std::fmt::Display for TaskCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

const REVIEW_KEYWORDS: &[&str] = &["review", "レビュー", "チェック"];
const DEBUG_KEYWORDS: &[&str] = &["debug", "バグ", "エラー", "修正"];
const FRONTEND_KEYWORDS: &[&str] = &["frontend", "ui", "react", "css", "デザイン"];
const ALGORITHM_KEYWORDS: &[&str] = &["algorithm", "アルゴリズム", "最適化", "複雑"];
const DOCUMENTATION_KEYWORDS: &[&str] = &["doc", "ドキュメント", "説明", "readme"];
const RESEARCH_KEYWORDS: &[&str] = &["search", "調査", "検索", "最新"];

/// Ordered classification rules; the first match wins.
const RULES: &[(&[&str], TaskCategory)] = &[
    (REVIEW_KEYWORDS, TaskCategory::CodeReview),
    (DEBUG_KEYWORDS, TaskCategory::Debugging),
    (FRONTEND_KEYWORDS, TaskCategory::Frontend),
    (ALGORITHM_KEYWORDS, TaskCategory::ComplexAlgorithm),
    (DOCUMENTATION_KEYWORDS, TaskCategory::Documentation),
    (RESEARCH_KEYWORDS, TaskCategory::Research),
];

/// Classify a prompt into a task category.
///
/// Pure function: case-insensitive substring matching against the rule
/// table, defaulting to [`TaskCategory::SimpleCode`] when nothing
/// matches.
pub fn classify(prompt: &str) -> TaskCategory {
    let lower = prompt.to_lowercase();
    for (keywords, category) in RULES {
        if keywords.iter().any(|kw| lower.contains(kw)) {
            return *category;
        }
    }
    TaskCategory::SimpleCode
}
