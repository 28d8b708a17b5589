//! Ordered keyword intent rules.
//!
//! Rules are evaluated in priority order and the first rule whose keywords
//! match the normalized message wins.

use crate::text::normalize;

/// Longest suffix a token may carry beyond a single-word keyword
/// (`fee` matches `fees`, `bus` does not match `business`).
const MAX_SUFFIX_LEN: usize = 3;

/// How a rule combines its keywords.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeywordMode {
    /// At least one keyword must match
    Any,
    /// Every keyword must match
    All,
}

/// A keyword-triggered intent with a canned reply.
#[derive(Debug, Clone)]
pub struct IntentRule {
    /// Intent name reported with the reply
    pub name: String,

    /// Normalized keywords (single words or phrases)
    pub keywords: Vec<String>,

    /// Keyword combination mode
    pub mode: KeywordMode,

    /// Reply text
    pub reply: String,
}

impl IntentRule {
    /// Create a rule; keywords are normalized and empty ones dropped.
    pub fn new(name: &str, keywords: &[&str], mode: KeywordMode, reply: &str) -> Self {
        let keywords = keywords
            .iter()
            .map(|k| normalize(k))
            .filter(|k| !k.is_empty())
            .collect();

        Self {
            name: name.to_string(),
            keywords,
            mode,
            reply: reply.to_string(),
        }
    }

    /// Whether this rule fires for a normalized message.
    pub fn matches(&self, normalized: &str) -> bool {
        if self.keywords.is_empty() {
            return false;
        }

        let tokens: Vec<&str> = normalized.split_whitespace().collect();
        let hit = |keyword: &String| keyword_matches(keyword, normalized, &tokens);

        match self.mode {
            KeywordMode::Any => self.keywords.iter().any(hit),
            KeywordMode::All => self.keywords.iter().all(hit),
        }
    }
}

/// Check one normalized keyword against a normalized message.
fn keyword_matches(keyword: &str, normalized: &str, tokens: &[&str]) -> bool {
    if keyword.contains(' ') {
        contains_phrase(normalized, keyword)
    } else {
        tokens.iter().any(|token| {
            token.starts_with(keyword)
                && token[keyword.len()..].chars().count() <= MAX_SUFFIX_LEN
        })
    }
}

/// Whether `phrase` occurs in `text` on word boundaries (both normalized).
pub fn contains_phrase(text: &str, phrase: &str) -> bool {
    if phrase.is_empty() {
        return false;
    }
    format!(" {} ", text).contains(&format!(" {} ", phrase))
}

/// Intent rules evaluated in order.
#[derive(Debug, Clone, Default)]
pub struct RuleSet {
    rules: Vec<IntentRule>,
}

impl RuleSet {
    /// Create a rule set from rules in priority order.
    pub fn new(rules: Vec<IntentRule>) -> Self {
        Self { rules }
    }

    /// First rule matching the normalized message.
    pub fn evaluate(&self, normalized: &str) -> Option<&IntentRule> {
        self.rules.iter().find(|rule| rule.matches(normalized))
    }

    /// Number of rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether there are no rules.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Rule names in priority order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.rules.iter().map(|r| r.name.as_str())
    }
}

/// The college chatbot's intent rules.
pub fn default_rules() -> RuleSet {
    use KeywordMode::*;

    RuleSet::new(vec![
        IntentRule::new(
            "help",
            &["help", "what can you do", "options"],
            Any,
            "You can ask me about:\n\
             - admissions\n\
             - fees\n\
             - courses and departments\n\
             - hostel, library and transport\n\
             - placements\n\
             - contact details and campus location\n\
             - college timings\n\
             or any other question about the college.",
        ),
        IntentRule::new(
            "admission",
            &["admission", "apply", "application", "enroll", "enrol"],
            Any,
            "Admissions for UG and PG programmes open in May. Apply online through the college \
             admissions portal or collect an application form from the admission office.",
        ),
        IntentRule::new(
            "fees",
            &["fee", "tuition"],
            Any,
            "Fee details vary by programme. The tuition fee is due by 17 July 2025; \
             contact the accounts office for the full fee structure.",
        ),
        IntentRule::new(
            "courses",
            &["course", "department", "programme", "program", "degree"],
            Any,
            "Departments include Data Science, Computer Science, Mathematics, Commerce, \
             English, History, Tamil, Biotechnology, Artificial Intelligence, BBA and BCA.",
        ),
        IntentRule::new(
            "hostel",
            &["hostel", "accommodation"],
            Any,
            "Separate hostels for men and women are available on campus. Apply at the \
             warden's office after confirming admission.",
        ),
        IntentRule::new(
            "library",
            &["library", "books"],
            Any,
            "The central library is open from 8 AM to 8 PM on working days and holds \
             over 100,000 volumes plus e-journal access.",
        ),
        IntentRule::new(
            "transport",
            &["bus", "transport"],
            Any,
            "College buses run on major routes across Madurai. Bus passes are issued by \
             the transport office.",
        ),
        IntentRule::new(
            "placement",
            &["placement", "recruit", "recruiter"],
            Any,
            "The placement cell conducts training and campus recruitment drives every \
             year. Register with the placement office in your final year.",
        ),
        IntentRule::new(
            "contact",
            &["contact", "phone number", "email"],
            Any,
            "You can reach the college office during working hours by phone or email; \
             details are listed on the official website.",
        ),
        IntentRule::new(
            "location",
            &["location", "located", "address", "where is the college"],
            Any,
            "The American College Satellite Campus is located at Chatrapatti, Madurai.",
        ),
        IntentRule::new(
            "timings",
            &["timing", "working hours", "office hours"],
            Any,
            "College working hours are 9 AM to 4 PM, Monday to Saturday.",
        ),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_word_suffix_matching() {
        let rule = IntentRule::new("fees", &["fee"], KeywordMode::Any, "fees");
        assert!(rule.matches("what are the fees"));
        assert!(rule.matches("fee details"));
        assert!(!rule.matches("give feedback"));
    }

    #[test]
    fn test_suffix_limit_counts_characters() {
        let rule = IntentRule::new("fees", &["fee"], KeywordMode::Any, "fees");
        // Two Tamil letters, six bytes
        assert!(rule.matches("feeகள"));
        assert!(!rule.matches("feeகளைப"));
    }

    #[test]
    fn test_phrase_matching_on_word_boundaries() {
        let rule = IntentRule::new("hours", &["office hours"], KeywordMode::Any, "hours");
        assert!(rule.matches("what are the office hours"));
        assert!(!rule.matches("backoffice hours"));
    }

    #[test]
    fn test_all_mode_requires_every_keyword() {
        let rule = IntentRule::new("exam fee", &["exam", "fee"], KeywordMode::All, "x");
        assert!(rule.matches("when is the exam fee due"));
        assert!(!rule.matches("when is the exam"));
    }

    #[test]
    fn test_rule_without_keywords_never_matches() {
        let rule = IntentRule::new("empty", &["", "!!"], KeywordMode::All, "x");
        assert!(rule.keywords.is_empty());
        assert!(!rule.matches("anything"));
    }

    #[test]
    fn test_first_matching_rule_wins() {
        let rules = RuleSet::new(vec![
            IntentRule::new("first", &["hostel"], KeywordMode::Any, "one"),
            IntentRule::new("second", &["hostel", "fee"], KeywordMode::Any, "two"),
        ]);
        assert_eq!(rules.evaluate("hostel fee").unwrap().name, "first");
        assert_eq!(rules.evaluate("fee").unwrap().name, "second");
        assert!(rules.evaluate("canteen").is_none());
    }

    #[test]
    fn test_default_rules_order() {
        let rules = default_rules();
        let names: Vec<&str> = rules.names().collect();
        assert_eq!(names.first(), Some(&"help"));
        assert_eq!(rules.evaluate("how do i apply").unwrap().name, "admission");
        assert_eq!(rules.evaluate("bus routes").unwrap().name, "transport");
        assert!(rules.evaluate("business studies").is_none());
    }

    #[test]
    fn test_keywords_are_normalized() {
        let rule = IntentRule::new("x", &["Phone-Number"], KeywordMode::Any, "x");
        assert_eq!(rule.keywords, vec!["phone number".to_string()]);
        assert!(rule.matches("college phone number please"));
    }
}
