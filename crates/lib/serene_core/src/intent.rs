//! Keyword intent classifier.
//!
//! Rules are checked in a fixed priority order and the first match wins, so a
//! message mentioning both "coping" and "relax" resolves to [`Intent::Cope`].

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use crate::stress::StressLevel;

static LEVEL_TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"low|moderate|high|severe").expect("level token pattern is valid")
});

/// What the user is asking for; selects the prompt template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Intent {
    Assess,
    Cope,
    Relax,
    Lifestyle,
    General,
}

impl Intent {
    pub fn as_str(self) -> &'static str {
        match self {
            Intent::Assess => "assess",
            Intent::Cope => "cope",
            Intent::Relax => "relax",
            Intent::Lifestyle => "lifestyle",
            Intent::General => "general",
        }
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classifier output: the intent plus a stress level mentioned in the message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    pub intent: Intent,
    /// Set only when the message talks about its "stress level" and names one.
    pub level: Option<StressLevel>,
}

/// Classify a raw user message.
pub fn classify(message: &str) -> Classification {
    let text = message.to_lowercase();
    let mentions_level = text.contains("stress level");

    let level = if mentions_level {
        LEVEL_TOKEN
            .find(&text)
            .map(|m| StressLevel::from(m.as_str()))
    } else {
        None
    };

    let intent = if mentions_level || text.contains("assess") {
        Intent::Assess
    } else if text.contains("coping") || text.contains("strategies") {
        Intent::Cope
    } else if text.contains("relax") || text.contains("exercise") {
        Intent::Relax
    } else if text.contains("lifestyle") || text.contains("change") {
        Intent::Lifestyle
    } else {
        Intent::General
    };

    Classification { intent, level }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assess_keyword_any_case() {
        for msg in ["assess me", "Can you ASSESS this?", "reassessment please"] {
            assert_eq!(classify(msg).intent, Intent::Assess, "{msg}");
        }
    }

    #[test]
    fn stress_level_extracts_token() {
        let c = classify("My stress level is high, what should I do?");
        assert_eq!(c.intent, Intent::Assess);
        assert_eq!(c.level, Some(StressLevel::High));
    }

    #[test]
    fn level_extraction_is_case_insensitive() {
        let c = classify("Stress Level: SEVERE");
        assert_eq!(c.level, Some(StressLevel::Severe));
    }

    #[test]
    fn first_level_token_wins() {
        let c = classify("stress level went from low to high");
        assert_eq!(c.level, Some(StressLevel::Low));
    }

    #[test]
    fn level_ignored_without_stress_level_phrase() {
        let c = classify("my energy is low, any coping ideas?");
        assert_eq!(c.intent, Intent::Cope);
        assert_eq!(c.level, None);
    }

    #[test]
    fn stress_level_without_token() {
        let c = classify("what is my stress level?");
        assert_eq!(c.intent, Intent::Assess);
        assert_eq!(c.level, None);
    }

    #[test]
    fn priority_order_is_fixed() {
        assert_eq!(classify("coping and relax tips").intent, Intent::Cope);
        assert_eq!(classify("strategies for lifestyle").intent, Intent::Cope);
        assert_eq!(classify("exercise to change habits").intent, Intent::Relax);
        assert_eq!(classify("assess my coping").intent, Intent::Assess);
    }

    #[test]
    fn each_intent_has_a_keyword() {
        assert_eq!(classify("what coping works?").intent, Intent::Cope);
        assert_eq!(classify("help me relax").intent, Intent::Relax);
        assert_eq!(classify("an exercise please").intent, Intent::Relax);
        assert_eq!(classify("lifestyle tips").intent, Intent::Lifestyle);
        assert_eq!(classify("what should I change").intent, Intent::Lifestyle);
        assert_eq!(classify("hello there").intent, Intent::General);
    }
}
