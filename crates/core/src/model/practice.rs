//! Content shapes for the practice, flashcard and matching modes.

/// A trigger phrase and the diagnostic shown when a submission contains it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartialHint {
    pub trigger: String,
    pub message: String,
}

/// Open-ended problem graded by keyword overlap and trigger phrases.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PracticeProblem {
    pub question: String,
    pub answer: String,
    pub keywords: Vec<String>,
    /// Checked in declaration order; the first trigger found wins.
    pub partial_hints: Vec<PartialHint>,
    pub hint: String,
    pub explanation: String,
}

impl PracticeProblem {
    #[must_use]
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
            keywords: Vec::new(),
            partial_hints: Vec::new(),
            hint: String::new(),
            explanation: String::new(),
        }
    }

    #[must_use]
    pub fn keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.keywords = keywords.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn partial_hint(mut self, trigger: impl Into<String>, message: impl Into<String>) -> Self {
        self.partial_hints.push(PartialHint {
            trigger: trigger.into(),
            message: message.into(),
        });
        self
    }

    #[must_use]
    pub fn hint(mut self, text: impl Into<String>) -> Self {
        self.hint = text.into();
        self
    }

    #[must_use]
    pub fn explanation(mut self, text: impl Into<String>) -> Self {
        self.explanation = text.into();
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Flashcard {
    pub prompt: String,
    pub answer: String,
    pub hint: String,
    /// Textbook reference, e.g. `"De Morgan #1 (p.51)"`.
    pub law: String,
}

impl Flashcard {
    #[must_use]
    pub fn new(
        prompt: impl Into<String>,
        answer: impl Into<String>,
        hint: impl Into<String>,
        law: impl Into<String>,
    ) -> Self {
        Self {
            prompt: prompt.into(),
            answer: answer.into(),
            hint: hint.into(),
            law: law.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlashcardDeck {
    pub name: String,
    pub cards: Vec<Flashcard>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchPair {
    pub prompt: String,
    pub answer: String,
    pub category: String,
}

impl MatchPair {
    #[must_use]
    pub fn new(
        prompt: impl Into<String>,
        answer: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            prompt: prompt.into(),
            answer: answer.into(),
            category: category.into(),
        }
    }
}
