/// A term and its explanation, shown alongside a section's exercises.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Definition {
    pub term: String,
    pub explanation: String,
}

/// Navigation and reporting group for exercises (one textbook section).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    key: String,
    title: String,
    page: u32,
    definitions: Vec<Definition>,
}

impl Section {
    #[must_use]
    pub fn new(key: impl Into<String>, title: impl Into<String>, page: u32) -> Self {
        Self {
            key: key.into(),
            title: title.into(),
            page,
            definitions: Vec::new(),
        }
    }

    /// Appends a definition; display order follows insertion order.
    #[must_use]
    pub fn define(mut self, term: impl Into<String>, explanation: impl Into<String>) -> Self {
        self.definitions.push(Definition {
            term: term.into(),
            explanation: explanation.into(),
        });
        self
    }

    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Page in the textbook where the section starts.
    #[must_use]
    pub fn page(&self) -> u32 {
        self.page
    }

    #[must_use]
    pub fn definitions(&self) -> &[Definition] {
        &self.definitions
    }
}
