/// Labels rendered around the variant table.
#[derive(Debug, Clone)]
pub struct UiConfig {
    /// Label shown next to the filter input.
    pub prompt: String,
    /// Noun used when reporting the total match count.
    pub count_label: String,
    /// Key hint shown in the footer when no record link is available.
    pub hint: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            prompt: "Search by gene".to_string(),
            count_label: "variants".to_string(),
            hint: "enter submit · pgup/pgdn page · f5 refresh · esc quit".to_string(),
        }
    }
}

impl UiConfig {
    #[must_use]
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    #[must_use]
    pub fn with_count_label(mut self, count_label: impl Into<String>) -> Self {
        self.count_label = count_label.into();
        self
    }

    #[must_use]
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = hint.into();
        self
    }
}
