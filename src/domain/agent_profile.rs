/// Fixed instruction set for a language-model agent.
///
/// Profiles are built once at startup and shared read-only by every request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgentProfile {
    pub name: String,
    pub role: String,
    pub instructions: Vec<String>,
}

impl AgentProfile {
    pub fn new(name: impl Into<String>, role: impl Into<String>, instructions: &[&str]) -> Self {
        Self {
            name: name.into(),
            role: role.into(),
            instructions: instructions.iter().map(|s| s.to_string()).collect(),
        }
    }

    pub fn enhancer() -> Self {
        Self::new(
            "Language Enhancement Agent",
            "Text Refiner and Grammar Corrector",
            &[
                "You are an expert language enhancement specialist. Improve the given text as follows.",
                "Fix all grammatical errors including verb tenses, subject-verb agreement, and sentence structure.",
                "Ensure proper punctuation and capitalization.",
                "Use more precise and descriptive vocabulary; replace casual expressions with formal equivalents.",
                "Combine choppy sentences into fluid ones and add transitions where appropriate.",
                "Convert casual speech patterns to formal written English and remove filler words.",
                "Keep the original meaning.",
                "Return ONLY the improved text, without explanations, comments, or additional formatting.",
            ],
        )
    }

    pub fn translator() -> Self {
        Self::new(
            "Translator",
            "Translate English to the requested language",
            &[
                "Translate English text into the language specified by the user.",
                "If no target language is specified, default to Spanish.",
                "Maintain the original meaning and context of the text.",
                "Return ONLY the translation, without any additional commentary or formatting.",
            ],
        )
    }

    /// Renders the profile as a system prompt.
    pub fn system_prompt(&self) -> String {
        let mut prompt = format!("You are {}. Your role: {}.\n\nInstructions:\n", self.name, self.role);
        for (i, instruction) in self.instructions.iter().enumerate() {
            prompt.push_str(&format!("{}. {}\n", i + 1, instruction));
        }
        prompt
    }
}
