/// A voice offered by the speech engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Voice {
    /// Identifier the engine accepts when selecting this voice.
    pub id: String,
    /// Human readable name, used for preference matching.
    pub name: String,
}

impl Voice {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}
