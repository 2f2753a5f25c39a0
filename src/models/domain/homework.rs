use serde::Serialize;

/// Requested number of practice problems per difficulty tier.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct TierCounts {
    pub basic: u32,
    pub normal: u32,
    pub advanced: u32,
}

impl TierCounts {
    pub fn new(basic: u32, normal: u32, advanced: u32) -> Self {
        Self {
            basic,
            normal,
            advanced,
        }
    }

    pub fn total(&self) -> u32 {
        self.basic
            .saturating_add(self.normal)
            .saturating_add(self.advanced)
    }
}

/// Markdown review sheet, passed through exactly as the model wrote it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct HomeworkDocument(pub String);

impl HomeworkDocument {
    pub fn as_markdown(&self) -> &str {
        &self.0
    }
}
