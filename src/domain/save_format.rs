/// Output formats offered after a letter is generated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveFormat {
    Text,
    Pdf,
    Both,
}

impl SaveFormat {
    pub const ALL: [SaveFormat; 3] = [SaveFormat::Text, SaveFormat::Pdf, SaveFormat::Both];

    pub fn label(self) -> &'static str {
        match self {
            SaveFormat::Text => "Text file (.txt)",
            SaveFormat::Pdf => "PDF document (.pdf)",
            SaveFormat::Both => "Both text and PDF",
        }
    }

    /// Format at a 1-based menu position.
    pub fn from_menu(position: usize) -> Option<Self> {
        position.checked_sub(1).and_then(|index| Self::ALL.get(index)).copied()
    }

    pub fn writes_text(self) -> bool {
        matches!(self, SaveFormat::Text | SaveFormat::Both)
    }

    pub fn writes_pdf(self) -> bool {
        matches!(self, SaveFormat::Pdf | SaveFormat::Both)
    }
}
