// src/editor/syntax.rs
use std::path::Path;

/// Source language of a document, as far as keyword completion cares.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    CSharp,
    VisualBasic,
    Rust,
}

impl Language {
    /// C-family keywords are the fallback for unknown or missing extensions.
    pub const DEFAULT: Language = Language::CSharp;

    pub fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .as_deref()
        {
            Some("vb") => Language::VisualBasic,
            Some("rs") => Language::Rust,
            Some("cs") => Language::CSharp,
            _ => Self::DEFAULT,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Language::CSharp => "C#",
            Language::VisualBasic => "Visual Basic",
            Language::Rust => "Rust",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_language() {
        assert_eq!(Language::from_path(Path::new("Module1.VB")), Language::VisualBasic);
        assert_eq!(Language::from_path(Path::new("src/main.rs")), Language::Rust);
        assert_eq!(Language::from_path(Path::new("Program.cs")), Language::CSharp);
        assert_eq!(Language::from_path(Path::new("notes.txt")), Language::DEFAULT);
        assert_eq!(Language::from_path(Path::new("Makefile")), Language::DEFAULT);
    }
}
