//! Icon set for the TUI.
//!
//! Provides `IconSet` which resolves icons at runtime based on `IconMode`.
//! - `IconMode::Unicode` - emoji and arrows (needs an emoji-capable font)
//! - `IconMode::Ascii` - plain ASCII that works in any terminal

use std::borrow::Cow;

use pack_app::config::IconMode;

/// Runtime icon resolver.
#[derive(Debug, Clone, Copy)]
pub struct IconSet {
    mode: IconMode,
}

impl IconSet {
    pub fn new(mode: IconMode) -> Self {
        Self { mode }
    }

    pub fn emoji(&self) -> bool {
        self.mode.uses_emoji()
    }

    pub fn delete(&self) -> &'static str {
        match self.mode {
            IconMode::Unicode => "❌",
            IconMode::Ascii => "x",
        }
    }

    pub fn checkbox(&self, packed: bool) -> &'static str {
        if packed {
            "[x]"
        } else {
            "[ ]"
        }
    }

    pub fn cursor(&self) -> &'static str {
        match self.mode {
            IconMode::Unicode => "▸",
            IconMode::Ascii => ">",
        }
    }

    pub fn prev(&self) -> &'static str {
        match self.mode {
            IconMode::Unicode => "◂",
            IconMode::Ascii => "<",
        }
    }

    pub fn next(&self) -> &'static str {
        match self.mode {
            IconMode::Unicode => "▸",
            IconMode::Ascii => ">",
        }
    }

    pub fn enter(&self) -> &'static str {
        match self.mode {
            IconMode::Unicode => "⏎",
            IconMode::Ascii => "Enter",
        }
    }

    pub fn text_cursor(&self) -> &'static str {
        match self.mode {
            IconMode::Unicode => "█",
            IconMode::Ascii => "_",
        }
    }

    /// User-facing text with pictographs removed in ASCII mode
    pub fn text<'a>(&self, text: &'a str) -> Cow<'a, str> {
        if self.emoji() || !text.chars().any(is_pictograph) {
            return Cow::Borrowed(text);
        }
        let stripped: String = text.chars().filter(|&c| !is_pictograph(c)).collect();
        Cow::Owned(stripped.split_whitespace().collect::<Vec<_>>().join(" "))
    }
}

/// Emoji, dingbats and the joiners/selectors that glue them together
fn is_pictograph(c: char) -> bool {
    matches!(
        c as u32,
        0x200D | 0x2190..=0x2BFF | 0xFE0E..=0xFE0F | 0x1F000..=0x1FAFF
    )
}
