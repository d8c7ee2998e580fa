//! Bold, italic and strikethrough flags carried by spans.

use std::fmt;

use serde::Serialize;

/// Formatting flags resolved from emphasis delimiters.
///
/// The default value has every flag unset, which callers treat as
/// "no attributes".
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct TextAttributes {
    pub bold: bool,
    pub italic: bool,
    pub strikethrough: bool,
}

impl TextAttributes {
    /// Attributes with only `bold` set.
    #[must_use]
    pub const fn bold() -> Self {
        Self {
            bold: true,
            italic: false,
            strikethrough: false,
        }
    }

    /// Attributes with only `italic` set.
    #[must_use]
    pub const fn italic() -> Self {
        Self {
            bold: false,
            italic: true,
            strikethrough: false,
        }
    }

    /// Attributes with only `strikethrough` set.
    #[must_use]
    pub const fn strikethrough() -> Self {
        Self {
            bold: false,
            italic: false,
            strikethrough: true,
        }
    }

    /// Per-field logical OR of two attribute sets.
    #[must_use]
    pub const fn merge(self, other: Self) -> Self {
        Self {
            bold: self.bold || other.bold,
            italic: self.italic || other.italic,
            strikethrough: self.strikethrough || other.strikethrough,
        }
    }

    /// Whether any flag is set.
    #[must_use]
    pub const fn has_attributes(self) -> bool {
        self.bold || self.italic || self.strikethrough
    }

    /// Flip the flag selected by `marker`.
    #[must_use]
    pub const fn toggle(self, marker: Marker) -> Self {
        let mut toggled = self;
        match marker {
            Marker::Bold => toggled.bold = !toggled.bold,
            Marker::Italic => toggled.italic = !toggled.italic,
            Marker::Strikethrough => toggled.strikethrough = !toggled.strikethrough,
        }
        toggled
    }

    /// `Some(self)` when any flag is set, `None` otherwise.
    #[must_use]
    pub const fn non_empty(self) -> Option<Self> {
        if self.has_attributes() {
            Some(self)
        } else {
            None
        }
    }
}

impl fmt::Display for TextAttributes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names = [
            (self.bold, "bold"),
            (self.italic, "italic"),
            (self.strikethrough, "strikethrough"),
        ];
        let mut first = true;
        for (_, name) in names.iter().filter(|(set, _)| *set) {
            if !first {
                f.write_str(", ")?;
            }
            f.write_str(name)?;
            first = false;
        }
        Ok(())
    }
}

/// Emphasis delimiter class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    /// `**` or `__`
    Bold,
    /// `*` or `_`
    Italic,
    /// `~~`
    Strikethrough,
}

impl Marker {
    /// Classify a delimiter string.
    ///
    /// Returns `None` for anything that is not an emphasis marker.
    #[must_use]
    pub fn from_delimiter(delimiter: &str) -> Option<Self> {
        match delimiter {
            "**" | "__" => Some(Self::Bold),
            "*" | "_" => Some(Self::Italic),
            "~~" => Some(Self::Strikethrough),
            _ => None,
        }
    }

    /// Attributes with only this marker's flag set.
    #[must_use]
    pub const fn attributes(self) -> TextAttributes {
        match self {
            Self::Bold => TextAttributes::bold(),
            Self::Italic => TextAttributes::italic(),
            Self::Strikethrough => TextAttributes::strikethrough(),
        }
    }
}
