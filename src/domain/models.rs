use std::fmt;

/// Opaque reference to a glyph. Only the glyph renderer looks inside.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct IconRef(pub String);

impl IconRef {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for IconRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Cosmetic per-category colour. Carries no behaviour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Accent {
    #[default]
    Blue,
    Red,
    Yellow,
    Green,
    Mauve,
}

impl Accent {
    #[must_use]
    pub fn index(self) -> usize {
        match self {
            Accent::Blue => 0,
            Accent::Red => 1,
            Accent::Yellow => 2,
            Accent::Green => 3,
            Accent::Mauve => 4,
        }
    }
}

/// A documented bot capability: a slash command or a feature label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BotCommand {
    pub name: String,
    pub desc: String,
}

impl BotCommand {
    pub fn new(name: impl Into<String>, desc: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            desc: desc.into(),
        }
    }

    /// `needle` must already be lower-cased.
    #[must_use]
    pub fn matches(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle) || self.desc.to_lowercase().contains(needle)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub id: String,
    pub title: String,
    pub description: String,
    pub icon: IconRef,
    pub accent: Accent,
    pub commands: Vec<BotCommand>,
}

impl Category {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
        icon: impl Into<String>,
        accent: Accent,
        commands: Vec<BotCommand>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: description.into(),
            icon: IconRef::new(icon),
            accent,
            commands,
        }
    }
}
