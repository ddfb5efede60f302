//! Keyboard shortcuts mapped to drill intents

/// User action delivered to the session by the front-end
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    /// Pick another card at random
    Repick,
    /// Show the move sequence of the current card
    Reveal,
    /// Open the preference editor
    OpenSettings,
    /// Leave the drill
    Quit,
}

/// Key bound to an intent, with its help text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shortcut {
    /// Key the user presses
    pub key: char,
    /// Intent delivered for the key
    pub intent: Intent,
    /// Help text shown next to the key
    pub description: &'static str,
}

/// Every shortcut in help order
pub const SHORTCUTS: [Shortcut; 4] = [
    Shortcut {
        key: 'r',
        intent: Intent::Repick,
        description: "Pick at random",
    },
    Shortcut {
        key: 'a',
        intent: Intent::Reveal,
        description: "Show the algorithm",
    },
    Shortcut {
        key: 's',
        intent: Intent::OpenSettings,
        description: "Open the settings",
    },
    Shortcut {
        key: 'q',
        intent: Intent::Quit,
        description: "Quit",
    },
];

impl Intent {
    /// Intent bound to a key; keys are case-insensitive
    pub fn from_key(key: char) -> Option<Self> {
        let key = key.to_ascii_lowercase();
        SHORTCUTS
            .iter()
            .find(|shortcut| shortcut.key == key)
            .map(|shortcut| shortcut.intent)
    }

    /// Intent for a line of terminal input, which must be a single key
    pub fn from_line(line: &str) -> Option<Self> {
        let mut chars = line.trim().chars();
        match (chars.next(), chars.next()) {
            (Some(key), None) => Self::from_key(key),
            _ => None,
        }
    }
}

/// One help line per shortcut, `[R] Pick at random`
pub fn help_lines() -> impl Iterator<Item = String> {
    SHORTCUTS.iter().map(|shortcut| {
        format!(
            "[{}] {}",
            shortcut.key.to_ascii_uppercase(),
            shortcut.description
        )
    })
}
