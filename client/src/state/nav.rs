//! Which dashboard section is on screen.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

/// Top-level dashboard sections, in header order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Section {
    #[default]
    Overview,
    NfcTags,
    VerificationLogs,
    UserManagement,
    BlockchainStatus,
    Settings,
}

impl Section {
    pub const ALL: [Self; 6] = [
        Self::Overview,
        Self::NfcTags,
        Self::VerificationLogs,
        Self::UserManagement,
        Self::BlockchainStatus,
        Self::Settings,
    ];

    /// Label used for the header button tooltip and the section heading.
    pub fn title(self) -> &'static str {
        match self {
            Self::Overview => "Dashboard",
            Self::NfcTags => "NFC Tags",
            Self::VerificationLogs => "Verification Logs",
            Self::UserManagement => "User Management",
            Self::BlockchainStatus => "Blockchain Status",
            Self::Settings => "Settings",
        }
    }

    /// Short glyph shown on the header button.
    pub fn glyph(self) -> &'static str {
        match self {
            Self::Overview => "⌂",
            Self::NfcTags => "◉",
            Self::VerificationLogs => "✓",
            Self::UserManagement => "👥",
            Self::BlockchainStatus => "⛓",
            Self::Settings => "⚙",
        }
    }
}

/// Current section selection. Starts on the overview and changes only on an
/// explicit header click.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavState {
    pub current: Section,
}

impl NavState {
    pub fn select(&mut self, section: Section) {
        self.current = section;
    }

    pub fn is_current(&self, section: Section) -> bool {
        self.current == section
    }
}
