//! Sidebar navigation entries and their informational dialogs.

/// Entries listed in the sidebar, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SidebarItem {
    TravelAuthority,
    Personnel,
    Leave,
    Reports,
    About,
}

impl SidebarItem {
    pub const ALL: [Self; 5] = [
        Self::TravelAuthority,
        Self::Personnel,
        Self::Leave,
        Self::Reports,
        Self::About,
    ];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::TravelAuthority => "Travel Authority",
            Self::Personnel => "Personnel",
            Self::Leave => "Leave Requests",
            Self::Reports => "Reports",
            Self::About => "About",
        }
    }

    /// Dialog opened by this entry. `None` for the entry that opens the record
    /// form instead.
    #[must_use]
    pub const fn dialog(self) -> Option<InfoDialog> {
        match self {
            Self::TravelAuthority => None,
            Self::Personnel => Some(InfoDialog::Personnel),
            Self::Leave => Some(InfoDialog::Leave),
            Self::Reports => Some(InfoDialog::Reports),
            Self::About => Some(InfoDialog::About),
        }
    }
}

/// Static informational dialogs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InfoDialog {
    Personnel,
    Leave,
    Reports,
    About,
}

impl InfoDialog {
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Personnel => "Personnel",
            Self::Leave => "Leave Requests",
            Self::Reports => "Reports",
            Self::About => "About",
        }
    }

    #[must_use]
    pub const fn body(self) -> &'static [&'static str] {
        match self {
            Self::Personnel => &[
                "Personnel records are managed by the admin office.",
                "This demo tracks travel authorities only.",
            ],
            Self::Leave => &[
                "Leave requests are not available in this demo.",
                "File leave through your unit's admin clerk.",
            ],
            Self::Reports => &[
                "Reports are generated monthly from submitted",
                "travel authorities.",
            ],
            Self::About => &[
                "Travel Authority dashboard (demo).",
                "Records are stored locally on this machine.",
            ],
        }
    }
}
