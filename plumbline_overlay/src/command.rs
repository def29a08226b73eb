// Copyright 2026 the Plumbline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Keyboard shortcuts and the chrome request channel.

use alloc::string::String;
use alloc::vec::Vec;

use plumbline_snap::SnapConfig;

/// Modifier keys held during a key event.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Modifiers {
    /// The Control key.
    pub ctrl: bool,
    /// The Alt/Option key.
    pub alt: bool,
    /// The Shift key.
    pub shift: bool,
    /// The platform command key.
    pub meta: bool,
}

impl Modifiers {
    /// Control and Alt held, nothing else required.
    pub const CTRL_ALT: Self = Self {
        ctrl: true,
        alt: true,
        shift: false,
        meta: false,
    };
}

/// An overlay action triggered from the keyboard or from chrome buttons.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// Show or hide the ruler bands (`Ctrl+Alt+R`).
    ToggleRulers,
    /// Show or hide the guides (`Ctrl+Alt+G`).
    ToggleGuides,
    /// Show or hide rulers and guides together (`Ctrl+Alt+A`).
    ToggleAll,
    /// Remove every guide (`Ctrl+Alt+D`).
    ClearGuides,
    /// Ask chrome for a grid name and save (`Ctrl+Alt+S`).
    OpenSaveDialog,
    /// Ask chrome to pick a saved grid (`Ctrl+Alt+O`).
    OpenLoadDialog,
    /// Lock or unlock the rulers to the viewport (`Ctrl+Alt+L`).
    ToggleRulersLock,
    /// Show or hide the detailed-info regions (`Ctrl+Alt+I`).
    ToggleDetailedInfo,
    /// Enable or disable element-edge snap (`Ctrl+Alt+E`).
    ToggleEdgeSnap,
    /// Ask chrome to open the snap-settings dialog (`Ctrl+Alt+C`).
    OpenSnapSettings,
}

impl Command {
    /// Maps a key-up event to a command.
    ///
    /// All shortcuts require Control and Alt; the letter is matched
    /// case-insensitively. Returns `None` for everything else.
    #[must_use]
    pub fn from_key(key: char, modifiers: Modifiers) -> Option<Self> {
        if !(modifiers.ctrl && modifiers.alt) {
            return None;
        }
        match key.to_ascii_uppercase() {
            'R' => Some(Self::ToggleRulers),
            'G' => Some(Self::ToggleGuides),
            'A' => Some(Self::ToggleAll),
            'D' => Some(Self::ClearGuides),
            'S' => Some(Self::OpenSaveDialog),
            'O' => Some(Self::OpenLoadDialog),
            'L' => Some(Self::ToggleRulersLock),
            'I' => Some(Self::ToggleDetailedInfo),
            'E' => Some(Self::ToggleEdgeSnap),
            'C' => Some(Self::OpenSnapSettings),
            _ => None,
        }
    }
}

/// A dialog or prompt the overlay asks its host chrome to run.
///
/// The overlay never blocks on user input: commands that need it return one
/// of these, the host collects the answer in its own time and calls the
/// matching follow-up (`save_grid`, `load_grid`, `set_snap_config`).
#[derive(Clone, Debug, PartialEq)]
pub enum ChromeRequest {
    /// Prompt for a grid name, then call
    /// [`Overlay::save_grid`](crate::Overlay::save_grid). A
    /// [`SaveOutcome::NameRequired`](plumbline_guides::SaveOutcome) answer
    /// means the prompt should run again.
    PromptSaveName,
    /// Offer the saved grids for loading or deletion.
    OpenGridDialog {
        /// Every persisted grid name, sorted.
        names: Vec<String>,
    },
    /// Open the snap-settings dialog seeded with the current configuration,
    /// then call [`Overlay::set_snap_config`](crate::Overlay::set_snap_config).
    OpenSnapSettings {
        /// The configuration currently in effect.
        current: SnapConfig,
    },
}
