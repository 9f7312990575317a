use tracing::debug;

use crate::handles::ClassList;
use crate::markup::{ICON_BARS_CLASS, ICON_CLOSE_CLASS, NAV_SHOWN_CLASS};

/// Shown/hidden state of one navigation container
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuState {
    Closed,
    Open,
}

impl MenuState {
    /// State as rendered by the marker class.
    pub fn from_marker(shown: bool) -> Self {
        if shown {
            MenuState::Open
        } else {
            MenuState::Closed
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            MenuState::Closed => MenuState::Open,
            MenuState::Open => MenuState::Closed,
        }
    }

    pub fn is_open(self) -> bool {
        self == MenuState::Open
    }
}

#[allow(clippy::derivable_impls)]
impl Default for MenuState {
    fn default() -> Self {
        MenuState::Closed
    }
}

/// Glyph shown on the hamburger trigger
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconGlyph {
    /// Three bars, menu can be opened
    Bars,
    /// Cross, menu can be closed
    Close,
}

impl IconGlyph {
    /// Anything not showing the bars glyph counts as the close glyph.
    pub fn from_classes(icon: &impl ClassList) -> Self {
        if icon.has_class(ICON_BARS_CLASS) {
            IconGlyph::Bars
        } else {
            IconGlyph::Close
        }
    }

    pub fn class_name(self) -> &'static str {
        match self {
            IconGlyph::Bars => ICON_BARS_CLASS,
            IconGlyph::Close => ICON_CLOSE_CLASS,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            IconGlyph::Bars => IconGlyph::Close,
            IconGlyph::Close => IconGlyph::Bars,
        }
    }
}

/// Hamburger menu: flips every navigation container and the trigger icon.
///
/// Each container keeps its own state; initial states come from the markup.
/// Class membership is written from state and never read back after binding.
pub struct NavMenuToggle<E> {
    panels: Vec<(E, MenuState)>,
    icon: Option<(E, IconGlyph)>,
}

impl<E: ClassList> NavMenuToggle<E> {
    pub fn new(panels: Vec<E>, icon: Option<E>) -> Self {
        let panels = panels
            .into_iter()
            .map(|panel| {
                let state = MenuState::from_marker(panel.has_class(NAV_SHOWN_CLASS));
                (panel, state)
            })
            .collect();
        let icon = icon.map(|icon| {
            let glyph = IconGlyph::from_classes(&icon);
            (icon, glyph)
        });

        Self { panels, icon }
    }

    /// Handle one click on the trigger.
    pub fn toggle(&mut self) {
        for (panel, state) in &mut self.panels {
            *state = state.toggled();
            panel.set_class(NAV_SHOWN_CLASS, state.is_open());
        }

        if let Some((icon, glyph)) = &mut self.icon {
            let next = glyph.toggled();
            icon.set_class(glyph.class_name(), false);
            icon.set_class(next.class_name(), true);
            *glyph = next;
        }

        debug!(
            "Toggled {} nav panel(s), icon {:?}",
            self.panels.len(),
            self.icon_glyph()
        );
    }

    pub fn states(&self) -> Vec<MenuState> {
        self.panels.iter().map(|(_, state)| *state).collect()
    }

    pub fn icon_glyph(&self) -> Option<IconGlyph> {
        self.icon.as_ref().map(|(_, glyph)| *glyph)
    }

    pub fn panels(&self) -> impl Iterator<Item = &E> {
        self.panels.iter().map(|(panel, _)| panel)
    }

    pub fn icon(&self) -> Option<&E> {
        self.icon.as_ref().map(|(icon, _)| icon)
    }
}
