/// State of the add-parameter sub-form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AddForm {
    /// Name blank or whitespace only; add is disabled
    #[default]
    Empty,
    Ready,
}

impl AddForm {
    pub fn from_input(text: &str) -> Self {
        if text.trim().is_empty() {
            Self::Empty
        } else {
            Self::Ready
        }
    }

    pub fn can_add(self) -> bool {
        self == Self::Ready
    }
}

/// State of the "get model" trigger, mirrors `ValueMap::all_filled`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderTrigger {
    Disabled,
    #[default]
    Enabled,
}

impl RenderTrigger {
    pub fn from_filled(all_filled: bool) -> Self {
        if all_filled {
            Self::Enabled
        } else {
            Self::Disabled
        }
    }

    pub fn is_enabled(self) -> bool {
        self == Self::Enabled
    }
}
