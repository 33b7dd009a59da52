//! Input-device detection from the browser's platform string

/// Event family used to detect presses on the model
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFamily {
    /// `touchstart` / `touchend`
    Touch,
    /// `pointerdown` / `pointerup`
    Pointer,
}

impl InputFamily {
    /// Choose the family for a user agent.
    ///
    /// Matching is a case-insensitive substring test against `markers`; any
    /// hit selects touch input.
    pub fn detect<S: AsRef<str>>(user_agent: &str, markers: &[S]) -> Self {
        if is_mobile_user_agent(user_agent, markers) {
            InputFamily::Touch
        } else {
            InputFamily::Pointer
        }
    }

    pub fn press_start_event(self) -> &'static str {
        match self {
            InputFamily::Touch => "touchstart",
            InputFamily::Pointer => "pointerdown",
        }
    }

    pub fn press_end_event(self) -> &'static str {
        match self {
            InputFamily::Touch => "touchend",
            InputFamily::Pointer => "pointerup",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            InputFamily::Touch => "touch",
            InputFamily::Pointer => "pointer",
        }
    }
}

/// Whether the user agent contains any mobile marker, ignoring case
pub fn is_mobile_user_agent<S: AsRef<str>>(user_agent: &str, markers: &[S]) -> bool {
    let user_agent = user_agent.to_lowercase();
    markers
        .iter()
        .map(|m| m.as_ref().to_lowercase())
        .any(|m| !m.is_empty() && user_agent.contains(&m))
}
