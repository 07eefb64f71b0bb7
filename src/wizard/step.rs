use std::fmt;

/// The five stages of planning a trip, in order
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum WizardStep {
    #[default]
    SelectDestinations,
    FillInformation,
    SelectGuide,
    ConfirmTrip,
    Success,
}

impl WizardStep {
    pub const ALL: [WizardStep; 5] = [
        Self::SelectDestinations,
        Self::FillInformation,
        Self::SelectGuide,
        Self::ConfirmTrip,
        Self::Success,
    ];

    /// 1-based position shown in the progress indicator
    pub fn number(&self) -> usize {
        *self as usize + 1
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::SelectDestinations => "Select Destinations",
            Self::FillInformation => "Fill Information",
            Self::SelectGuide => "Select Guide",
            Self::ConfirmTrip => "Confirm Trip",
            Self::Success => "Success",
        }
    }

    /// Step reached by a successful "next", `None` from the confirmation and success steps
    ///
    /// Leaving the confirmation step happens only through a successful submission.
    pub fn next(&self) -> Option<Self> {
        match self {
            Self::SelectDestinations => Some(Self::FillInformation),
            Self::FillInformation => Some(Self::SelectGuide),
            Self::SelectGuide => Some(Self::ConfirmTrip),
            Self::ConfirmTrip | Self::Success => None,
        }
    }

    /// Step reached by "back", only available from steps two to four
    pub fn previous(&self) -> Option<Self> {
        match self {
            Self::FillInformation => Some(Self::SelectDestinations),
            Self::SelectGuide => Some(Self::FillInformation),
            Self::ConfirmTrip => Some(Self::SelectGuide),
            Self::SelectDestinations | Self::Success => None,
        }
    }

    pub fn is_terminal(&self) -> bool {
        *self == Self::Success
    }
}

impl fmt::Display for WizardStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}
