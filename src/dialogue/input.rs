/// Quick-reply buttons of the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    SetProfile,
    LogWater,
    LogFood,
    CheckFoodInfo,
    CheckProgress,
}

impl MenuAction {
    /// Menu order, one button per row.
    pub const ALL: [MenuAction; 5] = [
        MenuAction::SetProfile,
        MenuAction::LogWater,
        MenuAction::LogFood,
        MenuAction::CheckFoodInfo,
        MenuAction::CheckProgress,
    ];

    pub fn label(self) -> &'static str {
        match self {
            MenuAction::SetProfile => "Set Profile",
            MenuAction::LogWater => "Log Water",
            MenuAction::LogFood => "Log Food",
            MenuAction::CheckFoodInfo => "Check Food Info",
            MenuAction::CheckProgress => "Check Progress",
        }
    }

    pub fn from_label(text: &str) -> Option<Self> {
        let text = text.trim();
        Self::ALL.into_iter().find(|action| action.label() == text)
    }
}

/// One incoming user turn, already classified.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input<'a> {
    Start,
    Help,
    Cancel,
    Menu(MenuAction),
    Text(&'a str),
    /// Sticker, photo or anything else without text.
    NonText,
}

impl<'a> Input<'a> {
    /// Menu labels win over free text in every state.
    pub fn from_text(text: &'a str) -> Self {
        MenuAction::from_label(text).map_or(Input::Text(text), Input::Menu)
    }

    /// Classifies a chat message body. Slash text is left to the command handler,
    /// so unknown commands yield `None` and are not fed to the conversation.
    pub fn from_message(text: Option<&'a str>) -> Option<Self> {
        match text {
            Some(text) if text.trim_start().starts_with('/') => None,
            Some(text) => Some(Self::from_text(text)),
            None => Some(Input::NonText),
        }
    }
}
