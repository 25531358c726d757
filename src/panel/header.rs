/// "Create new" button shown in the header
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderAction {
    pub label: String,
    pub enabled: bool,
}

/// Panel title bar
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayHeader {
    pub icon: &'static str,
    pub title: String,
    pub create_action: Option<HeaderAction>,
    /// Label of the saved-filter combo; `None` hides the combo
    pub saved_filter: Option<String>,
}
