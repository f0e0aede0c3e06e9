/// Host-side interactions with the widget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    SubmitTurn(String),
    SubmitPending,
    SelectSuggestion(usize),
    SetInput(String),
    ToggleOpen,
    Open,
    Close,
}
