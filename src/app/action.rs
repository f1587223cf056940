use crate::app::command::Command;

#[derive(Debug, Clone)]
pub enum UpdateResult {
    Handled(Option<Command>),
    NotHandled,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    // --- System / Terminal ---
    Tick,
    Resize(u16, u16),
    Quit,

    // --- Category Picker ---
    SelectCategory(String),    // Click on a card, or any id from the catalog
    SelectCategoryIndex(usize), // Number keys 1..9
    NextCategory,
    PrevCategory,

    // --- Command List ---
    SelectNextCommand,
    SelectPrevCommand,
    SelectCommandIndex(usize),
    CopySelectedCommand,

    // --- Search ---
    EnterSearchMode,                          // Focus the search box (/)
    SearchInput(crossterm::event::KeyEvent),  // Keystroke forwarded to the search box
    SetQuery(String),                         // Replace the query outright
    ConfirmSearch,                            // Enter: keep query, leave search box
    ClearSearch,                              // Drop the query

    // --- UI ---
    ToggleFocus,
    ToggleHelp,
    CycleTheme,
    CancelMode,

    // --- Async Results ---
    CopyCompleted(Result<String, String>),
}
