//! Key event handlers

use crate::input_key::InputKey;
use crate::message::Message;
use crate::registry::SelectorId;
use crate::state::AppState;

/// Convert key events to messages
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    match key {
        // Quit
        InputKey::Char('q') | InputKey::Esc => Some(Message::Quit),
        InputKey::CharCtrl('c') => Some(Message::Quit),

        // Menu navigation
        InputKey::Left | InputKey::BackTab => Some(Message::MoveSelection { offset: -1 }),
        InputKey::Right | InputKey::Tab => Some(Message::MoveSelection { offset: 1 }),
        InputKey::Enter => activate_selector(state, state.views.registry().active_selector()?),
        InputKey::Char(c) if c.is_ascii_digit() => {
            activate_selector(state, SelectorId(key.menu_position()?))
        }

        // Chart type selector
        InputKey::Char('t') => {
            let selector = state.views.registry().chart_type_selector()?;
            Some(Message::ChartTypeSelectorChanged {
                value: selector.value.toggled().as_str().to_string(),
            })
        }

        InputKey::Char('R') => Some(Message::ReloadPage),

        _ => None,
    }
}

/// Select the view of `selector`, naming it as the trigger
fn activate_selector(state: &AppState, selector: SelectorId) -> Option<Message> {
    let target = state.views.registry().selector(selector)?;
    Some(Message::SelectView {
        view_id: target.target_view.clone(),
        trigger: Some(selector),
    })
}
