//! Search bar editing (pure text transitions).
//!
//! Each function returns the new search bar text; the caller hands it to
//! `SearchController::on_input_change`, so every edit restarts the
//! debounce. Editing always happens at the end of the text.

/// Append a typed character.
pub fn handle_char_input(text: &str, ch: char) -> String {
    let mut next = String::with_capacity(text.len() + ch.len_utf8());
    next.push_str(text);
    next.push(ch);
    next
}

/// Remove the last character, if any.
pub fn handle_backspace(text: &str) -> String {
    let mut next = text.to_string();
    next.pop();
    next
}

/// Remove the last word and any whitespace after it (Ctrl+W).
pub fn handle_delete_word(text: &str) -> String {
    let trimmed = text.trim_end();
    match trimmed.rfind(char::is_whitespace) {
        Some(idx) => {
            let boundary = idx + trimmed[idx..].chars().next().map_or(0, char::len_utf8);
            trimmed[..boundary].to_string()
        }
        None => String::new(),
    }
}

/// Clear the whole input (Ctrl+U).
pub fn handle_clear(_text: &str) -> String {
    String::new()
}

// ===== Tests =====

#[cfg(test)]
#[path = "search_input_handler_tests.rs"]
mod tests;
