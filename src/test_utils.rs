#[cfg(test)]
pub mod test_helpers {
    use crate::app::App;
    use crate::config::Config;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    pub const TEST_ITEMS: &[&str] = &["Apple", "Apricot", "Banana", "Blueberry", "Cherry"];

    pub fn test_app() -> App {
        test_app_with_config(&Config::default())
    }

    pub fn test_app_with_config(config: &Config) -> App {
        let items = TEST_ITEMS.iter().map(|s| s.to_string()).collect();
        App::new(items, config)
    }

    pub fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    pub fn key_with_mods(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    pub fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            app.handle_key_event(key(KeyCode::Char(c)));
        }
    }
}
