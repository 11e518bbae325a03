use super::*;
use crate::config::{ComboboxConfig, Config};
use crate::machine::EventKind;
use crate::test_utils::test_helpers::{
    key, key_with_mods, test_app, test_app_with_config, type_text,
};

#[test]
fn test_combo_key_mapping() {
    assert_eq!(combo_key(KeyCode::Down), Key::ArrowDown);
    assert_eq!(combo_key(KeyCode::Up), Key::ArrowUp);
    assert_eq!(combo_key(KeyCode::Home), Key::Home);
    assert_eq!(combo_key(KeyCode::End), Key::End);
    assert_eq!(combo_key(KeyCode::PageUp), Key::PageUp);
    assert_eq!(combo_key(KeyCode::PageDown), Key::PageDown);
    assert_eq!(combo_key(KeyCode::Esc), Key::Escape);
    assert_eq!(combo_key(KeyCode::Enter), Key::Enter);
    assert_eq!(combo_key(KeyCode::Char('a')), Key::Other);
    assert_eq!(combo_key(KeyCode::Left), Key::Other);
}

#[test]
fn test_ctrl_c_quits() {
    let mut app = test_app();
    app.handle_key_event(key_with_mods(KeyCode::Char('c'), KeyModifiers::CONTROL));
    assert!(app.should_quit);
}

mod input_tests {
    use super::*;

    #[test]
    fn test_typing_suggests() {
        let mut app = test_app();
        type_text(&mut app, "ap");

        assert_eq!(app.query(), "ap");
        assert_eq!(app.combobox.value(), "ap");
        assert_eq!(app.combobox.state(), InteractionState::Suggesting);
    }

    #[test]
    fn test_deleting_everything_clears() {
        let mut app = test_app();
        type_text(&mut app, "a");
        app.handle_key_event(key(KeyCode::Backspace));

        assert_eq!(app.query(), "");
        assert_eq!(app.combobox.state(), InteractionState::Idle);
        assert_eq!(app.combobox.data().last_event_type, Some(EventKind::Clear));
    }

    #[test]
    fn test_cursor_movement_does_not_change_value() {
        let mut app = test_app();
        type_text(&mut app, "ap");
        app.handle_key_event(key(KeyCode::Left));

        assert_eq!(app.combobox.value(), "ap");
        assert_eq!(app.combobox.data().last_event_type, Some(EventKind::Change));
    }

    #[test]
    fn test_arrow_down_navigates_first_option() {
        let mut app = test_app();
        type_text(&mut app, "ap");
        let first = app.visible_options()[0].value.clone();

        app.handle_key_event(key(KeyCode::Down));

        assert_eq!(app.combobox.state(), InteractionState::Navigating);
        assert_eq!(app.combobox.navigation_value(), Some(first.as_str()));
        assert_eq!(app.combobox.input_value(), first);
        // The edit buffer keeps what was typed
        assert_eq!(app.query(), "ap");
    }

    #[test]
    fn test_typing_edits_autocompleted_text() {
        let mut app = test_app();
        type_text(&mut app, "ap");
        app.handle_key_event(key(KeyCode::Down));
        let shown = app.combobox.input_value().to_string();

        type_text(&mut app, "s");

        let expected = format!("{shown}s");
        assert_eq!(app.combobox.value(), expected);
        assert_eq!(app.query(), expected);
        assert_eq!(app.combobox.state(), InteractionState::Suggesting);
    }

    #[test]
    fn test_backspace_edits_autocompleted_text() {
        let mut app = test_app();
        type_text(&mut app, "ap");
        app.handle_key_event(key(KeyCode::Down));
        let shown = app.combobox.input_value().to_string();

        app.handle_key_event(key(KeyCode::Backspace));

        assert_eq!(app.combobox.value(), &shown[..shown.len() - 1]);
    }

    #[test]
    fn test_typing_without_autocomplete_keeps_typed_text() {
        let config = Config {
            combobox: ComboboxConfig {
                autocomplete: false,
                ..Default::default()
            },
            ..Default::default()
        };
        let mut app = test_app_with_config(&config);
        type_text(&mut app, "ap");
        app.handle_key_event(key(KeyCode::Down));

        type_text(&mut app, "r");

        assert_eq!(app.combobox.value(), "apr");
    }

    #[test]
    fn test_enter_selects_navigated_option() {
        let mut app = test_app();
        type_text(&mut app, "ap");
        let first = app.visible_options()[0].value.clone();

        app.handle_key_event(key(KeyCode::Down));
        app.handle_key_event(key(KeyCode::Enter));

        assert_eq!(app.combobox.state(), InteractionState::Idle);
        assert_eq!(app.selected(), Some(first.clone()));
        assert_eq!(app.query(), first);
        assert_eq!(app.focus, Focus::Input);
    }

    #[test]
    fn test_enter_without_navigation_inserts_nothing() {
        let mut app = test_app();
        type_text(&mut app, "ap");
        app.handle_key_event(key(KeyCode::Enter));

        assert_eq!(app.query(), "ap");
        assert_eq!(app.selected(), None);
    }

    #[test]
    fn test_escape_closes_open_list() {
        let mut app = test_app();
        type_text(&mut app, "ap");
        app.handle_key_event(key(KeyCode::Esc));

        assert_eq!(app.combobox.state(), InteractionState::Idle);
        assert!(!app.should_quit);
    }

    #[test]
    fn test_escape_on_closed_list_quits() {
        let mut app = test_app();
        app.handle_key_event(key(KeyCode::Esc));
        assert!(app.should_quit);
    }

    #[test]
    fn test_arrow_down_opens_closed_list() {
        let mut app = test_app();
        app.handle_key_event(key(KeyCode::Down));

        assert_eq!(app.combobox.state(), InteractionState::Navigating);
        assert_eq!(app.combobox.navigation_value(), None);
    }
}

mod button_tests {
    use super::*;

    #[test]
    fn test_enter_on_button_toggles_list() {
        let mut app = test_app();
        app.handle_key_event(key(KeyCode::Tab));
        assert_eq!(app.focus, Focus::Button);

        app.handle_key_event(key(KeyCode::Enter));
        assert_eq!(app.combobox.state(), InteractionState::Suggesting);
        // Opening with the button hands focus back to the input
        assert_eq!(app.focus, Focus::Input);

        app.set_focus(Focus::Button);
        app.handle_key_event(key(KeyCode::Char(' ')));
        assert_eq!(app.combobox.state(), InteractionState::Idle);
    }
}

mod popover_tests {
    use super::*;

    fn focused_popover() -> App {
        let mut app = test_app();
        type_text(&mut app, "ap");
        app.handle_key_event(key(KeyCode::Down));
        app.handle_key_event(key(KeyCode::Tab));
        app.handle_key_event(key(KeyCode::Tab));
        app
    }

    #[test]
    fn test_tab_reaches_popover() {
        let app = focused_popover();
        assert_eq!(app.focus, Focus::Popover);
        assert_eq!(app.combobox.state(), InteractionState::Navigating);
    }

    #[test]
    fn test_space_clicks_highlighted_option() {
        let mut app = focused_popover();
        let active = app.combobox.navigation_value().map(str::to_string);

        app.handle_key_event(key(KeyCode::Char(' ')));

        assert_eq!(app.selected(), active);
        assert_eq!(app.combobox.state(), InteractionState::Idle);
        assert_eq!(app.focus, Focus::Input);
        assert_eq!(Some(app.query().to_string()), active);
    }

    #[test]
    fn test_escape_in_popover_returns_to_input() {
        let mut app = focused_popover();
        app.handle_key_event(key(KeyCode::Esc));

        assert_eq!(app.combobox.state(), InteractionState::Idle);
        assert_eq!(app.focus, Focus::Input);
    }

    #[test]
    fn test_tab_out_of_popover_blurs() {
        let mut app = focused_popover();
        app.handle_key_event(key(KeyCode::Tab));

        assert_eq!(app.focus, Focus::Outside);
        assert_eq!(app.combobox.state(), InteractionState::Idle);
    }
}

#[test]
fn test_q_quits_when_outside() {
    let mut app = test_app();
    app.handle_key_event(key(KeyCode::BackTab));
    assert_eq!(app.focus, Focus::Outside);

    app.handle_key_event(key(KeyCode::Char('q')));
    assert!(app.should_quit);
}
