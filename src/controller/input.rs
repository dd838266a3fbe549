//! Key event handling

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::AppController;

impl AppController {
    pub fn handle_key_event(&mut self, key: KeyEvent) -> Result<()> {
        if key.kind != KeyEventKind::Press {
            return Ok(());
        }

        // Handle the alert notice first (blocks all other interactions)
        if self.model.ui.show_alert {
            if let KeyCode::Esc | KeyCode::Enter = key.code {
                self.model.dismiss_alert();
            }
            return Ok(());
        }

        // Handle help popup
        if self.model.ui.show_help {
            if let KeyCode::Esc | KeyCode::Char('h') | KeyCode::Char('H') = key.code {
                self.model.toggle_help();
            }
            return Ok(());
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.model.set_should_quit(true);
            }
            KeyCode::Tab => {
                if key.modifiers.contains(KeyModifiers::SHIFT) {
                    self.cycle_focus_backward();
                } else {
                    self.cycle_focus_forward();
                }
            }
            KeyCode::BackTab => {
                self.cycle_focus_backward();
            }
            KeyCode::Down => {
                self.cycle_focus_forward();
            }
            KeyCode::Up => {
                self.cycle_focus_backward();
            }
            KeyCode::Left => {
                self.move_cursor(false);
            }
            KeyCode::Right => {
                self.move_cursor(true);
            }
            KeyCode::Enter => {
                self.activate();
            }
            KeyCode::Char('h') | KeyCode::Char('H') => {
                self.model.toggle_help();
            }
            _ => {}
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{AppModel, Category, Focus, Tab};

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn controller() -> AppController {
        AppController::new(AppModel::new())
    }

    #[test]
    fn test_tab_key_cycles_focus() -> Result<()> {
        let mut c = controller();
        c.handle_key_event(press(KeyCode::Tab))?;
        assert_eq!(c.model.ui.focus, Focus::PopularRow);
        c.handle_key_event(press(KeyCode::BackTab))?;
        assert_eq!(c.model.ui.focus, Focus::Categories);
        Ok(())
    }

    #[test]
    fn test_arrow_and_enter_select_a_category() -> Result<()> {
        let mut c = controller();
        c.handle_key_event(press(KeyCode::Right))?;
        c.handle_key_event(press(KeyCode::Right))?;
        c.handle_key_event(press(KeyCode::Enter))?;
        assert_eq!(c.model.ui.active_category, Category::Podcasts);
        Ok(())
    }

    #[test]
    fn test_enter_selects_playlist_and_marks_it_active() -> Result<()> {
        let mut c = controller();
        c.handle_key_event(press(KeyCode::Down))?; // focus popular row
        c.handle_key_event(press(KeyCode::Right))?;
        c.handle_key_event(press(KeyCode::Enter))?;
        assert_eq!(c.model.ui.active_playlist, Some(2));
        Ok(())
    }

    #[test]
    fn test_nav_bar_selection_sets_active_tab() -> Result<()> {
        let mut c = controller();
        c.model.ui.focus = Focus::NavBar;
        c.handle_key_event(press(KeyCode::Right))?;
        c.handle_key_event(press(KeyCode::Right))?;
        c.handle_key_event(press(KeyCode::Enter))?;
        assert_eq!(c.model.ui.active_tab, Tab::Library);
        Ok(())
    }

    #[test]
    fn test_alert_blocks_input_until_dismissed() -> Result<()> {
        let mut c = controller();
        c.model.ui.focus = Focus::AlertButton;
        c.handle_key_event(press(KeyCode::Enter))?;
        assert!(c.model.ui.show_alert);

        // While the notice is up, other keys change nothing
        c.handle_key_event(press(KeyCode::Tab))?;
        c.handle_key_event(press(KeyCode::Char('q')))?;
        assert_eq!(c.model.ui.focus, Focus::AlertButton);
        assert!(!c.should_quit());

        c.handle_key_event(press(KeyCode::Esc))?;
        assert!(!c.model.ui.show_alert);
        Ok(())
    }

    #[test]
    fn test_release_events_are_ignored() -> Result<()> {
        let mut c = controller();
        let mut release = press(KeyCode::Tab);
        release.kind = KeyEventKind::Release;
        c.handle_key_event(release)?;
        assert_eq!(c.model.ui.focus, Focus::Categories);
        Ok(())
    }

    #[test]
    fn test_q_quits() -> Result<()> {
        let mut c = controller();
        c.handle_key_event(press(KeyCode::Char('q')))?;
        assert!(c.should_quit());
        Ok(())
    }

    #[test]
    fn test_help_popup_toggles_and_swallows_keys() -> Result<()> {
        let mut c = controller();
        c.handle_key_event(press(KeyCode::Char('h')))?;
        assert!(c.model.ui.show_help);
        c.handle_key_event(press(KeyCode::Enter))?;
        assert_eq!(c.model.ui.active_category, Category::All);
        c.handle_key_event(press(KeyCode::Esc))?;
        assert!(!c.model.ui.show_help);
        Ok(())
    }
}
