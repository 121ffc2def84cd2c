use crate::vault::form::{EntryForm, FormOutcome};
use crate::vault::models::Credentials;
use crate::vault::store::{CredentialStore, SerialMode};
use crate::vault::view::{FilteredView, RevealSet};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::info;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Mode {
    Normal,
    Search,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum View {
    List,
    AddModal,
}

/// What the event loop should do after a key press.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Control {
    Continue,
    Quit,
}

pub struct App {
    store: CredentialStore,
    reveal: RevealSet,
    filtered: FilteredView,
    mask_limit: usize,
    pub form: EntryForm,
    pub selected: usize,
    pub mode: Mode,
    pub filter: String,
    pub view: View,
    toast: Option<String>,
    toast_ticks: u16,
}

impl App {
    pub fn new(serial_mode: SerialMode, mask_limit: usize) -> Self {
        let store = CredentialStore::new(serial_mode);
        let reveal = RevealSet::new();
        let filtered = FilteredView::build(&store, "", &reveal, mask_limit);
        Self {
            store,
            reveal,
            filtered,
            mask_limit,
            form: EntryForm::new(),
            selected: 0,
            mode: Mode::Normal,
            filter: String::new(),
            view: View::List,
            toast: None,
            toast_ticks: 0,
        }
    }

    pub fn store(&self) -> &CredentialStore {
        &self.store
    }

    pub fn filtered(&self) -> &FilteredView {
        &self.filtered
    }

    pub fn is_revealed(&self, serial: u32) -> bool {
        self.reveal.is_revealed(serial)
    }

    pub fn next(&mut self) {
        if self.filtered.rows.is_empty() {
            return;
        }
        self.selected = (self.selected + 1).min(self.filtered.rows.len() - 1);
    }

    pub fn prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn enter_search(&mut self) {
        self.mode = Mode::Search;
    }

    pub fn exit_search(&mut self) {
        self.mode = Mode::Normal;
    }

    pub fn push_filter(&mut self, c: char) {
        self.filter.push(c);
        self.recompute();
    }

    pub fn pop_filter(&mut self) {
        self.filter.pop();
        self.recompute();
    }

    pub fn toast(&mut self, msg: impl Into<String>) {
        self.toast = Some(msg.into());
        self.toast_ticks = 10; // ~2s at 200ms tick
    }

    pub fn toast_message(&self) -> Option<&str> {
        self.toast.as_deref()
    }

    pub fn tick(&mut self) {
        if self.toast_ticks > 0 {
            self.toast_ticks -= 1;
            if self.toast_ticks == 0 {
                self.toast = None;
            }
        }
    }

    fn recompute(&mut self) {
        self.filtered = FilteredView::build(&self.store, &self.filter, &self.reveal, self.mask_limit);
        if self.selected >= self.filtered.rows.len() {
            self.selected = self.filtered.rows.len().saturating_sub(1);
        }
    }

    pub fn selected_serial(&self) -> Option<u32> {
        self.filtered.rows.get(self.selected).map(|r| r.serial)
    }

    /// Add without going through the form, e.g. for scripted sessions.
    pub fn add_credentials(&mut self, credentials: Credentials) -> u32 {
        let serial = self.store.add(credentials);
        self.recompute();
        serial
    }

    pub fn delete(&mut self, serial: u32) -> bool {
        let removed = self.store.delete(serial);
        self.recompute();
        removed
    }

    pub fn toggle_reveal(&mut self, serial: u32) -> bool {
        let shown = self.reveal.toggle(serial);
        self.recompute();
        shown
    }

    pub fn delete_selected(&mut self) {
        if let Some(serial) = self.selected_serial() {
            if self.delete(serial) {
                self.toast("Credential deleted");
            }
        }
    }

    pub fn toggle_selected(&mut self) {
        if let Some(serial) = self.selected_serial() {
            self.toggle_reveal(serial);
        }
    }

    // Modal handling
    pub fn enter_add(&mut self) {
        self.form.open();
        self.view = View::AddModal;
    }

    pub fn cancel_modal(&mut self) {
        self.form.cancel();
        self.view = View::List;
    }

    pub fn submit_form(&mut self) {
        if let FormOutcome::Submitted(credentials) = self.form.submit() {
            let serial = self.add_credentials(credentials);
            info!(serial, "entry added from form");
            self.view = View::List;
            self.toast("Credential added");
        }
    }

    pub fn on_key(&mut self, k: KeyEvent) -> Control {
        // Ctrl/Alt chords never insert text
        let plain = k.modifiers.difference(KeyModifiers::SHIFT).is_empty();
        match self.view {
            View::List => match self.mode {
                Mode::Normal => match k.code {
                    KeyCode::Char('q') => return Control::Quit,
                    KeyCode::Down | KeyCode::Char('j') => self.next(),
                    KeyCode::Up | KeyCode::Char('k') => self.prev(),
                    KeyCode::Char('/') => self.enter_search(),
                    KeyCode::Char('a') => self.enter_add(),
                    KeyCode::Char('v') | KeyCode::Char(' ') => self.toggle_selected(),
                    KeyCode::Char('d') | KeyCode::Delete => self.delete_selected(),
                    _ => {}
                },
                Mode::Search => match k.code {
                    KeyCode::Esc | KeyCode::Enter => self.exit_search(),
                    KeyCode::Backspace => self.pop_filter(),
                    KeyCode::Char(c) if plain => self.push_filter(c),
                    _ => {}
                },
            },
            View::AddModal => match k.code {
                KeyCode::Esc => self.cancel_modal(),
                KeyCode::Tab => self.form.next_field(),
                KeyCode::BackTab => self.form.prev_field(),
                KeyCode::Backspace => self.form.backspace(),
                KeyCode::Enter => self.submit_form(),
                KeyCode::Char(c) if plain && !c.is_control() => self.form.push_char(c),
                _ => {}
            },
        }
        Control::Continue
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_str(app: &mut App, s: &str) {
        for c in s.chars() {
            app.on_key(key(KeyCode::Char(c)));
        }
    }

    #[test]
    fn filtering_updates_visible_rows() {
        let mut app = App::new(SerialMode::Monotonic, 12);
        app.add_credentials(Credentials::new("alpha", "x", "1"));
        app.add_credentials(Credentials::new("beta", "y", "2"));
        app.add_credentials(Credentials::new("gamma", "z", "3"));
        app.enter_search();
        app.push_filter('a');
        assert_eq!(app.filtered().rows.len(), 3);
        app.push_filter('l');
        assert_eq!(app.filtered().rows.len(), 1);
        app.pop_filter();
        assert_eq!(app.filtered().rows.len(), 3);
    }

    #[test]
    fn add_via_keys_then_delete() {
        let mut app = App::new(SerialMode::Monotonic, 12);
        app.on_key(key(KeyCode::Char('a')));
        assert_eq!(app.view, View::AddModal);
        type_str(&mut app, "GitHub");
        app.on_key(key(KeyCode::Tab));
        type_str(&mut app, "alice");
        // Password still empty: submit is ignored and the modal stays open
        app.on_key(key(KeyCode::Enter));
        assert_eq!(app.view, View::AddModal);
        assert!(app.store().is_empty());

        app.on_key(key(KeyCode::Tab));
        type_str(&mut app, "hunter2");
        app.on_key(key(KeyCode::Enter));
        assert_eq!(app.view, View::List);
        assert_eq!(app.store().len(), 1);
        assert_eq!(app.toast_message(), Some("Credential added"));

        app.on_key(key(KeyCode::Char('d')));
        assert!(app.store().is_empty());
    }

    #[test]
    fn q_in_search_mode_is_text_not_quit() {
        let mut app = App::new(SerialMode::Monotonic, 12);
        app.on_key(key(KeyCode::Char('/')));
        assert_eq!(app.on_key(key(KeyCode::Char('q'))), Control::Continue);
        assert_eq!(app.filter, "q");
        app.on_key(key(KeyCode::Esc));
        assert_eq!(app.on_key(key(KeyCode::Char('q'))), Control::Quit);
    }

    #[test]
    fn modifier_chords_do_not_type_into_fields() {
        let mut app = App::new(SerialMode::Monotonic, 12);
        app.on_key(key(KeyCode::Char('a')));
        app.on_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        app.on_key(KeyEvent::new(KeyCode::Char('x'), KeyModifiers::ALT));
        app.on_key(KeyEvent::new(KeyCode::Char('G'), KeyModifiers::SHIFT));
        assert_eq!(app.form.platform, "G");

        app.on_key(key(KeyCode::Esc));
        app.on_key(key(KeyCode::Char('/')));
        app.on_key(KeyEvent::new(KeyCode::Char('u'), KeyModifiers::CONTROL));
        assert_eq!(app.filter, "");
    }

    #[test]
    fn toast_expires_after_ticks() {
        let mut app = App::new(SerialMode::Monotonic, 12);
        app.toast("hi");
        for _ in 0..10 {
            app.tick();
        }
        assert!(app.toast_message().is_none());
    }
}
