//! The scratchpad is one floating window carrying a tag of its own. Toggling it flips that tag
//! in the shown tag-set of the selected monitor.
use crate::models::ClientId;
use crate::utils::child_process;
use crate::{Config, DisplayServer, Manager, State};

impl State {
    /// The scratchpad client of the selected monitor.
    pub fn find_scratch(&self) -> Option<ClientId> {
        let scratch = self.scratch_tag();
        self.monitors
            .get(self.selected_monitor)?
            .clients
            .iter()
            .copied()
            .find(|&id| self.clients[id].tags.intersects(scratch))
    }

    /// Show or hide the scratchpad. Returns `false` when there is none to toggle.
    pub fn toggle_scratch(&mut self) -> bool {
        let Some(id) = self.find_scratch() else {
            return false;
        };
        let scratch = self.scratch_tag();
        let index = self.selected_monitor;
        let monitor = &mut self.monitors[index];
        let tagset = monitor.tagset() ^ scratch;
        if !tagset.is_empty() {
            if !tagset.intersects(scratch) {
                let previous = monitor.selected_tags ^ 1;
                monitor.tagsets[previous] &= !scratch;
                self.remove_access(id);
            }
            self.monitors[index].set_tagset(tagset);
            self.focus(None);
            self.arrange(Some(index));
        }
        if self.is_visible(id) {
            self.focus(Some(id));
            self.restack(index);
        }
        true
    }
}

impl<C: Config, SERVER: DisplayServer> Manager<C, SERVER> {
    /// Toggle the scratchpad, launching it when it is not running.
    pub fn toggle_scratchpad(&mut self) -> bool {
        if self.state.toggle_scratch() {
            return true;
        }
        let command = &self.state.scratchpad.command;
        if let Err(err) = child_process::spawn(command, &mut self.children) {
            tracing::error!("Unable to launch the scratchpad {command:?}: {err}");
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use crate::handlers::client_handler::tests::spec;
    use crate::models::{ClientId, TagMask, WindowHandle, Xyhw};
    use crate::{Manager, State};

    fn manage_scratch(state: &mut State) -> ClientId {
        let mut window = spec(9);
        window.name = state.scratchpad.name.clone();
        window.geometry = Xyhw::new(0, 0, 800, 600);
        state.manage(&window);
        state.window_to_client(WindowHandle(9)).unwrap()
    }

    #[test]
    fn the_scratchpad_starts_shown_floating_and_centered() {
        let mut manager = Manager::new_test();
        let state = &mut manager.state;
        let id = manage_scratch(state);
        let scratch = state.scratch_tag();
        let client = &state.clients[id];
        assert_eq!(client.tags, scratch);
        assert!(client.floating);
        assert!(state.monitors[0].tagset().intersects(scratch));
        assert_eq!(client.geometry.x, (1920 - client.width()) / 2);
        assert_eq!(state.selected_client(), Some(id));
    }

    #[test]
    fn toggling_hides_and_brings_back_the_scratchpad() {
        let mut manager = Manager::new_test();
        let state = &mut manager.state;
        state.manage(&spec(1));
        let other = state.window_to_client(WindowHandle(1)).unwrap();
        let id = manage_scratch(state);

        assert!(state.toggle_scratch());
        assert!(!state.is_visible(id));
        assert_eq!(state.monitors[0].tagset(), TagMask(0b1));
        assert!(!state.monitors[0].access.contains(&id));
        assert_eq!(state.selected_client(), Some(other));

        assert!(state.toggle_scratch());
        assert!(state.is_visible(id));
        assert_eq!(state.selected_client(), Some(id));
        assert_eq!(state.monitors[0].access.first(), Some(&id));
    }

    #[test]
    fn hiding_clears_the_bit_from_both_registers() {
        let mut manager = Manager::new_test();
        let state = &mut manager.state;
        manage_scratch(state);
        state.view(TagMask(0b10));
        state.toggle_scratch();
        let scratch = state.scratch_tag();
        assert!(state.monitors[0].tagset().intersects(scratch));
        state.toggle_scratch();
        assert!(state.monitors[0].tagsets.iter().all(|t| !t.intersects(scratch)));
    }

    #[test]
    fn without_a_scratchpad_nothing_is_toggled() {
        let mut manager = Manager::new_test();
        assert!(!manager.state.toggle_scratch());
        assert_eq!(manager.state.monitors[0].tagset(), TagMask(0b1));
    }

    #[test]
    fn destroying_the_scratchpad_clears_its_tag() {
        let mut manager = Manager::new_test();
        let state = &mut manager.state;
        manage_scratch(state);
        state.unmanage(WindowHandle(9), true);
        let scratch = state.scratch_tag();
        assert!(state.monitors[0].tagsets.iter().all(|t| !t.intersects(scratch)));
        assert_eq!(state.find_scratch(), None);
    }

    #[test]
    fn the_scratchpad_floats_above_the_overview_grid() {
        let mut manager = Manager::new_test();
        let state = &mut manager.state;
        state.manage(&spec(1));
        let id = manage_scratch(state);
        state.toggle_scratch();
        let geometry = state.clients[id].geometry;

        state.toggle_overview();
        assert!(state.is_visible(id));
        assert!(!state.tiled_clients(0).contains(&id));
        assert_eq!(state.clients[id].geometry, geometry);
    }
}
