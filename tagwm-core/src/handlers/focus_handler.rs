use crate::command::SwitchMode;
use crate::layouts::Layout;
use crate::models::ClientId;
use crate::{DisplayAction, State};

impl State {
    /// Focus a client, or the most recently focused visible one when `target` is absent or
    /// hidden by the tag-set.
    pub fn focus(&mut self, target: Option<ClientId>) {
        let target = target
            .filter(|&id| self.is_visible(id))
            .or_else(|| self.first_focusable(self.selected_monitor));
        let selected = self.selected_client();
        if selected.is_some() && selected != target {
            self.unfocus(selected, false);
        }

        if let Some(id) = target {
            let (monitor, iconic) = {
                let client = &mut self.clients[id];
                client.urgent = false;
                (client.monitor, client.iconic)
            };
            self.selected_monitor = monitor;
            if iconic {
                self.show_window(id, false);
            }
            self.detach_stack(id);
            self.attach_stack(id);
            let client = &self.clients[id];
            if !client.never_focus {
                self.actions
                    .push_back(DisplayAction::SetFocus(Some(client.handle)));
            }
        } else {
            self.actions.push_back(DisplayAction::SetFocus(None));
        }

        if let Some(monitor) = self.monitors.get_mut(self.selected_monitor) {
            monitor.selected = target;
        }
        if let Some(id) = target {
            self.add_access(id);
        }
    }

    /// Take focus away from a client. A client marked hidden goes back to being hidden.
    pub fn unfocus(&mut self, id: Option<ClientId>, set_focus: bool) {
        let Some(client) = id.and_then(|id| self.clients.get(id)) else {
            return;
        };
        if client.hidden && !client.iconic {
            let monitor = client.monitor;
            if let Some(id) = id {
                self.hide_window(id);
            }
            self.arrange(Some(monitor));
        }
        if set_focus {
            self.actions.push_back(DisplayAction::SetFocus(None));
        }
    }

    fn first_focusable(&self, monitor: usize) -> Option<ClientId> {
        self.monitors.get(monitor)?.stack.iter().copied().find(|&id| {
            self.is_visible(id) && !self.clients[id].iconic
        })
    }

    /// Cycle the selection through the visible clients in spatial order.
    pub fn focus_stack(&mut self, direction: i32) {
        let Some(selected) = self.selected_client() else {
            return;
        };
        if self.clients[selected].fullscreen && self.lock_fullscreen {
            return;
        }
        let candidates: Vec<ClientId> = self
            .visible_clients(self.selected_monitor)
            .into_iter()
            .filter(|&id| id == selected || !self.clients[id].iconic)
            .collect();
        let Some(position) = candidates.iter().position(|&id| id == selected) else {
            return;
        };
        let count = candidates.len();
        let next = if direction > 0 {
            candidates[(position + 1) % count]
        } else {
            candidates[(position + count - 1) % count]
        };
        self.switch_client(next);
    }

    /// Focus a client wherever it is, switching monitor and view when needed.
    pub fn switch_client(&mut self, id: ClientId) {
        let Some(client) = self.clients.get(id) else {
            return;
        };
        let (monitor, tags) = (client.monitor, client.tags);
        if monitor != self.selected_monitor {
            self.unfocus(self.selected_client(), false);
            self.selected_monitor = monitor;
            self.focus(None);
        }
        if !self.is_visible(id) {
            self.view(tags);
        }
        if self.selected_client() != Some(id) {
            self.focus(Some(id));
            self.restack(self.selected_monitor);
        }
    }

    /// Jump to the most recent client in the access history that `mode` accepts.
    pub fn switch_prev_client(&mut self, mode: SwitchMode) {
        let Some(access) = self
            .monitors
            .get(self.selected_monitor)
            .map(|m| m.access.clone())
        else {
            return;
        };
        let selected = self.selected_client();
        let head = access.first().copied();
        let found = access
            .iter()
            .copied()
            .find(|&id| Some(id) != selected && self.is_prev(mode, head, id));
        match found {
            Some(id) => {
                // a selection left behind on another view is returned to first
                let target = selected.filter(|&sel| !self.is_visible(sel)).unwrap_or(id);
                self.switch_client(target);
            }
            None if mode != SwitchMode::Window => self.switch_prev_client(SwitchMode::Window),
            None => {}
        }
    }

    fn is_prev(&self, mode: SwitchMode, head: Option<ClientId>, id: ClientId) -> bool {
        let Some(client) = self.clients.get(id) else {
            return false;
        };
        match mode {
            SwitchMode::Window => true,
            SwitchMode::SameTag => {
                client.monitor == self.selected_monitor && self.is_visible(id)
            }
            SwitchMode::DiffTag => {
                client.monitor != self.selected_monitor || !self.is_visible(id)
            }
            SwitchMode::Smart => {
                let monocle = head.and_then(|head| self.clients.get(head)).map_or(false, |head| {
                    !head.fullscreen
                        && self
                            .monitors
                            .get(head.monitor)
                            .map_or(false, |m| m.layout() == Layout::Monocle)
                });
                let mode = if monocle {
                    SwitchMode::Window
                } else {
                    SwitchMode::DiffTag
                };
                self.is_prev(mode, head, id)
            }
        }
    }

    /// Move the selection into the master slot, or promote the next tiled client when it is
    /// already there.
    pub fn zoom(&mut self) {
        let Some(selected) = self.selected_client() else {
            return;
        };
        let index = self.selected_monitor;
        if !self.monitors[index].layout().arranges() || self.clients[selected].floating {
            return;
        }
        let tiled = self.tiled_clients(index);
        let target = if tiled.first() == Some(&selected) {
            match tiled.get(1) {
                Some(&next) => next,
                None => return,
            }
        } else {
            selected
        };
        self.detach(target);
        self.attach(target);
        self.focus(Some(target));
        self.arrange(Some(index));
    }
}

#[cfg(test)]
mod tests {
    use crate::command::SwitchMode;
    use crate::handlers::client_handler::tests::spec;
    use crate::models::{ClientId, TagMask, WindowHandle};
    use crate::{Manager, State};

    fn manage(state: &mut State, handle: u64) -> ClientId {
        state.manage(&spec(handle));
        state.window_to_client(WindowHandle(handle)).unwrap()
    }

    #[test]
    fn access_history_is_most_recent_first() {
        let mut manager = Manager::new_test();
        let state = &mut manager.state;
        let a = manage(state, 1);
        let b = manage(state, 2);
        let c = manage(state, 3);
        for id in [a, b, c, b] {
            state.focus(Some(id));
        }
        assert_eq!(state.monitors[0].access, vec![b, c, a]);
    }

    #[test]
    fn switching_tags_back_restores_the_previous_selection() {
        let mut manager = Manager::new_test();
        let state = &mut manager.state;
        let a = manage(state, 1);
        state.view(TagMask(0b10));
        let b = manage(state, 2);
        state.view(TagMask(0b1));
        assert_eq!(state.selected_client(), Some(a));

        state.view(TagMask(0b10));
        assert!(!state.is_visible(a));
        assert!(state.is_visible(b));
        assert_eq!(state.selected_client(), Some(b));

        state.view(TagMask(0b1));
        assert!(state.is_visible(a));
        assert_eq!(state.selected_client(), Some(a));
    }

    #[test]
    fn focus_stack_wraps_in_spatial_order() {
        let mut manager = Manager::new_test();
        let state = &mut manager.state;
        let a = manage(state, 1);
        let b = manage(state, 2);
        let c = manage(state, 3);
        assert_eq!(state.monitors[0].clients, vec![a, b, c]);
        assert_eq!(state.selected_client(), Some(c));
        state.focus_stack(1);
        assert_eq!(state.selected_client(), Some(a));
        state.focus_stack(-1);
        assert_eq!(state.selected_client(), Some(c));
        state.focus_stack(-1);
        assert_eq!(state.selected_client(), Some(b));
    }

    #[test]
    fn focus_stack_is_locked_by_fullscreen() {
        let mut manager = Manager::new_test();
        let state = &mut manager.state;
        manage(state, 1);
        let b = manage(state, 2);
        state.set_fullscreen(b, true);
        state.focus_stack(1);
        assert_eq!(state.selected_client(), Some(b));
    }

    #[test]
    fn zoom_swaps_master_and_promotes_the_next_client() {
        let mut manager = Manager::new_test();
        let state = &mut manager.state;
        let a = manage(state, 1);
        let b = manage(state, 2);
        state.zoom();
        assert_eq!(state.monitors[0].clients, vec![b, a]);
        state.zoom();
        assert_eq!(state.monitors[0].clients, vec![a, b]);
        assert_eq!(state.selected_client(), Some(a));
    }

    #[test]
    fn switch_prev_client_returns_to_the_last_window() {
        let mut manager = Manager::new_test();
        let state = &mut manager.state;
        let a = manage(state, 1);
        let b = manage(state, 2);
        state.focus(Some(a));
        state.switch_prev_client(SwitchMode::SameTag);
        assert_eq!(state.selected_client(), Some(b));
    }

    #[test]
    fn diff_tag_switches_the_view() {
        let mut manager = Manager::new_test();
        let state = &mut manager.state;
        let a = manage(state, 1);
        state.view(TagMask(0b100));
        let b = manage(state, 2);
        assert_eq!(state.selected_client(), Some(b));
        state.switch_prev_client(SwitchMode::DiffTag);
        assert_eq!(state.selected_client(), Some(a));
        assert_eq!(state.monitors[0].tagset(), TagMask(0b1));
    }

    #[test]
    fn unfocusing_a_hidden_client_hides_it_again() {
        let mut manager = Manager::new_test();
        let state = &mut manager.state;
        let a = manage(state, 1);
        let b = manage(state, 2);
        state.hide_window(a);
        assert!(state.clients[a].iconic);
        state.focus(Some(a));
        assert!(!state.clients[a].iconic);
        state.focus(Some(b));
        assert!(state.clients[a].iconic);
        assert!(state.clients[a].hidden);
    }
}
