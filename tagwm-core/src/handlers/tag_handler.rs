use crate::models::{Pertag, TagMask};
use crate::State;

impl State {
    /// Show the tags of `mask` on the selected monitor.
    ///
    /// Every switch flips the tag-set registers, so viewing an empty mask goes back to the
    /// previous tag-set and its pertag slot.
    pub fn view(&mut self, mask: TagMask) {
        let tag_mask = self.tag_mask();
        let bar_height = self.bar_height();
        let index = self.selected_monitor;
        let Some(monitor) = self.monitors.get_mut(index) else {
            return;
        };
        let requested = mask & tag_mask;
        if requested == monitor.tagset() & tag_mask {
            return;
        }
        monitor.selected_tags ^= 1;
        if requested.is_empty() {
            monitor.pertag.swap();
        } else {
            monitor.set_tagset(requested);
            monitor.pertag.view(Pertag::slot_for(mask, tag_mask));
        }
        monitor.apply_pertag(bar_height);
        self.focus(None);
        self.arrange(Some(index));
    }

    /// Add or remove the tags of `mask` from the shown set. The last tag cannot be removed.
    pub fn toggle_view(&mut self, mask: TagMask) {
        let tag_mask = self.tag_mask();
        let bar_height = self.bar_height();
        let index = self.selected_monitor;
        let Some(monitor) = self.monitors.get_mut(index) else {
            return;
        };
        let tagset = monitor.tagset() ^ (mask & tag_mask);
        if (tagset & tag_mask).is_empty() {
            return;
        }
        monitor.set_tagset(tagset);
        monitor.pertag.toggle_view(tagset & tag_mask);
        monitor.apply_pertag(bar_height);
        self.focus(None);
        self.arrange(Some(index));
    }

    /// Move the selection to the tags of `mask` and follow it there.
    pub fn tag(&mut self, mask: TagMask) {
        let tags = mask & self.tag_mask();
        let Some(selected) = self.selected_client() else {
            return;
        };
        if tags.is_empty() {
            return;
        }
        self.clients[selected].tags = tags;
        self.view(mask);
        self.focus(None);
        self.arrange(Some(self.selected_monitor));
    }

    /// Add or remove the tags of `mask` from the selection. The last tag cannot be removed.
    pub fn toggle_tag(&mut self, mask: TagMask) {
        let Some(selected) = self.selected_client() else {
            return;
        };
        let tags = self.clients[selected].tags ^ (mask & self.tag_mask());
        if tags.is_empty() {
            return;
        }
        self.clients[selected].tags = tags;
        self.focus(None);
        self.arrange(Some(self.selected_monitor));
    }

    pub fn view_to_left(&mut self) {
        self.view_to(TagMask::shifted_left);
    }

    pub fn view_to_right(&mut self) {
        self.view_to(TagMask::shifted_right);
    }

    /// Walk from the single shown tag towards the next one holding a client.
    fn view_to(&mut self, step: fn(TagMask) -> TagMask) {
        let tag_mask = self.tag_mask();
        let Some(monitor) = self.monitors.get(self.selected_monitor) else {
            return;
        };
        let current = monitor.tagset() & tag_mask;
        if monitor.overview || current.count() != 1 {
            return;
        }
        let mut candidate = step(current) & tag_mask;
        while !candidate.is_empty() {
            let occupied = monitor
                .clients
                .iter()
                .any(|&id| self.clients[id].tags.intersects(candidate));
            if occupied {
                self.view(candidate);
                return;
            }
            candidate = step(candidate) & tag_mask;
        }
    }
}
