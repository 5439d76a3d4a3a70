use serde::{Deserialize, Serialize};

use crate::layouts::Layout;
use crate::models::TagMask;

/// Layout state remembered for one tag.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct PertagEntry {
    pub master_count: i32,
    pub master_factor: f32,
    pub selected_layout: usize,
    pub layouts: [Layout; 2],
    pub show_bar: bool,
}

/// Per-tag memory of one monitor.
///
/// Slot `0` belongs to the "all tags" view, slot `i + 1` to tag `i`. `current` is the slot the
/// monitor's live fields mirror.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Pertag {
    pub current: usize,
    pub previous: usize,
    entries: Vec<PertagEntry>,
}

impl Pertag {
    pub fn new(tag_count: usize, entry: PertagEntry) -> Self {
        Self {
            current: 1,
            previous: 1,
            entries: vec![entry; tag_count + 1],
        }
    }

    /// The slot a requested mask resolves to, `None` when it names several tags.
    pub fn slot_for(requested: TagMask, tag_mask: TagMask) -> Option<usize> {
        if requested == TagMask::ALL {
            return Some(0);
        }
        (requested & tag_mask).single_tag().map(|tag| tag + 1)
    }

    /// Track a tag-set switch. Unresolvable masks keep the current slot.
    pub fn view(&mut self, slot: Option<usize>) {
        self.previous = self.current;
        if let Some(slot) = slot {
            self.current = slot;
        }
    }

    /// Go back to the slot used before the last switch.
    pub fn swap(&mut self) {
        std::mem::swap(&mut self.current, &mut self.previous);
    }

    /// Track a toggled tag-set. The slot moves to the lowest tag only once the current tag is
    /// no longer part of `tagset`.
    pub fn toggle_view(&mut self, tagset: TagMask) {
        let still_shown = self.current > 0 && tagset.intersects(TagMask::tag(self.current - 1));
        if still_shown {
            return;
        }
        if let Some(tag) = tagset.first_tag() {
            self.previous = self.current;
            self.current = tag + 1;
        }
    }

    pub fn current_entry(&self) -> &PertagEntry {
        &self.entries[self.current]
    }

    pub fn entry(&self, slot: usize) -> Option<&PertagEntry> {
        self.entries.get(slot)
    }

    /// Update the slot of every tag in `tagset`, and slot `0` when it is the resolved slot.
    pub fn write(&mut self, tagset: TagMask, mut update: impl FnMut(&mut PertagEntry)) {
        let tag_count = self.entries.len() - 1;
        for tag in tagset.tags().filter(|&tag| tag < tag_count) {
            update(&mut self.entries[tag + 1]);
        }
        if self.current == 0 {
            update(&mut self.entries[0]);
        }
    }
}
