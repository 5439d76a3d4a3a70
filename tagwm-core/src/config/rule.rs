use crate::models::TagMask;
use serde::{Deserialize, Serialize};

/// Initial placement for windows matching `class`, `instance` and `title`.
///
/// Every given pattern must be a substring of the corresponding window property. Negative `x`
/// and `y` are measured from the right and bottom edge of the usable area.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Rule {
    pub class: Option<String>,
    pub instance: Option<String>,
    pub title: Option<String>,
    pub tags: TagMask,
    pub floating: bool,
    pub monitor: Option<usize>,
    pub hide_border: bool,
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rule {
    pub fn matches(&self, class: &str, instance: &str, title: &str) -> bool {
        let matches = |pattern: &Option<String>, value: &str| {
            pattern.as_deref().map_or(true, |pattern| value.contains(pattern))
        };
        matches(&self.title, title)
            && matches(&self.class, class)
            && matches(&self.instance, instance)
    }
}
