mod grid;
mod monocle;
mod tile;

use crate::models::{Gaps, Xyhw};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The arrangements a monitor can use for its tiled clients.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Layout {
    #[default]
    Tile,
    Monocle,
    Grid,
    Floating,
}

/// What a layout gets to work with.
///
/// `borders` holds the border width of every visible tiled client in spatial order, so its
/// length is the number of clients to place.
#[derive(Debug, Clone, Copy)]
pub struct LayoutContext<'a> {
    pub area: Xyhw,
    pub gaps: Gaps,
    pub master_count: i32,
    pub master_factor: f32,
    pub borders: &'a [i32],
}

impl Layout {
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Tile => "[]=",
            Self::Monocle => "[M]",
            Self::Grid => "###",
            Self::Floating => "><>",
        }
    }

    /// Whether new clients go to the end of the spatial order instead of the head.
    pub fn appends(self) -> bool {
        matches!(self, Self::Tile | Self::Grid)
    }

    /// `false` when clients keep the geometry they were given.
    pub fn arranges(self) -> bool {
        self != Self::Floating
    }

    /// Geometry for each tiled client, in the order of `ctx.borders`.
    ///
    /// Widths and heights exclude the border, the way they are handed to a resize.
    pub fn arrange(self, ctx: &LayoutContext) -> Vec<Xyhw> {
        if ctx.borders.is_empty() {
            return vec![];
        }
        match self {
            Self::Tile => tile::update(ctx),
            Self::Monocle => monocle::update(ctx),
            Self::Grid => grid::update(ctx),
            Self::Floating => vec![],
        }
    }
}

#[derive(Debug, Error)]
#[error("Could not parse layout: {0}")]
pub struct ParseLayoutError(String);

impl std::str::FromStr for Layout {
    type Err = ParseLayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "tile" => Ok(Self::Tile),
            "monocle" => Ok(Self::Monocle),
            "grid" => Ok(Self::Grid),
            "floating" => Ok(Self::Floating),
            _ => Err(ParseLayoutError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_names_parse_case_insensitively() {
        assert_eq!("Grid".parse::<Layout>().ok(), Some(Layout::Grid));
        assert_eq!("floating".parse::<Layout>().ok(), Some(Layout::Floating));
        assert!("spiral".parse::<Layout>().is_err());
    }

    #[test]
    fn floating_places_nothing() {
        let ctx = LayoutContext {
            area: Xyhw::new(0, 0, 800, 600),
            gaps: Gaps::default(),
            master_count: 1,
            master_factor: 0.55,
            borders: &[1, 1],
        };
        assert!(Layout::Floating.arrange(&ctx).is_empty());
        assert_eq!(Layout::Tile.arrange(&ctx).len(), 2);
    }
}
