use super::LayoutContext;
use crate::models::Xyhw;

// Share of the usable area a lone or paired client gets.
const SINGLE_WIDTH: f32 = 0.7;
const SINGLE_HEIGHT: f32 = 0.65;

/// Smallest square-ish grid holding `n` cells, as `(columns, rows)`.
pub fn dimensions(n: usize) -> (usize, usize) {
    let mut columns = 0;
    while columns * columns < n {
        columns += 1;
    }
    let rows = if columns > 0 && (columns - 1) * columns >= n {
        columns - 1
    } else {
        columns
    };
    (columns, rows)
}

/// Even grid of equally sized cells. A short last row is centered horizontally.
///
/// One or two clients get boxes centered in the usable area instead of filling it.
pub fn update(ctx: &LayoutContext) -> Vec<Xyhw> {
    let area = ctx.area;
    let gaps = ctx.gaps;
    let n = ctx.borders.len();

    match ctx.borders {
        [] => vec![],
        [bw] => {
            let w = ((area.w - 2 * gaps.outer_v) as f32 * SINGLE_WIDTH) as i32;
            let h = ((area.h - 2 * gaps.outer_h) as f32 * SINGLE_HEIGHT) as i32;
            let x = area.x + (area.w - w) / 2;
            let y = area.y + (area.h - h) / 2;
            vec![Xyhw::new(x, y, w - 2 * bw, h - 2 * bw)]
        }
        [first, second] => {
            let w = (area.w - 2 * gaps.outer_v - gaps.inner_v) / 2;
            let h = ((area.h - 2 * gaps.outer_h) as f32 * SINGLE_HEIGHT) as i32;
            let y = area.y + (area.h - h) / 2;
            let x = area.x + gaps.outer_v;
            vec![
                Xyhw::new(x, y, w - 2 * first, h - 2 * first),
                Xyhw::new(x + w + gaps.inner_v, y, w - 2 * second, h - 2 * second),
            ]
        }
        borders => {
            let (columns, rows) = dimensions(n);
            let (cols, rows_i) = (columns as i32, rows as i32);
            let h = (area.h - 2 * gaps.outer_h - (rows_i - 1) * gaps.inner_h) / rows_i;
            let w = (area.w - 2 * gaps.outer_v - (cols - 1) * gaps.inner_v) / cols;

            let overflow = (n % columns) as i32;
            let shift = if overflow > 0 {
                (area.w - overflow * w - (overflow - 1) * gaps.inner_v) / 2 - gaps.outer_v
            } else {
                0
            };
            let last_row_start = n - overflow as usize;

            borders
                .iter()
                .enumerate()
                .map(|(i, bw)| {
                    let column = (i % columns) as i32;
                    let row = (i / columns) as i32;
                    let mut x = area.x + column * (w + gaps.inner_v) + gaps.outer_v;
                    let y = area.y + row * (h + gaps.inner_h) + gaps.outer_h;
                    if i >= last_row_start {
                        x += shift;
                    }
                    Xyhw::new(x, y, w - 2 * bw, h - 2 * bw)
                })
                .collect()
        }
    }
}
