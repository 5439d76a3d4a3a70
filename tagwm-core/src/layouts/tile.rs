use super::LayoutContext;
use crate::models::Xyhw;

/// Master column on the left holding up to `master_count` clients, stack column on the right.
///
/// Each column splits its height evenly. The remainder pixels go one each to the first clients
/// of the column, so the heights plus the inner gaps fill the column exactly.
pub fn update(ctx: &LayoutContext) -> Vec<Xyhw> {
    let n = ctx.borders.len() as i32;
    let master_count = ctx.master_count.max(0);
    let gaps = ctx.gaps;
    let area = ctx.area;

    let masters = n.min(master_count);
    let stacked = n - masters;

    let mx = area.x + gaps.outer_v;
    let mut sx = mx;
    let mut my = area.y + gaps.outer_h;
    let mut sy = my;
    let mh = area.h - 2 * gaps.outer_h - gaps.inner_h * (masters - 1).max(0);
    let sh = area.h - 2 * gaps.outer_h - gaps.inner_h * (stacked - 1).max(0);
    let mut mw = area.w - 2 * gaps.outer_v;
    let mut sw = mw;

    if master_count > 0 && n > master_count {
        sw = ((mw - gaps.inner_v) as f32 * (1.0 - ctx.master_factor)) as i32;
        mw = mw - gaps.inner_v - sw;
        sx = mx + mw + gaps.inner_v;
    }

    let (master_rest, stack_rest) = (remainder(mh, masters), remainder(sh, stacked));

    let mut placed = Vec::with_capacity(ctx.borders.len());
    for (i, bw) in ctx.borders.iter().enumerate() {
        let i = i as i32;
        if i < master_count {
            let h = mh / masters + i32::from(i < master_rest);
            placed.push(Xyhw::new(mx, my, mw - 2 * bw, h - 2 * bw));
            my += h + gaps.inner_h;
        } else {
            let j = i - masters;
            let h = sh / stacked + i32::from(j < stack_rest);
            placed.push(Xyhw::new(sx, sy, sw - 2 * bw, h - 2 * bw));
            sy += h + gaps.inner_h;
        }
    }
    placed
}

fn remainder(total: i32, parts: i32) -> i32 {
    if parts > 0 {
        total % parts
    } else {
        0
    }
}
