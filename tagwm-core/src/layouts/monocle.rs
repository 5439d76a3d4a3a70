use super::LayoutContext;
use crate::models::Xyhw;

/// Layout which gives every window the full usable area. Stacking decides which one is seen.
pub fn update(ctx: &LayoutContext) -> Vec<Xyhw> {
    let area = ctx.area;
    ctx.borders
        .iter()
        .map(|bw| Xyhw::new(area.x, area.y, area.w - 2 * bw, area.h - 2 * bw))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Gaps;

    #[test]
    fn gaps_do_not_apply() {
        let ctx = LayoutContext {
            area: Xyhw::new(0, 24, 1920, 1056),
            gaps: Gaps::uniform(10),
            master_count: 1,
            master_factor: 0.55,
            borders: &[5, 0],
        };
        assert_eq!(
            update(&ctx),
            vec![Xyhw::new(0, 24, 1910, 1046), Xyhw::new(0, 24, 1920, 1056)]
        );
    }
}
