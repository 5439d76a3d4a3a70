use super::{Config, RuleConfig};
use tagwm_core::config::{ScratchPad, StepDivisors};
use tagwm_core::layouts::Layout;

impl Default for Config {
    fn default() -> Self {
        let steps = StepDivisors::default();
        let scratchpad = ScratchPad::default();
        let rules = vec![
            RuleConfig {
                class: Some("Gimp".to_owned()),
                floating: true,
                ..RuleConfig::default()
            },
            RuleConfig {
                class: Some("Firefox".to_owned()),
                tags: vec![9],
                ..RuleConfig::default()
            },
        ];

        Self {
            tags: (1..=9).map(|tag| tag.to_string()).collect(),
            border_width: 5,
            snap: 32,
            top_bar: false,
            show_bar: true,
            bar_height: 24,
            gap_inner_h: 10,
            gap_inner_v: 10,
            gap_outer_h: 10,
            gap_outer_v: 10,
            smart_gaps: true,
            float_gap_inner_h: 10,
            float_gap_inner_v: 10,
            float_gap_outer_h: 10,
            float_gap_outer_v: 10,
            master_factor: 0.55,
            master_count: 1,
            resize_hints: false,
            lock_fullscreen: true,
            layouts: vec![Layout::Tile, Layout::Monocle, Layout::Grid, Layout::Floating],
            move_step_v: steps.move_v,
            move_step_h: steps.move_h,
            resize_step_v: steps.resize_v,
            resize_step_h: steps.resize_h,
            scratchpad_name: scratchpad.name,
            scratchpad_command: scratchpad.command,
            write_status: true,
            status_file: None,
            log_level: "info".to_owned(),
            rules,
        }
    }
}
