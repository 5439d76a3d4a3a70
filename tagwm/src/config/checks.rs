use super::Config;
use std::collections::HashSet;
use tagwm_core::models::MAX_TAGS;
use tracing_subscriber::EnvFilter;

impl Config {
    /// Run every check. Returns `true` when the configuration is usable as is.
    pub fn check_all(&self, verbose: bool) -> bool {
        let checks = [
            self.check_tags(verbose),
            self.check_layouts(verbose),
            self.check_master_factor(verbose),
            self.check_rules(verbose),
            self.check_log_level(verbose),
        ];
        checks.iter().all(|&ok| ok)
    }

    pub fn check_tags(&self, verbose: bool) -> bool {
        if verbose {
            println!("Checking the tag labels.");
        }
        match self.tags.len() {
            0 => println!("At least one tag must be configured."),
            count if count > MAX_TAGS => {
                println!("{count} tags configured, at most {MAX_TAGS} are supported.");
            }
            _ => return true,
        }
        false
    }

    pub fn check_layouts(&self, verbose: bool) -> bool {
        if verbose {
            println!("Checking the layout list.");
        }
        if self.layouts.is_empty() {
            println!("No layouts configured, tile will be used.");
            return false;
        }
        let mut seen = HashSet::new();
        if let Some(layout) = self.layouts.iter().find(|layout| !seen.insert(**layout)) {
            println!("Layout {layout:?} is listed more than once.");
            return false;
        }
        true
    }

    pub fn check_master_factor(&self, verbose: bool) -> bool {
        if verbose {
            println!("Checking master_factor.");
        }
        if (0.05..=0.95).contains(&self.master_factor) {
            return true;
        }
        println!(
            "master_factor {} is outside of 0.05 to 0.95.",
            self.master_factor
        );
        false
    }

    /// Rule tags are 1-indexed and must name a configured tag.
    pub fn check_rules(&self, verbose: bool) -> bool {
        if verbose {
            println!("Checking {} rules.", self.rules.len());
        }
        let count = self.tags.len();
        let mut ok = true;
        for rule in &self.rules {
            for tag in rule.tags.iter().filter(|&&tag| tag == 0 || tag > count) {
                println!("Rule {rule:?} uses tag {tag}, tags go from 1 to {count}.");
                ok = false;
            }
        }
        ok
    }

    pub fn check_log_level(&self, verbose: bool) -> bool {
        if verbose {
            println!("Trying to parse log_level.");
        }
        match EnvFilter::builder().parse(&self.log_level) {
            Ok(_) if verbose => println!("Log level is ok."),
            Ok(_) => {}
            Err(err) => {
                println!("Log level is invalid: {err}");
                return false;
            }
        }
        true
    }
}
