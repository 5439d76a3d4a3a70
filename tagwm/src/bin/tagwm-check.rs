use anyhow::{bail, Result};
use clap::{arg, command};
use std::path::PathBuf;
use xdg::BaseDirectories;

fn main() -> Result<()> {
    let matches = command!("tagwm Check")
        .about("Checks syntax of the configuration file")
        .help_template(tagwm::utils::get_help_template())
        .args(&[
            arg!(-v --verbose "Outputs received configuration file."),
            arg!([INPUT] "Sets the input file to use. Uses the default location otherwise."),
        ])
        .get_matches();

    let verbose = matches.get_flag("verbose");
    println!(
        "\x1b[0;94m::\x1b[0m tagwm version: {}",
        env!("CARGO_PKG_VERSION")
    );

    let config_file = match matches.get_one::<String>("INPUT") {
        Some(path) => PathBuf::from(path),
        None => default_path()?,
    };
    if verbose {
        dbg!(&config_file);
    }

    println!("\x1b[0;94m::\x1b[0m Loading configuration . . .");
    let config = match tagwm::load_path(&config_file) {
        Ok(config) => {
            println!("\x1b[0;92m    -> Configuration loaded OK \x1b[0m");
            config
        }
        Err(err) => bail!("Configuration failed. Reason: {err:?}"),
    };
    if verbose {
        dbg!(&config);
    }

    println!("\x1b[0;94m::\x1b[0m Checking configuration . . .");
    if !config.check_all(verbose) {
        bail!("Configuration has errors");
    }
    println!("\x1b[0;92m    -> Configuration OK \x1b[0m");
    Ok(())
}

fn default_path() -> Result<PathBuf> {
    let base = BaseDirectories::with_prefix("tagwm")?;
    match base.find_config_file("config.toml") {
        Some(path) => Ok(path),
        None => bail!("No config.toml under {}", base.get_config_home().display()),
    }
}
