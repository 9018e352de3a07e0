//! `sandy config`: Print the default configuration.

use sandy_config::AppConfig;

pub fn run() {
    println!(
        "# Sandy configuration ({})",
        AppConfig::config_dir().join("config.toml").display()
    );
    println!();
    print!("{}", AppConfig::default_toml());
}
