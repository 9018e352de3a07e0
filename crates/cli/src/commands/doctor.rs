//! `sandy doctor`: Diagnose configuration and provider health.

use sandy_config::AppConfig;

pub async fn run() -> anyhow::Result<()> {
    println!("🩺 Sandy Doctor — System Diagnostics");
    println!("====================================\n");

    let mut issues = 0;

    let config_path = AppConfig::config_dir().join("config.toml");
    if config_path.exists() {
        println!("  ✅ Config file found");
    } else {
        println!("  ⚠️  No config file, using defaults (see `sandy config`)");
    }

    let config = match AppConfig::load() {
        Ok(config) => {
            println!("  ✅ Config valid");
            config
        }
        Err(e) => {
            println!("  ❌ Config invalid: {e}");
            println!("\n  ⚠️  1 issue found. See above for details.");
            return Ok(());
        }
    };

    println!("     Provider:  {}", config.default_provider);
    println!("     Model:     {}", config.default_model);

    if config.has_api_key() {
        println!("  ✅ API key configured");
    } else {
        println!("  ⚠️  No API key configured. Set SANDY_API_KEY or add api_key to config.toml");
        issues += 1;
    }

    let gateway = super::build_gateway(&config);
    if gateway.health_check().await {
        println!("  ✅ Provider `{}` reachable", gateway.provider_name());
    } else {
        println!("  ❌ Provider `{}` unreachable", gateway.provider_name());
        issues += 1;
    }

    println!();
    if issues == 0 {
        println!("  🎉 All checks passed!");
    } else {
        println!("  ⚠️  {issues} issue(s) found. See above for details.");
    }

    Ok(())
}
