//! `sandy recommend`: Personalized recommendations.

use std::path::PathBuf;

pub async fn run(area: Option<String>, profile: Option<PathBuf>) -> anyhow::Result<()> {
    let config = super::load_config()?;
    let orchestrator = super::build_orchestrator(&config);
    let profile = super::load_profile(profile.as_deref(), super::DEFAULT_USER)?;

    eprint!("  Thinking...");
    let set = orchestrator
        .generate_recommendations(&profile, area.as_deref())
        .await;
    eprint!("\r              \r");

    if let Some(error) = &set.error {
        eprintln!("  ⚠️  {error}");
        eprintln!();
    }

    for (i, rec) in set.recommendations.iter().enumerate() {
        println!("  {}. {}  [{}]", i + 1, rec.title, rec.category);
        if !rec.description.is_empty() {
            println!("     {}", rec.description);
        }
        println!("     ⏱  {}", rec.estimated_time_to_complete);
        println!();
    }

    Ok(())
}
