//! `sandy intake`: Respond to one intake questionnaire answer.

use std::path::PathBuf;

pub async fn run(
    section: String,
    response: String,
    user: String,
    profile: Option<PathBuf>,
) -> anyhow::Result<()> {
    let config = super::load_config()?;
    let orchestrator = super::build_orchestrator(&config);
    let profile = super::load_profile(profile.as_deref(), &user)?;

    let reply = orchestrator
        .process_intake_response(&user, &response, &section, &profile)
        .await;

    println!("{}", reply.content);
    Ok(())
}
