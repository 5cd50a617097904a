use anyhow::Result;
use animecal_core::AppConfig;
use owo_colors::OwoColorize;

pub fn run() -> Result<()> {
    let config_path = AppConfig::config_path()?;

    let created = !config_path.exists();
    if created {
        AppConfig::create_default_config(&config_path)?;
    }
    let config = AppConfig::load()?;

    println!("{}", "Paths".bold());
    print!("  Config:        {}", config_path.display());
    if created {
        print!(" {}", "(created)".dimmed());
    }
    println!();

    println!();
    println!("{}", "TMDB credentials".bold());
    println!("  Access token:  {}", status(config.access_token.is_some()));
    println!("  API key:       {}", status(config.api_key.is_some()));

    Ok(())
}

fn status(set: bool) -> String {
    if set {
        "✓ Set".green().to_string()
    } else {
        "✗ Not set".red().to_string()
    }
}
