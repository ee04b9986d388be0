//! Utility subcommands: config management and model listing

use crate::args::ConfigAction;
use crate::console::CliConsole;
use testgen_core::config::Config;
use testgen_core::error::TestGenResult;

/// Handle `testgen config <action>`
pub fn handle_config(action: ConfigAction, console: &CliConsole) -> TestGenResult<()> {
    match action {
        ConfigAction::Show { config_file } => {
            let config = Config::load(&config_file)?;
            console.print_header("Configuration");
            println!("Endpoint:    {}", config.provider.completions_url());
            println!(
                "API key:     {}",
                config
                    .provider
                    .masked_api_key()
                    .unwrap_or_else(|| "(not set)".to_string())
            );
            println!("Models:      {}", config.models.join(" -> "));
            println!("Temperature: {}", config.params.temperature);
            println!("Max tokens:  {}", config.params.max_tokens);
            println!("Output file: {}", config.output_file);
            Ok(())
        }
        ConfigAction::Validate { config_file } => {
            let config = Config::load(&config_file)?;
            config.validate()?;
            console.success(&format!("{} is valid", config_file));
            Ok(())
        }
        ConfigAction::Init { config_file, force } => {
            Config::init_file(&config_file, force)?;
            console.success(&format!("Created {}", config_file));
            Ok(())
        }
    }
}

/// Handle `testgen models`
pub fn handle_models(config_file: &str, console: &CliConsole) -> TestGenResult<()> {
    let config = Config::load(config_file)?;
    console.print_header("Model fallback order");
    for (index, model) in config.models.iter().enumerate() {
        println!("{}. {}", index + 1, model);
    }
    Ok(())
}
