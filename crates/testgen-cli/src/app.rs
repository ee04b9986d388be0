//! Main generation flow: collect a story, request a completion, render and
//! save the result

use crate::args::Cli;
use crate::console::{CliConsole, RequestSpinner};
use dialoguer::{theme::ColorfulTheme, Input, Select};
use std::path::PathBuf;
use testgen_core::artifact::write_artifact;
use testgen_core::config::Config;
use testgen_core::error::{TestGenError, TestGenResult};
use testgen_core::llm::{CompletionClient, FallbackRequester};
use testgen_core::prompt::{UserStory, EXAMPLE_STORIES};
use tracing::debug;

/// Run one generation end to end
pub async fn run(cli: Cli) -> TestGenResult<()> {
    let console = CliConsole::new(cli.verbose);

    let config = Config::load(&cli.config_file)?;
    debug!(config_file = %cli.config_file, models = ?config.models, "configuration loaded");
    // Credential absence halts before any story is collected
    config.require_api_key()?;

    let story = match &cli.story {
        Some(text) => UserStory::parse(text)?,
        None => pick_story_interactively(&console)?,
    };

    console.info(&format!("User story: {}", story));

    let client = CompletionClient::new(config.provider.clone(), config.params);
    let requester = FallbackRequester::new(client, config.models.clone())?;

    let spinner = RequestSpinner::start("Generating test case...");
    let result = requester
        .request_with(&story, |model, _error| {
            spinner.warn(&format!("{} failed — trying next model...", model));
        })
        .await;
    spinner.finish();

    let completion = result?;
    console.success(&format!("Response generated using `{}`", completion.model));

    console.print_header("Generated Playwright Test (Java)");
    console.print_code(&completion.content);

    if !cli.no_save {
        let path = cli
            .output
            .clone()
            .unwrap_or_else(|| PathBuf::from(&config.output_file));
        write_artifact(&path, &completion.content)?;
        console.success(&format!("Saved to {}", path.display()));
    }

    Ok(())
}

/// Interactive selector over the example stories, with a free-text option.
/// An empty custom story re-prompts instead of failing.
fn pick_story_interactively(console: &CliConsole) -> TestGenResult<UserStory> {
    let mut items: Vec<&str> = vec!["(Custom)"];
    items.extend(EXAMPLE_STORIES);

    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt("Example user story")
        .items(&items)
        .default(0)
        .interact()
        .map_err(|e| TestGenError::invalid_input(format!("Story selection failed: {}", e)))?;

    if selection > 0 {
        return UserStory::parse(items[selection]);
    }

    loop {
        let text: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt("Enter your own user story")
            .allow_empty(true)
            .interact_text()
            .map_err(|e| TestGenError::invalid_input(format!("Story input failed: {}", e)))?;

        match UserStory::parse(&text) {
            Ok(story) => return Ok(story),
            Err(TestGenError::EmptyPrompt) => {
                console.warn("Please enter or select a user story.");
            }
            Err(other) => return Err(other),
        }
    }
}
