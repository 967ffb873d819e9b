use async_trait::async_trait;
use console::style;
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Input, Select};
use shipfinder_flow::Prompter;
use shipfinder_protocol::{FieldPrompt, SelectionItem};

/// Terminal-hosted conversation: questions render as dialoguer selects, the
/// answer fed back to the flow is the picked option's machine value.
pub struct ConsolePrompter {
    theme: ColorfulTheme,
}

impl ConsolePrompter {
    #[must_use]
    pub fn new() -> Self {
        Self {
            theme: ColorfulTheme::default(),
        }
    }
}

impl Default for ConsolePrompter {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Prompter for ConsolePrompter {
    async fn ask_choice(&mut self, prompt: &FieldPrompt) -> anyhow::Result<String> {
        let labels: Vec<&str> = prompt.options.iter().map(|o| o.label.as_str()).collect();
        let picked = Select::with_theme(&self.theme)
            .with_prompt(&prompt.text)
            .items(&labels)
            .default(0)
            .interact()?;
        Ok(prompt.options[picked].value.clone())
    }

    async fn ask_open(&mut self, prompt: &str) -> anyhow::Result<String> {
        let answer: String = Input::with_theme(&self.theme)
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()?;
        Ok(answer)
    }

    async fn present_selection(&mut self, items: &[SelectionItem]) -> anyhow::Result<String> {
        let labels: Vec<String> = items.iter().map(|i| i.summary.clone()).collect();
        let picked = Select::with_theme(&self.theme)
            .with_prompt("Spaceships matching your criteria")
            .items(&labels)
            .default(0)
            .interact()?;
        Ok(items[picked].id.clone())
    }

    async fn notify(&mut self, text: &str) -> anyhow::Result<()> {
        println!("{}", style(text).cyan());
        Ok(())
    }
}
