use crate::CliError;
use ::tracing::info;
use nebula_core::services::prompt::{PromptService, PromptServiceImpl};
use nebula_core::store::PromptStore;
use nebula_core::types::prompt::Prompt;
use prettytable::{row, Table};

pub async fn handle_list(store: PromptStore) -> Result<(), CliError> {
    let service = PromptServiceImpl::new(store);
    let prompts = service.list()?;

    info!("Found {} prompts in database\n", prompts.len());

    pretty_print_prompts(&prompts);
    Ok(())
}

fn pretty_print_prompts(prompts: &[Prompt]) {
    let mut table = Table::new();

    table.add_row(row![bF=>
        "Id",
        "Title",
        "Category",
        "Technique",
    ]);

    for prompt in prompts {
        table.add_row(row![
            prompt.id,
            prompt.title.as_deref().unwrap_or(""),
            prompt.technique_category.as_deref().unwrap_or(""),
            prompt.primary_technique.as_deref().unwrap_or(""),
        ]);
    }

    table.printstd();
}
