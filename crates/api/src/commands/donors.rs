use baitulmal_core::navigation::Route;
use baitulmal_core::table::configs::donors_table;
use baitulmal_domain::Result;

use super::{authorize, prepare_table, render_table, OutputFormat};
use crate::cli::DonorsCommand;
use crate::context::AppContext;
use crate::utils::command_helpers::execute_command;

pub async fn run(ctx: &AppContext, command: DonorsCommand, format: OutputFormat) -> Result<String> {
    let viewer = authorize(ctx, Route::DonorManagement)?;

    match command {
        DonorsCommand::List { list } => {
            let table = prepare_table(donors_table(viewer), &list)?;
            let page = execute_command("donors::list", || async {
                ctx.donors.list(table.params()).await
            })
            .await?;
            render_table(format, &table.render(&page))
        }
    }
}
