use baitulmal_core::forms::SectorForm;
use baitulmal_core::navigation::Route;
use baitulmal_core::table::configs::sectors_table;
use baitulmal_domain::{Result, Sector};

use super::{authorize, prepare_table, render, render_table, OutputFormat};
use crate::cli::SectorsCommand;
use crate::context::AppContext;
use crate::utils::command_helpers::execute_command;

fn describe(sector: &Sector) -> String {
    let mut out = format!("{} ({})", sector.name, sector.id());
    if let Some(description) = sector.description.as_deref().filter(|d| !d.is_empty()) {
        out.push_str(&format!("\n{description}"));
    }
    let coordinators: Vec<&str> =
        sector.current_coordinators.iter().map(|c| c.name.as_str()).collect();
    out.push_str(&format!("\nCoordinators: {}", coordinators.join(", ")));
    out.push_str(&format!("\nProjects: {}", sector.projects.len()));
    for project in &sector.projects {
        out.push_str(&format!("\n  {} ({})", project.name, project.entity.id));
    }
    out
}

pub async fn run(
    ctx: &AppContext,
    command: SectorsCommand,
    format: OutputFormat,
) -> Result<String> {
    match command {
        SectorsCommand::List { list } => {
            let viewer = authorize(ctx, Route::SectorManagement)?;
            let table = prepare_table(sectors_table(viewer), &list)?;
            let page = execute_command("sectors::list", || async {
                ctx.sectors.list(table.params()).await
            })
            .await?;
            render_table(format, &table.render(&page))
        }
        SectorsCommand::Show { id } => {
            authorize(ctx, Route::Sector { id: id.clone() })?;
            let sector =
                execute_command("sectors::show", || async { ctx.sectors.get(&id).await }).await?;
            render(format, &sector, describe)
        }
        SectorsCommand::Create { name, description, coordinators } => {
            authorize(ctx, Route::SectorManagement)?;
            let form = SectorForm { name, description, assigned_coordinator_ids: coordinators };
            let created =
                execute_command("sectors::create", || async { ctx.sectors.create(form).await })
                    .await?;
            render(format, &created, |s| format!("Created sector {} ({})", s.name, s.id))
        }
    }
}
