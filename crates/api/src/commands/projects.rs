use baitulmal_core::forms::{EditProjectForm, ProjectForm};
use baitulmal_core::navigation::Route;
use baitulmal_core::table::configs::projects_table;
use baitulmal_domain::{Project, Result};

use super::{authorize, prepare_table, render, render_table, OutputFormat};
use crate::cli::ProjectsCommand;
use crate::context::AppContext;
use crate::utils::command_helpers::execute_command;

fn describe(project: &Project) -> String {
    let sector = project.assigned_to_sector_name.as_deref().unwrap_or("-");
    let coordinators: Vec<&str> =
        project.current_coordinators.iter().map(|c| c.name.as_str()).collect();
    format!(
        "{} ({})\nSector: {sector}\nStatus: {}\nDescription: {}\nCoordinators: {}",
        project.name,
        project.id(),
        project.outcome_type,
        project.description.as_deref().unwrap_or("No description"),
        coordinators.join(", "),
    )
}

pub async fn run(
    ctx: &AppContext,
    command: ProjectsCommand,
    format: OutputFormat,
) -> Result<String> {
    let viewer = authorize(ctx, Route::ProjectManagement)?;

    match command {
        ProjectsCommand::List { list } => {
            let table = prepare_table(projects_table(viewer), &list)?;
            let page = execute_command("projects::list", || async {
                ctx.projects.list(table.params()).await
            })
            .await?;
            render_table(format, &table.render(&page))
        }
        ProjectsCommand::Show { id } => {
            let project =
                execute_command("projects::show", || async { ctx.projects.get(&id).await })
                    .await?;
            render(format, &project, describe)
        }
        ProjectsCommand::Create { sector, name, description, coordinators } => {
            let form = ProjectForm {
                name: name.clone(),
                description,
                sector_id: sector.clone(),
                assigned_coordinator_ids: coordinators,
            };
            execute_command("projects::create", || async { ctx.projects.create(form).await })
                .await?;
            Ok(format!("Created project {name} in sector {sector}"))
        }
        ProjectsCommand::Edit { id, sector, name, description } => {
            let form = EditProjectForm { name, description };
            let edited = execute_command("projects::edit", || async {
                ctx.projects.edit(&sector, &id, form).await
            })
            .await?;
            render(format, &edited, |p| format!("Updated project {}", p.name))
        }
    }
}
