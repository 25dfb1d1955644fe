use baitulmal_core::forms::{EditProfileForm, ProfileForm};
use baitulmal_core::navigation::Route;
use baitulmal_core::table::configs::users_table;
use baitulmal_domain::{Result, User, UserStatus};

use super::{authorize, prepare_table, render, render_table, OutputFormat};
use crate::cli::UsersCommand;
use crate::context::AppContext;
use crate::utils::command_helpers::execute_command;

fn describe(user: &User) -> String {
    let role = user.role.map(|role| role.to_string()).unwrap_or_else(|| "-".to_string());
    let status = if user.entity.is_deleted { "Disabled" } else { "Active" };
    format!(
        "{} ({})\nEmail: {}\nPhone: {}\nRole: {role}\nStatus: {status}",
        user.full_name(),
        user.id(),
        user.email,
        user.phone_number.as_deref().unwrap_or("-"),
    )
}

pub async fn run(ctx: &AppContext, command: UsersCommand, format: OutputFormat) -> Result<String> {
    let viewer = authorize(ctx, Route::UserManagement)?;

    match command {
        UsersCommand::List { list, role } => {
            let table = prepare_table(users_table(role, viewer), &list)?;
            let page = execute_command("users::list", || async {
                ctx.users.list(table.params()).await
            })
            .await?;
            render_table(format, &table.render(&page))
        }
        UsersCommand::Show { id } => {
            let user =
                execute_command("users::show", || async { ctx.users.get(&id).await }).await?;
            render(format, &user, describe)
        }
        UsersCommand::Create { name, last_name, phone, email, role, password } => {
            let form = ProfileForm {
                name,
                last_name,
                phone_number: phone,
                email,
                role,
                confirm_password: password.clone(),
                password,
            };
            let user =
                execute_command("users::create", || async { ctx.users.create(form).await })
                    .await?;
            render(format, &user, |u| format!("Created {}", describe(u)))
        }
        UsersCommand::Edit { id, name, last_name, phone, role } => {
            let form = EditProfileForm { name, last_name, phone_number: phone, role };
            let user =
                execute_command("users::edit", || async { ctx.users.edit(&id, form).await })
                    .await?;
            render(format, &user, |u| format!("Updated {}", describe(u)))
        }
        UsersCommand::Enable { id } => set_status(ctx, &id, UserStatus::Enabled).await,
        UsersCommand::Disable { id } => set_status(ctx, &id, UserStatus::Disabled).await,
    }
}

async fn set_status(ctx: &AppContext, id: &str, status: UserStatus) -> Result<String> {
    execute_command("users::update_status", || async {
        ctx.users.update_status(id, status).await
    })
    .await?;
    Ok(format!("User {id} is now {status}"))
}
