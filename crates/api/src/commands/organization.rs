use baitulmal_core::navigation::Route;
use baitulmal_core::organization::DomainKind;
use baitulmal_domain::{format_currency, CoordinatorChanges, OrganizationInfo, Result};

use super::{authorize, render, OutputFormat};
use crate::cli::OrganizationCommand;
use crate::context::AppContext;
use crate::utils::command_helpers::execute_command;

pub async fn run(
    ctx: &AppContext,
    command: OrganizationCommand,
    format: OutputFormat,
) -> Result<String> {
    match command {
        OrganizationCommand::Info => {
            authorize(ctx, Route::OrganizationInfo)?;
            let info =
                execute_command("organization::info", || async { ctx.organization.info().await })
                    .await?;
            let fallback = ctx.settings.load()?.currency;
            render(format, &info, |info| describe(info, fallback))
        }
        OrganizationCommand::Coordinators { kind, id, add, remove } => {
            let kind = DomainKind::from(kind);
            let route = match kind {
                DomainKind::Sector => Route::SectorManagement,
                DomainKind::Project => Route::ProjectManagement,
            };
            authorize(ctx, route)?;

            let changes = CoordinatorChanges { added: add, removed: remove };
            let user_ids = execute_command("organization::coordinators", || async {
                let current = match kind {
                    DomainKind::Sector => ctx.sectors.get(&id).await?.current_coordinators,
                    DomainKind::Project => ctx.projects.get(&id).await?.current_coordinators,
                };
                ctx.organization.assign_coordinators(kind, &id, &current, &changes).await
            })
            .await?;
            render(format, &user_ids, |ids| {
                if ids.is_empty() {
                    "No coordinators assigned".to_string()
                } else {
                    format!("Coordinators: {}", ids.join(", "))
                }
            })
        }
    }
}

fn describe(info: &OrganizationInfo, fallback: baitulmal_domain::CurrencyCode) -> String {
    let code = info.currency_code.unwrap_or(fallback);
    let mut out = info.name.clone();
    if let Some(budget) = info.budget_name.as_deref() {
        out.push_str(&format!("\nBudget: {budget}"));
    }
    for (label, amount) in [
        ("Assigned", info.budget_assigned_amount),
        ("Reserved", info.budget_reserved_amount),
        ("Pending", info.budget_pending_amount),
        ("Spent", info.budget_spent_amount),
        ("Unassigned", info.budget_unassigned_amount),
    ] {
        out.push_str(&format!("\n{label}: {}", format_currency(amount, code)));
    }
    out
}

#[cfg(test)]
mod tests {
    use baitulmal_domain::CurrencyCode;

    use super::*;

    #[test]
    fn budget_uses_the_organization_currency_first() {
        let info = OrganizationInfo {
            name: "Baitul Mal Sarajevo".into(),
            currency_code: Some(CurrencyCode::Eur),
            budget_spent_amount: 1500.0,
            ..OrganizationInfo::default()
        };
        let text = describe(&info, CurrencyCode::Usd);
        assert!(text.starts_with("Baitul Mal Sarajevo"));
        assert!(text.contains("Spent: 1.500,00\u{a0}€"));
    }
}
