use baitulmal_core::navigation::Route;
use baitulmal_core::table::configs::transactions_table;
use baitulmal_core::transactions::{
    DonorSearch, DraftSeed, SubmitOutcome, TransactionWizard, WizardStep,
};
use baitulmal_domain::{BaitulMalError, Currency, CurrencyCode, Result, CURRENCIES};
use tracing::debug;

use super::{authorize, prepare_table, render_table, OutputFormat};
use crate::cli::{TransactionArgs, TransactionsCommand};
use crate::context::AppContext;
use crate::utils::command_helpers::execute_command;

pub async fn run(
    ctx: &AppContext,
    command: TransactionsCommand,
    format: OutputFormat,
) -> Result<String> {
    let viewer = authorize(ctx, Route::TransactionManagement)?;

    match command {
        TransactionsCommand::List { list } => {
            let table = prepare_table(transactions_table(viewer), &list)?;
            let page = execute_command("transactions::list", || async {
                ctx.transactions.list(table.params()).await
            })
            .await?;
            render_table(format, &table.render(&page))
        }
        TransactionsCommand::Create(args) => {
            execute_command("transactions::create", || create(ctx, args)).await
        }
    }
}

fn currency_for(code: CurrencyCode) -> Currency {
    CURRENCIES.into_iter().find(|c| c.code == code).unwrap_or_else(Currency::default_choice)
}

fn seed_from(args: &TransactionArgs, currency: Currency) -> DraftSeed {
    DraftSeed {
        amount: args.amount,
        promised_amount: args.promised_amount,
        project_id: args.project.clone(),
        currency_name: Some(currency.name.to_string()),
        currency_code: Some(currency.code.to_string()),
        due_date: args.due_date,
        donor_name: args.donor_name.clone(),
        donor_last_name: args.donor_last_name.clone(),
        donor_phone_number: args.donor_phone.clone(),
        donor_email: args.donor_email.clone(),
        donor_description: args.donor_description.clone(),
        transaction_creators_note: args.note.clone(),
    }
}

fn rejected(wizard: &TransactionWizard) -> BaitulMalError {
    BaitulMalError::Validation(wizard.errors().to_string())
}

/// Walk the wizard through every step and submit the draft
async fn create(ctx: &AppContext, args: TransactionArgs) -> Result<String> {
    let code = match args.currency {
        Some(code) => code,
        None => ctx.settings.load()?.currency,
    };
    let mut wizard = TransactionWizard::new(seed_from(&args, currency_for(code)));
    wizard.open();

    if let Some(donor_id) = args.donor_id.clone() {
        wizard.edit(|draft| draft.donor_id = Some(donor_id));
    } else if let Some(email) = args.donor_email.as_deref() {
        ctx.transactions.search_donors(&mut wizard, DonorSearch::Email).await?;
        let known = wizard
            .matches(DonorSearch::Email)
            .iter()
            .find(|donor| donor.email.eq_ignore_ascii_case(email))
            .cloned();
        if let Some(donor) = known {
            debug!(donor = donor.id(), "using existing donor");
            wizard.select_donor(donor);
        }
    }

    while wizard.step() != WizardStep::Notes {
        if !wizard.next() {
            return Err(rejected(&wizard));
        }
    }

    match ctx.transactions.submit(&mut wizard).await {
        SubmitOutcome::Created => {
            let amount = format_amount(&args, code);
            Ok(format!("Transaction of {amount} recorded"))
        }
        SubmitOutcome::Invalid | SubmitOutcome::Rejected => Err(rejected(&wizard)),
    }
}

fn format_amount(args: &TransactionArgs, code: CurrencyCode) -> String {
    let amount = args.amount.filter(|v| *v > 0.0).or(args.promised_amount).unwrap_or_default();
    baitulmal_domain::format_currency(amount, code)
}
