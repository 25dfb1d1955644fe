//! Column sets and starting parameters of the admin tables

use baitulmal_domain::{
    format_currency, Coordinator, CurrencyCode, Donor, Project, QueryParams, Sector, SortOrder,
    Transaction, TransactionStatus, User, UserRole,
};

use super::column::{ColumnDef, RowAction};
use super::data_table::DataTable;

const PREVIEW_CHARS: usize = 20;

/// First 20 characters followed by an ellipsis, or `fallback` when empty
fn preview(text: &str, fallback: &str) -> String {
    if text.is_empty() {
        return fallback.to_string();
    }
    let head: String = text.chars().take(PREVIEW_CHARS).collect();
    format!("{head}...")
}

/// Up to three coordinator names, then "+N" for the rest
fn coordinator_summary(coordinators: &[Coordinator]) -> String {
    let mut summary =
        coordinators.iter().take(3).map(|c| c.name.as_str()).collect::<Vec<_>>().join(", ");
    if coordinators.len() > 3 {
        summary.push_str(&format!(" +{}", coordinators.len() - 3));
    }
    summary
}

fn base_params(sort_field: Option<&str>, order: SortOrder) -> QueryParams {
    QueryParams::new().with_sort_field(sort_field.map(str::to_string)).with_sort_order(order)
}

/// Staff table; optionally narrowed to one role
pub fn users_table(role: Option<UserRole>, viewer: Option<UserRole>) -> DataTable<User> {
    let mut params = base_params(Some("name"), SortOrder::Asc);
    if let Some(role) = role {
        params = params.with_filter("Role", role.as_str());
    }
    let columns = vec![
        ColumnDef::new("name", "Name", |u: &User| u.name.clone()).pinned(),
        ColumnDef::new("email", "Email", |u: &User| u.email.clone()),
        ColumnDef::new("role", "Role", |u: &User| {
            u.role.map(|role| role.to_string()).unwrap_or_default()
        }),
        ColumnDef::new("isDeleted", "Status", |u: &User| {
            let label = if u.entity.is_deleted { "Disabled" } else { "Active" };
            label.to_string()
        }),
    ];
    DataTable::new(columns, params)
        .with_actions(vec![
            RowAction::new("EDIT_USER"),
            RowAction::new("ENABLE_USER").when(|u: &User| u.entity.is_deleted),
            RowAction::new("DELETE_USER").when(|u: &User| !u.entity.is_deleted),
        ])
        .viewed_by(viewer)
}

pub fn sectors_table(viewer: Option<UserRole>) -> DataTable<Sector> {
    let columns = vec![
        ColumnDef::new("name", "Name", |s: &Sector| s.name.clone()).pinned(),
        ColumnDef::new("currentCoordinators", "Coordinators", |s: &Sector| {
            coordinator_summary(&s.current_coordinators)
        }),
    ];
    DataTable::new(columns, base_params(None, SortOrder::Asc))
        .with_actions(vec![RowAction::new("ADD_COORDINATORS"), RowAction::new("CREATE_PROJECT")])
        .viewed_by(viewer)
}

pub fn projects_table(viewer: Option<UserRole>) -> DataTable<Project> {
    let columns = vec![
        ColumnDef::new("name", "Name", |p: &Project| p.name.clone()).pinned(),
        ColumnDef::new("description", "Description", |p: &Project| {
            preview(p.description.as_deref().unwrap_or_default(), "No description")
        }),
        ColumnDef::new("currentCoordinators", "Coordinators", |p: &Project| {
            coordinator_summary(&p.current_coordinators)
        }),
        ColumnDef::new("outcomeType", "Status", |p: &Project| p.outcome_type.to_string()),
    ];
    DataTable::new(columns, base_params(None, SortOrder::Asc))
        .sortable(&["name"])
        .with_actions(vec![RowAction::new("EDIT_PROJECT"), RowAction::new("ADD_COORDINATORS")])
        .viewed_by(viewer)
}

pub fn donors_table(viewer: Option<UserRole>) -> DataTable<Donor> {
    let columns = vec![
        ColumnDef::new("name", "Name", |d: &Donor| preview(&d.name, "N/A")).pinned(),
        ColumnDef::new("lastName", "Last Name", |d: &Donor| preview(&d.last_name, "N/A")),
        ColumnDef::new("email", "Email", |d: &Donor| preview(&d.email, "N/A")),
        ColumnDef::new("phoneNumber", "Phone Number", |d: &Donor| {
            preview(&d.phone_number, "N/A")
        }),
        ColumnDef::new("description", "Description", |d: &Donor| {
            preview(&d.description, "N/A")
        }),
    ];
    DataTable::new(columns, base_params(None, SortOrder::Asc))
        .sortable(&["name", "email"])
        .viewed_by(viewer)
}

fn short_id(id: &str) -> String {
    let head: String = id.chars().take(8).collect();
    format!("{head}...")
}

/// Newest first
pub fn transactions_table(viewer: Option<UserRole>) -> DataTable<Transaction> {
    let columns = vec![
        ColumnDef::new("invoiceId", "Invoice Number", |t: &Transaction| {
            short_id(t.invoice_id.as_deref().unwrap_or(&t.id))
        })
        .pinned(),
        ColumnDef::new("status", "Status", |t: &Transaction| t.status.label().to_string()),
        ColumnDef::new("receivedAmount", "Amount", |t: &Transaction| {
            let code = t
                .currency_code
                .as_deref()
                .and_then(|code| code.parse::<CurrencyCode>().ok())
                .unwrap_or_default();
            format_currency(t.received_amount, code)
        }),
        ColumnDef::new("donorFullName", "Donor", |t: &Transaction| {
            t.donor_full_name.clone().unwrap_or_else(|| "Anonymous donor".to_string())
        }),
        ColumnDef::new("creatorFullName", "Created By", |t: &Transaction| {
            t.creator_full_name.clone().unwrap_or_else(|| "-".to_string())
        }),
        ColumnDef::new("approverFullName", "Approved By", |t: &Transaction| {
            match (t.status, &t.approver_full_name) {
                (TransactionStatus::Approved, Some(name)) => name.clone(),
                _ => "-".to_string(),
            }
        }),
        ColumnDef::new("createdAt", "Date", |t: &Transaction| {
            t.created_at.map_or_else(|| "-".to_string(), |at| at.format("%b %-d, %Y").to_string())
        }),
    ];
    DataTable::new(columns, base_params(Some("createdAt"), SortOrder::Desc))
        .sortable(&["invoiceId", "receivedAmount", "createdAt"])
        .with_actions(vec![
            RowAction::new("VIEW_DETAILS"),
            RowAction::new("VIEW_INVOICE").when(|t: &Transaction| t.invoice_id.is_some()),
            RowAction::new("APPROVE_TRANSACTION")
                .when(|t: &Transaction| t.status == TransactionStatus::Pending),
            RowAction::new("REJECT_TRANSACTION")
                .when(|t: &Transaction| t.status == TransactionStatus::Pending),
        ])
        .viewed_by(viewer)
}
