//! Command-line interface definition

use std::path::PathBuf;

use baitulmal_core::organization::DomainKind;
use baitulmal_domain::{CurrencyCode, UserRole};
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "baitulmal")]
#[command(version)]
#[command(about = "Baitul Mal fund-management admin client", long_about = None)]
pub struct Cli {
    /// Configuration file (JSON or TOML); the standard locations are probed
    /// when omitted
    #[arg(short, long, global = true, env = "BAITULMAL_CONFIG")]
    pub config: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Sign in and store the session
    Login {
        #[arg(long)]
        email: String,
        #[arg(long, env = "BAITULMAL_PASSWORD", hide_env_values = true)]
        password: String,
    },
    /// Forget the stored session
    Logout,
    /// Show the signed-in user as the backend sees it
    Me,
    /// Screens available to the signed-in user
    Nav,
    /// Organization profile and coordinators
    #[command(subcommand)]
    Organization(OrganizationCommand),
    /// Staff accounts (admins only)
    #[command(subcommand)]
    Users(UsersCommand),
    #[command(subcommand)]
    Sectors(SectorsCommand),
    #[command(subcommand)]
    Projects(ProjectsCommand),
    #[command(subcommand)]
    Donors(DonorsCommand),
    #[command(subcommand)]
    Transactions(TransactionsCommand),
    /// Local preferences
    #[command(subcommand)]
    Settings(SettingsCommand),
}

/// Paging, sorting and filtering shared by every list
#[derive(Args, Debug, Clone, Default)]
pub struct ListArgs {
    /// 1-based page number
    #[arg(long, default_value_t = 1)]
    pub page: u32,
    #[arg(long)]
    pub page_size: Option<u32>,
    #[arg(long)]
    pub search: Option<String>,
    /// Column id to sort by
    #[arg(long)]
    pub sort: Option<String>,
    /// Include disabled rows (admins only)
    #[arg(long)]
    pub include_deleted: bool,
    /// Column id to leave out; repeatable
    #[arg(long = "hide")]
    pub hidden: Vec<String>,
}

#[derive(Subcommand, Debug)]
pub enum OrganizationCommand {
    /// Organization profile and budget
    Info,
    /// Change the coordinators of a sector or project
    Coordinators {
        #[arg(value_enum)]
        kind: DomainArg,
        id: String,
        /// User id to add; repeatable
        #[arg(long)]
        add: Vec<String>,
        /// User id to remove; repeatable
        #[arg(long)]
        remove: Vec<String>,
    },
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DomainArg {
    Sector,
    Project,
}

impl From<DomainArg> for DomainKind {
    fn from(arg: DomainArg) -> Self {
        match arg {
            DomainArg::Sector => Self::Sector,
            DomainArg::Project => Self::Project,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum UsersCommand {
    List {
        #[command(flatten)]
        list: ListArgs,
        /// Only users with this role
        #[arg(long)]
        role: Option<UserRole>,
    },
    Show {
        id: String,
    },
    Create {
        #[arg(long)]
        name: String,
        #[arg(long)]
        last_name: String,
        #[arg(long, default_value = "")]
        phone: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        role: Option<UserRole>,
        #[arg(long, env = "BAITULMAL_NEW_USER_PASSWORD", hide_env_values = true)]
        password: String,
    },
    Edit {
        id: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        last_name: Option<String>,
        #[arg(long)]
        phone: Option<String>,
        #[arg(long)]
        role: Option<UserRole>,
    },
    Enable {
        id: String,
    },
    Disable {
        id: String,
    },
}

#[derive(Subcommand, Debug)]
pub enum SectorsCommand {
    List {
        #[command(flatten)]
        list: ListArgs,
    },
    Show {
        id: String,
    },
    Create {
        #[arg(long)]
        name: String,
        #[arg(long, default_value = "")]
        description: String,
        /// Coordinator user id; repeatable
        #[arg(long = "coordinator")]
        coordinators: Vec<String>,
    },
}

#[derive(Subcommand, Debug)]
pub enum ProjectsCommand {
    List {
        #[command(flatten)]
        list: ListArgs,
    },
    Show {
        id: String,
    },
    Create {
        #[arg(long)]
        sector: String,
        #[arg(long)]
        name: String,
        #[arg(long, default_value = "")]
        description: String,
        /// Coordinator user id; repeatable
        #[arg(long = "coordinator")]
        coordinators: Vec<String>,
    },
    Edit {
        id: String,
        #[arg(long)]
        sector: String,
        #[arg(long)]
        name: String,
        #[arg(long, default_value = "")]
        description: String,
    },
}

#[derive(Subcommand, Debug)]
pub enum DonorsCommand {
    List {
        #[command(flatten)]
        list: ListArgs,
    },
}

#[derive(Subcommand, Debug)]
pub enum TransactionsCommand {
    List {
        #[command(flatten)]
        list: ListArgs,
    },
    /// Record a donation or pledge
    Create(TransactionArgs),
}

#[derive(Args, Debug, Clone, Default)]
pub struct TransactionArgs {
    #[arg(long)]
    pub amount: Option<f64>,
    #[arg(long)]
    pub promised_amount: Option<f64>,
    #[arg(long)]
    pub project: Option<String>,
    /// Defaults to the currency preference
    #[arg(long)]
    pub currency: Option<CurrencyCode>,
    /// Pledge due date (YYYY-MM-DD)
    #[arg(long)]
    pub due_date: Option<NaiveDate>,
    /// Known donor; otherwise matched by email or created from the details
    #[arg(long)]
    pub donor_id: Option<String>,
    #[arg(long)]
    pub donor_name: Option<String>,
    #[arg(long)]
    pub donor_last_name: Option<String>,
    #[arg(long)]
    pub donor_email: Option<String>,
    #[arg(long)]
    pub donor_phone: Option<String>,
    #[arg(long)]
    pub donor_description: Option<String>,
    #[arg(long)]
    pub note: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum SettingsCommand {
    Show,
    /// Set `currency`, `language` or `theme`
    Set { key: String, value: String },
}
