//! Application routes, role-gated navigation links and the route guard

use std::fmt;

use baitulmal_domain::UserRole;

const ADMIN_ONLY: &[UserRole] = &[UserRole::Admin];

/// A screen of the admin client
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Route {
    Login,
    Dashboard,
    AccountSettings,
    OrganizationInfo,
    UserManagement,
    SectorManagement,
    ProjectManagement,
    DonorManagement,
    TransactionManagement,
    User { id: String },
    Sector { id: String },
    Project { sector_id: String, project_id: String },
    NotFound,
}

impl Route {
    /// Resolve a path; anything unknown is [`Route::NotFound`]
    pub fn parse(path: &str) -> Self {
        let trimmed = path.trim_end_matches('/');
        let segments: Vec<&str> = trimmed.split('/').skip(1).collect();
        match segments.as_slice() {
            [] | [""] => Self::Dashboard,
            ["login"] => Self::Login,
            ["account-settings"] => Self::AccountSettings,
            ["organization-info"] => Self::OrganizationInfo,
            ["admin", "users"] => Self::UserManagement,
            ["admin", "sectors"] => Self::SectorManagement,
            ["admin", "projects"] => Self::ProjectManagement,
            ["admin", "donors"] => Self::DonorManagement,
            ["admin", "transactions"] => Self::TransactionManagement,
            ["users", id] if !id.is_empty() => Self::User { id: (*id).to_string() },
            ["sectors", id] if !id.is_empty() => Self::Sector { id: (*id).to_string() },
            ["sectors", sector_id, "projects", project_id]
                if !sector_id.is_empty() && !project_id.is_empty() =>
            {
                Self::Project {
                    sector_id: (*sector_id).to_string(),
                    project_id: (*project_id).to_string(),
                }
            }
            _ => Self::NotFound,
        }
    }

    pub fn path(&self) -> String {
        match self {
            Self::Login => "/login".into(),
            Self::Dashboard => "/".into(),
            Self::AccountSettings => "/account-settings".into(),
            Self::OrganizationInfo => "/organization-info".into(),
            Self::UserManagement => "/admin/users".into(),
            Self::SectorManagement => "/admin/sectors".into(),
            Self::ProjectManagement => "/admin/projects".into(),
            Self::DonorManagement => "/admin/donors".into(),
            Self::TransactionManagement => "/admin/transactions".into(),
            Self::User { id } => format!("/users/{id}"),
            Self::Sector { id } => format!("/sectors/{id}"),
            Self::Project { sector_id, project_id } => {
                format!("/sectors/{sector_id}/projects/{project_id}")
            }
            Self::NotFound => "*".into(),
        }
    }

    /// Reachable without a session
    pub fn is_public(&self) -> bool {
        matches!(self, Self::Login | Self::NotFound)
    }

    /// Roles allowed in addition to admins; `None` means any signed-in user
    pub fn allowed_roles(&self) -> Option<&'static [UserRole]> {
        match self {
            Self::UserManagement => Some(ADMIN_ONLY),
            _ => None,
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

/// Where a navigation attempt ends up
///
/// Without a session every protected route resolves to the login screen; a
/// signed-in user lacking the role lands on the dashboard. Admins pass every
/// role check.
pub fn resolve(route: Route, role: Option<UserRole>) -> Route {
    if route.is_public() {
        return route;
    }
    let Some(role) = role else {
        return Route::Login;
    };
    match route.allowed_roles() {
        Some(roles) if !role.is_admin() && !roles.contains(&role) => Route::Dashboard,
        _ => route,
    }
}

/// Whether `role` may open `route` as-is
pub fn can_access(route: &Route, role: Option<UserRole>) -> bool {
    resolve(route.clone(), role) == *route
}

/// Sidebar entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavLink {
    pub to: &'static str,
    pub label: &'static str,
    pub allowed_roles: Option<&'static [UserRole]>,
    pub children: Vec<NavLink>,
}

impl NavLink {
    const fn new(to: &'static str, label: &'static str) -> Self {
        Self { to, label, allowed_roles: None, children: Vec::new() }
    }

    const fn admin(to: &'static str, label: &'static str) -> Self {
        Self { to, label, allowed_roles: Some(ADMIN_ONLY), children: Vec::new() }
    }

    pub fn is_allowed(&self, role: Option<UserRole>) -> bool {
        match self.allowed_roles {
            None => true,
            Some(roles) => role.is_some_and(|role| roles.contains(&role)),
        }
    }
}

/// Main sidebar
pub fn navigation_links() -> Vec<NavLink> {
    vec![
        NavLink::new("/", "Dashboard"),
        NavLink::new("/account-settings", "Profile"),
        NavLink::new("/organization-info", "Organization Info"),
        NavLink {
            children: vec![
                NavLink::admin("/admin/users", "Users"),
                NavLink::admin("/admin/sectors", "Sectors"),
                NavLink::admin("/admin/projects", "Projects"),
                NavLink::admin("/admin/donors", "Donors"),
                NavLink::admin("/admin/transactions", "Transactions"),
            ],
            ..NavLink::admin("/admin", "Admin Management")
        },
    ]
}

/// Mobile bottom bar
pub fn bottom_navigation_links() -> Vec<NavLink> {
    vec![NavLink::new("/", "Dashboard"), NavLink::new("/organization-info", "Organization Info")]
}

/// Links `role` may see, children filtered the same way
pub fn visible_links(links: &[NavLink], role: Option<UserRole>) -> Vec<NavLink> {
    links
        .iter()
        .filter(|link| link.is_allowed(role))
        .map(|link| NavLink { children: visible_links(&link.children, role), ..link.clone() })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_parameterised_paths() {
        assert_eq!(
            Route::parse("/sectors/s-1/projects/p-9"),
            Route::Project { sector_id: "s-1".into(), project_id: "p-9".into() }
        );
        assert_eq!(Route::parse("/users/u-3/"), Route::User { id: "u-3".into() });
        assert_eq!(Route::parse("/"), Route::Dashboard);
        assert_eq!(Route::parse("/admin/unknown"), Route::NotFound);
    }

    #[test]
    fn paths_round_trip() {
        for route in [
            Route::AccountSettings,
            Route::TransactionManagement,
            Route::Sector { id: "abc".into() },
        ] {
            assert_eq!(Route::parse(&route.path()), route);
        }
    }

    #[test]
    fn anonymous_users_go_to_login() {
        assert_eq!(resolve(Route::Dashboard, None), Route::Login);
        assert_eq!(resolve(Route::Login, None), Route::Login);
    }

    #[test]
    fn user_management_is_admin_only() {
        assert_eq!(
            resolve(Route::UserManagement, Some(UserRole::Contributor)),
            Route::Dashboard
        );
        assert!(can_access(&Route::UserManagement, Some(UserRole::Admin)));
        assert!(can_access(&Route::SectorManagement, Some(UserRole::FinanceLead)));
    }

    #[test]
    fn admin_group_hidden_from_non_admins() {
        let links = navigation_links();
        let contributor = visible_links(&links, Some(UserRole::Contributor));
        assert_eq!(contributor.len(), 3);
        assert!(contributor.iter().all(|link| link.to != "/admin"));

        let admin = visible_links(&links, Some(UserRole::Admin));
        let group = admin.iter().find(|link| link.to == "/admin").unwrap();
        assert_eq!(group.children.len(), 5);
    }
}
