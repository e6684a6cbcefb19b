//! Role-based access lookup
//!
//! The settings screen presents a fixed role-permission matrix: three
//! staff roles against nine permissions. The matrix is a lookup table, it
//! is not enforced on the store operations themselves.

use std::collections::HashMap;
use std::fmt;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// Staff role selectable on the settings screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Agent,
    Support,
    Admin,
}

impl Role {
    /// All roles, in the order the settings screen lists them
    pub const ALL: [Role; 3] = [Role::Agent, Role::Support, Role::Admin];

    /// Returns the title shown next to the role selector
    pub fn title(&self) -> &'static str {
        match self {
            Role::Agent => "Insurance Agent",
            Role::Support => "Support Staff",
            Role::Admin => "Administrator",
        }
    }

    /// Checks whether this role is granted the given permission
    pub fn allows(&self, permission: Permission) -> bool {
        PERMISSION_MATRIX
            .get(self)
            .map_or(false, |granted| granted.contains(&permission))
    }

    /// Returns every permission granted to this role, in matrix order
    pub fn permissions(&self) -> Vec<Permission> {
        Permission::ALL
            .into_iter()
            .filter(|&permission| self.allows(permission))
            .collect()
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

impl std::str::FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "agent" => Ok(Role::Agent),
            "support" => Ok(Role::Support),
            "admin" => Ok(Role::Admin),
            other => Err(format!("unknown role: {other}")),
        }
    }
}

/// An action gated by the role-permission matrix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Permission {
    CreateClient,
    CreatePolicy,
    UpdateClient,
    DeleteClient,
    UpdatePolicy,
    DeletePolicy,
    AccessReports,
    ManageAgents,
    ConfigureSystem,
}

impl Permission {
    /// All permissions, in the order the settings screen lists them
    pub const ALL: [Permission; 9] = [
        Permission::CreateClient,
        Permission::CreatePolicy,
        Permission::UpdateClient,
        Permission::DeleteClient,
        Permission::UpdatePolicy,
        Permission::DeletePolicy,
        Permission::AccessReports,
        Permission::ManageAgents,
        Permission::ConfigureSystem,
    ];

    /// Returns the label shown in the matrix rows
    pub fn label(&self) -> &'static str {
        match self {
            Permission::CreateClient => "Create Client",
            Permission::CreatePolicy => "Create Policy",
            Permission::UpdateClient => "Update Client",
            Permission::DeleteClient => "Delete Client",
            Permission::UpdatePolicy => "Update Policy",
            Permission::DeletePolicy => "Delete Policy",
            Permission::AccessReports => "Access Reports",
            Permission::ManageAgents => "Manage Agents",
            Permission::ConfigureSystem => "Configure System",
        }
    }
}

const AGENT_GRANTS: &[Permission] = &[
    Permission::CreateClient,
    Permission::CreatePolicy,
    Permission::UpdateClient,
    Permission::UpdatePolicy,
    Permission::AccessReports,
];

const SUPPORT_GRANTS: &[Permission] = &[Permission::UpdateClient];

const ADMIN_GRANTS: &[Permission] = &Permission::ALL;

static PERMISSION_MATRIX: Lazy<HashMap<Role, &'static [Permission]>> = Lazy::new(|| {
    HashMap::from([
        (Role::Agent, AGENT_GRANTS),
        (Role::Support, SUPPORT_GRANTS),
        (Role::Admin, ADMIN_GRANTS),
    ])
});
