use serde::{Deserialize, Serialize};

use crate::rbac::Role;

/// Workspace billing plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Plan {
    Starter,
    Core,
    Growth,
    Freelancer,
    Agency,
    Enterprise,
}

/// Whether a site authors libraries or consumes them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SiteType {
    Source,
    Consumer,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Workspace {
    pub id: String,
    pub name: String,
    pub plan: Plan,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub email: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    pub workspace_id: String,
    pub role: Role,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Site {
    pub id: String,
    pub workspace_id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub site_type: SiteType,
    pub created_at: String,
    pub updated_at: String,
}

/// A shared library authored on one source site. `version` bumps whenever
/// the source publishes; installations pin the version they accepted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Library {
    pub id: String,
    pub source_site_id: String,
    pub name: String,
    pub version: u32,
    pub description: String,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LibraryInstallation {
    pub id: String,
    pub library_id: String,
    pub consumer_site_id: String,
    pub installed_version: u32,
    pub installed_at: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Asset {
    pub id: String,
    pub library_id: String,
    pub name: String,
    pub storage_path: String,
    pub folder: String,
    pub file_type: String,
    pub file_size: u64,
    pub created_at: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_site_type_serde_rename() {
        let site = Site {
            id: "site-002".to_string(),
            workspace_id: "ws-001".to_string(),
            name: "Acme Marketing".to_string(),
            site_type: SiteType::Consumer,
            created_at: "2025-11-20T10:00:00Z".to_string(),
            updated_at: "2026-02-18T10:00:00Z".to_string(),
        };
        let yaml = serde_yaml::to_string(&site).unwrap();
        assert!(yaml.contains("type: consumer"));
        let back: Site = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(back, site);
    }

    #[test]
    fn test_user_avatar_omitted_when_absent() {
        let user = User {
            id: "user-001".to_string(),
            email: "sarah@acme.com".to_string(),
            name: "Sarah Chen".to_string(),
            avatar_url: None,
            workspace_id: "ws-001".to_string(),
            role: Role::Owner,
        };
        let yaml = serde_yaml::to_string(&user).unwrap();
        assert!(!yaml.contains("avatar_url"));
        assert!(yaml.contains("role: owner"));
    }
}
