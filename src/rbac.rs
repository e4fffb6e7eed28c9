use serde::{Deserialize, Serialize};

/// Workspace membership role, least to most restricted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Owner,
    Admin,
    SiteManager,
    Designer,
    Marketer,
    ContentEditor,
}

impl Role {
    pub const ALL: [Role; 6] = [
        Role::Owner,
        Role::Admin,
        Role::SiteManager,
        Role::Designer,
        Role::Marketer,
        Role::ContentEditor,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Role::Owner => "Owner",
            Role::Admin => "Admin",
            Role::SiteManager => "Site Manager",
            Role::Designer => "Designer",
            Role::Marketer => "Marketer",
            Role::ContentEditor => "Content Editor",
        }
    }
}

/// Everything a role can be asked to do against shared design assets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    CreateLibrary,
    InstallLibrary,
    AcceptUpdates,
    UseSharedElements,
    UnlinkDetach,
    ManageSourceAssets,
    ManageWorkspace,
    ManageSites,
}

impl Action {
    pub const ALL: [Action; 8] = [
        Action::CreateLibrary,
        Action::InstallLibrary,
        Action::AcceptUpdates,
        Action::UseSharedElements,
        Action::UnlinkDetach,
        Action::ManageSourceAssets,
        Action::ManageWorkspace,
        Action::ManageSites,
    ];
}

/// Whether a role may perform an action. Pure and total; callers gate UI
/// affordances and store mutations on this alone.
pub fn can(role: Role, action: Action) -> bool {
    use Role::*;
    match action {
        Action::CreateLibrary => matches!(role, Owner | Admin | Designer),
        Action::InstallLibrary => matches!(role, Owner | Admin | SiteManager | Designer),
        Action::AcceptUpdates => matches!(role, Owner | Admin | SiteManager | Designer),
        Action::UseSharedElements => {
            matches!(role, Owner | Admin | SiteManager | Designer | Marketer)
        }
        Action::UnlinkDetach => matches!(role, Owner | Admin | SiteManager | Designer),
        Action::ManageSourceAssets => matches!(role, Owner | Admin | Designer),
        Action::ManageWorkspace => matches!(role, Owner | Admin),
        Action::ManageSites => matches!(role, Owner | Admin | SiteManager | Designer),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_owner_and_admin_can_do_everything() {
        for action in Action::ALL {
            assert!(can(Role::Owner, action));
            assert!(can(Role::Admin, action));
        }
    }

    #[test]
    fn test_content_editor_can_do_nothing() {
        for action in Action::ALL {
            assert!(!can(Role::ContentEditor, action));
        }
    }

    #[test]
    fn test_marketer_uses_but_never_manages() {
        assert!(can(Role::Marketer, Action::UseSharedElements));
        assert!(!can(Role::Marketer, Action::UnlinkDetach));
        assert!(!can(Role::Marketer, Action::InstallLibrary));
        assert!(!can(Role::Marketer, Action::ManageSites));
    }

    #[test]
    fn test_site_manager_installs_but_never_authors() {
        assert!(can(Role::SiteManager, Action::InstallLibrary));
        assert!(can(Role::SiteManager, Action::AcceptUpdates));
        assert!(!can(Role::SiteManager, Action::CreateLibrary));
        assert!(!can(Role::SiteManager, Action::ManageSourceAssets));
        assert!(!can(Role::SiteManager, Action::ManageWorkspace));
    }

    #[test]
    fn test_designer_authors_but_never_administers() {
        assert!(can(Role::Designer, Action::CreateLibrary));
        assert!(can(Role::Designer, Action::ManageSourceAssets));
        assert!(!can(Role::Designer, Action::ManageWorkspace));
    }

    #[test]
    fn test_role_serde_and_labels() {
        let yaml = serde_yaml::to_string(&Role::SiteManager).unwrap();
        assert_eq!(yaml.trim(), "site_manager");
        let role: Role = serde_yaml::from_str("content_editor").unwrap();
        assert_eq!(role, Role::ContentEditor);
        assert_eq!(Role::SiteManager.label(), "Site Manager");
    }
}
