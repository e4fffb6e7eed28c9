use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::component::DesignComponent;
use crate::error::{HubError, HubResult};
use crate::props::PropValue;
use crate::resolver::Overrides;
use crate::tokens::{Token, TokenSet};
use crate::workspace::{Asset, Library, LibraryInstallation, Site, User, Workspace};

// ─── Library store ───────────────────────────────────────────────────────────

/// In-memory store for everything a workspace shares: sites, libraries and
/// their tokens, components, installations and asset records.
///
/// Ids are validated at insert time; lookups are total and return `Option`
/// or empty collections. Nothing here touches the filesystem.
#[derive(Debug, Clone, Default)]
pub struct LibraryStore {
    workspace: Option<Workspace>,
    users: Vec<User>,
    sites: Vec<Site>,
    libraries: Vec<Library>,
    components: Vec<DesignComponent>,
    token_sets: HashMap<String, TokenSet>,
    installations: Vec<LibraryInstallation>,
    assets: Vec<Asset>,
}

impl LibraryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_workspace(&mut self, workspace: Workspace) {
        self.workspace = Some(workspace);
    }

    pub fn workspace(&self) -> Option<&Workspace> {
        self.workspace.as_ref()
    }

    pub fn add_user(&mut self, user: User) -> HubResult<()> {
        if self.users.iter().any(|u| u.id == user.id) {
            return Err(HubError::DuplicateUser { id: user.id });
        }
        self.users.push(user);
        Ok(())
    }

    pub fn add_site(&mut self, site: Site) -> HubResult<()> {
        if self.sites.iter().any(|s| s.id == site.id) {
            return Err(HubError::DuplicateSite { id: site.id });
        }
        self.sites.push(site);
        Ok(())
    }

    pub fn add_library(&mut self, library: Library) -> HubResult<()> {
        if self.libraries.iter().any(|l| l.id == library.id) {
            return Err(HubError::DuplicateLibrary { id: library.id });
        }
        self.token_sets
            .entry(library.id.clone())
            .or_insert_with(TokenSet::new);
        self.libraries.push(library);
        Ok(())
    }

    pub fn add_component(&mut self, component: DesignComponent) -> HubResult<()> {
        if self.library(&component.library_id).is_none() {
            return Err(HubError::UnknownLibrary {
                id: component.library_id,
            });
        }
        if self.components.iter().any(|c| c.id == component.id) {
            return Err(HubError::DuplicateComponent { id: component.id });
        }
        self.components.push(component);
        Ok(())
    }

    pub fn add_token(&mut self, token: Token) -> HubResult<()> {
        let set = self
            .token_sets
            .get_mut(&token.library_id)
            .ok_or_else(|| HubError::UnknownLibrary {
                id: token.library_id.clone(),
            })?;
        set.insert(token)
    }

    pub fn add_asset(&mut self, asset: Asset) -> HubResult<()> {
        if self.library(&asset.library_id).is_none() {
            return Err(HubError::UnknownLibrary {
                id: asset.library_id,
            });
        }
        if self.assets.iter().any(|a| a.id == asset.id) {
            return Err(HubError::DuplicateAsset { id: asset.id });
        }
        self.assets.push(asset);
        Ok(())
    }

    /// Link a library to a consumer site at a pinned version.
    pub fn install(&mut self, installation: LibraryInstallation) -> HubResult<()> {
        if self.library(&installation.library_id).is_none() {
            return Err(HubError::UnknownLibrary {
                id: installation.library_id,
            });
        }
        if self.site(&installation.consumer_site_id).is_none() {
            return Err(HubError::UnknownSite {
                id: installation.consumer_site_id,
            });
        }
        if self.installations.iter().any(|i| i.id == installation.id) {
            return Err(HubError::DuplicateInstallation {
                id: installation.id,
            });
        }
        self.installations.push(installation);
        Ok(())
    }

    pub fn library(&self, id: &str) -> Option<&Library> {
        self.libraries.iter().find(|l| l.id == id)
    }

    pub fn component(&self, id: &str) -> Option<&DesignComponent> {
        self.components.iter().find(|c| c.id == id)
    }

    pub fn site(&self, id: &str) -> Option<&Site> {
        self.sites.iter().find(|s| s.id == id)
    }

    pub fn user(&self, id: &str) -> Option<&User> {
        self.users.iter().find(|u| u.id == id)
    }

    pub fn installation(&self, id: &str) -> Option<&LibraryInstallation> {
        self.installations.iter().find(|i| i.id == id)
    }

    pub fn tokens(&self, library_id: &str) -> Option<&TokenSet> {
        self.token_sets.get(library_id)
    }

    pub fn sites(&self) -> &[Site] {
        &self.sites
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn libraries(&self) -> &[Library] {
        &self.libraries
    }

    pub fn components_by_library(&self, library_id: &str) -> Vec<&DesignComponent> {
        self.components
            .iter()
            .filter(|c| c.library_id == library_id)
            .collect()
    }

    pub fn installations_for_site(&self, site_id: &str) -> Vec<&LibraryInstallation> {
        self.installations
            .iter()
            .filter(|i| i.consumer_site_id == site_id)
            .collect()
    }

    pub fn assets_by_library(&self, library_id: &str) -> Vec<&Asset> {
        self.assets
            .iter()
            .filter(|a| a.library_id == library_id)
            .collect()
    }

    /// Whether the installed library has published a newer version.
    pub fn has_update(&self, installation: &LibraryInstallation) -> bool {
        self.library(&installation.library_id)
            .is_some_and(|lib| lib.version > installation.installed_version)
    }

    /// Bump an installation to the library's current version. Returns false
    /// (and changes nothing) when the installation or library is unknown.
    pub fn accept_updates(&mut self, installation_id: &str) -> bool {
        let Some(version) = self
            .installation(installation_id)
            .and_then(|inst| self.library(&inst.library_id))
            .map(|lib| lib.version)
        else {
            return false;
        };
        if let Some(inst) = self
            .installations
            .iter_mut()
            .find(|i| i.id == installation_id)
        {
            inst.installed_version = version;
            return true;
        }
        false
    }
}

// ─── Page layouts ────────────────────────────────────────────────────────────

fn default_linked() -> bool {
    true
}

/// One placed section on a consumer page: which component it instantiates,
/// the local prop overrides, and whether it still follows library updates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionInstance {
    pub instance_id: String,
    pub component_id: String,
    #[serde(default)]
    pub prop_overrides: Overrides,
    #[serde(default = "default_linked")]
    pub is_linked: bool,
}

impl SectionInstance {
    pub fn new(instance_id: impl Into<String>, component_id: impl Into<String>) -> Self {
        Self {
            instance_id: instance_id.into(),
            component_id: component_id.into(),
            prop_overrides: Overrides::new(),
            is_linked: true,
        }
    }

    pub fn with_override(mut self, key: impl Into<String>, value: impl Into<PropValue>) -> Self {
        self.prop_overrides.insert(key.into(), value.into());
        self
    }
}

/// Ordered sections of one page plus the editing selection.
///
/// Every mutating operation that names a missing instance id is a silent
/// no-op: the layout never invents or drops sections on a stale id, and the
/// selection is only ever moved to an instance that exists.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PageLayout {
    sections: Vec<SectionInstance>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    selected_instance: Option<String>,
}

impl PageLayout {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, instance: SectionInstance) -> HubResult<()> {
        if self
            .sections
            .iter()
            .any(|s| s.instance_id == instance.instance_id)
        {
            return Err(HubError::DuplicateInstance {
                id: instance.instance_id,
            });
        }
        self.sections.push(instance);
        Ok(())
    }

    /// Remove an instance, deselecting it first if it was selected.
    pub fn remove(&mut self, instance_id: &str) -> bool {
        let Some(index) = self
            .sections
            .iter()
            .position(|s| s.instance_id == instance_id)
        else {
            return false;
        };
        if self.selected_instance.as_deref() == Some(instance_id) {
            self.selected_instance = None;
        }
        self.sections.remove(index);
        true
    }

    pub fn get(&self, instance_id: &str) -> Option<&SectionInstance> {
        self.sections.iter().find(|s| s.instance_id == instance_id)
    }

    /// Select an instance. Unknown ids leave the current selection in place.
    pub fn select(&mut self, instance_id: &str) -> bool {
        if self.get(instance_id).is_none() {
            return false;
        }
        self.selected_instance = Some(instance_id.to_string());
        true
    }

    pub fn deselect(&mut self) {
        self.selected_instance = None;
    }

    pub fn selected(&self) -> Option<&SectionInstance> {
        self.selected_instance
            .as_deref()
            .and_then(|id| self.get(id))
    }

    pub fn selected_id(&self) -> Option<&str> {
        self.selected_instance.as_deref()
    }

    /// Merge one override key into an instance. Existing keys are replaced,
    /// other keys are untouched.
    pub fn update_override(
        &mut self,
        instance_id: &str,
        key: impl Into<String>,
        value: impl Into<PropValue>,
    ) -> bool {
        match self
            .sections
            .iter_mut()
            .find(|s| s.instance_id == instance_id)
        {
            Some(instance) => {
                instance.prop_overrides.insert(key.into(), value.into());
                true
            }
            None => false,
        }
    }

    /// Detach an instance from library updates. The section and its
    /// overrides stay; only the link flag flips. Idempotent.
    pub fn unlink(&mut self, instance_id: &str) -> bool {
        match self
            .sections
            .iter_mut()
            .find(|s| s.instance_id == instance_id)
        {
            Some(instance) => {
                instance.is_linked = false;
                true
            }
            None => false,
        }
    }

    /// Select the first section instantiating a component, in page order.
    pub fn select_first_instance_of_component(&mut self, component_id: &str) -> bool {
        let found = self
            .sections
            .iter()
            .find(|s| s.component_id == component_id)
            .map(|s| s.instance_id.clone());
        match found {
            Some(id) => {
                self.selected_instance = Some(id);
                true
            }
            None => false,
        }
    }

    pub fn sections(&self) -> &[SectionInstance] {
        &self.sections
    }

    pub fn iter(&self) -> impl Iterator<Item = &SectionInstance> {
        self.sections.iter()
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}

// ─── Layout store ────────────────────────────────────────────────────────────

/// Page layouts keyed by site id.
#[derive(Debug, Clone, Default)]
pub struct LayoutStore {
    layouts: HashMap<String, PageLayout>,
}

impl LayoutStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_layout(&mut self, site_id: impl Into<String>, layout: PageLayout) {
        self.layouts.insert(site_id.into(), layout);
    }

    pub fn layout(&self, site_id: &str) -> Option<&PageLayout> {
        self.layouts.get(site_id)
    }

    pub fn layout_mut(&mut self, site_id: &str) -> Option<&mut PageLayout> {
        self.layouts.get_mut(site_id)
    }

    /// Sections for a site, in page order. Unknown sites yield an empty
    /// slice rather than an error.
    pub fn sections(&self, site_id: &str) -> &[SectionInstance] {
        self.layouts
            .get(site_id)
            .map(|l| l.sections())
            .unwrap_or(&[])
    }

    pub fn site_ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.layouts.keys().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }
}
