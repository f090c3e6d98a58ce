//! Extension build specification data structures

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Declared configuration of one extension, as loaded from its spec file.
///
/// Nothing here is checked on construction. A `None` field means "not
/// configured", which is different from an empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Specification {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Icon size key (e.g. `"16"`) to file path.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub icons: BTreeMap<String, String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub browser_action: Option<ActionSpec>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_action: Option<ActionSpec>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub packaged_app: Option<PackagedApp>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_page: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub background_scripts: Vec<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub content_scripts: Vec<ContentScript>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options_page: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub web_intents: Vec<WebIntent>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub nacl_modules: Vec<NaclModule>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub web_accessible_resources: Vec<String>,
}

/// Browser action or page action surface.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionSpec {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub popup: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackagedApp {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentScript {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub javascripts: Vec<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub stylesheets: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebIntent {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NaclModule {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

/// A path-valued field together with the label used to describe it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileReference<'a> {
    pub what: &'static str,
    pub path: &'a str,
}

impl Specification {
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            version: Some(version.into()),
            ..Self::default()
        }
    }

    pub fn with_icon(mut self, size: impl Into<String>, path: impl Into<String>) -> Self {
        self.icons.insert(size.into(), path.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_browser_action(mut self, action: ActionSpec) -> Self {
        self.browser_action = Some(action);
        self
    }

    pub fn with_page_action(mut self, action: ActionSpec) -> Self {
        self.page_action = Some(action);
        self
    }

    pub fn with_packaged_app(mut self, app: PackagedApp) -> Self {
        self.packaged_app = Some(app);
        self
    }

    /// Number of configured UI surfaces (browser action, page action, packaged app).
    pub fn ui_surface_count(&self) -> usize {
        [
            self.packaged_app.is_some(),
            self.page_action.is_some(),
            self.browser_action.is_some(),
        ]
        .iter()
        .filter(|set| **set)
        .count()
    }

    /// Every configured file path in the spec, in the order the build
    /// directory sweep checks them. Unset fields are left out.
    pub fn file_references<'a>(&'a self) -> Vec<FileReference<'a>> {
        let mut refs = Vec::new();
        let mut push = |what: &'static str, path: Option<&'a String>| {
            if let Some(path) = path {
                refs.push(FileReference { what, path });
            }
        };

        for path in self.icons.values() {
            push("Icon", Some(path));
        }

        if let Some(action) = &self.browser_action {
            push("Browser action popup", action.popup.as_ref());
            push("Browser action icon", action.icon.as_ref());
        }

        if let Some(action) = &self.page_action {
            push("Page action popup", action.popup.as_ref());
            push("Page action icon", action.icon.as_ref());
        }

        if let Some(app) = &self.packaged_app {
            push("App launch page", app.page.as_ref());
        }

        for content_script in &self.content_scripts {
            for path in &content_script.javascripts {
                push("Content script javascript", Some(path));
            }
            for path in &content_script.stylesheets {
                push("Content script style", Some(path));
            }
        }

        for path in &self.background_scripts {
            push("Background script", Some(path));
        }

        push("Background page", self.background_page.as_ref());
        push("Options page", self.options_page.as_ref());

        for intent in &self.web_intents {
            push("Web intent href", intent.href.as_ref());
        }

        for module in &self.nacl_modules {
            push("NaCl module", module.path.as_ref());
        }

        for path in &self.web_accessible_resources {
            push("Web accessible resource", Some(path));
        }

        refs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ui_surface_count() {
        let spec = Specification::new("Test", "1.0");
        assert_eq!(spec.ui_surface_count(), 0);

        let spec = spec
            .with_browser_action(ActionSpec::default())
            .with_packaged_app(PackagedApp::default());
        assert_eq!(spec.ui_surface_count(), 2);
    }

    #[test]
    fn test_file_references_skip_unset_fields() {
        let spec = Specification::new("Test", "1.0")
            .with_icon("16", "icon16.png")
            .with_browser_action(ActionSpec {
                popup: Some("popup.html".to_string()),
                icon: None,
            });

        let refs = spec.file_references();
        assert_eq!(
            refs,
            vec![
                FileReference { what: "Icon", path: "icon16.png" },
                FileReference { what: "Browser action popup", path: "popup.html" },
            ]
        );
    }

    #[test]
    fn test_file_references_order() {
        let mut spec = Specification::new("Test", "1.0");
        spec.web_accessible_resources.push("res.png".to_string());
        spec.options_page = Some("options.html".to_string());
        spec.content_scripts.push(ContentScript {
            javascripts: vec!["cs.js".to_string()],
            stylesheets: vec!["cs.css".to_string()],
        });
        spec.nacl_modules.push(NaclModule { path: Some("mod.nmf".to_string()) });

        let labels: Vec<_> = spec.file_references().iter().map(|r| r.what).collect();
        assert_eq!(
            labels,
            vec![
                "Content script javascript",
                "Content script style",
                "Options page",
                "NaCl module",
                "Web accessible resource",
            ]
        );
    }
}
