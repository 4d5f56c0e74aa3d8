pub const NAVIGATION_ID: &str = "navigation";
pub const NAV_LINKS_SELECTOR: &str = ".nav-options a";
pub const ACTIVE_CLASS: &str = "active";

pub const DEFAULT_COMPONENTS: &[(&str, &str)] = &[
    (NAVIGATION_ID, "components/nav-component.html"),
    ("infoDisplayText", "components/info-component.html"),
    ("commissionsDisplayText", "components/commissions-component.html"),
];

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ComponentEntry {
    pub target_id: String,
    pub fragment_url: String,
}

impl ComponentEntry {
    pub fn is_navigation(&self) -> bool {
        self.target_id == NAVIGATION_ID
    }
}

/// Target element id to fragment path, in declaration order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ComponentMap {
    entries: Vec<ComponentEntry>,
}

impl Default for ComponentMap {
    fn default() -> Self {
        Self::from_pairs(DEFAULT_COMPONENTS.iter().copied())
    }
}

impl ComponentMap {
    /// Later duplicates of a target id replace the earlier path in place.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut entries: Vec<ComponentEntry> = Vec::new();
        for (id, url) in pairs {
            let target_id = id.into();
            let fragment_url = url.into();
            match entries.iter_mut().find(|entry| entry.target_id == target_id) {
                Some(existing) => existing.fragment_url = fragment_url,
                None => entries.push(ComponentEntry {
                    target_id,
                    fragment_url,
                }),
            }
        }
        Self { entries }
    }

    pub fn entries(&self) -> &[ComponentEntry] {
        &self.entries
    }

    pub fn get(&self, target_id: &str) -> Option<&ComponentEntry> {
        self.entries.iter().find(|entry| entry.target_id == target_id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
