use crate::ApiError;
use serde_json::Value;

/// A link from a wiki page to an entity, identifying the entity indirectly.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Sitelink {
    site: String,
    title: String,
    badges: Vec<String>,
}

impl Sitelink {
    /// Create a new sitelink with the given site and page title.
    pub fn new<S1: Into<String>, S2: Into<String>>(site: S1, title: S2) -> Sitelink {
        Self::new_complete(site.into(), title.into(), Vec::new())
    }

    /// Create a new sitelink with the given site, page title, and badges.
    pub const fn new_complete(site: String, title: String, badges: Vec<String>) -> Sitelink {
        Sitelink {
            site,
            title,
            badges,
        }
    }

    /// Create a new sitelink from a JSON object, e.g.
    /// `{"site": "enwiki", "title": "Douglas Adams", "badges": []}`.
    pub fn from_json(j: &Value) -> Result<Self, ApiError> {
        let site = Self::string_from_json(j, "site")?;
        let title = Self::string_from_json(j, "title")?;
        let badges = j["badges"]
            .as_array()
            .map(|badges| {
                badges
                    .iter()
                    .filter_map(|b| b.as_str())
                    .map(|s| s.to_string())
                    .collect()
            })
            .unwrap_or_default();
        Ok(Sitelink::new_complete(site, title, badges))
    }

    fn string_from_json(j: &Value, key: &str) -> Result<String, ApiError> {
        j[key]
            .as_str()
            .ok_or_else(|| ApiError::MissingOrInvalidField {
                field: key.to_string(),
                j: j.to_owned(),
            })
            .map(|s| s.to_string())
    }

    /// Returns the site ID of the sitelink, e.g. "enwiki".
    pub fn site(&self) -> &str {
        &self.site
    }

    /// Returns the page title of the sitelink.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the badges of the sitelink.
    pub const fn badges(&self) -> &Vec<String> {
        &self.badges
    }
}
