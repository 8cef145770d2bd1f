use crate::{ApiError, Sitelink};
use serde_json::Value;

/// The sitelinks of an entity, keyed by site ID.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Sitelinks {
    sitelinks: Vec<Sitelink>,
}

impl Sitelinks {
    /// Parses the action API shape `{"enwiki": {"site": …, "title": …}, …}`;
    /// an empty array or an absent member is an empty collection (formatversion=1).
    pub fn from_json(j: &Value) -> Result<Self, ApiError> {
        let map = match j {
            Value::Null => return Ok(Self::default()),
            Value::Array(a) if a.is_empty() => return Ok(Self::default()),
            Value::Object(map) => map,
            _ => {
                return Err(ApiError::MissingOrInvalidField {
                    field: "Sitelinks".into(),
                    j: j.to_owned(),
                })
            }
        };
        let sitelinks = map
            .values()
            .map(Sitelink::from_json)
            .collect::<Result<Vec<Sitelink>, ApiError>>()?;
        Ok(Sitelinks { sitelinks })
    }

    /// Returns the sitelinks.
    pub const fn sitelinks(&self) -> &Vec<Sitelink> {
        &self.sitelinks
    }

    /// Returns the sitelink for a given site.
    pub fn get_site<S: Into<String>>(&self, site: S) -> Option<&Sitelink> {
        let site = site.into();
        self.sitelinks.iter().find(|s| s.site() == site)
    }

    /// Sets the sitelink for its site, replacing any previous one.
    pub fn set_site(&mut self, sitelink: Sitelink) {
        self.sitelinks.retain(|s| s.site() != sitelink.site());
        self.sitelinks.push(sitelink);
    }

    /// Removes the sitelink for a given site.
    pub fn remove_site<S: Into<String>>(&mut self, site: S) {
        let site = site.into();
        self.sitelinks.retain(|s| s.site() != site);
    }

    /// Returns the number of sitelinks.
    pub fn len(&self) -> usize {
        self.sitelinks.len()
    }

    /// Returns true if there are no sitelinks.
    pub fn is_empty(&self) -> bool {
        self.sitelinks.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_json() {
        let j = json!({
            "enwiki": {"site": "enwiki", "title": "Douglas Adams", "badges": []},
            "dewiki": {"site": "dewiki", "title": "Douglas Adams", "badges": []}
        });
        let sitelinks = Sitelinks::from_json(&j).unwrap();
        assert_eq!(sitelinks.len(), 2);
        assert_eq!(
            sitelinks.get_site("enwiki").unwrap().title(),
            "Douglas Adams"
        );
        assert!(sitelinks.get_site("frwiki").is_none());
    }

    #[test]
    fn test_from_json_empty() {
        assert!(Sitelinks::from_json(&json!([])).unwrap().is_empty());
        assert!(Sitelinks::from_json(&Value::Null).unwrap().is_empty());
        assert!(Sitelinks::from_json(&json!("foo")).is_err());
    }

    #[test]
    fn test_set_and_remove() {
        let mut sitelinks = Sitelinks::default();
        sitelinks.set_site(Sitelink::new("enwiki", "Foo"));
        sitelinks.set_site(Sitelink::new("enwiki", "Bar"));
        assert_eq!(sitelinks.len(), 1);
        assert_eq!(sitelinks.get_site("enwiki").unwrap().title(), "Bar");
        sitelinks.remove_site("enwiki");
        assert!(sitelinks.is_empty());
    }
}
