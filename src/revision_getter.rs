use crate::{
    action_api::ActionApi, entity_deserializer::EntityDeserializer, ApiError, Revision, Sitelink,
};
use serde_json::Value;
use std::collections::HashMap;

/// Fetches the current revision of one entity via `action=wbgetentities`,
/// addressed by ID, by sitelink, or by site/title pair.
///
/// One read call per invocation; the single returned record is deserialized
/// through the injected deserializer and wrapped into typed content.
#[derive(Debug)]
pub struct RevisionGetter<A, D> {
    api: A,
    deserializer: D,
}

impl<A: ActionApi, D: EntityDeserializer> RevisionGetter<A, D> {
    pub const fn new(api: A, deserializer: D) -> Self {
        Self { api, deserializer }
    }

    /// Returns the transport the service was built with.
    pub const fn api(&self) -> &A {
        &self.api
    }

    /// Fetches the revision of the entity with the given ID.
    /// Accepts a plain string ("Q42") or an `EntityId`, which converts to its
    /// prefixed string form.
    pub async fn get_from_id<I: Into<String>>(&self, id: I) -> Result<Revision, ApiError> {
        let params = HashMap::from([("ids".to_string(), id.into())]);
        let result = self.api.get_action("wbgetentities", params).await?;
        self.revision_from_result(&result)
    }

    /// Fetches the revision of the entity a sitelink points to.
    pub async fn get_from_sitelink(&self, sitelink: &Sitelink) -> Result<Revision, ApiError> {
        self.get_from_site_and_title(sitelink.site(), sitelink.title())
            .await
    }

    /// Fetches the revision of the entity linked from a page on a site.
    pub async fn get_from_site_and_title(
        &self,
        site: &str,
        title: &str,
    ) -> Result<Revision, ApiError> {
        let params = HashMap::from([
            ("sites".to_string(), site.to_string()),
            ("titles".to_string(), title.to_string()),
        ]);
        let result = self.api.get_action("wbgetentities", params).await?;
        self.revision_from_result(&result)
    }

    /// Takes the single expected record from the `entities` mapping and
    /// assembles a `Revision` from it. A record the wiki marked `missing`
    /// yields `ApiError::EntityMissing`; no revision is built for it.
    fn revision_from_result(&self, result: &Value) -> Result<Revision, ApiError> {
        let record = result["entities"]
            .as_object()
            .and_then(|entities| entities.values().next())
            .ok_or_else(|| ApiError::UnexpectedResponse(result.to_owned()))?;
        if record.get("missing").is_some() {
            return Err(ApiError::EntityMissing);
        }
        let entity = self.deserializer.deserialize(record)?;
        Ok(Revision::new(
            entity.into(),
            Self::u64_field(record, "pageid")?,
            Self::u64_field(record, "lastrevid")?,
            record["modified"].as_str().map(|s| s.to_string()),
        ))
    }

    /// The live API emits these as numbers; fixtures and older proxies as
    /// numeric strings. Accept both.
    fn u64_field(j: &Value, field: &str) -> Result<u64, ApiError> {
        j[field]
            .as_u64()
            .or_else(|| j[field].as_str().and_then(|s| s.parse().ok()))
            .ok_or_else(|| ApiError::MissingOrInvalidField {
                field: field.to_string(),
                j: j.to_owned(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::EntityType;
    use crate::{Entity, EntityId, Item, JsonEntityDeserializer};
    use async_trait::async_trait;
    use serde_json::json;
    use std::sync::Mutex;

    #[derive(Debug)]
    struct MockApi {
        get_calls: Mutex<Vec<(String, HashMap<String, String>)>>,
        response: Value,
    }

    impl MockApi {
        fn new(response: Value) -> Self {
            Self {
                get_calls: Mutex::new(Vec::new()),
                response,
            }
        }
    }

    #[async_trait]
    impl ActionApi for MockApi {
        async fn get_action(
            &self,
            action: &str,
            params: HashMap<String, String>,
        ) -> Result<Value, ApiError> {
            self.get_calls
                .lock()
                .unwrap()
                .push((action.to_string(), params));
            Ok(self.response.clone())
        }

        async fn post_action(
            &self,
            _action: &str,
            _params: HashMap<String, String>,
        ) -> Result<Value, ApiError> {
            Ok(json!({}))
        }

        async fn get_token(&self) -> Result<String, ApiError> {
            Ok("sometoken".to_string())
        }
    }

    /// A deserializer double that ignores the record entirely.
    #[derive(Debug)]
    struct EmptyItemDeserializer;

    impl EntityDeserializer for EmptyItemDeserializer {
        fn deserialize(&self, _raw: &Value) -> Result<Entity, ApiError> {
            Ok(Entity::Item(Item::default()))
        }
    }

    fn q123_response() -> Value {
        json!({"entities": {"Q123": {
            "pageid": "111",
            "lastrevid": "222",
            "modified": "TIMESTAMP"
        }}})
    }

    #[tokio::test]
    async fn test_get_from_id_with_string_and_entity_id() {
        for use_entity_id in [false, true] {
            let getter = RevisionGetter::new(MockApi::new(q123_response()), EmptyItemDeserializer);
            let revision = match use_entity_id {
                false => getter.get_from_id("Q1").await.unwrap(),
                true => getter.get_from_id(EntityId::item("Q1")).await.unwrap(),
            };

            let get_calls = getter.api().get_calls.lock().unwrap();
            assert_eq!(get_calls.len(), 1);
            let (action, params) = &get_calls[0];
            assert_eq!(action, "wbgetentities");
            assert_eq!(
                params,
                &HashMap::from([("ids".to_string(), "Q1".to_string())])
            );

            assert_eq!(revision.content().entity_type(), EntityType::Item);
            assert_eq!(revision.content().as_item(), Some(&Item::default()));
            assert_eq!(revision.page_id(), 111);
            assert_eq!(revision.revision_id(), 222);
            assert_eq!(revision.timestamp(), Some("TIMESTAMP"));
        }
    }

    #[tokio::test]
    async fn test_get_from_id_with_real_deserializer() {
        let response = json!({"entities": {"Q123": {
            "type": "item",
            "id": "Q123",
            "labels": {"en": {"language": "en", "value": "dog"}},
            "pageid": 111,
            "lastrevid": 222,
            "modified": "2024-01-01T00:00:00Z"
        }}});
        let getter = RevisionGetter::new(MockApi::new(response), JsonEntityDeserializer);
        let revision = getter.get_from_id("Q123").await.unwrap();
        let item = revision.content().as_item().unwrap();
        assert_eq!(item.id(), EntityId::item("Q123"));
        assert_eq!(item.labels().get_lang("en"), Some("dog"));
    }

    #[tokio::test]
    async fn test_get_from_sitelink() {
        let getter = RevisionGetter::new(MockApi::new(q123_response()), EmptyItemDeserializer);
        let sitelink = Sitelink::new("enwiki", "Foo");
        getter.get_from_sitelink(&sitelink).await.unwrap();

        let get_calls = getter.api().get_calls.lock().unwrap();
        let (action, params) = &get_calls[0];
        assert_eq!(action, "wbgetentities");
        assert_eq!(
            params,
            &HashMap::from([
                ("sites".to_string(), "enwiki".to_string()),
                ("titles".to_string(), "Foo".to_string()),
            ])
        );
    }

    #[tokio::test]
    async fn test_get_from_site_and_title() {
        let getter = RevisionGetter::new(MockApi::new(q123_response()), EmptyItemDeserializer);
        getter
            .get_from_site_and_title("dewiki", "Bar")
            .await
            .unwrap();

        let get_calls = getter.api().get_calls.lock().unwrap();
        let (_action, params) = &get_calls[0];
        assert_eq!(params.get("sites"), Some(&"dewiki".to_string()));
        assert_eq!(params.get("titles"), Some(&"Bar".to_string()));
    }

    #[tokio::test]
    async fn test_missing_entity() {
        let response = json!({"entities": {"-1": {
            "site": "enwiki",
            "title": "No such page",
            "missing": ""
        }}});
        let getter = RevisionGetter::new(MockApi::new(response), EmptyItemDeserializer);
        let err = getter.get_from_id("Q999999999").await.unwrap_err();
        assert!(matches!(err, ApiError::EntityMissing));
    }

    #[tokio::test]
    async fn test_unsupported_entity_type() {
        let response = json!({"entities": {"L1": {
            "type": "lexeme",
            "id": "L1",
            "pageid": 1,
            "lastrevid": 2,
            "modified": "TIMESTAMP"
        }}});
        let getter = RevisionGetter::new(MockApi::new(response), JsonEntityDeserializer);
        let err = getter.get_from_id("L1").await.unwrap_err();
        assert_eq!(
            err.to_string(),
            "cannot build entity content for entity type lexeme"
        );
    }

    #[tokio::test]
    async fn test_no_entities_in_response() {
        let getter = RevisionGetter::new(MockApi::new(json!({})), EmptyItemDeserializer);
        let err = getter.get_from_id("Q1").await.unwrap_err();
        assert!(matches!(err, ApiError::UnexpectedResponse(_)));

        let getter =
            RevisionGetter::new(MockApi::new(json!({"entities": {}})), EmptyItemDeserializer);
        assert!(getter.get_from_id("Q1").await.is_err());
    }

    #[tokio::test]
    async fn test_get_from_id_against_http_api() {
        use crate::MediawikiApi;
        use wiremock::matchers::{method, path, query_param};
        use wiremock::{Mock, MockServer, ResponseTemplate};

        let v = std::fs::read_to_string("test_data/Q42.json").unwrap();
        let v: Value = serde_json::from_str(&v).unwrap();

        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/w/api.php"))
            .and(query_param("action", "wbgetentities"))
            .and(query_param("ids", "Q42"))
            .respond_with(ResponseTemplate::new(200).set_body_json(&v))
            .mount(&mock_server)
            .await;
        let api = MediawikiApi::builder()
            .api(mock_server.uri() + "/w/api.php")
            .build()
            .unwrap();

        let getter = RevisionGetter::new(api, JsonEntityDeserializer);
        let revision = getter.get_from_id("Q42").await.unwrap();
        assert_eq!(revision.page_id(), 138);
        assert_eq!(revision.revision_id(), 2144160879);
        assert_eq!(revision.timestamp(), Some("2024-05-01T12:34:56Z"));
        let item = revision.content().as_item().unwrap();
        assert_eq!(item.labels().get_lang("en"), Some("Douglas Adams"));
    }

    #[tokio::test]
    async fn test_missing_revision_fields() {
        let response = json!({"entities": {"Q123": {"modified": "TIMESTAMP"}}});
        let getter = RevisionGetter::new(MockApi::new(response), EmptyItemDeserializer);
        let err = getter.get_from_id("Q123").await.unwrap_err();
        assert!(err.to_string().starts_with("missing or invalid field pageid"));
    }
}
