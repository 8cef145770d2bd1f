use crate::{action_api::ActionApi, AliasGroup, ApiError, EntityTarget};

/// Replaces the alias list for one language on one target entity, via
/// `action=wbsetaliases`.
///
/// Stateless apart from the injected transport; each call resolves the
/// target, fetches one token, and issues one write call.
#[derive(Debug)]
pub struct AliasGroupSetter<A> {
    api: A,
}

impl<A: ActionApi> AliasGroupSetter<A> {
    pub const fn new(api: A) -> Self {
        Self { api }
    }

    /// Returns the transport the service was built with.
    pub const fn api(&self) -> &A {
        &self.api
    }

    /// Sets the aliases of the target entity for the group's language.
    ///
    /// The target resolves to `id` or `site`+`title` parameters before any
    /// call is made; a target entity without an ID fails here with zero
    /// calls. Any non-error response counts as success.
    pub async fn set<T: Into<EntityTarget>>(
        &self,
        alias_group: &AliasGroup,
        target: T,
    ) -> Result<bool, ApiError> {
        let target = target.into();
        let mut params = target.params()?;
        params.insert(
            "language".to_string(),
            alias_group.language().to_string(),
        );
        // Multi-value parameter, joined the way the action API expects.
        params.insert("set".to_string(), alias_group.values().join("|"));
        params.insert("token".to_string(), self.api.get_token().await?);
        self.api.post_action("wbsetaliases", params).await?;
        Ok(true)
    }
}
