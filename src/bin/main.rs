use wikibase_action_api::prelude::*;

#[cfg(not(tarpaulin_include))]
async fn q42_demo() -> Result<(), ApiError> {
    let api = MediawikiApi::builder()
        .api("https://www.wikidata.org/w/api.php")
        .build()?;
    let getter = RevisionGetter::new(api, JsonEntityDeserializer);

    // Use Q42 as an example item
    let revision = getter.get_from_id(EntityId::new("Q42")?).await?;
    if let Some(item) = revision.content().as_item() {
        let label = item.labels().get_lang("en").unwrap_or("<no label>");
        println!(
            "Q42 '{label}', page {page}, revision {rev}",
            page = revision.page_id(),
            rev = revision.revision_id()
        );
    }

    // The same entity, addressed through its English Wikipedia page
    let revision = getter
        .get_from_site_and_title("enwiki", "Douglas Adams")
        .await?;
    println!(
        "[[enwiki:Douglas Adams]] is {id}",
        id = revision.content().id()
    );

    Ok(())
}

#[cfg(not(tarpaulin_include))]
async fn set_aliases_demo() -> Result<(), ApiError> {
    // Needs an authenticated session; test.wikidata.org only.
    let api = MediawikiApi::builder()
        .api("https://test.wikidata.org/w/api.php")
        .build()?;
    let setter = AliasGroupSetter::new(api);

    let group = AliasGroup::new(Language::try_new("en")?, vec!["Forty-two".to_string()]);
    let ok = setter.set(&group, EntityId::item("Q42")).await?;
    println!("Aliases set: {ok}");

    Ok(())
}

#[cfg(not(tarpaulin_include))]
#[tokio::main]
async fn main() -> Result<(), ApiError> {
    q42_demo().await?;

    set_aliases_demo().await?;

    Ok(())
}
