//! The detail fetch chain for one point

use crate::constants::api::POKEMON_PATH;
use crate::constants::pokeapi::{MANUAL_IMAGE_NAME, MANUAL_IMAGE_URL};
use crate::detail::record::{DescriptionRecord, PokemonRecord, SpriteRecord};
use crate::detail::{choose_description, clean_description, lookup_key, ErrorFlag, JsonSource};
use crate::error::{Error, Result};
use crate::point::{FetchState, Point, Stat};
use std::future::Future;
use tracing::{info, warn};

/// Which steps of one fetch succeeded
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FetchOutcome {
    pub stats: bool,
    pub image: bool,
    pub description: bool,
}

impl FetchOutcome {
    /// Every request succeeded
    pub fn is_complete(&self) -> bool {
        self.stats && self.image && self.description
    }
}

/// A single field write produced by the pipeline
#[derive(Debug, Clone, PartialEq)]
pub enum DetailUpdate {
    State(FetchState),
    Stats(Vec<Stat>),
    Image(String),
    Description(String),
}

impl DetailUpdate {
    pub fn apply_to(self, point: &mut Point) {
        match self {
            Self::State(state) => point.set_fetch_state(state),
            Self::Stats(stats) => point.set_stats(stats),
            Self::Image(url) => point.set_image_url(url),
            Self::Description(text) => point.set_description(text),
        }
    }
}

/// Receives pipeline results as soon as each request finishes
pub trait DetailTarget: Send {
    fn apply(&mut self, update: DetailUpdate) -> impl Future<Output = ()> + Send;
}

impl DetailTarget for Point {
    async fn apply(&mut self, update: DetailUpdate) {
        update.apply_to(self);
    }
}

/// Runs the PokeAPI request chain and writes the results into a point
#[derive(Debug, Clone)]
pub struct DetailPipeline<S> {
    source: S,
    base_url: String,
    errors: ErrorFlag,
}

impl<S: JsonSource> DetailPipeline<S> {
    /// Create a pipeline with its own error flag
    pub fn new(source: S, base_url: impl Into<String>) -> Self {
        Self::with_errors(source, base_url, ErrorFlag::new())
    }

    /// Create a pipeline reporting into an existing error flag
    pub fn with_errors(source: S, base_url: impl Into<String>, errors: ErrorFlag) -> Self {
        Self {
            source,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            errors,
        }
    }

    /// The shared failure signal
    pub fn errors(&self) -> &ErrorFlag {
        &self.errors
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Populate stats, image and description of `point`
    pub async fn fetch_detail(&self, point: &mut Point) -> FetchOutcome {
        let name = point.name().to_string();
        let label = point.label();
        self.fetch_into(&name, &label, point).await
    }

    /// Run the chain for `name`, handing every result to `target` as it lands
    ///
    /// Stats are written as soon as the record arrives. Image and description
    /// are then resolved concurrently, and whichever finishes first is written
    /// first. A failed step raises the error flag and leaves its field empty
    /// without touching the others. Never retries.
    pub async fn fetch_into<T: DetailTarget>(&self, name: &str, label: &str, target: &mut T) -> FetchOutcome {
        let mut outcome = FetchOutcome::default();
        let key = lookup_key(name);

        info!("Fetching detail for {} (key: {})", label, key);
        target.apply(DetailUpdate::State(FetchState::PendingLookup)).await;

        let record: PokemonRecord = match self.source.get_json(&self.lookup_url(&key)).await {
            Ok(record) => record,
            Err(e) => {
                self.report(label, &e);
                target.apply(DetailUpdate::State(FetchState::Failed)).await;
                return outcome;
            }
        };

        target.apply(DetailUpdate::Stats(record.stats())).await;
        outcome.stats = true;
        target.apply(DetailUpdate::State(FetchState::PendingDetails)).await;

        let image = self.resolve_image(name, &record);
        let description = self.resolve_description(&record);
        tokio::pin!(image, description);

        let mut image_done = false;
        let mut description_done = false;

        while !(image_done && description_done) {
            tokio::select! {
                result = &mut image, if !image_done => {
                    image_done = true;
                    match result {
                        Ok(url) => {
                            target.apply(DetailUpdate::Image(url)).await;
                            outcome.image = true;
                        }
                        Err(e) => self.report(label, &e),
                    }
                }
                result = &mut description, if !description_done => {
                    description_done = true;
                    match result {
                        Ok(text) => {
                            target.apply(DetailUpdate::Description(text)).await;
                            outcome.description = true;
                        }
                        Err(e) => self.report(label, &e),
                    }
                }
            }
        }

        let state = if outcome.is_complete() {
            FetchState::Done
        } else {
            FetchState::Failed
        };
        target.apply(DetailUpdate::State(state)).await;

        outcome
    }

    async fn resolve_image(&self, name: &str, record: &PokemonRecord) -> Result<String> {
        if name == MANUAL_IMAGE_NAME {
            return Ok(MANUAL_IMAGE_URL.to_string());
        }

        let sprite = record
            .sprites
            .first()
            .ok_or_else(|| Error::DetailFetch("Record has no sprites".to_string()))?;

        let data: SpriteRecord = self.source.get_json(&self.resource_url(&sprite.resource_uri)).await?;

        Ok(self.resource_url(&data.image))
    }

    async fn resolve_description(&self, record: &PokemonRecord) -> Result<String> {
        let uri = choose_description(&record.descriptions).ok_or_else(|| {
            Error::DetailFetch("Record has no generation 5 or 6 description".to_string())
        })?;

        let data: DescriptionRecord = self.source.get_json(&self.resource_url(uri)).await?;

        Ok(clean_description(&data.description))
    }

    fn lookup_url(&self, key: &str) -> String {
        format!("{}{}{}", self.base_url, POKEMON_PATH, key)
    }

    fn resource_url(&self, uri: &str) -> String {
        format!("{}{}", self.base_url, uri)
    }

    fn report(&self, label: &str, error: &Error) {
        warn!("{}: {}", label, error);
        self.errors.raise();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detail::record::STAT_LABELS;
    use crate::detail::testing::{StubSource, BASE};
    use crate::point::{Coordinates, PointCollection, SeedRow};
    use serde_json::json;
    use std::time::Duration;
    use tokio::time::timeout;

    fn point(name: &str) -> Point {
        Point::new(name, 1, Coordinates::new(37.42, -122.09))
    }

    fn pipeline(source: StubSource) -> DetailPipeline<StubSource> {
        DetailPipeline::new(source, BASE)
    }

    #[tokio::test]
    async fn test_fetch_detail_success() {
        let pipeline = pipeline(
            StubSource::new().with_pokemon("bulbasaur", 1, "This Pokmon isnt picky."),
        );
        let mut bulbasaur = point("Bulbasaur");

        let outcome = pipeline.fetch_detail(&mut bulbasaur).await;

        assert!(outcome.is_complete());
        assert!(bulbasaur.has_detail());
        assert_eq!(bulbasaur.fetch_state(), FetchState::Done);
        assert_eq!(bulbasaur.image_url(), "http://pokeapi.test/media/img/1.png");
        assert_eq!(bulbasaur.description(), "This Pokémon isn't picky.");

        let labels: Vec<&str> = bulbasaur.stats().iter().map(|s| s.name.as_str()).collect();
        assert_eq!(labels, STAT_LABELS);
        assert!(!pipeline.errors().is_raised());
    }

    #[tokio::test]
    async fn test_fetch_detail_request_order() {
        let pipeline = pipeline(StubSource::new().with_pokemon("ivysaur", 2, "Seed."));
        let mut ivysaur = point("Ivysaur");

        pipeline.fetch_detail(&mut ivysaur).await;

        let requests = pipeline.source.requests();
        assert_eq!(requests.len(), 3);
        assert_eq!(requests[0], "http://pokeapi.test/api/v1/pokemon/ivysaur");
        assert!(requests.contains(&"http://pokeapi.test/api/v1/sprite/2/".to_string()));
        assert!(requests.contains(&"http://pokeapi.test/api/v1/description/2/".to_string()));
    }

    #[tokio::test]
    async fn test_image_failure_keeps_stats() {
        let source = StubSource::new()
            .with_pokemon("bulbasaur", 1, "Seed.")
            .with_status("/api/v1/sprite/1/", 500);
        let pipeline = pipeline(source);
        let mut bulbasaur = point("Bulbasaur");

        let outcome = pipeline.fetch_detail(&mut bulbasaur).await;

        assert!(outcome.stats);
        assert!(!outcome.image);
        assert!(bulbasaur.image_url().is_empty());
        assert_eq!(bulbasaur.stats().len(), 6);
        assert!(pipeline.errors().is_raised());
        assert!(!bulbasaur.has_detail());
        assert_eq!(bulbasaur.fetch_state(), FetchState::Failed);

        // Description is independent of the failed image request
        assert_eq!(bulbasaur.description(), "Seed.");
    }

    #[tokio::test]
    async fn test_description_failure_still_has_detail() {
        let source = StubSource::new()
            .with_pokemon("bulbasaur", 1, "Seed.")
            .with_status("/api/v1/description/1/", 503);
        let pipeline = pipeline(source);
        let mut bulbasaur = point("Bulbasaur");

        let outcome = pipeline.fetch_detail(&mut bulbasaur).await;

        assert!(!outcome.description);
        assert!(bulbasaur.description().is_empty());
        assert!(bulbasaur.has_detail());
        assert!(pipeline.errors().is_raised());
    }

    #[tokio::test]
    async fn test_lookup_failure() {
        let pipeline = pipeline(StubSource::new().with_status("/api/v1/pokemon/missingno", 404));
        let mut missingno = point("MissingNo");

        let outcome = pipeline.fetch_detail(&mut missingno).await;

        assert_eq!(outcome, FetchOutcome::default());
        assert!(missingno.stats().is_empty());
        assert!(missingno.image_url().is_empty());
        assert!(pipeline.errors().is_raised());
        assert_eq!(pipeline.source.requests().len(), 1);
    }

    #[tokio::test]
    async fn test_manual_image_skips_sprite_request() {
        let source = StubSource::new().with_pokemon("meowstic-male", 678, "Psychic power.");
        let pipeline = pipeline(source);
        let mut female = point("Meowstic (Female)");

        pipeline.fetch_detail(&mut female).await;

        assert_eq!(female.image_url(), MANUAL_IMAGE_URL);
        assert!(female.has_detail());

        let requests = pipeline.source.requests();
        assert!(!requests.iter().any(|url| url.contains("/sprite/")));
        assert_eq!(requests.len(), 2);
    }

    #[tokio::test]
    async fn test_male_variant_uses_sprite() {
        let source = StubSource::new().with_pokemon("meowstic-male", 678, "Psychic power.");
        let pipeline = pipeline(source);
        let mut male = point("Meowstic (Male)");

        pipeline.fetch_detail(&mut male).await;

        assert_eq!(male.image_url(), "http://pokeapi.test/media/img/678.png");
        assert_eq!(
            pipeline.source.requests()[0],
            "http://pokeapi.test/api/v1/pokemon/meowstic-male"
        );
    }

    #[tokio::test]
    async fn test_average_size_key() {
        let source = StubSource::new().with_pokemon("pumpkaboo-average", 710, "Lantern.");
        let pipeline = pipeline(source);
        let mut pumpkaboo = point("Pumpkaboo");

        pipeline.fetch_detail(&mut pumpkaboo).await;

        assert!(pumpkaboo.has_detail());
    }

    #[tokio::test]
    async fn test_empty_sprites_and_descriptions() {
        let source = StubSource::new().with_body(
            "/api/v1/pokemon/unown",
            json!({
                "hp": 48, "attack": 72, "defense": 48,
                "sp_atk": 72, "sp_def": 48, "speed": 48,
                "sprites": [],
                "descriptions": [{"name": "unown_gen_2", "resource_uri": "/api/v1/description/2/"}]
            }),
        );
        let pipeline = pipeline(source);
        let mut unown = point("Unown");

        let outcome = pipeline.fetch_detail(&mut unown).await;

        assert!(outcome.stats);
        assert!(!outcome.image);
        assert!(!outcome.description);
        assert!(pipeline.errors().is_raised());
        assert_eq!(pipeline.source.requests().len(), 1);
    }

    #[tokio::test]
    async fn test_select_fetches_once() {
        let pipeline = pipeline(StubSource::new().with_pokemon("bulbasaur", 1, "Seed."));
        let mut collection = PointCollection::seed(vec![
            SeedRow::new("Bulbasaur", 37.42, -122.09),
            SeedRow::new("Ivysaur", 37.77, -122.47),
        ]);

        let selected = collection.select(1, &pipeline).await.unwrap();
        assert!(selected.has_detail());
        assert_eq!(pipeline.source.requests().len(), 3);

        collection.select(1, &pipeline).await.unwrap();
        assert_eq!(pipeline.source.requests().len(), 3);
        assert_eq!(collection.current().map(|p| p.number()), Some(1));
    }

    #[tokio::test]
    async fn test_select_retries_after_failure() {
        let source = StubSource::new()
            .with_pokemon("bulbasaur", 1, "Seed.")
            .with_status("/api/v1/sprite/1/", 500);
        let pipeline = pipeline(source);
        let mut collection = PointCollection::seed(vec![SeedRow::new("Bulbasaur", 37.42, -122.09)]);

        collection.select(1, &pipeline).await.unwrap();
        assert!(pipeline.errors().is_raised());

        collection.select(1, &pipeline).await.unwrap();
        assert_eq!(pipeline.source.requests().len(), 6);
    }

    #[tokio::test]
    async fn test_select_clears_error_flag() {
        let pipeline = pipeline(StubSource::new().with_pokemon("ivysaur", 2, "Seed."));
        let mut collection = PointCollection::seed(vec![
            SeedRow::new("Bulbasaur", 37.42, -122.09),
            SeedRow::new("Ivysaur", 37.77, -122.47),
        ]);

        collection.select(1, &pipeline).await.unwrap();
        assert!(pipeline.errors().is_raised());

        let ivysaur = collection.select(2, &pipeline).await.unwrap();
        assert!(ivysaur.has_detail());
        assert!(!pipeline.errors().is_raised());
    }

    #[tokio::test]
    async fn test_select_unknown_number() {
        let pipeline = pipeline(StubSource::new());
        let mut collection = PointCollection::seed(vec![SeedRow::new("Bulbasaur", 37.42, -122.09)]);

        assert!(matches!(
            collection.select(7, &pipeline).await,
            Err(Error::PointNotFound(_))
        ));
        assert!(collection.current().is_none());
        assert!(pipeline.source.requests().is_empty());
    }

    #[tokio::test]
    async fn test_description_lands_while_sprite_hangs() {
        let source = StubSource::new()
            .with_pokemon("bulbasaur", 1, "Seed.")
            .with_pending("/api/v1/sprite/1/");
        let pipeline = pipeline(source);
        let mut bulbasaur = point("Bulbasaur");

        let finished = timeout(Duration::from_millis(300), pipeline.fetch_detail(&mut bulbasaur)).await;

        assert!(finished.is_err());
        assert_eq!(bulbasaur.stats().len(), 6);
        assert_eq!(bulbasaur.description(), "Seed.");
        assert!(bulbasaur.image_url().is_empty());
        assert_eq!(bulbasaur.fetch_state(), FetchState::PendingDetails);
    }

    #[tokio::test]
    async fn test_updates_arrive_in_completion_order() {
        let source = StubSource::new()
            .with_pokemon("bulbasaur", 1, "Seed.")
            .with_delayed_body(
                "/api/v1/sprite/1/",
                Duration::from_millis(50),
                json!({"image": "/media/img/1.png"}),
            );
        let pipeline = pipeline(source);
        let mut log = UpdateLog::default();

        let outcome = pipeline.fetch_into("Bulbasaur", "001 Bulbasaur", &mut log).await;

        assert!(outcome.is_complete());
        let fields: Vec<&str> = log.0.iter().map(update_kind).collect();
        assert_eq!(
            fields,
            vec!["state", "stats", "state", "description", "image", "state"]
        );
        assert_eq!(log.0.last(), Some(&DetailUpdate::State(FetchState::Done)));
    }

    #[derive(Default)]
    struct UpdateLog(Vec<DetailUpdate>);

    impl DetailTarget for UpdateLog {
        async fn apply(&mut self, update: DetailUpdate) {
            self.0.push(update);
        }
    }

    fn update_kind(update: &DetailUpdate) -> &'static str {
        match update {
            DetailUpdate::State(_) => "state",
            DetailUpdate::Stats(_) => "stats",
            DetailUpdate::Image(_) => "image",
            DetailUpdate::Description(_) => "description",
        }
    }

    #[test]
    fn test_base_url_trailing_slash() {
        let pipeline = DetailPipeline::new(StubSource::new(), "http://pokeapi.co/");
        assert_eq!(pipeline.base_url(), "http://pokeapi.co");
        assert_eq!(pipeline.lookup_url("eevee"), "http://pokeapi.co/api/v1/pokemon/eevee");
    }
}
