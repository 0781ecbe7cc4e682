//! Turning trivia source responses into a [`Board`].
//!
//! Loading is strictly sequential: categories are requested one after the other in the order they were selected,
//! and the first failure aborts the whole board.

use alloc::collections::BTreeSet;
use alloc::string::String;
use alloc::vec::Vec;
use serde::Deserialize;

use crate::*;

/// Remote collaborator serving category data as raw JSON bodies.
///
/// `category_listing` answers `GET /categories?count=N` with `[{id, title, clues_count}, ...]`, `category` answers
/// `GET /category?id=ID` with `{id, title, clues: [{question, answer, ...}, ...]}`.
#[allow(async_fn_in_trait)]
pub trait TriviaSource {
    async fn category_listing(&self, count: usize) -> core::result::Result<String, FetchError>;

    async fn category(&self, id: CategoryId) -> core::result::Result<String, FetchError>;
}

#[derive(Deserialize)]
struct ListingEntry {
    id: CategoryId,
    #[serde(default, alias = "clues_count")]
    clue_count: Option<usize>,
}

#[derive(Deserialize)]
struct CategoryPayload {
    id: CategoryId,
    title: Text,
    clues: Vec<CluePayload>,
}

#[derive(Deserialize)]
struct CluePayload {
    question: Text,
    answer: Text,
}

/// Text field that some records carry as a bare number.
#[derive(Deserialize)]
#[serde(untagged)]
enum Text {
    String(String),
    Number(serde_json::Number),
}

impl From<Text> for String {
    fn from(text: Text) -> Self {
        use alloc::string::ToString;
        match text {
            Text::String(s) => s.trim().to_string(),
            Text::Number(n) => n.to_string(),
        }
    }
}

/// Category ids from a listing body, keeping only categories that can fill a column of `min_clues`.
///
/// Entries without a clue count are kept; their size is checked once the category is loaded. An id listed more
/// than once appears once, at its first position.
pub fn pool_from_listing(
    body: &str,
    min_clues: usize,
) -> core::result::Result<Vec<CategoryId>, FetchError> {
    let entries: Vec<ListingEntry> = serde_json::from_str(body)?;
    let total = entries.len();
    let mut seen = BTreeSet::new();
    let pool: Vec<CategoryId> = entries
        .into_iter()
        .filter(|entry| entry.clue_count.is_none_or(|n| n >= min_clues))
        .map(|entry| entry.id)
        .filter(|&id| seen.insert(id))
        .collect();

    if pool.len() < total {
        log::debug!(
            "dropped {} of {} categories, short or repeated, wanting {} clues",
            total - pool.len(),
            total,
            min_clues
        );
    }
    Ok(pool)
}

/// Parses a category body, every clue starting out hidden.
pub fn category_from_body(body: &str) -> core::result::Result<Category, FetchError> {
    let payload: CategoryPayload = serde_json::from_str(body)?;
    let clues = payload
        .clues
        .into_iter()
        .map(|clue| Clue::new(String::from(clue.question), String::from(clue.answer)))
        .collect();
    Ok(Category::new(payload.id, String::from(payload.title), clues))
}

/// Fetches the pool of category ids to select from.
pub async fn fetch_pool<S: TriviaSource + ?Sized>(
    source: &S,
    pool_size: usize,
    min_clues: usize,
) -> Result<Vec<CategoryId>> {
    let body = source.category_listing(pool_size).await?;
    Ok(pool_from_listing(&body, min_clues)?)
}

pub async fn load_category<S: TriviaSource + ?Sized>(source: &S, id: CategoryId) -> Result<Category> {
    let body = source.category(id).await?;
    let category = category_from_body(&body)?;
    log::debug!(
        "loaded category {} {:?} with {} clues",
        id,
        category.title(),
        category.clues().len()
    );
    Ok(category)
}

/// Selects `config.categories` ids out of `pool` and loads each of them in turn.
///
/// Every category is cut down to `config.clues_per_category` clues, keeping source order. No board is returned
/// unless every category loaded and had enough clues.
pub async fn load_board<S, C>(
    source: &S,
    config: GameConfig,
    pool: &[CategoryId],
    selector: C,
) -> Result<Board>
where
    S: TriviaSource + ?Sized,
    C: CategorySelector,
{
    let ids = selector.select(pool, config.categories)?;
    let mut categories = Vec::with_capacity(ids.len());

    for id in ids {
        let category = load_category(source, id).await?;
        let found = category.clues().len();
        if found < config.clues_per_category {
            log::warn!("category {} is too short for the board", id);
            return Err(FetchError::TooFewClues {
                category: id,
                found,
                needed: config.clues_per_category,
            }
            .into());
        }
        categories.push(category.truncate(config.clues_per_category));
    }

    Ok(Board::new(categories))
}

/// Fetches a fresh pool and builds a whole board from it.
pub async fn new_board<S, C>(source: &S, config: GameConfig, pool_size: usize, selector: C) -> Result<Board>
where
    S: TriviaSource + ?Sized,
    C: CategorySelector,
{
    let pool = fetch_pool(source, pool_size, config.clues_per_category).await?;
    load_board(source, config, &pool, selector).await
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use alloc::collections::BTreeMap;
    use alloc::format;
    use alloc::string::ToString;
    use core::cell::RefCell;
    use futures::executor::block_on;

    /// In-memory source answering with canned bodies and recording what was asked.
    #[derive(Default)]
    pub(crate) struct CannedSource {
        pub listing: String,
        pub categories: BTreeMap<CategoryId, String>,
        pub requested: RefCell<Vec<CategoryId>>,
    }

    impl CannedSource {
        pub(crate) fn with_categories(count: u64, clues: usize) -> Self {
            let listing = (1..=count)
                .map(|id| format!(r#"{{"id":{id},"title":"cat {id}","clues_count":{clues}}}"#))
                .collect::<Vec<_>>()
                .join(",");
            let categories = (1..=count)
                .map(|id| (id, category_body(id, clues)))
                .collect();
            Self {
                listing: format!("[{listing}]"),
                categories,
                requested: RefCell::default(),
            }
        }
    }

    pub(crate) fn category_body(id: CategoryId, clues: usize) -> String {
        let clues = (0..clues)
            .map(|n| format!(r#"{{"question":"q{id}.{n}","answer":"a{id}.{n}","value":{}}}"#, (n + 1) * 100))
            .collect::<Vec<_>>()
            .join(",");
        format!(r#"{{"id":{id},"title":"Category {id}","clues":[{clues}]}}"#)
    }

    impl TriviaSource for CannedSource {
        async fn category_listing(&self, _count: usize) -> core::result::Result<String, FetchError> {
            Ok(self.listing.clone())
        }

        async fn category(&self, id: CategoryId) -> core::result::Result<String, FetchError> {
            self.requested.borrow_mut().push(id);
            self.categories
                .get(&id)
                .cloned()
                .ok_or_else(|| FetchError::Unreachable(format!("no category {id}")))
        }
    }

    #[test]
    fn category_body_parses_with_hidden_clues() {
        let category = category_from_body(
            r#"{"id":9,"title":"Math","clues_count":2,"clues":[
                {"question":"2+2","answer":4,"airdate":"1990-01-01"},
                {"question":" 1+1 ","answer":"2"}
            ]}"#,
        )
        .unwrap();

        assert_eq!(category.id(), 9);
        assert_eq!(category.title(), "Math");
        assert_eq!(category.clues().len(), 2);
        assert_eq!(category.clues()[0].answer(), "4");
        assert_eq!(category.clues()[1].question(), "1+1");
        assert!(category.clues().iter().all(|clue| clue.state().is_hidden()));
    }

    #[test]
    fn category_without_clues_is_malformed() {
        let err = category_from_body(r#"{"id":9,"title":"Math"}"#).unwrap_err();

        assert!(matches!(err, FetchError::Malformed(_)));
    }

    #[test]
    fn listing_drops_short_categories() {
        let pool = pool_from_listing(
            r#"[{"id":1,"title":"a","clues_count":5},
                {"id":2,"title":"b","clues_count":4},
                {"id":3,"title":"c","clue_count":10},
                {"id":4,"title":"d"}]"#,
            5,
        )
        .unwrap();

        assert_eq!(pool, [1, 3, 4]);
    }

    #[test]
    fn listing_keeps_each_id_once() {
        let pool = pool_from_listing(
            r#"[{"id":7,"clues_count":5},
                {"id":9,"clues_count":5},
                {"id":7,"clues_count":5},
                {"id":7,"clues_count":6}]"#,
            5,
        )
        .unwrap();

        assert_eq!(pool, [7, 9]);
    }

    #[test]
    fn listing_that_is_not_a_list_is_malformed() {
        let err = pool_from_listing(r#"{"error":"rate limited"}"#, 5).unwrap_err();

        assert!(matches!(err, FetchError::Malformed(_)));
    }

    #[test]
    fn load_category_surfaces_source_failure() {
        let source = CannedSource::default();

        let err = block_on(load_category(&source, 3)).unwrap_err();

        assert!(matches!(err, BoardError::Fetch(FetchError::Unreachable(_))));
    }

    #[test]
    fn board_has_configured_shape_and_hidden_clues() {
        let source = CannedSource::with_categories(100, 8);
        let config = GameConfig::default();

        let board = block_on(new_board(&source, config, 100, RandomCategorySelector::new(5))).unwrap();

        assert_eq!(board.columns(), 6);
        for category in board.categories() {
            assert_eq!(category.clues().len(), 5);
            assert!(category.clues().iter().all(|clue| clue.state().is_hidden()));
        }
        let first = board.categories()[0].id();
        assert_eq!(board.clue(0, 4).unwrap().question(), format!("q{first}.4"));
    }

    #[test]
    fn categories_load_in_selection_order() {
        let source = CannedSource::with_categories(30, 5);
        let pool: Vec<CategoryId> = (1..=30).collect();
        let expected = RandomCategorySelector::new(11).select(&pool, 6).unwrap();

        let board = block_on(load_board(
            &source,
            GameConfig::default(),
            &pool,
            RandomCategorySelector::new(11),
        ))
        .unwrap();

        assert_eq!(*source.requested.borrow(), expected);
        let columns: Vec<CategoryId> = board.categories().iter().map(Category::id).collect();
        assert_eq!(columns, expected);
    }

    #[test]
    fn one_malformed_category_fails_the_board() {
        let mut source = CannedSource::with_categories(6, 5);
        source
            .categories
            .insert(4, r#"{"id":4,"title":"broken"}"#.to_string());
        let pool: Vec<CategoryId> = (1..=6).collect();

        let result = block_on(load_board(
            &source,
            GameConfig::default(),
            &pool,
            RandomCategorySelector::new(0),
        ));

        assert!(matches!(result, Err(BoardError::Fetch(FetchError::Malformed(_)))));
    }

    #[test]
    fn short_category_fails_the_board() {
        let mut source = CannedSource::with_categories(6, 5);
        source.categories.insert(2, category_body(2, 3));
        let pool: Vec<CategoryId> = (1..=6).collect();

        let err = block_on(load_board(
            &source,
            GameConfig::default(),
            &pool,
            RandomCategorySelector::new(0),
        ))
        .unwrap_err();

        assert_eq!(
            err,
            BoardError::Fetch(FetchError::TooFewClues {
                category: 2,
                found: 3,
                needed: 5
            })
        );
    }

    #[test]
    fn pool_smaller_than_board_fails_before_fetching() {
        let source = CannedSource::with_categories(4, 5);

        let err = block_on(new_board(&source, GameConfig::default(), 100, RandomCategorySelector::new(0)))
            .unwrap_err();

        assert_eq!(
            err,
            BoardError::InsufficientPool {
                requested: 6,
                available: 4
            }
        );
        assert!(source.requested.borrow().is_empty());
    }
}
