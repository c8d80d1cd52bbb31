//! Pagination and the listing pipeline: search, category filter, paginate.

use std::num::NonZeroUsize;

use serde::Serialize;

use crate::{
    catalog::{self, ArticleCatalog, CategoryFilter},
    Article, POSTS_PER_PAGE,
};

/// A validated 1-based page number and page size.
///
/// Both values are non-zero by construction, so the zero page size case never
/// reaches [`paginate`]. Raw client input goes through [`PageRequest::from_raw`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: NonZeroUsize,
    limit: NonZeroUsize,
}

impl PageRequest {
    pub fn new(page: NonZeroUsize, limit: NonZeroUsize) -> Self {
        Self { page, limit }
    }

    pub fn first(limit: NonZeroUsize) -> Self {
        Self::new(NonZeroUsize::MIN, limit)
    }

    /// Clamp untrusted query-string values.
    ///
    /// A missing, unparsable or non-positive page becomes 1. A missing,
    /// unparsable or non-positive limit becomes `default_limit`.
    pub fn from_raw(page: Option<&str>, limit: Option<&str>, default_limit: usize) -> Self {
        let default_limit = NonZeroUsize::new(default_limit).unwrap_or(NonZeroUsize::MIN);
        let page = parse_positive(page).unwrap_or(NonZeroUsize::MIN);
        let limit = parse_positive(limit).unwrap_or(default_limit);
        Self { page, limit }
    }

    pub fn page(&self) -> usize {
        self.page.get()
    }

    pub fn limit(&self) -> usize {
        self.limit.get()
    }

    fn offset(&self) -> usize {
        (self.page.get() - 1).saturating_mul(self.limit.get())
    }
}

fn parse_positive(raw: Option<&str>) -> Option<NonZeroUsize> {
    let value = raw?.trim().parse::<i64>().ok()?;
    usize::try_from(value).ok().and_then(NonZeroUsize::new)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationMeta {
    pub page: usize,
    pub limit: usize,
    pub total: usize,
    pub total_pages: usize,
}

/// One window of a sequence plus the totals of the whole sequence.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub meta: PaginationMeta,
}

impl<T> Page<T> {
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            meta: self.meta,
        }
    }
}

/// Slice `[(page-1)*limit, page*limit)` out of `items`.
///
/// Pages past the end are empty but report the same totals.
pub fn paginate<T>(items: Vec<T>, request: PageRequest) -> Page<T> {
    let total = items.len();
    let meta = PaginationMeta {
        page: request.page(),
        limit: request.limit(),
        total,
        total_pages: total.div_ceil(request.limit()),
    };
    let items = items
        .into_iter()
        .skip(request.offset())
        .take(request.limit())
        .collect();
    Page { items, meta }
}

/// Inputs of one listing render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingQuery {
    pub query: String,
    pub category: CategoryFilter,
    pub page: PageRequest,
}

impl ListingQuery {
    /// Unfiltered first page, where the featured article is shown.
    pub fn is_landing(&self) -> bool {
        self.query.is_empty() && self.category.is_all() && self.page.page() == 1
    }
}

/// Result of [`compose_listing`].
#[derive(Debug, Clone)]
pub struct Listing<'a> {
    pub page: Page<&'a Article>,
    /// Computed over the whole catalog, independent of the current filters.
    pub trending: Vec<&'a Article>,
    /// First featured article of the whole catalog.
    pub featured: Option<&'a Article>,
}

/// Search then category filter, as the listing applies them.
///
/// Unlike [`catalog::search`], an empty query here means "no search".
pub fn filter_articles<'a>(
    catalog: &'a ArticleCatalog,
    query: &str,
    category: &CategoryFilter,
) -> Vec<&'a Article> {
    let searched = if query.is_empty() {
        catalog.articles().iter().collect()
    } else {
        catalog::search(catalog.articles(), query)
    };
    if category.is_all() {
        searched
    } else {
        catalog::filter_by_category(searched, category)
    }
}

pub fn compose_listing<'a>(
    catalog: &'a ArticleCatalog,
    query: &ListingQuery,
    trending_limit: usize,
) -> Listing<'a> {
    let filtered = filter_articles(catalog, &query.query, &query.category);
    Listing {
        page: paginate(filtered, query.page),
        trending: catalog.trending(trending_limit),
        featured: catalog.featured().into_iter().next(),
    }
}

/// Search box, category tabs and current page of the listing screen.
///
/// Changing the search text or the category moves back to page 1, so a page
/// number never outlives the result set it was chosen from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingState {
    query: String,
    category: CategoryFilter,
    page: NonZeroUsize,
    limit: NonZeroUsize,
}

impl Default for ListingState {
    fn default() -> Self {
        Self::new(NonZeroUsize::new(POSTS_PER_PAGE).unwrap_or(NonZeroUsize::MIN))
    }
}

impl ListingState {
    pub fn new(limit: NonZeroUsize) -> Self {
        Self {
            query: String::new(),
            category: CategoryFilter::All,
            page: NonZeroUsize::MIN,
            limit,
        }
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        self.page = NonZeroUsize::MIN;
    }

    pub fn set_category(&mut self, category: CategoryFilter) {
        self.category = category;
        self.page = NonZeroUsize::MIN;
    }

    pub fn go_to_page(&mut self, page: NonZeroUsize) {
        self.page = page;
    }

    pub fn page(&self) -> usize {
        self.page.get()
    }

    pub fn to_query(&self) -> ListingQuery {
        ListingQuery {
            query: self.query.clone(),
            category: self.category.clone(),
            page: PageRequest::new(self.page, self.limit),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::num::NonZeroUsize;

    use super::{compose_listing, filter_articles, paginate, ListingState, PageRequest};
    use crate::{
        test_support::{article, numbered},
        ArticleCatalog, Category, CategoryFilter,
    };

    fn nz(value: usize) -> NonZeroUsize {
        NonZeroUsize::new(value).expect("non-zero")
    }

    #[test]
    fn paginate_returns_tail_page() {
        let items: Vec<usize> = (0..15).collect();
        let page = paginate(items, PageRequest::new(nz(3), nz(6)));
        assert_eq!(page.items, vec![12, 13, 14]);
        assert_eq!(page.meta.total, 15);
        assert_eq!(page.meta.total_pages, 3);
        assert_eq!(page.meta.page, 3);
        assert_eq!(page.meta.limit, 6);
    }

    #[test]
    fn paginate_past_last_page_is_empty_with_same_totals() {
        let items: Vec<usize> = (0..15).collect();
        let first = paginate(items.clone(), PageRequest::new(nz(1), nz(6)));
        let beyond = paginate(items, PageRequest::new(nz(4), nz(6)));
        assert!(beyond.items.is_empty());
        assert_eq!(beyond.meta.total, first.meta.total);
        assert_eq!(beyond.meta.total_pages, first.meta.total_pages);

        let huge = paginate(vec![1, 2, 3], PageRequest::new(NonZeroUsize::MAX, nz(10)));
        assert!(huge.items.is_empty());
    }

    #[test]
    fn paginate_empty_sequence_has_zero_pages() {
        let page = paginate(Vec::<u8>::new(), PageRequest::first(nz(10)));
        assert!(page.items.is_empty());
        assert_eq!(page.meta.total, 0);
        assert_eq!(page.meta.total_pages, 0);
    }

    #[test]
    fn page_request_from_raw_clamps_invalid_input() {
        let request = PageRequest::from_raw(None, None, 10);
        assert_eq!((request.page(), request.limit()), (1, 10));

        let request = PageRequest::from_raw(Some("0"), Some("-5"), 10);
        assert_eq!((request.page(), request.limit()), (1, 10));

        let request = PageRequest::from_raw(Some("abc"), Some("0"), 6);
        assert_eq!((request.page(), request.limit()), (1, 6));

        let request = PageRequest::from_raw(Some(" 3 "), Some("6"), 10);
        assert_eq!((request.page(), request.limit()), (3, 6));

        let request = PageRequest::from_raw(None, None, 0);
        assert_eq!(request.limit(), 1);
    }

    #[test]
    fn listing_scenario_fifteen_articles_page_three() {
        let catalog = ArticleCatalog::new(numbered(15)).expect("unique slugs");
        let mut state = ListingState::new(nz(6));
        state.go_to_page(nz(3));
        let listing = compose_listing(&catalog, &state.to_query(), 5);
        let ids: Vec<u32> = listing.page.items.iter().map(|article| article.id).collect();
        assert_eq!(ids, vec![13, 14, 15]);
        assert_eq!(listing.page.meta.total_pages, 3);
    }

    #[test]
    fn listing_treats_empty_query_as_no_filter() {
        let catalog = ArticleCatalog::new(numbered(4)).expect("unique slugs");
        assert_eq!(filter_articles(&catalog, "", &CategoryFilter::All).len(), 4);
        // the raw search contract is different
        assert!(catalog.search("").is_empty());
    }

    #[test]
    fn listing_widgets_ignore_filters() {
        let mut articles = vec![
            article(1, "a", "Alpha", Category::Backend, &["Rust"], 10),
            article(2, "b", "Beta", Category::Frontend, &["React"], 30),
            article(3, "c", "Gamma", Category::Frontend, &["CSS"], 20),
        ];
        articles[0].featured = true;
        let catalog = ArticleCatalog::new(articles).expect("unique slugs");

        let mut state = ListingState::default();
        state.set_query("gamma");
        state.set_category(CategoryFilter::Only(Category::Frontend));
        let query = state.to_query();
        assert!(!query.is_landing());
        let listing = compose_listing(&catalog, &query, 2);

        let found: Vec<&str> = listing.page.items.iter().map(|a| a.slug.as_str()).collect();
        assert_eq!(found, vec!["c"]);
        let trending: Vec<&str> = listing.trending.iter().map(|a| a.slug.as_str()).collect();
        assert_eq!(trending, vec!["b", "c"]);
        assert_eq!(listing.featured.map(|a| a.slug.as_str()), Some("a"));
    }

    #[test]
    fn changing_filters_resets_to_first_page() {
        let catalog = ArticleCatalog::new(numbered(40)).expect("unique slugs");
        let mut state = ListingState::new(nz(2));
        state.set_query("post");
        state.go_to_page(nz(2));
        assert_eq!(state.page(), 2);

        state.set_category(CategoryFilter::Only(Category::Mobile));
        assert_eq!(state.page(), 1);
        let listing = compose_listing(&catalog, &state.to_query(), 5);
        assert_eq!(listing.page.meta.page, 1);
        assert!(!listing.page.items.is_empty());
        assert!(listing
            .page
            .items
            .iter()
            .all(|article| article.category == Category::Mobile));

        state.go_to_page(nz(3));
        state.set_query("post 1");
        assert_eq!(state.page(), 1);
    }

    #[test]
    fn landing_query_detection() {
        let state = ListingState::default();
        assert!(state.to_query().is_landing());
    }
}
