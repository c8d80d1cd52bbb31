use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::StatusCode,
    response::Json,
};
use blogdev_shared::{
    comments_store::NewCommentInput, contact_store::NewContactInput, listing, ArticleListItem,
    CategoryFilter, IntakeError, PageRequest,
};

use crate::{
    models::{
        CategoriesResponse, CommentResponse, CommentsQuery, CommentsResponse, ErrorResponse,
        LimitQuery, ListPostsQuery, MessageResponse, NewsletterRequest, PostDetailResponse,
        PostListResponse, PostsResponse, TagsResponse,
    },
    state::AppState,
};

type ApiError = (StatusCode, Json<ErrorResponse>);

pub async fn list_posts(
    State(state): State<AppState>,
    Query(query): Query<ListPostsQuery>,
) -> Json<PostListResponse> {
    let search = query.q.unwrap_or_default();
    let category = CategoryFilter::parse(query.category.as_deref());
    let page = PageRequest::from_raw(
        query.page.as_deref(),
        query.limit.as_deref(),
        state.config.page_size,
    );

    let filtered = listing::filter_articles(&state.catalog, &search, &category);
    let page = listing::paginate(filtered, page).map(ArticleListItem::from);
    tracing::debug!(
        query = %search,
        category = ?category,
        total = page.meta.total,
        "listed posts"
    );

    Json(PostListResponse {
        posts: page.items,
        pagination: page.meta,
    })
}

pub async fn get_post(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<PostDetailResponse>, ApiError> {
    let Some(post) = state.catalog.find_by_slug(&slug) else {
        return Err(not_found("Article not found"));
    };
    let related_posts = state
        .catalog
        .related(&slug, state.config.related_limit)
        .into_iter()
        .map(ArticleListItem::from)
        .collect();

    Ok(Json(PostDetailResponse {
        post: post.clone(),
        related_posts,
    }))
}

pub async fn trending_posts(
    State(state): State<AppState>,
    Query(query): Query<LimitQuery>,
) -> Json<PostsResponse> {
    let limit = parse_limit(query.limit.as_deref()).unwrap_or(state.config.trending_limit);
    let posts = state
        .catalog
        .trending(limit)
        .into_iter()
        .map(ArticleListItem::from)
        .collect();
    Json(PostsResponse { posts })
}

pub async fn featured_posts(State(state): State<AppState>) -> Json<PostsResponse> {
    let posts = state
        .catalog
        .featured()
        .into_iter()
        .map(ArticleListItem::from)
        .collect();
    Json(PostsResponse { posts })
}

pub async fn list_categories(State(state): State<AppState>) -> Json<CategoriesResponse> {
    Json(CategoriesResponse {
        categories: state.catalog.categories(),
    })
}

pub async fn list_tags(State(state): State<AppState>) -> Json<TagsResponse> {
    Json(TagsResponse {
        tags: state.catalog.tags(),
    })
}

pub async fn list_comments(
    State(state): State<AppState>,
    Query(query): Query<CommentsQuery>,
) -> Result<Json<CommentsResponse>, ApiError> {
    let Some(post_slug) = query
        .post_slug
        .as_deref()
        .map(str::trim)
        .filter(|slug| !slug.is_empty())
    else {
        return Err(bad_request("postSlug is required"));
    };
    Ok(Json(CommentsResponse {
        comments: state.comments.list_for_post(post_slug),
    }))
}

pub async fn create_comment(
    State(state): State<AppState>,
    payload: Result<Json<NewCommentInput>, JsonRejection>,
) -> Result<(StatusCode, Json<CommentResponse>), ApiError> {
    let Json(input) = payload.map_err(invalid_body)?;

    if let Some(slug) = input
        .post_slug
        .as_deref()
        .map(str::trim)
        .filter(|slug| !slug.is_empty())
    {
        if state.catalog.find_by_slug(slug).is_none() {
            return Err(not_found("Article not found"));
        }
    }

    let comment = state.comments.add(input).map_err(intake_error)?;
    tracing::info!(post_slug = %comment.post_slug, comment_id = %comment.id, "comment created");
    Ok((StatusCode::CREATED, Json(CommentResponse { comment })))
}

pub async fn submit_contact(
    State(state): State<AppState>,
    payload: Result<Json<NewContactInput>, JsonRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    let Json(input) = payload.map_err(invalid_body)?;
    state.contact.submit(input).map_err(intake_error)?;
    Ok(Json(MessageResponse {
        message: "Message sent successfully! I will reply as soon as possible.".to_string(),
    }))
}

pub async fn subscribe_newsletter(
    State(state): State<AppState>,
    payload: Result<Json<NewsletterRequest>, JsonRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    let Json(request) = payload.map_err(invalid_body)?;
    state
        .newsletter
        .subscribe(request.email)
        .map_err(intake_error)?;
    Ok(Json(MessageResponse {
        message: "Subscription confirmed! You will receive the best articles.".to_string(),
    }))
}

fn parse_limit(raw: Option<&str>) -> Option<usize> {
    raw?.trim().parse::<usize>().ok().filter(|limit| *limit > 0)
}

fn error_response(status: StatusCode, message: &str, reasons: Vec<String>) -> ApiError {
    (
        status,
        Json(ErrorResponse {
            error: message.to_string(),
            code: status.as_u16(),
            reasons,
        }),
    )
}

fn not_found(message: &str) -> ApiError {
    error_response(StatusCode::NOT_FOUND, message, Vec::new())
}

fn bad_request(message: &str) -> ApiError {
    error_response(StatusCode::BAD_REQUEST, message, Vec::new())
}

fn invalid_body(rejection: JsonRejection) -> ApiError {
    tracing::debug!("rejected request body: {}", rejection.body_text());
    bad_request("Invalid request body")
}

fn intake_error(err: IntakeError) -> ApiError {
    let status = match err {
        IntakeError::Invalid(_) => StatusCode::BAD_REQUEST,
        IntakeError::AlreadySubscribed(_) => StatusCode::CONFLICT,
    };
    error_response(status, &err.to_string(), err.reasons())
}
