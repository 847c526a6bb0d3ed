use crate::shared::api_utils::{get_json, ApiError};
use contracts::domain::a001_review::ReviewRecord;
use contracts::shared::list_response::{parse_list_response, ListPage};

const REVIEWS_PATH: &str = "/staff/review";

/// Получить отзывы. Backend пока не поддерживает постраничную выдачу,
/// поэтому запрос уходит без параметров.
pub async fn fetch_reviews() -> Result<ListPage<ReviewRecord>, ApiError> {
    let body = get_json(REVIEWS_PATH).await?;
    parse_list_response(body).map_err(|e| ApiError::Shape(format!("{:#}", e)))
}
