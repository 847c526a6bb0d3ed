use crate::shared::api_utils::{get_json, ApiError};
use contracts::domain::a002_booking::BookingRecord;
use contracts::shared::list_response::{parse_list_response, ListPage};

const BOOKING_PATH: &str = "/staff/booking";

/// Бронирования для недельной сводки (тот же конверт `{data: {data, total}}`, что и у отзывов)
pub async fn fetch_booking_chart() -> Result<ListPage<BookingRecord>, ApiError> {
    let body = get_json(BOOKING_PATH).await?;
    parse_list_response(body).map_err(|e| ApiError::Shape(format!("{:#}", e)))
}
