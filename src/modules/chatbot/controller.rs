use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::instrument;

use campusdesk_core::AppError;

use crate::metrics::track_chat_failure;
use crate::modules::chatbot::model::{ChatReply, ChatRequest};
use crate::modules::chatbot::render;
use crate::modules::chatbot::service::ChatbotService;
use crate::modules::chatbot::source::PgRecordSource;
use crate::state::AppState;
use crate::validator::ValidatedJson;

pub const UNREADABLE_REQUEST: &str =
    "⚠️ I couldn't read that question. Please check your selection and keep messages under 1000 characters.";

/// Answer a chat message
///
/// Replies are HTML or plain-text fragments. Unknown questions, missing
/// selections and empty results are all normal replies; a storage fault
/// answers 500 with a generic apology in the same shape. Bodies that fail
/// to parse or validate keep their 400/422 status but still carry `reply`.
#[utoipa::path(
    post,
    path = "/api/chat",
    request_body = ChatRequest,
    responses(
        (status = 200, description = "Chatbot reply", body = ChatReply),
        (status = 400, description = "Unreadable request body", body = ChatReply),
        (status = 422, description = "Message too long", body = ChatReply),
        (status = 500, description = "Generic apology reply", body = ChatReply)
    ),
    tag = "Chatbot"
)]
#[instrument(skip(state, payload))]
pub async fn chat(
    State(state): State<AppState>,
    payload: Result<ValidatedJson<ChatRequest>, AppError>,
) -> Response {
    let request = match payload {
        Ok(ValidatedJson(request)) => request,
        Err(rejection) => {
            tracing::warn!(status = %rejection.status, error = %rejection.error, "chat request rejected");
            let reply = UNREADABLE_REQUEST.to_string();
            return (rejection.status, Json(ChatReply { reply })).into_response();
        }
    };

    match answer(&state, &request).await {
        Ok(reply) => Json(ChatReply { reply }).into_response(),
        Err(err) => {
            tracing::error!(error = %err, message = %request.message, "chat query failed");
            track_chat_failure();

            let detail = err.error.to_string();
            let reply = render::fault(
                state
                    .portal_config
                    .expose_chat_errors
                    .then_some(detail.as_str()),
            );
            (StatusCode::INTERNAL_SERVER_ERROR, Json(ChatReply { reply })).into_response()
        }
    }
}

/// One pooled connection per chat request; dropping `conn` on any return
/// path hands it back to the pool.
async fn answer(state: &AppState, request: &ChatRequest) -> Result<String, AppError> {
    let mut conn = state.db.acquire().await?;
    let mut source = PgRecordSource::new(&mut conn);

    ChatbotService::answer_query(
        &mut source,
        &request.message,
        &request.selection(),
        state.portal_config.selection_mode,
    )
    .await
}
