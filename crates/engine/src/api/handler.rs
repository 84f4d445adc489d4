//! Request dispatch.
//!
//! Every request first applies any scheduled reset that has come due, so the
//! renderer never acts on a stale board.

use homework_domain::DomainError;
use homework_shared::{ClientRequest, ErrorCode, ServerResponse};

use crate::api::snapshot::task_view;
use crate::app::{AppError, HomeworkApp};

/// Handle one raw JSON request line.
pub fn handle_line(app: &mut HomeworkApp, line: &str) -> ServerResponse {
    match serde_json::from_str::<ClientRequest>(line) {
        Ok(request) => handle_request(app, request),
        Err(e) => {
            tracing::warn!(error = %e, "Malformed request");
            ServerResponse::error(ErrorCode::BadRequest, format!("Malformed request: {}", e))
        }
    }
}

/// Handle one parsed request.
pub fn handle_request(app: &mut HomeworkApp, request: ClientRequest) -> ServerResponse {
    app.apply_scheduled_resets();
    dispatch(app, request).unwrap_or_else(|e| error_response(&e))
}

fn dispatch(app: &mut HomeworkApp, request: ClientRequest) -> Result<ServerResponse, AppError> {
    match request {
        ClientRequest::GetBoard => Ok(ServerResponse::Board {
            snapshot: app.snapshot(),
        }),
        ClientRequest::ToggleTask {
            character,
            cycle,
            task_id,
        } => {
            app.toggle(character, cycle, task_id)?;
            let task = task_view(app.board(), character, cycle, task_id)?;
            let status = app.status(character)?;
            Ok(ServerResponse::TaskToggled {
                character,
                cycle,
                task,
                status,
            })
        }
        ClientRequest::ResetCycle { cycle } => {
            let outcome = app.reset_cycle(cycle);
            Ok(ServerResponse::CycleReset {
                cycle,
                characters: u32::try_from(outcome.characters).unwrap_or(u32::MAX),
            })
        }
    }
}

fn error_response(err: &AppError) -> ServerResponse {
    let code = match err {
        AppError::NotFound { .. } => ErrorCode::NotFound,
        AppError::Domain(DomainError::Validation(_)) => ErrorCode::ValidationError,
        AppError::Domain(DomainError::Parse(_)) => ErrorCode::BadRequest,
        AppError::Domain(DomainError::NotFound { .. }) => ErrorCode::NotFound,
    };
    ServerResponse::error(code, err.to_string())
}
