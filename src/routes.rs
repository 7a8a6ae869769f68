use crate::{
    health::health_check,
    state::AppState,
    task::{self, CreateTaskRequest, DeleteTaskRequest, ErrorResponse, TaskListResponse, TaskResponse},
};
use axum::{
    routing::{delete, get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
    paths(
        task::task_handlers::add_task,
        task::task_handlers::delete_task,
        task::task_handlers::delete_task_by_id,
    ),
    components(
        schemas(
            CreateTaskRequest,
            DeleteTaskRequest,
            TaskResponse,
            TaskListResponse,
            ErrorResponse,
        )
    ),
    tags(
        (name = "tasks", description = "Task management endpoints")
    )
)]
struct ApiDoc;

pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .route("/", get(task::index))
        .route("/static/script.js", get(task::script))
        .route("/add_task", post(task::add_task))
        .route("/delete_task", post(task::delete_task))
        .route("/tasks/:id", delete(task::delete_task_by_id))
        .route("/health", get(health_check))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
