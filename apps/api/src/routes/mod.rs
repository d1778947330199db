pub mod auth;
pub mod careers;
pub mod courses;
pub mod health;
pub mod insights;
pub mod interview;
pub mod profile;
pub mod resume;

use axum::{
    routing::{delete, get, post, put},
    Router,
};

use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health::welcome))
        .route("/health", get(health::health_handler))
        // Auth
        .route("/api/auth/register", post(auth::handle_register))
        .route("/api/auth/login", post(auth::handle_login))
        // Profile
        .route("/api/profile", get(profile::handle_get_own_profile))
        .route("/api/profile/update", put(profile::handle_update_profile))
        .route("/api/profile/:id", get(profile::handle_get_profile))
        // Courses
        .route(
            "/api/courses",
            get(courses::handle_list_courses).post(courses::handle_create_course),
        )
        .route("/api/courses/my/courses", get(courses::handle_my_courses))
        .route("/api/courses/enrolled", get(courses::handle_enrolled_courses))
        .route(
            "/api/courses/:id",
            get(courses::handle_get_course)
                .put(courses::handle_update_course)
                .delete(courses::handle_delete_course),
        )
        .route("/api/courses/:id/enroll", post(courses::handle_enroll))
        // Resume
        .route(
            "/api/resume",
            post(resume::handle_create_resume).get(resume::handle_list_resumes),
        )
        .route("/api/resume/:id", delete(resume::handle_delete_resume))
        // AI content
        .route("/api/insights/:industry", get(insights::handle_get_insights))
        .route(
            "/api/interview/generate",
            post(interview::handle_generate_questions),
        )
        .route(
            "/api/interview/results",
            post(interview::handle_save_results),
        )
        .route("/api/careers/recommend", post(careers::handle_recommend))
        .with_state(state)
}
