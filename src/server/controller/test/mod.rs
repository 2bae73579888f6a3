use axum::http::StatusCode;
use axum_test::TestServer;
use serde_json::json;
use test_utils::{builder::TestBuilder, factory};

use crate::{
    model::{class::ClassDto, student::StudentDto},
    server::{router, state::AppState},
};


/// Builds a test server running the full router on an in-memory database.
///
/// Returns the server together with a handle to its database for seeding rows.
async fn test_server() -> (TestServer, sea_orm::DatabaseConnection) {
    let test = TestBuilder::new()
        .with_school_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.unwrap();

    (server_for(db.clone()), db)
}

/// Builds a test server running the full router on the provided database.
fn server_for(db: sea_orm::DatabaseConnection) -> TestServer {
    let app = router::router().with_state(AppState::new(db));

    TestServer::new(app).unwrap()
}
