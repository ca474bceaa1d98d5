use sea_orm::DatabaseConnection;

/// Application state containing shared resources.
///
/// Constructed once at startup and handed to handlers through `web::Data`;
/// nothing in the service reaches for a global.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Database connection shared by every handler
    pub db: DatabaseConnection,
}

impl AppState {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}
