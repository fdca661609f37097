//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{auth, authors, books, categories, health, publishers};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Biblio API",
        version = "1.0.0",
        description = "Library catalog and user registration REST API",
        license(name = "AGPL-3.0", url = "https://www.gnu.org/licenses/agpl-3.0.html")
    ),
    servers(
        (url = "/api", description = "API root")
    ),
    paths(
        // Health
        health::health_check,
        // Auth
        auth::register,
        auth::get_user,
        // Authors
        authors::list_authors,
        authors::page_authors,
        authors::get_author,
        authors::create_author,
        authors::update_author,
        authors::delete_author,
        // Books
        books::list_books,
        books::page_books,
        books::get_book,
        books::create_book,
        books::update_book,
        books::delete_book,
        // Publishers
        publishers::list_publishers,
        publishers::page_publishers,
        publishers::get_publisher,
        publishers::create_publisher,
        publishers::update_publisher,
        publishers::delete_publisher,
        // Categories
        categories::list_categories,
        categories::page_categories,
        categories::get_category,
        categories::create_category,
        categories::update_category,
        categories::delete_category,
    ),
    components(
        schemas(
            // Auth
            crate::models::user::User,
            crate::models::user::RegisterUser,
            // Authors
            crate::models::author::Author,
            crate::models::author::AuthorPayload,
            crate::models::author::AuthorWithBooks,
            crate::models::author::AuthorSummary,
            // Books
            crate::models::book::Book,
            crate::models::book::BookPayload,
            crate::models::book::BookDetails,
            crate::models::book::BookSummary,
            // Publishers
            crate::models::publisher::Publisher,
            crate::models::publisher::PublisherPayload,
            crate::models::publisher::PublisherWithBooks,
            crate::models::publisher::PublisherSummary,
            // Categories
            crate::models::category::Category,
            crate::models::category::CategoryPayload,
            crate::models::category::CategoryWithBooks,
            crate::models::category::CategorySummary,
            // Health
            health::HealthResponse,
            // Errors
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "auth", description = "User registration and lookup"),
        (name = "authors", description = "Author management"),
        (name = "books", description = "Book management"),
        (name = "publishers", description = "Publisher management"),
        (name = "categories", description = "Category management")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
