//! Publisher management service

use crate::{
    error::{AppError, AppResult},
    models::publisher::{NewPublisher, Publisher, PublisherPageQuery, PublisherWithBooks},
    repository::Repository,
};

#[derive(Clone)]
pub struct PublishersService {
    repository: Repository,
}

impl PublishersService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Create a publisher; the unique name is checked before the write.
    pub async fn create(&self, publisher: NewPublisher) -> AppResult<Publisher> {
        if self
            .repository
            .publishers
            .find_by_name(&publisher.name)
            .await?
            .is_some()
        {
            return Err(AppError::Conflict(
                "A publisher with this name already exists.".to_string(),
            ));
        }

        self.repository.publishers.create(&publisher).await
    }

    /// Replace every scalar field of an existing publisher
    pub async fn update(&self, id: i64, publisher: NewPublisher) -> AppResult<Publisher> {
        if self.repository.publishers.find_by_id(id).await?.is_none() {
            return Err(AppError::NotFound(format!(
                "Publisher not found with ID: {}",
                id
            )));
        }

        self.repository.publishers.update(id, &publisher).await
    }

    pub async fn delete(&self, id: i64) -> AppResult<()> {
        let deleted = self.repository.publishers.delete(id).await?;
        if deleted == 0 {
            return Err(AppError::NotFound(format!(
                "Publisher not found with ID: {}",
                id
            )));
        }
        Ok(())
    }

    /// Publisher with its book summaries, loaded and projected in request scope
    pub async fn get_with_books(&self, id: i64) -> AppResult<PublisherWithBooks> {
        let publisher = self
            .repository
            .publishers
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Publisher not found with ID: {}", id)))?;

        let books = self.repository.publishers.books_for(publisher.id).await?;
        Ok(PublisherWithBooks::project(publisher, books))
    }

    /// Every publisher with book summaries; empty table is a not-found condition
    pub async fn list_with_books(&self) -> AppResult<Vec<PublisherWithBooks>> {
        let publishers = self.repository.publishers.find_all().await?;
        if publishers.is_empty() {
            return Err(AppError::NotFound("No publishers found".to_string()));
        }

        let mut projected = Vec::with_capacity(publishers.len());
        for publisher in publishers {
            let books = self.repository.publishers.books_for(publisher.id).await?;
            projected.push(PublisherWithBooks::project(publisher, books));
        }
        Ok(projected)
    }

    /// Filtered page of publishers; an empty page is a not-found condition
    pub async fn page_with_filters(
        &self,
        query: &PublisherPageQuery,
    ) -> AppResult<(Vec<PublisherWithBooks>, i64)> {
        let country = query.country.as_deref().unwrap_or("");
        let publisher_type = query.publisher_type.as_deref().unwrap_or("");
        let page = query.page.unwrap_or(0);
        let size = query.size.unwrap_or(10);

        let (publishers, total) = self
            .repository
            .publishers
            .find_page(country, publisher_type, page, size)
            .await?;

        if publishers.is_empty() {
            return Err(AppError::NotFound("No publishers found".to_string()));
        }

        let mut projected = Vec::with_capacity(publishers.len());
        for publisher in publishers {
            let books = self.repository.publishers.books_for(publisher.id).await?;
            projected.push(PublisherWithBooks::project(publisher, books));
        }
        Ok((projected, total))
    }
}
