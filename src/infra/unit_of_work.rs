//! Unit of Work pattern implementation.
//!
//! Reads go through the pooled repositories; every create/update runs
//! through [`UnitOfWork::transaction`], whose context hands out
//! repositories bound to a single database transaction.

use async_trait::async_trait;
use sea_orm::{DatabaseConnection, DatabaseTransaction, TransactionTrait};
use std::sync::Arc;

use super::repositories::{
    find_artist, find_venue, insert_artist, insert_show, insert_venue, update_artist,
    update_venue, ArtistRepository, ArtistStore, ShowRepository, ShowStore, VenueRepository,
    VenueStore,
};
use crate::domain::{Artist, ArtistFields, NewShow, Show, Venue, VenueFields};
use crate::errors::{AppError, AppResult};

/// Unit of Work trait for dependency injection.
///
/// Provides centralized access to all repositories and transaction management.
/// Note: This trait is not mockable directly due to generic methods.
/// For testing, implement it over mocked repositories.
#[async_trait]
pub trait UnitOfWork: Send + Sync {
    /// Get venue repository
    fn venues(&self) -> Arc<dyn VenueRepository>;

    /// Get artist repository
    fn artists(&self) -> Arc<dyn ArtistRepository>;

    /// Get show repository
    fn shows(&self) -> Arc<dyn ShowRepository>;

    /// Execute a closure within a transaction.
    ///
    /// Committed when the closure returns `Ok`, rolled back when it returns
    /// `Err`. Isolation is left at the engine default.
    async fn transaction<F, T>(&self, f: F) -> AppResult<T>
    where
        F: for<'a> FnOnce(TransactionContext<'a>) -> std::pin::Pin<
                Box<dyn std::future::Future<Output = AppResult<T>> + Send + 'a>,
            > + Send,
        T: Send;
}

/// Transaction context providing repository access within a transaction.
///
/// All repository operations performed through this context are part
/// of the same database transaction.
pub struct TransactionContext<'a> {
    txn: &'a DatabaseTransaction,
}

impl<'a> TransactionContext<'a> {
    fn new(txn: &'a DatabaseTransaction) -> Self {
        Self { txn }
    }

    pub fn venues(&self) -> TxVenueRepository<'_> {
        TxVenueRepository { txn: self.txn }
    }

    pub fn artists(&self) -> TxArtistRepository<'_> {
        TxArtistRepository { txn: self.txn }
    }

    pub fn shows(&self) -> TxShowRepository<'_> {
        TxShowRepository { txn: self.txn }
    }
}

/// Concrete implementation of UnitOfWork
pub struct Persistence {
    db: DatabaseConnection,
    venue_repo: Arc<VenueStore>,
    artist_repo: Arc<ArtistStore>,
    show_repo: Arc<ShowStore>,
}

impl Persistence {
    /// Create new UnitOfWork instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            venue_repo: Arc::new(VenueStore::new(db.clone())),
            artist_repo: Arc::new(ArtistStore::new(db.clone())),
            show_repo: Arc::new(ShowStore::new(db.clone())),
            db,
        }
    }

    async fn execute_transaction<F, T>(&self, f: F) -> AppResult<T>
    where
        F: for<'a> FnOnce(TransactionContext<'a>) -> std::pin::Pin<
                Box<dyn std::future::Future<Output = AppResult<T>> + Send + 'a>,
            > + Send,
        T: Send,
    {
        let txn = self.db.begin().await.map_err(AppError::from)?;

        let ctx = TransactionContext::new(&txn);

        match f(ctx).await {
            Ok(result) => {
                txn.commit().await.map_err(AppError::from)?;
                Ok(result)
            }
            Err(e) => {
                if let Err(rollback_err) = txn.rollback().await {
                    tracing::error!("Transaction rollback failed: {}", rollback_err);
                }
                Err(e)
            }
        }
    }
}

#[async_trait]
impl UnitOfWork for Persistence {
    fn venues(&self) -> Arc<dyn VenueRepository> {
        self.venue_repo.clone()
    }

    fn artists(&self) -> Arc<dyn ArtistRepository> {
        self.artist_repo.clone()
    }

    fn shows(&self) -> Arc<dyn ShowRepository> {
        self.show_repo.clone()
    }

    async fn transaction<F, T>(&self, f: F) -> AppResult<T>
    where
        F: for<'a> FnOnce(TransactionContext<'a>) -> std::pin::Pin<
                Box<dyn std::future::Future<Output = AppResult<T>> + Send + 'a>,
            > + Send,
        T: Send,
    {
        self.execute_transaction(f).await
    }
}

/// Transaction-aware venue repository.
pub struct TxVenueRepository<'a> {
    txn: &'a DatabaseTransaction,
}

impl<'a> TxVenueRepository<'a> {
    pub async fn find_by_id(&self, id: i32) -> AppResult<Option<Venue>> {
        find_venue(self.txn, id).await
    }

    pub async fn exists(&self, id: i32) -> AppResult<bool> {
        Ok(self.find_by_id(id).await?.is_some())
    }

    pub async fn create(&self, fields: VenueFields) -> AppResult<Venue> {
        insert_venue(self.txn, fields).await
    }

    /// Overwrite every field; `NotFound` if the venue does not exist
    pub async fn update(&self, id: i32, fields: VenueFields) -> AppResult<Venue> {
        update_venue(self.txn, id, fields).await
    }
}

/// Transaction-aware artist repository.
pub struct TxArtistRepository<'a> {
    txn: &'a DatabaseTransaction,
}

impl<'a> TxArtistRepository<'a> {
    pub async fn find_by_id(&self, id: i32) -> AppResult<Option<Artist>> {
        find_artist(self.txn, id).await
    }

    pub async fn exists(&self, id: i32) -> AppResult<bool> {
        Ok(self.find_by_id(id).await?.is_some())
    }

    pub async fn create(&self, fields: ArtistFields) -> AppResult<Artist> {
        insert_artist(self.txn, fields).await
    }

    pub async fn update(&self, id: i32, fields: ArtistFields) -> AppResult<Artist> {
        update_artist(self.txn, id, fields).await
    }
}

/// Transaction-aware show repository.
pub struct TxShowRepository<'a> {
    txn: &'a DatabaseTransaction,
}

impl<'a> TxShowRepository<'a> {
    pub async fn create(&self, new_show: NewShow) -> AppResult<Show> {
        insert_show(self.txn, new_show).await
    }
}

/// Simpler API for executing transactional operations.
///
/// This helper macro reduces boilerplate when using transactions.
#[macro_export]
macro_rules! with_transaction {
    ($uow:expr, |$ctx:ident| $body:expr) => {
        $uow.transaction(|$ctx| Box::pin(async move { $body })).await
    };
}
