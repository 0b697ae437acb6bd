use std::marker::PhantomData;

use sea_orm::{
    DbConn, DbErr, EntityTrait, PrimaryKeyTrait, QuerySelect, Select, TransactionError,
};

use blog_core::domain::Page;
use blog_core::error::RepoError;

/// Generic SeaORM repository: owns the injected pool for one entity type.
pub struct SeaOrmRepository<E>
where
    E: EntityTrait,
{
    pub(crate) db: DbConn,
    _entity: PhantomData<E>,
}

impl<E> SeaOrmRepository<E>
where
    E: EntityTrait,
{
    pub fn new(db: DbConn) -> Self {
        Self {
            db,
            _entity: PhantomData,
        }
    }

    pub(crate) async fn find_model(
        &self,
        id: <E::PrimaryKey as PrimaryKeyTrait>::ValueType,
    ) -> Result<Option<E::Model>, RepoError> {
        E::find_by_id(id).one(&self.db).await.map_err(db_error)
    }

    pub(crate) async fn fetch_page(
        &self,
        query: Select<E>,
        page: Page,
    ) -> Result<Vec<E::Model>, RepoError> {
        query
            .offset(page.skip)
            .limit(page.limit)
            .all(&self.db)
            .await
            .map_err(db_error)
    }
}

/// Map a SeaORM error onto the repository taxonomy.
pub(crate) fn db_error(err: DbErr) -> RepoError {
    match err {
        DbErr::Conn(e) => RepoError::Connection(e.to_string()),
        DbErr::ConnectionAcquire(e) => RepoError::Connection(e.to_string()),
        other => {
            let err_str = other.to_string();
            if err_str.contains("duplicate") || err_str.contains("unique") {
                RepoError::Constraint(err_str)
            } else {
                RepoError::Query(err_str)
            }
        }
    }
}

/// The transaction has already been rolled back when this is called.
pub(crate) fn transaction_error(err: TransactionError<DbErr>) -> RepoError {
    match err {
        TransactionError::Connection(e) | TransactionError::Transaction(e) => db_error(e),
    }
}
