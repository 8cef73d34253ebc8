use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    IntoActiveModel, NotSet, QueryFilter, QueryOrder, Set, Value,
};
use tracing::debug;

use crate::{
    entities::{director, genre, movie},
    error::{AppError, AppResult, Resource},
    models::{MovieFilter, MovieInput, MoviePatch, NameInput, NamePatch},
};

/// Handle to the relational store. Cheap to clone; every request gets the
/// same pool.
#[derive(Clone)]
pub struct Store {
    db: DatabaseConnection,
}

impl Store {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Underlying connection, for queries that go past the HTTP surface
    /// (the integration tests walk entity relations through it).
    pub fn db(&self) -> &DatabaseConnection {
        &self.db
    }

    pub async fn list_movies(&self, filter: MovieFilter) -> AppResult<Vec<movie::Model>> {
        let mut query = movie::Entity::find();
        if let Some(director_id) = filter.director_id {
            query = query.filter(movie::Column::DirectorId.eq(director_id));
        }
        if let Some(genre_id) = filter.genre_id {
            query = query.filter(movie::Column::GenreId.eq(genre_id));
        }
        Ok(query.order_by_asc(movie::Column::Id).all(&self.db).await?)
    }

    pub async fn get_movie(&self, id: i32) -> AppResult<movie::Model> {
        movie::Entity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or_else(|| AppError::not_found(Resource::Movie, id))
    }

    pub async fn create_movie(&self, input: MovieInput) -> AppResult<i32> {
        let model = movie::ActiveModel {
            id: NotSet,
            title: Set(input.title),
            description: Set(input.description),
            trailer: Set(input.trailer),
            year: Set(input.year),
            rating: Set(input.rating),
            genre_id: Set(input.genre_id),
            director_id: Set(input.director_id),
        };
        let id = movie::Entity::insert(model).exec(&self.db).await?.last_insert_id;
        debug!(id, "movie created");
        Ok(id)
    }

    pub async fn replace_movie(&self, id: i32, input: MovieInput) -> AppResult<()> {
        let mut active = self.get_movie(id).await?.into_active_model();
        active.title = Set(input.title);
        active.description = Set(input.description);
        active.trailer = Set(input.trailer);
        active.year = Set(input.year);
        active.rating = Set(input.rating);
        active.genre_id = Set(input.genre_id);
        active.director_id = Set(input.director_id);
        updated(active.update(&self.db).await, Resource::Movie, id)?;
        debug!(id, "movie replaced");
        Ok(())
    }

    pub async fn patch_movie(&self, id: i32, patch: MoviePatch) -> AppResult<()> {
        let mut active = self.get_movie(id).await?.into_active_model();
        assign(&mut active.title, patch.title);
        assign(&mut active.description, patch.description);
        assign(&mut active.trailer, patch.trailer);
        assign(&mut active.year, patch.year);
        assign(&mut active.rating, patch.rating);
        assign(&mut active.genre_id, patch.genre_id);
        assign(&mut active.director_id, patch.director_id);
        if active.is_changed() {
            updated(active.update(&self.db).await, Resource::Movie, id)?;
        }
        debug!(id, "movie patched");
        Ok(())
    }

    pub async fn delete_movie(&self, id: i32) -> AppResult<()> {
        let res = movie::Entity::delete_by_id(id).exec(&self.db).await?;
        if res.rows_affected == 0 {
            return Err(AppError::not_found(Resource::Movie, id));
        }
        debug!(id, "movie deleted");
        Ok(())
    }

    pub async fn list_directors(&self) -> AppResult<Vec<director::Model>> {
        Ok(director::Entity::find().order_by_asc(director::Column::Id).all(&self.db).await?)
    }

    pub async fn get_director(&self, id: i32) -> AppResult<director::Model> {
        director::Entity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or_else(|| AppError::not_found(Resource::Director, id))
    }

    pub async fn create_director(&self, input: NameInput) -> AppResult<i32> {
        let model = director::ActiveModel { id: NotSet, name: Set(input.name) };
        let id = director::Entity::insert(model).exec(&self.db).await?.last_insert_id;
        debug!(id, "director created");
        Ok(id)
    }

    pub async fn replace_director(&self, id: i32, input: NameInput) -> AppResult<()> {
        let mut active = self.get_director(id).await?.into_active_model();
        active.name = Set(input.name);
        updated(active.update(&self.db).await, Resource::Director, id)?;
        debug!(id, "director replaced");
        Ok(())
    }

    pub async fn patch_director(&self, id: i32, patch: NamePatch) -> AppResult<()> {
        let mut active = self.get_director(id).await?.into_active_model();
        assign(&mut active.name, patch.name);
        if active.is_changed() {
            updated(active.update(&self.db).await, Resource::Director, id)?;
        }
        debug!(id, "director patched");
        Ok(())
    }

    /// Movies pointing at this director keep their `director_id`.
    pub async fn delete_director(&self, id: i32) -> AppResult<()> {
        let res = director::Entity::delete_by_id(id).exec(&self.db).await?;
        if res.rows_affected == 0 {
            return Err(AppError::not_found(Resource::Director, id));
        }
        debug!(id, "director deleted");
        Ok(())
    }

    pub async fn list_genres(&self) -> AppResult<Vec<genre::Model>> {
        Ok(genre::Entity::find().order_by_asc(genre::Column::Id).all(&self.db).await?)
    }

    pub async fn get_genre(&self, id: i32) -> AppResult<genre::Model> {
        genre::Entity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or_else(|| AppError::not_found(Resource::Genre, id))
    }

    pub async fn create_genre(&self, input: NameInput) -> AppResult<i32> {
        let model = genre::ActiveModel { id: NotSet, name: Set(input.name) };
        let id = genre::Entity::insert(model).exec(&self.db).await?.last_insert_id;
        debug!(id, "genre created");
        Ok(id)
    }

    pub async fn replace_genre(&self, id: i32, input: NameInput) -> AppResult<()> {
        let mut active = self.get_genre(id).await?.into_active_model();
        active.name = Set(input.name);
        updated(active.update(&self.db).await, Resource::Genre, id)?;
        debug!(id, "genre replaced");
        Ok(())
    }

    pub async fn patch_genre(&self, id: i32, patch: NamePatch) -> AppResult<()> {
        let mut active = self.get_genre(id).await?.into_active_model();
        assign(&mut active.name, patch.name);
        if active.is_changed() {
            updated(active.update(&self.db).await, Resource::Genre, id)?;
        }
        debug!(id, "genre patched");
        Ok(())
    }

    /// Movies pointing at this genre keep their `genre_id`.
    pub async fn delete_genre(&self, id: i32) -> AppResult<()> {
        let res = genre::Entity::delete_by_id(id).exec(&self.db).await?;
        if res.rows_affected == 0 {
            return Err(AppError::not_found(Resource::Genre, id));
        }
        debug!(id, "genre deleted");
        Ok(())
    }
}

fn assign<V: Into<Value>>(slot: &mut ActiveValue<V>, value: Option<V>) {
    if let Some(value) = value {
        *slot = Set(value);
    }
}

fn updated<M>(res: Result<M, DbErr>, resource: Resource, id: i32) -> AppResult<()> {
    match res {
        Ok(_) => Ok(()),
        // Row vanished between the lookup and the write.
        Err(DbErr::RecordNotUpdated) => Err(AppError::not_found(resource, id)),
        Err(err) => Err(err.into()),
    }
}
