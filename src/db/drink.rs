use crate::db::DbError;
use crate::models;
use sqlx::PgPool;
use tracing::Instrument;

#[derive(sqlx::FromRow)]
struct DrinkRow {
    id: i32,
    title: String,
    recipe: String,
}

impl TryFrom<DrinkRow> for models::Drink {
    type Error = DbError;

    fn try_from(row: DrinkRow) -> Result<Self, Self::Error> {
        let recipe = models::Drink::parse_recipe(&row.recipe)
            .map_err(|source| DbError::CorruptRecipe { id: row.id, source })?;
        Ok(Self {
            id: row.id,
            title: row.title,
            recipe,
        })
    }
}

// The unique constraint on title is the only uniqueness check; no pre-query.
fn map_write_error(err: sqlx::Error, title: &str) -> DbError {
    match err {
        sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
            tracing::info!("Duplicate drink title {:?}", title);
            DbError::DuplicateTitle(title.to_string())
        }
        err => {
            tracing::error!("Failed to execute query: {:?}", err);
            DbError::Query(err)
        }
    }
}

pub async fn fetch_all(pool: &PgPool) -> Result<Vec<models::Drink>, DbError> {
    let query_span = tracing::info_span!("Fetch all drinks.");
    let rows = sqlx::query_as::<_, DrinkRow>(
        r#"
        SELECT id, title, recipe
        FROM drink
        ORDER BY id
        "#,
    )
    .fetch_all(pool)
    .instrument(query_span)
    .await
    .map_err(|err| {
        tracing::error!("Failed to fetch drinks, error: {:?}", err);
        DbError::Query(err)
    })?;

    rows.into_iter().map(models::Drink::try_from).collect()
}

pub async fn fetch(pool: &PgPool, id: i32) -> Result<Option<models::Drink>, DbError> {
    let query_span = tracing::info_span!("Fetch drink by id.", id);
    sqlx::query_as::<_, DrinkRow>(
        r#"
        SELECT id, title, recipe
        FROM drink
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .instrument(query_span)
    .await
    .map_err(|err| {
        tracing::error!("Failed to fetch drink, error: {:?}", err);
        DbError::Query(err)
    })?
    .map(models::Drink::try_from)
    .transpose()
}

pub async fn insert(pool: &PgPool, mut drink: models::Drink) -> Result<models::Drink, DbError> {
    let recipe = drink.recipe_text().map_err(DbError::Serialize)?;
    let query_span = tracing::info_span!("Saving new drink into the database");
    let id = sqlx::query_scalar::<_, i32>(
        r#"
        INSERT INTO drink (title, recipe)
        VALUES ($1, $2)
        RETURNING id
        "#,
    )
    .bind(&drink.title)
    .bind(recipe)
    .fetch_one(pool)
    .instrument(query_span)
    .await
    .map_err(|err| map_write_error(err, &drink.title))?;

    tracing::info!("New drink {} has been saved to database", id);
    drink.id = id;
    Ok(drink)
}

/// Returns `Ok(None)` when the row vanished in the meantime.
pub async fn update(pool: &PgPool, drink: models::Drink) -> Result<Option<models::Drink>, DbError> {
    let recipe = drink.recipe_text().map_err(DbError::Serialize)?;
    let query_span = tracing::info_span!("Updating drink", id = drink.id);
    let result = sqlx::query(
        r#"
        UPDATE drink
        SET title = $2,
            recipe = $3
        WHERE id = $1
        "#,
    )
    .bind(drink.id)
    .bind(&drink.title)
    .bind(recipe)
    .execute(pool)
    .instrument(query_span)
    .await
    .map_err(|err| map_write_error(err, &drink.title))?;

    if result.rows_affected() == 0 {
        return Ok(None);
    }

    tracing::info!("Drink {} has been updated", drink.id);
    Ok(Some(drink))
}

#[tracing::instrument(name = "Delete drink.", skip(pool))]
pub async fn delete(pool: &PgPool, id: i32) -> Result<bool, DbError> {
    let result = sqlx::query("DELETE FROM drink WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await
        .map_err(|err| {
            tracing::error!("Failed to delete drink, error: {:?}", err);
            DbError::Query(err)
        })?;

    Ok(result.rows_affected() > 0)
}
