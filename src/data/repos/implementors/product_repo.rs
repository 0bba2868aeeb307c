use crate::data::database::Database;
use crate::data::models::product::{NewProduct, Product, UpdateProduct};
use crate::data::repos::traits::repository::Repository;
use async_trait::async_trait;
use bigdecimal::BigDecimal;
use diesel::prelude::*;
use diesel::result;
use diesel_async::pooled_connection::deadpool::Object;
use diesel_async::scoped_futures::ScopedFutureExt;
use diesel_async::{AsyncConnection, AsyncMysqlConnection, RunQueryDsl};

diesel::define_sql_function! {
    fn lower(value: diesel::sql_types::Text) -> diesel::sql_types::Text;
}

/// Direction of the fixed order-by-name sort on paged listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

pub struct ProductRepo {}

impl ProductRepo {
    pub fn new() -> Self {
        ProductRepo {}
    }

    async fn connection() -> Result<Object<AsyncMysqlConnection>, result::Error> {
        let db = Database::new().await;

        db.get_connection().await.map_err(|e| {
            result::Error::DatabaseError(
                result::DatabaseErrorKind::UnableToSendCommand,
                Box::new(e.to_string()),
            )
        })
    }

    /// One page of products matching
    /// `price_min <= price <= price_max AND lower(name) LIKE %lower(filter)%`,
    /// ordered by name. Bounds are inclusive; a missing direction means the
    /// store default, ascending.
    pub async fn find_page(
        &self,
        page_index: i64,
        page_size: i64,
        direction: Option<SortDirection>,
        name_filter: &str,
        price_min: BigDecimal,
        price_max: BigDecimal,
    ) -> Result<Vec<Product>, result::Error> {
        use crate::data::models::schema::products::dsl::{name, price, products};

        let mut conn = Self::connection().await?;

        let pattern = format!("%{}%", name_filter.to_lowercase());
        let mut query = products
            .filter(price.between(price_min, price_max))
            .filter(lower(name).like(pattern))
            .into_boxed();

        query = match direction {
            Some(SortDirection::Desc) => query.order(name.desc()),
            _ => query.order(name.asc()),
        };

        query
            .limit(page_size)
            .offset(page_index * page_size)
            .load::<Product>(&mut conn)
            .await
    }

    /// Total page count for the same filter criteria as [`Self::find_page`].
    pub async fn count_pages(
        &self,
        page_size: i64,
        name_filter: &str,
        price_min: BigDecimal,
        price_max: BigDecimal,
    ) -> Result<i64, result::Error> {
        use crate::data::models::schema::products::dsl::{name, price, products};

        let mut conn = Self::connection().await?;

        let pattern = format!("%{}%", name_filter.to_lowercase());
        let total: i64 = products
            .filter(price.between(price_min, price_max))
            .filter(lower(name).like(pattern))
            .count()
            .get_result(&mut conn)
            .await?;

        if page_size <= 0 {
            return Ok(0);
        }
        Ok((total + page_size - 1) / page_size)
    }
}

#[async_trait]
impl Repository for ProductRepo {
    // Keyed by the unique product name, not the surrogate primary key.
    type Id = String;
    type Item = Product;
    type NewItem<'a> = NewProduct<'a>;
    type UpdateForm<'a> = UpdateProduct<'a>;

    async fn get_all(&self) -> Result<Option<Vec<Self::Item>>, result::Error> {
        use crate::data::models::schema::products::dsl::products;

        let mut conn = Self::connection().await?;

        match products.load::<Self::Item>(&mut conn).await {
            Ok(value) if value.is_empty() => Ok(None),
            Ok(value) => Ok(Some(value)),
            Err(result::Error::NotFound) => Ok(None),
            Err(e) => Err(e),
        }
    }

    async fn get_by_id(&self, id: Self::Id) -> Result<Option<Self::Item>, result::Error> {
        use crate::data::models::schema::products::dsl::{name, products};

        let mut conn = Self::connection().await?;

        match products
            .filter(name.eq(id))
            .first::<Self::Item>(&mut conn)
            .await
        {
            Ok(value) => Ok(Some(value)),
            Err(result::Error::NotFound) => Ok(None),
            Err(e) => Err(e),
        }
    }

    async fn add<'a>(&self, item: Self::NewItem<'a>) -> Result<(), result::Error> {
        use crate::data::models::schema::products::dsl::products;

        let mut conn = Self::connection().await?;

        conn.transaction(|connection| {
            async move {
                diesel::insert_into(products)
                    .values(&item)
                    .execute(connection)
                    .await?;
                Ok(())
            }
            .scope_boxed()
        })
        .await
    }

    async fn update<'a>(
        &self,
        id: Self::Id,
        item: Self::UpdateForm<'a>,
    ) -> Result<(), result::Error> {
        use diesel::sql_query;
        use diesel::sql_types::{Nullable, Numeric, Text};

        let mut conn = Self::connection().await?;

        conn.transaction(|connection| {
            async move {
                sql_query(
                    "UPDATE products SET product_image_uri = ?, description = ?, price = ? \
                     WHERE name = ?",
                )
                .bind::<Nullable<Text>, _>(item.product_image_uri)
                .bind::<Nullable<Text>, _>(item.description)
                .bind::<Numeric, _>(item.price)
                .bind::<Text, _>(id)
                .execute(connection)
                .await?;
                Ok(())
            }
            .scope_boxed()
        })
        .await
    }

    async fn delete(&self, id: Self::Id) -> Result<(), result::Error> {
        use crate::data::models::schema::products::dsl::{name, products};

        let mut conn = Self::connection().await?;

        conn.transaction(|connection| {
            async move {
                diesel::delete(products.filter(name.eq(id)))
                    .execute(connection)
                    .await?;
                Ok(())
            }
            .scope_boxed()
        })
        .await
    }
}

impl Default for ProductRepo {
    fn default() -> Self {
        Self::new()
    }
}
