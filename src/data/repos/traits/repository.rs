use async_trait::async_trait;
use diesel::result;

/// Common contract for data-access objects. `Id` is whatever uniquely
/// identifies a row for the entity in question; it does not have to be the
/// table's primary key (the product repo keys on the unique name).
#[async_trait]
pub trait Repository {
    type Id;
    type Item;
    type NewItem<'a>;
    type UpdateForm<'a>;

    async fn get_all(&self) -> Result<Option<Vec<Self::Item>>, result::Error>;

    async fn get_by_id(&self, id: Self::Id) -> Result<Option<Self::Item>, result::Error>;

    async fn add<'a>(&self, item: Self::NewItem<'a>) -> Result<(), result::Error>;

    async fn update<'a>(
        &self,
        id: Self::Id,
        item: Self::UpdateForm<'a>,
    ) -> Result<(), result::Error>;

    async fn delete(&self, id: Self::Id) -> Result<(), result::Error>;
}
