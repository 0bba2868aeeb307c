use crate::api::controllers::dto::product_dto::ProductDomain;
use crate::data::models::product::{NewProduct, UpdateProduct};
use crate::data::repos::implementors::product_repo::{ProductRepo, SortDirection};
use crate::data::repos::traits::repository::Repository;
use crate::services::errors::ProductServiceError;
use bigdecimal::BigDecimal;
use diesel::result;

/// Page size applied when the request carries no `size` parameter.
const PAGE_LIMIT: i64 = 20;
/// Zero-based index resolved for missing or out-of-range `page` values.
const FIRST_PAGE: i64 = 0;
/// Name filter that matches every product.
const DEFAULT_NAME_FILTER: &str = "";

fn default_price_min() -> BigDecimal {
    BigDecimal::from(0)
}

/// Effectively "no upper bound" for the price range filter.
fn default_price_max() -> BigDecimal {
    BigDecimal::from(i64::MAX)
}

pub struct ProductService;

impl ProductService {
    pub fn new() -> Self {
        ProductService
    }

    /// One page of products matching the (normalized) filter criteria,
    /// ordered by name in the requested direction.
    pub async fn get_products(
        &self,
        page: Option<i64>,
        size: Option<i64>,
        sort: Option<&str>,
        name: Option<&str>,
        price_min: Option<i64>,
        price_max: Option<i64>,
    ) -> Result<Vec<ProductDomain>, ProductServiceError> {
        let direction = set_sort_direction(sort)?;

        let repo = ProductRepo::new();
        let products = repo
            .find_page(
                set_page(page),
                set_return_size(size),
                direction,
                set_name(name),
                set_price_min(price_min),
                set_price_max(price_max),
            )
            .await
            .map_err(|_| ProductServiceError::DatabaseError)?;

        Ok(products.into_iter().map(ProductDomain::from).collect())
    }

    /// Total page count for the same filter criteria as [`Self::get_products`].
    pub async fn get_total_pages(
        &self,
        size: Option<i64>,
        name: Option<&str>,
        price_min: Option<i64>,
        price_max: Option<i64>,
    ) -> Result<i64, ProductServiceError> {
        let repo = ProductRepo::new();
        repo.count_pages(
            set_return_size(size),
            set_name(name),
            set_price_min(price_min),
            set_price_max(price_max),
        )
        .await
        .map_err(|_| ProductServiceError::DatabaseError)
    }

    pub async fn get_product(
        &self,
        product_name: &str,
    ) -> Result<ProductDomain, ProductServiceError> {
        let repo = ProductRepo::new();
        let product = repo
            .get_by_id(product_name.to_owned())
            .await
            .map_err(|_| ProductServiceError::DatabaseError)?;

        product
            .map(ProductDomain::from)
            .ok_or(ProductServiceError::ProductNotFound)
    }

    /// Delete by exact name. Deleting an absent product is a no-op.
    pub async fn delete_product(&self, product_name: &str) -> Result<(), ProductServiceError> {
        let repo = ProductRepo::new();
        repo.delete(product_name.to_owned())
            .await
            .map_err(|_| ProductServiceError::ProductDeletionFailed)
    }

    /// Insert iff no product with the same name exists yet. A concurrent
    /// insert losing the race surfaces as a unique-key violation and maps to
    /// the same conflict error as the upfront check.
    pub async fn create_unique_product(
        &self,
        product_domain: &ProductDomain,
    ) -> Result<(), ProductServiceError> {
        let repo = ProductRepo::new();

        if repo
            .get_by_id(product_domain.name.clone())
            .await
            .map_err(|_| ProductServiceError::DatabaseError)?
            .is_some()
        {
            return Err(ProductServiceError::ProductAlreadyExists);
        }

        let new_product = NewProduct {
            name: &product_domain.name,
            product_image_uri: product_domain.image_url.as_deref(),
            description: product_domain.description.as_deref(),
            price: product_domain.price.clone(),
        };

        repo.add(new_product).await.map_err(|e| match e {
            result::Error::DatabaseError(result::DatabaseErrorKind::UniqueViolation, _) => {
                ProductServiceError::ProductAlreadyExists
            }
            _ => ProductServiceError::ProductCreationFailed,
        })
    }

    /// Update image, description and price of the named product. The name
    /// itself never changes.
    pub async fn update_product(
        &self,
        product_name: &str,
        product_domain: &ProductDomain,
    ) -> Result<(), ProductServiceError> {
        let repo = ProductRepo::new();

        repo.get_by_id(product_name.to_owned())
            .await
            .map_err(|_| ProductServiceError::DatabaseError)?
            .ok_or(ProductServiceError::ProductNotFound)?;

        let update = UpdateProduct {
            product_image_uri: product_domain.image_url.as_deref(),
            description: product_domain.description.as_deref(),
            price: product_domain.price.clone(),
        };

        repo.update(product_name.to_owned(), update)
            .await
            .map_err(|_| ProductServiceError::ProductUpdateFailed)
    }
}

impl Default for ProductService {
    fn default() -> Self {
        Self::new()
    }
}

// Normalization of the optional query parameters. Defaults never raise;
// only an unparseable sort token is an error.

fn set_page(page: Option<i64>) -> i64 {
    match page {
        Some(p) if p >= 1 => p - 1,
        _ => FIRST_PAGE,
    }
}

fn set_return_size(size: Option<i64>) -> i64 {
    size.unwrap_or(PAGE_LIMIT)
}

fn set_name(name: Option<&str>) -> &str {
    name.unwrap_or(DEFAULT_NAME_FILTER)
}

fn set_price_min(price_min: Option<i64>) -> BigDecimal {
    price_min.map(BigDecimal::from).unwrap_or_else(default_price_min)
}

fn set_price_max(price_max: Option<i64>) -> BigDecimal {
    price_max.map(BigDecimal::from).unwrap_or_else(default_price_max)
}

fn set_sort_direction(sort: Option<&str>) -> Result<Option<SortDirection>, ProductServiceError> {
    match sort {
        None => Ok(None),
        Some(s) if s.is_empty() => Ok(None),
        Some(s) => match s.to_lowercase().as_str() {
            "asc" => Ok(Some(SortDirection::Asc)),
            "desc" => Ok(Some(SortDirection::Desc)),
            _ => Err(ProductServiceError::InvalidSortDirection),
        },
    }
}
