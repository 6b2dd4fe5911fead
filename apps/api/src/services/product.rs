//! Catalog management service.

use tracing::info;

use kasir_core::validation::validate_new_product;
use kasir_core::{NewProduct, Product};
use kasir_db::Database;

use crate::error::{ApiError, ApiResult};

/// Product service.
#[derive(Debug, Clone)]
pub struct ProductService {
    db: Database,
}

impl ProductService {
    pub fn new(db: Database) -> Self {
        ProductService { db }
    }

    pub async fn list(&self) -> ApiResult<Vec<Product>> {
        Ok(self.db.products().list().await?)
    }

    pub async fn get(&self, id: i64) -> ApiResult<Product> {
        self.db
            .products()
            .get_by_id(id)
            .await?
            .ok_or_else(|| ApiError::not_found(format!("Product not found: {id}")))
    }

    pub async fn create(&self, product: NewProduct) -> ApiResult<Product> {
        let product = validate_new_product(product)?;
        let created = self.db.products().create(&product).await?;
        info!(id = created.id, name = %created.name, "Product created");
        Ok(created)
    }

    pub async fn update(&self, id: i64, product: NewProduct) -> ApiResult<Product> {
        let product = validate_new_product(product)?;
        Ok(self.db.products().update(id, &product).await?)
    }

    /// Deletes a product. Fails with `CONFLICT` once it has been sold.
    pub async fn delete(&self, id: i64) -> ApiResult<()> {
        self.db.products().delete(id).await?;
        info!(id, "Product deleted");
        Ok(())
    }
}
