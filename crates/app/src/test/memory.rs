//! In-memory products repository for service tests

use std::sync::Mutex;

use async_trait::async_trait;

use crate::{
    domain::products::{ProductsServiceError, models::ProductRecord, repository::ProductsRepository},
    pagination::{Page, PageRequest},
};

/// Keeps records in insertion order and enforces code uniqueness like the
/// `products_code_unique` constraint does.
#[derive(Debug, Default)]
pub(crate) struct InMemoryProductsRepository {
    products: Mutex<Vec<ProductRecord>>,
}

#[async_trait]
impl ProductsRepository for InMemoryProductsRepository {
    async fn find_by_code(
        &self,
        code: &str,
    ) -> Result<Option<ProductRecord>, ProductsServiceError> {
        let products = self.products.lock().expect("products lock poisoned");

        Ok(products.iter().find(|p| p.code == code).cloned())
    }

    async fn save(&self, product: ProductRecord) -> Result<ProductRecord, ProductsServiceError> {
        let mut products = self.products.lock().expect("products lock poisoned");

        if products
            .iter()
            .any(|p| p.code == product.code && p.uuid != product.uuid)
        {
            return Err(ProductsServiceError::AlreadyExists);
        }

        match products.iter_mut().find(|p| p.uuid == product.uuid) {
            Some(existing) => *existing = product.clone(),
            None => products.push(product.clone()),
        }

        Ok(product)
    }

    async fn list_page(
        &self,
        page: PageRequest,
    ) -> Result<Page<ProductRecord>, ProductsServiceError> {
        let products = self.products.lock().expect("products lock poisoned");

        let items = products
            .iter()
            .skip(usize::try_from(page.offset())?)
            .take(usize::try_from(page.limit())?)
            .cloned()
            .collect();

        Ok(Page::new(items, page, products.len() as u64))
    }
}
