//! Product Errors

use salvo::http::StatusError;
use tracing::error;

use store_app::domain::products::ProductsServiceError;

pub(crate) fn into_status_error(error: ProductsServiceError) -> StatusError {
    match error {
        ProductsServiceError::AlreadyExists => {
            StatusError::conflict().brief("Product already exists")
        }
        ProductsServiceError::NotFound => StatusError::not_found().brief("Product not found"),
        ProductsServiceError::MissingRequiredData
        | ProductsServiceError::InvalidData
        | ProductsServiceError::OutOfRange(_) => {
            StatusError::bad_request().brief("Invalid product payload")
        }
        ProductsServiceError::Sql(source) => {
            error!("product storage failed: {source}");

            StatusError::internal_server_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use salvo::http::StatusCode;

    use super::*;

    #[test]
    fn domain_errors_map_to_client_statuses() {
        assert_eq!(
            into_status_error(ProductsServiceError::AlreadyExists).code,
            StatusCode::CONFLICT
        );
        assert_eq!(
            into_status_error(ProductsServiceError::NotFound).code,
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            into_status_error(ProductsServiceError::InvalidData).code,
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            into_status_error(ProductsServiceError::MissingRequiredData).code,
            StatusCode::BAD_REQUEST
        );

        let overflow = u8::try_from(256_u16).map(|_| ()).err();

        assert!(overflow.is_some(), "256 does not fit in a u8");

        if let Some(overflow) = overflow {
            assert_eq!(
                into_status_error(ProductsServiceError::OutOfRange(overflow)).code,
                StatusCode::BAD_REQUEST
            );
        }
    }
}
