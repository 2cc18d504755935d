use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, param::Query, payload::Json};
use uuid::Uuid;

use business::domain::product::query::{ProductQuery, SortKey};
use business::domain::product::use_cases::create::{CreateProductParams, CreateProductUseCase};
use business::domain::product::use_cases::delete::{DeleteProductParams, DeleteProductUseCase};
use business::domain::product::use_cases::get_all::GetAllProductsUseCase;
use business::domain::product::use_cases::get_by_id::{
    GetProductByIdParams, GetProductByIdUseCase,
};
use business::domain::product::use_cases::get_low_stock::GetLowStockProductsUseCase;
use business::domain::product::use_cases::update::{UpdateProductParams, UpdateProductUseCase};

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::product::dto::{CreateProductRequest, ProductResponse, UpdateProductRequest};
use crate::api::security::SessionBearer;
use crate::api::tags::ApiTags;

pub struct ProductApi {
    create_use_case: Arc<dyn CreateProductUseCase>,
    get_all_use_case: Arc<dyn GetAllProductsUseCase>,
    get_low_stock_use_case: Arc<dyn GetLowStockProductsUseCase>,
    get_by_id_use_case: Arc<dyn GetProductByIdUseCase>,
    update_use_case: Arc<dyn UpdateProductUseCase>,
    delete_use_case: Arc<dyn DeleteProductUseCase>,
}

impl ProductApi {
    pub fn new(
        create_use_case: Arc<dyn CreateProductUseCase>,
        get_all_use_case: Arc<dyn GetAllProductsUseCase>,
        get_low_stock_use_case: Arc<dyn GetLowStockProductsUseCase>,
        get_by_id_use_case: Arc<dyn GetProductByIdUseCase>,
        update_use_case: Arc<dyn UpdateProductUseCase>,
        delete_use_case: Arc<dyn DeleteProductUseCase>,
    ) -> Self {
        Self {
            create_use_case,
            get_all_use_case,
            get_low_stock_use_case,
            get_by_id_use_case,
            update_use_case,
            delete_use_case,
        }
    }
}

fn invalid_id() -> Json<ErrorResponse> {
    Json(ErrorResponse {
        name: "ValidationError".to_string(),
        message: "product.invalid_id".to_string(),
    })
}

/// Builds the listing query from raw query-string values. The sort key
/// defaults to name when absent; an unrecognized value means no sort.
fn build_query(
    category: Option<String>,
    size: Option<String>,
    name: Option<String>,
    sort: Option<String>,
    order: Option<String>,
) -> ProductQuery {
    ProductQuery {
        category,
        size,
        name,
        sort: match sort.as_deref() {
            Some(s) => s.parse().ok(),
            None => Some(SortKey::Name),
        },
        order: order
            .as_deref()
            .and_then(|s| s.parse().ok())
            .unwrap_or_default(),
    }
}

/// Product management API
///
/// Endpoints for registering, listing, viewing, editing, and removing
/// inventory products. All routes require a session token.
#[OpenApi]
impl ProductApi {
    /// Register a new product
    #[oai(path = "/products", method = "post", tag = "ApiTags::Products")]
    async fn create_product(
        &self,
        _auth: SessionBearer,
        body: Json<CreateProductRequest>,
    ) -> CreateProductResponse {
        let params = CreateProductParams {
            code: body.0.code,
            name: body.0.name,
            category: body.0.category,
            size: body.0.size,
            quantity: body.0.quantity,
            purchase_price: body.0.purchase_price,
            sale_price: body.0.sale_price,
            supplier: body.0.supplier,
            image: body.0.image.and_then(|i| i.into_domain()),
        };

        match self.create_use_case.execute(params).await {
            Ok(product) => CreateProductResponse::Created(Json(product.into())),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                CreateProductResponse::InternalError(json)
            }
        }
    }

    /// List products
    ///
    /// Applies the optional case-insensitive substring filters, then sorts
    /// by `sort` (name, price or quantity; defaults to name) in `order`
    /// (asc or desc). Unrecognized sort values leave the filtered order
    /// untouched.
    #[oai(path = "/products", method = "get", tag = "ApiTags::Products")]
    async fn get_all_products(
        &self,
        _auth: SessionBearer,
        category: Query<Option<String>>,
        size: Query<Option<String>>,
        name: Query<Option<String>>,
        sort: Query<Option<String>>,
        order: Query<Option<String>>,
    ) -> GetAllProductsResponse {
        let query = build_query(category.0, size.0, name.0, sort.0, order.0);

        match self.get_all_use_case.execute(query).await {
            Ok(products) => {
                let responses: Vec<ProductResponse> =
                    products.into_iter().map(|p| p.into()).collect();
                GetAllProductsResponse::Ok(Json(responses))
            }
            Err(err) => {
                let (_status, json) = err.into_error_response();
                GetAllProductsResponse::InternalError(json)
            }
        }
    }

    /// List low-stock products
    ///
    /// Returns products whose quantity is below the low-stock threshold,
    /// in insertion order.
    #[oai(
        path = "/products/low-stock",
        method = "get",
        tag = "ApiTags::Products"
    )]
    async fn get_low_stock_products(&self, _auth: SessionBearer) -> GetAllProductsResponse {
        match self.get_low_stock_use_case.execute().await {
            Ok(products) => {
                let responses: Vec<ProductResponse> =
                    products.into_iter().map(|p| p.into()).collect();
                GetAllProductsResponse::Ok(Json(responses))
            }
            Err(err) => {
                let (_status, json) = err.into_error_response();
                GetAllProductsResponse::InternalError(json)
            }
        }
    }

    /// Get a product by ID
    #[oai(path = "/products/:id", method = "get", tag = "ApiTags::Products")]
    async fn get_product_by_id(
        &self,
        _auth: SessionBearer,
        id: Path<String>,
    ) -> GetProductByIdResponse {
        let uuid = match Uuid::parse_str(&id.0) {
            Ok(uuid) => uuid,
            Err(_) => return GetProductByIdResponse::BadRequest(invalid_id()),
        };

        match self
            .get_by_id_use_case
            .execute(GetProductByIdParams { id: uuid })
            .await
        {
            Ok(product) => GetProductByIdResponse::Ok(Json(product.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => GetProductByIdResponse::NotFound(json),
                    _ => GetProductByIdResponse::InternalError(json),
                }
            }
        }
    }

    /// Update a product
    ///
    /// Overwrites every field. The stored image is only replaced when a
    /// new valid upload is attached.
    #[oai(path = "/products/:id", method = "put", tag = "ApiTags::Products")]
    async fn update_product(
        &self,
        _auth: SessionBearer,
        id: Path<String>,
        body: Json<UpdateProductRequest>,
    ) -> UpdateProductResponse {
        let uuid = match Uuid::parse_str(&id.0) {
            Ok(uuid) => uuid,
            Err(_) => return UpdateProductResponse::BadRequest(invalid_id()),
        };

        let params = UpdateProductParams {
            id: uuid,
            code: body.0.code,
            name: body.0.name,
            category: body.0.category,
            size: body.0.size,
            quantity: body.0.quantity,
            purchase_price: body.0.purchase_price,
            sale_price: body.0.sale_price,
            supplier: body.0.supplier,
            image: body.0.image.and_then(|i| i.into_domain()),
        };

        match self.update_use_case.execute(params).await {
            Ok(product) => UpdateProductResponse::Ok(Json(product.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => UpdateProductResponse::NotFound(json),
                    _ => UpdateProductResponse::InternalError(json),
                }
            }
        }
    }

    /// Remove a product
    ///
    /// Removal is idempotent: deleting an id that is already gone still
    /// returns 204.
    #[oai(path = "/products/:id", method = "delete", tag = "ApiTags::Products")]
    async fn delete_product(
        &self,
        _auth: SessionBearer,
        id: Path<String>,
    ) -> DeleteProductResponse {
        let uuid = match Uuid::parse_str(&id.0) {
            Ok(uuid) => uuid,
            Err(_) => return DeleteProductResponse::BadRequest(invalid_id()),
        };

        match self
            .delete_use_case
            .execute(DeleteProductParams { id: uuid })
            .await
        {
            Ok(()) => DeleteProductResponse::NoContent,
            Err(err) => {
                let (_status, json) = err.into_error_response();
                DeleteProductResponse::InternalError(json)
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum CreateProductResponse {
    #[oai(status = 201)]
    Created(Json<ProductResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetAllProductsResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<ProductResponse>>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetProductByIdResponse {
    #[oai(status = 200)]
    Ok(Json<ProductResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum UpdateProductResponse {
    #[oai(status = 200)]
    Ok(Json<ProductResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum DeleteProductResponse {
    #[oai(status = 204)]
    NoContent,
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[cfg(test)]
mod tests {
    use super::*;
    use business::domain::product::model::{NewProductProps, Product};
    use business::domain::product::query::SortOrder;

    fn product(name: &str) -> Product {
        Product::new(NewProductProps {
            code: "1".to_string(),
            name: name.to_string(),
            category: "Apparel".to_string(),
            size: "M".to_string(),
            quantity: 5,
            purchase_price: 10.0,
            sale_price: 20.0,
            supplier: "Acme".to_string(),
            image: None,
        })
    }

    #[test]
    fn should_default_sort_key_to_name_when_param_is_absent() {
        let query = build_query(None, None, None, None, None);

        assert_eq!(query.sort, Some(SortKey::Name));
        assert_eq!(query.order, SortOrder::Asc);
    }

    #[test]
    fn should_sort_listing_by_name_ascending_without_params() {
        let query = build_query(None, None, None, None, None);

        let result = query.apply(vec![product("Shirt"), product("Hat")]);

        let names: Vec<_> = result.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["Hat", "Shirt"]);
    }

    #[test]
    fn should_not_sort_for_unrecognized_sort_value() {
        let query = build_query(None, None, None, Some("created_at".to_string()), None);

        assert_eq!(query.sort, None);

        let result = query.apply(vec![product("Shirt"), product("Hat")]);
        let names: Vec<_> = result.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["Shirt", "Hat"]);
    }

    #[test]
    fn should_parse_explicit_sort_and_order() {
        let query = build_query(
            Some("apparel".to_string()),
            None,
            None,
            Some("quantity".to_string()),
            Some("desc".to_string()),
        );

        assert_eq!(query.category, Some("apparel".to_string()));
        assert_eq!(query.sort, Some(SortKey::Quantity));
        assert_eq!(query.order, SortOrder::Desc);
    }
}
