/*
 * Responsibility
 * - v1 の URL 構造を定義
 * - /health, /auth, /users, /products, /categories, /cart, /orders
 * - 認証が必要な範囲は AccessPolicy + ガード middleware 側で決める
 */
use axum::{
    Router,
    routing::{get, post, put},
};

use crate::state::AppState;

use crate::api::v1::handlers::{
    auth::{login, register},
    cart::{add_cart_item, clear_cart, list_cart, remove_cart_item, update_cart_item},
    categories::{
        create_category, delete_category, get_category, list_categories, update_category,
    },
    health::health,
    orders::{checkout, get_order, list_orders, update_order_status},
    products::{create_product, delete_product, get_product, list_products, update_product},
    users::me,
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .route("/auth/register", post(register))
        .route("/auth/login", post(login))
        .route("/users/me", get(me))
        .route("/products", get(list_products).post(create_product))
        .route(
            "/products/{product_id}",
            get(get_product).put(update_product).delete(delete_product),
        )
        .route("/categories", get(list_categories).post(create_category))
        .route(
            "/categories/{category_id}",
            get(get_category)
                .put(update_category)
                .delete(delete_category),
        )
        .route(
            "/cart",
            get(list_cart).post(add_cart_item).delete(clear_cart),
        )
        .route(
            "/cart/{item_id}",
            put(update_cart_item).delete(remove_cart_item),
        )
        .route("/orders", get(list_orders).post(checkout))
        .route("/orders/{order_id}", get(get_order))
        .route("/orders/{order_id}/status", put(update_order_status))
}
