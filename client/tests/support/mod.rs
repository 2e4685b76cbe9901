//! In-process mock of the inventory/order REST API
//!
//! Implements the server semantics the stores are written against:
//! paginated lists, the `0 <= reserved <= quantity` invariant, and one
//! history entry appended per adjustment. Failure flags let tests
//! force 500s on specific endpoints.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::routing::{get, post, put};
use axum::{Json, Router};
use chrono::{Days, Utc};
use rust_decimal::Decimal;
use serde::Deserialize;
use shared::{
    validate_stock_payload, MaterialStock, MaterialStockCreate, MaterialStockUpdate, Order,
    OrderCreate, OrderDetails, OrderItem, OrderStatus, OrderStatusUpdate, Paginated,
    StockAdjustment, StockHistoryEntry, StockTrendPoint,
};

pub type SharedDb = Arc<Mutex<MockDb>>;

#[derive(Default)]
pub struct MockDb {
    pub stocks: Vec<MaterialStock>,
    pub history: Vec<StockHistoryEntry>,
    pub orders: Vec<OrderDetails>,
    /// Fail every endpoint with 500
    pub fail_all: bool,
    /// Fail only `GET /inventory` with 500
    pub fail_stock_list: bool,
    /// Total number of requests that reached a handler
    pub hits: usize,
    next_id: i64,
}

impl MockDb {
    pub fn seed_stock(&mut self, material_id: &str, quantity: i64, reserved: i64) -> MaterialStock {
        self.next_id += 1;
        let stock = MaterialStock {
            id: self.next_id,
            material_id: material_id.to_string(),
            material_description: None,
            quantity,
            reserved,
            available: quantity - reserved,
            created_at: Utc::now(),
            updated_at: None,
        };
        self.stocks.push(stock.clone());
        stock
    }

    pub fn seed_order(&mut self, id: &str, customer_name: &str, status: OrderStatus) -> OrderDetails {
        let order = OrderDetails {
            id: id.to_string(),
            customer_name: customer_name.to_string(),
            status,
            total_amount: Decimal::from(100),
            created_at: Utc::now(),
            items: vec![OrderItem {
                material_id: "MAT001".into(),
                description: None,
                quantity: 10,
                price: Decimal::from(10),
            }],
        };
        self.orders.push(order.clone());
        order
    }
}

/// A running mock API
pub struct TestApi {
    pub db: SharedDb,
    pub base_url: String,
}

/// Bind the mock API to an ephemeral port and serve it in the background
pub async fn spawn() -> TestApi {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();

    let db: SharedDb = Arc::new(Mutex::new(MockDb::default()));
    let app = router(db.clone());
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind mock api");
    let addr = listener.local_addr().expect("mock api addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("serve mock api");
    });
    TestApi {
        db,
        base_url: format!("http://{addr}"),
    }
}

fn router(db: SharedDb) -> Router {
    Router::new()
        .route("/inventory", get(list_stocks).post(create_stock))
        .route("/inventory/low-stock/list", get(low_stock))
        .route(
            "/inventory/:material_id",
            get(get_stock).put(update_stock).delete(delete_stock),
        )
        .route("/inventory/:material_id/trend", get(stock_trend))
        .route("/inventory/:material_id/history", get(stock_history))
        .route("/inventory/:material_id/adjust", post(adjust_stock))
        .route("/orders", get(list_orders).post(create_order))
        .route("/orders/:order_id", get(order_details))
        .route("/orders/:order_id/status", put(update_order_status))
        .with_state(db)
}

fn summary(details: &OrderDetails) -> Order {
    Order {
        id: details.id.clone(),
        customer_name: details.customer_name.clone(),
        status: details.status,
        total_amount: details.total_amount,
        created_at: details.created_at,
    }
}

fn paginate<T>(items: Vec<T>, skip: usize, limit: usize) -> Paginated<T> {
    let total = items.len() as i64;
    let limit = limit.max(1);
    let page_items: Vec<T> = items.into_iter().skip(skip).take(limit).collect();
    Paginated {
        items: page_items,
        total,
        page: (skip / limit) as i64 + 1,
        page_size: limit as i64,
        total_pages: (total + limit as i64 - 1) / limit as i64,
    }
}

// ----------------------------------------------------------------------
// Inventory handlers
// ----------------------------------------------------------------------

#[derive(Deserialize)]
struct StockListParams {
    #[serde(default)]
    skip: usize,
    #[serde(default = "default_limit")]
    limit: usize,
    search: Option<String>,
}

fn default_limit() -> usize {
    10
}

async fn list_stocks(
    State(db): State<SharedDb>,
    Query(params): Query<StockListParams>,
) -> Result<Json<Paginated<MaterialStock>>, StatusCode> {
    let mut db = db.lock().unwrap();
    db.hits += 1;
    if db.fail_all || db.fail_stock_list {
        return Err(StatusCode::INTERNAL_SERVER_ERROR);
    }
    let needle = params.search.unwrap_or_default().to_lowercase();
    let matches: Vec<MaterialStock> = db
        .stocks
        .iter()
        .filter(|s| {
            needle.is_empty()
                || s.material_id.to_lowercase().contains(&needle)
                || s.material_description
                    .as_deref()
                    .is_some_and(|d| d.to_lowercase().contains(&needle))
        })
        .cloned()
        .collect();
    Ok(Json(paginate(matches, params.skip, params.limit)))
}

#[derive(Deserialize)]
struct LowStockParams {
    #[serde(default = "default_threshold")]
    threshold: i64,
}

fn default_threshold() -> i64 {
    10
}

async fn low_stock(
    State(db): State<SharedDb>,
    Query(params): Query<LowStockParams>,
) -> Result<Json<Vec<MaterialStock>>, StatusCode> {
    let mut db = db.lock().unwrap();
    db.hits += 1;
    if db.fail_all {
        return Err(StatusCode::INTERNAL_SERVER_ERROR);
    }
    let items: Vec<MaterialStock> = db
        .stocks
        .iter()
        .filter(|s| s.quantity <= params.threshold)
        .cloned()
        .collect();
    Ok(Json(items))
}

async fn get_stock(
    State(db): State<SharedDb>,
    Path(material_id): Path<String>,
) -> Result<Json<MaterialStock>, StatusCode> {
    let mut db = db.lock().unwrap();
    db.hits += 1;
    if db.fail_all {
        return Err(StatusCode::INTERNAL_SERVER_ERROR);
    }
    db.stocks
        .iter()
        .find(|s| s.material_id == material_id)
        .cloned()
        .map(Json)
        .ok_or(StatusCode::NOT_FOUND)
}

async fn create_stock(
    State(db): State<SharedDb>,
    Json(payload): Json<MaterialStockCreate>,
) -> Result<(StatusCode, Json<MaterialStock>), StatusCode> {
    let mut db = db.lock().unwrap();
    db.hits += 1;
    if db.fail_all {
        return Err(StatusCode::INTERNAL_SERVER_ERROR);
    }
    if validate_stock_payload(payload.quantity, payload.reserved).is_err() {
        return Err(StatusCode::BAD_REQUEST);
    }
    if db.stocks.iter().any(|s| s.material_id == payload.material_id) {
        return Err(StatusCode::BAD_REQUEST);
    }
    db.next_id += 1;
    let stock = MaterialStock {
        id: db.next_id,
        material_id: payload.material_id,
        material_description: payload.material_description,
        quantity: payload.quantity,
        reserved: payload.reserved,
        available: payload.quantity - payload.reserved,
        created_at: Utc::now(),
        updated_at: None,
    };
    db.stocks.push(stock.clone());
    Ok((StatusCode::CREATED, Json(stock)))
}

async fn update_stock(
    State(db): State<SharedDb>,
    Path(material_id): Path<String>,
    Json(payload): Json<MaterialStockUpdate>,
) -> Result<Json<MaterialStock>, StatusCode> {
    let mut db = db.lock().unwrap();
    db.hits += 1;
    if db.fail_all {
        return Err(StatusCode::INTERNAL_SERVER_ERROR);
    }
    let stock = db
        .stocks
        .iter_mut()
        .find(|s| s.material_id == material_id)
        .ok_or(StatusCode::NOT_FOUND)?;
    if let Some(description) = payload.material_description {
        stock.material_description = Some(description);
    }
    if let Some(quantity) = payload.quantity {
        stock.quantity = quantity;
    }
    if let Some(reserved) = payload.reserved {
        stock.reserved = reserved;
    }
    if validate_stock_payload(stock.quantity, stock.reserved).is_err() {
        return Err(StatusCode::BAD_REQUEST);
    }
    stock.available = stock.quantity - stock.reserved;
    stock.updated_at = Some(Utc::now());
    Ok(Json(stock.clone()))
}

async fn delete_stock(
    State(db): State<SharedDb>,
    Path(material_id): Path<String>,
) -> Result<StatusCode, StatusCode> {
    let mut db = db.lock().unwrap();
    db.hits += 1;
    if db.fail_all {
        return Err(StatusCode::INTERNAL_SERVER_ERROR);
    }
    let before = db.stocks.len();
    db.stocks.retain(|s| s.material_id != material_id);
    if db.stocks.len() == before {
        return Err(StatusCode::NOT_FOUND);
    }
    Ok(StatusCode::NO_CONTENT)
}

async fn adjust_stock(
    State(db): State<SharedDb>,
    Path(material_id): Path<String>,
    Json(adjustment): Json<StockAdjustment>,
) -> Result<Json<MaterialStock>, StatusCode> {
    let mut db = db.lock().unwrap();
    db.hits += 1;
    if db.fail_all {
        return Err(StatusCode::INTERNAL_SERVER_ERROR);
    }
    let history_id = db.history.len() as i64 + 1;
    let stock = db
        .stocks
        .iter_mut()
        .find(|s| s.material_id == material_id)
        .ok_or(StatusCode::NOT_FOUND)?;

    let previous_quantity;
    let new_quantity;
    if adjustment.is_reserved {
        previous_quantity = stock.reserved;
        new_quantity = previous_quantity + adjustment.quantity_change;
        if new_quantity < 0 || new_quantity > stock.quantity {
            return Err(StatusCode::BAD_REQUEST);
        }
        stock.reserved = new_quantity;
    } else {
        previous_quantity = stock.quantity;
        new_quantity = previous_quantity + adjustment.quantity_change;
        if new_quantity < stock.reserved {
            return Err(StatusCode::BAD_REQUEST);
        }
        stock.quantity = new_quantity;
    }
    stock.available = stock.quantity - stock.reserved;
    stock.updated_at = Some(Utc::now());
    let updated = stock.clone();

    db.history.push(StockHistoryEntry {
        id: history_id,
        material_id,
        quantity_change: adjustment.quantity_change,
        is_reserved: adjustment.is_reserved,
        previous_quantity,
        new_quantity,
        notes: (!adjustment.notes.is_empty()).then_some(adjustment.notes),
        user_id: None,
        created_at: Utc::now(),
    });
    Ok(Json(updated))
}

async fn stock_trend(
    State(db): State<SharedDb>,
    Path(material_id): Path<String>,
) -> Result<Json<Vec<StockTrendPoint>>, StatusCode> {
    let mut db = db.lock().unwrap();
    db.hits += 1;
    if db.fail_all {
        return Err(StatusCode::INTERNAL_SERVER_ERROR);
    }
    let stock = db
        .stocks
        .iter()
        .find(|s| s.material_id == material_id)
        .ok_or(StatusCode::NOT_FOUND)?;
    let today = Utc::now();
    let points = (0..3u64)
        .rev()
        .map(|offset| StockTrendPoint {
            date: today
                .checked_sub_days(Days::new(offset))
                .unwrap_or(today),
            quantity: stock.quantity,
            reserved: stock.reserved,
            available: stock.available,
        })
        .collect();
    Ok(Json(points))
}

async fn stock_history(
    State(db): State<SharedDb>,
    Path(material_id): Path<String>,
) -> Result<Json<Vec<StockHistoryEntry>>, StatusCode> {
    let mut db = db.lock().unwrap();
    db.hits += 1;
    if db.fail_all {
        return Err(StatusCode::INTERNAL_SERVER_ERROR);
    }
    let entries: Vec<StockHistoryEntry> = db
        .history
        .iter()
        .filter(|h| h.material_id == material_id)
        .cloned()
        .collect();
    Ok(Json(entries))
}

// ----------------------------------------------------------------------
// Order handlers
// ----------------------------------------------------------------------

#[derive(Deserialize)]
struct OrderListParams {
    #[serde(default)]
    search: String,
    #[serde(default = "default_page")]
    page: usize,
    #[serde(default = "default_limit")]
    limit: usize,
}

fn default_page() -> usize {
    1
}

async fn list_orders(
    State(db): State<SharedDb>,
    Query(params): Query<OrderListParams>,
) -> Result<Json<Paginated<Order>>, StatusCode> {
    let mut db = db.lock().unwrap();
    db.hits += 1;
    if db.fail_all {
        return Err(StatusCode::INTERNAL_SERVER_ERROR);
    }
    let needle = params.search.to_lowercase();
    let matches: Vec<Order> = db
        .orders
        .iter()
        .filter(|o| needle.is_empty() || o.customer_name.to_lowercase().contains(&needle))
        .map(summary)
        .collect();
    let skip = params.page.saturating_sub(1) * params.limit;
    Ok(Json(paginate(matches, skip, params.limit)))
}

async fn order_details(
    State(db): State<SharedDb>,
    Path(order_id): Path<String>,
) -> Result<Json<OrderDetails>, StatusCode> {
    let mut db = db.lock().unwrap();
    db.hits += 1;
    if db.fail_all {
        return Err(StatusCode::INTERNAL_SERVER_ERROR);
    }
    db.orders
        .iter()
        .find(|o| o.id == order_id)
        .cloned()
        .map(Json)
        .ok_or(StatusCode::NOT_FOUND)
}

async fn create_order(
    State(db): State<SharedDb>,
    Json(payload): Json<OrderCreate>,
) -> Result<(StatusCode, Json<Order>), StatusCode> {
    let mut db = db.lock().unwrap();
    db.hits += 1;
    if db.fail_all {
        return Err(StatusCode::INTERNAL_SERVER_ERROR);
    }
    if payload.customer_name.is_empty() || payload.items.is_empty() {
        return Err(StatusCode::BAD_REQUEST);
    }
    let unit_price = Decimal::from(10);
    let items: Vec<OrderItem> = payload
        .items
        .iter()
        .map(|item| OrderItem {
            material_id: item.material_id.clone(),
            description: None,
            quantity: item.quantity,
            price: unit_price,
        })
        .collect();
    let total_amount: Decimal = items
        .iter()
        .map(|item| item.price * Decimal::from(item.quantity))
        .sum();
    let details = OrderDetails {
        id: format!("ORD-{:03}", db.orders.len() + 1),
        customer_name: payload.customer_name,
        status: OrderStatus::New,
        total_amount,
        created_at: Utc::now(),
        items,
    };
    let order = summary(&details);
    db.orders.push(details);
    Ok((StatusCode::CREATED, Json(order)))
}

async fn update_order_status(
    State(db): State<SharedDb>,
    Path(order_id): Path<String>,
    Json(payload): Json<OrderStatusUpdate>,
) -> Result<Json<Order>, StatusCode> {
    let mut db = db.lock().unwrap();
    db.hits += 1;
    if db.fail_all {
        return Err(StatusCode::INTERNAL_SERVER_ERROR);
    }
    let order = db
        .orders
        .iter_mut()
        .find(|o| o.id == order_id)
        .ok_or(StatusCode::NOT_FOUND)?;
    order.status = payload.status;
    Ok(Json(summary(order)))
}
