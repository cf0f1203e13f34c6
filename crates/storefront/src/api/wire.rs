//! Wire types and normalisation for the backend's JSON.
//!
//! The backend is not consistent about field naming: entities carry `_id`
//! in responses but `id` in the legacy sample data, and product prices
//! arrive as `precio_base` from the catalog but `precio` from the sample
//! set. This module is the single place that mapping lives:
//!
//! | canonical      | accepted on the wire        |
//! |----------------|-----------------------------|
//! | `id`           | `_id`, `id`                 |
//! | `price`        | `precio_base`, `precio`     |
//! | `image_url`    | `imagen_url`, `imagen`      |
//!
//! Amounts arrive as JSON numbers in major units (`4990.0` CLP); they are
//! converted to integer minor units here via `rust_decimal`, so rounding
//! happens exactly once, at the boundary.

use chrono::{DateTime, NaiveDateTime, Utc};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};

use fresh_bowl_core::{
    AddressId, Category, CategoryId, Currency, Ingredient, IngredientId, Notification,
    NotificationChannel, NotificationId, NotificationStatus, Order, OrderDraft, OrderId,
    OrderStatus, Payment, PaymentDraft, PaymentId, PaymentStatus, Price, Product, ProductId,
    Shipment, ShipmentId, ShipmentKind, ShipmentStatus, User, UserId,
};

use super::ApiError;

/// Convert a major-unit wire amount to integer minor units.
pub(crate) fn to_minor(amount: Decimal, currency: Currency) -> Result<Price, ApiError> {
    let scaled = amount * Decimal::from(10_i64.pow(currency.exponent()));
    scaled
        .round()
        .to_i64()
        .map(Price::from_minor)
        .ok_or_else(|| ApiError::Parse(format!("amount out of range: {amount}")))
}

/// Convert integer minor units back to a major-unit wire amount.
pub(crate) fn to_major(price: Price, currency: Currency) -> Decimal {
    Decimal::new(price.minor(), currency.exponent())
}

/// Parse the backend's timestamp, which may or may not carry an offset.
///
/// FastAPI serialises naive UTC datetimes; sample data may use RFC 3339.
/// Unparseable values degrade to `None` rather than failing the record.
fn parse_timestamp(raw: Option<&str>) -> Option<DateTime<Utc>> {
    let raw = raw?;
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .or_else(|_| {
            NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f").map(|dt| dt.and_utc())
        })
        .ok()
}

const fn default_true() -> bool {
    true
}

// =============================================================================
// Catalog
// =============================================================================

#[derive(Debug, Deserialize)]
pub(crate) struct ProductWire {
    #[serde(alias = "_id")]
    id: String,
    #[serde(rename = "nombre")]
    name: String,
    #[serde(rename = "precio_base", alias = "precio")]
    price: Decimal,
    #[serde(rename = "descripcion", default)]
    description: Option<String>,
    #[serde(rename = "imagen_url", alias = "imagen", default)]
    image_url: Option<String>,
    #[serde(rename = "categoria_id", default)]
    category_id: Option<String>,
    #[serde(rename = "activo", default = "default_true")]
    active: bool,
    #[serde(rename = "agotado", default)]
    sold_out: bool,
}

impl ProductWire {
    pub(crate) fn into_product(self, currency: Currency) -> Result<Product, ApiError> {
        Ok(Product {
            id: ProductId::new(self.id),
            name: self.name,
            price: to_minor(self.price, currency)?,
            description: self.description,
            image_url: self.image_url,
            category_id: self.category_id.map(CategoryId::new),
            active: self.active,
            sold_out: self.sold_out,
        })
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct CategoryWire {
    #[serde(alias = "_id")]
    id: String,
    #[serde(rename = "nombre")]
    name: String,
    #[serde(default)]
    slug: String,
    #[serde(default = "default_true")]
    visible: bool,
}

impl From<CategoryWire> for Category {
    fn from(wire: CategoryWire) -> Self {
        Self {
            id: CategoryId::new(wire.id),
            name: wire.name,
            slug: wire.slug,
            visible: wire.visible,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct IngredientWire {
    #[serde(alias = "_id")]
    id: String,
    #[serde(rename = "nombre")]
    name: String,
    #[serde(rename = "adicional", default)]
    extra: bool,
    #[serde(rename = "precio_adicional", default)]
    extra_price: Decimal,
}

impl IngredientWire {
    pub(crate) fn into_ingredient(self, currency: Currency) -> Result<Ingredient, ApiError> {
        Ok(Ingredient {
            id: IngredientId::new(self.id),
            name: self.name,
            extra: self.extra,
            extra_price: to_minor(self.extra_price, currency)?,
        })
    }
}

// =============================================================================
// Users & sessions
// =============================================================================

#[derive(Debug, Deserialize)]
pub(crate) struct UserWire {
    #[serde(alias = "_id")]
    id: String,
    #[serde(rename = "nombre")]
    name: String,
    email: String,
    #[serde(rename = "telefono", default)]
    phone: Option<String>,
    #[serde(rename = "email_verificado", default)]
    email_verified: bool,
    #[serde(rename = "activo", default = "default_true")]
    active: bool,
    #[serde(rename = "creado_en", default)]
    created_at: Option<String>,
}

impl From<UserWire> for User {
    fn from(wire: UserWire) -> Self {
        Self {
            id: UserId::new(wire.id),
            name: wire.name,
            email: wire.email,
            phone: wire.phone,
            email_verified: wire.email_verified,
            active: wire.active,
            created_at: parse_timestamp(wire.created_at.as_deref()),
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct RegisterWire<'a> {
    pub nombre: &'a str,
    pub email: &'a str,
    pub password: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub telefono: Option<&'a str>,
}

#[derive(Debug, Serialize)]
pub(crate) struct LoginRequestWire<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

/// The login response is its own shape: the backend answers with
/// `usuario_id`, older deployments with `_id`, and may omit the name.
#[derive(Debug, Deserialize)]
pub(crate) struct LoginWire {
    #[serde(alias = "_id", alias = "usuario_id")]
    pub id: String,
    #[serde(rename = "nombre", default)]
    pub name: Option<String>,
    pub email: String,
    #[serde(rename = "telefono", default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub token: Option<String>,
}

#[derive(Debug, Serialize)]
pub(crate) struct UserPatchWire<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nombre: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub telefono: Option<&'a str>,
}

// =============================================================================
// Orders, payments, shipments, notifications
// =============================================================================

#[derive(Debug, Deserialize)]
pub(crate) struct OrderWire {
    #[serde(alias = "_id")]
    id: String,
    usuario_id: String,
    direccion_id: String,
    estado: OrderStatus,
    subtotal: Decimal,
    #[serde(rename = "descuento", default)]
    discount: Decimal,
    #[serde(rename = "envio", default)]
    shipping: Decimal,
    total: Decimal,
    #[serde(rename = "creado_en", default)]
    created_at: Option<String>,
}

impl OrderWire {
    pub(crate) fn into_order(self, currency: Currency) -> Result<Order, ApiError> {
        Ok(Order {
            id: OrderId::new(self.id),
            user_id: UserId::new(self.usuario_id),
            address_id: AddressId::new(self.direccion_id),
            status: self.estado,
            subtotal: to_minor(self.subtotal, currency)?,
            discount: to_minor(self.discount, currency)?,
            shipping: to_minor(self.shipping, currency)?,
            total: to_minor(self.total, currency)?,
            created_at: parse_timestamp(self.created_at.as_deref()),
        })
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct OrderDraftWire {
    usuario_id: String,
    direccion_id: String,
    estado: OrderStatus,
    subtotal: Decimal,
    descuento: Decimal,
    envio: Decimal,
    total: Decimal,
}

impl OrderDraftWire {
    pub(crate) fn from_draft(draft: &OrderDraft, currency: Currency) -> Self {
        Self {
            usuario_id: draft.user_id.as_str().to_owned(),
            direccion_id: draft.address_id.as_str().to_owned(),
            estado: OrderStatus::Pending,
            subtotal: to_major(draft.subtotal, currency),
            descuento: to_major(draft.discount, currency),
            envio: to_major(draft.shipping, currency),
            total: to_major(draft.total, currency),
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct OrderPatchWire {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estado: Option<OrderStatus>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct PaymentWire {
    #[serde(alias = "_id")]
    id: String,
    pedido_id: String,
    #[serde(rename = "pasarela")]
    gateway: String,
    estado: PaymentStatus,
    #[serde(rename = "monto")]
    amount: Decimal,
    #[serde(rename = "medio")]
    method: String,
}

impl PaymentWire {
    pub(crate) fn into_payment(self, currency: Currency) -> Result<Payment, ApiError> {
        Ok(Payment {
            id: PaymentId::new(self.id),
            order_id: OrderId::new(self.pedido_id),
            gateway: self.gateway,
            status: self.estado,
            amount: to_minor(self.amount, currency)?,
            method: self.method,
        })
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct PaymentDraftWire {
    pedido_id: String,
    pasarela: String,
    estado: PaymentStatus,
    monto: Decimal,
    medio: String,
}

impl PaymentDraftWire {
    pub(crate) fn from_draft(draft: &PaymentDraft, currency: Currency) -> Self {
        Self {
            pedido_id: draft.order_id.as_str().to_owned(),
            pasarela: draft.gateway.clone(),
            estado: PaymentStatus::Pending,
            monto: to_major(draft.amount, currency),
            medio: draft.method.clone(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct ShipmentWire {
    #[serde(alias = "_id")]
    id: String,
    #[serde(rename = "tipo")]
    kind: ShipmentKind,
    #[serde(rename = "proveedor", default)]
    carrier: Option<String>,
    #[serde(default)]
    tracking: Option<String>,
    estado: ShipmentStatus,
    #[serde(rename = "estimado", default)]
    estimated_at: Option<String>,
}

impl From<ShipmentWire> for Shipment {
    fn from(wire: ShipmentWire) -> Self {
        Self {
            id: ShipmentId::new(wire.id),
            kind: wire.kind,
            carrier: wire.carrier,
            tracking: wire.tracking,
            status: wire.estado,
            estimated_at: parse_timestamp(wire.estimated_at.as_deref()),
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct NotificationWire {
    #[serde(alias = "_id")]
    id: String,
    usuario_id: String,
    #[serde(rename = "canal")]
    channel: NotificationChannel,
    #[serde(rename = "asunto")]
    subject: String,
    estado: NotificationStatus,
}

impl From<NotificationWire> for Notification {
    fn from(wire: NotificationWire) -> Self {
        Self {
            id: NotificationId::new(wire.id),
            user_id: UserId::new(wire.usuario_id),
            channel: wire.channel,
            subject: wire.subject,
            status: wire.estado,
        }
    }
}
