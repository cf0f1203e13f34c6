//! Remote order, payment, shipment, and notification records.
//!
//! The client only proxies these to the backend; nothing here is persisted
//! locally. Drafts are the create payloads, records are what the backend
//! returns.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::{
    AddressId, NotificationChannel, NotificationId, NotificationStatus, OrderId, OrderStatus,
    PaymentId, PaymentStatus, Price, ShipmentId, ShipmentKind, ShipmentStatus, UserId,
};

/// An order as the backend reports it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    /// Canonical identifier.
    pub id: OrderId,
    /// The ordering user.
    pub user_id: UserId,
    /// Delivery address.
    pub address_id: AddressId,
    /// Lifecycle status.
    pub status: OrderStatus,
    /// Sum of line subtotals.
    pub subtotal: Price,
    /// Discount applied.
    pub discount: Price,
    /// Shipping cost.
    pub shipping: Price,
    /// Amount charged.
    pub total: Price,
    /// Creation time, when the backend reports it.
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Payload for creating an order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderDraft {
    /// The ordering user.
    pub user_id: UserId,
    /// Delivery address.
    pub address_id: AddressId,
    /// Sum of line subtotals.
    pub subtotal: Price,
    /// Discount applied.
    pub discount: Price,
    /// Shipping cost.
    pub shipping: Price,
    /// Amount to charge.
    pub total: Price,
}

/// A payment attached to an order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payment {
    /// Canonical identifier.
    pub id: PaymentId,
    /// The order being paid.
    pub order_id: OrderId,
    /// Payment gateway (webpay, mercadopago, ...).
    pub gateway: String,
    /// Lifecycle status.
    pub status: PaymentStatus,
    /// Amount charged.
    pub amount: Price,
    /// Payment method (credit card, transfer, ...).
    pub method: String,
}

/// Payload for creating a payment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentDraft {
    /// The order being paid.
    pub order_id: OrderId,
    /// Payment gateway.
    pub gateway: String,
    /// Amount to charge.
    pub amount: Price,
    /// Payment method.
    pub method: String,
}

/// A shipment attached to an order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shipment {
    /// Canonical identifier.
    pub id: ShipmentId,
    /// Pickup or delivery.
    pub kind: ShipmentKind,
    /// Carrier name, when assigned.
    #[serde(default)]
    pub carrier: Option<String>,
    /// Carrier tracking code, when assigned.
    #[serde(default)]
    pub tracking: Option<String>,
    /// Tracking status.
    pub status: ShipmentStatus,
    /// Estimated arrival, when known.
    #[serde(default)]
    pub estimated_at: Option<DateTime<Utc>>,
}

/// A notification sent to a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    /// Canonical identifier.
    pub id: NotificationId,
    /// The recipient.
    pub user_id: UserId,
    /// Delivery channel.
    pub channel: NotificationChannel,
    /// Subject line.
    pub subject: String,
    /// Delivery status.
    pub status: NotificationStatus,
}
