//! Status enums for remote entities.
//!
//! The backend keeps its wire vocabulary in Spanish; the serde renames
//! below pin each variant to the exact string the API emits so the enums
//! round-trip without a mapping table.

use serde::{Deserialize, Serialize};

/// Order lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum OrderStatus {
    #[default]
    #[serde(rename = "pendiente")]
    Pending,
    #[serde(rename = "confirmado")]
    Confirmed,
    #[serde(rename = "preparando")]
    Preparing,
    #[serde(rename = "enviado")]
    Shipped,
    #[serde(rename = "entregado")]
    Delivered,
    #[serde(rename = "cancelado")]
    Cancelled,
}

impl OrderStatus {
    /// The wire string, for use in query parameters.
    #[must_use]
    pub const fn as_wire_str(self) -> &'static str {
        match self {
            Self::Pending => "pendiente",
            Self::Confirmed => "confirmado",
            Self::Preparing => "preparando",
            Self::Shipped => "enviado",
            Self::Delivered => "entregado",
            Self::Cancelled => "cancelado",
        }
    }
}

/// Payment lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum PaymentStatus {
    #[default]
    #[serde(rename = "pendiente")]
    Pending,
    #[serde(rename = "aprobado")]
    Approved,
    #[serde(rename = "rechazado")]
    Rejected,
    #[serde(rename = "reembolsado")]
    Refunded,
}

/// How an order reaches the customer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShipmentKind {
    #[serde(rename = "retiro")]
    Pickup,
    #[serde(rename = "delivery")]
    Delivery,
}

/// Shipment tracking status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ShipmentStatus {
    #[default]
    #[serde(rename = "pendiente")]
    Pending,
    #[serde(rename = "en_camino")]
    InTransit,
    #[serde(rename = "entregado")]
    Delivered,
}

/// Notification delivery channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationChannel {
    Email,
    Sms,
    Push,
}

/// Notification delivery status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum NotificationStatus {
    #[default]
    #[serde(rename = "pendiente")]
    Pending,
    #[serde(rename = "enviado")]
    Sent,
    #[serde(rename = "fallido")]
    Failed,
}
