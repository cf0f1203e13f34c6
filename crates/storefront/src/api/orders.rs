//! Order, payment, shipment, and notification passthroughs.
//!
//! Direct proxies to the backend with no fallback data; failures
//! propagate as [`ApiError`] and user-facing messaging is the caller's
//! concern.

use tracing::instrument;

use fresh_bowl_core::{
    Notification, Order, OrderDraft, OrderId, OrderStatus, Payment, PaymentDraft, PaymentId,
    Shipment, ShipmentId, UserId,
};

use super::wire::{
    NotificationWire, OrderDraftWire, OrderPatchWire, OrderWire, PaymentDraftWire, PaymentWire,
    ShipmentWire,
};
use super::{ApiClient, ApiError};

impl ApiClient {
    /// Create an order.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` on any failure.
    #[instrument(skip(self, draft))]
    pub async fn create_order(&self, draft: &OrderDraft) -> Result<Order, ApiError> {
        let body = OrderDraftWire::from_draft(draft, self.currency());
        let wire: OrderWire = self.post_json("/pedidos/", &body).await?;
        wire.into_order(self.currency())
    }

    /// List orders, optionally filtered by user and status.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` on any failure.
    #[instrument(skip(self))]
    pub async fn orders(
        &self,
        user: Option<&UserId>,
        status: Option<OrderStatus>,
    ) -> Result<Vec<Order>, ApiError> {
        let mut query = Vec::new();
        if let Some(user) = user {
            query.push(("usuario_id", user.as_str().to_owned()));
        }
        if let Some(status) = status {
            query.push(("estado", status.as_wire_str().to_owned()));
        }

        let wires: Vec<OrderWire> = self.get_json("/pedidos/", &query).await?;
        wires
            .into_iter()
            .map(|w| w.into_order(self.currency()))
            .collect()
    }

    /// Fetch an order by identifier.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` on any failure, including 404.
    #[instrument(skip(self), fields(id = %id))]
    pub async fn order(&self, id: &OrderId) -> Result<Order, ApiError> {
        let wire: OrderWire = self.get_json(&format!("/pedidos/{id}"), &[]).await?;
        wire.into_order(self.currency())
    }

    /// Fetch a user's order history.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` on any failure.
    #[instrument(skip(self), fields(user = %user))]
    pub async fn order_history(&self, user: &UserId) -> Result<Vec<Order>, ApiError> {
        let wires: Vec<OrderWire> = self
            .get_json(&format!("/pedidos/usuario/{user}/historial"), &[])
            .await?;
        wires
            .into_iter()
            .map(|w| w.into_order(self.currency()))
            .collect()
    }

    /// Update an order's status.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` on any failure.
    #[instrument(skip(self), fields(id = %id))]
    pub async fn update_order(
        &self,
        id: &OrderId,
        status: OrderStatus,
    ) -> Result<Order, ApiError> {
        let body = OrderPatchWire {
            estado: Some(status),
        };
        let wire: OrderWire = self.put_json(&format!("/pedidos/{id}"), &body).await?;
        wire.into_order(self.currency())
    }

    /// Cancel an order.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` on any failure.
    #[instrument(skip(self), fields(id = %id))]
    pub async fn cancel_order(&self, id: &OrderId) -> Result<(), ApiError> {
        self.delete(&format!("/pedidos/{id}")).await
    }

    /// Create a payment for an order.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` on any failure.
    #[instrument(skip(self, draft))]
    pub async fn create_payment(&self, draft: &PaymentDraft) -> Result<Payment, ApiError> {
        let body = PaymentDraftWire::from_draft(draft, self.currency());
        let wire: PaymentWire = self.post_json("/pagos/", &body).await?;
        wire.into_payment(self.currency())
    }

    /// Approve a pending payment.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` on any failure.
    #[instrument(skip(self), fields(id = %id))]
    pub async fn approve_payment(&self, id: &PaymentId) -> Result<Payment, ApiError> {
        let wire: PaymentWire = self
            .post_json(&format!("/pagos/{id}/aprobar"), &serde_json::json!({}))
            .await?;
        wire.into_payment(self.currency())
    }

    /// Fetch a shipment by identifier.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` on any failure, including 404.
    #[instrument(skip(self), fields(id = %id))]
    pub async fn shipment(&self, id: &ShipmentId) -> Result<Shipment, ApiError> {
        let wire: ShipmentWire = self.get_json(&format!("/envios/{id}"), &[]).await?;
        Ok(wire.into())
    }

    /// Fetch a shipment by carrier tracking code.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` on any failure, including 404.
    #[instrument(skip(self))]
    pub async fn shipment_by_tracking(&self, tracking: &str) -> Result<Shipment, ApiError> {
        let wire: ShipmentWire = self
            .get_json(&format!("/envios/tracking/{tracking}"), &[])
            .await?;
        Ok(wire.into())
    }

    /// List a user's notifications.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` on any failure.
    #[instrument(skip(self), fields(user = %user))]
    pub async fn notifications(&self, user: &UserId) -> Result<Vec<Notification>, ApiError> {
        let query = [("usuario_id", user.as_str().to_owned())];
        let wires: Vec<NotificationWire> = self.get_json("/notificaciones/", &query).await?;
        Ok(wires.into_iter().map(Notification::from).collect())
    }
}
