//! Static request-type / item-status whitelist.
//!
//! Fixed lookup table deciding which request types an item status permits.
//! Plain immutable data dispatched by `match`; not consulted by the due date
//! engine itself.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ItemStatus {
    #[serde(rename = "")]
    None,
    #[serde(rename = "Available")]
    Available,
    #[serde(rename = "Awaiting pickup")]
    AwaitingPickup,
    #[serde(rename = "Awaiting delivery")]
    AwaitingDelivery,
    #[serde(rename = "Checked out")]
    CheckedOut,
    #[serde(rename = "In process")]
    InProcess,
    #[serde(rename = "In transit")]
    InTransit,
    #[serde(rename = "Missing")]
    Missing,
    #[serde(rename = "On order")]
    OnOrder,
    #[serde(rename = "Paged")]
    Paged,
    #[serde(rename = "Declared lost")]
    DeclaredLost,
    #[serde(rename = "Claimed returned")]
    ClaimedReturned,
    #[serde(rename = "Withdrawn")]
    Withdrawn,
    #[serde(rename = "Lost and paid")]
    LostAndPaid,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RequestType {
    #[serde(rename = "")]
    None,
    #[serde(rename = "Hold")]
    Hold,
    #[serde(rename = "Recall")]
    Recall,
    #[serde(rename = "Page")]
    Page,
}

/// Whether an item in `status` accepts a request of `request_type`.
pub fn can_create_request(request_type: RequestType, status: ItemStatus) -> bool {
    use ItemStatus as S;
    match request_type {
        RequestType::Recall => matches!(
            status,
            S::CheckedOut
                | S::AwaitingPickup
                | S::AwaitingDelivery
                | S::InTransit
                | S::Paged
                | S::OnOrder
                | S::InProcess
        ),
        RequestType::Hold => matches!(
            status,
            S::CheckedOut
                | S::AwaitingPickup
                | S::AwaitingDelivery
                | S::InTransit
                | S::Missing
                | S::Paged
                | S::OnOrder
                | S::InProcess
                | S::None
        ),
        RequestType::Page => matches!(status, S::Available),
        RequestType::None => false,
    }
}
