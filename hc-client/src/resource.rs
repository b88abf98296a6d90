//! REST resources exposed by the backend
//!
//! Every resource follows `GET /R`, `POST /R`, `PUT /R/{id}`, `DELETE /R/{id}`.

use serde::Serialize;
use serde::de::DeserializeOwned;

use shared::models::{
    Booth, BoothPayload, Center, CenterPayload, Constituency, ConstituencyPayload, FamilyBooking,
    Holiday, HolidayPayload, Slot, SlotPayload, SlotType, SlotTypePayload,
};

/// A record type served under one REST path
pub trait Resource: DeserializeOwned + Send + Sync + 'static {
    /// Path segment relative to the API root
    const PATH: &'static str;

    /// Body sent on create and update
    type Payload: Serialize + Send + Sync;

    fn id(&self) -> i64;

    fn item_path(id: i64) -> String {
        format!("{}/{}", Self::PATH, id)
    }
}

impl Resource for Constituency {
    const PATH: &'static str = "Constituency";
    type Payload = ConstituencyPayload;

    fn id(&self) -> i64 {
        self.id
    }
}

impl Resource for Booth {
    const PATH: &'static str = "Booth";
    type Payload = BoothPayload;

    fn id(&self) -> i64 {
        self.id
    }
}

impl Resource for Center {
    const PATH: &'static str = "Center";
    type Payload = CenterPayload;

    fn id(&self) -> i64 {
        self.id
    }
}

impl Resource for SlotType {
    const PATH: &'static str = "SlotType";
    type Payload = SlotTypePayload;

    fn id(&self) -> i64 {
        self.id
    }
}

impl Resource for Slot {
    const PATH: &'static str = "Slot";
    type Payload = SlotPayload;

    fn id(&self) -> i64 {
        self.id
    }
}

impl Resource for Holiday {
    const PATH: &'static str = "Holiday";
    type Payload = HolidayPayload;

    fn id(&self) -> i64 {
        self.id
    }
}

/// Family bookings are read from the appointment booking endpoint
impl Resource for FamilyBooking {
    const PATH: &'static str = "AppointmentBooking";
    type Payload = FamilyBooking;

    fn id(&self) -> i64 {
        self.family_booking_id
    }
}
