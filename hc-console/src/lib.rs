//! HC Console - admin console for the health-card appointment backend
//!
//! Reference-data tabs (constituency, booth, center, slot types and times,
//! holidays) built on one generic [`CrudTab`], plus a read-only family
//! booking viewer. All records come from the backend through
//! [`hc_client::HcClient`]; nothing is persisted locally.

pub mod appointment;
pub mod bookings;
pub mod cascade;
pub mod config;
pub mod crud;
pub mod entities;
pub mod entity;
pub mod error;
pub mod logger;
pub mod master;
pub mod page;
pub mod pagination;
pub mod render;
pub mod schema;

#[cfg(test)]
mod testing;

pub use appointment::AppointmentDraft;
pub use bookings::{BookingFilter, FamilyBookingViewer, FilterOptions};
pub use cascade::SelectionCascade;
pub use config::ConsoleConfig;
pub use crud::{CrudTab, Mode, SaveOutcome};
pub use entity::AdminEntity;
pub use error::{ConsoleError, ConsoleResult};
pub use master::{Collection, MasterData, ResourceKind};
pub use page::{AdminPage, Tab};
pub use pagination::{PageSize, Paginator};
