//! Page coordinator
//!
//! Owns the shared [`MasterData`], one [`CrudTab`] per editable resource and
//! the booking viewer, and routes every action to the right tab.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use hc_client::models::{
    Booth, Center, Constituency, FamilyBooking, Holiday, Slot, SlotType, UploadOutcome,
};
use hc_client::{ClientError, HcClient, HttpClient, NetworkHttpClient};

use crate::appointment::{AppointmentDraft, LocalAppointments};
use crate::bookings::{FamilyBookingViewer, FilterOptions};
use crate::crud::{CrudTab, SaveOutcome};
use crate::entity::AdminEntity;
use crate::error::{ConsoleError, ConsoleResult};
use crate::master::{MasterData, ResourceKind};

/// Top-level navigation
///
/// The slot tab covers both slot types and slot times.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    Constituency,
    Booth,
    Center,
    Slot,
    Holiday,
    #[default]
    FamilyBooking,
}

impl Tab {
    pub const ALL: [Tab; 6] = [
        Self::Constituency,
        Self::Booth,
        Self::Center,
        Self::Slot,
        Self::Holiday,
        Self::FamilyBooking,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Self::Constituency => "Constituency",
            Self::Booth => "Booth",
            Self::Center => "Center",
            Self::Slot => "Slot",
            Self::Holiday => "Holiday",
            Self::FamilyBooking => "Family Booking",
        }
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

impl FromStr for Tab {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .collect::<String>()
            .to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|tab| tab.title().replace(' ', "").to_ascii_lowercase() == key)
            .ok_or_else(|| format!("unknown tab `{s}`"))
    }
}

/// One tab state per editable resource
#[derive(Debug, Default)]
pub struct Tabs {
    pub constituency: CrudTab<Constituency>,
    pub booth: CrudTab<Booth>,
    pub center: CrudTab<Center>,
    pub slot_type: CrudTab<SlotType>,
    pub slot: CrudTab<Slot>,
    pub holiday: CrudTab<Holiday>,
}

pub struct AdminPage<H: HttpClient = NetworkHttpClient> {
    api: HcClient<H>,
    master: MasterData,
    tabs: Tabs,
    active: Tab,
    bookings: FamilyBookingViewer,
    appointments: LocalAppointments,
}

impl<H: HttpClient> AdminPage<H> {
    pub fn new(api: HcClient<H>) -> Self {
        Self {
            api,
            master: MasterData::default(),
            tabs: Tabs::default(),
            active: Tab::default(),
            bookings: FamilyBookingViewer::default(),
            appointments: LocalAppointments::default(),
        }
    }

    pub fn api(&self) -> &HcClient<H> {
        &self.api
    }

    pub fn master(&self) -> &MasterData {
        &self.master
    }

    pub fn active(&self) -> Tab {
        self.active
    }

    /// Switch tabs and refresh what the new tab shows
    ///
    /// Only the tab's own resources are fetched, so a failing endpoint that
    /// belongs to another tab does not blank this one.
    pub async fn select_tab(&mut self, tab: Tab) -> ConsoleResult<()> {
        tracing::debug!(%tab, "Tab selected");
        self.active = tab;
        match tab {
            Tab::Constituency => self.load::<Constituency>().await,
            Tab::Booth => self.load::<Booth>().await,
            Tab::Center => self.load::<Center>().await,
            Tab::Slot => {
                self.load::<SlotType>().await?;
                self.load::<Slot>().await
            }
            Tab::Holiday => self.load::<Holiday>().await,
            Tab::FamilyBooking => self.reload_bookings().await,
        }
    }

    /// Fetch every collection in one batch
    ///
    /// A failure is logged and leaves the page usable with whatever was
    /// loaded before (nothing, on first mount).
    pub async fn mount(&mut self) {
        match self.master.load_all(&self.api).await {
            Ok(()) => tracing::info!(
                constituencies = self.master.constituencies.len(),
                booths = self.master.booths.len(),
                centers = self.master.centers.len(),
                bookings = self.master.bookings.len(),
                "Master data loaded"
            ),
            Err(e) => tracing::error!(error = %e, "Failed to load master data"),
        }
    }

    pub fn tab<E: AdminEntity>(&self) -> &CrudTab<E> {
        E::tab(&self.tabs)
    }

    pub fn tab_mut<E: AdminEntity>(&mut self) -> &mut CrudTab<E> {
        E::tab_mut(&mut self.tabs)
    }

    pub fn set<E: AdminEntity>(&mut self, field: &str, value: &str) -> ConsoleResult<()> {
        E::tab_mut(&mut self.tabs).set(field, value)
    }

    pub fn field_options<E: AdminEntity>(&self, field: &str) -> ConsoleResult<Vec<(i64, String)>> {
        E::tab(&self.tabs).field_options(field, &self.master)
    }

    pub async fn load<E: AdminEntity>(&mut self) -> ConsoleResult<()> {
        E::tab_mut(&mut self.tabs).load(&self.api, &mut self.master).await
    }

    pub async fn save<E: AdminEntity>(&mut self) -> ConsoleResult<SaveOutcome> {
        E::tab_mut(&mut self.tabs).save(&self.api, &mut self.master).await
    }

    pub fn edit<E: AdminEntity>(&mut self, id: i64) -> ConsoleResult<()> {
        E::tab_mut(&mut self.tabs).edit(id, &self.master)
    }

    pub fn cancel<E: AdminEntity>(&mut self) {
        E::tab_mut(&mut self.tabs).cancel();
    }

    pub async fn delete<E: AdminEntity>(&mut self, id: i64) -> ConsoleResult<()> {
        E::tab_mut(&mut self.tabs)
            .delete(id, &self.api, &mut self.master)
            .await
    }

    pub fn rows<E: AdminEntity>(&self) -> Vec<Vec<String>> {
        E::tab(&self.tabs).rows(&self.master)
    }

    /// Bulk constituency import from an Excel workbook
    ///
    /// Constituencies are reloaded after an accepted upload.
    pub async fn import(&mut self, path: impl AsRef<Path>) -> ConsoleResult<UploadOutcome> {
        let path = path.as_ref();
        let outcome = match self.api.upload_constituency_data(path).await {
            Ok(outcome) => outcome,
            Err(ClientError::Rejected(rejection)) => {
                return Err(ConsoleError::validation(rejection.to_string()));
            }
            Err(e) => {
                tracing::error!(path = %path.display(), error = %e, "Upload failed");
                return Err(ConsoleError::UploadFailed(e.to_string()));
            }
        };

        if !outcome.success {
            let reason = outcome
                .error
                .or(outcome.message)
                .unwrap_or_else(|| "Unknown error".to_string());
            tracing::warn!(path = %path.display(), %reason, "Import refused");
            return Err(ConsoleError::UploadFailed(reason));
        }

        tracing::info!(path = %path.display(), "Constituency data imported");
        let _ = self.load::<Constituency>().await;
        Ok(outcome)
    }

    pub async fn reload_bookings(&mut self) -> ConsoleResult<()> {
        self.master
            .reload(&self.api, &[ResourceKind::FamilyBooking])
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "Failed to load family bookings");
                ConsoleError::from(e)
            })
    }

    pub fn bookings(&self) -> &FamilyBookingViewer {
        &self.bookings
    }

    pub fn bookings_mut(&mut self) -> &mut FamilyBookingViewer {
        &mut self.bookings
    }

    pub fn visible_bookings(&self) -> Vec<&FamilyBooking> {
        self.bookings.visible(self.master.bookings.as_slice())
    }

    pub fn booking_filter_options(&self) -> FilterOptions {
        FilterOptions::from_bookings(self.master.bookings.as_slice())
    }

    /// Session-only appointment request; never sent to the backend
    pub fn create_local_appointment(&mut self, draft: &AppointmentDraft) -> ConsoleResult<i64> {
        self.appointments.create(draft, &self.master)
    }

    pub fn local_appointments(&self) -> &LocalAppointments {
        &self.appointments
    }
}
