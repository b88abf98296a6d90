//! Master-data loader
//!
//! Holds every reference collection the admin tabs need, each indexed by id
//! once per load so foreign-key lookups stay constant-time.

use std::collections::HashMap;
use std::fmt;

use futures::future::try_join_all;
use hc_client::models::{Booth, Center, Constituency, FamilyBooking, Holiday, Slot, SlotType};
use hc_client::{ClientResult, HcClient, HttpClient, Resource};

use crate::cascade::parse_id;

/// Placeholder rendered for a missing reference
pub const MISSING: &str = "-";

/// Backend collections known to the console
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    Constituency,
    Booth,
    Center,
    SlotType,
    Slot,
    Holiday,
    FamilyBooking,
}

impl ResourceKind {
    pub const ALL: [ResourceKind; 7] = [
        Self::Constituency,
        Self::Booth,
        Self::Center,
        Self::SlotType,
        Self::Slot,
        Self::Holiday,
        Self::FamilyBooking,
    ];

    pub fn path(self) -> &'static str {
        match self {
            Self::Constituency => Constituency::PATH,
            Self::Booth => Booth::PATH,
            Self::Center => Center::PATH,
            Self::SlotType => SlotType::PATH,
            Self::Slot => Slot::PATH,
            Self::Holiday => Holiday::PATH,
            Self::FamilyBooking => FamilyBooking::PATH,
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// A loaded list plus its id index
#[derive(Debug, Clone)]
pub struct Collection<T> {
    items: Vec<T>,
    by_id: HashMap<i64, usize>,
}

impl<T> Default for Collection<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            by_id: HashMap::new(),
        }
    }
}

impl<T: Resource> Collection<T> {
    pub fn new(items: Vec<T>) -> Self {
        let mut collection = Self::default();
        collection.replace(items);
        collection
    }

    /// Swap in a freshly fetched list and rebuild the index
    pub fn replace(&mut self, items: Vec<T>) {
        self.by_id = items
            .iter()
            .enumerate()
            .map(|(index, item)| (item.id(), index))
            .collect();
        self.items = items;
    }

    pub fn get(&self, id: i64) -> Option<&T> {
        self.by_id.get(&id).map(|&index| &self.items[index])
    }

    pub fn contains(&self, id: i64) -> bool {
        self.by_id.contains_key(&id)
    }
}

impl<T> Collection<T> {
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }
}

/// One fetched collection, tagged by kind
#[derive(Debug)]
enum Fetched {
    Constituencies(Vec<Constituency>),
    Booths(Vec<Booth>),
    Centers(Vec<Center>),
    SlotTypes(Vec<SlotType>),
    Slots(Vec<Slot>),
    Holidays(Vec<Holiday>),
    Bookings(Vec<FamilyBooking>),
}

async fn fetch<H: HttpClient>(api: &HcClient<H>, kind: ResourceKind) -> ClientResult<Fetched> {
    Ok(match kind {
        ResourceKind::Constituency => Fetched::Constituencies(api.list().await?),
        ResourceKind::Booth => Fetched::Booths(api.list().await?),
        ResourceKind::Center => Fetched::Centers(api.list().await?),
        ResourceKind::SlotType => Fetched::SlotTypes(api.list().await?),
        ResourceKind::Slot => Fetched::Slots(api.list().await?),
        ResourceKind::Holiday => Fetched::Holidays(api.list().await?),
        ResourceKind::FamilyBooking => Fetched::Bookings(api.list().await?),
    })
}

/// Every collection the console renders, replaced wholesale on reload
#[derive(Debug, Clone, Default)]
pub struct MasterData {
    pub constituencies: Collection<Constituency>,
    pub booths: Collection<Booth>,
    pub centers: Collection<Center>,
    pub slot_types: Collection<SlotType>,
    pub slots: Collection<Slot>,
    pub holidays: Collection<Holiday>,
    pub bookings: Collection<FamilyBooking>,
}

impl MasterData {
    /// Fetch every collection in one parallel batch
    pub async fn load_all<H: HttpClient>(&mut self, api: &HcClient<H>) -> ClientResult<()> {
        self.reload(api, &ResourceKind::ALL).await
    }

    /// Re-fetch `kinds` jointly
    ///
    /// Nothing is applied unless every fetch succeeds.
    pub async fn reload<H: HttpClient>(
        &mut self,
        api: &HcClient<H>,
        kinds: &[ResourceKind],
    ) -> ClientResult<()> {
        let mut unique: Vec<ResourceKind> = Vec::with_capacity(kinds.len());
        for kind in kinds {
            if !unique.contains(kind) {
                unique.push(*kind);
            }
        }

        let fetched = try_join_all(unique.iter().map(|kind| fetch(api, *kind))).await?;
        tracing::debug!(kinds = ?unique, "Reference data reloaded");

        for batch in fetched {
            self.apply(batch);
        }
        Ok(())
    }

    fn apply(&mut self, batch: Fetched) {
        match batch {
            Fetched::Constituencies(items) => self.constituencies.replace(items),
            Fetched::Booths(items) => self.booths.replace(items),
            Fetched::Centers(items) => self.centers.replace(items),
            Fetched::SlotTypes(items) => self.slot_types.replace(items),
            Fetched::Slots(items) => self.slots.replace(items),
            Fetched::Holidays(items) => self.holidays.replace(items),
            Fetched::Bookings(items) => self.bookings.replace(items),
        }
    }

    /// Selector choices as `(id, label)`
    ///
    /// `parent` narrows centers to a booth and slots to a center. Other
    /// sources ignore it.
    pub fn options(&self, source: ResourceKind, parent: Option<i64>) -> Vec<(i64, String)> {
        match source {
            ResourceKind::Constituency => self
                .constituencies
                .iter()
                .map(|c| (c.id, c.label()))
                .collect(),
            ResourceKind::Booth => self.booths.iter().map(|b| (b.id, b.label())).collect(),
            ResourceKind::Center => self
                .centers
                .iter()
                .filter(|c| Some(c.booth_id) == parent)
                .map(|c| (c.id, c.label()))
                .collect(),
            ResourceKind::SlotType => self
                .slot_types
                .iter()
                .map(|t| (t.id, t.label.clone()))
                .collect(),
            ResourceKind::Slot => self
                .slots
                .iter()
                .filter(|s| Some(s.center_id) == parent)
                .map(|s| (s.id, self.slot_label(s)))
                .collect(),
            ResourceKind::Holiday => self
                .holidays
                .iter()
                .map(|h| (h.id, h.date_part().to_string()))
                .collect(),
            ResourceKind::FamilyBooking => self
                .bookings
                .iter()
                .map(|b| (b.family_booking_id, b.family_booking_id.to_string()))
                .collect(),
        }
    }

    /// Options for a selector whose parent value is still a raw form string
    pub fn options_under(&self, source: ResourceKind, parent: &str) -> Vec<(i64, String)> {
        match parse_id(parent) {
            Some(id) => self.options(source, Some(id)),
            None if matches!(source, ResourceKind::Center | ResourceKind::Slot) => Vec::new(),
            None => self.options(source, None),
        }
    }

    pub fn constituency_name(&self, id: i64) -> String {
        self.constituencies
            .get(id)
            .map(|c| c.name.clone())
            .unwrap_or_else(|| MISSING.to_string())
    }

    pub fn booth_name(&self, id: Option<i64>) -> String {
        id.and_then(|id| self.booths.get(id))
            .map(|b| b.label())
            .unwrap_or_else(|| MISSING.to_string())
    }

    pub fn center_name(&self, id: Option<i64>) -> String {
        id.and_then(|id| self.centers.get(id))
            .map(|c| c.label())
            .unwrap_or_else(|| MISSING.to_string())
    }

    pub fn slot_type_name(&self, id: i64) -> String {
        self.slot_types
            .get(id)
            .map(|t| t.label.clone())
            .unwrap_or_else(|| MISSING.to_string())
    }

    /// "Morning (09:00 - 12:00)"
    pub fn slot_label(&self, slot: &Slot) -> String {
        match self.slot_types.get(slot.slot_type_id) {
            Some(slot_type) => format!("{} ({})", slot_type.label, slot.window()),
            None => slot.window(),
        }
    }
}
