//! Family Booking Model (read-only)

use serde::{Deserialize, Serialize};

/// One family's booking: chosen center/slot, assisting karyakarta, members
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FamilyBooking {
    pub family_booking_id: i64,
    #[serde(default)]
    pub family_id: Option<i64>,
    #[serde(default)]
    pub constituency_name: Option<String>,
    #[serde(default)]
    pub constituency_number: Option<i64>,
    #[serde(default)]
    pub part_number: Option<i64>,
    #[serde(default)]
    pub town: Option<String>,
    #[serde(default)]
    pub center_name: Option<String>,
    #[serde(default)]
    pub center_address: Option<String>,
    #[serde(default)]
    pub slot_type_name: Option<String>,
    #[serde(default)]
    pub appointment_date: Option<String>,
    #[serde(default)]
    pub booking_time: Option<String>,
    #[serde(default)]
    pub karyakarta_name: Option<String>,
    #[serde(default)]
    pub karyakarta_contact_number: Option<String>,
    #[serde(default)]
    pub members: Vec<FamilyMember>,
}

impl FamilyBooking {
    /// The flagged family head, falling back to the first member
    pub fn head(&self) -> Option<&FamilyMember> {
        self.members
            .iter()
            .find(|m| m.is_family_head)
            .or_else(|| self.members.first())
    }
}

/// Member covered by a family booking
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FamilyMember {
    pub family_member_id: i64,
    #[serde(default)]
    pub name: String,
    /// Serialized as `vCardId`
    #[serde(default)]
    pub v_card_id: Option<String>,
    #[serde(default)]
    pub age: Option<i64>,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub contact_number: Option<String>,
    #[serde(default)]
    pub serial_number: Option<i64>,
    #[serde(default)]
    pub is_family_head: bool,
    #[serde(default)]
    pub is_minor: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn member(id: i64, head: bool) -> FamilyMember {
        FamilyMember {
            family_member_id: id,
            name: format!("Member {}", id),
            v_card_id: None,
            age: None,
            gender: None,
            contact_number: None,
            serial_number: None,
            is_family_head: head,
            is_minor: false,
        }
    }

    #[test]
    fn test_vcard_key() {
        let m: FamilyMember =
            serde_json::from_str(r#"{"familyMemberId":1,"name":"A","vCardId":"XYZ123"}"#).unwrap();
        assert_eq!(m.v_card_id.as_deref(), Some("XYZ123"));
    }

    #[test]
    fn test_head_prefers_flagged_member() {
        let mut b: FamilyBooking = serde_json::from_str(r#"{"familyBookingId":9}"#).unwrap();
        assert!(b.head().is_none());

        b.members = vec![member(1, false), member(2, true)];
        assert_eq!(b.head().map(|m| m.family_member_id), Some(2));

        b.members = vec![member(1, false), member(2, false)];
        assert_eq!(b.head().map(|m| m.family_member_id), Some(1));
    }
}
