//! Plain-text rendering for the terminal front end

use std::fmt::Write;

use hc_client::models::FamilyBooking;

use crate::appointment::LocalAppointment;
use crate::bookings::{FilterOptions, format_appointment_date, format_booking_time};
use crate::crud::{CrudTab, Mode};
use crate::entity::AdminEntity;
use crate::master::{MISSING, MasterData};
use crate::schema::{Draft, FieldKind};

/// Left-aligned columns separated by two spaces
pub fn table(columns: &[&str], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = columns.iter().map(|c| c.chars().count()).collect();
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    let header: Vec<String> = columns.iter().map(|c| c.to_string()).collect();
    push_line(&mut out, &header, &widths);
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    push_line(&mut out, &rule, &widths);
    for row in rows {
        push_line(&mut out, row, &widths);
    }
    out
}

fn push_line(out: &mut String, cells: &[String], widths: &[usize]) {
    let line = cells
        .iter()
        .zip(widths)
        .map(|(cell, &width)| format!("{cell:<width$}"))
        .collect::<Vec<_>>()
        .join("  ");
    out.push_str(line.trim_end());
    out.push('\n');
}

/// Current page of a tab plus its pager footer
pub fn tab_page<E: AdminEntity>(tab: &CrudTab<E>, master: &MasterData) -> String {
    let total = E::collection(master).len();
    let pager = tab.pager();
    let mut out = table(E::columns(), &tab.rows(master));
    if total == 0 {
        let _ = writeln!(out, "No {} records", E::LABEL);
    }
    let _ = writeln!(
        out,
        "Page {} of {} ({} per page, {} total)",
        pager.current(),
        pager.total_pages(total).max(1),
        pager.page_size(),
        total
    );
    out
}

/// Form fields with current values and, for selectors, the choices
pub fn form<E: AdminEntity>(tab: &CrudTab<E>, master: &MasterData) -> String {
    let mut out = match tab.mode() {
        Mode::Creating => format!("New {}\n", E::LABEL),
        Mode::Editing(id) => format!("Editing {} {}\n", E::LABEL, id),
    };
    for spec in E::fields() {
        let value = tab.draft().get(spec.name).unwrap_or_default();
        let marker = if spec.required { "*" } else { " " };
        let _ = writeln!(out, "{marker} {:<16} {:<18} {}", spec.name, spec.label, value);
        if let FieldKind::Select { .. } = spec.kind {
            for (id, label) in tab.field_options(spec.name, master).unwrap_or_default() {
                let _ = writeln!(out, "      {id:>6}  {label}");
            }
        }
    }
    out
}

/// One-line accordion header
pub fn booking_header(booking: &FamilyBooking) -> String {
    let head = booking.head();
    let or_missing = |value: Option<&String>| value.cloned().unwrap_or_else(|| MISSING.to_string());
    format!(
        "#{} {} | VCard: {} | Mobile: {} | Constituency: {} | Part: {} | Center: {}",
        booking.family_booking_id,
        head.map(|m| m.name.clone()).unwrap_or_else(|| MISSING.to_string()),
        or_missing(head.and_then(|m| m.v_card_id.as_ref())),
        or_missing(head.and_then(|m| m.contact_number.as_ref())),
        or_missing(booking.constituency_name.as_ref()),
        booking
            .part_number
            .map(|p| p.to_string())
            .unwrap_or_else(|| MISSING.to_string()),
        or_missing(booking.center_name.as_ref()),
    )
}

/// Expanded booking: members, appointment and karyakarta
pub fn booking_detail(booking: &FamilyBooking) -> String {
    let text = |value: &Option<String>| value.clone().unwrap_or_else(|| MISSING.to_string());
    let mut out = String::new();

    let family_id = booking
        .family_id
        .map_or_else(|| MISSING.to_string(), |id| id.to_string());
    let _ = writeln!(out, "Family ID:      {family_id}");
    let _ = writeln!(out, "Constituency:   {}", text(&booking.constituency_name));
    let _ = writeln!(out, "Town:           {}", text(&booking.town));

    let members: Vec<Vec<String>> = booking
        .members
        .iter()
        .map(|m| {
            vec![
                m.serial_number.map_or_else(String::new, |n| n.to_string()),
                m.name.clone(),
                text(&m.v_card_id),
                m.age.map_or_else(|| MISSING.to_string(), |a| a.to_string()),
                text(&m.gender),
                text(&m.contact_number),
                if m.is_family_head { "Head" } else { "" }.to_string(),
                if m.is_minor { "Minor" } else { "" }.to_string(),
            ]
        })
        .collect();
    out.push('\n');
    out.push_str(&table(
        &["Sr", "Name", "VCard", "Age", "Gender", "Contact", "Role", ""],
        &members,
    ));
    out.push('\n');

    let _ = writeln!(out, "Center:         {}", text(&booking.center_name));
    let _ = writeln!(out, "Center Address: {}", text(&booking.center_address));
    let _ = writeln!(out, "Slot Type:      {}", text(&booking.slot_type_name));
    let _ = writeln!(
        out,
        "Appointment:    {}",
        booking
            .appointment_date
            .as_deref()
            .map_or_else(|| MISSING.to_string(), format_appointment_date)
    );
    let _ = writeln!(
        out,
        "Booked At:      {}",
        booking
            .booking_time
            .as_deref()
            .map_or_else(|| MISSING.to_string(), format_booking_time)
    );
    let _ = writeln!(out, "Karyakarta:     {}", text(&booking.karyakarta_name));
    let _ = writeln!(out, "Karyakarta No:  {}", text(&booking.karyakarta_contact_number));
    out
}

/// Values the booking filters can take
pub fn filter_options(options: &FilterOptions) -> String {
    let parts: Vec<String> = options.part_numbers.iter().map(i64::to_string).collect();
    let mut out = String::new();
    let _ = writeln!(out, "Constituencies: {}", options.constituencies.join(", "));
    let _ = writeln!(out, "Part numbers:   {}", parts.join(", "));
    let _ = writeln!(out, "Centers:        {}", options.centers.join(", "));
    out
}

/// Locally held appointment request
pub fn appointment(record: &LocalAppointment) -> String {
    let text = |value: &Option<String>| value.clone().unwrap_or_else(|| MISSING.to_string());
    let mut out = String::new();
    let _ = writeln!(out, "Request:  {} ({:?})", record.appointment_request_id, record.status);
    let _ = writeln!(out, "Voter:    {}", record.voter_identifier);
    let _ = writeln!(out, "Name:     {}", text(&record.hch_name));
    let _ = writeln!(out, "Date:     {}", record.appointment_date);
    let _ = writeln!(
        out,
        "Booth:    {}",
        record.booth_details.as_ref().map_or_else(|| MISSING.to_string(), |b| b.name.clone())
    );
    let _ = writeln!(
        out,
        "Center:   {}",
        record.center_details.as_ref().map_or_else(|| MISSING.to_string(), |c| c.label())
    );
    let _ = writeln!(
        out,
        "Slot:     {}",
        record.slot_details.as_ref().map_or_else(
            || MISSING.to_string(),
            |s| format!("{} - {}", s.start_time, s.end_time)
        )
    );
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use hc_client::models::Constituency;

    #[test]
    fn test_table_alignment() {
        let out = table(
            &["ID", "Name"],
            &[vec!["1".into(), "North".into()], vec!["12".into(), "S".into()]],
        );
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "ID  Name");
        assert_eq!(lines[1], "--  -----");
        assert_eq!(lines[2], "1   North");
        assert_eq!(lines[3], "12  S");
    }

    #[test]
    fn test_empty_tab_footer() {
        let tab = CrudTab::<Constituency>::default();
        let out = tab_page(&tab, &MasterData::default());
        assert!(out.contains("No Constituency records"));
        assert!(out.ends_with("Page 1 of 1 (10 per page, 0 total)\n"));
    }

    #[test]
    fn test_booking_header_falls_back_to_first_member() {
        let booking: FamilyBooking = serde_json::from_value(serde_json::json!({
            "familyBookingId": 3,
            "constituencyName": "C1",
            "partNumber": 12,
            "centerName": "Center5",
            "members": [
                { "familyMemberId": 1, "name": "Asha", "vCardId": "V1", "isFamilyHead": false },
                { "familyMemberId": 2, "name": "Ravi", "isFamilyHead": false }
            ]
        }))
        .unwrap();

        let header = booking_header(&booking);
        assert!(header.starts_with("#3 Asha | VCard: V1 | Mobile: -"));
        let detail = booking_detail(&booking);
        assert!(detail.contains("Ravi"));
        assert!(detail.starts_with("Family ID:      -\n"));
    }

    #[test]
    fn test_filter_choices() {
        let options = FilterOptions {
            constituencies: vec!["C1".into(), "C2".into()],
            part_numbers: vec![3, 12],
            centers: Vec::new(),
        };
        let out = filter_options(&options);
        assert!(out.contains("Constituencies: C1, C2\n"));
        assert!(out.contains("Part numbers:   3, 12\n"));
        assert!(out.ends_with("Centers:        \n"));
    }

    #[test]
    fn test_appointment_without_lookups() {
        let mut appointments = crate::appointment::LocalAppointments::default();
        let draft = crate::appointment::AppointmentDraft {
            voter_identifier: "ABC1234567".into(),
            center_id: "4".into(),
            slot_id: "7".into(),
            appointment_date: "2025-02-01".into(),
            ..Default::default()
        };
        appointments.create(&draft, &MasterData::default()).unwrap();

        let out = appointment(&appointments.rows()[0]);
        assert!(out.contains("(Pending)"));
        assert!(out.contains("Voter:    ABC1234567"));
        assert!(out.contains("Center:   -"));
        assert!(out.ends_with("Slot:     -\n"));
    }
}
