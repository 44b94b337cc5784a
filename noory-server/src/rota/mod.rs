//! Rota - staff roster and weekly schedule
//!
//! Staff members with an on-floor status, plus the weekly shift grid.
//! Shifts are stored facts: overlap between different members is allowed
//! (that is just a busy Friday), duplicate slots for the same member are
//! rejected. No optimization happens here.

use parking_lot::RwLock;
use shared::models::{ScheduledShift, ShiftCreate, ShiftDay, StaffCreate, StaffMember, StaffStatus, StaffUpdate};
use thiserror::Error;
use uuid::Uuid;

use crate::events::EventHub;
use crate::utils::AppError;

const STAFF_RESOURCE: &str = "staff";
const SHIFT_RESOURCE: &str = "shift";

/// Rota command errors
#[derive(Debug, Error)]
pub enum RotaError {
    #[error("Staff member not found: {0}")]
    StaffNotFound(String),

    #[error("Shift not found: {0}")]
    ShiftNotFound(String),

    #[error("{name} already has a shift starting at that time")]
    DuplicateShift { name: String },
}

impl From<RotaError> for AppError {
    fn from(err: RotaError) -> Self {
        match err {
            RotaError::StaffNotFound(_) | RotaError::ShiftNotFound(_) => {
                AppError::not_found(err.to_string())
            }
            RotaError::DuplicateShift { .. } => AppError::conflict(err.to_string()),
        }
    }
}

pub type RotaResult<T> = Result<T, RotaError>;

/// Owner of the roster and the schedule.
pub struct RotaService {
    staff: RwLock<Vec<StaffMember>>,
    shifts: RwLock<Vec<ScheduledShift>>,
    events: EventHub,
}

impl RotaService {
    pub fn new(events: EventHub) -> Self {
        Self {
            staff: RwLock::new(Vec::new()),
            shifts: RwLock::new(Vec::new()),
            events,
        }
    }

    pub fn with_staff(events: EventHub, staff: Vec<StaffMember>, shifts: Vec<ScheduledShift>) -> Self {
        Self {
            staff: RwLock::new(staff),
            shifts: RwLock::new(shifts),
            events,
        }
    }

    fn next_id(prefix: char) -> String {
        let uuid = Uuid::new_v4().simple().to_string();
        format!("{prefix}{}", &uuid[..8])
    }

    // ========== Staff queries ==========

    pub fn staff(&self) -> Vec<StaffMember> {
        self.staff.read().clone()
    }

    pub fn get_staff(&self, id: &str) -> RotaResult<StaffMember> {
        self.staff
            .read()
            .iter()
            .find(|s| s.id == id)
            .cloned()
            .ok_or_else(|| RotaError::StaffNotFound(id.to_string()))
    }

    /// Counts for the dashboard: (on the floor right now, whole roster).
    pub fn headcount(&self) -> (usize, usize) {
        let guard = self.staff.read();
        let active = guard
            .iter()
            .filter(|s| s.status == StaffStatus::Active)
            .count();
        (active, guard.len())
    }

    // ========== Staff commands ==========

    pub fn create_staff(&self, payload: StaffCreate) -> StaffMember {
        let member = StaffMember {
            id: Self::next_id('S'),
            name: payload.name,
            role: payload.role,
            status: StaffStatus::Off,
            avatar: payload.avatar.unwrap_or_default(),
        };
        self.staff.write().push(member.clone());
        self.events
            .publish(STAFF_RESOURCE, "created", &member.id, Some(&member), None);
        member
    }

    pub fn update_staff(&self, id: &str, payload: StaffUpdate) -> RotaResult<StaffMember> {
        let mut guard = self.staff.write();
        let member = guard
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or_else(|| RotaError::StaffNotFound(id.to_string()))?;

        if let Some(name) = payload.name {
            member.name = name;
        }
        if let Some(role) = payload.role {
            member.role = role;
        }
        if let Some(status) = payload.status {
            member.status = status;
        }
        if let Some(avatar) = payload.avatar {
            member.avatar = avatar;
        }

        let updated = member.clone();
        drop(guard);
        self.events
            .publish(STAFF_RESOURCE, "updated", id, Some(&updated), None);
        Ok(updated)
    }

    /// Remove a member and their scheduled shifts.
    pub fn remove_staff(&self, id: &str) -> RotaResult<()> {
        let mut guard = self.staff.write();
        let before = guard.len();
        guard.retain(|s| s.id != id);
        if guard.len() == before {
            return Err(RotaError::StaffNotFound(id.to_string()));
        }
        drop(guard);

        self.shifts.write().retain(|s| s.staff_id != id);
        self.events
            .publish::<()>(STAFF_RESOURCE, "deleted", id, None, None);
        Ok(())
    }

    // ========== Schedule ==========

    pub fn shifts(&self) -> Vec<ScheduledShift> {
        self.shifts.read().clone()
    }

    pub fn shifts_for_day(&self, day: ShiftDay) -> Vec<ScheduledShift> {
        self.shifts
            .read()
            .iter()
            .filter(|s| s.day == day)
            .cloned()
            .collect()
    }

    pub fn add_shift(&self, payload: ShiftCreate) -> RotaResult<ScheduledShift> {
        let member = self.get_staff(&payload.staff_id)?;

        let mut guard = self.shifts.write();
        let duplicate = guard.iter().any(|s| {
            s.staff_id == payload.staff_id && s.day == payload.day && s.starts == payload.starts
        });
        if duplicate {
            return Err(RotaError::DuplicateShift { name: member.name });
        }

        let shift = ScheduledShift {
            id: Self::next_id('W'),
            staff_id: member.id,
            staff_name: member.name,
            day: payload.day,
            starts: payload.starts,
            ends: payload.ends,
            note: payload.note,
        };
        guard.push(shift.clone());
        drop(guard);

        self.events
            .publish(SHIFT_RESOURCE, "created", &shift.id, Some(&shift), None);
        Ok(shift)
    }

    pub fn remove_shift(&self, id: &str) -> RotaResult<()> {
        let mut guard = self.shifts.write();
        let before = guard.len();
        guard.retain(|s| s.id != id);
        if guard.len() == before {
            return Err(RotaError::ShiftNotFound(id.to_string()));
        }
        drop(guard);
        self.events
            .publish::<()>(SHIFT_RESOURCE, "deleted", id, None, None);
        Ok(())
    }

    /// Scheduled hours on one day of the week, for the staff-cost KPI.
    /// Malformed or overnight slots count as zero rather than failing.
    pub fn scheduled_hours(&self, day: ShiftDay) -> f64 {
        self.shifts
            .read()
            .iter()
            .filter(|s| s.day == day)
            .map(|s| shift_hours(&s.starts, &s.ends))
            .sum()
    }
}

fn shift_hours(starts: &str, ends: &str) -> f64 {
    let parse = |s: &str| chrono::NaiveTime::parse_from_str(s, "%H:%M").ok();
    match (parse(starts), parse(ends)) {
        (Some(a), Some(b)) if b > a => (b - a).num_minutes() as f64 / 60.0,
        _ => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rota() -> RotaService {
        RotaService::new(EventHub::new())
    }

    fn hire(rota: &RotaService, name: &str, role: &str) -> StaffMember {
        rota.create_staff(StaffCreate {
            name: name.to_string(),
            role: role.to_string(),
            avatar: None,
        })
    }

    #[test]
    fn staff_crud_and_status() {
        let rota = rota();
        let lisa = hire(&rota, "Lisa Nilsson", "Hovmästare");
        assert_eq!(lisa.status, StaffStatus::Off);

        let lisa = rota
            .update_staff(
                &lisa.id,
                StaffUpdate {
                    name: None,
                    role: None,
                    status: Some(StaffStatus::Active),
                    avatar: None,
                },
            )
            .unwrap();
        assert_eq!(lisa.status, StaffStatus::Active);
        assert_eq!(rota.headcount(), (1, 1));

        rota.remove_staff(&lisa.id).unwrap();
        assert_eq!(rota.headcount(), (0, 0));
    }

    #[test]
    fn shift_requires_existing_staff() {
        let rota = rota();
        let err = rota
            .add_shift(ShiftCreate {
                staff_id: "ghost".to_string(),
                day: ShiftDay::Fri,
                starts: "16:00".to_string(),
                ends: "23:00".to_string(),
                note: None,
            })
            .unwrap_err();
        assert!(matches!(err, RotaError::StaffNotFound(_)));
    }

    #[test]
    fn duplicate_slot_rejected_overlap_allowed() {
        let rota = rota();
        let sara = hire(&rota, "Sara Servis", "Servis");
        let maja = hire(&rota, "Maja Bar", "Bartender");

        let slot = |staff_id: &str| ShiftCreate {
            staff_id: staff_id.to_string(),
            day: ShiftDay::Fri,
            starts: "16:00".to_string(),
            ends: "23:00".to_string(),
            note: None,
        };

        rota.add_shift(slot(&sara.id)).unwrap();
        // Same member, same slot → rejected
        assert!(matches!(
            rota.add_shift(slot(&sara.id)).unwrap_err(),
            RotaError::DuplicateShift { .. }
        ));
        // Another member on the same evening is fine
        rota.add_shift(slot(&maja.id)).unwrap();
        assert_eq!(rota.shifts_for_day(ShiftDay::Fri).len(), 2);
    }

    #[test]
    fn removing_staff_clears_their_shifts() {
        let rota = rota();
        let sara = hire(&rota, "Sara Servis", "Servis");
        rota.add_shift(ShiftCreate {
            staff_id: sara.id.clone(),
            day: ShiftDay::Sat,
            starts: "16:00".to_string(),
            ends: "23:00".to_string(),
            note: None,
        })
        .unwrap();

        rota.remove_staff(&sara.id).unwrap();
        assert!(rota.shifts().is_empty());
    }

    #[test]
    fn scheduled_hours_sums_the_day() {
        let rota = rota();
        let sara = hire(&rota, "Sara Servis", "Servis");
        let maja = hire(&rota, "Maja Bar", "Bartender");

        rota.add_shift(ShiftCreate {
            staff_id: sara.id.clone(),
            day: ShiftDay::Fri,
            starts: "16:00".to_string(),
            ends: "23:00".to_string(),
            note: None,
        })
        .unwrap();
        rota.add_shift(ShiftCreate {
            staff_id: maja.id.clone(),
            day: ShiftDay::Fri,
            starts: "17:30".to_string(),
            ends: "23:30".to_string(),
            note: None,
        })
        .unwrap();

        assert_eq!(rota.scheduled_hours(ShiftDay::Fri), 13.0);
        assert_eq!(rota.scheduled_hours(ShiftDay::Mon), 0.0);
    }
}
