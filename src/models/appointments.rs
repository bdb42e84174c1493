use crate::schema::appointments;
use chrono::{NaiveDate, NaiveTime};
use diesel::prelude::*;

#[derive(Debug, Clone, PartialEq, Eq, Queryable, Selectable, AsChangeset)]
#[diesel(
    table_name = appointments,
    primary_key(appointment_id),
    treat_none_as_null = true
)]
pub struct Appointment {
    pub appointment_id: i32,
    pub patient_id: String,
    pub doctor_id: String,
    pub appointment_date: NaiveDate,
    pub appointment_time: NaiveTime,
    pub feedback: Option<String>,
}

impl Appointment {
    /// An appointment without feedback is still waiting in the doctor's queue.
    pub fn is_pending(&self) -> bool {
        self.feedback.as_deref().map_or(true, str::is_empty)
    }
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = appointments)]
pub struct NewAppointment {
    pub patient_id: String,
    pub doctor_id: String,
    pub appointment_date: NaiveDate,
    pub appointment_time: NaiveTime,
    pub feedback: Option<String>,
}

impl NewAppointment {
    /// The stored record once storage has assigned `appointment_id`.
    pub fn with_id(self, appointment_id: i32) -> Appointment {
        Appointment {
            appointment_id,
            patient_id: self.patient_id,
            doctor_id: self.doctor_id,
            appointment_date: self.appointment_date,
            appointment_time: self.appointment_time,
            feedback: self.feedback,
        }
    }
}
