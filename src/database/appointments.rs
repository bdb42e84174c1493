use actix_web::web;
use diesel::prelude::*;
use tracing::debug;

use super::{get_db_conn, DbConnection, DbPool, StoreError};
use crate::models::{
    appointments::{Appointment, NewAppointment},
    doctors::DoctorName,
};

/// Data access for the `Appointments` table.
///
/// Every call checks out one pooled connection for a single statement and
/// hands it back when the call returns, whichever way it returns.
#[derive(Clone)]
pub struct AppointmentStore {
    pool: DbPool,
}

impl AppointmentStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    async fn run<F, T>(&self, query: F) -> Result<T, StoreError>
    where
        F: FnOnce(&mut DbConnection) -> QueryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let mut conn = get_db_conn(&self.pool)?;
        let res = web::block(move || query(&mut *conn)).await??;
        Ok(res)
    }

    /// Returns whether exactly one row was inserted.
    pub async fn add(&self, appointment: &NewAppointment) -> Result<bool, StoreError> {
        use crate::schema::appointments;

        let data = appointment.clone();
        let rows = self
            .run(move |conn| {
                diesel::insert_into(appointments::table)
                    .values(&data)
                    .execute(conn)
            })
            .await?;
        debug!(rows, "inserted appointment");

        Ok(rows == 1)
    }

    pub async fn get_by_id(&self, appointment_id: i32) -> Result<Option<Appointment>, StoreError> {
        use crate::schema::appointments;

        self.run(move |conn| {
            appointments::table
                .find(appointment_id)
                .select(Appointment::as_select())
                .first(conn)
                .optional()
        })
        .await
    }

    /// The first appointment stored for the patient, if any. Use
    /// [`get_all_by_patient`](Self::get_all_by_patient) for the full list.
    pub async fn get_by_patient(
        &self,
        patient_id: String,
    ) -> Result<Option<Appointment>, StoreError> {
        use crate::schema::appointments;

        self.run(move |conn| {
            appointments::table
                .filter(appointments::patient_id.eq(patient_id))
                .select(Appointment::as_select())
                .first(conn)
                .optional()
        })
        .await
    }

    pub async fn get_all(&self) -> Result<Vec<Appointment>, StoreError> {
        use crate::schema::appointments;

        self.run(|conn| {
            appointments::table
                .select(Appointment::as_select())
                .load(conn)
        })
        .await
    }

    pub async fn get_all_by_patient(
        &self,
        patient_id: String,
    ) -> Result<Vec<Appointment>, StoreError> {
        use crate::schema::appointments;

        self.run(move |conn| {
            appointments::table
                .filter(appointments::patient_id.eq(patient_id))
                .select(Appointment::as_select())
                .load(conn)
        })
        .await
    }

    /// `"First Last"` for the doctor, or `None` when no such doctor exists.
    pub async fn get_doctor_name(&self, doctor_id: String) -> Result<Option<String>, StoreError> {
        use crate::schema::doctors;

        let name = self
            .run(move |conn| {
                doctors::table
                    .find(doctor_id)
                    .select(DoctorName::as_select())
                    .first::<DoctorName>(conn)
                    .optional()
            })
            .await?;

        Ok(name.map(|name| name.full_name()))
    }

    /// Overwrites every column of the row keyed by `appointment_id`.
    ///
    /// Returns the number of rows touched; `0` means no such appointment and
    /// is not treated as an error.
    pub async fn update(&self, appointment: &Appointment) -> Result<usize, StoreError> {
        use crate::schema::appointments;

        let data = appointment.clone();
        let rows = self
            .run(move |conn| {
                diesel::update(appointments::table.find(data.appointment_id))
                    .set(&data)
                    .execute(conn)
            })
            .await?;
        debug!(appointment_id = appointment.appointment_id, rows, "updated appointment");

        Ok(rows)
    }

    /// Deleting an id that is not stored is a no-op.
    pub async fn delete_by_id(&self, appointment_id: i32) -> Result<(), StoreError> {
        use crate::schema::appointments;

        let rows = self
            .run(move |conn| diesel::delete(appointments::table.find(appointment_id)).execute(conn))
            .await?;
        debug!(appointment_id, rows, "deleted appointment");

        Ok(())
    }

    /// Appointments for the doctor whose feedback is NULL or empty.
    ///
    /// Storage errors are returned to the caller like every other query here;
    /// an empty `Vec` always means the queue really is empty.
    pub async fn get_by_doctor_pending(
        &self,
        doctor_id: String,
    ) -> Result<Vec<Appointment>, StoreError> {
        use crate::schema::appointments;

        self.run(move |conn| {
            appointments::table
                .filter(appointments::doctor_id.eq(doctor_id))
                .filter(
                    appointments::feedback
                        .is_null()
                        .or(appointments::feedback.eq("")),
                )
                .select(Appointment::as_select())
                .load(conn)
        })
        .await
    }
}
