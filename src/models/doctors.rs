use crate::schema::doctors;
use diesel::prelude::*;

#[derive(Debug, Queryable, Selectable)]
#[diesel(table_name = doctors)]
pub struct DoctorName {
    pub first_name: String,
    pub last_name: String,
}

impl DoctorName {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}
