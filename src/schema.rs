table! {
    #[sql_name = "Appointments"]
    appointments (appointment_id) {
        appointment_id -> Integer,
        patient_id -> Varchar,
        doctor_id -> Varchar,
        appointment_date -> Date,
        appointment_time -> Time,
        feedback -> Nullable<Varchar>,
    }
}

table! {
    #[sql_name = "Doctors"]
    doctors (doctor_id) {
        doctor_id -> Varchar,
        first_name -> Varchar,
        last_name -> Varchar,
    }
}

allow_tables_to_appear_in_same_query!(appointments, doctors,);
