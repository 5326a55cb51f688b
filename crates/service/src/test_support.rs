#![cfg(test)]
use chrono::NaiveDate;
use models::contact::ContactFields;
use sea_orm::DatabaseConnection;

pub async fn get_db() -> Result<DatabaseConnection, anyhow::Error> {
    models::db::connect_in_memory().await
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

pub fn fields(name: &str, surname: &str, email: &str, birthday: NaiveDate) -> ContactFields {
    ContactFields {
        name: name.to_string(),
        surname: surname.to_string(),
        email: email.to_string(),
        phone_number: "+1 555 0100".to_string(),
        birthday,
        additional_info: None,
    }
}
