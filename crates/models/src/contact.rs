use sea_orm::{entity::prelude::*, Set, NotSet};
use serde::{Deserialize, Serialize};

/// A stored contact. Serialises as the `Contact` JSON document.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "contact")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub surname: String,
    pub email: String,
    pub phone_number: String,
    pub birthday: Date,
    #[sea_orm(column_type = "Text", nullable)]
    pub additional_info: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Every non-identifier attribute of a contact, as submitted by clients.
///
/// Unknown keys are rejected rather than ignored, and all fields other than
/// `additional_info` must be present and non-null.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ContactFields {
    pub name: String,
    pub surname: String,
    pub email: String,
    pub phone_number: String,
    pub birthday: Date,
    #[serde(default)]
    pub additional_info: Option<String>,
}

impl ContactFields {
    /// Overwrite the mutable columns of `am`. The primary key is left alone.
    pub fn apply_to(self, am: &mut ActiveModel) {
        am.name = Set(self.name);
        am.surname = Set(self.surname);
        am.email = Set(self.email);
        am.phone_number = Set(self.phone_number);
        am.birthday = Set(self.birthday);
        am.additional_info = Set(self.additional_info);
    }

    /// Active model for an insert; the id is left for the database to assign.
    pub fn into_active_model(self) -> ActiveModel {
        let mut am = ActiveModel { id: NotSet, ..Default::default() };
        self.apply_to(&mut am);
        am
    }
}

impl From<Model> for ContactFields {
    fn from(m: Model) -> Self {
        Self {
            name: m.name,
            surname: m.surname,
            email: m.email,
            phone_number: m.phone_number,
            birthday: m.birthday,
            additional_info: m.additional_info,
        }
    }
}
