//! Preset schemas for the person and product files.
//!
//! Extended record kinds are built by composition: a base schema plus an extension field-set via
//! [`Schema::extend`].

use crate::types::{DataType, Field, Schema};

pub const FIRST_NAME: &str = "First Name";
pub const LAST_NAME: &str = "Last Name";
pub const DATE_OF_BIRTH: &str = "Date of Birth";
pub const JOB: &str = "Job";
pub const EMPLOYEE_ID: &str = "Employee ID";

pub const NAME: &str = "Name";
pub const PRICE: &str = "Price";
pub const MANUFACTURED_DATE: &str = "Manufactured Date";
/// Warranty length in months.
pub const WARRANTY_PERIOD: &str = "Warranty Period";

/// `First Name`, `Last Name`, `Date of Birth`.
pub fn person_schema() -> Schema {
    Schema::new(vec![
        Field::new(FIRST_NAME, DataType::Utf8),
        Field::new(LAST_NAME, DataType::Utf8),
        Field::new(DATE_OF_BIRTH, DataType::Date),
    ])
}

/// Person fields plus optional `Job` and `Employee ID` columns.
pub fn employee_schema() -> Schema {
    person_schema().extend([
        Field::optional(JOB, DataType::Utf8),
        Field::optional(EMPLOYEE_ID, DataType::Int64),
    ])
}

/// `Name`, `Price`, `Manufactured Date`.
pub fn product_schema() -> Schema {
    Schema::new(vec![
        Field::new(NAME, DataType::Utf8),
        Field::new(PRICE, DataType::Float64),
        Field::new(MANUFACTURED_DATE, DataType::Date),
    ])
}

/// Product fields plus a required `Warranty Period` column.
pub fn electronic_device_schema() -> Schema {
    product_schema().extend([Field::new(WARRANTY_PERIOD, DataType::Int64)])
}
