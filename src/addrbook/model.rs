use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Opaque handle for a contact within one running book.
///
/// Ids are assigned when a contact is created or loaded and are never written
/// to the data file, so they are only stable for the lifetime of the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ContactId(Uuid);

impl ContactId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ContactId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ContactId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The seven text values that make up a contact record.
///
/// No field is validated. Empty strings are accepted everywhere, and an empty
/// `picture_path` means the contact has no image.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactFields {
    pub first_name: String,
    pub last_name: String,
    pub address: String,
    pub mobile_number: String,
    pub secondary_number: String,
    pub email_address: String,
    #[serde(default)]
    pub picture_path: String,
}

impl ContactFields {
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        address: impl Into<String>,
        mobile_number: impl Into<String>,
        secondary_number: impl Into<String>,
        email_address: impl Into<String>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            address: address.into(),
            mobile_number: mobile_number.into(),
            secondary_number: secondary_number.into(),
            email_address: email_address.into(),
            picture_path: String::new(),
        }
    }

    pub fn with_picture(mut self, picture_path: impl Into<String>) -> Self {
        self.picture_path = picture_path.into();
        self
    }

    /// True when every one of the seven values is empty.
    pub fn is_blank(&self) -> bool {
        ContactField::ALL.iter().all(|f| self.get(*f).is_empty())
    }

    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::FirstName => &self.first_name,
            ContactField::LastName => &self.last_name,
            ContactField::Address => &self.address,
            ContactField::MobileNumber => &self.mobile_number,
            ContactField::SecondaryNumber => &self.secondary_number,
            ContactField::EmailAddress => &self.email_address,
            ContactField::PicturePath => &self.picture_path,
        }
    }

    pub fn set(&mut self, field: ContactField, value: impl Into<String>) {
        let slot = match field {
            ContactField::FirstName => &mut self.first_name,
            ContactField::LastName => &mut self.last_name,
            ContactField::Address => &mut self.address,
            ContactField::MobileNumber => &mut self.mobile_number,
            ContactField::SecondaryNumber => &mut self.secondary_number,
            ContactField::EmailAddress => &mut self.email_address,
            ContactField::PicturePath => &mut self.picture_path,
        };
        *slot = value.into();
    }

    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub id: ContactId,
    #[serde(flatten)]
    pub fields: ContactFields,
}

impl Contact {
    pub fn new(fields: ContactFields) -> Self {
        Self {
            id: ContactId::new(),
            fields,
        }
    }

    /// One-line label: first name, a space, last name.
    pub fn display_name(&self) -> String {
        self.fields.display_name()
    }

    pub fn has_picture(&self) -> bool {
        !self.fields.picture_path.is_empty()
    }
}

impl fmt::Display for Contact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.fields.first_name, self.fields.last_name)
    }
}

/// Names one of the seven contact fields. Used to pick a sort key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContactField {
    FirstName,
    LastName,
    Address,
    MobileNumber,
    SecondaryNumber,
    EmailAddress,
    PicturePath,
}

impl ContactField {
    /// File order.
    pub const ALL: [ContactField; 7] = [
        ContactField::FirstName,
        ContactField::LastName,
        ContactField::Address,
        ContactField::MobileNumber,
        ContactField::SecondaryNumber,
        ContactField::EmailAddress,
        ContactField::PicturePath,
    ];

    /// Fields a filter query is matched against. The picture reference is not one of them.
    pub const SEARCHABLE: [ContactField; 6] = [
        ContactField::FirstName,
        ContactField::LastName,
        ContactField::Address,
        ContactField::MobileNumber,
        ContactField::SecondaryNumber,
        ContactField::EmailAddress,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            ContactField::FirstName => "first_name",
            ContactField::LastName => "last_name",
            ContactField::Address => "address",
            ContactField::MobileNumber => "mobile_number",
            ContactField::SecondaryNumber => "secondary_number",
            ContactField::EmailAddress => "email_address",
            ContactField::PicturePath => "picture_path",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ContactField::FirstName => "First Name",
            ContactField::LastName => "Last Name",
            ContactField::Address => "Address",
            ContactField::MobileNumber => "Mobile Number",
            ContactField::SecondaryNumber => "Secondary Number",
            ContactField::EmailAddress => "Email Address",
            ContactField::PicturePath => "Picture",
        }
    }
}

impl fmt::Display for ContactField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for ContactField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace('-', "_");
        match normalized.as_str() {
            "first_name" | "first" | "firstname" => Ok(ContactField::FirstName),
            "last_name" | "last" | "lastname" | "surname" => Ok(ContactField::LastName),
            "address" => Ok(ContactField::Address),
            "mobile_number" | "mobile" => Ok(ContactField::MobileNumber),
            "secondary_number" | "secondary" => Ok(ContactField::SecondaryNumber),
            "email_address" | "email" => Ok(ContactField::EmailAddress),
            "picture_path" | "picture" => Ok(ContactField::PicturePath),
            _ => Err(format!("Unknown contact field: {}", s)),
        }
    }
}
