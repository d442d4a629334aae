//! Business entity.
//!
//! A business is keyed by its EIN (Employer Identification Number,
//! format `DD-DDDDDDD`). The identifying fields are split into
//! [`BusinessProfile`] because Product records embed the same field set
//! as a value snapshot.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::store::Resource;
use crate::shared::validation::{validate_ein, validate_email, validate_name, ValidationError};

/// Identifying fields of a business: the part embedded into products.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusinessProfile {
    /// Tax identifier unique to employers, format `DD-DDDDDDD`.
    pub ein: String,

    /// Business name.
    pub name: String,

    /// Primary email address.
    pub email: String,

    /// Contact phone number in any reasonable format.
    #[serde(default)]
    pub phone: Option<String>,
}

impl BusinessProfile {
    /// Validate all identifying fields, returning the first failure.
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_ein(&self.ein)?;
        validate_name(&self.name, "name")?;
        validate_email(&self.email)?;
        Ok(())
    }
}

/// A stored business record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Business {
    #[serde(flatten)]
    pub profile: BusinessProfile,

    /// Creation timestamp (UTC).
    pub created_at: DateTime<Utc>,

    /// Last update timestamp (UTC).
    pub updated_at: DateTime<Utc>,
}

impl Business {
    /// Build a record from its identifying fields. Timestamps are
    /// stamped by the store at creation time.
    pub fn new(profile: BusinessProfile) -> Self {
        let now = Utc::now();
        Self {
            profile,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Exact-match filter for business list operations. Absent fields
/// impose no constraint; present fields must match case-sensitively.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BusinessFilter {
    pub ein: Option<String>,
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

/// Partial update for a business; supply only fields to change.
///
/// `phone` is nullable, so it uses a double `Option`: an omitted key
/// preserves the stored phone, while an explicit `"phone": null`
/// clears it.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BusinessPatch {
    pub ein: Option<String>,
    pub name: Option<String>,
    pub email: Option<String>,
    #[serde(default, deserialize_with = "super::double_option")]
    pub phone: Option<Option<String>>,
}

impl Resource for Business {
    type Key = String;
    type Filter = BusinessFilter;
    type Patch = BusinessPatch;

    const KIND: &'static str = "Business";

    fn key(&self) -> String {
        self.profile.ein.clone()
    }

    fn matches(&self, filter: &BusinessFilter) -> bool {
        if let Some(ein) = &filter.ein {
            if &self.profile.ein != ein {
                return false;
            }
        }
        if let Some(name) = &filter.name {
            if &self.profile.name != name {
                return false;
            }
        }
        if let Some(email) = &filter.email {
            if &self.profile.email != email {
                return false;
            }
        }
        if let Some(phone) = &filter.phone {
            if self.profile.phone.as_deref() != Some(phone.as_str()) {
                return false;
            }
        }
        true
    }

    fn merge(&mut self, patch: BusinessPatch) {
        if let Some(ein) = patch.ein {
            self.profile.ein = ein;
        }
        if let Some(name) = patch.name {
            self.profile.name = name;
        }
        if let Some(email) = patch.email {
            self.profile.email = email;
        }
        if let Some(phone) = patch.phone {
            self.profile.phone = phone;
        }
    }

    fn validate(&self) -> Result<(), ValidationError> {
        self.profile.validate()
    }

    fn stamp_created(&mut self, at: DateTime<Utc>) {
        self.created_at = at;
        self.updated_at = at;
    }

    fn stamp_updated(&mut self, at: DateTime<Utc>) {
        self.updated_at = at;
    }
}
