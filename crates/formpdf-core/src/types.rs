//! Core types for context assembly
//!
//! Instance references, parties, profiles, text resources and the
//! principal on whose behalf a generation request runs.

use crate::error::AssemblyError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Decomposed instance reference
///
/// The composite identifier arrives as two strings: the application id
/// (`org/app`) and the instance id (`ownerPartyId/instanceGuid`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstanceRef {
    /// Owning organization short name
    pub org: String,
    /// Application name
    pub app: String,
    /// Numeric party id of the instance owner
    pub owner_party_id: i64,
    /// Instance guid
    pub instance_guid: String,
}

impl InstanceRef {
    /// Decompose the composite identifier
    ///
    /// # Errors
    /// `AssemblyError::InvalidInstanceReference` when either part does not
    /// split into exactly two non-empty segments, or the owner party id is
    /// not numeric.
    pub fn parse(app_id: &str, instance_id: &str) -> Result<Self, AssemblyError> {
        let (org, app) = split_two(app_id)
            .ok_or_else(|| AssemblyError::InvalidInstanceReference(app_id.to_string()))?;
        let (owner, guid) = split_two(instance_id)
            .ok_or_else(|| AssemblyError::InvalidInstanceReference(instance_id.to_string()))?;
        let owner_party_id = owner
            .parse::<i64>()
            .map_err(|_| AssemblyError::InvalidInstanceReference(instance_id.to_string()))?;

        Ok(Self {
            org: org.to_string(),
            app: app.to_string(),
            owner_party_id,
            instance_guid: guid.to_string(),
        })
    }

    /// Owner-scoped instance id, `ownerPartyId/instanceGuid`
    #[inline]
    #[must_use]
    pub fn owner_instance_id(&self) -> String {
        format!("{}/{}", self.owner_party_id, self.instance_guid)
    }
}

fn split_two(raw: &str) -> Option<(&str, &str)> {
    let (left, right) = raw.split_once('/')?;
    if left.is_empty() || right.is_empty() || right.contains('/') {
        return None;
    }
    Some((left, right))
}

/// A legal entity, person or organization
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Party {
    /// Numeric party id
    pub party_id: i64,
    /// Display name
    pub name: String,
    /// Organization number, when the party is an organization
    #[serde(skip_serializing_if = "Option::is_none")]
    pub org_number: Option<String>,
    /// National identity number, when the party is a person
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ssn: Option<String>,
}

/// User profile for an authenticated person
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    /// User id
    pub user_id: i64,
    /// The user's party
    pub party: Party,
    /// Preferred language, when set
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

/// One localized text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextResource {
    /// Resource id
    pub id: String,
    /// Localized value
    pub value: String,
}

/// Text resources for one language
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextResourceBundle {
    /// Bundle language
    pub language: String,
    /// Resources, provider order
    pub resources: Vec<TextResource>,
}

impl TextResourceBundle {
    /// Empty bundle for a language
    #[inline]
    #[must_use]
    pub fn empty(language: impl Into<String>) -> Self {
        Self {
            language: language.into(),
            resources: Vec::new(),
        }
    }

    /// Value of a resource by id
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&str> {
        self.resources
            .iter()
            .find(|r| r.id == id)
            .map(|r| r.value.as_str())
    }

    /// Whether the bundle carries no resources
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.resources.is_empty()
    }
}

/// Instance metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Instance {
    /// Composite instance id, `ownerPartyId/instanceGuid`
    pub id: String,
    /// Application id, `org/app`
    pub app_id: String,
    /// Owning organization
    pub org: String,
    /// Last change timestamp, when known
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_changed: Option<DateTime<Utc>>,
}

/// A data element attached to an instance
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataElement {
    /// Element id
    pub id: String,
    /// Declared data type
    pub data_type: String,
}

/// The principal the generation request runs on behalf of
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Principal {
    /// Authenticated person, by user id
    User(i64),
    /// Organization, by organization number
    Org(String),
}
