// SPDX-License-Identifier: Apache-2.0

use crate::serde_helpers::Nullable;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt::{Display, Formatter};

/// External lookup key of a project. Unique within a collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProjectId(i64);

impl ProjectId {
    #[must_use]
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    /// Parses a path segment by its leading integer, so `3-roof-terrace` and
    /// `3.5` both address project 3. Leading whitespace and one sign are
    /// accepted. `None` when no digit follows, which callers treat as "no such
    /// project".
    #[must_use]
    pub fn parse(input: &str) -> Option<Self> {
        let trimmed = input.trim_start();
        let unsigned = trimmed.trim_start_matches(['+', '-']);
        let sign_len = trimmed.len() - unsigned.len();
        if sign_len > 1 {
            return None;
        }
        let digits = unsigned.len()
            - unsigned
                .trim_start_matches(|c: char| c.is_ascii_digit())
                .len();
        if digits == 0 {
            return None;
        }
        trimmed[..sign_len + digits].parse::<i64>().ok().map(Self)
    }

    #[must_use]
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl Display for ProjectId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for ProjectId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

/// Catalog files carry the year either as a number or as free text
/// ("2019-2021").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ProjectYear {
    Number(i64),
    Text(String),
}

/// One catalog entry. Only `id` is required; every other known field keeps
/// its missing, `null` or set shape through a decode and encode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: ProjectId,
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub title: Nullable<String>,
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub subtitle: Nullable<String>,
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub slug: Nullable<String>,
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub location: Nullable<String>,
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub year: Nullable<ProjectYear>,
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub category: Nullable<String>,
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub cover_image: Nullable<String>,
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub image: Nullable<String>,
    /// Detail-only fields (description, galleries, ...) passed through as-is.
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl Project {
    #[must_use]
    pub fn new(id: i64, title: impl Into<String>) -> Self {
        Self {
            id: ProjectId(id),
            title: Nullable::Value(title.into()),
            subtitle: Nullable::Absent,
            slug: Nullable::Absent,
            location: Nullable::Absent,
            year: Nullable::Absent,
            category: Nullable::Absent,
            cover_image: Nullable::Absent,
            image: Nullable::Absent,
            extra: BTreeMap::new(),
        }
    }

    /// `coverImage` wins over `image`; empty strings count as absent.
    #[must_use]
    pub fn resolved_cover_image(&self) -> Option<&str> {
        self.cover_image
            .as_deref()
            .filter(|v| !v.is_empty())
            .or_else(|| self.image.as_deref().filter(|v| !v.is_empty()))
    }

    #[must_use]
    pub fn list_summary(&self) -> ListSummary {
        ListSummary {
            id: self.id,
            title: self.title.clone(),
            subtitle: self.subtitle.clone(),
            location: self.location.clone(),
            year: self.year.clone(),
            category: self.category.clone(),
            cover_image: self.resolved_cover_image().map(str::to_string),
        }
    }

    #[must_use]
    pub fn neighbor_summary(&self) -> NeighborSummary {
        NeighborSummary {
            id: self.id,
            title: self.title.clone(),
            slug: self.slug.clone(),
        }
    }
}

/// Trimmed projection used by grid and list views.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ListSummary {
    pub id: ProjectId,
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub title: Nullable<String>,
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub subtitle: Nullable<String>,
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub location: Nullable<String>,
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub year: Nullable<ProjectYear>,
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub category: Nullable<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover_image: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NeighborSummary {
    pub id: ProjectId,
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub title: Nullable<String>,
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub slug: Nullable<String>,
}
