// MinIO Rust Library for Amazon S3 Compatible Cloud Storage
// Copyright 2025 MinIO, Inc.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Bucket lifecycle configuration and its `LifecycleConfiguration` XML codec.
//!
//! Decoding is permissive: unknown elements are skipped and a `<Filter>`
//! carrying both a bare `<Prefix>` and an `<And>` block is still accepted.
//! Encoding only ever produces the canonical shapes.

use crate::s3::error::{DecodeErr, EncodeErr, ValidationErr};
use crate::s3::utils::{child_elements, get_text_default, get_text_option};
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;
use xmltree::{Element, EmitterConfig, ParserConfig, XMLNode};

/// Root element name of the lifecycle document.
pub const LIFECYCLE_CONFIGURATION: &str = "LifecycleConfiguration";

pub const STORAGE_CLASS_STANDARD: &str = "Standard";
pub const STORAGE_CLASS_ARCHIVE: &str = "ARCHIVE";
pub const STORAGE_CLASS_DEEP_ARCHIVE: &str = "DEEP_ARCHIVE";

const MAX_RULE_ID_LEN: usize = 255;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
/// Lifecycle configuration of a bucket; rule order is kept as given.
pub struct LifecycleConfig {
    pub rules: Vec<LifecycleRule>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LifecycleRule {
    pub id: String,
    pub filter: Option<LifecycleFilter>,
    pub status: RuleStatus,
    pub transitions: Vec<Transition>,
    pub expiration: Option<Expiration>,
    pub noncurrent_version_transitions: Vec<NoncurrentVersionTransition>,
    pub noncurrent_version_expiration: Option<NoncurrentVersionExpiration>,
}

/// Value of the `<Status>` element.
///
/// Anything other than `Enabled`/`Disabled` is kept verbatim in `Other`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum RuleStatus {
    #[default]
    Enabled,
    Disabled,
    Other(String),
}

/// Selects the objects a rule applies to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LifecycleFilter {
    /// `<Prefix>`: keys starting with the prefix.
    SimplePrefix(String),
    /// `<And>`: keys starting with `prefix` and carrying every tag.
    Combined { prefix: String, tags: Vec<Tag> },
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Tag {
    pub key: String,
    pub value: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Transition {
    pub days: i64,
    pub storage_class: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Expiration {
    pub days: i64,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NoncurrentVersionTransition {
    pub noncurrent_days: i64,
    pub storage_class: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NoncurrentVersionExpiration {
    pub noncurrent_days: i64,
}

impl RuleStatus {
    pub fn as_str(&self) -> &str {
        match self {
            RuleStatus::Enabled => "Enabled",
            RuleStatus::Disabled => "Disabled",
            RuleStatus::Other(s) => s,
        }
    }

    pub fn is_enabled(&self) -> bool {
        matches!(self, RuleStatus::Enabled)
    }
}

impl From<&str> for RuleStatus {
    fn from(s: &str) -> Self {
        match s {
            "Enabled" => RuleStatus::Enabled,
            "Disabled" => RuleStatus::Disabled,
            other => RuleStatus::Other(other.to_string()),
        }
    }
}

impl From<bool> for RuleStatus {
    fn from(enabled: bool) -> Self {
        if enabled {
            RuleStatus::Enabled
        } else {
            RuleStatus::Disabled
        }
    }
}

impl FromStr for RuleStatus {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(RuleStatus::from(s))
    }
}

impl fmt::Display for RuleStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Tag {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

impl LifecycleFilter {
    pub fn prefix(prefix: impl Into<String>) -> Self {
        LifecycleFilter::SimplePrefix(prefix.into())
    }

    pub fn and(prefix: impl Into<String>, tags: impl IntoIterator<Item = Tag>) -> Self {
        LifecycleFilter::Combined {
            prefix: prefix.into(),
            tags: tags.into_iter().collect(),
        }
    }

    /// Key prefix of either shape.
    pub fn key_prefix(&self) -> &str {
        match self {
            LifecycleFilter::SimplePrefix(prefix) => prefix,
            LifecycleFilter::Combined { prefix, .. } => prefix,
        }
    }

    pub fn tags(&self) -> &[Tag] {
        match self {
            LifecycleFilter::SimplePrefix(_) => &[],
            LifecycleFilter::Combined { tags, .. } => tags,
        }
    }

    /// Returns true when an object with `key` and `object_tags` is selected by this filter.
    pub fn matches(&self, key: &str, object_tags: &[Tag]) -> bool {
        key.starts_with(self.key_prefix()) && self.tags().iter().all(|t| object_tags.contains(t))
    }

    fn from_xml(filter: &Element) -> Self {
        let top_prefix = get_text_option(filter, "Prefix");

        if let Some(and) = filter.get_child("And") {
            if top_prefix.is_some() {
                log::debug!("<Filter> has both <Prefix> and <And>; ignoring the bare prefix");
            }
            return LifecycleFilter::Combined {
                prefix: get_text_default(and, "Prefix"),
                tags: child_elements(and, "Tag").map(Tag::from_xml).collect(),
            };
        }

        match top_prefix {
            Some(prefix) => LifecycleFilter::SimplePrefix(prefix),
            None => match filter.get_child("Tag") {
                Some(tag) => LifecycleFilter::Combined {
                    prefix: String::new(),
                    tags: vec![Tag::from_xml(tag)],
                },
                None => LifecycleFilter::SimplePrefix(String::new()),
            },
        }
    }

    fn to_xml(&self) -> Element {
        let mut filter = Element::new("Filter");
        match self {
            LifecycleFilter::SimplePrefix(prefix) => {
                push_child(&mut filter, text_element("Prefix", prefix));
            }
            LifecycleFilter::Combined { prefix, tags } => {
                let mut and = Element::new("And");
                push_child(&mut and, text_element("Prefix", prefix));
                for tag in tags {
                    push_child(&mut and, tag.to_xml());
                }
                push_child(&mut filter, and);
            }
        }
        filter
    }
}

impl Tag {
    fn from_xml(tag: &Element) -> Self {
        Tag {
            key: get_text_default(tag, "Key"),
            value: get_text_default(tag, "Value"),
        }
    }

    fn to_xml(&self) -> Element {
        let mut tag = Element::new("Tag");
        push_child(&mut tag, text_element("Key", &self.key));
        push_child(&mut tag, text_element("Value", &self.value));
        tag
    }
}

impl LifecycleConfig {
    pub fn new(rules: Vec<LifecycleRule>) -> Self {
        Self { rules }
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Decodes a `LifecycleConfiguration` document.
    ///
    /// Whitespace-only text is kept as text, so a prefix of `" "` stays `" "`.
    pub fn from_bytes(body: &[u8]) -> Result<Self, DecodeErr> {
        let config = ParserConfig::new().whitespace_to_characters(true);
        let root = Element::parse_with_config(body, config)?;
        Self::from_xml(&root)
    }

    pub fn from_xml(root: &Element) -> Result<Self, DecodeErr> {
        if root.name != LIFECYCLE_CONFIGURATION {
            return Err(DecodeErr::UnexpectedRoot {
                expected: LIFECYCLE_CONFIGURATION,
                found: root.name.clone(),
            });
        }

        let rules = child_elements(root, "Rule")
            .map(LifecycleRule::from_xml)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { rules })
    }

    pub fn to_element(&self) -> Element {
        let mut root = Element::new(LIFECYCLE_CONFIGURATION);
        for rule in &self.rules {
            push_child(&mut root, rule.to_xml());
        }
        root
    }

    /// Encodes the configuration as a `LifecycleConfiguration` document without XML declaration.
    ///
    /// Carriage returns are written as `&#xD;` so that end-of-line
    /// normalization on the reading side keeps them.
    pub fn to_xml(&self) -> Result<String, EncodeErr> {
        let mut buf: Vec<u8> = Vec::new();
        let config = EmitterConfig::new()
            .write_document_declaration(false)
            .perform_indent(false);
        self.to_element()
            .write_with_config(&mut buf, config)
            .map_err(|e| EncodeErr::Write(e.to_string()))?;
        let xml = String::from_utf8(buf)?;
        Ok(xml.replace('\r', "&#xD;"))
    }

    /// Business checks the codec never runs on its own; call before a put if wanted.
    pub fn validate(&self) -> Result<(), ValidationErr> {
        let mut seen: HashSet<&str> = HashSet::with_capacity(self.rules.len());
        for rule in &self.rules {
            rule.validate()?;
            if !seen.insert(rule.id.as_str()) {
                return Err(ValidationErr::DuplicateLifecycleRuleId(rule.id.clone()));
            }
        }
        Ok(())
    }
}

impl LifecycleRule {
    pub fn from_xml(rule: &Element) -> Result<Self, DecodeErr> {
        let transitions = child_elements(rule, "Transition")
            .map(|e| -> Result<Transition, DecodeErr> {
                Ok(Transition {
                    days: parse_days(e, "Days", "Transition/Days")?,
                    storage_class: get_text_default(e, "StorageClass"),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let expiration = rule
            .get_child("Expiration")
            .map(|e| {
                Ok::<_, DecodeErr>(Expiration {
                    days: parse_days(e, "Days", "Expiration/Days")?,
                })
            })
            .transpose()?;

        let noncurrent_version_transitions = child_elements(rule, "NoncurrentVersionTransition")
            .map(|e| -> Result<NoncurrentVersionTransition, DecodeErr> {
                Ok(NoncurrentVersionTransition {
                    noncurrent_days: parse_days(
                        e,
                        "NoncurrentDays",
                        "NoncurrentVersionTransition/NoncurrentDays",
                    )?,
                    storage_class: get_text_default(e, "StorageClass"),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let noncurrent_version_expiration = rule
            .get_child("NoncurrentVersionExpiration")
            .map(|e| {
                Ok::<_, DecodeErr>(NoncurrentVersionExpiration {
                    noncurrent_days: parse_days(
                        e,
                        "NoncurrentDays",
                        "NoncurrentVersionExpiration/NoncurrentDays",
                    )?,
                })
            })
            .transpose()?;

        Ok(LifecycleRule {
            id: get_text_default(rule, "ID"),
            filter: rule.get_child("Filter").map(LifecycleFilter::from_xml),
            status: RuleStatus::from(get_text_default(rule, "Status").as_str()),
            transitions,
            expiration,
            noncurrent_version_transitions,
            noncurrent_version_expiration,
        })
    }

    fn to_xml(&self) -> Element {
        let mut rule = Element::new("Rule");

        push_child(&mut rule, text_element("ID", &self.id));

        if let Some(filter) = &self.filter {
            push_child(&mut rule, filter.to_xml());
        }

        push_child(&mut rule, text_element("Status", self.status.as_str()));

        for transition in &self.transitions {
            let mut elem = Element::new("Transition");
            push_child(&mut elem, text_element("Days", transition.days.to_string()));
            push_child(
                &mut elem,
                text_element("StorageClass", &transition.storage_class),
            );
            push_child(&mut rule, elem);
        }

        if let Some(expiration) = &self.expiration {
            let mut elem = Element::new("Expiration");
            push_child(&mut elem, text_element("Days", expiration.days.to_string()));
            push_child(&mut rule, elem);
        }

        for transition in &self.noncurrent_version_transitions {
            let mut elem = Element::new("NoncurrentVersionTransition");
            push_child(
                &mut elem,
                text_element("NoncurrentDays", transition.noncurrent_days.to_string()),
            );
            push_child(
                &mut elem,
                text_element("StorageClass", &transition.storage_class),
            );
            push_child(&mut rule, elem);
        }

        if let Some(expiration) = &self.noncurrent_version_expiration {
            let mut elem = Element::new("NoncurrentVersionExpiration");
            push_child(
                &mut elem,
                text_element("NoncurrentDays", expiration.noncurrent_days.to_string()),
            );
            push_child(&mut rule, elem);
        }

        rule
    }

    pub fn has_action(&self) -> bool {
        !self.transitions.is_empty()
            || self.expiration.is_some()
            || !self.noncurrent_version_transitions.is_empty()
            || self.noncurrent_version_expiration.is_some()
    }

    pub fn validate(&self) -> Result<(), ValidationErr> {
        if self.id.is_empty() || self.id.chars().count() > MAX_RULE_ID_LEN {
            return Err(ValidationErr::InvalidLifecycleRuleId(self.id.clone()));
        }

        if let RuleStatus::Other(status) = &self.status {
            return Err(ValidationErr::InvalidRuleStatus {
                id: self.id.clone(),
                status: status.clone(),
            });
        }

        if !self.has_action() {
            return Err(ValidationErr::MissingLifecycleAction(self.id.clone()));
        }

        if self.transitions.iter().any(|t| t.storage_class.is_empty()) {
            return Err(ValidationErr::EmptyStorageClass {
                id: self.id.clone(),
                action: "Transition",
            });
        }

        if self
            .noncurrent_version_transitions
            .iter()
            .any(|t| t.storage_class.is_empty())
        {
            return Err(ValidationErr::EmptyStorageClass {
                id: self.id.clone(),
                action: "NoncurrentVersionTransition",
            });
        }

        if self.transitions.iter().any(|t| t.days < 0) {
            return Err(ValidationErr::NegativeDays {
                id: self.id.clone(),
                field: "Transition/Days",
            });
        }

        if self.expiration.as_ref().is_some_and(|e| e.days <= 0) {
            return Err(ValidationErr::NonPositiveDays {
                id: self.id.clone(),
                field: "Expiration/Days",
            });
        }

        if self
            .noncurrent_version_transitions
            .iter()
            .any(|t| t.noncurrent_days <= 0)
        {
            return Err(ValidationErr::NonPositiveDays {
                id: self.id.clone(),
                field: "NoncurrentVersionTransition/NoncurrentDays",
            });
        }

        if self
            .noncurrent_version_expiration
            .as_ref()
            .is_some_and(|e| e.noncurrent_days <= 0)
        {
            return Err(ValidationErr::NonPositiveDays {
                id: self.id.clone(),
                field: "NoncurrentVersionExpiration/NoncurrentDays",
            });
        }

        Ok(())
    }
}

/// Reads a day count; an absent or blank element counts as zero.
fn parse_days(parent: &Element, tag: &str, field: &'static str) -> Result<i64, DecodeErr> {
    match get_text_option(parent, tag) {
        None => Ok(0),
        Some(text) if text.trim().is_empty() => Ok(0),
        Some(text) => text
            .trim()
            .parse::<i64>()
            .map_err(|source| DecodeErr::InvalidInteger {
                field,
                value: text,
                source,
            }),
    }
}

fn text_element(name: &str, text: impl Into<String>) -> Element {
    let mut elem = Element::new(name);
    let text = text.into();
    if !text.is_empty() {
        elem.children.push(XMLNode::Text(text));
    }
    elem
}

fn push_child(parent: &mut Element, child: Element) {
    parent.children.push(XMLNode::Element(child));
}
