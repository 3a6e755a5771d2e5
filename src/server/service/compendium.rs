//! Assembles the D&D 5e compendium from the SRD API.
//!
//! The SRD index maps each section name to its listing URL. Simple sections are replaced by
//! their listing, expanded sections additionally have every listing entry replaced by the
//! entry's detail document.

use futures::future::try_join_all;
use serde_json::{Map, Value};

use crate::server::{
    content::ContentSource,
    error::{content::ContentError, Error},
    service::content::ContentService,
};

/// Sections replaced by their listing
pub static LISTED_SECTIONS: &[&str] = &[
    "ability-scores",
    "alignments",
    "magic-schools",
    "skills",
    "weapon-properties",
];

/// Sections replaced by their listing with each entry expanded to its detail document
pub static EXPANDED_SECTIONS: &[&str] = &["equipment-categories", "rule-sections"];

/// Assembles the SRD compendium from the SRD index and its sections
pub struct CompendiumService<'a> {
    content: ContentService<'a>,
    srd: &'a ContentSource,
}

impl<'a> CompendiumService<'a> {
    /// Creates a new instance of [`CompendiumService`]
    pub fn new(content: ContentService<'a>, srd: &'a ContentSource) -> Self {
        Self { content, srd }
    }

    /// Fetches the SRD index with the compendium sections filled in.
    ///
    /// All section fetches run concurrently, the first failure fails the whole compendium.
    pub async fn compendium(&self) -> Result<Value, Error> {
        let index_url = self.srd.resolve("", None)?;
        let Value::Object(mut index) = self.content.get(self.srd, index_url.clone()).await? else {
            return Err(ContentError::UnexpectedShape(index_url).into());
        };

        let listed = try_join_all(
            LISTED_SECTIONS
                .iter()
                .map(|section| self.listing(&index, section)),
        );
        let expanded = try_join_all(
            EXPANDED_SECTIONS
                .iter()
                .map(|section| self.expanded_listing(&index, section)),
        );
        let (listed, expanded) = futures::try_join!(listed, expanded)?;

        for (section, listing) in LISTED_SECTIONS.iter().zip(listed) {
            index.insert(section.to_string(), listing);
        }
        for (section, listing) in EXPANDED_SECTIONS.iter().zip(expanded) {
            index.insert(section.to_string(), listing);
        }

        Ok(Value::Object(index))
    }

    async fn listing(&self, index: &Map<String, Value>, section: &str) -> Result<Value, Error> {
        // The index links sections with host-absolute paths, fall back to the section name
        let url = match index.get(section).and_then(Value::as_str) {
            Some(reference) => self.srd.resolve_reference(reference)?,
            None => self.srd.resolve(section, None)?,
        };

        self.content.get(self.srd, url).await
    }

    async fn expanded_listing(
        &self,
        index: &Map<String, Value>,
        section: &str,
    ) -> Result<Value, Error> {
        let mut listing = self.listing(index, section).await?;

        let Some(results) = listing.get_mut("results").and_then(Value::as_array_mut) else {
            return Ok(listing);
        };

        let details = try_join_all(results.iter().map(|entry| self.detail(entry))).await?;
        for (entry, detail) in results.iter_mut().zip(details) {
            if let Some(detail) = detail {
                *entry = detail;
            }
        }

        Ok(listing)
    }

    /// Fetches an entry's detail document, `None` for entries without a `url`
    async fn detail(&self, entry: &Value) -> Result<Option<Value>, Error> {
        let Some(reference) = entry.get("url").and_then(Value::as_str) else {
            return Ok(None);
        };
        let url = self.srd.resolve_reference(reference)?;

        Ok(Some(self.content.get(self.srd, url).await?))
    }
}
