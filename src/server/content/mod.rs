//! External content sources and the mounts they are proxied under.
//!
//! A [`ContentSource`] pairs a base URL with an optional mount path. Inbound routes under the
//! mount are translated to upstream URLs by stripping the mount and joining the remainder onto
//! the base URL. The router registers proxy routes from the same mount constants, so a route
//! and its stripped prefix always agree.

pub mod merge;

use reqwest::Url;

use crate::{
    model::content::ContentSourceKind,
    server::{config::Config, error::content::ContentError},
};

/// Mount of the D&D 5e SRD API proxy
pub static SRD_MOUNT: &str = "/system/dnd5e/api";
/// Mount of the 5eTools site proxy
pub static TOOLS_MOUNT: &str = "/system/dnd5e/tool-api";
/// Mount of the 5eTools data proxy
pub static TOOLS_DATA_MOUNT: &str = "/play/dnd5e/data";

/// An upstream content API and where it is mounted on this server.
#[derive(Clone, Debug)]
pub struct ContentSource {
    kind: ContentSourceKind,
    mount: Option<&'static str>,
    base_url: Url,
}

impl ContentSource {
    /// Creates a source, normalizing `base_url` to end with `/` so relative joins stay under it
    pub fn new(
        kind: ContentSourceKind,
        mount: Option<&'static str>,
        base_url: &str,
    ) -> Result<Self, oauth2::url::ParseError> {
        let mut base_url = Url::parse(base_url)?;
        base_url.set_query(None);
        base_url.set_fragment(None);

        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        Ok(Self {
            kind,
            mount,
            base_url,
        })
    }

    /// Which upstream this is, also the namespace its overrides are stored under
    pub fn kind(&self) -> ContentSourceKind {
        self.kind
    }

    /// Base URL, always ending with `/`
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Returns the part of `path` after this source's mount.
    ///
    /// The mount must match on a segment boundary: `/play/dnd5e/data/spells.json` matches
    /// `/play/dnd5e/data` but `/play/dnd5e/database` does not.
    pub fn strip_mount<'p>(&self, path: &'p str) -> Option<&'p str> {
        let rest = path.strip_prefix(self.mount?)?;

        (rest.is_empty() || rest.starts_with('/')).then_some(rest)
    }

    /// Resolves a resource path relative to the base URL and forwards `query`.
    ///
    /// Fails with [`ContentError::RouteNotFound`] when the result would leave the base URL.
    pub fn resolve(&self, resource: &str, query: Option<&str>) -> Result<Url, ContentError> {
        self.join_within_base(resource.trim_start_matches('/'), query)
    }

    /// Resolves an inbound route under this source's mount
    pub fn resolve_route(&self, route: &str, query: Option<&str>) -> Result<Url, ContentError> {
        let resource = self
            .strip_mount(route)
            .ok_or_else(|| ContentError::RouteNotFound(route.to_string()))?;

        self.resolve(resource, query)
    }

    /// Resolves a reference returned by the upstream API itself.
    ///
    /// The SRD API links resources with host-absolute paths such as `/api/skills/acrobatics`.
    pub fn resolve_reference(&self, reference: &str) -> Result<Url, ContentError> {
        self.join_within_base(reference, None)
    }

    /// Key under which overrides for `url` are stored: its path relative to the base URL
    pub fn resource_key(&self, url: &Url) -> String {
        url.path()
            .strip_prefix(self.base_url.path())
            .unwrap_or(url.path())
            .to_string()
    }

    fn join_within_base(&self, reference: &str, query: Option<&str>) -> Result<Url, ContentError> {
        let not_found = || ContentError::RouteNotFound(reference.to_string());

        let mut url = self.base_url.join(reference).map_err(|_| not_found())?;
        url.set_fragment(None);

        if !url.as_str().starts_with(self.base_url.as_str()) {
            return Err(not_found());
        }

        url.set_query(query.filter(|query| !query.is_empty()));

        Ok(url)
    }
}

/// Every content source the server talks to.
#[derive(Clone, Debug)]
pub struct ContentSources {
    /// D&D 5e SRD API
    pub srd: ContentSource,
    /// 5eTools site
    pub tools: ContentSource,
    /// 5eTools JSON data
    pub tools_data: ContentSource,
    /// World Anvil API, reached only through its own endpoints
    pub world_anvil: ContentSource,
}

impl ContentSources {
    /// Builds every source from the configured base URLs
    pub fn from_config(config: &Config) -> Result<Self, oauth2::url::ParseError> {
        Ok(Self {
            srd: ContentSource::new(ContentSourceKind::Srd, Some(SRD_MOUNT), &config.srd_api_url)?,
            tools: ContentSource::new(
                ContentSourceKind::Tools,
                Some(TOOLS_MOUNT),
                &config.five_e_tools_url,
            )?,
            tools_data: ContentSource::new(
                ContentSourceKind::ToolsData,
                Some(TOOLS_DATA_MOUNT),
                &config.five_e_tools_data_url,
            )?,
            world_anvil: ContentSource::new(
                ContentSourceKind::WorldAnvil,
                None,
                &config.world_anvil_api_url,
            )?,
        })
    }

    /// Source for `kind`
    pub fn get(&self, kind: ContentSourceKind) -> &ContentSource {
        match kind {
            ContentSourceKind::Srd => &self.srd,
            ContentSourceKind::Tools => &self.tools,
            ContentSourceKind::ToolsData => &self.tools_data,
            ContentSourceKind::WorldAnvil => &self.world_anvil,
        }
    }

    /// Sources that are reachable through a proxy mount
    pub fn mounted(&self) -> [&ContentSource; 3] {
        [&self.srd, &self.tools, &self.tools_data]
    }

    /// Finds the mounted source serving an inbound route
    pub fn for_route(&self, route: &str) -> Option<&ContentSource> {
        self.mounted()
            .into_iter()
            .find(|source| source.strip_mount(route).is_some())
    }
}
