//! Props for the server-rendered pages.
//!
//! Each method assembles everything one page needs for an authenticated user. Missing
//! records are reported as [`RequestError::NotFound`].

use crate::{
    model::{
        campaign::CampaignDto,
        character::CharacterDto,
        page::{CharacterPageProps, CompendiumPageProps, DashboardPageProps, WorldPageProps},
        user::UserDto,
    },
    server::{
        error::{request::RequestError, Error},
        model::app::AppState,
        service::{
            campaign::CampaignService, character::CharacterService,
            compendium::CompendiumService, content::ContentService, party::PartyService,
            user::UserService, world_anvil::WorldAnvilService,
        },
    },
};

/// Builds the props of each signed in page
pub struct PageService<'a> {
    state: &'a AppState,
}

impl<'a> PageService<'a> {
    /// Creates a new instance of [`PageService`]
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    /// Dashboard with the user's characters, parties and campaigns
    pub async fn dashboard(&self, user: UserDto) -> Result<DashboardPageProps, Error> {
        let db = &self.state.db;

        let characters = CharacterService::new(db).get_user_characters(&user.id).await?;
        let parties = PartyService::new(db).get_user_parties(&user.id).await?;
        let campaigns = CampaignService::new(db).get_gm_campaigns(&user.id).await?;

        Ok(DashboardPageProps {
            user,
            characters: characters.into_iter().map(CharacterDto::from).collect(),
            parties,
            campaigns: campaigns.into_iter().map(CampaignDto::from).collect(),
        })
    }

    /// Character sheet page.
    ///
    /// `world` comes from the first of the character's campaigns that links a World Anvil
    /// world. A failed world fetch is logged and leaves `world` empty.
    pub async fn character(
        &self,
        user: UserDto,
        slug: &str,
    ) -> Result<CharacterPageProps, Error> {
        let db = &self.state.db;

        let Some(character) = CharacterService::new(db).get_by_slug(slug).await? else {
            return Err(RequestError::NotFound("Character").into());
        };

        let parties = PartyService::new(db)
            .get_character_parties(std::slice::from_ref(&character.id))
            .await?;
        let party_ids: Vec<String> = parties.iter().map(|party| party.id.clone()).collect();
        let campaigns = CampaignService::new(db)
            .get_party_campaigns(&party_ids)
            .await?;

        let mut world = None;
        if let Some(world_id) = campaigns
            .iter()
            .find_map(|campaign| campaign.world_anvil_world_id.as_deref())
        {
            let token = self.world_anvil_token(&user).await?;

            match self.world_anvil(token.as_deref()).world(world_id).await {
                Ok(fetched) => world = Some(fetched),
                Err(e) => tracing::warn!(world_id, "Failed to fetch World Anvil world: {}", e),
            }
        }

        Ok(CharacterPageProps {
            user,
            character: character.into(),
            parties,
            campaigns: campaigns.into_iter().map(CampaignDto::from).collect(),
            world,
        })
    }

    /// D&D 5e compendium page with the expanded SRD compendium
    pub async fn compendium(&self, user: UserDto) -> Result<CompendiumPageProps, Error> {
        let db = &self.state.db;

        let characters = CharacterService::new(db).get_user_characters(&user.id).await?;
        let compendium = CompendiumService::new(
            ContentService::new(db, &self.state.http_client),
            &self.state.content.srd,
        )
        .compendium()
        .await?;

        Ok(CompendiumPageProps {
            user,
            characters: characters.into_iter().map(CharacterDto::from).collect(),
            compendium,
        })
    }

    /// World page for the campaign whose slug matches
    pub async fn world(&self, user: UserDto, slug: &str) -> Result<WorldPageProps, Error> {
        let Some(campaign) = CampaignService::new(&self.state.db).get_by_slug(slug).await? else {
            return Err(RequestError::NotFound("World").into());
        };
        let Some(world_id) = campaign.world_anvil_world_id.as_deref() else {
            return Err(RequestError::NotFound("World").into());
        };

        let token = self.world_anvil_token(&user).await?;
        let world_anvil = self.world_anvil(token.as_deref());
        let (world, block_folders) = futures::try_join!(
            world_anvil.world(world_id),
            world_anvil.block_folders(world_id)
        )?;

        Ok(WorldPageProps {
            user,
            campaign: campaign.into(),
            world,
            block_folders,
        })
    }

    async fn world_anvil_token(&self, user: &UserDto) -> Result<Option<String>, Error> {
        UserService::new(&self.state.db)
            .world_anvil_token(&user.id)
            .await
    }

    /// World Anvil service authenticated with `token`, or the application token when `None`
    fn world_anvil<'b>(&'b self, token: Option<&'b str>) -> WorldAnvilService<'b> {
        WorldAnvilService::new(
            ContentService::new(&self.state.db, &self.state.http_client),
            &self.state.world_anvil,
            token,
        )
    }
}
