//! Party lookups with members and campaigns attached.

use std::collections::HashMap;

use sea_orm::DatabaseConnection;

use crate::{
    model::party::PartyDto,
    server::{
        data::{character::CharacterRepository, party::PartyRepository},
        error::Error,
    },
};

/// Party lookups over [`PartyRepository`](crate::server::data::party::PartyRepository)
pub struct PartyService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PartyService<'a> {
    /// Creates a new instance of [`PartyService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Parties containing any character owned by the user
    pub async fn get_user_parties(&self, user_id: &str) -> Result<Vec<PartyDto>, Error> {
        let character_ids: Vec<String> = CharacterRepository::new(self.db)
            .get_by_user(user_id)
            .await?
            .into_iter()
            .map(|character| character.id)
            .collect();

        self.get_character_parties(&character_ids).await
    }

    /// Parties containing any of the given characters, with their members and campaigns
    pub async fn get_character_parties(
        &self,
        character_ids: &[String],
    ) -> Result<Vec<PartyDto>, Error> {
        let party_repo = PartyRepository::new(self.db);

        let parties = party_repo.get_by_character_ids(character_ids).await?;
        if parties.is_empty() {
            return Ok(Vec::new());
        }

        let party_ids: Vec<String> = parties.iter().map(|party| party.id.clone()).collect();

        let mut members: HashMap<String, Vec<String>> = HashMap::new();
        for member in party_repo.get_characters(&party_ids).await? {
            members
                .entry(member.party_id)
                .or_default()
                .push(member.character_id);
        }

        let mut campaigns: HashMap<String, Vec<String>> = HashMap::new();
        for link in party_repo.get_campaigns(&party_ids).await? {
            campaigns
                .entry(link.party_id)
                .or_default()
                .push(link.campaign_id);
        }

        Ok(parties
            .into_iter()
            .map(|party| PartyDto {
                character_ids: members.remove(&party.id).unwrap_or_default(),
                campaign_ids: campaigns.remove(&party.id).unwrap_or_default(),
                id: party.id,
                name: party.name,
                slug: party.slug,
                parent_id: party.parent_id,
                created_at: party.created_at,
            })
            .collect())
    }
}
