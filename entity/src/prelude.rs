pub use super::campaign::Entity as Campaign;
pub use super::character::Entity as Character;
pub use super::content_override::Entity as ContentOverride;
pub use super::party::Entity as Party;
pub use super::party_campaign::Entity as PartyCampaign;
pub use super::party_character::Entity as PartyCharacter;
pub use super::session_event::Entity as SessionEvent;
pub use super::user::Entity as User;
