//! Response bodies for the client endpoint.
//!
//! Field names are the ones the game client parses; several fields are
//! required by the client but carry no information here and are always
//! sent as zero or false.

use serde::Serialize;

use crate::events::{EventSchedule, ScheduledEvent};
use crate::login::{CharacterSummary, LoginOutcome, SessionDescriptor, WorldDescriptor};

// ============================================================================
// Login
// ============================================================================

/// Successful login.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub session: SessionInfo,
    pub playdata: PlayData,
}

/// Session block of a login response.
#[derive(Debug, Serialize)]
pub struct SessionInfo {
    #[serde(rename = "sessionkey")]
    pub session_key: String,
    pub status: &'static str,
    #[serde(rename = "lastlogintime")]
    pub last_login_time: i64,
    #[serde(rename = "premiumuntil")]
    pub premium_until: i64,
    #[serde(rename = "ispremium")]
    pub is_premium: bool,
    #[serde(rename = "isreturner")]
    pub is_returner: bool,
    #[serde(rename = "returnernotification")]
    pub returner_notification: bool,
    #[serde(rename = "showrewardnews")]
    pub show_reward_news: bool,
    #[serde(rename = "fpstracking")]
    pub fps_tracking: bool,
    #[serde(rename = "optiontracking")]
    pub option_tracking: bool,
    #[serde(rename = "emailcoderequest")]
    pub email_code_request: bool,
    #[serde(rename = "tournamentticketpurchasestate")]
    pub tournament_ticket_purchase_state: i64,
}

/// Worlds and characters of a login response.
#[derive(Debug, Serialize)]
pub struct PlayData {
    pub worlds: Vec<WorldInfo>,
    pub characters: Vec<CharacterInfo>,
}

/// A world entry.
#[derive(Debug, Serialize)]
pub struct WorldInfo {
    pub id: i64,
    pub name: String,
    #[serde(rename = "externaladdress")]
    pub external_address: String,
    #[serde(rename = "externalport")]
    pub external_port: u16,
    #[serde(rename = "externaladdressprotected")]
    pub external_address_protected: String,
    #[serde(rename = "externalportprotected")]
    pub external_port_protected: u16,
    #[serde(rename = "externaladdressunprotected")]
    pub external_address_unprotected: String,
    #[serde(rename = "externalportunprotected")]
    pub external_port_unprotected: u16,
    pub location: String,
    #[serde(rename = "pvptype")]
    pub pvp_type: String,
    #[serde(rename = "anticheatprotection")]
    pub anti_cheat_protection: bool,
    #[serde(rename = "restrictedstore")]
    pub restricted_store: bool,
    #[serde(rename = "istournamentworld")]
    pub is_tournament_world: bool,
    #[serde(rename = "previewstate")]
    pub preview_state: i64,
    #[serde(rename = "currenttournamentphase")]
    pub current_tournament_phase: i64,
}

/// A character entry.
#[derive(Debug, Serialize)]
pub struct CharacterInfo {
    #[serde(rename = "worldid")]
    pub world_id: i64,
    pub name: String,
    pub level: i64,
    pub vocation: &'static str,
    #[serde(rename = "outfitid")]
    pub outfit_id: i64,
    #[serde(rename = "headcolor")]
    pub head_color: i64,
    #[serde(rename = "torsocolor")]
    pub torso_color: i64,
    #[serde(rename = "legscolor")]
    pub legs_color: i64,
    #[serde(rename = "detailcolor")]
    pub detail_color: i64,
    #[serde(rename = "addonsflags")]
    pub addons_flags: i64,
    #[serde(rename = "dailyrewardstate")]
    pub daily_reward_state: i64,
    #[serde(rename = "ismale")]
    pub is_male: bool,
    pub tutorial: bool,
    #[serde(rename = "ishidden")]
    pub is_hidden: bool,
    #[serde(rename = "ismaincharacter")]
    pub is_main_character: bool,
    #[serde(rename = "istournamentparticipant")]
    pub is_tournament_participant: bool,
    #[serde(rename = "remainingdailytournamentplaytime")]
    pub remaining_daily_tournament_playtime: i64,
}

impl From<SessionDescriptor> for SessionInfo {
    fn from(session: SessionDescriptor) -> Self {
        Self {
            session_key: session.session_key,
            status: session.status.as_str(),
            last_login_time: session.last_login,
            premium_until: session.premium_until,
            is_premium: session.is_premium,
            is_returner: false,
            returner_notification: false,
            show_reward_news: false,
            fps_tracking: false,
            option_tracking: false,
            email_code_request: false,
            tournament_ticket_purchase_state: 0,
        }
    }
}

impl From<WorldDescriptor> for WorldInfo {
    fn from(world: WorldDescriptor) -> Self {
        Self {
            id: world.id,
            name: world.name,
            external_address: world.external_address,
            external_port: world.external_port,
            external_address_protected: world.external_address_protected,
            external_port_protected: world.external_port_protected,
            external_address_unprotected: world.external_address_unprotected,
            external_port_unprotected: world.external_port_unprotected,
            location: world.location,
            pvp_type: world.pvp_type,
            anti_cheat_protection: world.anti_cheat_protection,
            restricted_store: world.restricted_store,
            is_tournament_world: false,
            preview_state: 0,
            current_tournament_phase: 0,
        }
    }
}

impl From<CharacterSummary> for CharacterInfo {
    fn from(character: CharacterSummary) -> Self {
        Self {
            world_id: character.world_id,
            name: character.name,
            level: character.level,
            vocation: character.vocation,
            outfit_id: character.look_type,
            head_color: character.look_head,
            torso_color: character.look_body,
            legs_color: character.look_legs,
            detail_color: character.look_feet,
            addons_flags: character.look_addons,
            daily_reward_state: character.daily_reward_state,
            is_male: character.is_male,
            tutorial: character.tutorial,
            is_hidden: character.is_hidden,
            is_main_character: character.is_main_character,
            is_tournament_participant: false,
            remaining_daily_tournament_playtime: 0,
        }
    }
}

impl From<LoginOutcome> for LoginResponse {
    fn from(outcome: LoginOutcome) -> Self {
        Self {
            session: outcome.session.into(),
            playdata: PlayData {
                worlds: outcome.worlds.into_iter().map(WorldInfo::from).collect(),
                characters: outcome
                    .characters
                    .into_iter()
                    .map(CharacterInfo::from)
                    .collect(),
            },
        }
    }
}

// ============================================================================
// Auxiliary requests
// ============================================================================

/// Boosted creature of the day.
#[derive(Debug, Serialize)]
pub struct BoostedCreatureResponse {
    #[serde(rename = "boostedcreature")]
    pub boosted_creature: bool,
    #[serde(rename = "raceid")]
    pub race_id: i64,
}

/// Server statistics shown on the client's start screen.
#[derive(Debug, Serialize)]
pub struct CacheInfoResponse {
    #[serde(rename = "playersonline")]
    pub players_online: i64,
    #[serde(rename = "twitchstreams")]
    pub twitch_streams: i64,
    #[serde(rename = "twitchviewer")]
    pub twitch_viewers: i64,
    #[serde(rename = "gamingyoutubestreams")]
    pub gaming_youtube_streams: i64,
    #[serde(rename = "gamingyoutubeviewer")]
    pub gaming_youtube_viewers: i64,
}

impl CacheInfoResponse {
    /// Statistics with only the online player count filled in.
    pub fn new(players_online: i64) -> Self {
        Self {
            players_online,
            twitch_streams: 0,
            twitch_viewers: 0,
            gaming_youtube_streams: 0,
            gaming_youtube_viewers: 0,
        }
    }
}

/// Event calendar.
#[derive(Debug, Serialize)]
pub struct EventScheduleResponse {
    #[serde(rename = "eventlist")]
    pub event_list: Vec<EventInfo>,
    #[serde(rename = "lastupdatetimestamp")]
    pub last_update_timestamp: i64,
}

/// A calendar entry.
#[derive(Debug, Serialize)]
pub struct EventInfo {
    pub name: String,
    #[serde(rename = "startdate")]
    pub start_date: i64,
    #[serde(rename = "enddate")]
    pub end_date: i64,
    #[serde(rename = "specialevent")]
    pub special_event: i64,
    #[serde(rename = "displaypriority")]
    pub display_priority: i64,
    #[serde(rename = "isseasonal")]
    pub is_seasonal: bool,
    pub description: String,
    #[serde(rename = "colorlight")]
    pub color_light: String,
    #[serde(rename = "colordark")]
    pub color_dark: String,
}

impl From<ScheduledEvent> for EventInfo {
    fn from(event: ScheduledEvent) -> Self {
        Self {
            name: event.name,
            start_date: event.start_date,
            end_date: event.end_date,
            special_event: event.special_event,
            display_priority: event.display_priority,
            is_seasonal: event.is_seasonal,
            description: event.description,
            color_light: event.color_light,
            color_dark: event.color_dark,
        }
    }
}

impl From<EventSchedule> for EventScheduleResponse {
    fn from(schedule: EventSchedule) -> Self {
        Self {
            event_list: schedule.events.into_iter().map(EventInfo::from).collect(),
            last_update_timestamp: schedule.last_update,
        }
    }
}
