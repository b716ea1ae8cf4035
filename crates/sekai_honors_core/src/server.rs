//! Game server regions.

use sekai_honors_error::DatabaseError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use strum::IntoEnumIterator;

/// A region-specific deployment of the game, used as a partition key.
///
/// # Examples
///
/// ```
/// use sekai_honors_core::Server;
///
/// let server: Server = "JP".parse().unwrap();
/// assert_eq!(server, Server::Jp);
/// assert_eq!(server.to_string(), "jp");
/// assert_eq!(server.masterdata_repository(), "haruki-sekai-master");
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    strum::AsRefStr,
    strum::IntoStaticStr,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum Server {
    /// Simplified Chinese
    Cn,
    /// Japanese
    Jp,
    /// English
    En,
    /// Traditional Chinese
    Tw,
    /// Korean
    Kr,
}

impl Server {
    /// Every known server, in declaration order.
    pub fn all() -> Vec<Server> {
        Server::iter().collect()
    }

    /// The lowercase tag stored in every table's `server` column.
    pub fn tag(&self) -> &'static str {
        (*self).into()
    }

    /// Name of the upstream masterdata repository for this server.
    pub fn masterdata_repository(&self) -> &'static str {
        match self {
            Server::Cn => "haruki-sekai-sc-master",
            Server::Jp => "haruki-sekai-master",
            Server::En => "haruki-sekai-en-master",
            Server::Tw => "haruki-sekai-tc-master",
            Server::Kr => "haruki-sekai-kr-master",
        }
    }

    /// Human readable name in the server's own language.
    pub fn display_name(&self) -> &'static str {
        match self {
            Server::Cn => "简体中文",
            Server::Jp => "日本語",
            Server::En => "English",
            Server::Tw => "繁體中文",
            Server::Kr => "한국어",
        }
    }

    /// Parse a stored tag, rejecting unknown values as malformed input.
    ///
    /// Unlike [`FromStr`], only the exact lowercase tag is accepted, so a
    /// stored `server` column always matches the tag reads filter on.
    #[track_caller]
    pub fn parse_tag(tag: &str) -> Result<Server, DatabaseError> {
        match Server::from_str(tag) {
            Ok(server) if server.tag() == tag => Ok(server),
            Ok(server) => Err(DatabaseError::malformed(format!(
                "server tag '{}' must be written as '{}'",
                tag,
                server.tag()
            ))),
            Err(_) => Err(DatabaseError::malformed(format!("unknown server tag '{}'", tag))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_servers_round_trip_through_tags() {
        for server in Server::all() {
            assert_eq!(Server::parse_tag(server.tag()).unwrap(), server);
        }
        assert_eq!(Server::all().len(), 5);
    }

    #[test]
    fn unknown_tag_is_malformed() {
        let err = Server::parse_tag("eu").unwrap_err();
        assert!(err.to_string().contains("unknown server tag 'eu'"));
    }

    #[test]
    fn stored_tags_are_case_sensitive() {
        assert_eq!("JP".parse::<Server>().unwrap(), Server::Jp);
        let err = Server::parse_tag("JP").unwrap_err();
        assert!(matches!(
            err.kind,
            sekai_honors_error::DatabaseErrorKind::MalformedInput(_)
        ));
        assert!(err.to_string().contains("'jp'"));
    }
}
