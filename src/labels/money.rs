//! "Public money" tags showing who is backing a side.
use super::seed::{game_seed, GameId, Seed};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PublicMoney {
    SharpMoney,
    PublicFade,
    PublicFavorite,
}

impl PublicMoney {
    /// Bucket a seed: `[..40)`, `[40,70)`, then everything else.
    pub fn from_seed(seed: Seed) -> Self {
        if seed.is_below(40) {
            PublicMoney::SharpMoney
        } else if seed.is_below(70) {
            PublicMoney::PublicFade
        } else {
            PublicMoney::PublicFavorite
        }
    }

    pub fn text(&self) -> &'static str {
        match self {
            PublicMoney::SharpMoney => "Sharp Money",
            PublicMoney::PublicFade => "Public Fade",
            PublicMoney::PublicFavorite => "Public Favorite",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            PublicMoney::SharpMoney => "Professional bettors favor this",
            PublicMoney::PublicFade => "Betting against public opinion",
            PublicMoney::PublicFavorite => "Popular with casual bettors",
        }
    }

    pub fn tag(&self) -> PublicMoneyTag {
        PublicMoneyTag {
            text: self.text().to_string(),
            description: self.description().to_string(),
        }
    }
}

/// Annotation record produced by [`public_money_tag`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicMoneyTag {
    pub text: String,
    pub description: String,
}

pub fn public_money_tag(game_id: &GameId) -> PublicMoneyTag {
    PublicMoney::from_seed(game_seed(game_id)).tag()
}
