use crate::domain::model::{CardTheme, LoveCard, NewLoveCard};
use crate::domain::ports::LoveRepository;
use crate::utils::error::{LoveError, Result};
use crate::utils::validation::{is_input_whitespace, require_non_blank};
use rand::Rng;

const SHARE_CODE_ALPHABET: &[u8] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const SHARE_CODE_LEN: usize = 8;

/// Eight upper-case base-36 characters.
pub fn generate_share_code() -> String {
    let mut rng = rand::thread_rng();
    (0..SHARE_CODE_LEN)
        .map(|_| SHARE_CODE_ALPHABET[rng.gen_range(0..SHARE_CODE_ALPHABET.len())] as char)
        .collect()
}

pub struct CardService<R: LoveRepository> {
    repository: R,
}

impl<R: LoveRepository> CardService<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    pub async fn create_card(
        &self,
        partner_name: &str,
        message: &str,
        theme: CardTheme,
        photo_url: Option<&str>,
    ) -> Result<LoveCard> {
        require_non_blank("partner_name", partner_name)?;
        require_non_blank("message", message)?;

        let card = NewLoveCard {
            partner_name: partner_name.to_string(),
            message: message.to_string(),
            theme,
            photo_url: photo_url
                .map(|url| url.trim_matches(is_input_whitespace))
                .filter(|url| !url.is_empty())
                .map(str::to_string),
            share_code: generate_share_code(),
        };

        tracing::debug!(share_code = %card.share_code, theme = %theme, "Creating love card");
        let stored = self.repository.create_card(card).await?;
        tracing::info!(share_code = %stored.share_code, "Love card saved");
        Ok(stored)
    }

    pub async fn get_card(&self, share_code: &str) -> Result<LoveCard> {
        require_non_blank("share_code", share_code)?;

        self.repository
            .get_card_by_share_code(share_code.trim())
            .await?
            .ok_or_else(|| LoveError::NotFound {
                what: format!("card with share code '{}'", share_code.trim()),
            })
    }
}
