//! Content-type profiles — the static table of target platforms.
//!
//! Each platform carries a label, an optional hard character limit, a line of
//! stylistic notes, and a fixed set of directive lines the prompt composer
//! appends. The set of platforms is closed: adding one is a compile-checked,
//! single-point change (every accessor matches exhaustively).

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A target platform profile for content transformation.
///
/// `General` is the default and contributes no prompt modifier. Unknown wire
/// ids deserialize to `General` so a stale or misspelled profile id degrades
/// to neutral behavior instead of failing the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Platform {
    #[default]
    General,
    Twitter,
    Linkedin,
    Instagram,
    Tiktok,
    Facebook,
    Email,
    Blog,
    Chat,
    Youtube,
}

impl Serialize for Platform {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.id())
    }
}

impl<'de> Deserialize<'de> for Platform {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let id = <std::borrow::Cow<'de, str> as Deserialize>::deserialize(deserializer)?;
        Ok(Platform::from_id(&id))
    }
}

impl Platform {
    /// Parses a wire id; unknown ids map to `General`.
    pub fn from_id(id: &str) -> Self {
        match id {
            "twitter" => Platform::Twitter,
            "linkedin" => Platform::Linkedin,
            "instagram" => Platform::Instagram,
            "tiktok" => Platform::Tiktok,
            "facebook" => Platform::Facebook,
            "email" => Platform::Email,
            "blog" => Platform::Blog,
            "chat" => Platform::Chat,
            "youtube" => Platform::Youtube,
            _ => Platform::General,
        }
    }

    /// Wire id, matching what the browser UI sends and what history stores.
    pub fn id(&self) -> &'static str {
        match self {
            Platform::General => "general",
            Platform::Twitter => "twitter",
            Platform::Linkedin => "linkedin",
            Platform::Instagram => "instagram",
            Platform::Tiktok => "tiktok",
            Platform::Facebook => "facebook",
            Platform::Email => "email",
            Platform::Blog => "blog",
            Platform::Chat => "chat",
            Platform::Youtube => "youtube",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Platform::General => "General",
            Platform::Twitter => "Twitter/X",
            Platform::Linkedin => "LinkedIn",
            Platform::Instagram => "Instagram",
            Platform::Tiktok => "TikTok",
            Platform::Facebook => "Facebook",
            Platform::Email => "Email",
            Platform::Blog => "Blog/Article",
            Platform::Chat => "Chat/Message",
            Platform::Youtube => "YouTube",
        }
    }

    /// Hard character limit for the platform, where one exists.
    pub fn char_limit(&self) -> Option<u32> {
        match self {
            Platform::Twitter => Some(280),
            Platform::Linkedin => Some(3000),
            Platform::Instagram => Some(2200),
            Platform::Tiktok => Some(150),
            Platform::Facebook => Some(2000),
            Platform::Youtube => Some(1000),
            Platform::General | Platform::Email | Platform::Blog | Platform::Chat => None,
        }
    }

    /// One-line stylistic summary, included as the first modifier bullet.
    pub fn style_notes(&self) -> &'static str {
        match self {
            Platform::General => "Neutral and adaptive style",
            Platform::Twitter => "Concise, punchy, relevant hashtags, engages conversation",
            Platform::Linkedin => {
                "Professional, inspiring, storytelling, networking, personal development"
            }
            Platform::Instagram => "Visual, emojis, strategic hashtags, lifestyle, inspiring",
            Platform::Tiktok => "Young, trendy, challenges, music, viral, creative",
            Platform::Facebook => {
                "Community-focused, family-friendly, experience sharing, emotional"
            }
            Platform::Email => "Clear structure, catchy subject, CTA, polite and direct",
            Platform::Blog => "SEO optimized, narrative structure, informative, engaging",
            Platform::Chat => "Casual, friendly, conversational, occasional emojis",
            Platform::Youtube => {
                "Keywords, call to action, timestamps, links, community engagement"
            }
        }
    }

    /// Platform-specific directive lines appended to the prompt modifier.
    /// `General` contributes none.
    pub fn directives(&self) -> &'static [&'static str] {
        match self {
            Platform::General => &[],
            Platform::Twitter => &[
                "Use 1-3 relevant hashtags",
                "Encourage engagement (questions, opinions)",
                "Direct and punchy style",
            ],
            Platform::Linkedin => &[
                "Start with a catchy hook",
                "Include a professional lesson or insight",
                "End with a question for engagement",
                "Use emojis moderately",
            ],
            Platform::Instagram => &[
                "Integrate 3-5 relevant emojis",
                "Use 5-10 strategic hashtags",
                "Tell a visual story",
                "Encourage sharing",
            ],
            Platform::Tiktok => &[
                "Young and dynamic language",
                "Reference current trends",
                "Call to action (like, share, follow)",
                "Use expressive emojis",
            ],
            Platform::Facebook => &[
                "Friendly and personal tone",
                "Encourage comments and shares",
                "Evoke common experiences",
                "Use emojis for emotion",
            ],
            Platform::Email => &[
                "Clear and catchy subject",
                "Structure: intro, body, conclusion with CTA",
                "Professional but human tone",
                "Clear call to action",
            ],
            Platform::Blog => &[
                "SEO-optimized catchy title",
                "Introduction that poses the problem",
                "Structure in short paragraphs",
                "Conclusion with summary",
            ],
            Platform::Chat => &[
                "Casual and friendly tone",
                "Short and natural sentences",
                "Occasional emojis",
                "Conversational language",
            ],
            Platform::Youtube => &[
                "Include SEO keywords",
                "Encourage like, comment, subscribe",
                "Mention timestamps if relevant",
                "Community engagement call",
            ],
        }
    }
}

/// All platforms, in UI display order.
pub const ALL_PLATFORMS: &[Platform] = &[
    Platform::General,
    Platform::Twitter,
    Platform::Linkedin,
    Platform::Instagram,
    Platform::Tiktok,
    Platform::Facebook,
    Platform::Email,
    Platform::Blog,
    Platform::Chat,
    Platform::Youtube,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_profile_id_deserializes_to_general() {
        let p: Platform = serde_json::from_str("\"myspace\"").unwrap();
        assert_eq!(p, Platform::General, "unknown ids must degrade to General");
    }

    #[test]
    fn test_known_profile_id_round_trips() {
        let p: Platform = serde_json::from_str("\"twitter\"").unwrap();
        assert_eq!(p, Platform::Twitter);
        assert_eq!(serde_json::to_string(&p).unwrap(), "\"twitter\"");
    }

    #[test]
    fn test_char_limits_match_platform_rules() {
        assert_eq!(Platform::Twitter.char_limit(), Some(280));
        assert_eq!(Platform::Tiktok.char_limit(), Some(150));
        assert_eq!(Platform::Email.char_limit(), None);
        assert_eq!(Platform::General.char_limit(), None);
    }

    #[test]
    fn test_general_has_no_directives() {
        assert!(Platform::General.directives().is_empty());
    }

    #[test]
    fn test_every_non_general_platform_has_directives() {
        for p in ALL_PLATFORMS {
            if *p != Platform::General {
                let n = p.directives().len();
                assert!(
                    (3..=4).contains(&n),
                    "{} must carry 3-4 directive lines, got {n}",
                    p.id()
                );
            }
        }
    }
}
