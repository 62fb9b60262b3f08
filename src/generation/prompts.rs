use crate::models::{Platform, Tone};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlatformRules {
    pub hashtags: &'static str,
    pub emojis: &'static str,
    pub max_chars: u32,
    pub call_to_action: &'static str,
}

pub fn platform_rules(platform: &Platform) -> PlatformRules {
    match platform {
        Platform::Instagram => PlatformRules {
            hashtags: "Include 5-10 relevant hashtags at the end",
            emojis: "Use 3-5 emojis throughout the caption",
            max_chars: 2200,
            call_to_action: "End with a call-to-action asking followers to like, comment or share",
        },
        Platform::Facebook => PlatformRules {
            hashtags: "Include 2-3 hashtags at the end",
            emojis: "Use 1-3 emojis",
            max_chars: 500,
            call_to_action: "Ask the audience a question to encourage comments",
        },
        Platform::Twitter => PlatformRules {
            hashtags: "Include 1-2 hashtags",
            emojis: "Use 1-2 emojis",
            max_chars: 280,
            call_to_action: "Invite readers to retweet or reply",
        },
        Platform::Linkedin => PlatformRules {
            hashtags: "Include 3-5 professional hashtags at the end",
            emojis: "Use at most 2 emojis",
            max_chars: 1300,
            call_to_action: "Close by inviting professional discussion in the comments",
        },
        Platform::Custom(_) => PlatformRules {
            hashtags: "Include 3-5 relevant hashtags",
            emojis: "Use a few fitting emojis",
            max_chars: 500,
            call_to_action: "End with a short call-to-action",
        },
    }
}

fn tone_description(tone: &Tone) -> String {
    match tone {
        Tone::Inspirational => "inspirational, uplifting and motivating".to_string(),
        Tone::Professional => "professional, credible and concise".to_string(),
        Tone::Casual => "casual, friendly and conversational".to_string(),
        Tone::Humorous => "humorous, witty and light-hearted".to_string(),
        Tone::Educational => "educational, clear and informative".to_string(),
        Tone::Custom(name) => name.clone(),
    }
}

fn image_style(platform: &Platform) -> &'static str {
    match platform {
        Platform::Instagram => {
            "aesthetic, vibrant colors, trendy lifestyle photography, eye-catching composition"
        }
        Platform::Facebook => "warm, engaging, community-oriented, bright and inviting scene",
        Platform::Twitter => "bold, striking, minimal composition, attention-grabbing",
        Platform::Linkedin => "professional, corporate, clean modern office aesthetic",
        Platform::Custom(_) => "high quality, visually appealing, well composed",
    }
}

pub fn image_prompt(topic: &str, platform: &Platform) -> String {
    format!(
        "{}, {}, high quality, detailed, social media post image, no text",
        topic,
        image_style(platform)
    )
}

pub fn caption_prompt(
    topic: &str,
    platform: &Platform,
    tone: &Tone,
    instructions: Option<&str>,
) -> String {
    let rules = platform_rules(platform);
    let mut prompt = format!(
        "Write a social media caption for {} about \"{}\".\n\n\
         Requirements:\n\
         - {}\n\
         - {}\n\
         - Keep it under {} characters\n\
         - {}\n\
         - Use a {} tone\n",
        platform,
        topic,
        rules.hashtags,
        rules.emojis,
        rules.max_chars,
        rules.call_to_action,
        tone_description(tone),
    );

    if let Some(extra) = instructions {
        prompt.push_str(&format!("- Additional instructions: {}\n", extra));
    }

    prompt.push_str("\nReturn only the caption text, without quotes or any introduction.");
    prompt
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rules_differ_per_platform() {
        let all: Vec<PlatformRules> = Platform::known().iter().map(platform_rules).collect();
        for (i, a) in all.iter().enumerate() {
            for b in &all[i + 1..] {
                assert_ne!(a, b);
            }
        }
        assert_eq!(platform_rules(&Platform::Twitter).max_chars, 280);
    }

    #[test]
    fn test_caption_prompt_embeds_inputs() {
        let prompt = caption_prompt(
            "remote work",
            &Platform::Linkedin,
            &Tone::Professional,
            Some("mention productivity"),
        );
        assert!(prompt.contains("\"remote work\""));
        assert!(prompt.contains("under 1300 characters"));
        assert!(prompt.contains("professional, credible"));
        assert!(prompt.contains("Additional instructions: mention productivity"));
    }

    #[test]
    fn test_image_prompt_is_platform_tailored() {
        assert!(image_prompt("coffee", &Platform::Instagram).contains("vibrant colors"));
        assert!(image_prompt("coffee", &Platform::Linkedin).contains("corporate"));
        assert!(image_prompt("coffee", &Platform::Twitter).starts_with("coffee, "));
    }
}
